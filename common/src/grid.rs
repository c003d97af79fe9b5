//! Row-major 2D grid addressed by `(row, col)`.

use std::ops::{Index, IndexMut};
use std::slice;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    cells: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Grid<T> {
    pub fn new(rows: usize, cols: usize, cells: Vec<T>) -> Self {
        assert_eq!(
            cells.len(),
            rows * cols,
            "cells length must equal rows * cols"
        );
        Self { cells, rows, cols }
    }

    /// Builds a grid by evaluating `f(row, col)` for every cell in row-major order.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(f(row, col));
            }
        }
        Self { cells, rows, cols }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn index_of(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols);
        row * self.cols + col
    }

    /// Inverse of [`Grid::index_of`].
    #[inline]
    pub fn position_of(&self, idx: usize) -> (usize, usize) {
        debug_assert!(idx < self.cells.len());
        (idx / self.cols, idx % self.cols)
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            Some(&self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    #[inline]
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    #[inline]
    pub fn cells_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.cells.iter()
    }

    /// Maps every cell into a new grid of the same shape.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            cells: self.cells.iter().map(f).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl<T: Clone> Grid<T> {
    pub fn new_filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            cells: vec![value; rows * cols],
            rows,
            cols,
        }
    }
}

impl<T: Default + Clone> Grid<T> {
    pub fn new_default(rows: usize, cols: usize) -> Self {
        Self::new_filled(rows, cols, T::default())
    }
}

impl Grid<bool> {
    /// Number of `true` cells.
    pub fn count_true(&self) -> usize {
        self.cells.iter().filter(|&&v| v).count()
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.cells[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.cells[row * self.cols + col]
    }
}

impl<T> Index<usize> for Grid<T> {
    type Output = T;

    #[inline]
    fn index(&self, idx: usize) -> &Self::Output {
        &self.cells[idx]
    }
}

impl<T> IndexMut<usize> for Grid<T> {
    #[inline]
    fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
        &mut self.cells[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stores_shape() {
        let grid = Grid::new(2, 3, vec![10, 20, 30, 40, 50, 60]);
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.shape(), (2, 3));
        assert_eq!(grid.len(), 6);
        assert!(!grid.is_empty());
    }

    #[test]
    #[should_panic(expected = "cells length must equal rows * cols")]
    fn test_new_panics_on_size_mismatch() {
        Grid::new(2, 3, vec![1, 2, 3]);
    }

    #[test]
    fn test_row_major_indexing() {
        // row 0 = [10, 20, 30], row 1 = [40, 50, 60]
        let grid = Grid::new(2, 3, vec![10, 20, 30, 40, 50, 60]);
        assert_eq!(grid[(0, 0)], 10);
        assert_eq!(grid[(0, 2)], 30);
        assert_eq!(grid[(1, 0)], 40);
        assert_eq!(grid[(1, 2)], 60);
        assert_eq!(grid.index_of(1, 1), 4);
        assert_eq!(grid.position_of(4), (1, 1));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = Grid::new(2, 2, vec![1, 2, 3, 4]);
        assert_eq!(grid.get(1, 1), Some(&4));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 2), None);
    }

    #[test]
    fn test_from_fn_visits_row_major() {
        let grid = Grid::from_fn(2, 3, |row, col| row * 10 + col);
        assert_eq!(grid.cells(), &[0, 1, 2, 10, 11, 12]);
    }

    #[test]
    fn test_index_mut_tuple() {
        let mut grid = Grid::new_filled(2, 2, 0u8);
        grid[(1, 0)] = 7;
        assert_eq!(grid.cells(), &[0, 0, 7, 0]);
    }

    #[test]
    fn test_map_keeps_shape() {
        let grid = Grid::new(1, 3, vec![true, false, true]);
        let bytes = grid.map(|&v| v as u8);
        assert_eq!(bytes.shape(), (1, 3));
        assert_eq!(bytes.cells(), &[1, 0, 1]);
    }

    #[test]
    fn test_count_true() {
        let grid = Grid::new(2, 2, vec![true, false, true, true]);
        assert_eq!(grid.count_true(), 3);
        assert_eq!(Grid::<bool>::new_default(3, 3).count_true(), 0);
    }
}
