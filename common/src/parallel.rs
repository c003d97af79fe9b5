//! Parallel processing utilities for grids.

use rayon::prelude::*;

use crate::grid::Grid;

/// Multiplier for number of chunks relative to CPU threads.
const CHUNKS_PER_THREAD: usize = 2;

/// Rows per chunk so that `rows` splits into roughly `num_threads * 2` chunks.
/// Minimum of 1 row per chunk.
#[inline]
pub fn rows_per_chunk(rows: usize) -> usize {
    let num_chunks = rayon::current_num_threads() * CHUNKS_PER_THREAD;
    (rows / num_chunks).max(1)
}

/// Build a grid in parallel, evaluating `f(row, col)` exactly once per cell.
///
/// Work is split into chunks of whole rows; each chunk is written by a single
/// rayon task, so no synchronization is needed between cells.
pub fn par_grid_from_fn<T, F>(rows: usize, cols: usize, f: F) -> Grid<T>
where
    T: Default + Clone + Send + Sync,
    F: Fn(usize, usize) -> T + Sync + Send,
{
    let mut grid = Grid::new_default(rows, cols);
    if grid.is_empty() {
        return grid;
    }

    let chunk_rows = rows_per_chunk(rows);
    grid.cells_mut()
        .par_chunks_mut(chunk_rows * cols)
        .enumerate()
        .for_each(|(chunk_idx, chunk)| {
            let first_row = chunk_idx * chunk_rows;
            for (i, cell) in chunk.iter_mut().enumerate() {
                *cell = f(first_row + i / cols, i % cols);
            }
        });

    grid
}
