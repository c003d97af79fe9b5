//! Connected component labeling by breadth-first flood fill.
//!
//! Foreground cells are grouped into maximal 8-connected components.
//! Components are numbered `1..=n` in the row-major order of their first
//! (seed) cell, so labels are reproducible for a given mask. Label `0` is
//! background.
//!
//! Each flood fill drains a `VecDeque` FIFO, and every cell is enqueued at
//! most once, giving O(rows * cols) time and memory.


use std::collections::VecDeque;

use arrayvec::ArrayVec;

use common::Grid;

use crate::classify::BinaryMask;
use crate::error::{ensure_non_empty, Result};

/// Per-cell component ids; `0` is background.
pub type LabeledGrid = Grid<u32>;

/// Label value reserved for background cells.
pub const BACKGROUND: u32 = 0;

/// Offsets of the 8 surrounding cells, row-major.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// In-bounds 8-neighbors of `cell` within a `shape = (rows, cols)` grid.
///
/// The cell itself is excluded; neighbors are returned in row-major order.
#[inline]
pub fn neighbors(cell: (usize, usize), shape: (usize, usize)) -> ArrayVec<(usize, usize), 8> {
    let (row, col) = cell;
    let (rows, cols) = shape;

    let mut out = ArrayVec::new();
    for (dr, dc) in NEIGHBOR_OFFSETS {
        let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc)) else {
            continue;
        };
        if r < rows && c < cols {
            out.push((r, c));
        }
    }
    out
}

// ============================================================================
// ComponentStats
// ============================================================================

/// Pixel count per component id.
///
/// Ids are dense (`1..=len()`), so counts are stored by `id - 1`.
/// Every count is positive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentStats {
    counts: Vec<usize>,
}

impl ComponentStats {
    /// Stats for components `1..=counts.len()`.
    ///
    /// # Panics
    ///
    /// Panics if any count is zero.
    #[cfg(test)]
    pub(crate) fn from_counts(counts: Vec<usize>) -> Self {
        assert!(
            counts.iter().all(|&c| c > 0),
            "component pixel counts must be positive"
        );
        Self { counts }
    }

    /// Number of components.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Pixel count of component `id`, or `None` for background and unknown ids.
    #[inline]
    pub fn get(&self, id: u32) -> Option<usize> {
        if id == BACKGROUND {
            return None;
        }
        self.counts.get(id as usize - 1).copied()
    }

    /// `(id, pixel count)` pairs in ascending id order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (u32, usize)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(idx, &count)| (idx as u32 + 1, count))
    }

    /// Sum of all component sizes, equal to the mask's foreground count.
    pub fn total_pixels(&self) -> usize {
        self.counts.iter().sum()
    }
}

// ============================================================================
// Labeling
// ============================================================================

/// Label the 8-connected components of `mask`.
///
/// Fails if the mask has no rows or no columns. A mask without foreground
/// yields an all-background grid and empty stats.
pub fn label(mask: &BinaryMask) -> Result<(LabeledGrid, ComponentStats)> {
    let (rows, cols) = mask.shape();
    ensure_non_empty("mask", rows, cols)?;

    let mut labels = LabeledGrid::new_filled(rows, cols, BACKGROUND);
    let mut counts = Vec::new();
    let mut queue = VecDeque::new();

    for seed in 0..mask.len() {
        if !mask[seed] || labels[seed] != BACKGROUND {
            continue;
        }

        let id = counts.len() as u32 + 1;
        let pixels = flood_fill(mask, &mut labels, seed, id, &mut queue);
        counts.push(pixels);
    }

    tracing::debug!(
        rows,
        cols,
        components = counts.len(),
        "Labeled connected components"
    );

    Ok((labels, ComponentStats { counts }))
}

/// Assign `id` to every unlabeled foreground cell reachable from `seed`.
///
/// Returns the number of cells labeled. `queue` is empty on entry and exit.
fn flood_fill(
    mask: &BinaryMask,
    labels: &mut LabeledGrid,
    seed: usize,
    id: u32,
    queue: &mut VecDeque<usize>,
) -> usize {
    debug_assert!(queue.is_empty());
    let shape = mask.shape();

    labels[seed] = id;
    queue.push_back(seed);
    let mut pixels = 1;

    while let Some(idx) = queue.pop_front() {
        for (r, c) in neighbors(mask.position_of(idx), shape) {
            let n = mask.index_of(r, c);
            if mask[n] && labels[n] == BACKGROUND {
                labels[n] = id;
                pixels += 1;
                queue.push_back(n);
            }
        }
    }

    pixels
}
