//! Extraction of the largest components into a standalone mask.


use arrayvec::ArrayVec;

use crate::classify::BinaryMask;
use crate::error::{ensure_non_empty, Result};
use crate::labeling::{LabeledGrid, BACKGROUND};
use crate::ranking::Ranking;

/// Selections up to this size are matched with a linear scan.
const SMALL_SELECTION: usize = 8;

/// Mask of the cells belonging to the `k` highest-ranked components.
///
/// If the ranking holds fewer than `k` components, all of them are kept.
/// With `k == 0` or an empty ranking the result is all background.
pub fn top_k(labels: &LabeledGrid, ranking: &Ranking, k: usize) -> Result<BinaryMask> {
    let (rows, cols) = labels.shape();
    ensure_non_empty("labeled grid", rows, cols)?;

    let k = k.min(ranking.len());
    let mask = if k <= SMALL_SELECTION {
        let selected: ArrayVec<u32, SMALL_SELECTION> = ranking.top_ids(k).collect();
        labels.map(|&id| id != BACKGROUND && selected.contains(&id))
    } else {
        let mut selected = vec![false; max_label(labels) as usize + 1];
        for id in ranking.top_ids(k) {
            if let Some(slot) = selected.get_mut(id as usize) {
                *slot = true;
            }
        }
        labels.map(|&id| id != BACKGROUND && selected[id as usize])
    };

    tracing::debug!(
        k,
        pixels = mask.count_true(),
        "Extracted top components"
    );

    Ok(mask)
}

fn max_label(labels: &LabeledGrid) -> u32 {
    labels.iter().copied().max().unwrap_or(BACKGROUND)
}
