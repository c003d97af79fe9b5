//! Ordering of labeled components by size.
//!
//! Components are ranked by descending pixel count; equal counts are
//! ordered by ascending id so the ranking is fully deterministic.

mod quicksort;


use std::cmp::Ordering;

pub use quicksort::quicksort_by;

use crate::labeling::ComponentStats;

/// A labeled component and its size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Component {
    pub id: u32,
    pub pixels: usize,
}

impl Component {
    pub fn new(id: u32, pixels: usize) -> Self {
        Self { id, pixels }
    }
}

/// Ranking order: larger components first, then lower ids.
#[inline]
pub fn rank_order(a: &Component, b: &Component) -> Ordering {
    b.pixels.cmp(&a.pixels).then(a.id.cmp(&b.id))
}

/// Components sorted by [`rank_order`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ranking {
    components: Vec<Component>,
}

impl Ranking {
    /// Rank an arbitrary sequence of components. Re-ranking an existing
    /// ranking leaves it unchanged.
    pub fn from_components(mut components: Vec<Component>) -> Self {
        quicksort_by(&mut components, rank_order);
        Self { components }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    #[inline]
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Component> {
        self.components.iter()
    }

    /// Ids of the first `k` components, or all of them if fewer exist.
    pub fn top_ids(&self, k: usize) -> impl Iterator<Item = u32> + '_ {
        self.components.iter().take(k).map(|c| c.id)
    }

    pub fn into_vec(self) -> Vec<Component> {
        self.components
    }
}

impl<'a> IntoIterator for &'a Ranking {
    type Item = &'a Component;
    type IntoIter = std::slice::Iter<'a, Component>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}

/// Rank every component in `stats`.
pub fn rank(stats: &ComponentStats) -> Ranking {
    let components = stats
        .iter()
        .map(|(id, pixels)| Component::new(id, pixels))
        .collect();
    let ranking = Ranking::from_components(components);

    tracing::debug!(
        components = ranking.len(),
        largest = ranking.components().first().map_or(0, |c| c.pixels),
        "Ranked components"
    );

    ranking
}
