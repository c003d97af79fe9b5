//! Plain-text component report.
//!
//! ```text
//! Connected Component 2, number of pixels = 6
//! Connected Component 1, number of pixels = 3
//! Total number of connected components = 2
//! ```

use std::borrow::Cow;
use std::fmt;

use crate::labeling::ComponentStats;
use crate::ranking::{Component, Ranking};

/// One line per component followed by the component total. Lines are
/// separated by `\n`; the total line has no trailing newline.
#[derive(Debug, Clone)]
pub struct ComponentReport<'a> {
    components: Cow<'a, [Component]>,
}

impl<'a> ComponentReport<'a> {
    /// Components in ranking order.
    pub fn new(ranking: &'a Ranking) -> Self {
        Self {
            components: Cow::Borrowed(ranking.components()),
        }
    }

    /// Components in discovery order (ascending id), before any ranking.
    pub fn discovery(stats: &ComponentStats) -> ComponentReport<'static> {
        let components = stats
            .iter()
            .map(|(id, pixels)| Component::new(id, pixels))
            .collect::<Vec<_>>();
        ComponentReport {
            components: Cow::Owned(components),
        }
    }
}

impl fmt::Display for ComponentReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.components.iter() {
            writeln!(
                f,
                "Connected Component {}, number of pixels = {}",
                c.id, c.pixels
            )?;
        }
        write!(
            f,
            "Total number of connected components = {}",
            self.components.len()
        )
    }
}
