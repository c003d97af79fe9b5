//! Pipeline configuration.
//!
//! A flat [`Config`] carrying every parameter of a classify -> label ->
//! rank -> extract run. The library never loads it from disk itself; callers
//! build it in code or deserialize it with serde.

use serde::{Deserialize, Serialize};

use crate::classify::{ClassificationRule, Thresholds};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // ------------------------------------------------------------------------
    // Classification
    // ------------------------------------------------------------------------
    /// Which color family is foreground.
    pub rule: ClassificationRule,
    /// Channels that must be strong for the rule must exceed this.
    pub upper_threshold: f32,
    /// Channels that must be weak for the rule must stay below this.
    pub lower_threshold: f32,

    // ------------------------------------------------------------------------
    // Extraction
    // ------------------------------------------------------------------------
    /// Number of largest components kept in the reduced mask.
    pub top_k: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rule: ClassificationRule::Red,
            upper_threshold: 100.0,
            lower_threshold: 50.0,
            top_k: 2,
        }
    }
}

impl Config {
    /// Default thresholds for detecting cyan regions.
    pub fn cyan() -> Self {
        Self {
            rule: ClassificationRule::Cyan,
            ..Self::default()
        }
    }

    /// Check that the thresholds are well-formed.
    pub fn validate(&self) -> Result<()> {
        self.thresholds().map(|_| ())
    }

    pub fn thresholds(&self) -> Result<Thresholds> {
        Thresholds::new(self.upper_threshold, self.lower_threshold)
    }
}
