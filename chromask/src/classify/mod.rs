//! Color threshold classification.
//!
//! Turns a [`Raster`] into a binary foreground mask. A single classifier is
//! parameterized by a [`ClassificationRule`]; the rule contributes only its
//! per-pixel predicate. Cells are independent, so the mask is filled in
//! parallel row chunks.


use serde::{Deserialize, Serialize};

use common::parallel::par_grid_from_fn;
use common::Grid;

use crate::error::{Error, Result};
use crate::raster::{Raster, Rgb, Sample};

/// Binary foreground mask, `true` marks a foreground cell.
pub type BinaryMask = Grid<bool>;

/// Which color family counts as foreground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassificationRule {
    /// `R > upper`, `G < lower`, `B < lower`.
    #[default]
    Red,
    /// `R < lower`, `G > upper`, `B > upper`.
    Cyan,
}

impl ClassificationRule {
    #[inline]
    pub fn matches(self, px: Rgb, thresholds: Thresholds) -> bool {
        let Thresholds { upper, lower } = thresholds;
        match self {
            ClassificationRule::Red => px.r > upper && px.g < lower && px.b < lower,
            ClassificationRule::Cyan => px.r < lower && px.g > upper && px.b > upper,
        }
    }
}

impl std::fmt::Display for ClassificationRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClassificationRule::Red => write!(f, "red"),
            ClassificationRule::Cyan => write!(f, "cyan"),
        }
    }
}

/// Upper and lower channel thresholds, in the sample's native range.
///
/// Values outside the range are allowed; they just make the predicate
/// unsatisfiable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub upper: f32,
    pub lower: f32,
}

impl Thresholds {
    pub fn new(upper: f32, lower: f32) -> Result<Self> {
        if !upper.is_finite() {
            return Err(Error::InvalidThreshold {
                name: "upper_threshold",
                value: upper,
            });
        }
        if !lower.is_finite() {
            return Err(Error::InvalidThreshold {
                name: "lower_threshold",
                value: lower,
            });
        }
        Ok(Self { upper, lower })
    }
}

/// Classify every pixel of `raster` under `rule`.
///
/// The returned mask has the raster's shape. Alpha is never inspected.
pub fn classify<T: Sample>(
    raster: &Raster<T>,
    rule: ClassificationRule,
    upper_threshold: f32,
    lower_threshold: f32,
) -> Result<BinaryMask> {
    let thresholds = Thresholds::new(upper_threshold, lower_threshold)?;
    Ok(classify_with(raster, rule, thresholds))
}

/// Same as [`classify`] with already validated thresholds.
pub fn classify_with<T: Sample>(
    raster: &Raster<T>,
    rule: ClassificationRule,
    thresholds: Thresholds,
) -> BinaryMask {
    let mask = par_grid_from_fn(raster.rows(), raster.cols(), |row, col| {
        rule.matches(raster.rgb(row, col), thresholds)
    });

    tracing::debug!(
        rule = %rule,
        rows = raster.rows(),
        cols = raster.cols(),
        foreground = mask.count_true(),
        "Classified raster"
    );

    mask
}

/// Render a mask as single-channel `0`/`1` cells.
pub fn mask_to_luma(mask: &BinaryMask) -> Grid<u8> {
    mask.map(|&v| u8::from(v))
}
