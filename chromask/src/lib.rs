//! Chromask - color-threshold region analysis.
//!
//! Classifies the pixels of a decoded raster into a foreground mask by color
//! threshold, groups foreground pixels into 8-connected components, ranks
//! them by size and extracts the largest ones into a reduced mask.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use chromask::{Config, Pipeline, Raster};
//!
//! let raster = Raster::new(rows, cols, ChannelCount::Rgba, decoded_samples)?;
//! let analysis = Pipeline::new(Config::default())?.run(&raster)?;
//!
//! println!("{}", analysis.report());
//! ```

pub mod classify;
pub mod config;
pub mod error;
pub mod extract;
pub mod labeling;
pub mod pipeline;
pub mod ranking;
pub mod raster;
pub mod report;
pub mod style;

#[cfg(test)]
pub(crate) mod test_utils;

// ============================================================================
// Core types
// ============================================================================

pub use common::Grid;
pub use config::Config;
pub use error::{Error, Result};
pub use raster::{ChannelCount, Raster, Rgb, Sample};

// ============================================================================
// Pipeline stages
// ============================================================================

pub use classify::{classify, mask_to_luma, BinaryMask, ClassificationRule, Thresholds};
pub use extract::top_k;
pub use labeling::{label, neighbors, ComponentStats, LabeledGrid, BACKGROUND};
pub use ranking::{quicksort_by, rank, Component, Ranking};

// ============================================================================
// Orchestration and output
// ============================================================================

pub use pipeline::{Analysis, Pipeline};
pub use report::ComponentReport;
pub use style::{format_message, Style};
