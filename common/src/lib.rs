//! Shared building blocks for the chromask workspace.

pub mod grid;
pub mod parallel;

pub use grid::Grid;
