//! End-to-end run: classify -> label -> rank -> extract.

use crate::classify::{classify_with, BinaryMask};
use crate::config::Config;
use crate::error::Result;
use crate::extract::top_k;
use crate::labeling::{label, ComponentStats, LabeledGrid};
use crate::raster::{Raster, Sample};
use crate::ranking::{rank, Ranking};
use crate::report::ComponentReport;

/// Every artifact produced by one pipeline run.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Foreground mask from classification.
    pub mask: BinaryMask,
    /// Component id per cell, `0` for background.
    pub labels: LabeledGrid,
    pub stats: ComponentStats,
    pub ranking: Ranking,
    /// Mask of the `top_k` largest components.
    pub top_mask: BinaryMask,
}

impl Analysis {
    /// Report in ranking order.
    pub fn report(&self) -> ComponentReport<'_> {
        ComponentReport::new(&self.ranking)
    }

    /// Report in discovery order, before ranking.
    pub fn discovery_report(&self) -> ComponentReport<'static> {
        ComponentReport::discovery(&self.stats)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: Config,
}

impl Pipeline {
    /// Create a pipeline, validating `config` up front.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn run<T: Sample>(&self, raster: &Raster<T>) -> Result<Analysis> {
        let thresholds = self.config.thresholds()?;

        let mask = classify_with(raster, self.config.rule, thresholds);
        let (labels, stats) = label(&mask)?;
        let ranking = rank(&stats);
        let top_mask = top_k(&labels, &ranking, self.config.top_k)?;

        tracing::info!(
            rule = %self.config.rule,
            rows = raster.rows(),
            cols = raster.cols(),
            foreground = stats.total_pixels(),
            components = ranking.len(),
            top_k = self.config.top_k,
            top_pixels = top_mask.count_true(),
            "Component analysis complete"
        );

        Ok(Analysis {
            mask,
            labels,
            stats,
            ranking,
            top_mask,
        })
    }
}
