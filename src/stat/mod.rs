//! Statistical transformations applied to an aesthetics store.
//!
//! Each statistic reads channels from the store and rewrites derived
//! channels in place. A pipeline applies an ordered list of statistics
//! sequentially; ordering is caller-controlled and significant because
//! later statistics see the mutations of earlier ones.

mod boxplot;
mod histogram;
mod rectbin;
mod tick;

pub use tick::TickConfig;

use crate::aes::Aesthetics;
use crate::error::Result;
use crate::scale::ScaleMap;

/// A statistical transformation.
#[derive(Debug, Clone, PartialEq)]
pub enum Statistic {
    /// Placeholder: no transformation.
    Nil,
    /// Pass-through: no transformation.
    Identity,
    /// Bin the `x` channel into equal-width intervals.
    Histogram,
    /// Bin `x` and `y` into a 2D grid with color-encoded counts.
    RectangularBin,
    /// Derive tick and gridline positions for one axis.
    Tick(TickConfig),
    /// Group `y` by `(x, color)` and compute five-number summaries.
    Boxplot,
}

impl Statistic {
    /// Create a nil (placeholder) statistic.
    #[must_use]
    pub fn nil() -> Self {
        Statistic::Nil
    }

    /// Create an identity (pass-through) statistic.
    #[must_use]
    pub fn identity() -> Self {
        Statistic::Identity
    }

    /// Create a histogram statistic.
    #[must_use]
    pub fn histogram() -> Self {
        Statistic::Histogram
    }

    /// Create a rectangular-bin statistic.
    #[must_use]
    pub fn rectbin() -> Self {
        Statistic::RectangularBin
    }

    /// Create a tick statistic for the x axis with its standard channels.
    #[must_use]
    pub fn x_ticks() -> Self {
        Statistic::Tick(TickConfig::x())
    }

    /// Create a tick statistic for the y axis with its standard channels.
    #[must_use]
    pub fn y_ticks() -> Self {
        Statistic::Tick(TickConfig::y())
    }

    /// Create a boxplot statistic.
    #[must_use]
    pub fn boxplot() -> Self {
        Statistic::Boxplot
    }

    /// Apply this statistic to the store.
    ///
    /// # Errors
    ///
    /// Returns an error when a required channel or scale is absent or of
    /// the wrong variant; the store is left without partial output.
    pub fn apply(&self, scales: &ScaleMap, aes: &mut Aesthetics) -> Result<()> {
        match self {
            Statistic::Nil | Statistic::Identity => Ok(()),
            Statistic::Histogram => histogram::apply(aes),
            Statistic::RectangularBin => rectbin::apply(scales, aes),
            Statistic::Tick(config) => tick::apply(config, aes),
            Statistic::Boxplot => boxplot::apply(aes),
        }
    }
}

/// Apply an ordered sequence of statistics to one store.
///
/// Statistics run strictly in order; the first error aborts the run.
///
/// # Errors
///
/// Propagates the first statistic failure unchanged.
pub fn apply_statistics(
    statistics: &[Statistic],
    scales: &ScaleMap,
    aes: &mut Aesthetics,
) -> Result<()> {
    for statistic in statistics {
        statistic.apply(scales, aes)?;
    }
    Ok(())
}
