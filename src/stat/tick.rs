//! Tick statistic: derives tick and gridline positions for one axis.

use crate::aes::{default_labeler, Aesthetics, Axis, Channel};
use crate::error::{Error, Result};
use crate::ticks::optimize_ticks;

/// Integer inputs with more distinct values than this fall back to the
/// continuous tick optimizer.
const MAX_DISTINCT_INTEGERS: usize = 20;

/// Configuration for a tick statistic: the channels scanned for candidate
/// values and the axis the output fields are written to.
#[derive(Debug, Clone, PartialEq)]
pub struct TickConfig {
    channels: Vec<Channel>,
    axis: Axis,
}

impl TickConfig {
    /// Scan an explicit channel list for one axis.
    #[must_use]
    pub fn new(channels: Vec<Channel>, axis: Axis) -> Self {
        Self { channels, axis }
    }

    /// Standard x-axis configuration: scans `x`, `x_min`, `x_max`.
    #[must_use]
    pub fn x() -> Self {
        Self::new(vec![Channel::X, Channel::XMin, Channel::XMax], Axis::X)
    }

    /// Standard y-axis configuration: scans `y`, `y_min`, `y_max` and the
    /// boxplot summary channels.
    #[must_use]
    pub fn y() -> Self {
        Self::new(
            vec![
                Channel::Y,
                Channel::YMin,
                Channel::YMax,
                Channel::Middle,
                Channel::LowerHinge,
                Channel::UpperHinge,
                Channel::LowerFence,
                Channel::UpperFence,
            ],
            Axis::Y,
        )
    }
}

/// Gather candidate values from the configured channels and write
/// `<axis>tick`, `<axis>grid`, and `<axis>tick_label` into the store.
///
/// Integral inputs with at most [`MAX_DISTINCT_INTEGERS`] distinct values
/// and no gap wider than 1 become ticks as-is, with midpoint gridlines;
/// everything else goes through the continuous tick optimizer.
pub(crate) fn apply(config: &TickConfig, aes: &mut Aesthetics) -> Result<()> {
    let mut values = Vec::new();
    for &channel in &config.channels {
        if let Some(channel_values) = aes.numeric(channel) {
            values.extend(channel_values.iter().copied().filter(|v| v.is_finite()));
        }
    }
    // An axis needs at least one finite candidate; fail loudly
    if values.is_empty() {
        return Err(Error::EmptyData);
    }

    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    let mut all_integral = true;
    for &v in &values {
        min = min.min(v);
        max = max.max(v);
        if v.trunc() != v {
            all_integral = false;
        }
    }

    let (ticks, grid) = if all_integral {
        let mut distinct = values;
        distinct.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        distinct.dedup();
        let max_gap = distinct.windows(2).map(|w| w[1] - w[0]).fold(0.0, f32::max);

        if distinct.len() > MAX_DISTINCT_INTEGERS || max_gap > 1.0 {
            let mut ticks = optimize_ticks(min, max);
            // A tick at the origin is degenerate for count-like axes; when
            // the next tick is already at or below 1, dropping the zero
            // keeps the sequence strictly increasing
            if ticks.first() == Some(&0.0) {
                if ticks.get(1).is_some_and(|&t| t <= 1.0) {
                    ticks.remove(0);
                } else {
                    ticks[0] = 1.0;
                }
            }
            (ticks.clone(), ticks)
        } else {
            // Gridlines sit halfway between consecutive integer ticks
            let grid = distinct.iter().skip(1).map(|v| v - 0.5).collect();
            (distinct, grid)
        }
    } else {
        let ticks = optimize_ticks(min, max);
        (ticks.clone(), ticks)
    };

    // First scanned channel with a formatter wins
    let labeler = config
        .channels
        .iter()
        .find_map(|&c| aes.labeler(c))
        .unwrap_or(default_labeler);

    aes.set_ticks(config.axis, ticks);
    aes.set_grid(config.axis, grid);
    aes.set_tick_labeler(config.axis, labeler);
    Ok(())
}
