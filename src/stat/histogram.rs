//! Histogram statistic: bins the `x` channel into equal-width intervals.

use crate::aes::{Aesthetics, Channel};
use crate::binning::{finite_extent, select_1d, BinStrategy};
use crate::error::{Error, Result};

/// Bin `x` and write contiguous `x_min` / `x_max` edges with per-bin counts
/// in `y`. Zero-count bins are retained so the output covers `[min, max]`
/// with no gaps.
pub(crate) fn apply(aes: &mut Aesthetics) -> Result<()> {
    let x = aes
        .x
        .as_deref()
        .ok_or(Error::MissingAesthetic { channel: Channel::X })?;
    if x.is_empty() {
        return Err(Error::EmptyData);
    }

    let bins = select_1d(x, BinStrategy::default());
    let (min, max) = finite_extent(x).ok_or(Error::EmptyData)?;
    let binwidth = (max - min) / bins.d as f32;

    let mut x_min = Vec::with_capacity(bins.d);
    let mut x_max = Vec::with_capacity(bins.d);
    let mut y = Vec::with_capacity(bins.d);
    for (k, &count) in bins.counts.iter().enumerate() {
        x_min.push(binwidth.mul_add(k as f32, min));
        x_max.push(binwidth.mul_add((k + 1) as f32, min));
        y.push(count as f32);
    }

    aes.x_min = Some(x_min);
    aes.x_max = Some(x_max);
    aes.y = Some(y);
    Ok(())
}
