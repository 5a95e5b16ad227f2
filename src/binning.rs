//! Bin-count selection and counting for the binning statistics.
//!
//! Supports automatic bin counts with Sturges, Scott, and Freedman-Diaconis
//! rules. The selector always produces at least one bin, and counting uses
//! floor indexing with the last bin clamped so `max` lands in bin `d - 1`.

/// Binning strategy for bin-count selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BinStrategy {
    /// Sturges' rule: ceil(log2(n) + 1)
    #[default]
    Sturges,
    /// Scott's rule: 3.5 * std / n^(1/3)
    Scott,
    /// Freedman-Diaconis rule: 2 * IQR / n^(1/3)
    FreedmanDiaconis,
    /// Fixed number of bins
    Fixed(usize),
}

/// Result of 1D bin selection: a bin count and a count per bin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bins1d {
    /// Number of bins, always at least 1.
    pub d: usize,
    /// Observation count per bin, length `d`.
    pub counts: Vec<usize>,
}

/// Result of 2D bin selection over a `dy x dx` grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bins2d {
    /// Number of bins along x, always at least 1.
    pub dx: usize,
    /// Number of bins along y, always at least 1.
    pub dy: usize,
    /// Per-cell counts, length `dx * dy`, row-major with the outer index
    /// spanning y: `counts[iy * dx + ix]`.
    pub counts: Vec<usize>,
}

/// Pick a bin count for `values` under `strategy`. Always at least 1.
#[must_use]
pub fn bin_count(values: &[f32], strategy: BinStrategy) -> usize {
    let n = values.len();
    if n == 0 {
        return 1;
    }

    match strategy {
        BinStrategy::Sturges => sturges(n),
        BinStrategy::Scott => {
            let width = 3.5 * std_dev(values) / (n as f32).powf(1.0 / 3.0);
            bins_for_width(values, width, n)
        }
        BinStrategy::FreedmanDiaconis => {
            let width = 2.0 * iqr(values) / (n as f32).powf(1.0 / 3.0);
            bins_for_width(values, width, n)
        }
        BinStrategy::Fixed(bins) => bins,
    }
    .max(1)
}

fn sturges(n: usize) -> usize {
    ((n as f32).log2().ceil() + 1.0) as usize
}

fn bins_for_width(values: &[f32], width: f32, n: usize) -> usize {
    let range = finite_extent(values).map_or(0.0, |(min, max)| max - min);
    if width > 0.0 && range > 0.0 {
        (range / width).ceil() as usize
    } else {
        sturges(n)
    }
}

fn std_dev(values: &[f32]) -> f32 {
    if values.len() < 2 {
        return 0.0;
    }
    let mean = values.iter().sum::<f32>() / values.len() as f32;
    let variance =
        values.iter().map(|x| (x - mean).powi(2)).sum::<f32>() / (values.len() - 1) as f32;
    variance.sqrt()
}

fn iqr(values: &[f32]) -> f32 {
    if values.len() < 4 {
        return finite_extent(values).map_or(0.0, |(min, max)| max - min);
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    sorted[3 * sorted.len() / 4] - sorted[sorted.len() / 4]
}

/// Minimum and maximum over the finite entries, or `None` if there are none.
#[must_use]
pub fn finite_extent(values: &[f32]) -> Option<(f32, f32)> {
    let mut extent = None;
    for &v in values {
        if !v.is_finite() {
            continue;
        }
        extent = match extent {
            None => Some((v, v)),
            Some((min, max)) => Some((v.min(min), v.max(max))),
        };
    }
    extent
}

/// Index of the bin holding `value` among `d` equal-width bins over
/// `[min, min + d * binwidth]`, clamped so `max` falls in the last bin.
fn bin_index(value: f32, min: f32, binwidth: f32, d: usize) -> usize {
    if binwidth > 0.0 {
        (((value - min) / binwidth).floor() as usize).min(d - 1)
    } else {
        0
    }
}

/// Select a bin count for `values` and count occurrences per bin.
///
/// Non-finite values are ignored. The counts cover `[min, max]` of the
/// finite values with equal-width bins.
#[must_use]
pub fn select_1d(values: &[f32], strategy: BinStrategy) -> Bins1d {
    let d = bin_count(values, strategy);
    let mut counts = vec![0usize; d];

    if let Some((min, max)) = finite_extent(values) {
        let binwidth = (max - min) / d as f32;
        for &v in values.iter().filter(|v| v.is_finite()) {
            counts[bin_index(v, min, binwidth, d)] += 1;
        }
    }

    Bins1d { d, counts }
}

/// Select bin counts along both axes and count pairs per grid cell.
///
/// Pairs with a non-finite coordinate are skipped entirely.
#[must_use]
pub fn select_2d(x: &[f32], y: &[f32], strategy: BinStrategy) -> Bins2d {
    let dx = bin_count(x, strategy);
    let dy = bin_count(y, strategy);
    let mut counts = vec![0usize; dx * dy];

    let x_extent = finite_extent(x);
    let y_extent = finite_extent(y);
    if let (Some((x_min, x_max)), Some((y_min, y_max))) = (x_extent, y_extent) {
        let wx = (x_max - x_min) / dx as f32;
        let wy = (y_max - y_min) / dy as f32;
        for (&vx, &vy) in x.iter().zip(y.iter()) {
            if !vx.is_finite() || !vy.is_finite() {
                continue;
            }
            let ix = bin_index(vx, x_min, wx, dx);
            let iy = bin_index(vy, y_min, wy, dy);
            counts[iy * dx + ix] += 1;
        }
    }

    Bins2d { dx, dy, counts }
}
