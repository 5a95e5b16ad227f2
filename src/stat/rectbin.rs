//! Rectangular-bin statistic: 2D grid binning with color-encoded counts.

use crate::aes::{Aesthetics, Channel};
use crate::binning::{finite_extent, select_2d, BinStrategy};
use crate::error::{Error, Result};
use crate::scale::ScaleMap;

/// Bin `(x, y)` pairs into a grid and emit one bounding box per non-zero
/// cell, with the cell count encoded through the registered continuous
/// color scale. Zero-count cells produce no geometry at all, the usual
/// density-plot convention.
pub(crate) fn apply(scales: &ScaleMap, aes: &mut Aesthetics) -> Result<()> {
    // Scale requirements are checked before any output is produced.
    let scale = scales
        .get(&Channel::Color)
        .ok_or(Error::MissingScale { channel: Channel::Color })?;
    let color_scale = scale.as_continuous_color().ok_or(Error::ScaleVariant {
        channel: Channel::Color,
        expected: "continuous color",
    })?;

    let x = aes
        .x
        .as_deref()
        .ok_or(Error::MissingAesthetic { channel: Channel::X })?;
    let y = aes
        .y
        .as_deref()
        .ok_or(Error::MissingAesthetic { channel: Channel::Y })?;
    if x.is_empty() || y.is_empty() {
        return Err(Error::EmptyData);
    }

    let bins = select_2d(x, y, BinStrategy::default());
    let (x_lo, x_hi) = finite_extent(x).ok_or(Error::EmptyData)?;
    let (y_lo, y_hi) = finite_extent(y).ok_or(Error::EmptyData)?;
    let wx = (x_hi - x_lo) / bins.dx as f32;
    let wy = (y_hi - y_lo) / bins.dy as f32;

    let mut x_min = Vec::new();
    let mut x_max = Vec::new();
    let mut y_min = Vec::new();
    let mut y_max = Vec::new();
    let mut counts = Vec::new();
    for iy in 0..bins.dy {
        for ix in 0..bins.dx {
            let count = bins.counts[iy * bins.dx + ix];
            if count == 0 {
                continue;
            }
            x_min.push(wx.mul_add(ix as f32, x_lo));
            x_max.push(wx.mul_add((ix + 1) as f32, x_lo));
            y_min.push(wy.mul_add(iy as f32, y_lo));
            y_max.push(wy.mul_add((iy + 1) as f32, y_lo));
            counts.push(count as f32);
        }
    }

    color_scale.apply(aes, &counts);
    aes.x_min = Some(x_min);
    aes.x_max = Some(x_max);
    aes.y_min = Some(y_min);
    aes.y_max = Some(y_max);
    aes.color_key_title = Some("Count".to_string());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::{ContinuousColorScale, DiscreteColorScale, Scale};

    fn color_scales() -> ScaleMap {
        let mut scales = ScaleMap::new();
        scales.insert(
            Channel::Color,
            Scale::ContinuousColor(ContinuousColorScale::default()),
        );
        scales
    }

    #[test]
    fn test_emits_only_nonzero_cells() {
        // Two clusters in opposite corners leave most cells empty
        let x = vec![0.0, 0.1, 0.2, 10.0, 10.1];
        let y = vec![0.0, 0.1, 0.2, 10.0, 10.1];
        let mut aes = Aesthetics::new().with_x(x.clone()).with_y(y.clone());
        apply(&color_scales(), &mut aes).expect("rectbin succeeds");

        let x_min = aes.x_min.expect("x_min written");
        let bins = select_2d(&x, &y, BinStrategy::default());
        let nonzero = bins.counts.iter().filter(|&&c| c > 0).count();
        assert_eq!(x_min.len(), nonzero);
        assert!(nonzero < bins.dx * bins.dy, "some cells must be empty");
    }

    #[test]
    fn test_colors_match_emitted_cells() {
        let x: Vec<f32> = (0..40).map(|i| (i % 7) as f32).collect();
        let y: Vec<f32> = (0..40).map(|i| (i % 5) as f32).collect();
        let mut aes = Aesthetics::new().with_x(x).with_y(y);
        apply(&color_scales(), &mut aes).expect("rectbin succeeds");

        let n = aes.x_min.as_ref().expect("x_min").len();
        assert_eq!(aes.x_max.as_ref().expect("x_max").len(), n);
        assert_eq!(aes.y_min.as_ref().expect("y_min").len(), n);
        assert_eq!(aes.y_max.as_ref().expect("y_max").len(), n);
        assert_eq!(aes.color.as_ref().expect("color").len(), n);
        assert_eq!(aes.color_key_title.as_deref(), Some("Count"));
    }

    #[test]
    fn test_cell_boxes_have_positive_area() {
        let x: Vec<f32> = (0..30).map(|i| i as f32 * 0.3).collect();
        let y: Vec<f32> = (0..30).map(|i| (i as f32).cos()).collect();
        let mut aes = Aesthetics::new().with_x(x).with_y(y);
        apply(&color_scales(), &mut aes).expect("rectbin succeeds");

        let x_min = aes.x_min.expect("x_min");
        let x_max = aes.x_max.expect("x_max");
        let y_min = aes.y_min.expect("y_min");
        let y_max = aes.y_max.expect("y_max");
        for k in 0..x_min.len() {
            assert!(x_max[k] > x_min[k]);
            assert!(y_max[k] > y_min[k]);
        }
    }

    #[test]
    fn test_missing_scale_errors() {
        let mut aes = Aesthetics::new().with_x(vec![1.0]).with_y(vec![1.0]);
        assert_eq!(
            apply(&ScaleMap::new(), &mut aes),
            Err(Error::MissingScale { channel: Channel::Color })
        );
        assert!(aes.x_min.is_none(), "no partial output on error");
    }

    #[test]
    fn test_discrete_scale_rejected() {
        let mut scales = ScaleMap::new();
        scales.insert(Channel::Color, Scale::DiscreteColor(DiscreteColorScale::default()));
        let mut aes = Aesthetics::new().with_x(vec![1.0]).with_y(vec![1.0]);
        let result = apply(&scales, &mut aes);
        assert!(matches!(
            result,
            Err(Error::ScaleVariant { channel: Channel::Color, .. })
        ));
    }

    #[test]
    fn test_missing_y_errors() {
        let mut aes = Aesthetics::new().with_x(vec![1.0]);
        assert_eq!(
            apply(&color_scales(), &mut aes),
            Err(Error::MissingAesthetic { channel: Channel::Y })
        );
    }
}
