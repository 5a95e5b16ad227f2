//! Scales that map raw channel values to visual values.
//!
//! The statistic stage only consumes scales through [`Scale::apply`]; domain
//! learning and the full scale subsystem live in the surrounding plotting
//! engine.

use crate::aes::{Aesthetics, Channel, ChannelValue};
use crate::color::{Rgba, DISCRETE_PALETTE, VIRIDIS};
use std::collections::HashMap;

/// Active scales keyed by the channel they serve, read-only during a
/// pipeline invocation.
pub type ScaleMap = HashMap<Channel, Scale>;

/// A registered scale, polymorphic over its variants.
#[derive(Debug, Clone)]
pub enum Scale {
    /// Continuous color ramp over a numeric domain.
    ContinuousColor(ContinuousColorScale),
    /// Discrete palette assignment over categorical values.
    DiscreteColor(DiscreteColorScale),
}

impl Scale {
    /// Human-readable variant name, used in wrong-variant errors.
    #[must_use]
    pub fn variant_name(&self) -> &'static str {
        match self {
            Scale::ContinuousColor(_) => "continuous color",
            Scale::DiscreteColor(_) => "discrete color",
        }
    }

    /// Borrow the continuous color variant, if that is what this scale is.
    #[must_use]
    pub fn as_continuous_color(&self) -> Option<&ContinuousColorScale> {
        match self {
            Scale::ContinuousColor(s) => Some(s),
            Scale::DiscreteColor(_) => None,
        }
    }

    /// Apply this scale to raw numeric values, writing visual colors into
    /// the store's `color` channel.
    pub fn apply(&self, aes: &mut Aesthetics, values: &[f32]) {
        match self {
            Scale::ContinuousColor(s) => s.apply(aes, values),
            Scale::DiscreteColor(s) => {
                let raw: Vec<ChannelValue> = values.iter().map(|&v| ChannelValue::Num(v)).collect();
                s.apply(aes, &raw);
            }
        }
    }
}

/// Continuous color scale: interpolates a ramp over the observed extent of
/// the raw values.
#[derive(Debug, Clone)]
pub struct ContinuousColorScale {
    ramp: Vec<Rgba>,
}

impl Default for ContinuousColorScale {
    fn default() -> Self {
        Self::new(VIRIDIS.to_vec())
    }
}

impl ContinuousColorScale {
    /// Create a scale over the given ramp stops.
    ///
    /// An empty ramp falls back to viridis.
    #[must_use]
    pub fn new(ramp: Vec<Rgba>) -> Self {
        if ramp.is_empty() {
            Self { ramp: VIRIDIS.to_vec() }
        } else {
            Self { ramp }
        }
    }

    /// Interpolate the ramp at `t` in `[0, 1]`.
    #[must_use]
    pub fn color_at(&self, t: f32) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        if self.ramp.len() == 1 {
            return self.ramp[0];
        }
        let segments = self.ramp.len() - 1;
        let segment = ((t * segments as f32).floor() as usize).min(segments - 1);
        let local_t = t * segments as f32 - segment as f32;
        self.ramp[segment].lerp(self.ramp[segment + 1], local_t)
    }

    /// Map raw values through the ramp over their observed extent and write
    /// the resulting colors into the store's `color` channel.
    ///
    /// A degenerate extent (all values equal) maps everything to the ramp
    /// midpoint.
    pub fn apply(&self, aes: &mut Aesthetics, values: &[f32]) {
        let min = values.iter().copied().fold(f32::INFINITY, f32::min);
        let max = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        let span = max - min;
        let colors: Vec<ChannelValue> = values
            .iter()
            .map(|&v| {
                let t = if span > 0.0 { (v - min) / span } else { 0.5 };
                ChannelValue::Color(self.color_at(t))
            })
            .collect();
        aes.color = Some(colors);
    }
}

/// Discrete color scale: assigns palette colors to distinct values in order
/// of first appearance, cycling when the palette runs out.
#[derive(Debug, Clone)]
pub struct DiscreteColorScale {
    palette: Vec<Rgba>,
}

impl Default for DiscreteColorScale {
    fn default() -> Self {
        Self::new(DISCRETE_PALETTE.to_vec())
    }
}

impl DiscreteColorScale {
    /// Create a scale over the given palette.
    ///
    /// An empty palette falls back to the default discrete palette.
    #[must_use]
    pub fn new(palette: Vec<Rgba>) -> Self {
        if palette.is_empty() {
            Self { palette: DISCRETE_PALETTE.to_vec() }
        } else {
            Self { palette }
        }
    }

    /// Assign one color per input value, equal values sharing a color.
    #[must_use]
    pub fn assign(&self, values: &[ChannelValue]) -> Vec<Rgba> {
        let mut seen: HashMap<&ChannelValue, Rgba> = HashMap::new();
        let mut next = 0usize;
        values
            .iter()
            .map(|v| {
                *seen.entry(v).or_insert_with(|| {
                    let color = self.palette[next % self.palette.len()];
                    next += 1;
                    color
                })
            })
            .collect()
    }

    /// Assign colors and write them into the store's `color` channel.
    pub fn apply(&self, aes: &mut Aesthetics, values: &[ChannelValue]) {
        let colors = self.assign(values).into_iter().map(ChannelValue::Color).collect();
        aes.color = Some(colors);
    }
}
