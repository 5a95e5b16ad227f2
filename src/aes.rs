//! The aesthetics store: named channels of plotted values.
//!
//! Statistics read and rewrite channels in place; the store is owned
//! exclusively by one pipeline invocation at a time.

use crate::color::Rgba;
use std::hash::{Hash, Hasher};

/// Label-formatting function for tick values.
pub type Labeler = fn(f32) -> String;

/// Default tick label formatter: integral values print without a fraction.
#[must_use]
pub fn default_labeler(value: f32) -> String {
    if value.fract() == 0.0 && value.abs() < 1.0e7 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// The fixed vocabulary of aesthetic channels statistics communicate through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Horizontal position.
    X,
    /// Vertical position.
    Y,
    /// Color (raw grouping values before scale application, visual colors after).
    Color,
    /// Left edge of a bin or box.
    XMin,
    /// Right edge of a bin or box.
    XMax,
    /// Bottom edge of a bin or box.
    YMin,
    /// Top edge of a bin or box.
    YMax,
    /// Boxplot median.
    Middle,
    /// Boxplot first quartile.
    LowerHinge,
    /// Boxplot third quartile.
    UpperHinge,
    /// Boxplot lower outlier threshold.
    LowerFence,
    /// Boxplot upper outlier threshold.
    UpperFence,
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Channel::X => "x",
            Channel::Y => "y",
            Channel::Color => "color",
            Channel::XMin => "x_min",
            Channel::XMax => "x_max",
            Channel::YMin => "y_min",
            Channel::YMax => "y_max",
            Channel::Middle => "middle",
            Channel::LowerHinge => "lower_hinge",
            Channel::UpperHinge => "upper_hinge",
            Channel::LowerFence => "lower_fence",
            Channel::UpperFence => "upper_fence",
        };
        f.write_str(name)
    }
}

/// Output axis for the tick statistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal axis: writes `xtick`, `xgrid`, `xtick_label`.
    X,
    /// Vertical axis: writes `ytick`, `ygrid`, `ytick_label`.
    Y,
}

/// A single value on a non-numeric-capable channel.
///
/// Equality and hashing are by value; numbers compare by their bit pattern so
/// the type can key group maps.
#[derive(Debug, Clone)]
pub enum ChannelValue {
    /// A numeric value.
    Num(f32),
    /// A categorical value.
    Text(String),
    /// A visual color produced by scale application.
    Color(Rgba),
}

impl PartialEq for ChannelValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ChannelValue::Num(a), ChannelValue::Num(b)) => a.to_bits() == b.to_bits(),
            (ChannelValue::Text(a), ChannelValue::Text(b)) => a == b,
            (ChannelValue::Color(a), ChannelValue::Color(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for ChannelValue {}

impl Hash for ChannelValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            ChannelValue::Num(v) => {
                0u8.hash(state);
                v.to_bits().hash(state);
            }
            ChannelValue::Text(s) => {
                1u8.hash(state);
                s.hash(state);
            }
            ChannelValue::Color(c) => {
                2u8.hash(state);
                c.hash(state);
            }
        }
    }
}

impl From<f32> for ChannelValue {
    fn from(v: f32) -> Self {
        ChannelValue::Num(v)
    }
}

impl From<&str> for ChannelValue {
    fn from(s: &str) -> Self {
        ChannelValue::Text(s.to_string())
    }
}

impl From<Rgba> for ChannelValue {
    fn from(c: Rgba) -> Self {
        ChannelValue::Color(c)
    }
}

/// The aesthetics store: every channel independently optional.
///
/// Statistics declare which channels they require and fail with
/// [`crate::Error::MissingAesthetic`] when one is absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aesthetics {
    /// Horizontal positions.
    pub x: Option<Vec<f32>>,
    /// Vertical positions.
    pub y: Option<Vec<f32>>,
    /// Color channel values.
    pub color: Option<Vec<ChannelValue>>,
    /// Left bin/box edges.
    pub x_min: Option<Vec<f32>>,
    /// Right bin/box edges.
    pub x_max: Option<Vec<f32>>,
    /// Bottom bin/box edges.
    pub y_min: Option<Vec<f32>>,
    /// Top bin/box edges.
    pub y_max: Option<Vec<f32>>,
    /// Boxplot medians, one per group.
    pub middle: Option<Vec<f32>>,
    /// Boxplot first quartiles, one per group.
    pub lower_hinge: Option<Vec<f32>>,
    /// Boxplot third quartiles, one per group.
    pub upper_hinge: Option<Vec<f32>>,
    /// Boxplot lower fences, one per group.
    pub lower_fence: Option<Vec<f32>>,
    /// Boxplot upper fences, one per group.
    pub upper_fence: Option<Vec<f32>>,
    /// Boxplot outliers, one vector per group.
    pub outliers: Option<Vec<Vec<f32>>>,
    /// X-axis tick positions.
    pub xtick: Option<Vec<f32>>,
    /// Y-axis tick positions.
    pub ytick: Option<Vec<f32>>,
    /// X-axis gridline positions.
    pub xgrid: Option<Vec<f32>>,
    /// Y-axis gridline positions.
    pub ygrid: Option<Vec<f32>>,
    /// Formatter for x-axis tick labels.
    pub xtick_label: Option<Labeler>,
    /// Formatter for y-axis tick labels.
    pub ytick_label: Option<Labeler>,
    /// Input formatter attached to the `x` channel.
    pub x_label: Option<Labeler>,
    /// Input formatter attached to the `y` channel.
    pub y_label: Option<Labeler>,
    /// Legend title for the color key.
    pub color_key_title: Option<String>,
}

impl Aesthetics {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `x` channel.
    #[must_use]
    pub fn with_x(mut self, x: Vec<f32>) -> Self {
        self.x = Some(x);
        self
    }

    /// Set the `y` channel.
    #[must_use]
    pub fn with_y(mut self, y: Vec<f32>) -> Self {
        self.y = Some(y);
        self
    }

    /// Set the `color` channel.
    #[must_use]
    pub fn with_color(mut self, color: Vec<ChannelValue>) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the `x` channel's label formatter.
    #[must_use]
    pub fn with_x_label(mut self, labeler: Labeler) -> Self {
        self.x_label = Some(labeler);
        self
    }

    /// Set the `y` channel's label formatter.
    #[must_use]
    pub fn with_y_label(mut self, labeler: Labeler) -> Self {
        self.y_label = Some(labeler);
        self
    }

    /// Read a numeric channel, if present.
    ///
    /// `Channel::Color` holds [`ChannelValue`]s rather than numbers and
    /// always returns `None` here.
    #[must_use]
    pub fn numeric(&self, channel: Channel) -> Option<&[f32]> {
        match channel {
            Channel::X => self.x.as_deref(),
            Channel::Y => self.y.as_deref(),
            Channel::Color => None,
            Channel::XMin => self.x_min.as_deref(),
            Channel::XMax => self.x_max.as_deref(),
            Channel::YMin => self.y_min.as_deref(),
            Channel::YMax => self.y_max.as_deref(),
            Channel::Middle => self.middle.as_deref(),
            Channel::LowerHinge => self.lower_hinge.as_deref(),
            Channel::UpperHinge => self.upper_hinge.as_deref(),
            Channel::LowerFence => self.lower_fence.as_deref(),
            Channel::UpperFence => self.upper_fence.as_deref(),
        }
    }

    /// The input label formatter attached to a channel, if any.
    ///
    /// Only the `x` and `y` channels carry one.
    #[must_use]
    pub fn labeler(&self, channel: Channel) -> Option<Labeler> {
        match channel {
            Channel::X => self.x_label,
            Channel::Y => self.y_label,
            _ => None,
        }
    }

    /// Write tick positions for an axis.
    pub fn set_ticks(&mut self, axis: Axis, ticks: Vec<f32>) {
        match axis {
            Axis::X => self.xtick = Some(ticks),
            Axis::Y => self.ytick = Some(ticks),
        }
    }

    /// Write gridline positions for an axis.
    pub fn set_grid(&mut self, axis: Axis, grid: Vec<f32>) {
        match axis {
            Axis::X => self.xgrid = Some(grid),
            Axis::Y => self.ygrid = Some(grid),
        }
    }

    /// Write the tick label formatter for an axis.
    pub fn set_tick_labeler(&mut self, axis: Axis, labeler: Labeler) {
        match axis {
            Axis::X => self.xtick_label = Some(labeler),
            Axis::Y => self.ytick_label = Some(labeler),
        }
    }
}
