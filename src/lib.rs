//! # Vizstat
//!
//! Statistical transforms for Grammar of Graphics visualization pipelines.
//!
//! This crate is the statistic stage of a plotting engine: it converts raw
//! plotted coordinates into derived rendering primitives — histogram bins,
//! 2D density bins, axis tick and gridline positions, and boxplot
//! five-number summaries — before a separate geometry stage draws them.
//!
//! ## Quick Start
//!
//! ```rust
//! use vizstat::prelude::*;
//!
//! let mut aes = Aesthetics::new().with_x(vec![1.0, 2.0, 2.0, 3.0, 5.0]);
//! let scales = ScaleMap::new();
//!
//! apply_statistics(
//!     &[Statistic::histogram(), Statistic::x_ticks()],
//!     &scales,
//!     &mut aes,
//! )
//! .unwrap();
//!
//! assert!(aes.x_min.is_some());
//! assert!(aes.xtick.is_some());
//! ```
//!
//! ## Design
//!
//! Statistics communicate purely through the named channels of an
//! [`aes::Aesthetics`] store, applied strictly in sequence within one
//! pipeline invocation. There is no shared state across invocations, so
//! independent stores may be processed in parallel.
//!
//! ## Academic References
//!
//! - Wilkinson, L. (2005). *The Grammar of Graphics*. Springer.
//! - Sturges, H. A. (1926). "The Choice of a Class Interval." JASA.
//! - Tukey, J. W. (1977). *Exploratory Data Analysis*. (hinges and fences)

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in numeric/statistics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

/// The aesthetics store and its channel vocabulary.
pub mod aes;

/// Bin-count selection for histogram and rectangular binning.
pub mod binning;

/// Color values and ramps for continuous color scales.
pub mod color;

/// Scales mapping raw channel values to visual values.
pub mod scale;

/// Statistical transformations and the pipeline that applies them.
pub mod stat;

/// Continuous tick placement over numeric ranges.
pub mod ticks;

/// Error types for vizstat operations.
pub mod error;

pub use error::{Error, Result};

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use vizstat::prelude::*;
/// ```
pub mod prelude {
    pub use crate::aes::{Aesthetics, Axis, Channel, ChannelValue, Labeler};
    pub use crate::binning::BinStrategy;
    pub use crate::color::Rgba;
    pub use crate::error::{Error, Result};
    pub use crate::scale::{ContinuousColorScale, DiscreteColorScale, Scale, ScaleMap};
    pub use crate::stat::{apply_statistics, Statistic, TickConfig};
    pub use crate::ticks::optimize_ticks;
}
