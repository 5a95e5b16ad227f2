//! Error types for vizstat operations.

use crate::aes::Channel;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while applying statistics.
///
/// All errors are raised synchronously at the point of violation; they are
/// programming or configuration errors in the calling plot specification,
/// not transient failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required aesthetic channel is absent from the store.
    #[error("missing aesthetic: statistic requires the `{channel}` channel")]
    MissingAesthetic {
        /// The channel the statistic requires.
        channel: Channel,
    },

    /// No scale is registered for a channel the statistic needs one for.
    #[error("no scale registered for the `{channel}` channel")]
    MissingScale {
        /// The channel lacking a scale.
        channel: Channel,
    },

    /// A scale is registered but is the wrong variant for the statistic.
    #[error("scale for `{channel}` has the wrong variant: expected {expected}")]
    ScaleVariant {
        /// The channel whose scale was rejected.
        channel: Channel,
        /// The variant the statistic requires.
        expected: &'static str,
    },

    /// Empty data provided where non-empty is required.
    #[error("empty data provided")]
    EmptyData,
}
