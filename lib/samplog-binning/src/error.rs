//! Error types for bin mapping construction.

use snafu::Snafu;

/// Errors that can occur when constructing a bin mapping.
///
/// All validation happens at construction time: a mapping that constructs successfully can
/// never fail to resolve a bin index at call time.
#[derive(Debug, Snafu, Clone, PartialEq)]
#[snafu(context(suffix(false)), visibility(pub(crate)))]
pub enum BinMappingError {
    /// The requested bin count was zero, or too large to leave room for the underflow and
    /// overflow bins.
    #[snafu(display("bin count must be positive"))]
    InvalidBinCount,

    /// The exclusive maximum did not exceed the minimum.
    #[snafu(display(
        "invalid range: exclusive max ({exclusive_max_value}) must exceed min ({min_value})"
    ))]
    InvalidRange {
        /// The configured minimum value.
        min_value: f64,
        /// The configured exclusive maximum value.
        exclusive_max_value: f64,
    },

    /// The first bin width was not a positive, finite number.
    #[snafu(display("first bin width must be positive and finite, got {width}"))]
    InvalidBinWidth {
        /// The configured first bin width.
        width: f64,
    },

    /// The scale factor was not a finite number greater than one.
    #[snafu(display("scale factor must be finite and greater than one, got {scale_factor}"))]
    InvalidScaleFactor {
        /// The configured scale factor.
        scale_factor: f64,
    },
}
