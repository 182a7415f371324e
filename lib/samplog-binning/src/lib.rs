//! Bin mappings for histogram-style metrics.
//!
//! A bin mapping assigns every floating-point sample to exactly one bucket in a small,
//! contiguous, zero-based index space. Index 0 is always the underflow bucket and the last
//! index is always the overflow bucket; the interior buckets partition the configured sample
//! range without gaps or overlaps.
#![deny(warnings)]
#![deny(missing_docs)]

mod error;
pub use self::error::BinMappingError;

mod uniform;
pub use self::uniform::UniformBins;

mod scaled;
pub use self::scaled::ScaledBins;

/// Maps samples to histogram bin indices.
///
/// The mapping defines the relationship between floating-point samples and integer bin
/// indices. A mapping's configuration is immutable after construction, so values can be
/// shared freely across concurrent callers.
pub trait BinMapping: Send + Sync {
    /// Returns the total number of bins this mapping can produce, including the underflow
    /// and overflow bins.
    fn bin_count(&self) -> u32;

    /// Returns the zero-based bin index for the given sample.
    ///
    /// This is a total function: every `f64` input, including `NaN`, the infinities, and
    /// values far outside the configured range, resolves to an index in
    /// `[0, bin_count())`. Index 0 is the underflow bin and `bin_count() - 1` is the
    /// overflow bin.
    fn bin_index(&self, sample: f64) -> u32;
}
