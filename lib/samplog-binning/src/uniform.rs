//! Uniform (equal-width) bin mapping.

use snafu::ensure;

use crate::error::{BinMappingError, InvalidBinCount, InvalidRange};
use crate::BinMapping;

/// Uniform bin mapping.
///
/// Partitions the half-open range `[min_value, exclusive_max_value)` into a fixed number of
/// equal-width, half-open interior bins. The minimum is inclusive to the first interior bin;
/// samples below it go to the underflow bin (index 0), and samples at or above the exclusive
/// maximum go to the overflow bin (last index).
///
/// `NaN` samples are routed to the overflow bin so that [`bin_index`](BinMapping::bin_index)
/// stays total over all floats.
#[derive(Clone, Debug, PartialEq)]
pub struct UniformBins {
    min_value: f64,
    exclusive_max_value: f64,
    bin_width: f64,
    bin_count: u32,
}

impl UniformBins {
    /// Creates a uniform bin mapping with `bin_count` interior bins over
    /// `[min_value, exclusive_max_value)`.
    ///
    /// Two additional bins are reserved automatically for underflow and overflow, so the
    /// resulting mapping reports `bin_count() == bin_count + 2`. For accurate measurement of
    /// integer samples up to some `k_max`, set `exclusive_max_value` to `k_max + 1`.
    ///
    /// # Errors
    ///
    /// Returns an error if `bin_count` is zero or if `exclusive_max_value` does not exceed
    /// `min_value` (which also rejects `NaN` bounds). No other validation is performed:
    /// extreme but valid ranges are accepted, at the cost of precision in the derived bin
    /// width.
    pub fn new(bin_count: u32, min_value: f64, exclusive_max_value: f64) -> Result<Self, BinMappingError> {
        ensure!((1..=u32::MAX - 2).contains(&bin_count), InvalidBinCount);
        ensure!(
            exclusive_max_value > min_value,
            InvalidRange {
                min_value,
                exclusive_max_value
            }
        );

        let bin_width = (exclusive_max_value - min_value) / bin_count as f64;

        Ok(Self {
            min_value,
            exclusive_max_value,
            bin_width,
            // Two extra bins for underflow and overflow.
            bin_count: bin_count + 2,
        })
    }

    /// Returns the inclusive lower bound of the interior bins.
    pub fn min_value(&self) -> f64 {
        self.min_value
    }

    /// Returns the exclusive upper bound of the interior bins.
    pub fn exclusive_max_value(&self) -> f64 {
        self.exclusive_max_value
    }

    /// Returns the width of each interior bin.
    pub fn bin_width(&self) -> f64 {
        self.bin_width
    }
}

impl BinMapping for UniformBins {
    fn bin_count(&self) -> u32 {
        self.bin_count
    }

    fn bin_index(&self, sample: f64) -> u32 {
        if sample.is_nan() {
            // NaN fails every ordered comparison below, so it would otherwise reach the
            // arithmetic branch and produce a meaningless index. Route it to overflow.
            return self.bin_count - 1;
        }

        if sample < self.min_value {
            // Also catches -infinity.
            return 0;
        }

        if sample >= self.exclusive_max_value {
            // Also catches +infinity.
            return self.bin_count - 1;
        }

        let index = ((sample - self.min_value) / self.bin_width) as u32 + 1;

        // Rounding in the division at the top edge of the range must not spill into the
        // overflow bin.
        index.min(self.bin_count - 2)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_rejects_zero_bin_count() {
        assert_eq!(UniformBins::new(0, 0.0, 10.0), Err(BinMappingError::InvalidBinCount));
    }

    #[test]
    fn test_rejects_inverted_range() {
        assert!(matches!(
            UniformBins::new(5, 10.0, 5.0),
            Err(BinMappingError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_rejects_empty_range() {
        assert!(matches!(
            UniformBins::new(5, 1.0, 1.0),
            Err(BinMappingError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_rejects_nan_bounds() {
        assert!(UniformBins::new(5, f64::NAN, 10.0).is_err());
        assert!(UniformBins::new(5, 0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_ten_bins_zero_to_ten() {
        let bins = UniformBins::new(10, 0.0, 10.0).unwrap();

        assert_eq!(bins.bin_count(), 12);
        assert_eq!(bins.min_value(), 0.0);
        assert_eq!(bins.exclusive_max_value(), 10.0);
        assert_eq!(bins.bin_width(), 1.0);
        assert_eq!(bins.bin_index(-1.0), 0);
        assert_eq!(bins.bin_index(0.0), 1);
        assert_eq!(bins.bin_index(5.5), 6);
        assert_eq!(bins.bin_index(9.999), 10);
        assert_eq!(bins.bin_index(10.0), 11);
        assert_eq!(bins.bin_index(1000.0), 11);
    }

    #[test]
    fn test_underflow_boundary() {
        let bins = UniformBins::new(10, 0.0, 10.0).unwrap();

        assert_eq!(bins.bin_index(-f64::EPSILON), 0);
        assert_eq!(bins.bin_index(0.0), 1);
    }

    #[test]
    fn test_overflow_boundary() {
        let bins = UniformBins::new(10, 0.0, 10.0).unwrap();

        assert_eq!(bins.bin_index(10.0), 11);

        // The largest double strictly below the exclusive max must land in the last interior
        // bin, not overflow.
        let just_below_max = f64::from_bits(10.0f64.to_bits() - 1);
        assert_eq!(bins.bin_index(just_below_max), 10);
    }

    #[test]
    fn test_non_finite_samples() {
        let bins = UniformBins::new(10, 0.0, 10.0).unwrap();

        assert_eq!(bins.bin_index(f64::NEG_INFINITY), 0);
        assert_eq!(bins.bin_index(f64::INFINITY), 11);
        assert_eq!(bins.bin_index(f64::NAN), 11);
    }

    #[test]
    fn test_negative_range() {
        let bins = UniformBins::new(4, -20.0, -12.0).unwrap();

        assert_eq!(bins.bin_count(), 6);
        assert_eq!(bins.bin_index(-25.0), 0);
        assert_eq!(bins.bin_index(-20.0), 1);
        assert_eq!(bins.bin_index(-15.0), 3);
        assert_eq!(bins.bin_index(-12.0), 5);
    }

    fn arb_sample() -> impl Strategy<Value = f64> {
        prop::num::f64::POSITIVE
            | prop::num::f64::NEGATIVE
            | prop::num::f64::ZERO
            | prop::num::f64::SUBNORMAL
            | prop::num::f64::NORMAL
            | prop::num::f64::INFINITE
            | prop::num::f64::QUIET_NAN
    }

    proptest! {
        #[test]
        fn property_test_bin_index_is_total(interior in 1u32..512, sample in arb_sample()) {
            let bins = UniformBins::new(interior, -1_000.0, 1_000.0).unwrap();

            prop_assert_eq!(bins.bin_count(), interior + 2);
            prop_assert!(bins.bin_index(sample) < bins.bin_count());
        }

        #[test]
        fn property_test_interior_monotonicity(
            interior in 1u32..512,
            a in -1_000.0..1_000.0f64,
            b in -1_000.0..1_000.0f64
        ) {
            let bins = UniformBins::new(interior, -1_000.0, 1_000.0).unwrap();

            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(bins.bin_index(lo) <= bins.bin_index(hi));
        }
    }
}
