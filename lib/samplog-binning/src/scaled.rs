//! Scaled (geometric-width) bin mapping.

use snafu::ensure;

use crate::error::{BinMappingError, InvalidBinCount, InvalidBinWidth, InvalidScaleFactor};
use crate::BinMapping;

/// Scaled bin mapping.
///
/// Interior bin widths grow geometrically: the first interior bin is `first_bin_width` wide,
/// and each subsequent bin is `scale_factor` times wider than the one before it. This gives
/// fine resolution near the minimum and coarse resolution in the tail, which suits
/// long-tailed distributions such as latencies or sizes.
///
/// The interior bins together cover `[min_value, exclusive_max_value)`, where the exclusive
/// maximum is the closed form of the geometric series:
/// `min_value + first_bin_width * (scale_factor^n - 1) / (scale_factor - 1)` for `n` interior
/// bins. As with [`UniformBins`](crate::UniformBins), index 0 is the underflow bin, the last
/// index is the overflow bin, and `NaN` samples are routed to overflow.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaledBins {
    min_value: f64,
    exclusive_max_value: f64,
    first_bin_width: f64,
    scale_factor: f64,
    /// Precomputed 1/ln(scale_factor).
    multiplier: f64,
    bin_count: u32,
}

impl ScaledBins {
    /// Creates a scaled bin mapping with `bin_count` interior bins starting at `min_value`,
    /// where the first interior bin is `first_bin_width` wide and each subsequent bin is
    /// `scale_factor` times wider than the previous one.
    ///
    /// Two additional bins are reserved automatically for underflow and overflow, so the
    /// resulting mapping reports `bin_count() == bin_count + 2`.
    ///
    /// # Errors
    ///
    /// Returns an error if `bin_count` is zero, `first_bin_width` is not positive and
    /// finite, or `scale_factor` is not a finite number greater than one. Equal-width bins
    /// are the uniform mapping's job, so a scale factor of exactly one is rejected.
    pub fn new(
        bin_count: u32, min_value: f64, first_bin_width: f64, scale_factor: f64,
    ) -> Result<Self, BinMappingError> {
        ensure!((1..=u32::MAX - 2).contains(&bin_count), InvalidBinCount);
        ensure!(
            first_bin_width.is_finite() && first_bin_width > 0.0,
            InvalidBinWidth { width: first_bin_width }
        );
        ensure!(
            scale_factor.is_finite() && scale_factor > 1.0,
            InvalidScaleFactor { scale_factor }
        );

        // Closed form of the geometric series: the n interior bins together cover
        // first_bin_width * (scale^n - 1) / (scale - 1).
        let covered = first_bin_width * (scale_factor.powi(bin_count as i32) - 1.0) / (scale_factor - 1.0);
        let exclusive_max_value = min_value + covered;

        Ok(Self {
            min_value,
            exclusive_max_value,
            first_bin_width,
            scale_factor,
            multiplier: 1.0 / scale_factor.ln(),
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

    /// Returns the width of the first interior bin.
    pub fn first_bin_width(&self) -> f64 {
        self.first_bin_width
    }

    /// Returns the ratio between the widths of consecutive interior bins.
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Returns the inclusive lower bound of the interior bin at `index`.
    fn interior_lower_bound(&self, index: u32) -> f64 {
        self.min_value
            + self.first_bin_width * (self.scale_factor.powi(index as i32 - 1) - 1.0)
                / (self.scale_factor - 1.0)
    }
}

impl BinMapping for ScaledBins {
    fn bin_count(&self) -> u32 {
        self.bin_count
    }

    fn bin_index(&self, sample: f64) -> u32 {
        if sample.is_nan() {
            return self.bin_count - 1;
        }

        if sample < self.min_value {
            return 0;
        }

        if sample >= self.exclusive_max_value {
            return self.bin_count - 1;
        }

        // Invert the geometric series: interior bin k starts at
        // min + first_bin_width * (scale^(k-1) - 1) / (scale - 1), so
        // k = floor(log_scale(1 + (sample - min) * (scale - 1) / first_bin_width)) + 1.
        let scaled = 1.0 + (sample - self.min_value) * (self.scale_factor - 1.0) / self.first_bin_width;
        let approximate = (scaled.ln() * self.multiplier) as u32 + 1;

        // The logarithm is inexact right at bin boundaries; shift by one where the sample
        // falls outside the computed bin's half-open range.
        let mut index = approximate.min(self.bin_count - 2);
        if sample < self.interior_lower_bound(index) {
            index -= 1;
        } else if index < self.bin_count - 2 && sample >= self.interior_lower_bound(index + 1) {
            index += 1;
        }

        index
    }
}
