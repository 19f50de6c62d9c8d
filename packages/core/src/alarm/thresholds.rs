use serde::Serialize;

use crate::error::AppError;

/// Lower bound of the in-range band.
pub const LOW_THRESHOLD: f64 = 17.0;

/// Upper bound of the in-range band.
pub const HIGH_THRESHOLD: f64 = 21.0;

/// Closed band of acceptable readings. Both bounds are in range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Thresholds {
    low: f64,
    high: f64,
}

impl Thresholds {
    /// Build a band, rejecting non-finite bounds and `low > high`.
    pub fn new(low: f64, high: f64) -> Result<Self, AppError> {
        if !low.is_finite() || !high.is_finite() {
            return Err(AppError::Config(format!(
                "Thresholds must be finite (low: {}, high: {})",
                low, high
            )));
        }
        if low > high {
            return Err(AppError::Config(format!(
                "Low threshold {} is above high threshold {}",
                low, high
            )));
        }
        Ok(Self { low, high })
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    /// `true` when `value` lies strictly outside the band.
    ///
    /// NaN compares false against both bounds and is therefore in range.
    pub fn is_out_of_range(&self, value: f64) -> bool {
        value < self.low || value > self.high
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            low: LOW_THRESHOLD,
            high: HIGH_THRESHOLD,
        }
    }
}
