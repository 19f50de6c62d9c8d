//! Deterministic measurement sources.
//!
//! Used by tests and by hosts that want to replay a known trace through
//! the alarm.

use std::collections::VecDeque;

use crate::error::SensorError;
use crate::sensor::source::{MeasurementSource, TryMeasurementSource};

/// Source that returns the same reading on every call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedSource(pub f64);

impl MeasurementSource for FixedSource {
    fn next_measure(&mut self) -> f64 {
        self.0
    }
}

/// Source that yields a scripted sequence of readings in order.
///
/// Once the script is used up every further call fails with
/// [`SensorError::Exhausted`].
#[derive(Debug, Clone, Default)]
pub struct ReplaySource {
    readings: VecDeque<f64>,
}

impl ReplaySource {
    pub fn new(readings: impl IntoIterator<Item = f64>) -> Self {
        Self {
            readings: readings.into_iter().collect(),
        }
    }

    /// Number of readings not yet replayed.
    pub fn remaining(&self) -> usize {
        self.readings.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.readings.is_empty()
    }
}

impl TryMeasurementSource for ReplaySource {
    type Error = SensorError;

    fn try_next_measure(&mut self) -> Result<f64, SensorError> {
        self.readings.pop_front().ok_or(SensorError::Exhausted)
    }
}
