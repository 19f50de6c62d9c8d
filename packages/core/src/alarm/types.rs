//! Data types reported by the alarm

use serde::{Deserialize, Serialize};

/// Outcome of the most recent evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlarmState {
    /// Last reading was within the band, or nothing has been checked yet.
    #[default]
    Normal,
    /// Last reading was outside the band.
    Triggered,
}

impl AlarmState {
    pub fn is_triggered(&self) -> bool {
        matches!(self, AlarmState::Triggered)
    }
}

/// Result of a single `check()` cycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Reading pulled from the source.
    pub value: f64,
    /// Classification of `value`.
    pub state: AlarmState,
}

/// Point-in-time view of an alarm, suitable for logging or printing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlarmStatus {
    pub alarm_on: bool,
    pub alarm_count: u64,
    /// Completed evaluations since construction.
    pub checks: u64,
    pub low_threshold: f64,
    pub high_threshold: f64,
}
