//! Threshold Alarm Module
//!
//! Classifies each reading pulled from a measurement source against a
//! closed `[low, high]` band and counts out-of-range evaluations.

pub mod monitor;
pub mod thresholds;
pub mod types;

pub use monitor::Alarm;
pub use thresholds::{Thresholds, HIGH_THRESHOLD, LOW_THRESHOLD};
pub use types::*;
