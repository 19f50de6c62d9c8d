//! Error types for the monitor.
//!
//! The alarm core itself has no failure path: only fallible measurement
//! sources and the host binary (configuration, metrics registry) can fail.

use thiserror::Error;

/// Errors raised by fallible measurement sources.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SensorError {
    #[error("Measurement source exhausted")]
    Exhausted,

    #[error("Measurement source unavailable: {message}")]
    Unavailable { message: String },
}

impl SensorError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable { message: message.into() }
    }
}

/// Unified application error.
///
/// Covers every way the host binary can fail before or while driving the
/// alarm.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Sensor error: {0}")]
    Sensor(#[from] SensorError),

    #[error("Metrics error: {0}")]
    Metrics(#[from] prometheus::Error),

    #[error("Serialisation error: {0}")]
    Serialize(#[from] serde_json::Error),
}
