use std::env;
use std::str::FromStr;

use crate::alarm::{Thresholds, HIGH_THRESHOLD, LOW_THRESHOLD};
use crate::cli::Cli;
use crate::error::AppError;

/// Polling cadence used when `POLL_INTERVAL_MS` is not set.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1_000;

#[derive(Debug, Clone)]
pub struct Config {
    pub poll_interval_ms: u64,
    pub thresholds: Thresholds,
    pub sensor_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup. Every variable is
    /// optional; missing ones fall back to the built-in defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let poll_interval_ms =
            parse_var(&lookup, "POLL_INTERVAL_MS")?.unwrap_or(DEFAULT_POLL_INTERVAL_MS);
        if poll_interval_ms == 0 {
            return Err(AppError::Config(
                "POLL_INTERVAL_MS must be greater than zero".into(),
            ));
        }

        let low = parse_var(&lookup, "ALARM_LOW_THRESHOLD")?.unwrap_or(LOW_THRESHOLD);
        let high = parse_var(&lookup, "ALARM_HIGH_THRESHOLD")?.unwrap_or(HIGH_THRESHOLD);
        let thresholds = Thresholds::new(low, high)?;

        let sensor_seed = parse_var(&lookup, "SENSOR_SEED")?;

        Ok(Self {
            poll_interval_ms,
            thresholds,
            sensor_seed,
        })
    }

    /// Apply command-line overrides on top of the environment.
    pub fn merge_cli(mut self, cli: &Cli) -> Result<Self, AppError> {
        if let Some(interval) = cli.poll_interval_ms {
            if interval == 0 {
                return Err(AppError::Config(
                    "--poll-interval-ms must be greater than zero".into(),
                ));
            }
            self.poll_interval_ms = interval;
        }

        if cli.low_threshold.is_some() || cli.high_threshold.is_some() {
            self.thresholds = Thresholds::new(
                cli.low_threshold.unwrap_or(self.thresholds.low()),
                cli.high_threshold.unwrap_or(self.thresholds.high()),
            )?;
        }

        if cli.seed.is_some() {
            self.sensor_seed = cli.seed;
        }

        Ok(self)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>, AppError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| AppError::Config(format!("{} must be a valid number", key))),
    }
}
