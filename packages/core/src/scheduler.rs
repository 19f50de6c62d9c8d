//! Alarm polling scheduler.
//!
//! Plays the part of the external caller: it owns the alarm for the whole
//! run, calls `try_check()` once per tick, records the outcome in the
//! Prometheus metrics and logs state transitions. Because the loop is the
//! alarm's only owner, evaluations are serialised without any lock.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::signal;
use tokio::time;

use crate::alarm::{Alarm, AlarmStatus, Evaluation};
use crate::metrics::AppMetrics;
use crate::sensor::TryMeasurementSource;

/// Summary of a finished polling run.
#[derive(Debug, Clone, Serialize)]
pub struct PollingSummary {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    /// Ticks processed, including those whose reading failed.
    pub ticks: u64,
    pub status: AlarmStatus,
}

/// Run the alarm polling loop until `Ctrl+C` (SIGINT) is received or
/// `max_ticks` ticks have been processed.
pub async fn run_alarm_polling<S>(
    alarm: &mut Alarm<S>,
    metrics: &AppMetrics,
    poll_interval_ms: u64,
    max_ticks: Option<u64>,
) -> PollingSummary
where
    S: TryMeasurementSource,
    S::Error: Display,
{
    let shutdown = async {
        match signal::ctrl_c().await {
            Ok(()) => tracing::info!("Shutdown signal received. Stopping polling."),
            Err(err) => tracing::error!("Unable to listen for shutdown signal: {}", err),
        }
    };

    run_until(alarm, metrics, poll_interval_ms, max_ticks, shutdown).await
}

/// Polling loop with an injectable shutdown future. Extracted for testability.
pub async fn run_until<S, F>(
    alarm: &mut Alarm<S>,
    metrics: &AppMetrics,
    poll_interval_ms: u64,
    max_ticks: Option<u64>,
    shutdown: F,
) -> PollingSummary
where
    S: TryMeasurementSource,
    S::Error: Display,
    F: Future<Output = ()>,
{
    let started_at = Utc::now();
    let mut interval = time::interval(Duration::from_millis(poll_interval_ms));
    let mut ticks = 0u64;

    tokio::pin!(shutdown);

    tracing::info!(
        "Alarm polling started (interval: {}ms, band: [{}, {}])",
        poll_interval_ms,
        alarm.thresholds().low(),
        alarm.thresholds().high(),
    );

    loop {
        if max_ticks.is_some_and(|max| ticks >= max) {
            tracing::info!("Reached {} ticks. Stopping polling.", ticks);
            break;
        }

        tokio::select! {
            _ = interval.tick() => {
                poll_once(alarm, metrics);
                ticks += 1;
            }

            _ = &mut shutdown => {
                break;
            }
        }
    }

    let status = alarm.status();
    tracing::info!(
        "Alarm polling stopped cleanly — {} checks, {} triggers, alarm {}",
        status.checks,
        status.alarm_count,
        if status.alarm_on { "ON" } else { "off" },
    );

    PollingSummary {
        started_at,
        finished_at: Utc::now(),
        ticks,
        status,
    }
}

/// Execute a single evaluation cycle.
///
/// A source error is logged and counted; the alarm is left untouched and
/// the loop carries on with the next tick.
pub fn poll_once<S>(alarm: &mut Alarm<S>, metrics: &AppMetrics) -> Option<Evaluation>
where
    S: TryMeasurementSource,
    S::Error: Display,
{
    let was_on = alarm.alarm_on();

    let evaluation = match alarm.try_check() {
        Ok(evaluation) => evaluation,
        Err(err) => {
            metrics.check_errors_total.inc();
            tracing::error!("Measurement failed — skipping tick: {}", err);
            return None;
        }
    };

    metrics.record(&evaluation);

    if evaluation.state.is_triggered() {
        tracing::warn!(
            "Alarm ON — reading {:.3} outside [{}, {}] (count: {})",
            evaluation.value,
            alarm.thresholds().low(),
            alarm.thresholds().high(),
            alarm.alarm_count(),
        );
    } else if was_on {
        tracing::info!("Alarm cleared — reading {:.3} back in range", evaluation.value);
    } else {
        tracing::debug!("Reading {:.3} in range", evaluation.value);
    }

    Some(evaluation)
}
