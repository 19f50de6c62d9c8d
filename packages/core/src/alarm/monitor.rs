//! Threshold alarm - pulls readings from a source and classifies them

use crate::alarm::{
    thresholds::Thresholds,
    types::{AlarmState, AlarmStatus, Evaluation},
};
use crate::sensor::{MeasurementSource, Sensor, TryMeasurementSource};

/// Non-latching threshold alarm.
///
/// Each [`check`](Alarm::check) pulls exactly one reading. A reading below
/// the low bound or above the high bound turns the alarm on and bumps the
/// trigger counter; any in-range reading turns it off again. The counter
/// never decreases.
///
/// `check` takes `&mut self`; callers sharing an alarm across threads must
/// serialise access themselves.
#[derive(Debug)]
pub struct Alarm<S = Sensor> {
    source: S,
    thresholds: Thresholds,
    state: AlarmState,
    alarm_count: u64,
    checks: u64,
}

impl Alarm<Sensor> {
    /// Create an alarm backed by a freshly seeded default [`Sensor`].
    pub fn new() -> Self {
        Self::with_source(Sensor::new())
    }
}

impl Default for Alarm<Sensor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Alarm<S> {
    /// Create an alarm that reads from `source`, using the default band.
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            thresholds: Thresholds::default(),
            state: AlarmState::Normal,
            alarm_count: 0,
            checks: 0,
        }
    }

    /// Replace the band. Intended for construction time only.
    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// `true` when the most recent reading was out of range.
    pub fn alarm_on(&self) -> bool {
        self.state.is_triggered()
    }

    /// Out-of-range evaluations since construction.
    pub fn alarm_count(&self) -> u64 {
        self.alarm_count
    }

    pub fn state(&self) -> AlarmState {
        self.state
    }

    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    pub fn status(&self) -> AlarmStatus {
        AlarmStatus {
            alarm_on: self.alarm_on(),
            alarm_count: self.alarm_count,
            checks: self.checks,
            low_threshold: self.thresholds.low(),
            high_threshold: self.thresholds.high(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn into_source(self) -> S {
        self.source
    }

    fn record(&mut self, value: f64) -> Evaluation {
        if !value.is_finite() {
            tracing::warn!("Non-finite reading from measurement source: {}", value);
        }

        self.state = if self.thresholds.is_out_of_range(value) {
            self.alarm_count += 1;
            AlarmState::Triggered
        } else {
            AlarmState::Normal
        };
        self.checks += 1;

        tracing::debug!(
            value,
            state = ?self.state,
            alarm_count = self.alarm_count,
            "Alarm evaluated"
        );

        Evaluation {
            value,
            state: self.state,
        }
    }
}

impl<S: TryMeasurementSource> Alarm<S> {
    /// Run one evaluation against a fallible source.
    ///
    /// A source error is returned unchanged and leaves the alarm state and
    /// counter exactly as they were.
    pub fn try_check(&mut self) -> Result<Evaluation, S::Error> {
        let value = self.source.try_next_measure()?;
        Ok(self.record(value))
    }
}

impl<S: MeasurementSource> Alarm<S> {
    /// Run one evaluation cycle.
    pub fn check(&mut self) -> Evaluation {
        match self.try_check() {
            Ok(evaluation) => evaluation,
            Err(never) => match never {},
        }
    }
}
