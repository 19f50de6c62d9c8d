//! Integration tests for the alarm's observable contract.
//!
//! Scenario tests replay fixed reading sequences through the public API;
//! the property tests check classification, counting and non-latching
//! behaviour over arbitrary readings with `proptest`.

use proptest::prelude::*;

use radioactivity_monitor::{
    alarm::{Alarm, AlarmState, HIGH_THRESHOLD, LOW_THRESHOLD},
    error::SensorError,
    sensor::{FixedSource, MeasurementSource, ReplaySource, Sensor},
};

// ---- Helpers ----------------------------------------------------------------

/// Run every reading in `readings` through a fresh alarm.
fn run_sequence(readings: &[f64]) -> Alarm<ReplaySource> {
    let mut alarm = Alarm::with_source(ReplaySource::new(readings.iter().copied()));
    for _ in readings {
        alarm.try_check().expect("scripted reading available");
    }
    alarm
}

fn out_of_range(value: f64) -> bool {
    value < LOW_THRESHOLD || value > HIGH_THRESHOLD
}

/// Readings spread well beyond both sides of the band.
fn reading() -> impl Strategy<Value = f64> {
    -100.0f64..100.0
}

// ---- Scenarios --------------------------------------------------------------

#[test]
fn reading_in_range_keeps_alarm_off() {
    let alarm = run_sequence(&[18.5]);
    assert!(!alarm.alarm_on());
    assert_eq!(alarm.alarm_count(), 0);
}

#[test]
fn reading_above_range_triggers_once() {
    let alarm = run_sequence(&[22.0]);
    assert!(alarm.alarm_on());
    assert_eq!(alarm.alarm_count(), 1);
}

#[test]
fn reading_below_range_triggers_once() {
    let alarm = run_sequence(&[16.9]);
    assert!(alarm.alarm_on());
    assert_eq!(alarm.alarm_count(), 1);
}

#[test]
fn reading_at_low_bound_is_in_range() {
    let alarm = run_sequence(&[17.0]);
    assert!(!alarm.alarm_on());
    assert_eq!(alarm.alarm_count(), 0);
}

#[test]
fn reading_at_high_bound_is_in_range() {
    let alarm = run_sequence(&[21.0]);
    assert!(!alarm.alarm_on());
    assert_eq!(alarm.alarm_count(), 0);
}

#[test]
fn two_high_readings_count_twice() {
    let alarm = run_sequence(&[22.0, 22.0]);
    assert_eq!(alarm.alarm_count(), 2);
}

#[test]
fn readings_just_outside_bounds_trigger() {
    let below = run_sequence(&[LOW_THRESHOLD - f64::EPSILON * 16.0]);
    let above = run_sequence(&[HIGH_THRESHOLD + f64::EPSILON * 16.0]);
    assert!(below.alarm_on());
    assert!(above.alarm_on());
}

#[test]
fn alarm_is_not_latched() {
    let alarm = run_sequence(&[25.0, 19.0]);
    assert!(!alarm.alarm_on());
    assert_eq!(alarm.state(), AlarmState::Normal);
    assert_eq!(alarm.alarm_count(), 1);
}

#[test]
fn default_sensor_alarm_checks_without_failure() {
    let mut alarm = Alarm::new();
    for _ in 0..1_000 {
        alarm.check();
    }
    assert_eq!(alarm.status().checks, 1_000);
    assert!(alarm.alarm_count() <= 1_000);
}

#[test]
fn exhausted_source_error_propagates_unchanged() {
    let mut alarm = run_sequence(&[30.0]);
    assert_eq!(alarm.try_check(), Err(SensorError::Exhausted));
    assert!(alarm.alarm_on());
    assert_eq!(alarm.alarm_count(), 1);
}

#[test]
fn boxed_sources_can_be_swapped_at_runtime() {
    let sources: Vec<Box<dyn MeasurementSource>> =
        vec![Box::new(FixedSource(23.0)), Box::new(Sensor::seeded(11))];

    for source in sources {
        let mut alarm = Alarm::with_source(source);
        alarm.check();
        assert_eq!(alarm.status().checks, 1);
    }
}

// ---- Properties -------------------------------------------------------------

proptest! {
    #[test]
    fn in_range_reading_never_triggers(value in LOW_THRESHOLD..=HIGH_THRESHOLD) {
        let mut alarm = Alarm::with_source(FixedSource(value));
        alarm.check();
        prop_assert!(!alarm.alarm_on());
        prop_assert_eq!(alarm.alarm_count(), 0);
    }

    #[test]
    fn out_of_range_reading_triggers_exactly_once(
        value in prop_oneof![-1.0e6f64..LOW_THRESHOLD, (HIGH_THRESHOLD + 1.0e-9)..1.0e6f64],
        prior in proptest::collection::vec(reading(), 0..20),
    ) {
        let mut alarm = run_sequence(&prior);
        let before = alarm.alarm_count();

        *alarm.source_mut() = ReplaySource::new([value]);
        alarm.try_check().unwrap();

        prop_assert!(alarm.alarm_on());
        prop_assert_eq!(alarm.alarm_count(), before + 1);
    }

    #[test]
    fn count_is_monotonic_and_matches_out_of_range_readings(
        readings in proptest::collection::vec(reading(), 1..100),
    ) {
        let mut alarm = Alarm::with_source(ReplaySource::new(readings.iter().copied()));
        let mut previous = 0;

        for value in &readings {
            alarm.try_check().unwrap();
            prop_assert!(alarm.alarm_count() >= previous);
            prop_assert_eq!(alarm.alarm_on(), out_of_range(*value));
            previous = alarm.alarm_count();
        }

        let expected = readings.iter().filter(|v| out_of_range(**v)).count() as u64;
        prop_assert_eq!(alarm.alarm_count(), expected);
    }

    #[test]
    fn seeded_sensor_stays_in_default_range(seed in any::<u64>()) {
        let mut sensor = Sensor::seeded(seed);
        for _ in 0..50 {
            let value = sensor.next_measure();
            prop_assert!((16.0..22.0).contains(&value));
        }
    }
}
