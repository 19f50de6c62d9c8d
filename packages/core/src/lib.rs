// Library root: exposes the alarm core and the host-side modules used by
// `src/main.rs` and the integration tests in `tests/`.

pub mod alarm;
pub mod error;
pub mod metrics;
pub mod scheduler;
pub mod sensor;

// These modules are only needed by the binary.
// Declared pub so integration tests can reach them if needed.
pub mod cli;
pub mod config;
pub mod logging;

pub use alarm::{Alarm, AlarmState, Evaluation, Thresholds};
pub use sensor::{MeasurementSource, Sensor, TryMeasurementSource};
