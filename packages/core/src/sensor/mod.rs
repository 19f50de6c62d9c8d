//! Measurement sources
//!
//! The alarm depends only on the [`MeasurementSource`] capability; this
//! module provides the default random [`Sensor`] plus deterministic
//! sources for tests and replay.

pub mod source;
pub mod random;
pub mod replay;

pub use source::{MeasurementSource, TryMeasurementSource};
pub use random::{Sensor, SENSOR_OFFSET, SENSOR_SPAN};
pub use replay::{FixedSource, ReplaySource};
