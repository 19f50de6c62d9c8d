//! Measurement Source Interface
//!
//! Abstraction over anything that can produce a scalar reading on demand.

use std::convert::Infallible;

/// A source that always yields a reading.
///
/// Implementations may be random, deterministic or replay-based. The
/// receiver is `&mut self` so a source can advance its own generator or
/// cursor; no other side effect is visible to the caller.
pub trait MeasurementSource {
    /// Produce the next reading.
    fn next_measure(&mut self) -> f64;
}

/// A source whose readings can fail.
///
/// Every [`MeasurementSource`] is also a `TryMeasurementSource` that never
/// fails, so the alarm can be written once against this trait.
pub trait TryMeasurementSource {
    type Error;

    /// Produce the next reading, or the reason none is available.
    fn try_next_measure(&mut self) -> Result<f64, Self::Error>;
}

impl<S: MeasurementSource + ?Sized> TryMeasurementSource for S {
    type Error = Infallible;

    fn try_next_measure(&mut self) -> Result<f64, Infallible> {
        Ok(self.next_measure())
    }
}

impl<S: MeasurementSource + ?Sized> MeasurementSource for &mut S {
    fn next_measure(&mut self) -> f64 {
        (**self).next_measure()
    }
}

impl<S: MeasurementSource + ?Sized> MeasurementSource for Box<S> {
    fn next_measure(&mut self) -> f64 {
        (**self).next_measure()
    }
}
