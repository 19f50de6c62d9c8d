//! Default random sensor.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::sensor::source::MeasurementSource;

/// Lowest value the default sensor can produce.
pub const SENSOR_OFFSET: f64 = 16.0;

/// Width of the default sensor's output range.
pub const SENSOR_SPAN: f64 = 6.0;

/// Random sensor producing `16 + 6 * u1 * u2` with `u1, u2` uniform in
/// `[0, 1)`, so every reading lies in `[16, 22)`.
///
/// One generator is created with the sensor and reused for every reading.
#[derive(Debug, Clone)]
pub struct Sensor {
    rng: StdRng,
}

impl Sensor {
    /// Create a sensor seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a sensor with a reproducible reading sequence.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn sample(&mut self) -> f64 {
        let u1: f64 = self.rng.gen();
        let u2: f64 = self.rng.gen();
        SENSOR_SPAN * u1 * u2
    }
}

impl Default for Sensor {
    fn default() -> Self {
        Self::new()
    }
}

impl MeasurementSource for Sensor {
    fn next_measure(&mut self) -> f64 {
        SENSOR_OFFSET + self.sample()
    }
}
