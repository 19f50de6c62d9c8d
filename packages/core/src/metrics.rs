//! Prometheus metrics registry for the radioactivity monitor.
//!
//! [`AppMetrics`] owns all registered metrics and the [`Registry`] they
//! belong to. Construct it once at startup and hand it to the scheduler,
//! which updates it after every evaluation cycle. A host embedding the
//! monitor can expose [`AppMetrics::render`] on whatever endpoint it likes.

use prometheus::{Counter, Gauge, Opts, Registry};

use crate::alarm::Evaluation;

/// All application-level Prometheus metrics.
pub struct AppMetrics {
    /// Total number of completed alarm evaluations.
    pub checks_total: Counter,
    /// Total number of evaluations that failed because the source errored.
    pub check_errors_total: Counter,
    /// Total number of out-of-range evaluations.
    pub triggers_total: Counter,
    /// 1 while the alarm is on, 0 otherwise.
    pub alarm_on: Gauge,
    /// Most recent reading pulled from the sensor.
    pub last_measurement: Gauge,
    /// The registry that owns all of the above metrics.
    pub registry: Registry,
}

impl AppMetrics {
    /// Create and register all metrics. Returns an error if any metric
    /// name is invalid or duplicated (should not happen in practice).
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let checks_total = Counter::with_opts(Opts::new(
            "radioactivity_monitor_checks_total",
            "Completed alarm evaluations",
        ))?;

        let check_errors_total = Counter::with_opts(Opts::new(
            "radioactivity_monitor_check_errors_total",
            "Evaluations aborted by a measurement source error",
        ))?;

        let triggers_total = Counter::with_opts(Opts::new(
            "radioactivity_monitor_triggers_total",
            "Evaluations whose reading was out of range",
        ))?;

        let alarm_on = Gauge::with_opts(Opts::new(
            "radioactivity_monitor_alarm_on",
            "1 while the alarm is on, 0 otherwise",
        ))?;

        let last_measurement = Gauge::with_opts(Opts::new(
            "radioactivity_monitor_last_measurement",
            "Most recent sensor reading",
        ))?;

        registry.register(Box::new(checks_total.clone()))?;
        registry.register(Box::new(check_errors_total.clone()))?;
        registry.register(Box::new(triggers_total.clone()))?;
        registry.register(Box::new(alarm_on.clone()))?;
        registry.register(Box::new(last_measurement.clone()))?;

        Ok(Self {
            checks_total,
            check_errors_total,
            triggers_total,
            alarm_on,
            last_measurement,
            registry,
        })
    }

    /// Fold one completed evaluation into the metrics.
    pub fn record(&self, evaluation: &Evaluation) {
        self.checks_total.inc();
        self.last_measurement.set(evaluation.value);
        if evaluation.state.is_triggered() {
            self.triggers_total.inc();
            self.alarm_on.set(1.0);
        } else {
            self.alarm_on.set(0.0);
        }
    }

    /// Render all metrics as Prometheus text format.
    pub fn render(&self) -> Result<String, prometheus::Error> {
        use prometheus::Encoder;
        let encoder = prometheus::TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buf = Vec::new();
        encoder.encode(&metric_families, &mut buf)?;
        Ok(String::from_utf8(buf).unwrap_or_default())
    }
}
