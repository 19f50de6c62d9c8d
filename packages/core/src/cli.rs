use clap::Parser;

/// Radioactivity Monitor CLI arguments
#[derive(Debug, Parser)]
#[command(
    name = "radioactivity-monitor",
    version,
    about = "Threshold alarm driven by a simulated radioactivity sensor"
)]
pub struct Cli {
    /// Evaluation interval in milliseconds
    #[arg(long)]
    pub poll_interval_ms: Option<u64>,

    /// Readings below this value trigger the alarm
    #[arg(long, allow_negative_numbers = true)]
    pub low_threshold: Option<f64>,

    /// Readings above this value trigger the alarm
    #[arg(long, allow_negative_numbers = true)]
    pub high_threshold: Option<f64>,

    /// Seed for the sensor's random generator
    #[arg(long)]
    pub seed: Option<u64>,

    /// Stop after this many evaluations (runs until Ctrl+C otherwise)
    #[arg(long)]
    pub cycles: Option<u64>,

    /// Print the final alarm status as JSON on stdout
    #[arg(long)]
    pub json: bool,
}
