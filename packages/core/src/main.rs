use clap::Parser;
use dotenvy::dotenv;

use radioactivity_monitor::alarm::Alarm;
use radioactivity_monitor::cli::Cli;
use radioactivity_monitor::config::Config;
use radioactivity_monitor::error::AppError;
use radioactivity_monitor::logging::init_logging;
use radioactivity_monitor::metrics::AppMetrics;
use radioactivity_monitor::scheduler::run_alarm_polling;
use radioactivity_monitor::sensor::Sensor;

#[tokio::main]
async fn main() {
    dotenv().ok();
    let cli = Cli::parse();
    init_logging();

    if let Err(err) = run(cli).await {
        tracing::error!("{}", err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let config = Config::from_env()?.merge_cli(&cli)?;
    tracing::info!("Service started with config: {:?}", config);

    let sensor = match config.sensor_seed {
        Some(seed) => Sensor::seeded(seed),
        None => Sensor::new(),
    };
    let mut alarm = Alarm::with_source(sensor).with_thresholds(config.thresholds);
    let metrics = AppMetrics::new()?;

    let summary =
        run_alarm_polling(&mut alarm, &metrics, config.poll_interval_ms, cli.cycles).await;

    tracing::debug!("Final metrics:\n{}", metrics.render()?);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}
