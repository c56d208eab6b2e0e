//! Weather Station - Observer demo entry point
//!
//! Creates a weather data subject, attaches a current-conditions display and
//! runs a few measurement cycles.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use pattern_demos::config::StationConfig;
use pattern_demos::logging::LogArgs;
use pattern_demos::observer::{CurrentConditionsDisplay, WeatherData, run_station};

/// Observer pattern demo: random weather readings pushed to a display.
#[derive(Parser, Debug)]
#[command(name = "weather-station")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of measurement cycles.
    #[arg(long, default_value_t = 5)]
    cycles: u32,

    /// Pause between cycles in milliseconds.
    #[arg(long, default_value_t = 2000)]
    interval_ms: u64,

    /// Seed for reproducible readings.
    #[arg(long)]
    seed: Option<u64>,

    #[command(flatten)]
    log: LogArgs,
}

impl Args {
    fn station_config(&self) -> StationConfig {
        StationConfig::new()
            .cycles(self.cycles)
            .interval(Duration::from_millis(self.interval_ms))
            .seed(self.seed)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    args.log
        .init("weather-station")
        .context("failed to set up logging")?;

    let config = args.station_config();
    info!(?config, "configured weather station");

    let mut weather_data = match config.seed {
        Some(seed) => WeatherData::with_seed(seed),
        None => WeatherData::new(),
    };

    // Keep the display alive for the whole run: the subject only holds a weak handle.
    let _display = CurrentConditionsDisplay::new(&mut weather_data);

    run_station(&mut weather_data, &config);

    Ok(())
}
