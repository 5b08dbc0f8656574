//! Shared setup for the demos.

use clap::Args;
use log::LevelFilter;
use rfpulse::TimeVector;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};
use std::path::PathBuf;

/// Pulse and sampling parameters shared by every demo.
#[derive(Debug, Args)]
pub struct PulseArgs {
    /// Sampling rate in Hz
    #[arg(long, default_value_t = 40e6)]
    pub fs: f64,

    /// Carrier frequency in Hz
    #[arg(long, default_value_t = 2e6)]
    pub freq: f64,

    /// Number of carrier cycles in the burst
    #[arg(long, default_value_t = 5, allow_negative_numbers = true)]
    pub cycles: i32,

    /// First sample time in seconds
    #[arg(long, default_value_t = -4e-6, allow_negative_numbers = true)]
    pub start: f64,

    /// End of the time base in seconds (exclusive)
    #[arg(long, default_value_t = 4e-6, allow_negative_numbers = true)]
    pub stop: f64,

    /// Directory the SVG charts are written to
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,
}

impl PulseArgs {
    pub fn time_base(&self) -> rfpulse::Result<TimeVector> {
        TimeVector::from_sample_rate(self.start, self.stop, self.fs)
    }
}

/// Sample times in microseconds, for chart axes.
pub fn micros(t: &[f64]) -> Vec<f64> {
    t.iter().map(|v| v * 1e6).collect()
}

/// Starts terminal logging at the level named by `LOG_LEVEL` (default info).
pub fn init_logger() -> anyhow::Result<()> {
    let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let level = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    };

    let config = ConfigBuilder::new().build();
    TermLogger::init(level, config, TerminalMode::Mixed, ColorChoice::Auto)?;
    Ok(())
}
