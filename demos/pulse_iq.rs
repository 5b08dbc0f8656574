//! Generates a sine burst, demodulates it and plots both stages.
//!
//! Writes `pulse.svg` (the RF burst) and `iq.svg` (the recovered I and Q)
//! into `--out-dir`.
//!
//! ```text
//! cargo run --example pulse_iq --features plot -- --freq 2e6 --cycles 5
//! ```

mod common;

use anyhow::Result;
use clap::Parser;
use common::{PulseArgs, init_logger, micros};
use rfpulse::plot::LineChart;
use rfpulse::{IqDemodulator, SineBurst};

#[derive(Debug, Parser)]
#[command(about = "Plot an RF sine burst and its I/Q demodulation")]
struct Cli {
    #[command(flatten)]
    pulse: PulseArgs,

    /// Low-pass cutoff in Hz (defaults to the carrier frequency)
    #[arg(long)]
    cutoff: Option<f64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger()?;

    let args = &cli.pulse;
    let t = args.time_base()?.to_vec();
    let pulse = SineBurst::new(args.freq, args.cycles).generate(&t);

    let mut demod = IqDemodulator::new(args.freq, args.fs);
    if let Some(cutoff) = cli.cutoff {
        demod = demod.with_cutoff(cutoff);
    }
    let iq = demod.demodulate(&pulse, &t)?;

    let peak = iq
        .magnitude()
        .into_iter()
        .enumerate()
        .fold((0, 0.0), |best, (i, m)| if m > best.1 { (i, m) } else { best });
    log::info!(
        "peak envelope {:.4} at t = {:.3} us (I = {:.4}, Q = {:.4})",
        peak.1,
        t[peak.0] * 1e6,
        iq.i[peak.0],
        iq.q[peak.0]
    );

    std::fs::create_dir_all(&args.out_dir)?;
    let x = micros(&t);

    LineChart::new(
        format!("{} MHz pulse, {} cycles", args.freq / 1e6, args.cycles),
        &x,
    )
    .x_label("Time (us)")
    .y_label("Amplitude")
    .series("pulse", &pulse)
    .render_svg(args.out_dir.join("pulse.svg"))?;

    LineChart::new("I/Q demodulation", &x)
        .x_label("Time (us)")
        .y_label("Amplitude")
        .series("I", &iq.i)
        .series("Q", &iq.q)
        .render_svg(args.out_dir.join("iq.svg"))?;

    Ok(())
}
