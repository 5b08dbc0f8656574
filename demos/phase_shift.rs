//! Delays a sine burst by a carrier phase and compares the I/Q of the
//! original and delayed pulses.
//!
//! ```text
//! LOG_LEVEL=debug cargo run --example phase_shift --features plot -- --phase 0.785
//! ```

mod common;

use anyhow::{Result, bail};
use clap::Parser;
use common::{PulseArgs, init_logger, micros};
use rfpulse::plot::LineChart;
use rfpulse::{IqDemodulator, SineBurst, WhiteNoise, time_shift};

#[derive(Debug, Parser)]
#[command(about = "Phase-shift an RF burst and measure the shift from its I/Q")]
struct Cli {
    #[command(flatten)]
    pulse: PulseArgs,

    /// Carrier phase delay in radians
    #[arg(long, default_value_t = std::f64::consts::FRAC_PI_4, allow_negative_numbers = true)]
    phase: f64,

    /// Peak amplitude of white noise added to the delayed pulse
    #[arg(long, default_value_t = 0.0)]
    noise: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger()?;

    let args = &cli.pulse;
    let time = args.time_base()?;
    let t = time.to_vec();
    let burst = SineBurst::new(args.freq, args.cycles);
    let pulse = burst.generate(&t);

    let mut shifted = time_shift(&pulse, &t, cli.phase, args.freq)?;
    if cli.noise > 0.0 {
        shifted = WhiteNoise::new(cli.noise).add_to(&shifted);
    }

    let demod = IqDemodulator::new(args.freq, args.fs);
    let reference = demod.demodulate(&pulse, &t)?;
    let delayed = demod.demodulate(&shifted, &t)?;

    // Measure halfway through the burst, where the envelope is flat
    let center = burst.duration() / 2.0;
    let Some(index) = t.iter().position(|&ti| ti >= center) else {
        bail!("burst centre {center:e} s lies outside the time base");
    };

    if let (Some(before), Some(after)) = (reference.phase_at(index), delayed.phase_at(index)) {
        let measured = (after - before + std::f64::consts::PI)
            .rem_euclid(2.0 * std::f64::consts::PI)
            - std::f64::consts::PI;
        log::info!(
            "applied {:.4} rad, measured {:.4} rad at t = {:.3} us",
            cli.phase,
            measured,
            t[index] * 1e6
        );
    }

    std::fs::create_dir_all(&args.out_dir)?;
    let x = micros(&t);

    LineChart::new(format!("Pulse delayed by {:.3} rad", cli.phase), &x)
        .x_label("Time (us)")
        .y_label("Amplitude")
        .series("original", &pulse)
        .series("delayed", &shifted)
        .render_svg(args.out_dir.join("shifted_pulse.svg"))?;

    LineChart::new("I/Q before and after the delay", &x)
        .x_label("Time (us)")
        .y_label("Amplitude")
        .series("I original", &reference.i)
        .series("Q original", &reference.q)
        .series("I delayed", &delayed.i)
        .series("Q delayed", &delayed.q)
        .render_svg(args.out_dir.join("shifted_iq.svg"))?;

    Ok(())
}
