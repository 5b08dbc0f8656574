use rand::SeedableRng;
use rand::rngs::StdRng;
use rfpulse::{
    Error, IqDemodulator, SineBurst, TimeVector, WhiteNoise, generate_pulse, iq_demodulate,
    time_shift,
};
use std::f64::consts::PI;

const FS: f64 = 40e6;
const FREQ: f64 = 2e6;
const N_CYCLES: i32 = 5;
/// t = 1.25 µs, halfway through the burst
const CENTER: usize = 210;

fn time_base() -> Vec<f64> {
    TimeVector::from_sample_rate(-4e-6, 4e-6, FS)
        .unwrap()
        .to_vec()
}

#[test]
fn test_pulse_is_silent_outside_window() {
    let t = time_base();
    let pulse = generate_pulse(&t, FREQ, N_CYCLES);
    let window_end = N_CYCLES as f64 / FREQ;

    for (ti, value) in t.iter().zip(&pulse) {
        if *ti < 0.0 || *ti > window_end {
            assert_eq!(*value, 0.0);
        }
    }

    // The burst fits inside the demo time base with room on both sides
    let active = pulse.iter().filter(|v| v.abs() > 1e-9).count();
    assert!(active > 80);
    assert!(pulse[..150].iter().all(|&v| v == 0.0));
    assert!(pulse[270..].iter().all(|&v| v == 0.0));
}

#[test]
fn test_zero_shift_then_demodulate_matches_direct() {
    let t = time_base();
    let pulse = generate_pulse(&t, FREQ, N_CYCLES);

    let shifted = time_shift(&pulse, &t, 0.0, FREQ).unwrap();
    assert_eq!(shifted, pulse);

    let direct = iq_demodulate(&pulse, &t, FREQ, FS, None).unwrap();
    let via_shift = iq_demodulate(&shifted, &t, FREQ, FS, None).unwrap();
    assert_eq!(direct, via_shift);
}

#[test]
fn test_demodulated_carrier_is_quadrature() {
    let t = time_base();
    let pulse = generate_pulse(&t, FREQ, N_CYCLES);
    let (i, q) = iq_demodulate(&pulse, &t, FREQ, FS, None).unwrap();

    assert!(i[CENTER].abs() < 0.01);
    assert!((q[CENTER] - 0.5).abs() < 0.01);

    // I only leaks at the burst edges; Q carries the envelope
    assert!(i.iter().all(|v| v.abs() < 0.15));
    let peak_q = q.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    assert!(peak_q > 0.45 && peak_q < 0.6);
}

#[test]
fn test_phase_ratio_follows_tangent() {
    let t = time_base();
    let pulse = generate_pulse(&t, FREQ, N_CYCLES);

    for &phase in &[PI / 8.0, PI / 5.0, PI / 3.0] {
        let shifted = time_shift(&pulse, &t, phase, FREQ).unwrap();
        let (i, q) = iq_demodulate(&shifted, &t, FREQ, FS, None).unwrap();

        let ratio = (i[CENTER] / q[CENTER]).abs();
        assert!(
            (ratio - phase.tan()).abs() < 0.05,
            "phase {phase}: |I/Q| = {ratio}, tan = {}",
            phase.tan()
        );
    }
}

#[test]
fn test_shift_round_trip_restores_pulse() {
    let t = time_base();
    let pulse = generate_pulse(&t, FREQ, N_CYCLES);
    let phase = 0.7;

    let there = time_shift(&pulse, &t, phase, FREQ).unwrap();
    let back = time_shift(&there, &t, -phase, FREQ).unwrap();

    for (a, b) in pulse.iter().zip(&back) {
        assert!((a - b).abs() < 0.1);
    }
}

#[test]
fn test_noisy_pulse_keeps_phase() {
    let t = time_base();
    let pulse = generate_pulse(&t, FREQ, N_CYCLES);
    let phase = PI / 4.0;
    let shifted = time_shift(&pulse, &t, phase, FREQ).unwrap();

    let mut noise = WhiteNoise::with_rng(0.1, StdRng::seed_from_u64(2024));
    let noisy = noise.add_to(&shifted);

    let demod = IqDemodulator::new(FREQ, FS);
    let clean = demod.demodulate(&pulse, &t).unwrap();
    let measured = demod.demodulate(&noisy, &t).unwrap();

    let difference = measured.phase_at(CENTER).unwrap() - clean.phase_at(CENTER).unwrap();
    assert!((difference - phase).abs() < 0.2, "recovered {difference}");
}

#[test]
fn test_narrower_cutoff_smooths_envelope() {
    let t = time_base();
    let pulse = generate_pulse(&t, FREQ, N_CYCLES);

    let wide = IqDemodulator::new(FREQ, FS).demodulate(&pulse, &t).unwrap();
    let narrow = IqDemodulator::new(FREQ, FS)
        .with_cutoff(0.5e6)
        .demodulate(&pulse, &t)
        .unwrap();

    // A narrower low-pass spreads the burst edges further out in time
    let edge = 150;
    assert!(narrow.magnitude()[edge] > wide.magnitude()[edge]);
}

#[test]
fn test_burst_streamed_and_rendered_agree() {
    let time = TimeVector::from_sample_rate(-4e-6, 4e-6, FS).unwrap();
    let burst = SineBurst::new(FREQ, N_CYCLES);

    let mut source = burst.source(time);
    let mut streamed = vec![0.0; time.len()];
    rfpulse::Signal::process(&mut source, &mut streamed);

    assert_eq!(streamed, generate_pulse(&time.to_vec(), FREQ, N_CYCLES));
}

#[test]
fn test_short_signal_is_rejected() {
    let t = TimeVector::from_sample_rate(0.0, 10.0 / FS, FS)
        .unwrap()
        .to_vec();
    let pulse = generate_pulse(&t, FREQ, N_CYCLES);
    let err = iq_demodulate(&pulse, &t, FREQ, FS, None).unwrap_err();
    assert!(matches!(err, Error::SignalTooShort { min: 15, .. }));
}
