use pid_loop::io::{self, ResponseSummary};
use pid_loop::plant::presets;
use pid_loop::{simulate_with, Gains, Limits, LoopConfig, PidController, Plant};

fn main() -> std::io::Result<()> {
    // -----------------------------------------------------------------------
    // Loop: positioning servo under a limited PID
    // -----------------------------------------------------------------------
    let mut plant = presets::servo();
    let gains = Gains::new(12.0, 20.0, 0.6);
    let mut pid = PidController::with_limits(
        gains,
        200.0,
        Limits::symmetric(4.0), // actuator command range
        Limits::symmetric(0.2), // anti-windup clamp on the accumulator
    );

    let config = LoopConfig { sample_rate_hz: 200.0, duration: 4.0, setpoint: 1.0 };

    // -----------------------------------------------------------------------
    // Run the loop
    // -----------------------------------------------------------------------
    let samples = simulate_with(&mut plant, &mut pid, &config);
    let summary = ResponseSummary::from_samples(&samples);
    let dt = pid.sample_period();

    // -----------------------------------------------------------------------
    // Print results
    // -----------------------------------------------------------------------
    println!();
    println!("====================================================================");
    println!("  CLOSED-LOOP STEP RESPONSE — {}", plant.name());
    println!("====================================================================");
    println!();
    println!("  Controller");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Mode:          {:>8}      Rate:         {:>8.0} Hz",
        pid.mode().to_string(),
        config.sample_rate_hz
    );
    println!(
        "  Kp:            {:>8.2}      Ki:           {:>8.2}      Kd: {:>6.2}",
        gains.kp, gains.ki, gains.kd
    );
    if let Some((out, int)) = pid.limits() {
        println!(
            "  Output range:  [{:>4.1}, {:>4.1}]  Integral clamp: [{:>5.2}, {:>4.2}]",
            out.low, out.high, int.low, int.high
        );
    }
    println!("  Setpoint:      {:>8.2}      Duration:     {:>8.1} s", config.setpoint, config.duration);
    println!();

    println!("  Loop Events");
    println!("  ──────────────────────────────────────────────────────────────────");
    if let Some(s) = samples.iter().find(|s| s.status.is_saturated()) {
        println!(
            "  SATURATE  t={:>6.3}s   cmd={:>6.2}   {:?}",
            s.time, s.output, s.status
        );
    }
    if let Some(s) = samples.iter().rev().find(|s| s.status.is_saturated()) {
        println!("  RELEASE   t={:>6.3}s   last clamped sample", s.time);
    }
    println!(
        "  PEAK      t={:>6.3}s   pos={:>6.3}   overshoot {:.1}%",
        summary.peak_time, summary.peak, summary.overshoot_pct
    );
    match summary.settling_time {
        Some(t) => println!("  SETTLE    t={:>6.3}s   within 2% band", t),
        None => println!("  SETTLE    not settled within the run"),
    }
    println!();

    println!("  Performance Summary");
    println!("  ──────────────────────────────────────────────────────────────────");
    match summary.rise_time {
        Some(t) => println!("  Rise time:     {:>8.3} s", t),
        None => println!("  Rise time:     never crossed 90%"),
    }
    println!("  Overshoot:     {:>8.1} %", summary.overshoot_pct);
    println!("  Final value:   {:>8.4}   (error {:+.4})", summary.final_value, summary.steady_state_error);
    println!(
        "  Saturated:     {:>8} of {} steps ({:.1}%)",
        summary.saturated_steps,
        samples.len(),
        100.0 * summary.saturated_steps as f64 / samples.len() as f64
    );
    println!();

    // -----------------------------------------------------------------------
    // Response table (sampled)
    // -----------------------------------------------------------------------
    println!("  Response");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:>7}  {:>8}  {:>8}  {:>8}  {:>9}  {:>6}",
        "t (s)", "pos", "err", "cmd", "integral", "phase"
    );
    println!("  {}", "─".repeat(60));

    let settle_t = summary.settling_time.unwrap_or(f64::INFINITY);
    let sample_interval = (samples.len() / 30).max(1);

    for (i, s) in samples.iter().enumerate() {
        let print = i % sample_interval == 0
            || i == samples.len() - 1
            || (s.time - summary.peak_time).abs() < dt * 0.5;

        if !print {
            continue;
        }

        let phase = if s.status.is_saturated() {
            "SAT"
        } else if s.time < summary.peak_time {
            "RISE"
        } else if s.time >= settle_t {
            "HOLD"
        } else {
            "RING"
        };

        println!(
            "  {:>7.3}  {:>8.4}  {:>8.4}  {:>8.3}  {:>9.4}  {:>6}",
            s.time, s.measurement, s.error, s.output, s.integral, phase
        );
    }

    println!();

    // -----------------------------------------------------------------------
    // Artifacts
    // -----------------------------------------------------------------------
    io::write_response_file("response.csv", &samples)?;
    io::write_summary_file("summary.json", plant.name(), &pid, &summary)?;
    println!("  Artifacts: response.csv, summary.json");
    println!("  Loop: {} steps at {:.0} Hz (dt={:.4} s)", samples.len(), config.sample_rate_hz, dt);
    println!("====================================================================");
    println!();

    Ok(())
}
