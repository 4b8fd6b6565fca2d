use pid_loop::io::ResponseSummary;
use pid_loop::plant::FirstOrder;
use pid_loop::sim::{simulate_with, LoopConfig};
use pid_loop::{Gains, Limits, PidController};

/// A slow lag behind a weak actuator: the output clamp holds the command at
/// its rail for seconds while the accumulator keeps charging. How far it is
/// allowed to charge decides the overshoot.
fn run_with_clamp(integral_clamp: f64) -> ResponseSummary {
    let mut plant = FirstOrder::new("SlowLag", 1.0, 2.0);
    let mut pid = PidController::with_limits(
        Gains::new(2.0, 4.0, 0.0),
        100.0,
        Limits::symmetric(1.2),
        Limits::symmetric(integral_clamp),
    );
    let config = LoopConfig { sample_rate_hz: 100.0, duration: 20.0, setpoint: 1.0 };
    let samples = simulate_with(&mut plant, &mut pid, &config);
    ResponseSummary::from_samples(&samples)
}

fn main() {
    let wound = run_with_clamp(50.0); // clamp far out of reach
    let clamped = run_with_clamp(0.3);

    println!(
        "{:<16}  {:>9}  {:>9}  {:>10}",
        "integral clamp", "overshoot", "settle", "sat steps"
    );
    for (label, s) in [("loose (50.0)", &wound), ("tight (0.3)", &clamped)] {
        let settle = s.settling_time.map_or("n/a".into(), |t| format!("{:.2} s", t));
        println!(
            "{:<16}  {:>8.1}%  {:>9}  {:>10}",
            label, s.overshoot_pct, settle, s.saturated_steps
        );
    }

    println!();
    println!(
        "Clamping the accumulator cuts the windup overshoot from {:.1}% to {:.1}%.",
        wound.overshoot_pct, clamped.overshoot_pct
    );
}
