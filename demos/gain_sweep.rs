use pid_loop::io::ResponseSummary;
use pid_loop::plant::presets;
use pid_loop::sim::{step_response, LoopConfig};
use pid_loop::Gains;

fn main() {
    let config = LoopConfig { sample_rate_hz: 200.0, duration: 6.0, setpoint: 1.0 };

    println!(
        "{:>6}  {:>9}  {:>9}  {:>10}  {:>10}",
        "kp", "rise (s)", "overshoot", "settle (s)", "ss error"
    );

    for kp in [2.0, 4.0, 8.0, 16.0, 32.0] {
        let mut plant = presets::servo();
        let samples = step_response(&mut plant, Gains::new(kp, 6.0, 0.4), &config);
        let s = ResponseSummary::from_samples(&samples);

        let rise = s.rise_time.map_or("n/a".into(), |t| format!("{:.3}", t));
        let settle = s.settling_time.map_or("n/a".into(), |t| format!("{:.3}", t));
        println!(
            "{:>6.1}  {:>9}  {:>8.1}%  {:>10}  {:>10.4}",
            kp, rise, s.overshoot_pct, settle, s.steady_state_error
        );
    }
}
