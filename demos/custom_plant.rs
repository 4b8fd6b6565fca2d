use pid_loop::sim::{simulate_with, LoopConfig};
use pid_loop::{Gains, Limits, PidController, Plant};

/// A small thermal chamber: heater power drives the temperature up while
/// the chamber continuously leaks heat to ambient.
struct ThermalChamber {
    temperature: f64, // degC
    ambient: f64,     // degC
    heater_gain: f64, // degC/s per unit command
    loss_rate: f64,   // 1/s toward ambient
}

impl Plant for ThermalChamber {
    fn output(&self) -> f64 {
        self.temperature
    }

    fn step(&mut self, input: f64, dt: f64) {
        // Forward Euler is plenty for a slow thermal process.
        let heat_in = self.heater_gain * input.max(0.0); // heater cannot cool
        let loss = self.loss_rate * (self.temperature - self.ambient);
        self.temperature += (heat_in - loss) * dt;
    }

    fn name(&self) -> &str {
        "ThermalChamber"
    }
}

fn main() {
    let mut chamber = ThermalChamber {
        temperature: 21.0,
        ambient: 21.0,
        heater_gain: 1.5,
        loss_rate: 0.08,
    };

    // PI: the leak to ambient would leave a P-only loop permanently short.
    let mut pid = PidController::with_limits(
        Gains::new(0.8, 0.25, 0.0),
        10.0,
        Limits::new(0.0, 5.0), // heater command, one-sided
        Limits::symmetric(40.0),
    );

    let config = LoopConfig { sample_rate_hz: 10.0, duration: 120.0, setpoint: 60.0 };

    println!("Driving {} to {:.0} degC...", chamber.name(), config.setpoint);
    let samples = simulate_with(&mut chamber, &mut pid, &config);

    let last = samples.last().unwrap();
    let saturated = samples.iter().filter(|s| s.status.is_saturated()).count();
    println!("Final temperature: {:.2} degC (error {:+.3})", last.measurement, last.error);
    println!("Heater clamped on {} of {} steps", saturated, samples.len());
}
