use crate::control::{ComputeStatus, Gains, PidController};
use crate::plant::Plant;

// ---------------------------------------------------------------------------
// Closed-loop runner
// ---------------------------------------------------------------------------

/// Timing and setpoint for a closed-loop run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoopConfig {
    /// Controller update rate in Hz. Doubles as the plant integration rate.
    pub sample_rate_hz: f64,
    /// Total simulated time, s.
    pub duration: f64,
    /// Constant setpoint the loop drives toward.
    pub setpoint: f64,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self { sample_rate_hz: 100.0, duration: 5.0, setpoint: 1.0 }
    }
}

/// One record per controller update.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Sample {
    pub time: f64,
    pub setpoint: f64,
    pub measurement: f64,
    pub error: f64,
    pub output: f64,
    pub integral: f64,
    pub status: ComputeStatus,
}

/// Run a closed loop: sample the plant, compute the error, apply the
/// controller output, step the plant. The control output is held constant
/// while the plant integrates over the sample period.
///
/// The controller is aligned to `config.sample_rate_hz` before the loop
/// starts, which also resets its runtime state, so every run begins from a
/// clean controller regardless of prior use.
pub fn simulate_with(
    plant: &mut dyn Plant,
    pid: &mut PidController,
    config: &LoopConfig,
) -> Vec<Sample> {
    pid.set_frequency(config.sample_rate_hz);
    let dt = pid.sample_period();

    let steps = (config.duration * config.sample_rate_hz) as usize;
    let mut samples = Vec::with_capacity(steps.min(200_000));

    let mut time = 0.0;
    for _ in 0..steps {
        let measurement = plant.output();
        let error = config.setpoint - measurement;
        let (output, status) = pid.compute(error);

        samples.push(Sample {
            time,
            setpoint: config.setpoint,
            measurement,
            error,
            output,
            integral: pid.integral(),
            status,
        });

        plant.step(output, dt);
        time += dt;
    }

    samples
}

/// Step response of the given gains on a plant (convenience wrapper).
///
/// Builds an unlimited controller at the loop rate and runs the loop.
pub fn step_response(plant: &mut dyn Plant, gains: Gains, config: &LoopConfig) -> Vec<Sample> {
    let mut pid = PidController::new(gains, config.sample_rate_hz);
    simulate_with(plant, &mut pid, config)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
