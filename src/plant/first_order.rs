use super::Plant;
use crate::sim::integrator::rk4_scalar;

// ---------------------------------------------------------------------------
// First-order lag process
// ---------------------------------------------------------------------------

/// First-order lag: `tau * y' + y = gain * u`.
///
/// The classic RC/thermal response: the output approaches `gain * u`
/// exponentially with time constant `tau`.
#[derive(Debug, Clone)]
pub struct FirstOrder {
    name: String,
    gain: f64, // steady-state output per unit input
    tau: f64,  // time constant, s
    value: f64,
}

impl FirstOrder {
    pub fn new(name: impl Into<String>, gain: f64, tau: f64) -> Self {
        Self { name: name.into(), gain, tau, value: 0.0 }
    }

    /// Start from a nonzero initial output.
    pub fn with_initial(mut self, value: f64) -> Self {
        self.value = value;
        self
    }
}

impl Plant for FirstOrder {
    fn output(&self) -> f64 {
        self.value
    }

    fn step(&mut self, input: f64, dt: f64) {
        let target = self.gain * input;
        let tau = self.tau;
        self.value = rk4_scalar(self.value, dt, |y| (target - y) / tau);
    }

    fn name(&self) -> &str {
        &self.name
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
