use nalgebra::Vector2;

use super::Plant;
use crate::sim::integrator::rk4_vec2;

// ---------------------------------------------------------------------------
// Second-order process (mass-spring-damper form)
// ---------------------------------------------------------------------------

/// Second-order process in natural-frequency form:
///
/// `x'' = wn^2 * (gain * u - x) - 2 * zeta * wn * x'`
///
/// `zeta < 1` rings, `zeta >= 1` creeps. Covers servo positioners,
/// mass-spring-dampers, and anything else with inertia plus a restoring
/// force.
#[derive(Debug, Clone)]
pub struct SecondOrder {
    name: String,
    gain: f64,
    wn: f64,             // natural frequency, rad/s
    zeta: f64,           // damping ratio
    state: Vector2<f64>, // [position, velocity]
}

impl SecondOrder {
    pub fn new(name: impl Into<String>, gain: f64, wn: f64, zeta: f64) -> Self {
        Self { name: name.into(), gain, wn, zeta, state: Vector2::zeros() }
    }

    /// Start from a nonzero position and velocity.
    pub fn with_initial(mut self, position: f64, velocity: f64) -> Self {
        self.state = Vector2::new(position, velocity);
        self
    }

    /// Current velocity of the process variable.
    pub fn velocity(&self) -> f64 {
        self.state.y
    }
}

impl Plant for SecondOrder {
    fn output(&self) -> f64 {
        self.state.x
    }

    fn step(&mut self, input: f64, dt: f64) {
        let target = self.gain * input;
        let wn = self.wn;
        let zeta = self.zeta;
        self.state = rk4_vec2(self.state, dt, |s| {
            Vector2::new(s.y, wn * wn * (target - s.x) - 2.0 * zeta * wn * s.y)
        });
    }

    fn name(&self) -> &str {
        &self.name
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
