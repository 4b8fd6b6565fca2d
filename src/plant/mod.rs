pub mod first_order;
pub mod second_order;

pub use first_order::FirstOrder;
pub use second_order::SecondOrder;

/// Trait for simulated processes driven by a control signal.
///
/// Implement this to close the loop around your own process model and
/// plug it into the simulation runner.
pub trait Plant {
    /// Current measured process variable.
    fn output(&self) -> f64;

    /// Advance the process by `dt` seconds with the control input held
    /// constant over the step.
    fn step(&mut self, input: f64, dt: f64);

    /// Human-readable name for logging/display.
    fn name(&self) -> &str {
        "unnamed"
    }
}

// ---------------------------------------------------------------------------
// Preset processes
// ---------------------------------------------------------------------------

pub mod presets {
    use super::{FirstOrder, SecondOrder};

    /// Small positioning servo: moderately underdamped, unit gain.
    pub fn servo() -> SecondOrder {
        SecondOrder::new("Servo", 1.0, 8.0, 0.35)
    }

    /// Slow heater: first-order lag with a 4 s time constant.
    pub fn heater() -> FirstOrder {
        FirstOrder::new("Heater", 2.0, 4.0)
    }
}
