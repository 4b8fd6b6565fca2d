// ---------------------------------------------------------------------------
// Saturation bounds
// ---------------------------------------------------------------------------

/// A `[low, high]` clamp range for the control output or the integral
/// accumulator.
///
/// A pair with both bounds exactly `0.0` counts as unset: passing all-zero
/// pairs to `set_limits` disables limiting entirely, so a genuine
/// clamp-to-zero range cannot be expressed. `low <= high` is assumed and not
/// validated.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Limits {
    pub low: f64,
    pub high: f64,
}

impl Limits {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Symmetric range `[-magnitude, magnitude]`.
    pub const fn symmetric(magnitude: f64) -> Self {
        Self {
            low: -magnitude,
            high: magnitude,
        }
    }

    /// Both bounds exactly zero, the "no limiting" sentinel.
    pub fn is_unset(&self) -> bool {
        self.low == 0.0 && self.high == 0.0
    }
}
