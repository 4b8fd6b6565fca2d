use std::fmt;

// ---------------------------------------------------------------------------
// Tuning gains and the controller mode derived from them
// ---------------------------------------------------------------------------

/// Tuning gains for one control loop.
///
/// A gain of exactly `0.0` means the corresponding term is absent: the
/// controller mode is derived from which gains are set (see [`Gains::mode`]),
/// so "configured to zero" and "disabled" are deliberately the same thing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gains {
    pub kp: f64,
    pub ki: f64,
    pub kd: f64,
}

impl Gains {
    pub const fn new(kp: f64, ki: f64, kd: f64) -> Self {
        Self { kp, ki, kd }
    }

    /// Derive the controller mode from the set gains.
    ///
    /// A nonzero `kd` selects full PID regardless of the other gains; a
    /// nonzero `ki` alone selects PI; otherwise pure proportional. All-zero
    /// gains leave an inert P controller whose output is always zero.
    pub fn mode(&self) -> ControlMode {
        if self.kd != 0.0 {
            ControlMode::Pid
        } else if self.ki != 0.0 {
            ControlMode::Pi
        } else {
            ControlMode::P
        }
    }
}

/// Which terms the controller evaluates, derived from [`Gains`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ControlMode {
    /// Proportional only.
    P,
    /// Proportional + integral.
    Pi,
    /// Proportional + integral + derivative.
    Pid,
}

impl fmt::Display for ControlMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ControlMode::P => "P",
            ControlMode::Pi => "PI",
            ControlMode::Pid => "PID",
        })
    }
}
