use super::gains::{ControlMode, Gains};
use super::limits::Limits;

// ---------------------------------------------------------------------------
// PID controller (single loop, fixed sample period)
// ---------------------------------------------------------------------------

/// Outcome of one [`PidController::compute`] call.
///
/// Purely informational: the clamped output and accumulator are always used,
/// and a compute call never fails. Callers that want to log saturation
/// events can inspect it; everyone else can ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ComputeStatus {
    /// Neither the output nor the integral accumulator hit a bound.
    Succeeded,
    /// The output was clamped to its configured range.
    OutputOverflow,
    /// The integral accumulator was clamped to its configured range.
    IntegralOverflow,
    /// Output and accumulator were both clamped in the same call.
    BothOverflow,
}

impl ComputeStatus {
    /// True if the output was clamped this call.
    pub fn output_saturated(&self) -> bool {
        matches!(self, Self::OutputOverflow | Self::BothOverflow)
    }

    /// True if the integral accumulator was clamped this call.
    pub fn integral_saturated(&self) -> bool {
        matches!(self, Self::IntegralOverflow | Self::BothOverflow)
    }

    /// True if anything was clamped this call.
    pub fn is_saturated(&self) -> bool {
        *self != Self::Succeeded
    }
}

/// Output and integral bounds, enabled together.
#[derive(Debug, Clone, Copy)]
struct LimitSet {
    output: Limits,
    integral: Limits,
}

/// A single-loop discrete-time PID controller.
///
/// Holds the tuning (gains, sample period, optional saturation bounds) and
/// the runtime state (integral accumulator, previous error, first-sample
/// flag). Call [`compute`](Self::compute) once per sample period with the
/// current error; the controller owns no clock and trusts the caller's
/// cadence.
///
/// Every configuration change resets the runtime state: history accumulated
/// under one configuration does not carry into another.
///
/// ```
/// use pid_loop::{ComputeStatus, Gains, PidController};
///
/// let mut pid = PidController::new(Gains::new(2.0, 0.5, 0.0), 100.0);
/// let (output, status) = pid.compute(1.5);
/// assert_eq!(status, ComputeStatus::Succeeded);
/// assert!((output - (1.5 * 2.0 + 1.5 * 0.01 * 0.5)).abs() < 1e-12);
/// ```
#[derive(Debug)]
pub struct PidController {
    gains: Gains,
    mode: ControlMode, // derived from gains, cached on every set
    period: f64,       // seconds, 1/frequency
    limits: Option<LimitSet>,

    // Runtime state
    integral: f64,
    prev_error: f64,
    first_sample: bool,
}

impl PidController {
    /// Controller with the given gains and sample frequency in Hz.
    ///
    /// The sample period is stored as `1 / hz`. `hz` must be nonzero; this is
    /// not checked, and a zero frequency yields non-finite arithmetic in the
    /// I and D terms. Limiting starts disabled.
    pub fn new(gains: Gains, hz: f64) -> Self {
        Self {
            gains,
            mode: gains.mode(),
            period: 1.0 / hz,
            limits: None,
            integral: 0.0,
            prev_error: 0.0,
            first_sample: true,
        }
    }

    /// Controller with gains, sample frequency, and saturation bounds.
    ///
    /// The limit pairs follow the [`set_limits`](Self::set_limits) enabling
    /// rule: all four bounds zero leaves limiting disabled.
    pub fn with_limits(gains: Gains, hz: f64, output: Limits, integral: Limits) -> Self {
        let mut pid = Self::new(gains, hz);
        pid.set_limits(output, integral);
        pid
    }

    /// Current gains.
    pub fn gains(&self) -> Gains {
        self.gains
    }

    /// Mode derived from the current gains.
    pub fn mode(&self) -> ControlMode {
        self.mode
    }

    /// Sample period in seconds (`1 / frequency`; `0.0` when never set).
    pub fn sample_period(&self) -> f64 {
        self.period
    }

    /// Current value of the integral accumulator.
    ///
    /// Exposed for telemetry: when integral limiting is active the
    /// accumulator is clamped in place (anti-windup), and this is where that
    /// shows up.
    pub fn integral(&self) -> f64 {
        self.integral
    }

    /// Active `(output, integral)` limit pairs, if limiting is enabled.
    pub fn limits(&self) -> Option<(Limits, Limits)> {
        self.limits.map(|l| (l.output, l.integral))
    }

    /// Replace the gains and re-derive the controller mode.
    ///
    /// Resets runtime state: the integral history and previous error were
    /// accumulated under the old gains and do not carry over.
    pub fn set_gains(&mut self, gains: Gains) {
        self.gains = gains;
        self.mode = gains.mode();
        self.reset();
    }

    /// Set the sample frequency in Hz; the stored period becomes `1 / hz`.
    ///
    /// `hz` must be nonzero (unchecked). Resets runtime state: the
    /// accumulated integral was computed under the old period.
    pub fn set_frequency(&mut self, hz: f64) {
        self.period = 1.0 / hz;
        self.reset();
    }

    /// Configure saturation bounds for the output and the integral
    /// accumulator.
    ///
    /// Limiting is enabled if any of the four bounds is nonzero; all-zero
    /// pairs disable it. Either way runtime state is reset. The single
    /// enable switch covers both pairs, so a zero output pair combined with
    /// a nonzero integral pair clamps the output into `[0, 0]`.
    pub fn set_limits(&mut self, output: Limits, integral: Limits) {
        if output.is_unset() && integral.is_unset() {
            self.limits = None;
        } else {
            self.limits = Some(LimitSet { output, integral });
        }
        self.reset();
    }

    /// Clear the integral accumulator and previous error and arm the
    /// first-sample flag. Idempotent.
    pub fn reset(&mut self) {
        self.integral = 0.0;
        self.prev_error = 0.0;
        self.first_sample = true;
    }

    /// Run one control step for the current error sample.
    ///
    /// Returns the control output and a status describing any saturation in
    /// this call. The status is informational; the returned output is always
    /// usable (already clamped when limiting is enabled).
    ///
    /// In PID mode the very first call after construction or reset returns
    /// exactly `0.0`: with no prior sample the derivative is undefined, and
    /// suppressing the whole output for one cycle avoids a startup spike.
    /// Output limits still apply to that forced zero.
    pub fn compute(&mut self, error: f64) -> (f64, ComputeStatus) {
        let raw = match self.mode {
            ControlMode::P => self.compute_p(error),
            ControlMode::Pi => self.compute_pi(error),
            ControlMode::Pid => self.compute_pid(error),
        };

        match self.limits {
            Some(limits) => self.saturate(raw, limits),
            None => (raw, ComputeStatus::Succeeded),
        }
    }

    fn compute_p(&mut self, error: f64) -> f64 {
        error * self.gains.kp
    }

    fn compute_pi(&mut self, error: f64) -> f64 {
        self.integral += error * self.period;
        error * self.gains.kp + self.integral * self.gains.ki
    }

    fn compute_pid(&mut self, error: f64) -> f64 {
        let out = if self.first_sample {
            // No prior sample to difference against; hold the output at
            // zero for one cycle instead of emitting a derivative spike.
            self.first_sample = false;
            0.0
        } else {
            let derivative = (error - self.prev_error) / self.period;
            self.integral += error * self.period;
            error * self.gains.kp + self.integral * self.gains.ki + derivative * self.gains.kd
        };

        // Stored unconditionally, including on the suppressed first call.
        self.prev_error = error;
        out
    }

    /// Clamp the output and the stored accumulator against their bounds.
    ///
    /// The output in this call is computed from the pre-clamp accumulator;
    /// later calls see the clamped value. Holding the accumulator inside its
    /// bounds is the anti-windup mechanism.
    fn saturate(&mut self, raw: f64, limits: LimitSet) -> (f64, ComputeStatus) {
        let mut out = raw;
        let mut out_overflow = false;
        let mut int_overflow = false;

        if out > limits.output.high {
            out = limits.output.high;
            out_overflow = true;
        } else if out < limits.output.low {
            out = limits.output.low;
            out_overflow = true;
        }

        // Integral bounds are checked independently, not as an else chain.
        if self.integral > limits.integral.high {
            self.integral = limits.integral.high;
            int_overflow = true;
        }
        if self.integral < limits.integral.low {
            self.integral = limits.integral.low;
            int_overflow = true;
        }

        let status = match (out_overflow, int_overflow) {
            (false, false) => ComputeStatus::Succeeded,
            (true, false) => ComputeStatus::OutputOverflow,
            (false, true) => ComputeStatus::IntegralOverflow,
            (true, true) => ComputeStatus::BothOverflow,
        };
        (out, status)
    }
}

impl Default for PidController {
    /// An inert controller: all gains zero (mode P, output always `0.0`),
    /// sample period unset, limiting disabled.
    fn default() -> Self {
        Self {
            gains: Gains::default(),
            mode: ControlMode::P,
            period: 0.0,
            limits: None,
            integral: 0.0,
            prev_error: 0.0,
            first_sample: true,
        }
    }
}

impl Clone for PidController {
    /// Copies configuration only: the clone starts from freshly reset
    /// runtime state and never inherits the source's accumulated history.
    fn clone(&self) -> Self {
        Self {
            gains: self.gains,
            mode: self.mode,
            period: self.period,
            limits: self.limits,
            integral: 0.0,
            prev_error: 0.0,
            first_sample: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn p_output_is_error_times_kp() {
        let mut pid = PidController::new(Gains::new(2.5, 0.0, 0.0), 100.0);
        for &e in &[0.0, 1.0, -3.0, 1.0, 0.25] {
            let (out, status) = pid.compute(e);
            assert_eq!(out, e * 2.5, "P output must not depend on history");
            assert_eq!(status, ComputeStatus::Succeeded);
        }
        assert_eq!(pid.integral(), 0.0, "P mode must not touch the accumulator");
    }

    #[test]
    fn pi_accumulates_per_period() {
        let mut pid = PidController::new(Gains::new(2.0, 0.5, 0.0), 10.0);
        let t = pid.sample_period();
        let (e1, e2) = (1.0, 0.5);

        let (out1, _) = pid.compute(e1);
        assert!((out1 - (e1 * 2.0 + e1 * t * 0.5)).abs() < 1e-12);

        let (out2, _) = pid.compute(e2);
        let integral = e1 * t + e2 * t;
        assert!((pid.integral() - integral).abs() < 1e-12);
        assert!(
            (out2 - (e2 * 2.0 + integral * 0.5)).abs() < 1e-12,
            "PI output should use the accumulated integral, got {}",
            out2
        );
    }

    #[test]
    fn pid_first_sample_outputs_exactly_zero() {
        let mut pid = PidController::new(Gains::new(1.0, 1.0, 1.0), 10.0);
        let (out, status) = pid.compute(3.7);
        assert_eq!(out, 0.0, "First PID sample must be suppressed");
        assert_eq!(status, ComputeStatus::Succeeded);
        assert_eq!(pid.integral(), 0.0, "Suppressed call must not integrate");
    }

    #[test]
    fn pid_second_sample_differences_against_first() {
        // Derivative-only controller makes the D term directly observable.
        let mut pid = PidController::new(Gains::new(0.0, 0.0, 2.0), 10.0);
        let t = pid.sample_period();
        pid.compute(3.7);
        let (out, _) = pid.compute(4.7);
        let derivative = (4.7 - 3.7) / t;
        assert!(
            (out - derivative * 2.0).abs() < 1e-12,
            "D term should difference against the suppressed first sample"
        );
    }

    #[test]
    fn pid_full_output_sums_all_terms() {
        let mut pid = PidController::new(Gains::new(1.0, 1.0, 1.0), 10.0);
        let t = pid.sample_period();
        pid.compute(3.7);
        let (out, _) = pid.compute(4.7);
        let expected = 4.7 * 1.0 + (4.7 * t) * 1.0 + ((4.7 - 3.7) / t) * 1.0;
        assert!((out - expected).abs() < 1e-12, "expected {}, got {}", expected, out);
    }

    #[test]
    fn reset_rearms_first_sample_suppression() {
        let mut pid = PidController::new(Gains::new(1.0, 1.0, 1.0), 10.0);
        pid.compute(1.0);
        pid.compute(2.0);
        assert!(pid.integral() != 0.0);

        pid.reset();
        assert_eq!(pid.integral(), 0.0);
        let (out, _) = pid.compute(5.0);
        assert_eq!(out, 0.0, "Reset must restore first-sample suppression");
    }

    #[test]
    fn output_clamped_to_bounds_reports_overflow() {
        let mut pid = PidController::with_limits(
            Gains::new(1.0, 0.0, 0.0),
            100.0,
            Limits::new(-1.0, 1.0),
            Limits::symmetric(10.0),
        );
        let (out, status) = pid.compute(5.0);
        assert_eq!(out, 1.0);
        assert_eq!(status, ComputeStatus::OutputOverflow);

        let (out, status) = pid.compute(-5.0);
        assert_eq!(out, -1.0);
        assert_eq!(status, ComputeStatus::OutputOverflow);
    }

    #[test]
    fn integral_clamped_in_place() {
        // Wide output bounds so only the accumulator can overflow.
        let mut pid = PidController::with_limits(
            Gains::new(0.0, 0.01, 0.0),
            1.0,
            Limits::symmetric(100.0),
            Limits::new(-2.0, 2.0),
        );

        let (out, status) = pid.compute(3.0);
        assert_eq!(status, ComputeStatus::IntegralOverflow);
        assert_eq!(pid.integral(), 2.0, "Accumulator must be clamped in place");
        // The output of the overflowing call still used the pre-clamp value.
        assert!((out - 3.0 * 0.01).abs() < 1e-12);

        // The next call starts from the clamped accumulator.
        let (out, status) = pid.compute(0.0);
        assert_eq!(status, ComputeStatus::Succeeded);
        assert!((out - 2.0 * 0.01).abs() < 1e-12);
    }

    #[test]
    fn both_overflow_when_output_and_integral_exceed() {
        let mut pid = PidController::with_limits(
            Gains::new(1.0, 1.0, 0.0),
            1.0,
            Limits::new(-1.0, 1.0),
            Limits::new(-2.0, 2.0),
        );
        let (out, status) = pid.compute(5.0);
        assert_eq!(out, 1.0);
        assert_eq!(status, ComputeStatus::BothOverflow);
        assert_eq!(pid.integral(), 2.0);
        assert!(status.output_saturated() && status.integral_saturated());
    }

    #[test]
    fn integral_at_exact_bound_is_not_flagged() {
        // Bounds are strict: landing exactly on the limit does not overflow.
        let mut pid = PidController::with_limits(
            Gains::new(0.0, 0.5, 0.0),
            1.0,
            Limits::symmetric(100.0),
            Limits::new(-2.0, 2.0),
        );
        let (_, status) = pid.compute(2.0);
        assert_eq!(status, ComputeStatus::Succeeded);
        assert_eq!(pid.integral(), 2.0);
    }

    #[test]
    fn all_zero_limits_disable_clamping() {
        let mut pid = PidController::new(Gains::new(10.0, 0.0, 0.0), 100.0);
        pid.set_limits(Limits::new(0.0, 0.0), Limits::new(0.0, 0.0));
        assert_eq!(pid.limits(), None);

        let (out, status) = pid.compute(1e6);
        assert_eq!(out, 1e7);
        assert_eq!(status, ComputeStatus::Succeeded);
    }

    #[test]
    fn zero_output_pair_clamps_when_integral_pair_set() {
        // One switch enables both pairs: an all-zero output pair is then a
        // real [0, 0] clamp, not "no output limiting".
        let mut pid = PidController::with_limits(
            Gains::new(1.0, 0.0, 0.0),
            100.0,
            Limits::new(0.0, 0.0),
            Limits::symmetric(2.0),
        );
        let (out, status) = pid.compute(5.0);
        assert_eq!(out, 0.0);
        assert_eq!(status, ComputeStatus::OutputOverflow);
    }

    #[test]
    fn suppressed_first_sample_is_still_saturated() {
        // Output bounds that exclude zero clamp the forced first-sample zero.
        let mut pid = PidController::with_limits(
            Gains::new(1.0, 1.0, 1.0),
            10.0,
            Limits::new(2.0, 5.0),
            Limits::symmetric(10.0),
        );
        let (out, status) = pid.compute(0.1);
        assert_eq!(out, 2.0);
        assert_eq!(status, ComputeStatus::OutputOverflow);
    }

    #[test]
    fn set_gains_resets_state() {
        let mut pid = PidController::new(Gains::new(1.0, 1.0, 0.0), 10.0);
        pid.compute(1.0);
        assert!(pid.integral() != 0.0);

        pid.set_gains(Gains::new(1.0, 1.0, 0.5));
        assert_eq!(pid.mode(), ControlMode::Pid);
        assert_eq!(pid.integral(), 0.0);
        let (out, _) = pid.compute(4.0);
        assert_eq!(out, 0.0, "New configuration must start from a clean state");
    }

    #[test]
    fn set_frequency_resets_state() {
        let mut pid = PidController::new(Gains::new(1.0, 1.0, 0.0), 10.0);
        pid.compute(1.0);
        assert!(pid.integral() != 0.0);

        pid.set_frequency(50.0);
        assert_eq!(pid.integral(), 0.0);
        assert!((pid.sample_period() - 0.02).abs() < 1e-15);
    }

    #[test]
    fn set_limits_resets_state_in_both_branches() {
        let mut pid = PidController::new(Gains::new(1.0, 1.0, 0.0), 10.0);
        pid.compute(1.0);
        pid.set_limits(Limits::symmetric(1.0), Limits::symmetric(1.0));
        assert_eq!(pid.integral(), 0.0, "Enabling limits must reset state");

        pid.compute(1.0);
        pid.set_limits(Limits::new(0.0, 0.0), Limits::new(0.0, 0.0));
        assert_eq!(pid.integral(), 0.0, "Disabling limits must reset state");
    }

    #[test]
    fn clone_copies_config_but_not_state() {
        let mut pid = PidController::with_limits(
            Gains::new(1.0, 1.0, 1.0),
            10.0,
            Limits::symmetric(5.0),
            Limits::symmetric(5.0),
        );
        pid.compute(1.0);
        pid.compute(2.0);
        assert!(pid.integral() != 0.0);

        let mut copy = pid.clone();
        assert_eq!(copy.gains(), pid.gains());
        assert_eq!(copy.sample_period(), pid.sample_period());
        assert_eq!(copy.limits(), pid.limits());
        assert_eq!(copy.integral(), 0.0);

        let (out, _) = copy.compute(3.0);
        assert_eq!(out, 0.0, "A clone must behave freshly reset");

        // The running source is unaffected by the clone.
        let (out, _) = pid.compute(3.0);
        assert!(out != 0.0);
    }

    #[test]
    fn default_controller_is_inert() {
        let mut pid = PidController::default();
        assert_eq!(pid.mode(), ControlMode::P);
        assert_eq!(pid.sample_period(), 0.0);
        assert_eq!(pid.limits(), None);
        let (out, status) = pid.compute(123.0);
        assert_eq!(out, 0.0);
        assert_eq!(status, ComputeStatus::Succeeded);
    }
}
