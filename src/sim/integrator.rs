use nalgebra::Vector2;

// ---------------------------------------------------------------------------
// RK4 steps with constant input over the step
// ---------------------------------------------------------------------------

/// Single RK4 step for a scalar ODE `y' = f(y)`.
pub fn rk4_scalar(y: f64, dt: f64, f: impl Fn(f64) -> f64) -> f64 {
    let k1 = f(y);
    let k2 = f(y + k1 * dt * 0.5);
    let k3 = f(y + k2 * dt * 0.5);
    let k4 = f(y + k3 * dt);
    y + (k1 + 2.0 * k2 + 2.0 * k3 + k4) * (dt / 6.0)
}

/// Single RK4 step for a two-state ODE `s' = f(s)`.
pub fn rk4_vec2(
    s: Vector2<f64>,
    dt: f64,
    f: impl Fn(Vector2<f64>) -> Vector2<f64>,
) -> Vector2<f64> {
    let k1 = f(s);
    let k2 = f(s + k1 * dt * 0.5);
    let k3 = f(s + k2 * dt * 0.5);
    let k4 = f(s + k3 * dt);
    s + (k1 + 2.0 * k2 + 2.0 * k3 + k4) * (dt / 6.0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_step_tracks_exponential_decay() {
        let mut y = 1.0;
        let dt = 0.001;
        for _ in 0..1000 {
            y = rk4_scalar(y, dt, |y| -y);
        }
        let exact = (-1.0_f64).exp();
        assert!((y - exact).abs() < 1e-9, "RK4 drift vs exp(-1): {}", (y - exact).abs());
    }

    #[test]
    fn vec2_step_closes_harmonic_orbit() {
        // x'' = -x starting at (1, 0) returns to (1, 0) after one period.
        let mut s = Vector2::new(1.0, 0.0);
        let dt = 2.0 * std::f64::consts::PI / 10_000.0;
        for _ in 0..10_000 {
            s = rk4_vec2(s, dt, |s| Vector2::new(s.y, -s.x));
        }
        assert!((s.x - 1.0).abs() < 1e-6, "Position drifted to {}", s.x);
        assert!(s.y.abs() < 1e-6, "Velocity drifted to {}", s.y);
    }
}
