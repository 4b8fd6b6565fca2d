pub mod integrator;
pub mod runner;

pub use integrator::{rk4_scalar, rk4_vec2};
pub use runner::{simulate_with, step_response, LoopConfig, Sample};
