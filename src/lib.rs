pub mod control;
pub mod io;
pub mod plant;
pub mod sim;

// Everyday surface: controller, process models, loop runner.
pub use control::{ComputeStatus, ControlMode, Gains, Limits, PidController};
pub use plant::{FirstOrder, Plant, SecondOrder};
pub use sim::{simulate_with, step_response, LoopConfig, Sample};
