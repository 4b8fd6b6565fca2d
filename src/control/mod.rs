pub mod gains;
pub mod limits;
pub mod pid;

pub use gains::{ControlMode, Gains};
pub use limits::Limits;
pub use pid::{ComputeStatus, PidController};
