//! Daily task planning.

pub mod planner;
pub mod types;

pub use planner::Planner;
pub use types::{Priority, Task};
