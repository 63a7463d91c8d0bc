pub mod lifecycle;

pub use lifecycle::{run_task, TaskPhase};
