/*!
 * Schedsim Library
 * Deterministic CPU scheduling policy simulator exposed as a library
 */

pub mod core;
pub mod process;
pub mod report;
pub mod scenario;
pub mod scheduler;

// Re-exports
pub use crate::core::errors::SimError;
pub use crate::core::types::{Pid, Priority, SimResult, Tick};
pub use process::{Process, Workload};
pub use report::{CompletionRow, PolicyReport, Summary};
pub use scenario::Scenario;
pub use scheduler::{
    fcfs, mlfq, priority, round_robin, sjf, srtf, Clock, Policy, Run, RunStats, Segment, Timeline,
    DEFAULT_QUANTUM,
};
