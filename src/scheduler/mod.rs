/*!
 * Scheduler Module
 * CPU scheduling policies and their shared machinery
 */

pub mod clock;
pub mod mlfq;
pub mod ordered;
pub mod policy;
pub mod round_robin;
pub mod run;
pub mod srtf;
pub mod stats;
pub mod timeline;

// Re-export public API
pub use clock::Clock;
pub use mlfq::{mlfq, HIGH_QUANTUM, LOW_QUANTUM, MEDIUM_QUANTUM};
pub use ordered::{fcfs, priority, sjf};
pub use policy::{Policy, DEFAULT_QUANTUM};
pub use round_robin::round_robin;
pub use run::Run;
pub use srtf::srtf;
pub use stats::RunStats;
pub use timeline::{Segment, Timeline};
