/*!
 * Core Types
 * Common types used across the simulator
 */

/// Process ID type
pub type Pid = u32;

/// Simulated clock value in ticks
///
/// Signed so that waiting times computed as `clock - arrival` stay
/// representable when a sort-based policy services a process before
/// its arrival tick.
pub type Tick = i64;

/// Priority level (lower is more urgent)
pub type Priority = i32;

/// Common result type for simulator operations
pub type SimResult<T> = Result<T, super::errors::SimError>;
