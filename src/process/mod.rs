/*!
 * Process Module
 * Process records and workload management
 */

pub mod record;
pub mod workload;

// Re-export for convenience
pub use record::Process;
pub use workload::Workload;
