/*!
 * Core Module
 * Shared types, errors, and limits
 */

pub mod errors;
pub mod limits;
pub mod types;

pub use errors::{SchedulerError, WorkloadError};
pub use types::{Pid, Priority, SimResult, Tick};
