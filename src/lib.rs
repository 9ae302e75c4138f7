/*!
 * MLFQ Simulator Library
 * Discrete-event simulation of a multi-level feedback queue CPU scheduler
 */

pub mod core;
pub mod process;
pub mod report;
pub mod scheduler;
pub mod workload;

// Re-exports
pub use crate::core::errors::{SchedulerError, WorkloadError};
pub use crate::core::types::{Pid, Priority, SimResult, Tick};
pub use process::{Process, ProcessTable};
pub use scheduler::{
    GanttChart, Metrics, Occupant, QueueLevel, Scheduler, SchedulerConfig, SchedulerStats,
    SimEvent, Slice,
};
pub use workload::{ProcessSpec, Workload};
