/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use crate::core::types::Pid;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scheduler configuration and control errors
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SchedulerError {
    #[error("Invalid quantum: {0}")]
    #[diagnostic(
        code(scheduler::invalid_quantum),
        help("The round-robin time slice must be a positive number of ticks.")
    )]
    InvalidQuantum(u64),

    #[error("Invalid starvation threshold: {0}")]
    #[diagnostic(
        code(scheduler::invalid_threshold),
        help("The starvation threshold must be at least 1 tick.")
    )]
    InvalidThreshold(u64),

    #[error("Too many processes: {count} exceeds limit {limit}")]
    #[diagnostic(
        code(scheduler::too_many_processes),
        help("Raise max_processes in the scheduler configuration or trim the workload.")
    )]
    TooManyProcesses { count: usize, limit: usize },

    #[error("Process {0} not found in scheduler")]
    #[diagnostic(
        code(scheduler::process_not_found),
        help("The pid is not part of the admitted workload.")
    )]
    ProcessNotFound(Pid),

    #[error("Process {0} is already queued or finished")]
    #[diagnostic(
        code(scheduler::already_placed),
        help("A process can only be seeded into a queue while it is unassigned.")
    )]
    AlreadyPlaced(Pid),
}

/// Workload collection and validation errors
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum WorkloadError {
    #[error("Failed to read workload file: {0}")]
    #[diagnostic(
        code(workload::read_failed),
        help("Check that the path exists and is readable.")
    )]
    ReadFailed(String),

    #[error("Failed to parse workload: {0}")]
    #[diagnostic(
        code(workload::parse_failed),
        help("The workload must be a JSON object with a `processes` array.")
    )]
    ParseFailed(String),

    #[error("Workload is empty")]
    #[diagnostic(
        code(workload::empty),
        help("At least one process definition is required.")
    )]
    Empty,

    #[error("Too many processes: {count} exceeds limit {limit}")]
    #[diagnostic(
        code(workload::too_many_processes),
        help("Split the workload or raise max_processes in the configuration.")
    )]
    TooManyProcesses { count: usize, limit: usize },

    #[error("Process {pid}: burst time must be positive")]
    #[diagnostic(
        code(workload::invalid_burst),
        help("Every process needs at least one tick of CPU work.")
    )]
    InvalidBurst { pid: Pid },

    #[error("Process {pid}: priority {priority} out of range")]
    #[diagnostic(
        code(workload::invalid_priority),
        help("Priority must be between 1 (highest) and 10 (lowest).")
    )]
    InvalidPriority { pid: Pid, priority: u8 },

    #[error("Invalid pid {0}: pids are 1-based")]
    #[diagnostic(code(workload::invalid_pid), help("Use pids starting at 1, or omit them."))]
    InvalidPid(Pid),

    #[error("Duplicate pid {0}")]
    #[diagnostic(
        code(workload::duplicate_pid),
        help("Every process needs a unique pid; omit pids to have them assigned.")
    )]
    DuplicatePid(Pid),

    #[error("Invalid quantum: {0}")]
    #[diagnostic(
        code(workload::invalid_quantum),
        help("The quantum must be a positive number of ticks.")
    )]
    InvalidQuantum(u64),
}
