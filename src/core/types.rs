/*!
 * Core Types
 * Common types used across the simulator
 */

/// Process ID type (1-based, stable for a process's lifetime)
pub type Pid = u32;

/// Simulated time, in ticks
pub type Tick = u64;

/// Priority level (1 = highest .. 10 = lowest)
pub type Priority = u8;

/// Common result type for scheduler operations
pub type SimResult<T> = Result<T, super::errors::SchedulerError>;
