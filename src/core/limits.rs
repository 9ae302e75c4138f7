/*!
 * Simulation Limits
 *
 * Default bounds for the simulation engine. All of these are defaults for
 * `SchedulerConfig`, not hard-wired behavior: tests and callers size them
 * up or down without recompiling.
 */

use crate::core::types::Tick;

/// Maximum processes accepted per run
/// Bounds the workload at input-collection time
pub const DEFAULT_MAX_PROCESSES: usize = 100;

/// Maximum recorded Gantt chart entries
/// Overflow slices are dropped from the report, never from scheduling
pub const DEFAULT_MAX_GANTT_ENTRIES: usize = 1000;

/// Ticks a process may wait at one level before the promotion pass lifts it
pub const DEFAULT_STARVATION_THRESHOLD: Tick = 5;

/// Round-robin time slice used when neither the workload nor the CLI
/// supplies one
pub const DEFAULT_QUANTUM: Tick = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limits_sane() {
        assert!(DEFAULT_MAX_PROCESSES > 0);
        assert!(DEFAULT_MAX_GANTT_ENTRIES >= DEFAULT_MAX_PROCESSES);
        assert!(DEFAULT_STARVATION_THRESHOLD >= 1);
        assert!(DEFAULT_QUANTUM >= 1);
    }
}
