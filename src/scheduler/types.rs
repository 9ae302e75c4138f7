/*!
 * Scheduler Types
 * Domain types for the MLFQ engine: queue levels, configuration, events, stats
 */

use crate::core::errors::SchedulerError;
use crate::core::limits;
use crate::core::types::{Pid, Priority, Tick};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Queue level in the feedback hierarchy. Dispatch precedence is strict:
/// a lower level is only eligible when every level above it is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueueLevel {
    /// Q0 - round robin with a fixed time quantum
    RoundRobin,
    /// Q1 - shortest job first, keyed by original burst time
    ShortestJob,
    /// Q2 - priority order (lower value dispatches first)
    Priority,
    /// Q3 - shortest remaining time first, preemptive at 1-tick granularity
    ShortestRemaining,
}

/// All levels in dispatch precedence order
pub const LEVELS: [QueueLevel; 4] = [
    QueueLevel::RoundRobin,
    QueueLevel::ShortestJob,
    QueueLevel::Priority,
    QueueLevel::ShortestRemaining,
];

impl QueueLevel {
    /// Parse from string representation
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "q0" | "round_robin" | "rr" => Ok(Self::RoundRobin),
            "q1" | "shortest_job" | "sjf" => Ok(Self::ShortestJob),
            "q2" | "priority" => Ok(Self::Priority),
            "q3" | "shortest_remaining" | "srtf" => Ok(Self::ShortestRemaining),
            _ => Err(format!("Invalid queue level '{}'. Valid: q0, q1, q2, q3", s)),
        }
    }

    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::RoundRobin => "q0",
            Self::ShortestJob => "q1",
            Self::Priority => "q2",
            Self::ShortestRemaining => "q3",
        }
    }

    /// Human-readable label used by the reporting layer
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::RoundRobin => "Q0 (Round Robin)",
            Self::ShortestJob => "Q1 (SJF)",
            Self::Priority => "Q2 (Priority)",
            Self::ShortestRemaining => "Q3 (SRTF)",
        }
    }

    /// Destination of a starvation promotion out of this level, if any
    #[must_use]
    pub const fn promotion_target(&self) -> Option<QueueLevel> {
        match self {
            Self::RoundRobin => None,
            Self::ShortestJob => Some(Self::RoundRobin),
            Self::Priority => Some(Self::ShortestJob),
            Self::ShortestRemaining => Some(Self::Priority),
        }
    }
}

impl Serialize for QueueLevel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for QueueLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Engine configuration. Limits are constructor parameters rather than
/// compiled-in constants so the engine is testable at small and large scale
/// without recompilation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SchedulerConfig {
    /// Time slice granted to each Q0 dispatch
    pub quantum: Tick,
    /// Maximum processes accepted per run
    pub max_processes: usize,
    /// Gantt history capacity; overflow slices are dropped from the report
    pub max_gantt_entries: usize,
    /// Queue wait, in ticks, at which the promotion pass lifts a process
    pub starvation_threshold: Tick,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            quantum: limits::DEFAULT_QUANTUM,
            max_processes: limits::DEFAULT_MAX_PROCESSES,
            max_gantt_entries: limits::DEFAULT_MAX_GANTT_ENTRIES,
            starvation_threshold: limits::DEFAULT_STARVATION_THRESHOLD,
        }
    }
}

impl SchedulerConfig {
    #[must_use]
    pub fn with_quantum(mut self, quantum: Tick) -> Self {
        self.quantum = quantum;
        self
    }

    #[must_use]
    pub fn with_max_processes(mut self, max: usize) -> Self {
        self.max_processes = max;
        self
    }

    #[must_use]
    pub fn with_max_gantt_entries(mut self, max: usize) -> Self {
        self.max_gantt_entries = max;
        self
    }

    #[must_use]
    pub fn with_starvation_threshold(mut self, threshold: Tick) -> Self {
        self.starvation_threshold = threshold;
        self
    }

    pub fn validate(&self) -> Result<(), SchedulerError> {
        if self.quantum == 0 {
            return Err(SchedulerError::InvalidQuantum(self.quantum));
        }
        if self.starvation_threshold == 0 {
            return Err(SchedulerError::InvalidThreshold(self.starvation_threshold));
        }
        Ok(())
    }
}

/// One entry in the simulation's ordered event trace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SimEvent {
    /// Process admitted into Q0
    Arrived { pid: Pid, at: Tick },
    /// Process executed on some level for [start, end)
    Dispatched {
        pid: Pid,
        level: QueueLevel,
        start: Tick,
        end: Tick,
    },
    /// Q0 slice expired with work left; process moved down to Q1
    Demoted { pid: Pid, remaining: Tick },
    /// Q3 process put back after its 1-tick slice
    Requeued { pid: Pid, remaining: Tick },
    /// Starvation pass lifted a process one level
    Promoted {
        pid: Pid,
        from: QueueLevel,
        to: QueueLevel,
    },
    /// Process ran its burst to zero
    Completed { pid: Pid, at: Tick },
    /// No queue had work for [start, end)
    Idle { start: Tick, end: Tick },
}

/// Aggregate engine counters, in the spirit of a scheduler stats snapshot
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SchedulerStats {
    pub dispatches: u64,
    pub demotions: u64,
    pub promotions: u64,
    pub requeues: u64,
    pub completions: u64,
    pub idle_ticks: u64,
    pub busy_ticks: u64,
}

/// Priority bounds (1 = highest scheduling priority)
pub const MIN_PRIORITY: Priority = 1;
pub const MAX_PRIORITY: Priority = 10;

/// Validate a priority value against the simulator's range
#[inline]
pub fn validate_priority(priority: Priority) -> Result<Priority, String> {
    if priority < MIN_PRIORITY || priority > MAX_PRIORITY {
        Err(format!(
            "Priority {} outside range [{}, {}]",
            priority, MIN_PRIORITY, MAX_PRIORITY
        ))
    } else {
        Ok(priority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_parsing() {
        assert_eq!(QueueLevel::from_str("q0").unwrap(), QueueLevel::RoundRobin);
        assert_eq!(QueueLevel::from_str("SJF").unwrap(), QueueLevel::ShortestJob);
        assert_eq!(QueueLevel::from_str("q2").unwrap(), QueueLevel::Priority);
        assert_eq!(
            QueueLevel::from_str("srtf").unwrap(),
            QueueLevel::ShortestRemaining
        );
        assert!(QueueLevel::from_str("q4").is_err());
    }

    #[test]
    fn test_promotion_chain() {
        assert_eq!(
            QueueLevel::ShortestRemaining.promotion_target(),
            Some(QueueLevel::Priority)
        );
        assert_eq!(
            QueueLevel::Priority.promotion_target(),
            Some(QueueLevel::ShortestJob)
        );
        assert_eq!(
            QueueLevel::ShortestJob.promotion_target(),
            Some(QueueLevel::RoundRobin)
        );
        assert_eq!(QueueLevel::RoundRobin.promotion_target(), None);
    }

    #[test]
    fn test_config_validation() {
        assert!(SchedulerConfig::default().validate().is_ok());
        assert_eq!(
            SchedulerConfig::default().with_quantum(0).validate(),
            Err(SchedulerError::InvalidQuantum(0))
        );
        assert_eq!(
            SchedulerConfig::default()
                .with_starvation_threshold(0)
                .validate(),
            Err(SchedulerError::InvalidThreshold(0))
        );
    }

    #[test]
    fn test_priority_validation() {
        assert!(validate_priority(0).is_err());
        assert_eq!(validate_priority(1).unwrap(), 1);
        assert_eq!(validate_priority(10).unwrap(), 10);
        assert!(validate_priority(11).is_err());
    }
}
