/*!
 * Workload Collection
 * File-based process definitions and the validation the core assumes
 */

use crate::core::errors::WorkloadError;
use crate::core::types::{Pid, Priority, Tick};
use crate::process::Process;
use crate::scheduler::types::validate_priority;
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One process definition as written in a workload file. The pid is
/// optional; omitted pids are assigned 1-based from file order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pid: Option<Pid>,
    pub arrival_time: Tick,
    pub burst_time: Tick,
    pub priority: Priority,
}

/// A workload file: an optional quantum plus the process list
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Workload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantum: Option<Tick>,
    pub processes: Vec<ProcessSpec>,
}

impl Workload {
    pub fn from_path(path: &Path) -> Result<Self, WorkloadError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| WorkloadError::ReadFailed(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> Result<Self, WorkloadError> {
        serde_json::from_str(contents).map_err(|e| WorkloadError::ParseFailed(e.to_string()))
    }

    /// Validate against the bounds the scheduling core assumes (process
    /// count, burst, priority, pid uniqueness, quantum) and build the
    /// initial process records in file order.
    pub fn into_records(self, max_processes: usize) -> Result<Vec<Process>, WorkloadError> {
        if self.processes.is_empty() {
            return Err(WorkloadError::Empty);
        }
        if self.processes.len() > max_processes {
            return Err(WorkloadError::TooManyProcesses {
                count: self.processes.len(),
                limit: max_processes,
            });
        }
        if let Some(quantum) = self.quantum {
            if quantum == 0 {
                return Err(WorkloadError::InvalidQuantum(quantum));
            }
        }

        let mut seen = AHashSet::with_capacity(self.processes.len());
        let mut records = Vec::with_capacity(self.processes.len());
        for (slot, spec) in self.processes.into_iter().enumerate() {
            let pid = spec.pid.unwrap_or(slot as Pid + 1);
            if pid == 0 {
                return Err(WorkloadError::InvalidPid(pid));
            }
            if !seen.insert(pid) {
                return Err(WorkloadError::DuplicatePid(pid));
            }
            if spec.burst_time == 0 {
                return Err(WorkloadError::InvalidBurst { pid });
            }
            validate_priority(spec.priority).map_err(|_| WorkloadError::InvalidPriority {
                pid,
                priority: spec.priority,
            })?;
            records.push(Process::new(pid, spec.arrival_time, spec.burst_time, spec.priority));
        }
        Ok(records)
    }
}
