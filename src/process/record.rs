/*!
 * Process Record
 * Mutable per-process state carried through a simulation run
 */

use crate::core::types::{Pid, Priority, Tick};
use crate::scheduler::types::QueueLevel;
use serde::{Deserialize, Serialize};

/// One simulated process. Created at input time, mutated throughout the run,
/// retained after completion for final reporting.
///
/// `arrival_time`, `burst_time`, and `priority` are immutable after creation.
/// `waiting_time`, `turnaround_time`, and `completion_time` are derived once
/// at completion; `response_time` once at first dispatch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Process {
    pub pid: Pid,
    pub arrival_time: Tick,
    pub burst_time: Tick,
    pub priority: Priority,
    pub remaining_time: Tick,
    pub current_queue: Option<QueueLevel>,
    pub queue_wait_time: Tick,
    pub start_time: Option<Tick>,
    pub completion_time: Tick,
    pub waiting_time: Tick,
    pub turnaround_time: Tick,
    pub response_time: Tick,
    pub completed: bool,
}

impl Process {
    /// Create a record with all mutable fields reset
    #[must_use]
    pub fn new(pid: Pid, arrival_time: Tick, burst_time: Tick, priority: Priority) -> Self {
        Self {
            pid,
            arrival_time,
            burst_time,
            priority,
            remaining_time: burst_time,
            current_queue: None,
            queue_wait_time: 0,
            start_time: None,
            completion_time: 0,
            waiting_time: 0,
            turnaround_time: 0,
            response_time: 0,
            completed: false,
        }
    }

    /// Record the first dispatch. Sets `start_time` exactly once and derives
    /// the response time; later calls are no-ops.
    pub fn mark_started(&mut self, now: Tick) {
        if self.start_time.is_none() {
            self.start_time = Some(now);
            self.response_time = now - self.arrival_time;
        }
    }

    /// Move the record into `queue`, resetting the starvation counter.
    pub fn enter_queue(&mut self, queue: QueueLevel) {
        self.current_queue = Some(queue);
        self.queue_wait_time = 0;
    }

    /// Compute completion finals and mark the record terminal.
    pub fn finalize(&mut self, now: Tick) {
        self.completion_time = now;
        self.turnaround_time = now - self.arrival_time;
        self.waiting_time = self.turnaround_time - self.burst_time;
        self.completed = true;
        self.current_queue = None;
    }

    /// Awaiting admission: not finished and not yet assigned to a queue
    #[inline]
    #[must_use]
    pub fn is_pending(&self) -> bool {
        !self.completed && self.current_queue.is_none()
    }

    /// Resident in some queue and still runnable
    #[inline]
    #[must_use]
    pub fn is_queued(&self) -> bool {
        !self.completed && self.current_queue.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_reset() {
        let p = Process::new(1, 4, 7, 3);
        assert_eq!(p.remaining_time, 7);
        assert_eq!(p.current_queue, None);
        assert_eq!(p.start_time, None);
        assert!(p.is_pending());
        assert!(!p.completed);
    }

    #[test]
    fn test_start_time_set_once() {
        let mut p = Process::new(1, 2, 5, 1);
        p.mark_started(6);
        p.mark_started(9);
        assert_eq!(p.start_time, Some(6));
        assert_eq!(p.response_time, 4);
    }

    #[test]
    fn test_finalize_derives_metrics() {
        let mut p = Process::new(1, 3, 4, 1);
        p.mark_started(5);
        p.remaining_time = 0;
        p.finalize(10);
        assert_eq!(p.completion_time, 10);
        assert_eq!(p.turnaround_time, 7);
        assert_eq!(p.waiting_time, 3);
        assert!(p.completed);
        assert_eq!(p.current_queue, None);
    }

    #[test]
    fn test_enter_queue_resets_wait() {
        let mut p = Process::new(1, 0, 5, 1);
        p.queue_wait_time = 4;
        p.enter_queue(QueueLevel::ShortestJob);
        assert_eq!(p.current_queue, Some(QueueLevel::ShortestJob));
        assert_eq!(p.queue_wait_time, 0);
    }
}
