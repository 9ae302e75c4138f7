/*!
 * MLFQ Scheduler
 * Discrete-event simulation of a four-level feedback queue
 */

use crate::core::errors::SchedulerError;
use crate::core::types::{Pid, Tick};
use crate::process::{Process, ProcessTable};
use log::info;

mod admission;
mod dispatch;
mod entry;
mod gantt;
mod metrics;
mod promotion;
mod queues;
pub mod types;

pub use gantt::{GanttChart, Occupant, Slice};
pub use metrics::Metrics;
pub use types::{QueueLevel, SchedulerConfig, SchedulerStats, SimEvent, LEVELS};

use entry::Entry;
use queues::QueueSet;

/// The simulation engine. Owns the process table, the queue hierarchy, the
/// clock, and the recorded history; advances one admission → dispatch →
/// promotion iteration per `step` until every process completes.
#[derive(Debug)]
pub struct Scheduler {
    config: SchedulerConfig,
    table: ProcessTable,
    queues: QueueSet,
    gantt: GanttChart,
    events: Vec<SimEvent>,
    clock: Tick,
    busy_ticks: Tick,
    completed: usize,
    stats: SchedulerStats,
}

impl Scheduler {
    /// Create an engine over a prepared workload. The records must carry
    /// validated immutable fields (see the workload module) with all mutable
    /// fields reset; the engine re-checks only its own configuration surface.
    pub fn new(records: Vec<Process>, config: SchedulerConfig) -> Result<Self, SchedulerError> {
        config.validate()?;
        if records.len() > config.max_processes {
            return Err(SchedulerError::TooManyProcesses {
                count: records.len(),
                limit: config.max_processes,
            });
        }

        info!(
            "Scheduler initialized: {} processes, quantum={}, starvation_threshold={}",
            records.len(),
            config.quantum,
            config.starvation_threshold
        );

        Ok(Self {
            table: ProcessTable::new(records),
            queues: QueueSet::new(),
            gantt: GanttChart::with_capacity(config.max_gantt_entries),
            events: Vec::new(),
            clock: 0,
            busy_ticks: 0,
            completed: 0,
            stats: SchedulerStats::default(),
            config,
        })
    }

    /// Run one iteration: admit arrivals, age wait counters, dispatch one
    /// queue (or idle), then run the promotion pass. Returns `false` when
    /// there was nothing left to do.
    pub fn step(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.admit_arrivals();
        self.age_queues();
        self.dispatch();
        self.promote_starved();
        true
    }

    /// Run the simulation to completion of every process
    pub fn run(&mut self) {
        while self.step() {}
        info!(
            "Simulation finished at tick {}: {} dispatches, {} promotions, {} idle ticks",
            self.clock, self.stats.dispatches, self.stats.promotions, self.stats.idle_ticks
        );
    }

    /// Seed a process directly into a queue level, bypassing normal Q0
    /// admission. Models mid-hierarchy starting states; only an unassigned,
    /// unfinished process can be placed.
    pub fn place(&mut self, pid: Pid, level: QueueLevel) -> Result<(), SchedulerError> {
        let record = self
            .table
            .get_mut(pid)
            .ok_or(SchedulerError::ProcessNotFound(pid))?;
        if record.completed || record.current_queue.is_some() {
            return Err(SchedulerError::AlreadyPlaced(pid));
        }
        record.enter_queue(level);
        let entry = Self::entry_for(record, level);
        self.queues.push(level, entry);
        Ok(())
    }

    /// Build a queue entry for a record at a level, snapshotting the level's
    /// ordering key
    fn entry_for(record: &Process, level: QueueLevel) -> Entry {
        let key = match level {
            QueueLevel::RoundRobin => 0,
            QueueLevel::ShortestJob => record.burst_time,
            QueueLevel::Priority => Tick::from(record.priority),
            QueueLevel::ShortestRemaining => record.remaining_time,
        };
        Entry::new(record.pid, key, record.arrival_time)
    }

    fn emit(&mut self, event: SimEvent) {
        self.events.push(event);
    }

    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed == self.table.len()
    }

    #[inline]
    #[must_use]
    pub fn clock(&self) -> Tick {
        self.clock
    }

    #[inline]
    #[must_use]
    pub fn busy_ticks(&self) -> Tick {
        self.busy_ticks
    }

    #[must_use]
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Final process records, in input order
    #[must_use]
    pub fn processes(&self) -> &[Process] {
        self.table.records()
    }

    #[must_use]
    pub fn process(&self, pid: Pid) -> Option<&Process> {
        self.table.get(pid)
    }

    #[must_use]
    pub fn gantt(&self) -> &GanttChart {
        &self.gantt
    }

    /// Ordered trace of everything the engine did
    #[must_use]
    pub fn events(&self) -> &[SimEvent] {
        &self.events
    }

    #[must_use]
    pub fn stats(&self) -> SchedulerStats {
        self.stats
    }

    /// Resident pids at a level, in dispatch order
    #[must_use]
    pub fn queue_snapshot(&self, level: QueueLevel) -> Vec<Pid> {
        self.queues.snapshot(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SchedulerConfig {
        SchedulerConfig::default()
    }

    #[test]
    fn test_empty_workload_is_complete() {
        let mut sched = Scheduler::new(vec![], config()).unwrap();
        assert!(sched.is_complete());
        assert!(!sched.step());
        assert_eq!(sched.clock(), 0);
    }

    #[test]
    fn test_rejects_zero_quantum() {
        let err = Scheduler::new(vec![], config().with_quantum(0)).unwrap_err();
        assert_eq!(err, SchedulerError::InvalidQuantum(0));
    }

    #[test]
    fn test_rejects_oversized_workload() {
        let records = vec![Process::new(1, 0, 1, 1), Process::new(2, 0, 1, 1)];
        let err = Scheduler::new(records, config().with_max_processes(1)).unwrap_err();
        assert_eq!(err, SchedulerError::TooManyProcesses { count: 2, limit: 1 });
    }

    #[test]
    fn test_single_process_runs_to_completion() {
        let records = vec![Process::new(1, 0, 3, 1)];
        let mut sched = Scheduler::new(records, config().with_quantum(5)).unwrap();
        sched.run();

        let p = sched.process(1).unwrap();
        assert!(p.completed);
        assert_eq!(p.completion_time, 3);
        assert_eq!(p.waiting_time, 0);
        assert_eq!(p.turnaround_time, 3);
        assert_eq!(p.response_time, 0);
        assert_eq!(sched.clock(), 3);
    }

    #[test]
    fn test_place_rejects_unknown_and_queued() {
        let records = vec![Process::new(1, 0, 3, 1)];
        let mut sched = Scheduler::new(records, config()).unwrap();

        assert_eq!(
            sched.place(9, QueueLevel::Priority),
            Err(SchedulerError::ProcessNotFound(9))
        );
        sched.place(1, QueueLevel::Priority).unwrap();
        assert_eq!(
            sched.place(1, QueueLevel::ShortestRemaining),
            Err(SchedulerError::AlreadyPlaced(1))
        );
        assert_eq!(sched.queue_snapshot(QueueLevel::Priority), vec![1]);
    }
}
