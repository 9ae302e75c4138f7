/*!
 * Dispatch Step
 * Per-level execution policies of the feedback hierarchy
 */

use super::gantt::Occupant;
use super::types::{QueueLevel, SimEvent};
use super::Scheduler;
use crate::core::types::{Pid, Tick};
use log::debug;

impl Scheduler {
    /// Service exactly one queue this iteration, chosen by strict precedence
    /// Q0 > Q1 > Q2 > Q3; with every queue empty, burn one idle tick.
    pub(super) fn dispatch(&mut self) {
        match self.queues.first_nonempty() {
            Some(QueueLevel::RoundRobin) => self.dispatch_round_robin(),
            Some(level @ QueueLevel::ShortestJob) | Some(level @ QueueLevel::Priority) => {
                self.dispatch_to_completion(level)
            }
            Some(QueueLevel::ShortestRemaining) => self.dispatch_shortest_remaining(),
            None => self.idle_tick(),
        }
    }

    /// Q0: head of the FIFO runs for `min(quantum, remaining)` ticks, then
    /// either finishes or is demoted to Q1.
    fn dispatch_round_robin(&mut self) {
        let Some(pid) = self.queues.pop(QueueLevel::RoundRobin) else {
            return;
        };
        let start = self.clock;
        let quantum = self.config.quantum;

        let Some(record) = self.table.get_mut(pid) else {
            return;
        };
        record.mark_started(start);
        let exec = quantum.min(record.remaining_time);
        record.remaining_time -= exec;
        let remaining = record.remaining_time;

        self.advance_busy(exec);
        self.gantt.record(Occupant::Process(pid), start, start + exec);
        self.emit(SimEvent::Dispatched {
            pid,
            level: QueueLevel::RoundRobin,
            start,
            end: start + exec,
        });
        debug!(
            "Executing P{} from {} for {} ticks",
            pid,
            QueueLevel::RoundRobin.label(),
            exec
        );

        if remaining == 0 {
            self.complete(pid);
        } else {
            self.demote(pid, remaining);
        }
    }

    /// Q1/Q2: non-preemptive run-to-completion. A process dispatched here
    /// always finishes within the interval.
    fn dispatch_to_completion(&mut self, level: QueueLevel) {
        let Some(pid) = self.queues.pop(level) else {
            return;
        };
        let start = self.clock;

        let Some(record) = self.table.get_mut(pid) else {
            return;
        };
        record.mark_started(start);
        let exec = record.remaining_time;
        record.remaining_time = 0;

        self.advance_busy(exec);
        self.gantt.record(Occupant::Process(pid), start, start + exec);
        self.emit(SimEvent::Dispatched {
            pid,
            level,
            start,
            end: start + exec,
        });
        debug!("Executing P{} from {} to completion", pid, level.label());

        self.complete(pid);
    }

    /// Q3: preemptive at 1-tick granularity. After the tick, arrivals that
    /// landed inside it are admitted (to Q0, per the admission rule); the
    /// process itself is either finished or put back with a fresh
    /// remaining-time key, which is what keeps this level a live SRTF.
    fn dispatch_shortest_remaining(&mut self) {
        let Some(pid) = self.queues.pop(QueueLevel::ShortestRemaining) else {
            return;
        };
        let start = self.clock;

        let Some(record) = self.table.get_mut(pid) else {
            return;
        };
        record.mark_started(start);
        record.remaining_time -= 1;
        let remaining = record.remaining_time;

        self.advance_busy(1);
        self.gantt.record(Occupant::Process(pid), start, start + 1);
        self.emit(SimEvent::Dispatched {
            pid,
            level: QueueLevel::ShortestRemaining,
            start,
            end: start + 1,
        });
        debug!(
            "Executing P{} from {} for 1 tick",
            pid,
            QueueLevel::ShortestRemaining.label()
        );

        self.admit_arrivals();

        if remaining == 0 {
            self.complete(pid);
        } else if let Some(record) = self.table.get_mut(pid) {
            record.enter_queue(QueueLevel::ShortestRemaining);
            let entry = Self::entry_for(record, QueueLevel::ShortestRemaining);
            self.queues.push(QueueLevel::ShortestRemaining, entry);
            self.stats.requeues += 1;
            self.emit(SimEvent::Requeued { pid, remaining });
            debug!(
                "P{} reinserted into {} (remaining time: {})",
                pid,
                QueueLevel::ShortestRemaining.label(),
                remaining
            );
        }
    }

    /// All queues empty: advance the clock one tick and record the gap
    fn idle_tick(&mut self) {
        let start = self.clock;
        self.clock += 1;
        self.stats.idle_ticks += 1;
        self.gantt.record(Occupant::Idle, start, self.clock);
        self.emit(SimEvent::Idle {
            start,
            end: start + 1,
        });
        debug!("CPU idle at tick {}", start);
    }

    fn advance_busy(&mut self, ticks: Tick) {
        self.clock += ticks;
        self.busy_ticks += ticks;
        self.stats.busy_ticks += ticks;
        self.stats.dispatches += 1;
    }

    fn complete(&mut self, pid: Pid) {
        let now = self.clock;
        if let Some(record) = self.table.get_mut(pid) {
            record.finalize(now);
        }
        self.completed += 1;
        self.stats.completions += 1;
        self.emit(SimEvent::Completed { pid, at: now });
        debug!("P{} completed at tick {}", pid, now);
    }

    fn demote(&mut self, pid: Pid, remaining: Tick) {
        if let Some(record) = self.table.get_mut(pid) {
            record.enter_queue(QueueLevel::ShortestJob);
            let entry = Self::entry_for(record, QueueLevel::ShortestJob);
            self.queues.push(QueueLevel::ShortestJob, entry);
        }
        self.stats.demotions += 1;
        self.emit(SimEvent::Demoted { pid, remaining });
        debug!(
            "P{} demoted to {} (remaining time: {})",
            pid,
            QueueLevel::ShortestJob.label(),
            remaining
        );
    }
}
