/*!
 * Admission and Aging
 * Per-iteration entry of arrived processes and wait accounting
 */

use super::types::{QueueLevel, SimEvent};
use super::Scheduler;
use log::debug;

impl Scheduler {
    /// Move every not-yet-assigned process whose arrival time has passed
    /// into Q0. Also invoked mid-dispatch by the SRTF level, which routes
    /// arrivals landing inside its tick to Q0 under the same rule.
    pub(super) fn admit_arrivals(&mut self) {
        let now = self.clock;
        let arrived: Vec<_> = self
            .table
            .iter()
            .filter(|p| p.is_pending() && p.arrival_time <= now)
            .map(|p| p.pid)
            .collect();

        for pid in arrived {
            if let Some(record) = self.table.get_mut(pid) {
                record.enter_queue(QueueLevel::RoundRobin);
                let entry = Self::entry_for(record, QueueLevel::RoundRobin);
                self.queues.push(QueueLevel::RoundRobin, entry);
                debug!("P{} arrived and assigned to {}", pid, QueueLevel::RoundRobin.label());
                self.emit(SimEvent::Arrived { pid, at: now });
            }
        }
    }

    /// Charge one wait tick to every queued process. This runs before
    /// dispatch, so the process serviced this iteration is charged too.
    /// The counter feeds only the starvation trigger.
    pub(super) fn age_queues(&mut self) {
        for record in self.table.iter_mut() {
            if record.is_queued() {
                record.queue_wait_time += 1;
            }
        }
    }
}
