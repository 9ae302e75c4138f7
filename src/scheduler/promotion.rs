/*!
 * Promotion Step
 * Anti-starvation pass over the lower queue levels
 */

use super::types::{QueueLevel, SimEvent};
use super::Scheduler;
use log::debug;

/// Promotion sources, scanned in this order every iteration. Q0 has nowhere
/// to go. A process moves at most one level per iteration; cascades happen
/// across iterations.
const SOURCES: [QueueLevel; 3] = [
    QueueLevel::ShortestRemaining,
    QueueLevel::Priority,
    QueueLevel::ShortestJob,
];

impl Scheduler {
    /// Lift every resident whose live wait counter has reached the
    /// starvation threshold one level up; everyone else is reinserted,
    /// preserving the source's ordering policy.
    pub(super) fn promote_starved(&mut self) {
        for source in SOURCES {
            let Some(target) = source.promotion_target() else {
                continue;
            };
            let threshold = self.config.starvation_threshold;

            for entry in self.queues.drain_ordered(source) {
                let pid = entry.pid;
                let Some(record) = self.table.get_mut(pid) else {
                    continue;
                };
                if record.queue_wait_time >= threshold {
                    record.enter_queue(target);
                    let promoted = Self::entry_for(record, target);
                    self.queues.push(target, promoted);
                    self.stats.promotions += 1;
                    self.emit(SimEvent::Promoted {
                        pid,
                        from: source,
                        to: target,
                    });
                    debug!(
                        "P{} promoted from {} to {}",
                        pid,
                        source.label(),
                        target.label()
                    );
                } else {
                    // Re-key on reinsertion; on Q3 this tracks remaining time
                    let back = Self::entry_for(record, source);
                    self.queues.push(source, back);
                }
            }
        }
    }
}
