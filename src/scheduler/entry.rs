/*!
 * Queue Entry
 * Heap entries for the ordered queue levels
 */

use crate::core::types::{Pid, Tick};
use std::cmp::Ordering;

/// Entry in one of the ordered queues (Q1/Q2/Q3). The key is a snapshot of
/// the level's ordering attribute at insertion time: original burst time on
/// Q1, priority value on Q2, remaining time on Q3 (refreshed on every Q3
/// reinsertion, which keeps that level a live SRTF).
///
/// Ordering is deterministic: ascending key, ties broken by earliest
/// arrival, then lowest pid. `Ord` is reversed so that `BinaryHeap`'s
/// max-heap pops the smallest entry first.
#[derive(Debug, Clone, Copy)]
pub(super) struct Entry {
    pub pid: Pid,
    pub key: Tick,
    pub arrival: Tick,
}

impl Entry {
    pub fn new(pid: Pid, key: Tick, arrival: Tick) -> Self {
        Self { pid, key, arrival }
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.pid == other.pid
    }
}

impl Eq for Entry {}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap, so the smallest key wins
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.arrival.cmp(&self.arrival))
            .then_with(|| other.pid.cmp(&self.pid))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
