/*!
 * Queue Set
 * The four-level queue hierarchy
 */

use super::entry::Entry;
use super::types::{QueueLevel, LEVELS};
use crate::core::types::Pid;
use std::collections::{BinaryHeap, VecDeque};

/// Four containers, one per level, each with its own selection policy.
/// Q0 is plain FIFO; Q1/Q2/Q3 are min-heaps over the level's ordering key.
/// Queues hold pids and key snapshots only; record state lives in the
/// process table.
#[derive(Debug, Default)]
pub(super) struct QueueSet {
    rr: VecDeque<Pid>,
    sjf: BinaryHeap<Entry>,
    prio: BinaryHeap<Entry>,
    srtf: BinaryHeap<Entry>,
}

impl QueueSet {
    pub fn new() -> Self {
        Self::default()
    }

    fn heap(&self, level: QueueLevel) -> Option<&BinaryHeap<Entry>> {
        match level {
            QueueLevel::RoundRobin => None,
            QueueLevel::ShortestJob => Some(&self.sjf),
            QueueLevel::Priority => Some(&self.prio),
            QueueLevel::ShortestRemaining => Some(&self.srtf),
        }
    }

    fn heap_mut(&mut self, level: QueueLevel) -> Option<&mut BinaryHeap<Entry>> {
        match level {
            QueueLevel::RoundRobin => None,
            QueueLevel::ShortestJob => Some(&mut self.sjf),
            QueueLevel::Priority => Some(&mut self.prio),
            QueueLevel::ShortestRemaining => Some(&mut self.srtf),
        }
    }

    /// Insert at a level. The entry's key must already match the level's
    /// ordering attribute; Q0 ignores it and appends FIFO.
    pub fn push(&mut self, level: QueueLevel, entry: Entry) {
        match self.heap_mut(level) {
            Some(heap) => heap.push(entry),
            None => self.rr.push_back(entry.pid),
        }
    }

    /// Remove and return the level's dispatch candidate
    pub fn pop(&mut self, level: QueueLevel) -> Option<Pid> {
        match self.heap_mut(level) {
            Some(heap) => heap.pop().map(|e| e.pid),
            None => self.rr.pop_front(),
        }
    }

    pub fn len(&self, level: QueueLevel) -> usize {
        match self.heap(level) {
            Some(heap) => heap.len(),
            None => self.rr.len(),
        }
    }

    pub fn is_empty(&self, level: QueueLevel) -> bool {
        self.len(level) == 0
    }

    /// Highest-precedence non-empty level, if any
    pub fn first_nonempty(&self) -> Option<QueueLevel> {
        LEVELS.into_iter().find(|&level| !self.is_empty(level))
    }

    /// Drain an ordered level in its policy order. Q0 is never drained
    /// (it is not a promotion source), so it yields nothing here.
    pub fn drain_ordered(&mut self, level: QueueLevel) -> Vec<Entry> {
        let mut out = Vec::new();
        if let Some(heap) = self.heap_mut(level) {
            while let Some(entry) = heap.pop() {
                out.push(entry);
            }
        }
        out
    }

    /// Resident pids in dispatch order, for reporting
    pub fn snapshot(&self, level: QueueLevel) -> Vec<Pid> {
        match self.heap(level) {
            Some(heap) => {
                let mut copy = heap.clone();
                let mut out = Vec::with_capacity(copy.len());
                while let Some(entry) = copy.pop() {
                    out.push(entry.pid);
                }
                out
            }
            None => self.rr.iter().copied().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_robin_is_fifo() {
        let mut q = QueueSet::new();
        q.push(QueueLevel::RoundRobin, Entry::new(3, 0, 0));
        q.push(QueueLevel::RoundRobin, Entry::new(1, 0, 0));
        q.push(QueueLevel::RoundRobin, Entry::new(2, 0, 0));

        assert_eq!(q.pop(QueueLevel::RoundRobin), Some(3));
        assert_eq!(q.pop(QueueLevel::RoundRobin), Some(1));
        assert_eq!(q.pop(QueueLevel::RoundRobin), Some(2));
        assert_eq!(q.pop(QueueLevel::RoundRobin), None);
    }

    #[test]
    fn test_ordered_levels_pop_smallest_key() {
        let mut q = QueueSet::new();
        q.push(QueueLevel::ShortestJob, Entry::new(1, 9, 0));
        q.push(QueueLevel::ShortestJob, Entry::new(2, 4, 0));
        assert_eq!(q.pop(QueueLevel::ShortestJob), Some(2));

        q.push(QueueLevel::Priority, Entry::new(3, 7, 0));
        q.push(QueueLevel::Priority, Entry::new(4, 2, 0));
        assert_eq!(q.pop(QueueLevel::Priority), Some(4));
    }

    #[test]
    fn test_precedence_order() {
        let mut q = QueueSet::new();
        assert_eq!(q.first_nonempty(), None);

        q.push(QueueLevel::ShortestRemaining, Entry::new(1, 5, 0));
        assert_eq!(q.first_nonempty(), Some(QueueLevel::ShortestRemaining));

        q.push(QueueLevel::Priority, Entry::new(2, 3, 0));
        assert_eq!(q.first_nonempty(), Some(QueueLevel::Priority));

        q.push(QueueLevel::RoundRobin, Entry::new(3, 0, 0));
        assert_eq!(q.first_nonempty(), Some(QueueLevel::RoundRobin));
    }

    #[test]
    fn test_snapshot_in_dispatch_order() {
        let mut q = QueueSet::new();
        q.push(QueueLevel::ShortestRemaining, Entry::new(1, 6, 0));
        q.push(QueueLevel::ShortestRemaining, Entry::new(2, 2, 0));
        q.push(QueueLevel::ShortestRemaining, Entry::new(3, 4, 0));

        assert_eq!(q.snapshot(QueueLevel::ShortestRemaining), vec![2, 3, 1]);
        // Snapshot does not consume
        assert_eq!(q.len(QueueLevel::ShortestRemaining), 3);
    }

    #[test]
    fn test_drain_ordered() {
        let mut q = QueueSet::new();
        q.push(QueueLevel::Priority, Entry::new(1, 8, 0));
        q.push(QueueLevel::Priority, Entry::new(2, 1, 0));

        let drained = q.drain_ordered(QueueLevel::Priority);
        assert_eq!(drained.iter().map(|e| e.pid).collect::<Vec<_>>(), vec![2, 1]);
        assert!(q.is_empty(QueueLevel::Priority));
    }
}
