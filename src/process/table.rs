/*!
 * Process Table
 * Single owned table of process records with pid-keyed accessors
 */

use super::record::Process;
use crate::core::types::Pid;
use ahash::AHashMap;

/// Owned table of every process in the run. The table is the only holder of
/// record state: queues reference processes by pid, so wait counters and
/// remaining times are always read from and written to the live record.
#[derive(Debug, Clone, Default)]
pub struct ProcessTable {
    records: Vec<Process>,
    index: AHashMap<Pid, usize>,
}

impl ProcessTable {
    #[must_use]
    pub fn new(records: Vec<Process>) -> Self {
        let index = records
            .iter()
            .enumerate()
            .map(|(slot, p)| (p.pid, slot))
            .collect();
        Self { records, index }
    }

    #[inline]
    #[must_use]
    pub fn get(&self, pid: Pid) -> Option<&Process> {
        self.index.get(&pid).map(|&slot| &self.records[slot])
    }

    #[inline]
    #[must_use]
    pub fn get_mut(&mut self, pid: Pid) -> Option<&mut Process> {
        self.index.get(&pid).map(|&slot| &mut self.records[slot])
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Process> {
        self.records.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Process> {
        self.records.iter_mut()
    }

    /// Final records in input order, for reporting
    #[must_use]
    pub fn records(&self) -> &[Process] {
        &self.records
    }
}
