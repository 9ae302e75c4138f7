/*!
 * Gantt Chart
 * Bounded execution history of the simulation
 */

use crate::core::types::{Pid, Tick};
use log::warn;
use serde::Serialize;

/// Occupant of one executed interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Occupant {
    Process(Pid),
    Idle,
}

/// One executed (or idle) interval, appended in dispatch order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Slice {
    pub occupant: Occupant,
    pub start: Tick,
    pub end: Tick,
}

impl Slice {
    #[inline]
    #[must_use]
    pub fn duration(&self) -> Tick {
        self.end - self.start
    }

    #[inline]
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.occupant == Occupant::Idle
    }
}

/// Execution history with a fixed capacity. Slices past the cap are dropped
/// from the record (and counted), which degrades the report but never the
/// schedule: busy-tick accounting lives in the engine, not here.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct GanttChart {
    slices: Vec<Slice>,
    capacity: usize,
    dropped: u64,
}

impl GanttChart {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slices: Vec::new(),
            capacity,
            dropped: 0,
        }
    }

    pub fn record(&mut self, occupant: Occupant, start: Tick, end: Tick) {
        if self.slices.len() < self.capacity {
            self.slices.push(Slice {
                occupant,
                start,
                end,
            });
        } else {
            if self.dropped == 0 {
                warn!(
                    "Gantt chart full ({} entries); further slices are dropped from the report",
                    self.capacity
                );
            }
            self.dropped += 1;
        }
    }

    #[must_use]
    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Slices that did not fit in the recorded history
    #[must_use]
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    /// Sum of recorded non-idle durations
    #[must_use]
    pub fn recorded_busy_ticks(&self) -> Tick {
        self.slices
            .iter()
            .filter(|s| !s.is_idle())
            .map(Slice::duration)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut chart = GanttChart::with_capacity(10);
        chart.record(Occupant::Process(1), 0, 3);
        chart.record(Occupant::Idle, 3, 4);
        chart.record(Occupant::Process(2), 4, 6);

        assert_eq!(chart.len(), 3);
        assert_eq!(chart.slices()[1].occupant, Occupant::Idle);
        assert_eq!(chart.recorded_busy_ticks(), 5);
    }

    #[test]
    fn test_capacity_drops_silently() {
        let mut chart = GanttChart::with_capacity(2);
        chart.record(Occupant::Process(1), 0, 1);
        chart.record(Occupant::Process(2), 1, 2);
        chart.record(Occupant::Process(3), 2, 3);
        chart.record(Occupant::Idle, 3, 4);

        assert_eq!(chart.len(), 2);
        assert_eq!(chart.dropped(), 2);
        assert_eq!(chart.slices()[1].occupant, Occupant::Process(2));
    }
}
