/*!
 * Metrics Aggregator
 * Aggregate performance figures over the finished run
 */

use super::Scheduler;
use serde::Serialize;

/// Aggregate metrics of one simulation run
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Metrics {
    pub avg_waiting_time: f64,
    pub avg_turnaround_time: f64,
    pub avg_response_time: f64,
    /// Percentage of elapsed ticks spent executing (0 when nothing ran)
    pub cpu_utilization: f64,
}

impl Scheduler {
    /// Compute the aggregate metrics. Meaningful once the run is complete;
    /// per-process finals are already frozen on the records by then.
    #[must_use]
    pub fn metrics(&self) -> Metrics {
        let n = self.processes().len();
        if n == 0 {
            return Metrics::default();
        }

        let mut waiting = 0.0;
        let mut turnaround = 0.0;
        let mut response = 0.0;
        for p in self.processes() {
            waiting += p.waiting_time as f64;
            turnaround += p.turnaround_time as f64;
            response += p.response_time as f64;
        }

        let elapsed = self.clock();
        let cpu_utilization = if elapsed > 0 {
            100.0 * self.busy_ticks() as f64 / elapsed as f64
        } else {
            0.0
        };

        Metrics {
            avg_waiting_time: waiting / n as f64,
            avg_turnaround_time: turnaround / n as f64,
            avg_response_time: response / n as f64,
            cpu_utilization,
        }
    }
}
