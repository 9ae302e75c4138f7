/*!
 * Report Rendering
 * Text renderers over the core's outputs; none of this affects scheduling
 */

use crate::process::Process;
use crate::scheduler::{GanttChart, Metrics, Occupant, Scheduler, SimEvent, LEVELS};
use std::fmt::Write;

/// Per-iteration queue-state listing
#[must_use]
pub fn queue_states(sched: &Scheduler) -> String {
    let mut out = String::from("Queue States:\n");
    for level in LEVELS {
        let pids = sched.queue_snapshot(level);
        if pids.is_empty() {
            let _ = writeln!(out, "  {}: Empty", level.label());
        } else {
            let listed: Vec<String> = pids.iter().map(|pid| format!("P{}", pid)).collect();
            let _ = writeln!(out, "  {}: {}", level.label(), listed.join(" "));
        }
    }
    out
}

/// One narration line per simulation event
#[must_use]
pub fn event_line(event: &SimEvent) -> String {
    match event {
        SimEvent::Arrived { pid, .. } => {
            format!("P{} arrived and assigned to Q0 (Round Robin)", pid)
        }
        SimEvent::Dispatched { pid, level, .. } => {
            format!("Executing P{} from {}", pid, level.label())
        }
        SimEvent::Demoted { pid, remaining } => {
            format!("P{} demoted to Q1 (SJF) (remaining time: {})", pid, remaining)
        }
        SimEvent::Requeued { pid, remaining } => format!(
            "P{} reinserted into Q3 (SRTF) (remaining time: {})",
            pid, remaining
        ),
        SimEvent::Promoted { pid, from, to } => format!(
            "P{} promoted from {} to {}",
            pid,
            from.label(),
            to.label()
        ),
        SimEvent::Completed { pid, .. } => format!("P{} completed", pid),
        SimEvent::Idle { .. } => "CPU idle".to_string(),
    }
}

/// The Gantt chart on one line, `| P1(0-2) | Idle(2-3) |`
#[must_use]
pub fn gantt_line(chart: &GanttChart) -> String {
    let mut out = String::from("|");
    for slice in chart.slices() {
        match slice.occupant {
            Occupant::Process(pid) => {
                let _ = write!(out, " P{}({}-{}) |", pid, slice.start, slice.end);
            }
            Occupant::Idle => {
                let _ = write!(out, " Idle({}-{}) |", slice.start, slice.end);
            }
        }
    }
    out
}

/// Fixed-width per-process summary table
#[must_use]
pub fn summary_table(processes: &[Process]) -> String {
    let mut out = format!(
        "{:>5}{:>10}{:>10}{:>10}{:>12}{:>10}{:>12}{:>10}\n",
        "PID", "Arrival", "Burst", "Priority", "Completion", "Waiting", "Turnaround", "Response"
    );
    for p in processes {
        let _ = writeln!(
            out,
            "{:>5}{:>10}{:>10}{:>10}{:>12}{:>10}{:>12}{:>10}",
            p.pid,
            p.arrival_time,
            p.burst_time,
            p.priority,
            p.completion_time,
            p.waiting_time,
            p.turnaround_time,
            p.response_time
        );
    }
    out
}

/// Two-decimal averages block
#[must_use]
pub fn averages(metrics: &Metrics) -> String {
    format!(
        "Average Waiting Time: {:.2} units\n\
         Average Turnaround Time: {:.2} units\n\
         Average Response Time: {:.2} units\n\
         CPU Utilization: {:.2}%\n",
        metrics.avg_waiting_time,
        metrics.avg_turnaround_time,
        metrics.avg_response_time,
        metrics.cpu_utilization
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::QueueLevel;

    #[test]
    fn test_gantt_line_format() {
        let mut chart = GanttChart::with_capacity(10);
        chart.record(Occupant::Process(1), 0, 2);
        chart.record(Occupant::Idle, 2, 3);
        assert_eq!(gantt_line(&chart), "| P1(0-2) | Idle(2-3) |");
    }

    #[test]
    fn test_event_lines() {
        assert_eq!(
            event_line(&SimEvent::Arrived { pid: 3, at: 0 }),
            "P3 arrived and assigned to Q0 (Round Robin)"
        );
        assert_eq!(
            event_line(&SimEvent::Promoted {
                pid: 2,
                from: QueueLevel::ShortestRemaining,
                to: QueueLevel::Priority,
            }),
            "P2 promoted from Q3 (SRTF) to Q2 (Priority)"
        );
        assert_eq!(event_line(&SimEvent::Idle { start: 4, end: 5 }), "CPU idle");
    }

    #[test]
    fn test_summary_table_header_and_row() {
        let mut p = Process::new(1, 0, 3, 2);
        p.mark_started(0);
        p.remaining_time = 0;
        p.finalize(3);

        let table = summary_table(&[p]);
        let mut lines = table.lines();
        assert_eq!(
            lines.next().unwrap(),
            "  PID   Arrival     Burst  Priority  Completion   Waiting  Turnaround  Response"
        );
        assert_eq!(
            lines.next().unwrap(),
            "    1         0         3         2           3         0           3         0"
        );
    }

    #[test]
    fn test_averages_two_decimals() {
        let metrics = Metrics {
            avg_waiting_time: 2.0,
            avg_turnaround_time: 8.0,
            avg_response_time: 1.0,
            cpu_utilization: 100.0,
        };
        let block = averages(&metrics);
        assert!(block.contains("Average Waiting Time: 2.00 units"));
        assert!(block.contains("CPU Utilization: 100.00%"));
    }
}
