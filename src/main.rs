/*!
 * MLFQ Simulator - Main Entry Point
 *
 * Loads a workload file, runs the four-level feedback queue simulation,
 * and prints the per-iteration trace, the Gantt chart, and the summary.
 */

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use mlfq_sim::core::limits;
use mlfq_sim::{report, Scheduler, SchedulerConfig, Workload};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mlfq", about = "Multi-level feedback queue scheduler simulation")]
struct Cli {
    /// Workload file (JSON: optional quantum plus a process list)
    workload: PathBuf,

    /// Round-robin time slice; overrides the workload's quantum
    #[arg(long)]
    quantum: Option<u64>,

    /// Skip the per-iteration trace; print only the final report
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let workload = Workload::from_path(&cli.workload)
        .with_context(|| format!("loading workload {}", cli.workload.display()))?;

    let config = SchedulerConfig::default().with_quantum(
        cli.quantum
            .or(workload.quantum)
            .unwrap_or(limits::DEFAULT_QUANTUM),
    );

    let records = workload
        .into_records(config.max_processes)
        .context("validating workload")?;

    info!(
        "Loaded {} processes, quantum={}",
        records.len(),
        config.quantum
    );

    let mut sched = Scheduler::new(records, config).context("building scheduler")?;

    println!("\nStarting MLFQ Scheduler...");
    let mut cursor = 0;
    loop {
        let now = sched.clock();
        if !sched.step() {
            break;
        }
        if !cli.quiet {
            println!("\nTime {}:", now);
            for event in &sched.events()[cursor..] {
                println!("  {}", report::event_line(event));
            }
            print!("{}", report::queue_states(&sched));
        }
        cursor = sched.events().len();
    }

    println!("\nGantt Chart:\n{}", report::gantt_line(sched.gantt()));
    if sched.gantt().dropped() > 0 {
        println!("({} further entries not recorded)", sched.gantt().dropped());
    }

    println!("\nProcess Details:");
    print!("{}", report::summary_table(sched.processes()));

    println!();
    print!("{}", report::averages(&sched.metrics()));

    Ok(())
}
