/*!
 * Scheduler Benchmarks
 *
 * Throughput of full simulation runs over synthetic workloads
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mlfq_sim::{Process, Scheduler, SchedulerConfig};

fn synthetic_workload(n: u32) -> Vec<Process> {
    (1..=n)
        .map(|pid| {
            let arrival = u64::from(pid % 17);
            let burst = u64::from(pid % 9) + 1;
            let priority = (pid % 10 + 1) as u8;
            Process::new(pid, arrival, burst, priority)
        })
        .collect()
}

fn bench_full_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_run");

    for n in [10u32, 100, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let config = SchedulerConfig::default()
                .with_quantum(2)
                .with_max_processes(n as usize)
                .with_max_gantt_entries(64 * 1024);

            b.iter(|| {
                let mut sched =
                    Scheduler::new(black_box(synthetic_workload(n)), config).unwrap();
                sched.run();
                black_box(sched.metrics())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_full_run);
criterion_main!(benches);
