use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};
use tri_path::{MemoizedSolver, Triangle};

fn random_triangle(rng: &mut StdRng, height: usize) -> Triangle {
    let rows = (0..height)
        .map(|i| (0..=i).map(|_| rng.gen_range(-1_000..1_000)).collect())
        .collect();
    Triangle::new(rows).unwrap()
}

fn rss_kib() -> u64 {
    let mut sys = System::new();
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(p) = sys.process(get_current_pid().unwrap()) {
        p.memory() / 1024
    } else {
        0
    }
}

fn bench_memoized_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("memoized_table");
    for &height in &[500usize, 1_000, 2_000] {
        group.bench_function(format!("height_{height}"), |b| {
            b.iter_batched(
                || random_triangle(&mut StdRng::seed_from_u64(42), height),
                |t| {
                    let before = rss_kib();
                    let (best, stats) = MemoizedSolver.max_path_with_stats(&t);
                    let after = rss_kib();
                    criterion::black_box(best);
                    eprintln!(
                        "RSS KiB delta (memoized {height}, {} evaluations): {}",
                        stats.evaluations,
                        after.saturating_sub(before)
                    );
                },
                BatchSize::PerIteration,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_memoized_table);
criterion_main!(benches);
