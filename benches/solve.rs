use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hanoi_stack::core::SolveConfig;
use hanoi_stack::solver::{solve_with, HanoiSolver};
use hanoi_stack::trace::{MoveLog, WriterSink};

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    for disks in [8u32, 12, 16] {
        let config = SolveConfig::new(disks, 0, 2);

        group.bench_with_input(BenchmarkId::new("iterate", disks), &config, |b, config| {
            b.iter(|| {
                let solver = HanoiSolver::new(black_box(config)).unwrap();
                solver.count()
            });
        });

        group.bench_with_input(BenchmarkId::new("move_log", disks), &config, |b, config| {
            b.iter(|| {
                let mut log = MoveLog::new();
                solve_with(black_box(config), &mut log).unwrap()
            });
        });

        group.bench_with_input(BenchmarkId::new("text_sink", disks), &config, |b, config| {
            b.iter(|| {
                let mut sink = WriterSink::new(std::io::sink());
                solve_with(black_box(config), &mut sink).unwrap()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
