use atoms::{Atoms, GrowthStrategy};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn bench_sequential_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential_add");

    for size in [10, 100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        for (name, strategy) in [
            ("amortized", GrowthStrategy::Amortized),
            ("exact_fit", GrowthStrategy::ExactFit),
        ] {
            group.bench_with_input(BenchmarkId::new(name, size), size, |b, &size| {
                b.iter(|| {
                    let mut atoms = Atoms::with_strategy(strategy);

                    for i in 0..size {
                        atoms.add(format!("element_{}", i));
                    }

                    black_box(atoms.len())
                });
            });
        }
    }
    group.finish();
}

fn bench_random_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_access");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(
            BenchmarkId::new("get_operations", size),
            size,
            |b, &size| {
                let atoms: Atoms<String> = (0..size).map(|i| format!("element_{}", i)).collect();

                b.iter(|| {
                    for i in 0..size {
                        black_box(atoms.get(i).unwrap());
                    }
                });
            },
        );
    }
    group.finish();
}

fn bench_iterator_performance(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterator");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(
            BenchmarkId::new("full_iteration", size),
            size,
            |b, &size| {
                let atoms: Atoms<usize> = (0..size).collect();

                b.iter(|| {
                    for atom in black_box(&atoms) {
                        black_box(atom);
                    }
                });
            },
        );
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(
            BenchmarkId::new("index_of_missing", size),
            size,
            |b, &size| {
                let atoms: Atoms<usize> = (0..size).collect();

                b.iter(|| black_box(atoms.index_of(black_box(&size))));
            },
        );
    }
    group.finish();
}

fn bench_remove_if(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_if");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(
            BenchmarkId::new("remove_even", size),
            size,
            |b, &size| {
                b.iter(|| {
                    let mut atoms: Atoms<usize> = (0..size).collect();
                    black_box(atoms.remove_if(|value| value % 2 == 0))
                });
            },
        );
    }
    group.finish();
}

fn bench_add_remove_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_remove");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(
            BenchmarkId::new("add_remove_last_cycle", size),
            size,
            |b, &size| {
                b.iter(|| {
                    let mut atoms = Atoms::new();

                    for i in 0..size {
                        atoms.add(i);
                    }

                    for _ in 0..size {
                        black_box(atoms.remove_last());
                    }
                });
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_sequential_add,
    bench_random_access,
    bench_iterator_performance,
    bench_search,
    bench_remove_if,
    bench_add_remove_cycle
);
criterion_main!(benches);
