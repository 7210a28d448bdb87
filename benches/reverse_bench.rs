// Grouped-reversal benchmark - measures reversal throughput across group sizes

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use regroup::ListArena;
use regroup::fixtures::list;

const LIST_LEN: usize = 100_000;

fn bench_reverse_in_groups(c: &mut Criterion) {
    let mut group = c.benchmark_group("reverse_in_groups");
    group.throughput(Throughput::Elements(LIST_LEN as u64));

    for k in [2usize, 8, 64, 1024] {
        group.bench_with_input(BenchmarkId::from_parameter(k), &k, |b, &k| {
            b.iter_batched(
                || {
                    let mut arena = ListArena::with_capacity(LIST_LEN);
                    let head = list::iota(&mut arena, LIST_LEN);
                    (arena, head)
                },
                |(mut arena, head)| {
                    black_box(arena.reverse_in_groups(head, k).unwrap());
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_cycle_guard(c: &mut Criterion) {
    let mut arena = ListArena::with_capacity(LIST_LEN);
    let head = list::iota(&mut arena, LIST_LEN);

    c.bench_function("has_cycle/linear_100k", |b| {
        b.iter(|| black_box(arena.has_cycle(head)));
    });
}

criterion_group!(benches, bench_reverse_in_groups, bench_cycle_guard);
criterion_main!(benches);
