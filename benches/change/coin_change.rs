use changemaker::{greedy_change, min_coin_change};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const STANDARD: [usize; 6] = [50, 25, 10, 5, 2, 1];

fn bench_change(c: &mut Criterion) {
    let mut group = c.benchmark_group("change");

    for amount in [113usize, 1_117, 25_013] {
        group.bench_with_input(BenchmarkId::new("greedy", amount), &amount, |b, &amount| {
            b.iter(|| greedy_change(black_box(amount), black_box(&STANDARD)))
        });
        group.bench_with_input(
            BenchmarkId::new("min_coins", amount),
            &amount,
            |b, &amount| b.iter(|| min_coin_change(black_box(amount), black_box(&STANDARD))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_change);
criterion_main!(benches);
