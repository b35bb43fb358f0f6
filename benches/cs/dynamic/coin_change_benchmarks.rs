use coinchange::{greedy_change, min_coins_for_change, solve, ChangeTable};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const COINS: [usize; 4] = [50, 20, 2, 1];

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("coin_change");

    for &amount in &[100, 1_000, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("solve", amount), &amount, |b, &amount| {
            b.iter(|| solve(black_box(amount), black_box(&COINS[..])))
        });
        group.bench_with_input(
            BenchmarkId::new("min_coins_for_change", amount),
            &amount,
            |b, &amount| b.iter(|| min_coins_for_change(black_box(&COINS[..]), black_box(amount))),
        );
        group.bench_with_input(BenchmarkId::new("greedy", amount), &amount, |b, &amount| {
            b.iter(|| greedy_change(black_box(amount), black_box(&COINS[..])))
        });
    }

    group.finish();
}

fn bench_shared_table(c: &mut Criterion) {
    let table = ChangeTable::build(10_000, &COINS);
    c.bench_function("table_solution_10000", |b| {
        b.iter(|| table.solution(black_box(9_999)))
    });
}

criterion_group!(benches, bench_solve, bench_shared_table);
criterion_main!(benches);
