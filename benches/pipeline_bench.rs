use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tabstat::prelude::*;

/// Deterministic pseudo-random values in [0, 1000)
fn generate_data(size: usize, seed: u64) -> Vec<f64> {
    let mut state = seed;
    (0..size)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (state >> 11) as f64 / (1u64 << 53) as f64 * 1000.0
        })
        .collect()
}

fn sales_table(rows: usize) -> Table {
    let regions = ["North", "South", "East", "West"];
    let months = ["Jan", "Feb", "Mar"];
    let sales = generate_data(rows, 42);
    Table::new(vec![
        Column::categorical("Region", (0..rows).map(|i| regions[i % regions.len()])),
        Column::categorical("Month", (0..rows).map(|i| months[i % months.len()])),
        Column::numeric_opt(
            "Sales",
            sales.iter().enumerate().map(|(i, &x)| (i % 7 != 0).then_some(x)),
        ),
    ])
    .unwrap()
}

fn bench_shapiro_wilk(c: &mut Criterion) {
    let mut group = c.benchmark_group("ShapiroWilk");
    for size in [10, 100, 1000, 5000] {
        let data = generate_data(size, 7);
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| shapiro_wilk(black_box(data)))
        });
    }
    group.finish();
}

fn bench_pearson(c: &mut Criterion) {
    let mut group = c.benchmark_group("Pearson");
    for size in [10, 1000, 100_000] {
        let x = generate_data(size, 1);
        let y = generate_data(size, 2);
        group.bench_with_input(BenchmarkId::from_parameter(size), &(x, y), |b, (x, y)| {
            b.iter(|| pearson(black_box(x), black_box(y)))
        });
    }
    group.finish();
}

fn bench_table_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("TablePipeline");
    let imputer = Imputer::new().with("Sales", ImputeStrategy::Median);
    let aggregator = GroupAggregator::new(["Region", "Month"]).reduce("Sales", "Sales", Reducer::Sum);
    for rows in [100, 10_000] {
        let table = sales_table(rows);
        group.bench_with_input(BenchmarkId::new("impute_aggregate", rows), &table, |b, table| {
            b.iter(|| {
                let mut table = table.clone();
                imputer.apply(&mut table).unwrap();
                aggregator.aggregate(black_box(&table)).unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_shapiro_wilk, bench_pearson, bench_table_pipeline);
criterion_main!(benches);
