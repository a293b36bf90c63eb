use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::{Days, NaiveDate};
use stockwise_allocation::{Batch, OrderLine, allocate};

/// Half warehouse stock, half shipments with staggered ETAs, listed latest
/// first so the sort has work to do.
fn make_batches(count: usize) -> Vec<Batch> {
    let base = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    (0..count)
        .rev()
        .map(|i| {
            let eta = if i % 2 == 0 {
                None
            } else {
                base.checked_add_days(Days::new(i as u64))
            };
            Batch::new(format!("batch-{i}"), "RETRO-CLOCK", 1_000, eta)
        })
        .collect()
}

fn bench_first_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("allocate_first_fit");

    for count in [10usize, 100, 1_000] {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let template = make_batches(count);
            let line = OrderLine::new("order-1", "RETRO-CLOCK", 3);
            b.iter_batched(
                || template.clone(),
                |mut batches| black_box(allocate(black_box(&line), &mut batches)),
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_exhaust_then_fail(c: &mut Criterion) {
    c.bench_function("allocate_out_of_stock_scan_1000", |b| {
        let mut batches: Vec<Batch> = make_batches(1_000);
        let line = OrderLine::new("order-1", "RETRO-CLOCK", 5_000);
        b.iter(|| black_box(allocate(black_box(&line), &mut batches)));
    });
}

criterion_group!(benches, bench_first_fit, bench_exhaust_then_fail);
criterion_main!(benches);
