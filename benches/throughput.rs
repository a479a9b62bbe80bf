use chrono::{DateTime, Duration, FixedOffset};
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use payment_queries::{
    FixedClock, Payment, PaymentId, PaymentItem, PaymentQueryService, PaymentStore, User,
    YearMonth,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::time::Duration as StdDuration;

const NUM_PAYMENTS: u64 = 100_000;
const NUM_USERS: u64 = 1_000;

fn build_store(start: DateTime<FixedOffset>) -> PaymentStore {
    (0..NUM_PAYMENTS)
        .map(|i| {
            let items = (0..=i % 4)
                .map(|n| {
                    let regular = Decimal::from(10 + n) + dec!(0.99);
                    PaymentItem::new(format!("product-{}", (i + n) % 250), regular, regular - dec!(1))
                })
                .collect();
            Payment::new(
                PaymentId(i),
                start + Duration::minutes(i as i64 * 7),
                User::new(format!("user{}@example.com", i % NUM_USERS)),
                items,
            )
        })
        .collect()
}

fn run_queries(c: &mut Criterion) {
    let start = DateTime::parse_from_rfc3339("2024-01-01T00:00:00+00:00").unwrap();
    let store = build_store(start);
    let clock = FixedClock::new(start + Duration::days(365));
    let service = PaymentQueryService::new(&store, clock);
    let march = YearMonth::new(2024, 3).unwrap();

    let mut group = c.benchmark_group("throughput");
    group.throughput(Throughput::Elements(NUM_PAYMENTS));
    group.measurement_time(StdDuration::from_secs(20));
    group.sample_size(50);

    group.bench_function("sorted_by_date_descending_100K", |b| {
        b.iter(|| service.sorted_by_date_descending().unwrap());
    });

    group.bench_function("total_for_month_100K", |b| {
        b.iter(|| service.total_for_month(march).unwrap());
    });

    group.bench_function("payments_over_value_100K", |b| {
        b.iter(|| service.payments_over_value(40).unwrap());
    });

    group.bench_function("monthly_summaries_100K", |b| {
        b.iter(|| service.monthly_summaries().unwrap());
    });

    group.finish();
}

criterion_group!(benches, run_queries);
criterion_main!(benches);
