use counter::{Count, CountSource, ManualClock, SimulatedCounter, SystemClock};
use criterion::{Criterion, criterion_group, criterion_main};

fn bench_advance_system_clock(c: &mut Criterion) {
    let counter = SimulatedCounter::<SystemClock>::new();

    c.bench_function("counter/advance_system_clock", |b| {
        b.iter(|| counter.advance());
    });
}

fn bench_advance_manual_clock(c: &mut Criterion) {
    let clock = ManualClock::at(1_700_000_000);
    let counter = SimulatedCounter::starting_at(clock.clone(), Count::new(5).unwrap());

    c.bench_function("counter/advance_manual_clock", |b| {
        b.iter(|| {
            clock.advance(1);
            counter.advance()
        });
    });
}

fn bench_next_count_async(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let counter = SimulatedCounter::<SystemClock>::new();

    c.bench_function("counter/next_count", |b| {
        b.iter(|| rt.block_on(counter.next_count()).unwrap());
    });
}

criterion_group!(
    benches,
    bench_advance_system_clock,
    bench_advance_manual_clock,
    bench_next_count_async
);
criterion_main!(benches);
