//! Dispatch Benchmarks
//!
//! Measures the cost of pushing a record through the facility: threshold
//! resolution for loggers at different depths, and dispatch into an
//! in-memory sink versus a suppressed record that never takes the lock.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use traylog_facility::{Facility, HostLevel, LogRecord, MemorySink};

fn bench_effective_level(c: &mut Criterion) {
    let mut group = c.benchmark_group("effective_level");
    let facility = Facility::new();
    facility.set_level("icecube", HostLevel::DEBUG);

    for depth in [1usize, 3, 6] {
        let name = std::iter::once("icecube".to_string())
            .chain((1..depth).map(|i| format!("unit{}", i)))
            .collect::<Vec<_>>()
            .join(".");
        group.bench_with_input(BenchmarkId::from_parameter(depth), &name, |b, name| {
            b.iter(|| facility.effective_level(black_box(name)))
        });
    }
    group.finish();
}

fn bench_handle(c: &mut Criterion) {
    let mut group = c.benchmark_group("handle");
    let facility = Facility::new();
    let sink = MemorySink::new();
    facility.add_handler(Box::new(sink.clone()));

    let enabled = LogRecord::new("icecube.I3Tray", HostLevel::INFO, "I3Tray.cxx", 1, "frame");
    let suppressed = LogRecord::new("icecube.I3Tray", HostLevel::DEBUG, "I3Tray.cxx", 1, "frame");

    group.bench_function("enabled", |b| {
        b.iter(|| {
            let _ = facility.handle(black_box(&enabled));
            if sink.len() > 10_000 {
                sink.clear();
            }
        })
    });
    group.bench_function("suppressed", |b| {
        b.iter(|| facility.handle(black_box(&suppressed)))
    });
    group.finish();
}

criterion_group!(benches, bench_effective_level, bench_handle);
criterion_main!(benches);
