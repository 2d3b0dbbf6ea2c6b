//! Criterion benchmarks for context_logger_system

use context_logger_system::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use std::sync::Arc;

fn bench_suppressed_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("suppressed_logging");
    group.throughput(Throughput::Elements(1));

    let registry = LoggerRegistry::builder()
        .root_level(LogLevel::Warn)
        .shared_appender(Arc::new(MemoryAppender::new()) as Arc<dyn Appender>)
        .build();
    let logger = registry.logger(&["bench"]);

    // A disabled level must construct nothing
    group.bench_function("debug_below_level", |b| {
        b.iter(|| {
            logger.debug(black_box("suppressed message")).unwrap();
        });
    });

    group.bench_function("is_level_enabled", |b| {
        b.iter(|| {
            black_box(logger.is_level_enabled(black_box("debug")).unwrap());
        });
    });

    group.finish();
}

fn bench_fan_out(c: &mut Criterion) {
    let mut group = c.benchmark_group("fan_out");
    group.throughput(Throughput::Elements(1));

    for appender_count in [1usize, 4] {
        let mut builder = LoggerRegistry::builder().root_level(LogLevel::All);
        let sinks: Vec<Arc<MemoryAppender>> =
            (0..appender_count).map(|_| Arc::new(MemoryAppender::new())).collect();
        for sink in &sinks {
            builder = builder.shared_appender(Arc::clone(sink) as Arc<dyn Appender>);
        }
        let registry = builder.build();
        let logger = registry.logger(&["bench"]);

        group.bench_function(format!("info_{}_appenders", appender_count), |b| {
            b.iter(|| {
                logger.info(black_box("bench message")).unwrap();
            });
            for sink in &sinks {
                sink.clear();
            }
        });
    }

    group.finish();
}

fn bench_record_with_meta(c: &mut Criterion) {
    let mut group = c.benchmark_group("record_construction");
    group.throughput(Throughput::Elements(1));

    let registry = LoggerRegistry::builder()
        .root_level(LogLevel::All)
        .shared_appender(Arc::new(MemoryAppender::new()) as Arc<dyn Appender>)
        .build();
    let logger = registry.logger(&["bench"]);

    group.bench_function("info_with_meta", |b| {
        b.iter(|| {
            logger
                .info_with_meta(
                    black_box("bench message"),
                    Meta::new().with_field("request_id", "abc-123").with_field("latency_ms", 42),
                )
                .unwrap();
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_suppressed_logging,
    bench_fan_out,
    bench_record_with_meta
);
criterion_main!(benches);
