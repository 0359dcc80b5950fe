use criterion::{criterion_group, criterion_main, Criterion};
use obsview_core::{build, BuilderConfig, TraceView};
use obsview_wire::ObservationRecord;
use std::hint::black_box;

fn synthetic_trace(size: usize) -> Vec<ObservationRecord> {
    (0..size)
        .map(|i| {
            let kind = match i % 3 {
                0 => "span",
                1 => "generation",
                _ => "tool-event",
            };
            let record = ObservationRecord::new(format!("obs-{}", i), "trace", kind, "step")
                .with_times("2024-05-01T10:00:00", "2024-05-01T10:00:01.25")
                .with_tokens(Some(100), Some(20));
            if i == 0 {
                record
            } else {
                // Wide, shallow fan-out with a few dangling parents
                let parent = if i % 97 == 0 {
                    "missing".to_string()
                } else {
                    format!("obs-{}", (i - 1) / 4)
                };
                record.with_parent(parent)
            }
        })
        .collect()
}

fn bench_build_1k(c: &mut Criterion) {
    let records = synthetic_trace(1_000);
    let config = BuilderConfig::default();

    c.bench_function("build_1k_observations", |b| {
        b.iter(|| build(black_box(&records), &config));
    });
}

fn bench_view_with_selection(c: &mut Criterion) {
    let records = synthetic_trace(1_000);
    let config = BuilderConfig::default();

    c.bench_function("trace_view_deep_selection", |b| {
        b.iter(|| TraceView::build(black_box(&records), Some("obs-999"), &config));
    });
}

criterion_group!(benches, bench_build_1k, bench_view_with_selection);
criterion_main!(benches);
