//! Benchmark tests for curve construction and evaluation.
//!
//! Run with: cargo bench --bench easing_benchmarks

use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use opc_easing::segment::{Point, Segment};
use opc_easing::solver::solve_t_for_x;
use opc_easing::{Anchor, ChannelObserver, EasingFunction, Preset};

fn inputs() -> Vec<f64> {
    (0..=1000).map(|i| f64::from(i) / 1000.0).collect()
}

fn many_anchors(count: u32) -> Vec<Anchor> {
    (0..=count)
        .map(|i| {
            let x = f64::from(i) / f64::from(count);
            Anchor::new(x, x * x, x + 0.01, x * x)
        })
        .collect()
}

fn bench_default_evaluate(c: &mut Criterion) {
    let ease = EasingFunction::default();
    let inputs = inputs();

    c.bench_function("default_evaluate", |b| {
        b.iter(|| {
            for &input in &inputs {
                std::hint::black_box(ease.evaluate(std::hint::black_box(input)));
            }
        });
    });
}

fn bench_preset_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("preset_evaluate");
    let inputs = inputs();

    for preset in Preset::ALL {
        let Ok(ease) = EasingFunction::builder().preset(preset).build() else {
            continue;
        };
        group.bench_with_input(BenchmarkId::from_parameter(preset), &inputs, |b, inputs| {
            b.iter(|| {
                for &input in inputs {
                    std::hint::black_box(ease.evaluate(std::hint::black_box(input)));
                }
            });
        });
    }

    group.finish();
}

fn bench_segment_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment_count");
    let inputs = inputs();

    for count in [2u32, 8, 64, 512] {
        let Ok(ease) = EasingFunction::new(many_anchors(count)) else {
            continue;
        };
        group.throughput(Throughput::Elements(inputs.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &inputs, |b, inputs| {
            b.iter(|| {
                for &input in inputs {
                    std::hint::black_box(ease.evaluate(std::hint::black_box(input)));
                }
            });
        });
    }

    group.finish();
}

fn bench_solver_cusp(c: &mut Criterion) {
    let segment = Segment::new(
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(0.0, 1.0),
        Point::new(1.0, 1.0),
    );

    c.bench_function("solver_cusp", |b| {
        b.iter(|| std::hint::black_box(solve_t_for_x(&segment, std::hint::black_box(0.500_001_5))));
    });
}

fn bench_construction(c: &mut Criterion) {
    let json = match serde_json::to_string(&many_anchors(32)) {
        Ok(json) => json,
        Err(_) => return,
    };

    c.bench_function("construct_from_json", |b| {
        b.iter(|| std::hint::black_box(EasingFunction::new(std::hint::black_box(json.as_str()))));
    });
}

fn bench_channel_observer(c: &mut Criterion) {
    let (observer, receiver) = ChannelObserver::bounded(1024);
    let Ok(ease) = EasingFunction::builder()
        .observer(Arc::new(observer))
        .build()
    else {
        return;
    };
    let inputs = inputs();

    c.bench_function("evaluate_with_channel_observer", |b| {
        b.iter(|| {
            for &input in &inputs {
                std::hint::black_box(ease.evaluate(std::hint::black_box(input)));
            }
            receiver.try_iter().for_each(drop);
        });
    });
}

criterion_group!(
    benches,
    bench_default_evaluate,
    bench_preset_evaluate,
    bench_segment_count,
    bench_solver_cusp,
    bench_construction,
    bench_channel_observer
);
criterion_main!(benches);
