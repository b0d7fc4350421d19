//! Benchmarks for frame building and replay.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use stripchart::{
    ChartConfig, DrawList, Graphable, MonospaceMeasurer, StripChart, TelemetrySource, Viewport,
};
use stripchart_core::Color;

const VIEWPORT: Viewport = Viewport {
    width: 800.0,
    height: 400.0,
};

fn sources(count: usize, samples: usize) -> Vec<TelemetrySource> {
    (0..count)
        .map(|i| {
            let mut source =
                TelemetrySource::new(format!("cpu{}", i), Color::from_hex(0x204080 + i as u32 * 0x101010));
            for t in 0..samples {
                let value = 50.0 + 40.0 * ((t as f32 * 0.05) + i as f32).sin();
                source.record("load", t as f64 * 0.25, value);
            }
            source
        })
        .collect()
}

fn bench_render_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_frame");
    let chart = StripChart::new(
        ChartConfig::default()
            .with_series_name("load")
            .with_redlines(10.0, 90.0),
    )
    .unwrap();
    let measurer = MonospaceMeasurer::default();

    for samples in [100, 1_000, 10_000] {
        group.throughput(Throughput::Elements(samples as u64 * 4));

        let owned = sources(4, samples);
        let refs: Vec<&dyn Graphable> = owned.iter().map(|s| s as &dyn Graphable).collect();
        let now = samples as f64 * 0.25;

        group.bench_with_input(BenchmarkId::new("four_sources", samples), &refs, |b, refs| {
            b.iter(|| {
                chart.render_frame(
                    black_box(chart.initial_layout()),
                    black_box(now),
                    Some(VIEWPORT),
                    refs,
                    &measurer,
                )
            });
        });
    }

    group.finish();
}

fn bench_replay(c: &mut Criterion) {
    let chart = StripChart::new(ChartConfig::default().with_series_name("load")).unwrap();
    let owned = sources(4, 1_000);
    let refs: Vec<&dyn Graphable> = owned.iter().map(|s| s as &dyn Graphable).collect();
    let frame = chart.render_frame(
        chart.initial_layout(),
        250.0,
        Some(VIEWPORT),
        &refs,
        &MonospaceMeasurer::default(),
    );

    c.bench_function("replay_into_draw_list", |b| {
        b.iter(|| {
            let mut target = DrawList::new();
            frame.commands.replay(&mut target);
            target.len()
        });
    });
}

criterion_group!(benches, bench_render_frame, bench_replay);
criterion_main!(benches);
