//! Benchmarks for chart rendering.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use weekchart_core::{RecordingCanvas, Size};
use weekchart_widgets::{sample_week, ChartGeometry, ChartStyle, WeeklyChart};

fn bench_render_sample_week(c: &mut Criterion) {
    let mut chart = WeeklyChart::new();
    chart.submit(sample_week());

    c.bench_function("render_sample_week", |b| {
        b.iter(|| {
            let mut canvas = RecordingCanvas::new();
            chart.render(&mut canvas, black_box(Size::new(800.0, 600.0)));
            canvas.command_count()
        })
    });
}

fn bench_render_empty(c: &mut Criterion) {
    let chart = WeeklyChart::new();

    c.bench_function("render_empty", |b| {
        b.iter(|| {
            let mut canvas = RecordingCanvas::new();
            chart.render(&mut canvas, black_box(Size::new(800.0, 600.0)));
            canvas.command_count()
        })
    });
}

fn bench_geometry(c: &mut Criterion) {
    let style = ChartStyle::default();

    c.bench_function("chart_geometry_new", |b| {
        b.iter(|| ChartGeometry::new(black_box(Size::new(800.0, 600.0)), &style))
    });
}

criterion_group!(
    benches,
    bench_render_sample_week,
    bench_render_empty,
    bench_geometry,
);
criterion_main!(benches);
