use criterion::{Criterion, criterion_group, criterion_main};
use plot_print::api::{
    CurveItem, DefaultPrintFilter, GridItem, PlotPrinter, PrintOptions, SimpleAxis, SimpleLegend,
    SimplePlot, UniformGridLayout,
};
use plot_print::core::{AxisId, Dpi, PointF, RectF, SizeF};
use plot_print::render::{Color, NullPainter, PaintEngineKind, Pen, RecordingPainter};
use std::hint::black_box;

fn bench_plot(points: usize) -> SimplePlot {
    let curve: Vec<PointF> = (0..points)
        .map(|i| {
            let t = i as f64 / points as f64;
            PointF::new(t * 100.0, (t * 12.0).sin())
        })
        .collect();
    let mut legend = SimpleLegend::new(UniformGridLayout {
        max_columns: 2,
        ..UniformGridLayout::default()
    });
    for key in 0..6 {
        legend = legend.with_item(key, format!("series {key}"), Color::rgb(0.1, 0.2, 0.3));
    }
    SimplePlot::new(SizeF::new(800.0, 600.0))
        .with_title("Benchmark")
        .with_axis(SimpleAxis::new(AxisId::XBottom).with_scale(0.0, 100.0))
        .with_axis(SimpleAxis::new(AxisId::YLeft).with_scale(-1.0, 1.0))
        .with_legend(legend)
        .with_item(GridItem::default())
        .with_item(CurveItem::new(curve, Pen::new(Color::BLACK, 1.0)))
}

fn bench_print_pass_null_painter(c: &mut Criterion) {
    let printer = PlotPrinter::default();
    let mut plot = bench_plot(10_000);
    let mut filter = DefaultPrintFilter::new(PrintOptions::PRINT_ALL);
    let rect = RectF::new(0.0, 0.0, 2400.0, 1800.0);

    c.bench_function("print_pass_null_painter_10k", |b| {
        b.iter(|| {
            let mut painter = NullPainter::new(Dpi::uniform(288.0));
            let outcome = printer.print(&mut painter, &mut plot, black_box(rect), &mut filter);
            black_box((outcome, painter.draw_calls));
        })
    });
}

fn bench_print_pass_recording(c: &mut Criterion) {
    let printer = PlotPrinter::default();
    let mut plot = bench_plot(1_000);
    let mut options = PrintOptions::PRINT_ALL | PrintOptions::PRINT_FRAME_WITH_SCALES;
    let rect = RectF::new(0.0, 0.0, 1600.0, 1200.0);

    c.bench_function("print_pass_recording_1k", |b| {
        b.iter(|| {
            let mut painter = RecordingPainter::new(Dpi::uniform(192.0), PaintEngineKind::Pdf);
            let outcome = printer.print(&mut painter, &mut plot, black_box(rect), &mut options);
            black_box((outcome, painter.into_frame()));
        })
    });
}

criterion_group!(benches, bench_print_pass_null_painter, bench_print_pass_recording);
criterion_main!(benches);
