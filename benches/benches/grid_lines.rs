// Copyright 2026 the Gridpaper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use gridpaper_grid::{GridSeries, GridStyle, grid_lines};
use gridpaper_view::DisplayRect;
use kurbo::{Rect, Size};

fn bench_grid_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid/grid_lines");
    let series = GridSeries::default();
    let style = GridStyle::default();

    // Half-widths from fully zoomed out down to a handful of units.
    for half in [4000.0_f64, 400.0, 40.0, 4.0] {
        let rect = DisplayRect::new(-half, half, -half * 1.5, half * 1.5).unwrap();
        for (w, h) in [(800.0, 600.0), (2560.0, 1440.0)] {
            let view = Size::new(w, h);
            let count = grid_lines(&rect, view, &series, &style).len();
            group.throughput(Throughput::Elements(count as u64));
            group.bench_with_input(
                BenchmarkId::new(format!("half={half}"), format!("{w}x{h}")),
                &(rect, view),
                |b, (rect, view)| {
                    b.iter(|| black_box(grid_lines(rect, *view, &series, &style)));
                },
            );
        }
    }
    group.finish();
}

fn bench_device_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid/device_lines");
    let series = GridSeries::default();
    let style = GridStyle::default();
    let view = Rect::new(0.0, 0.0, 2560.0, 1440.0);
    let rect = DisplayRect::new(-40.0, 40.0, -60.0, 60.0).unwrap();
    let lines = grid_lines(&rect, view.size(), &series, &style);
    let transform = rect.view_transform(view).unwrap();

    group.throughput(Throughput::Elements(lines.len() as u64));
    group.bench_function("project", |b| {
        b.iter(|| {
            let sum: f64 = lines
                .device_lines(transform, view)
                .map(|(line, _)| line.p0.x + line.p0.y)
                .sum();
            black_box(sum)
        });
    });
    group.finish();
}

criterion_group!(benches, bench_grid_lines, bench_device_lines);
criterion_main!(benches);
