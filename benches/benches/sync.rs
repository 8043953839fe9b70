// Copyright 2026 the Gridpaper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use gridpaper::{GridPaper, GridPaperConfig};
use gridpaper_view::{DisplayRect, RangeSnapshot, ViewportController};
use kurbo::{Point, Rect, Vec2};

fn extent() -> DisplayRect {
    DisplayRect::new(-4000.0, 4000.0, -6000.0, 6000.0).unwrap()
}

/// Readings that sweep the window across the track, so every call updates.
fn readings(n: usize) -> Vec<RangeSnapshot> {
    (0..n)
        .map(|i| {
            let lower = (i % 500) as f64 / 1000.0;
            RangeSnapshot::new(lower, lower + 0.25)
        })
        .collect()
}

fn bench_controller(c: &mut Criterion) {
    let mut group = c.benchmark_group("sync/controller");
    let readings = readings(1_000);

    group.bench_function("on_horizontal_change x1000", |b| {
        b.iter_batched(
            || ViewportController::new(extent(), ()),
            |mut view| {
                for r in &readings {
                    black_box(view.on_horizontal_change(r));
                }
                view
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("selector_ranges", |b| {
        let mut view = ViewportController::new(extent(), ());
        let _ = view.zoom_about(Point::new(100.0, -250.0), 3.0);
        b.iter(|| black_box(view.selector_ranges()));
    });
    group.finish();
}

fn bench_paper(c: &mut Criterion) {
    let mut group = c.benchmark_group("sync/paper");

    group.bench_function("bar drag x200", |b| {
        let track = Rect::new(0.0, 0.0, 1000.0, 16.0);
        b.iter_batched(
            || {
                let mut paper = GridPaper::new(GridPaperConfig::default(), ()).unwrap();
                paper.horizontal_bar_mut().set_range(0.25, 0.5);
                paper
            },
            |mut paper| {
                {
                    let mut bar = paper.horizontal_bar_mut();
                    bar.pointer_down(Point::new(375.0, 8.0), track);
                    for x in 0..200 {
                        bar.pointer_move(Point::new(375.0 + f64::from(x), 8.0));
                    }
                    bar.pointer_up();
                }
                paper
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("pan + write back x200", |b| {
        b.iter_batched(
            || {
                let mut paper = GridPaper::new(GridPaperConfig::default(), ()).unwrap();
                let _ = paper.zoom_about(Point::ZERO, 4.0);
                paper
            },
            |mut paper| {
                for i in 0..200 {
                    let dx = if i % 2 == 0 { 25.0 } else { -20.0 };
                    black_box(paper.pan_by(Vec2::new(dx, 0.0)));
                }
                paper
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_controller, bench_paper);
criterion_main!(benches);
