//! Benchmarks for the hot paths of a reflow.
//!
//! Run with: `cargo bench -p hyprtile`
//!
//! Results are saved to `target/criterion/` with HTML reports.
//!
//! ## Benchmark Groups
//!
//! - `layouts`: Master/stack layout at various window counts
//! - `layouts_4k`: The same layout on a 4K work area
//! - `layouts_stress`: Large window counts (32, 64 windows)
//! - `navigation`: Directional target search
//! - `drag`: Drop target resolution
//! - `rules`: Exception matching and classification
//! - `geometry`: Rect operations

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use hyprtile_lib::tiling::drag::resolve_drop_target;
use hyprtile_lib::tiling::layout::{Gaps, calculate_layout_with_gaps};
use hyprtile_lib::tiling::navigator::find_target_in_direction;
use hyprtile_lib::tiling::rules::classify;
use hyprtile_lib::tiling::{Direction, ExceptionSet, Point, Rect, WindowId, WindowInfo};

// ============================================================================
// Fixtures
// ============================================================================

/// A 1080p work area below a 32px top panel.
const fn screen_1080p() -> Rect { Rect::new(0, 32, 1920, 1048) }

const fn screen_4k() -> Rect { Rect::new(0, 0, 3840, 2160) }

fn window_ids(count: usize) -> Vec<WindowId> { (1..=count as WindowId).collect() }

const fn standard_gaps() -> Gaps { Gaps::uniform(8, 12) }

/// Frames for `count` windows as a reflow would leave them.
fn tiled_frames(count: usize) -> Vec<(WindowId, Rect)> {
    calculate_layout_with_gaps(&window_ids(count), &screen_1080p(), &standard_gaps()).to_vec()
}

fn exception_list() -> ExceptionSet {
    ExceptionSet::parse(
        "pavucontrol\nblueman-manager\nnm-connection-editor\norg.gnome.calculator.desktop\n\
         gnome-system-monitor\nsteam\nzenity\nxdg-desktop-portal-gtk\n",
    )
}

// ============================================================================
// Layouts
// ============================================================================

fn bench_layouts(c: &mut Criterion) {
    let mut group = c.benchmark_group("layouts");
    let screen = screen_1080p();
    let gaps = standard_gaps();

    for count in [1, 2, 4, 8, 12, 16] {
        let windows = window_ids(count);

        group.bench_with_input(BenchmarkId::new("master", count), &count, |b, _| {
            b.iter(|| calculate_layout_with_gaps(black_box(&windows), black_box(&screen), black_box(&gaps)));
        });

        group.bench_with_input(BenchmarkId::new("master_no_gaps", count), &count, |b, _| {
            b.iter(|| {
                calculate_layout_with_gaps(black_box(&windows), black_box(&screen), black_box(&Gaps::default()))
            });
        });
    }

    group.finish();
}

fn bench_layouts_4k(c: &mut Criterion) {
    let mut group = c.benchmark_group("layouts_4k");
    let screen = screen_4k();
    let gaps = standard_gaps();

    for count in [4, 8, 16] {
        let windows = window_ids(count);

        group.bench_with_input(BenchmarkId::new("master", count), &count, |b, _| {
            b.iter(|| calculate_layout_with_gaps(black_box(&windows), black_box(&screen), black_box(&gaps)));
        });
    }

    group.finish();
}

fn bench_layouts_stress(c: &mut Criterion) {
    let mut group = c.benchmark_group("layouts_stress");
    let screen = screen_4k();
    let gaps = standard_gaps();

    // Past the inline capacity; results spill to the heap.
    for count in [32, 64] {
        let windows = window_ids(count);

        group.bench_with_input(BenchmarkId::new("master", count), &count, |b, _| {
            b.iter(|| calculate_layout_with_gaps(black_box(&windows), black_box(&screen), black_box(&gaps)));
        });
    }

    group.finish();
}

// ============================================================================
// Navigation & Drag
// ============================================================================

fn bench_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigation");

    for count in [4, 16] {
        let frames = tiled_frames(count);
        let (source, source_frame) = frames[count - 1];

        for direction in [Direction::Left, Direction::Up] {
            group.bench_with_input(BenchmarkId::new(direction.as_str(), count), &count, |b, _| {
                b.iter(|| {
                    find_target_in_direction(
                        black_box(source),
                        black_box(&source_frame),
                        black_box(direction),
                        black_box(&frames),
                    )
                });
            });
        }
    }

    group.finish();
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag");

    for count in [4, 16] {
        let frames = tiled_frames(count);
        let (grabbed, master_frame) = frames[0];

        // Dropped over empty space: the pointer search misses and overlap decides.
        let dropped = Rect::new(master_frame.x + 900, master_frame.y, master_frame.width, master_frame.height);
        let pointer = Point::new(-10, -10);

        group.bench_with_input(BenchmarkId::new("overlap_fallback", count), &count, |b, _| {
            b.iter(|| {
                resolve_drop_target(
                    black_box(grabbed),
                    black_box(&dropped),
                    black_box(pointer),
                    black_box(&frames),
                    black_box(&frames),
                )
            });
        });

        let over_last = frames[count - 1].1.origin();
        let pointer = Point::new(over_last.x + 1, over_last.y + 1);

        group.bench_with_input(BenchmarkId::new("under_pointer", count), &count, |b, _| {
            b.iter(|| {
                resolve_drop_target(
                    black_box(grabbed),
                    black_box(&dropped),
                    black_box(pointer),
                    black_box(&frames),
                    black_box(&frames),
                )
            });
        });
    }

    group.finish();
}

// ============================================================================
// Rules
// ============================================================================

fn bench_rules(c: &mut Criterion) {
    let mut group = c.benchmark_group("rules");
    let exceptions = exception_list();
    let frame = Rect::new(0, 0, 800, 600);

    let matched = WindowInfo::new(1, frame).with_class("Pavucontrol");
    let by_app_id = WindowInfo::new(2, frame)
        .with_class("gnome-calculator")
        .with_app_id("org.gnome.Calculator.desktop");
    let unmatched = WindowInfo::new(3, frame).with_class("firefox").with_app_id("firefox.desktop");

    group.bench_function("is_exception_class", |b| {
        b.iter(|| exceptions.is_exception(black_box(&matched)));
    });

    group.bench_function("is_exception_app_id", |b| {
        b.iter(|| exceptions.is_exception(black_box(&by_app_id)));
    });

    group.bench_function("is_exception_miss", |b| {
        b.iter(|| exceptions.is_exception(black_box(&unmatched)));
    });

    group.bench_function("classify", |b| {
        b.iter(|| classify(black_box(&unmatched), black_box(&exceptions)));
    });

    group.bench_function("parse", |b| {
        b.iter(|| ExceptionSet::parse(black_box("pavucontrol\n# comment\n\nSteam\nzenity\n")));
    });

    group.finish();
}

// ============================================================================
// Geometry
// ============================================================================

fn bench_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry");

    let a = Rect::new(0, 0, 1000, 800);
    let b_rect = Rect::new(500, 400, 1000, 800);
    let point = Point::new(750, 600);

    group.bench_function("intersection_area", |b| {
        b.iter(|| black_box(&a).intersection_area(black_box(&b_rect)));
    });

    group.bench_function("contains_point", |b| {
        b.iter(|| black_box(&a).contains_point(black_box(point)));
    });

    group.bench_function("inset", |b| {
        b.iter(|| black_box(&a).inset(black_box(12), black_box(8)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_layouts,
    bench_layouts_4k,
    bench_layouts_stress,
    bench_navigation,
    bench_drag,
    bench_rules,
    bench_geometry,
);

criterion_main!(benches);
