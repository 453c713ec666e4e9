//! Diff renderer benchmark: cost of turning one frame into the next.
//!
//! The interesting cases for the rolodex are a settled wheel (nothing
//! changes) and an easing wheel (every visible row moves).

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rolodex::buffer::diff::{render_diff, render_full, DiffState};
use rolodex::{Buffer, Layout, Rect, RegionId, Rolodex, ScrollEvent, Settings, Widget};

const WHEEL: RegionId = RegionId(1);

/// A rolodex frame at the given rotation, rendered into a fresh buffer.
fn wheel_frame(width: u16, height: u16, scroll_px: f64) -> Buffer {
    let mut layout = Layout::new(width, height);
    layout.insert(WHEEL, Rect::from_size(width, height));

    let mut wheel = Rolodex::mount(&layout, WHEEL, &Settings::default().rolodex);
    wheel.apply(ScrollEvent::WheelScrolled(scroll_px));
    for _ in 0..10 {
        wheel.tick();
    }

    let mut buffer = Buffer::new(width, height);
    wheel.render(&mut buffer);
    buffer
}

fn diff_settled(c: &mut Criterion) {
    let frame = wheel_frame(120, 41, 0.0);
    let same = frame.clone();

    c.bench_function("diff_120x41_settled", |b| {
        b.iter(|| {
            let mut output = Vec::with_capacity(4096);
            let mut state = DiffState::new();
            render_diff(black_box(&frame), black_box(&same), &mut output, &mut state)
        });
    });
}

fn diff_easing(c: &mut Criterion) {
    let before = wheel_frame(120, 41, 0.0);
    let after = wheel_frame(120, 41, 300.0);

    c.bench_function("diff_120x41_easing", |b| {
        b.iter(|| {
            let mut output = Vec::with_capacity(16384);
            let mut state = DiffState::new();
            render_diff(black_box(&before), black_box(&after), &mut output, &mut state)
        });
    });
}

fn full_render(c: &mut Criterion) {
    let frame = wheel_frame(120, 41, 0.0);

    c.bench_function("render_full_120x41", |b| {
        b.iter(|| {
            let mut output = Vec::with_capacity(65536);
            let mut state = DiffState::new();
            render_full(black_box(&frame), &mut output, &mut state)
        });
    });
}

fn diff_various_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("diff_by_size");

    for (width, height) in [(80, 24), (120, 41), (200, 60)] {
        let before = wheel_frame(width, height, 0.0);
        let after = wheel_frame(width, height, 300.0);

        group.bench_with_input(
            BenchmarkId::new("easing", format!("{width}x{height}")),
            &(before, after),
            |b, (before, after)| {
                b.iter(|| {
                    let mut output = Vec::with_capacity(16384);
                    let mut state = DiffState::new();
                    render_diff(black_box(before), black_box(after), &mut output, &mut state)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, diff_settled, diff_easing, full_render, diff_various_sizes);
criterion_main!(benches);
