//! Layout and frame-interpolation benchmarks.

use std::hint::black_box;

use carousel::animation::EasingFunction;
use carousel::layout::{compute_layout, visible_count, Viewport};
use carousel::options::{LayoutOptions, Options};
use carousel::{Carousel, CarouselCommand, Direction, NullSink};
use criterion::{criterion_group, criterion_main, Criterion};
use web_time::{Duration, Instant};

fn easing_benchmark(c: &mut Criterion) {
    let f = EasingFunction::CubicHermite { c1: 0.33, c2: 1.0 };
    let _ = c.bench_function("cubic_hermite_easing", |b| {
        b.iter(|| black_box(f.evaluate(black_box(0.5))));
    });
}

fn layout_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_layout");
    let layout = LayoutOptions::default();
    let viewport = Viewport {
        width: 1920,
        height: 400,
    };

    for side in [1_usize, 2, 5, 20] {
        let count = visible_count(side);
        let _ = group.bench_function(format!("{side}_side_images"), |b| {
            b.iter(|| black_box(compute_layout(black_box(count), viewport, &layout)));
        });
    }
    group.finish();
}

fn slide_frame_benchmark(c: &mut Criterion) {
    let mut options = Options::default();
    options.layout.side_image_count = 5;
    let Ok(mut carousel) = Carousel::new(NullSink, options) else {
        return;
    };
    let urls = (0..100).map(|i| format!("{i}.jpg")).collect();
    if carousel.set_images(urls).is_err() {
        return;
    }

    let start = Instant::now();
    let mid = start + Duration::from_millis(100);
    let _ = c.bench_function("slide_frame", |b| {
        b.iter(|| {
            let _ = carousel.execute_at(CarouselCommand::Move(Direction::Right), start);
            let _ = black_box(carousel.tick(black_box(mid)));
            let _ = carousel.tick(start + Duration::from_secs(1));
        });
    });
}

criterion_group!(
    benches,
    easing_benchmark,
    layout_benchmark,
    slide_frame_benchmark
);
criterion_main!(benches);
