//! Benchmarks for carousel rendering.
//!
//! Run with: cargo bench -p peekcard-widgets

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use peekcard_core::event::{KeyCode, KeyEvent};
use peekcard_style::ColorProfile;
use peekcard_text::{clip_to_left_edge, clip_to_right_edge};
use peekcard_widgets::carousel::{
    CardRole, Carousel, CarouselConfig, CarouselTheme, FnDelegate, render_card,
};
use std::hint::black_box;

fn deck(len: usize) -> Vec<String> {
    (0..len)
        .map(|i| format!("Card {i}\n\nA short description\nwith two lines"))
        .collect()
}

fn bench_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel/view");

    for (profile, name) in [
        (ColorProfile::TrueColor, "truecolor"),
        (ColorProfile::Mono, "mono"),
    ] {
        for width in [40u16, 80, 200] {
            let delegate = FnDelegate::new(
                |s: &String, _w| s.clone(),
                |s: &String| s.len() % 2 == 0,
            );
            let mut carousel = Carousel::new(
                CarouselConfig::new(delegate)
                    .items(deck(20))
                    .title("Bench")
                    .color_profile(profile),
            );
            carousel.set_size(width, 40);
            carousel.set_cursor(10);

            group.bench_with_input(
                BenchmarkId::new(name, format!("w{width}")),
                &(),
                |b, _| b.iter(|| black_box(carousel.view())),
            );
        }
    }

    group.finish();
}

fn bench_navigation(c: &mut Criterion) {
    let delegate = FnDelegate::new(|s: &String, _w| s.clone(), |_: &String| false);
    let mut carousel = Carousel::new(CarouselConfig::new(delegate).items(deck(100)));
    carousel.set_size(120, 40);
    let right = KeyEvent::new(KeyCode::Right);
    let left = KeyEvent::new(KeyCode::Left);

    c.bench_function("carousel/update_and_view", |b| {
        b.iter(|| {
            carousel.update(&right);
            carousel.update(&left);
            black_box(carousel.view())
        })
    });
}

fn bench_clip(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel/clip");
    let delegate = FnDelegate::new(|s: &String, _w| s.clone(), |_: &String| false);
    let theme = CarouselTheme::default();
    let card = render_card(
        &delegate,
        &"Card\nbody text".to_string(),
        44,
        13,
        CardRole::Default,
        &theme,
    );

    for peek in [8usize, 13, 23] {
        group.bench_with_input(BenchmarkId::new("left_edge", peek), &peek, |b, &n| {
            b.iter(|| black_box(clip_to_left_edge(&card, n)))
        });
        group.bench_with_input(BenchmarkId::new("right_edge", peek), &peek, |b, &n| {
            b.iter(|| black_box(clip_to_right_edge(&card, n)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_view, bench_navigation, bench_clip);
criterion_main!(benches);
