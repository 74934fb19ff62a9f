// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for carousel navigation.
//!
//! Measures pure index arithmetic and the lightbox update path, which also
//! re-resolves the current slide.

use criterion::{criterion_group, criterion_main, Criterion};
use iced_lightbox::image_navigation::{Direction, ImageNavigator};
use iced_lightbox::image_source::ImageSource;
use iced_lightbox::ui::lightbox::input::{InputEvent, KeyInput};
use iced_lightbox::ui::lightbox::{Message, OverlayStyle, State};
use std::hint::black_box;

fn sources(count: usize) -> Vec<ImageSource> {
    (0..count)
        .map(|i| ImageSource::parse(&format!("image-{i}.png")))
        .collect()
}

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigation");
    let navigator = ImageNavigator::new(sources(1_000), None);

    group.bench_function("advance_next_wrap", |b| {
        b.iter(|| {
            let mut nav = navigator.clone();
            for _ in 0..1_000 {
                nav.advance(black_box(Direction::Next));
            }
            black_box(nav.current_index());
        });
    });

    group.bench_function("advance_previous_wrap", |b| {
        b.iter(|| {
            let mut nav = navigator.clone();
            nav.advance(black_box(Direction::Previous));
            black_box(nav.current_index());
        });
    });

    group.finish();
}

/// Full key-press path, including the failed dimension read of a missing file.
fn bench_lightbox_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigation");
    let mut state = State::new(sources(16), None, OverlayStyle::default());

    group.bench_function("lightbox_arrow_right", |b| {
        b.iter(|| {
            black_box(state.update(Message::Input(InputEvent::Key(KeyInput::ArrowRight))));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_advance, bench_lightbox_update);
criterion_main!(benches);
