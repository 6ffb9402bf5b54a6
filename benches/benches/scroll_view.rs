// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};
use understory_scroll_input::{Modifiers, PointerButton, ScrollController};
use understory_scroll_view::{RootChange, ScrollView, SettleRecorder};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_f64(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1_u64 << 53) as f64
    }

    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }
}

fn populated_view() -> ScrollView {
    let mut view = ScrollView::new();
    view.set_viewport_size(Size::new(800.0, 600.0));
    view.set_content_size(Size::new(4000.0, 3000.0));
    view
}

fn random_changes(n: usize, seed: u64) -> Vec<RootChange> {
    let mut rng = Lcg::new(seed);
    (0..n)
        .map(|_| match (rng.next_f64() * 4.0) as u32 {
            0 => RootChange::Scale(rng.range(0.1, 4.0)),
            1 => {
                let size = Size::new(rng.range(100.0, 1200.0), rng.range(100.0, 900.0));
                RootChange::ViewportSize(size)
            }
            2 => {
                let size = Size::new(rng.range(0.0, 8000.0), rng.range(0.0, 6000.0));
                RootChange::ContentSize(size)
            }
            _ => {
                let (x, y) = (rng.range(-2000.0, 9000.0), rng.range(-2000.0, 9000.0));
                RootChange::Offset(Vec2::new(x, y))
            }
        })
        .collect()
}

fn bench_scroll_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_scroll_view");
    group.sample_size(50);

    for n in [100_usize, 10_000] {
        let changes = random_changes(n, 0x5EED);
        group.bench_function(format!("apply_random(n={n})"), |b| {
            b.iter_batched(
                populated_view,
                |mut view| {
                    for change in &changes {
                        black_box(view.apply(*change));
                    }
                    black_box(view.snapshot());
                },
                BatchSize::SmallInput,
            );
        });
        group.bench_function(format!("apply_random_traced(n={n})"), |b| {
            b.iter_batched(
                || (populated_view(), SettleRecorder::new()),
                |(mut view, mut recorder)| {
                    for change in &changes {
                        black_box(view.apply_with_trace(*change, &mut recorder));
                    }
                    black_box(recorder.events().len());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.bench_function("idempotent_scale(n=1000)", |b| {
        b.iter_batched(
            populated_view,
            |mut view| {
                for _ in 0..1000 {
                    black_box(view.set_scale(1.0));
                }
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_scroll_input(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_scroll_input");
    group.sample_size(50);

    group.bench_function("drag(moves=1000)", |b| {
        b.iter_batched(
            || (populated_view(), ScrollController::default()),
            |(mut view, mut controller)| {
                let press = Point::new(400.0, 300.0);
                controller.pointer_pressed(&view, PointerButton::Auxiliary, press);
                for i in 0..1000 {
                    let t = f64::from(i);
                    let p = Point::new(400.0 - t, 300.0 - 0.5 * t);
                    black_box(controller.pointer_moved(&mut view, p));
                }
                controller.pointer_released(Some(PointerButton::Auxiliary));
                black_box(view.offset());
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("wheel_zoom(steps=1000)", |b| {
        b.iter_batched(
            || (populated_view(), ScrollController::default(), Lcg::new(7)),
            |(mut view, mut controller, mut rng)| {
                for _ in 0..1000 {
                    let cursor = Point::new(rng.range(0.0, 800.0), rng.range(0.0, 600.0));
                    let delta = rng.range(-240.0, 240.0);
                    let changed = controller.wheel(&mut view, delta, cursor, Modifiers::CONTROL);
                    black_box(changed);
                }
                black_box(view.scale());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_scroll_view, bench_scroll_input);
criterion_main!(benches);
