// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_card_stack::config::StackConfig;
use understory_card_stack::direction::Threshold;
use understory_card_stack::swipe::SwipeCoordinator;
use understory_card_stack::window::visible_entries;

fn gen_deck(n: usize) -> Vec<u64> {
    (0..n as u64).collect()
}

// The window must not scale with the deck size.
fn bench_visible_window(c: &mut Criterion) {
    let mut group = c.benchmark_group("visible_window");
    for &n in &[1_000usize, 100_000, 1_000_000] {
        let deck = gen_deck(n);
        let cursor = n / 2;
        for &k in &[1usize, 5, 16] {
            group.bench_function(format!("n{}_k{}", n, k), |b| {
                b.iter(|| black_box(visible_entries(deck.as_slice(), black_box(cursor), k)))
            });
        }
    }
    group.finish();
}

fn bench_swipe_through(c: &mut Criterion) {
    let mut group = c.benchmark_group("swipe_through");
    for &n in &[100usize, 10_000] {
        let deck = gen_deck(n);
        let config = StackConfig::default();
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("drag_commit_n{}", n), |b| {
            b.iter_batched(
                || {
                    SwipeCoordinator::new(
                        deck.as_slice(),
                        Threshold::left_right(100.0).unwrap(),
                        |card: &u64, _| {
                            black_box(card);
                        },
                        config,
                    )
                },
                |mut stack| {
                    while !stack.is_exhausted() {
                        stack.begin();
                        for step in 0..8 {
                            black_box(stack.update(f64::from(step) * 20.0));
                        }
                        black_box(stack.end(160.0));
                        black_box(stack.cards().len());
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_visible_window, bench_swipe_through);
criterion_main!(benches);
