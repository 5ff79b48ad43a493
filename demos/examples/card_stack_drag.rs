// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag feedback and stacking geometry.
//!
//! Feeds a stream of 2D pointer translations to the top card, printing the live direction a
//! renderer would use for tinting, and the stacking transform of every visible card.
//!
//! Run:
//! - `cargo run -p understory_demos --example card_stack_drag`

use kurbo::{Point, Size, Vec2};
use understory_card_stack::config::StackConfig;
use understory_card_stack::direction::Axis;
use understory_card_stack::swipe::{Response, SwipeCoordinator};

/// A richer direction type than left/right.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Verdict {
    Pass,
    Like,
    SuperLike,
}

fn classify(offset: f64) -> Option<Verdict> {
    if offset <= -120.0 {
        Some(Verdict::Pass)
    } else if offset >= 240.0 {
        Some(Verdict::SuperLike)
    } else if offset >= 120.0 {
        Some(Verdict::Like)
    } else {
        None
    }
}

fn main() {
    let card_size = Size::new(300.0, 400.0);
    let config = StackConfig::default();
    let mut stack = SwipeCoordinator::new(
        (1..=8).collect::<Vec<u32>>(),
        classify,
        |card: &u32, verdict: Verdict| println!("  on_swipe(card {card}, {verdict:?})"),
        config,
    );

    println!("== Stack geometry ==");
    for card in stack.cards() {
        let t = card.transform(stack.config(), card_size);
        let bottom_center = t * Point::new(card_size.width * 0.5, card_size.height);
        let top_left = t * Point::new(0.0, 0.0);
        println!(
            "  card {} depth {} flags {:?}: top-left {:?}, bottom-center {:?}",
            card.item, card.depth, card.flags, top_left, bottom_center
        );
    }

    println!("== Dragging card 1 ==");
    stack.begin();
    for step in 0..6 {
        let translation = Vec2::new(f64::from(step) * 50.0, f64::from(step) * 4.0);
        if let Response::Tracking { direction } =
            stack.update_translation(Axis::Horizontal, translation)
        {
            println!("  translation {translation:?} -> live {direction:?}");
        }
    }
    let released = stack.drag_offset().unwrap_or(0.0);
    let r = stack.end(released);
    assert_eq!(
        r,
        Response::Committed {
            index: 0,
            direction: Verdict::SuperLike
        }
    );

    println!("== Two more drags ==");
    for (release, expected) in [(-150.0, Verdict::Pass), (130.0, Verdict::Like)] {
        stack.begin();
        stack.update(release);
        assert!(matches!(
            stack.end(release),
            Response::Committed { direction, .. } if direction == expected
        ));
    }

    println!("== Window after swipes ==");
    let top = stack.cards().last().map(|c| *c.item);
    println!("  top card: {top:?}, remaining: {}", stack.cursor().remaining());
    assert_eq!(top, Some(4));
    assert_eq!(stack.cards().len(), config.max_visible_cards());
}
