// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Card stack basics.
//!
//! Builds a three-card deck with two visible cards, swipes the top card right, then drains the
//! rest with button-style programmatic swipes.
//!
//! Run:
//! - `cargo run -p understory_demos --example card_stack_basics`

use std::cell::RefCell;

use understory_card_stack::config::StackConfig;
use understory_card_stack::direction::{Classify, LeftRight, Threshold};
use understory_card_stack::source::CardSource;
use understory_card_stack::swipe::{GestureEvent, Response, SwipeCoordinator};

fn print_window<S, C, D, F>(stack: &SwipeCoordinator<S, C, D, F>, label: &str)
where
    S: CardSource<Index = usize>,
    C: Classify<D>,
    D: Clone,
    F: FnMut(&S::Item, D),
{
    let entries: Vec<(usize, usize)> = stack
        .visible_entries()
        .iter()
        .map(|e| (e.index, e.depth))
        .collect();
    println!("== {label} ==\n  (index, depth), bottom first: {entries:?}");
}

fn main() {
    let decisions = RefCell::new(Vec::new());
    let config = StackConfig::builder()
        .max_visible_cards(2)
        .build()
        .expect("valid config");
    let mut stack = SwipeCoordinator::new(
        vec!["Ada", "Grace", "Barbara"],
        Threshold::left_right(100.0).expect("valid threshold"),
        |name: &&str, direction: LeftRight| decisions.borrow_mut().push((*name, direction)),
        config,
    );

    print_window(&stack, "Initial");

    // A drag that stays inside the dead zone springs back.
    stack.handle(GestureEvent::Start);
    stack.handle(GestureEvent::Update(60.0));
    let r = stack.handle(GestureEvent::End(60.0));
    println!("short drag: {r:?}");
    assert_eq!(r, Response::Cancelled);
    print_window(&stack, "After short drag");

    // A decisive drag commits.
    stack.handle(GestureEvent::Start);
    stack.handle(GestureEvent::Update(140.0));
    let r = stack.handle(GestureEvent::End(140.0));
    println!("long drag: {r:?}");
    assert!(r.window_changed());
    print_window(&stack, "After swipe");

    // Buttons.
    stack.swipe(LeftRight::Left);
    stack.swipe(LeftRight::Right);
    print_window(&stack, "Exhausted");
    assert!(stack.is_exhausted());
    assert_eq!(stack.handle(GestureEvent::Start), Response::Ignored);

    drop(stack);
    println!("decisions: {:?}", decisions.borrow());
    assert_eq!(
        *decisions.borrow(),
        vec![
            ("Ada", LeftRight::Right),
            ("Grace", LeftRight::Left),
            ("Barbara", LeftRight::Right),
        ]
    );
}
