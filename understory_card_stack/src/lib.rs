// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_card_stack --heading-base-level=0

//! Understory Card Stack: a deterministic, `no_std` engine for swipeable card decks.
//!
//! ## Overview
//!
//! A card stack shows the first few cards of an ordered collection on top of each other. The
//! user drags the top card; when the drag is decisive the card is dismissed in a direction
//! (for example left or right) and the next card comes up.
//!
//! This crate is the logical core of such a widget. It does not paint, animate, or capture
//! pointer input. It decides which card is on top, which cards are visible and at what depth,
//! how a drag resolves to a direction, and when the cursor advances.
//!
//! ## Pieces
//!
//! - [`CardSource`](crate::source::CardSource): the ordered collection, with stable indices.
//! - [`Cursor`](crate::cursor::Cursor): index of the top card; only moves forward.
//! - [`Classify`](crate::direction::Classify): maps a drag offset to `Some(direction)` or `None`.
//! - [`visible_entries`](crate::window::visible_entries): the rendered window, deepest card first.
//! - [`SwipeCoordinator`](crate::swipe::SwipeCoordinator): the gesture state machine tying them together.
//! - [`StackConfig`](crate::config::StackConfig): visible card count and stacking geometry.
//!
//! ## Workflow
//!
//! 1) Build a [`SwipeCoordinator`](crate::swipe::SwipeCoordinator) from your collection, a
//!    classifier, an `on_swipe` callback, and a [`StackConfig`](crate::config::StackConfig).
//! 2) Render [`cards`](crate::swipe::SwipeCoordinator::cards) in order; the last entry is the
//!    interactive top card. Use [`CardView::transform`](crate::swipe::CardView::transform) for
//!    the stacking offset and scale.
//! 3) Route pointer input for the top card into
//!    [`handle`](crate::swipe::SwipeCoordinator::handle). Live directions come back in
//!    [`Response::Tracking`](crate::swipe::Response::Tracking) for visual feedback.
//! 4) On [`Response::Committed`](crate::swipe::Response::Committed) the callback has already
//!    run and the cursor has advanced; re-render.
//!
//! ## Example
//!
//! ```
//! use understory_card_stack::config::StackConfig;
//! use understory_card_stack::direction::{LeftRight, Threshold};
//! use understory_card_stack::swipe::{GestureEvent, Response, SwipeCoordinator};
//!
//! let mut liked = Vec::new();
//! let mut stack = SwipeCoordinator::new(
//!     vec!["A", "B", "C"],
//!     Threshold::left_right(100.0).unwrap(),
//!     |card: &&str, direction: LeftRight| {
//!         if direction == LeftRight::Right {
//!             liked.push(*card);
//!         }
//!     },
//!     StackConfig::builder().max_visible_cards(2).build().unwrap(),
//! );
//!
//! let indices: Vec<_> = stack.visible_entries().iter().map(|e| (e.index, e.depth)).collect();
//! assert_eq!(indices, [(1, 1), (0, 0)]);
//!
//! stack.handle(GestureEvent::Start);
//! stack.handle(GestureEvent::Update(130.0));
//! let response = stack.handle(GestureEvent::End(130.0));
//! assert_eq!(response, Response::Committed { index: 0, direction: LeftRight::Right });
//!
//! let indices: Vec<_> = stack.visible_entries().iter().map(|e| (e.index, e.depth)).collect();
//! assert_eq!(indices, [(2, 1), (1, 0)]);
//! drop(stack);
//! assert_eq!(liked, ["A"]);
//! ```
//!
//! ## Logging
//!
//! Gesture transitions are reported through the [`log`] facade at `trace` level, commits and
//! exhaustion at `debug` level. Install any logger in the host to see them.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod cursor;
pub mod direction;
pub mod source;
pub mod swipe;
pub mod window;
