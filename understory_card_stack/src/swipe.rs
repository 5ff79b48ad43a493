// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe coordinator: the gesture state machine for the top card.
//!
//! ## States
//!
//! ```text
//! Idle ──Start──▶ Dragging ──Update(o)──▶ Dragging
//!                    │
//!                    ├──End(o), classify(o) = Some(d) ──▶ Committed ──▶ Idle
//!                    ├──End(o), classify(o) = None ─────▶ Cancelled ──▶ Idle
//!                    └──Cancel ─────────────────────────▶ Cancelled ──▶ Idle
//! ```
//!
//! Resolutions are not stored; they are reported through [`Response`] and the state returns to
//! [`GestureState::Idle`] immediately.
//!
//! ## Commit order
//!
//! On commit the coordinator captures the top card, calls `on_swipe(card, direction)`, and only
//! then advances the cursor. The callback therefore always sees the card that was dragged, and
//! the visible window changes after it returns.
//!
//! ## Routing
//!
//! Only the top card is interactive. [`SwipeCoordinator::handle`] always applies to it, and
//! [`SwipeCoordinator::handle_at`] ignores events addressed to any other card, which suits
//! renderers that attach a handler to every visible card.
//!
//! ## Exhaustion
//!
//! Once the cursor reaches the end of the source there is no top card; every event is
//! [`Response::Ignored`].

use alloc::vec::Vec;

use kurbo::{Affine, Size, Vec2};

use crate::config::StackConfig;
use crate::cursor::Cursor;
use crate::direction::{Axis, Classify};
use crate::source::CardSource;
use crate::window::{VisibleEntry, card_transform, visible_entries};

bitflags::bitflags! {
    /// Per-card rendering flags carried by [`CardView`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct CardFlags: u8 {
        /// Card is at depth 0.
        const TOP      = 0b0000_0001;
        /// Card accepts gesture input.
        const PICKABLE = 0b0000_0010;
        /// Card is being dragged.
        const DRAGGING = 0b0000_0100;
    }
}

/// Raw gesture input for the top card.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GestureEvent {
    /// Pointer went down on the card.
    Start,
    /// Cumulative displacement along the primary axis.
    Update(f64),
    /// Pointer released with the final displacement.
    End(f64),
    /// Gesture interrupted by the host.
    Cancel,
}

/// Interaction state of the top card.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum GestureState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Tracking a drag.
    Dragging {
        /// Latest cumulative displacement.
        offset: f64,
    },
}

/// Result of feeding an event to the coordinator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Response<I, D> {
    /// The event did not apply (no top card, no gesture in progress, or not the top card).
    Ignored,
    /// The drag continues; `direction` is the live classification for visual feedback.
    Tracking {
        /// Direction the drag would commit to if released now.
        direction: Option<D>,
    },
    /// The top card was swiped away and the cursor advanced.
    Committed {
        /// Index of the card that was swiped.
        index: I,
        /// Direction it was swiped in.
        direction: D,
    },
    /// The gesture ended without a decision; nothing changed.
    Cancelled,
}

impl<I, D> Response<I, D> {
    /// Returns `true` when the visible window changed and should be re-rendered.
    pub fn window_changed(&self) -> bool {
        matches!(self, Self::Committed { .. })
    }
}

/// Render view-model of one visible card.
#[derive(Clone, Debug)]
pub struct CardView<'a, I, T, D> {
    /// Collection index; stable rendering identity.
    pub index: I,
    /// Distance from the top card.
    pub depth: usize,
    /// The card payload.
    pub item: &'a T,
    /// Rendering flags.
    pub flags: CardFlags,
    /// Live classification of the ongoing drag (top card only).
    pub direction: Option<D>,
    /// Current drag displacement (top card only, 0 otherwise).
    pub offset: f64,
}

impl<I, T, D> CardView<'_, I, T, D> {
    /// Returns `true` for the interactive top card.
    pub fn is_top(&self) -> bool {
        self.flags.contains(CardFlags::TOP)
    }

    /// Stacking transform for this card.
    pub fn transform(&self, config: &StackConfig, card_size: Size) -> Affine {
        card_transform(self.depth, config, card_size)
    }
}

/// Gesture state machine driving a [`Cursor`].
///
/// ## Usage
///
/// - Construct with [`SwipeCoordinator::new`] from a [`CardSource`], a
///   [`Classify`] implementation, an `on_swipe` callback and a [`StackConfig`].
/// - Feed pointer input with [`handle`](Self::handle) (or [`begin`](Self::begin),
///   [`update`](Self::update), [`end`](Self::end), [`cancel`](Self::cancel)).
/// - Render from [`cards`](Self::cards) or [`visible_entries`](Self::visible_entries) after
///   each [`Response`] that [changed the window](Response::window_changed).
pub struct SwipeCoordinator<S: CardSource, C, D, F> {
    cursor: Cursor<S>,
    classifier: C,
    on_swipe: F,
    config: StackConfig,
    state: GestureState,
    live_direction: Option<D>,
}

impl<S: CardSource, C, D, F> core::fmt::Debug for SwipeCoordinator<S, C, D, F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SwipeCoordinator")
            .field("cursor", &self.cursor)
            .field("config", &self.config)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<S, C, D, F> SwipeCoordinator<S, C, D, F>
where
    S: CardSource,
    C: Classify<D>,
    D: Clone,
    F: FnMut(&S::Item, D),
{
    /// Create a coordinator with the cursor on the first card of `source`.
    pub fn new(source: S, classifier: C, on_swipe: F, config: StackConfig) -> Self {
        Self::with_cursor(Cursor::new(source), classifier, on_swipe, config)
    }

    /// Create a coordinator around an existing cursor, for example one restored by the host.
    pub fn with_cursor(
        cursor: Cursor<S>,
        classifier: C,
        on_swipe: F,
        config: StackConfig,
    ) -> Self {
        Self {
            cursor,
            classifier,
            on_swipe,
            config,
            state: GestureState::Idle,
            live_direction: None,
        }
    }

    /// The cursor.
    pub fn cursor(&self) -> &Cursor<S> {
        &self.cursor
    }

    /// The configuration.
    pub fn config(&self) -> &StackConfig {
        &self.config
    }

    /// Current gesture state.
    pub fn state(&self) -> GestureState {
        self.state
    }

    /// The top card, if any.
    pub fn top(&self) -> Option<&S::Item> {
        self.cursor.current()
    }

    /// Returns `true` once every card has been swiped.
    pub fn is_exhausted(&self) -> bool {
        self.cursor.is_exhausted()
    }

    /// Displacement of the ongoing drag.
    pub fn drag_offset(&self) -> Option<f64> {
        match self.state {
            GestureState::Idle => None,
            GestureState::Dragging { offset } => Some(offset),
        }
    }

    /// Live classification of the ongoing drag.
    pub fn live_direction(&self) -> Option<&D> {
        self.live_direction.as_ref()
    }

    /// Give the collection back.
    pub fn into_source(self) -> S {
        self.cursor.into_source()
    }

    /// Dispatch a gesture event to the top card.
    pub fn handle(&mut self, event: GestureEvent) -> Response<S::Index, D> {
        match event {
            GestureEvent::Start => self.begin(),
            GestureEvent::Update(offset) => self.update(offset),
            GestureEvent::End(offset) => self.end(offset),
            GestureEvent::Cancel => self.cancel(),
        }
    }

    /// Dispatch a gesture event addressed to the card at `index`.
    ///
    /// Events for any card other than the top one are ignored.
    pub fn handle_at(&mut self, index: S::Index, event: GestureEvent) -> Response<S::Index, D> {
        if self.is_exhausted() || index != self.cursor.current_index() {
            log::trace!("gesture for non-top card {index:?} ignored");
            return Response::Ignored;
        }
        self.handle(event)
    }

    /// Start tracking a drag on the top card.
    ///
    /// Starting again while dragging restarts from zero displacement.
    pub fn begin(&mut self) -> Response<S::Index, D> {
        if self.is_exhausted() {
            log::trace!("gesture start ignored: card stack is exhausted");
            return Response::Ignored;
        }
        if matches!(self.state, GestureState::Dragging { .. }) {
            log::trace!("gesture restarted while dragging");
        }
        self.state = GestureState::Dragging { offset: 0.0 };
        self.live_direction = None;
        Response::Tracking { direction: None }
    }

    /// Record a new cumulative displacement and classify it for live feedback.
    pub fn update(&mut self, offset: f64) -> Response<S::Index, D> {
        let GestureState::Dragging { .. } = self.state else {
            return Response::Ignored;
        };
        self.state = GestureState::Dragging { offset };
        let direction = self.classifier.classify(offset);
        self.live_direction = direction.clone();
        Response::Tracking { direction }
    }

    /// Project a 2D pointer translation onto `axis` and [`update`](Self::update) with it.
    pub fn update_translation(&mut self, axis: Axis, translation: Vec2) -> Response<S::Index, D> {
        self.update(axis.project(translation))
    }

    /// Release the drag at `offset`: commit if it classifies, otherwise spring back.
    pub fn end(&mut self, offset: f64) -> Response<S::Index, D> {
        let GestureState::Dragging { .. } = self.state else {
            return Response::Ignored;
        };
        self.state = GestureState::Idle;
        self.live_direction = None;
        match self.classifier.classify(offset) {
            Some(direction) => self.commit(direction),
            None => {
                log::trace!("drag released undecided at {offset}; card returns to rest");
                Response::Cancelled
            }
        }
    }

    /// Abort the drag without side effects.
    pub fn cancel(&mut self) -> Response<S::Index, D> {
        let GestureState::Dragging { .. } = self.state else {
            return Response::Ignored;
        };
        log::trace!("drag cancelled by host");
        self.state = GestureState::Idle;
        self.live_direction = None;
        Response::Cancelled
    }

    /// Swipe the top card away in `direction` without a drag, as a button would.
    ///
    /// Ignored while a drag is in progress or when the stack is exhausted.
    pub fn swipe(&mut self, direction: D) -> Response<S::Index, D> {
        if matches!(self.state, GestureState::Dragging { .. }) {
            log::trace!("programmatic swipe ignored while dragging");
            return Response::Ignored;
        }
        self.commit(direction)
    }

    fn commit(&mut self, direction: D) -> Response<S::Index, D> {
        let index = self.cursor.current_index();
        let Some(item) = self.cursor.current() else {
            return Response::Ignored;
        };
        (self.on_swipe)(item, direction.clone());
        let left = self.cursor.advance();
        debug_assert_eq!(left, Some(index), "commit must advance exactly once");
        log::debug!("card {index:?} swiped; {} remaining", self.cursor.remaining());
        Response::Committed { index, direction }
    }

    /// The visible window, deepest card first.
    pub fn visible_entries(&self) -> Vec<VisibleEntry<S::Index>> {
        visible_entries(
            self.cursor.source(),
            self.cursor.current_index(),
            self.config.max_visible_cards(),
        )
    }

    /// Render view-model for the visible window, deepest card first.
    pub fn cards(&self) -> Vec<CardView<'_, S::Index, S::Item, D>> {
        let dragging = matches!(self.state, GestureState::Dragging { .. });
        self.visible_entries()
            .into_iter()
            .filter_map(|entry| {
                let item = self.cursor.source().get(entry.index)?;
                let top = entry.is_top();
                let mut flags = CardFlags::empty();
                if top {
                    flags |= CardFlags::TOP | CardFlags::PICKABLE;
                    flags.set(CardFlags::DRAGGING, dragging);
                }
                Some(CardView {
                    index: entry.index,
                    depth: entry.depth,
                    item,
                    flags,
                    direction: if top {
                        self.live_direction.clone()
                    } else {
                        None
                    },
                    offset: if top {
                        self.drag_offset().unwrap_or(0.0)
                    } else {
                        0.0
                    },
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::{LeftRight, Threshold};
    use alloc::vec;
    use core::cell::RefCell;

    fn window<S, C, D, F>(c: &SwipeCoordinator<S, C, D, F>) -> Vec<(S::Item, usize)>
    where
        S: CardSource,
        S::Item: Copy,
        C: Classify<D>,
        D: Clone,
        F: FnMut(&S::Item, D),
    {
        c.cards().iter().map(|card| (*card.item, card.depth)).collect()
    }

    fn config(k: usize) -> StackConfig {
        StackConfig::builder().max_visible_cards(k).build().unwrap()
    }

    // Scenario: [A, B, C], two visible, drag A right past the threshold.
    #[test]
    fn commit_fires_callback_then_advances() {
        let swiped = RefCell::new(Vec::new());
        let mut stack = SwipeCoordinator::new(
            vec!['A', 'B', 'C'],
            Threshold::left_right(100.0).unwrap(),
            |card: &char, d| swiped.borrow_mut().push((*card, d)),
            config(2),
        );
        assert_eq!(window(&stack), vec![('B', 1), ('A', 0)]);

        assert_eq!(stack.begin(), Response::Tracking { direction: None });
        assert_eq!(stack.update(60.0), Response::Tracking { direction: None });
        assert_eq!(
            stack.update(140.0),
            Response::Tracking {
                direction: Some(LeftRight::Right)
            }
        );
        let r = stack.end(150.0);
        assert_eq!(
            r,
            Response::Committed {
                index: 0,
                direction: LeftRight::Right
            }
        );
        assert!(r.window_changed());
        assert_eq!(*swiped.borrow(), vec![('A', LeftRight::Right)]);
        assert_eq!(window(&stack), vec![('C', 1), ('B', 0)]);
        assert_eq!(stack.state(), GestureState::Idle);
    }

    // Scenario: drag below the threshold springs back.
    #[test]
    fn undecided_release_cancels() {
        let calls = RefCell::new(0);
        let mut stack = SwipeCoordinator::new(
            vec!['A', 'B', 'C'],
            Threshold::left_right(100.0).unwrap(),
            |_: &char, _| *calls.borrow_mut() += 1,
            config(2),
        );
        stack.begin();
        stack.update(-80.0);
        assert_eq!(stack.end(-80.0), Response::Cancelled);
        assert_eq!(*calls.borrow(), 0);
        assert_eq!(window(&stack), vec![('B', 1), ('A', 0)]);
        assert_eq!(stack.cursor().revision(), 0);
    }

    // Scenario: single card swiped away leaves an inert, empty stack.
    #[test]
    fn exhausted_stack_ignores_gestures() {
        let calls = RefCell::new(0);
        let mut stack = SwipeCoordinator::new(
            vec!['A'],
            Threshold::left_right(10.0).unwrap(),
            |_: &char, _| *calls.borrow_mut() += 1,
            config(3),
        );
        stack.begin();
        assert!(stack.end(-20.0).window_changed());
        assert!(stack.cards().is_empty());
        assert!(stack.is_exhausted());

        for event in [
            GestureEvent::Start,
            GestureEvent::Update(50.0),
            GestureEvent::End(50.0),
            GestureEvent::Cancel,
        ] {
            assert_eq!(stack.handle(event), Response::Ignored);
        }
        assert_eq!(stack.swipe(LeftRight::Left), Response::Ignored);
        assert_eq!(*calls.borrow(), 1);
        assert_eq!(stack.cursor().current_index(), 1);
        assert_eq!(stack.state(), GestureState::Idle);
    }

    // Scenario: one visible card hides the rest until it is swiped.
    #[test]
    fn single_visible_card_reveals_next_after_swipe() {
        let mut stack = SwipeCoordinator::new(
            vec!['A', 'B'],
            Threshold::left_right(10.0).unwrap(),
            |_: &char, _| {},
            config(1),
        );
        assert_eq!(window(&stack), vec![('A', 0)]);
        stack.swipe(LeftRight::Right);
        assert_eq!(window(&stack), vec![('B', 0)]);
    }

    #[test]
    fn cancellations_never_move_the_cursor() {
        let mut stack = SwipeCoordinator::new(
            vec![1, 2, 3],
            Threshold::left_right(10.0).unwrap(),
            |_: &i32, _| {},
            config(3),
        );
        for i in 0..5 {
            stack.begin();
            stack.update(f64::from(i) * 100.0);
            assert_eq!(stack.handle(GestureEvent::Cancel), Response::Cancelled);
            assert_eq!(stack.cursor().current_index(), 0);
            assert_eq!(stack.live_direction(), None);
        }
        assert_eq!(stack.cursor().revision(), 0);
        // Cancel while idle is not a resolution.
        assert_eq!(stack.cancel(), Response::Ignored);
    }

    #[test]
    fn callback_sees_pre_advance_card_every_time() {
        let seen = RefCell::new(Vec::new());
        let mut stack = SwipeCoordinator::new(
            vec![10, 20, 30, 40],
            |offset: f64| (!(-1.0..=1.0).contains(&offset)).then_some(offset > 0.0),
            |card: &i32, right| seen.borrow_mut().push((*card, right)),
            config(2),
        );
        let mut expected = Vec::new();
        while let Some(&top) = stack.top() {
            let right = top % 20 == 0;
            stack.begin();
            let r = stack.end(if right { 5.0 } else { -5.0 });
            assert!(r.window_changed());
            expected.push((top, right));
        }
        assert_eq!(*seen.borrow(), expected);
        assert_eq!(stack.cursor().revision(), 4);
    }

    #[test]
    fn at_most_one_advance_per_gesture() {
        let mut stack = SwipeCoordinator::new(
            vec!['a', 'b', 'c'],
            Threshold::left_right(10.0).unwrap(),
            |_: &char, _| {},
            config(3),
        );
        stack.begin();
        stack.update(30.0);
        stack.end(30.0);
        // A second release without a new start is stale input.
        assert_eq!(stack.end(30.0), Response::Ignored);
        assert_eq!(stack.cursor().revision(), 1);
        assert_eq!(stack.top(), Some(&'b'));
    }

    #[test]
    fn updates_without_start_are_ignored() {
        let mut stack = SwipeCoordinator::new(
            vec!['a'],
            Threshold::left_right(10.0).unwrap(),
            |_: &char, _| {},
            config(1),
        );
        assert_eq!(stack.update(50.0), Response::Ignored);
        assert_eq!(stack.end(50.0), Response::Ignored);
        assert_eq!(stack.top(), Some(&'a'));
    }

    #[test]
    fn restart_resets_displacement() {
        let mut stack = SwipeCoordinator::new(
            vec!['a'],
            Threshold::left_right(10.0).unwrap(),
            |_: &char, _| {},
            config(1),
        );
        stack.begin();
        stack.update(40.0);
        assert_eq!(stack.live_direction(), Some(&LeftRight::Right));
        assert_eq!(stack.begin(), Response::Tracking { direction: None });
        assert_eq!(stack.drag_offset(), Some(0.0));
        assert_eq!(stack.live_direction(), None);
    }

    #[test]
    fn only_top_card_accepts_input() {
        let mut stack = SwipeCoordinator::new(
            vec!['a', 'b', 'c'],
            Threshold::left_right(10.0).unwrap(),
            |_: &char, _| {},
            config(3),
        );
        assert_eq!(stack.handle_at(1, GestureEvent::Start), Response::Ignored);
        assert_eq!(stack.state(), GestureState::Idle);
        assert_eq!(
            stack.handle_at(0, GestureEvent::Start),
            Response::Tracking { direction: None }
        );
        assert_eq!(
            stack.handle_at(0, GestureEvent::End(-20.0)),
            Response::Committed {
                index: 0,
                direction: LeftRight::Left
            }
        );
        // Index 0 is gone; index 1 is now on top.
        assert_eq!(stack.handle_at(0, GestureEvent::Start), Response::Ignored);
        assert_eq!(
            stack.handle_at(1, GestureEvent::Start),
            Response::Tracking { direction: None }
        );
    }

    #[test]
    fn card_views_flag_and_feed_the_top_card() {
        let mut stack = SwipeCoordinator::new(
            vec!['a', 'b', 'c'],
            Threshold::left_right(10.0).unwrap(),
            |_: &char, _| {},
            config(3),
        );
        stack.begin();
        stack.update_translation(Axis::Horizontal, Vec2::new(-25.0, 4.0));

        let cards = stack.cards();
        assert_eq!(cards.len(), 3);
        let top = cards.last().unwrap();
        assert!(top.is_top());
        assert_eq!(
            top.flags,
            CardFlags::TOP | CardFlags::PICKABLE | CardFlags::DRAGGING
        );
        assert_eq!(top.direction, Some(LeftRight::Left));
        assert_eq!(top.offset, -25.0);
        assert_eq!(
            top.transform(stack.config(), Size::new(10.0, 10.0)),
            Affine::IDENTITY
        );

        for card in &cards[..2] {
            assert!(!card.is_top());
            assert!(card.flags.is_empty());
            assert_eq!(card.direction, None);
            assert_eq!(card.offset, 0.0);
        }
    }

    #[test]
    fn borrowed_source_and_custom_cursor() {
        let deck = vec!["one", "two", "three"];
        let mut cursor = Cursor::new(&deck);
        cursor.advance();
        let mut stack = SwipeCoordinator::with_cursor(
            cursor,
            Threshold::up_down(5.0).unwrap(),
            |_: &&str, _| {},
            config(2),
        );
        assert_eq!(stack.top(), Some(&"two"));
        stack.begin();
        stack.update_translation(Axis::Vertical, Vec2::new(0.0, -9.0));
        assert!(stack.end(-9.0).window_changed());
        assert_eq!(stack.top(), Some(&"three"));
        assert_eq!(stack.into_source().len(), 3);
    }
}
