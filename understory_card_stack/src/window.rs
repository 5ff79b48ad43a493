// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visible window: which cards are rendered and at what depth.
//!
//! ## Ordering
//!
//! [`visible_entries`] returns entries bottom-first: the deepest rendered card comes first and
//! the top card (depth 0) comes last, so painting in order composites the top card over the
//! rest. Indices already swiped (negative depth) and cards at or beyond
//! `max_visible_cards` are not part of the output at all.
//!
//! ## Cost
//!
//! The window walks forward from the cursor at most `max_visible_cards` steps, so its cost does
//! not depend on the size of the collection.
//!
//! ## Geometry
//!
//! [`card_transform`] turns a depth into the stacking transform implied by a
//! [`StackConfig`]: cards shrink by `card_scale` per depth around their bottom-center and move
//! down by `card_offset` per depth.

use alloc::vec::Vec;

use kurbo::{Affine, Size, Vec2};

use crate::config::StackConfig;
use crate::source::CardSource;

/// A rendered card: its collection index and distance from the top.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct VisibleEntry<I> {
    /// Collection index; also the card's rendering identity.
    pub index: I,
    /// Distance from the cursor; 0 is the top card.
    pub depth: usize,
}

impl<I> VisibleEntry<I> {
    /// Returns `true` for the interactive top card.
    pub fn is_top(&self) -> bool {
        self.depth == 0
    }
}

/// Compute the visible window of `source` for a cursor at `cursor`.
///
/// Returns at most `max_visible` entries with depths `0..min(max_visible, remaining)`, ordered
/// deepest first. An exhausted cursor yields an empty window.
pub fn visible_entries<S: CardSource + ?Sized>(
    source: &S,
    cursor: S::Index,
    max_visible: usize,
) -> Vec<VisibleEntry<S::Index>> {
    let remaining = usize::try_from(source.distance(cursor, source.end_index())).unwrap_or(0);
    let count = remaining.min(max_visible);
    let mut out = Vec::with_capacity(count);
    let mut index = cursor;
    for depth in 0..count {
        out.push(VisibleEntry { index, depth });
        if depth + 1 < count {
            index = source.index_after(index);
        }
    }
    out.reverse();
    out
}

/// Stacking transform of the card at `depth` for a card of `card_size`.
///
/// Depth 0 is the identity.
pub fn card_transform(depth: usize, config: &StackConfig, card_size: Size) -> Affine {
    let anchor = Vec2::new(card_size.width * 0.5, card_size.height);
    Affine::translate(Vec2::new(0.0, config.offset_at(depth)))
        * Affine::translate(anchor)
        * Affine::scale(config.scale_at(depth))
        * Affine::translate(-anchor)
}
