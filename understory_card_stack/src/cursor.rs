// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cursor over a [`CardSource`]: which card is on top.
//!
//! The cursor only moves forward. Each [`Cursor::advance`] bumps a revision counter that
//! renderers can compare against a cached value to decide whether the visible window must be
//! recomputed.
//!
//! ```
//! use understory_card_stack::cursor::Cursor;
//!
//! let mut cursor = Cursor::new(vec!["a", "b"]);
//! assert_eq!(cursor.current(), Some(&"a"));
//! assert_eq!(cursor.advance(), Some(0));
//! assert_eq!(cursor.current(), Some(&"b"));
//! cursor.advance();
//! assert!(cursor.is_exhausted());
//! assert_eq!(cursor.advance(), None);
//! ```

use crate::source::CardSource;

/// Index of the topmost card in a [`CardSource`].
///
/// Invariant: the index is always valid or equal to [`CardSource::end_index`], in which case
/// the stack is exhausted and has no current card.
pub struct Cursor<S: CardSource> {
    source: S,
    current: S::Index,
    revision: u64,
}

impl<S: CardSource> core::fmt::Debug for Cursor<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Cursor")
            .field("current", &self.current)
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}

impl<S: CardSource> Cursor<S> {
    /// Create a cursor positioned on the first card of `source`.
    pub fn new(source: S) -> Self {
        let current = source.start_index();
        Self {
            source,
            current,
            revision: 0,
        }
    }

    /// The underlying collection.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Give the collection back.
    pub fn into_source(self) -> S {
        self.source
    }

    /// Index of the top card, or [`CardSource::end_index`] when exhausted.
    pub fn current_index(&self) -> S::Index {
        self.current
    }

    /// The top card, if any.
    pub fn current(&self) -> Option<&S::Item> {
        if self.is_exhausted() {
            return None;
        }
        self.source.get(self.current)
    }

    /// Returns `true` once every card has been swiped.
    pub fn is_exhausted(&self) -> bool {
        self.current == self.source.end_index()
    }

    /// Number of cards not yet swiped, including the top one.
    pub fn remaining(&self) -> usize {
        usize::try_from(self.source.distance(self.current, self.source.end_index())).unwrap_or(0)
    }

    /// Number of cards swiped so far.
    pub fn position(&self) -> usize {
        usize::try_from(self.source.distance(self.source.start_index(), self.current))
            .unwrap_or(0)
    }

    /// Change counter, incremented by every successful [`advance`](Self::advance).
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Move to the next card and return the index that was left.
    ///
    /// Returns `None` without touching any state when the stack is already exhausted.
    pub fn advance(&mut self) -> Option<S::Index> {
        if self.is_exhausted() {
            log::debug!("advance ignored: card stack is exhausted");
            return None;
        }
        let left = self.current;
        self.current = self.source.index_after(left);
        debug_assert!(
            self.source.distance(self.current, self.source.end_index()) >= 0,
            "cursor moved past the end of its card source"
        );
        self.revision = self.revision.wrapping_add(1);
        if self.is_exhausted() {
            log::debug!("card stack exhausted after {} swipes", self.position());
        }
        Some(left)
    }
}
