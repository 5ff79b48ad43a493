// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered collections that can back a card stack.
//!
//! ## Overview
//!
//! A [`CardSource`] is a finite, random-access sequence with a stable, totally ordered index.
//! The [`Cursor`](crate::cursor::Cursor) walks it forward one card at a time and the
//! [window](crate::window) computes depths with [`CardSource::distance`].
//!
//! Implementations are provided for slices, arrays, `Vec`, `VecDeque`, and shared references
//! to any source, so a stack can either own its cards or borrow them from the host.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

/// An ordered, finite, random-access sequence of cards.
///
/// Indices are stable for the lifetime of the stack and double as the rendering identity of
/// each card, hence the `Hash + Ord` bounds.
///
/// ## Contract
///
/// - Every index reachable from [`start_index`](Self::start_index) by repeated
///   [`index_after`](Self::index_after) calls is valid until [`end_index`](Self::end_index).
/// - `index_after(end_index())` is unspecified; the cursor never calls it.
/// - `distance(a, b)` is the signed number of `index_after` steps from `a` to `b`.
pub trait CardSource {
    /// Card payload type.
    type Item;
    /// Stable index type.
    type Index: Copy + Eq + Ord + Hash + Debug;

    /// Index of the first card.
    fn start_index(&self) -> Self::Index;

    /// One past the last card; a cursor here means the stack is exhausted.
    fn end_index(&self) -> Self::Index;

    /// Successor of `index`.
    fn index_after(&self, index: Self::Index) -> Self::Index;

    /// Signed number of steps from `from` to `to`.
    fn distance(&self, from: Self::Index, to: Self::Index) -> isize;

    /// Card at `index`, or `None` at [`end_index`](Self::end_index) and beyond.
    fn get(&self, index: Self::Index) -> Option<&Self::Item>;

    /// Advance `index` by `n` steps.
    ///
    /// The caller keeps `n` within the distance to [`end_index`](Self::end_index).
    fn index_offset_by(&self, index: Self::Index, n: usize) -> Self::Index {
        let mut index = index;
        for _ in 0..n {
            index = self.index_after(index);
        }
        index
    }

    /// Number of cards.
    fn len(&self) -> usize {
        usize::try_from(self.distance(self.start_index(), self.end_index())).unwrap_or(0)
    }

    /// Returns `true` if the source holds no cards.
    fn is_empty(&self) -> bool {
        self.start_index() == self.end_index()
    }
}

// Slice lengths never exceed `isize::MAX`, so neither cast wraps.
fn signed_distance(from: usize, to: usize) -> isize {
    if to >= from {
        (to - from) as isize
    } else {
        -((from - to) as isize)
    }
}

impl<T> CardSource for [T] {
    type Item = T;
    type Index = usize;

    fn start_index(&self) -> usize {
        0
    }

    fn end_index(&self) -> usize {
        <[T]>::len(self)
    }

    fn index_after(&self, index: usize) -> usize {
        index + 1
    }

    fn distance(&self, from: usize, to: usize) -> isize {
        signed_distance(from, to)
    }

    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }

    fn index_offset_by(&self, index: usize, n: usize) -> usize {
        index + n
    }
}

impl<T, const N: usize> CardSource for [T; N] {
    type Item = T;
    type Index = usize;

    fn start_index(&self) -> usize {
        0
    }

    fn end_index(&self) -> usize {
        N
    }

    fn index_after(&self, index: usize) -> usize {
        index + 1
    }

    fn distance(&self, from: usize, to: usize) -> isize {
        signed_distance(from, to)
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    fn index_offset_by(&self, index: usize, n: usize) -> usize {
        index + n
    }
}

impl<T> CardSource for Vec<T> {
    type Item = T;
    type Index = usize;

    fn start_index(&self) -> usize {
        0
    }

    fn end_index(&self) -> usize {
        Vec::len(self)
    }

    fn index_after(&self, index: usize) -> usize {
        index + 1
    }

    fn distance(&self, from: usize, to: usize) -> isize {
        signed_distance(from, to)
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    fn index_offset_by(&self, index: usize, n: usize) -> usize {
        index + n
    }
}

impl<T> CardSource for VecDeque<T> {
    type Item = T;
    type Index = usize;

    fn start_index(&self) -> usize {
        0
    }

    fn end_index(&self) -> usize {
        VecDeque::len(self)
    }

    fn index_after(&self, index: usize) -> usize {
        index + 1
    }

    fn distance(&self, from: usize, to: usize) -> isize {
        signed_distance(from, to)
    }

    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }

    fn index_offset_by(&self, index: usize, n: usize) -> usize {
        index + n
    }
}

impl<S: CardSource + ?Sized> CardSource for &S {
    type Item = S::Item;
    type Index = S::Index;

    fn start_index(&self) -> Self::Index {
        (**self).start_index()
    }

    fn end_index(&self) -> Self::Index {
        (**self).end_index()
    }

    fn index_after(&self, index: Self::Index) -> Self::Index {
        (**self).index_after(index)
    }

    fn distance(&self, from: Self::Index, to: Self::Index) -> isize {
        (**self).distance(from, to)
    }

    fn get(&self, index: Self::Index) -> Option<&Self::Item> {
        (**self).get(index)
    }

    fn index_offset_by(&self, index: Self::Index, n: usize) -> Self::Index {
        (**self).index_offset_by(index, n)
    }
}
