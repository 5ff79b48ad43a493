// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag classification: continuous offset → discrete swipe direction.
//!
//! ## Overview
//!
//! A classifier maps the signed drag displacement along the gesture's primary axis to
//! `Some(direction)` once the drag is decisive, or `None` while it is undecided (the card
//! springs back if released there).
//!
//! Any `Fn(f64) -> Option<D>` is a classifier. [`Threshold`] covers the common two-way case.
//!
//! ## Caller obligations
//!
//! The coordinator calls [`Classify::classify`] on every pointer move for live feedback and
//! once more on release. Classifiers must be deterministic and free of side effects for the
//! duration of a gesture; the `&self` receiver keeps them from carrying mutable state.
//!
//! ```
//! use understory_card_stack::direction::{Classify, LeftRight, Threshold};
//!
//! let classifier = Threshold::left_right(40.0).unwrap();
//! assert_eq!(classifier.classify(12.0), None);
//! assert_eq!(classifier.classify(-55.0), Some(LeftRight::Left));
//!
//! // Closures work too.
//! let far_right = |offset: f64| (offset > 200.0).then_some(LeftRight::Right);
//! assert_eq!(far_right.classify(250.0), Some(LeftRight::Right));
//! ```

use kurbo::Vec2;

use crate::config::ConfigError;

/// Maps a signed drag offset to a discrete direction.
pub trait Classify<D> {
    /// Returns the direction the drag resolves to, or `None` while undecided.
    fn classify(&self, offset: f64) -> Option<D>;
}

impl<D, F> Classify<D> for F
where
    F: Fn(f64) -> Option<D>,
{
    #[inline]
    fn classify(&self, offset: f64) -> Option<D> {
        self(offset)
    }
}

/// Horizontal swipe outcome.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum LeftRight {
    /// Negative offsets.
    Left,
    /// Positive offsets.
    Right,
}

/// Vertical swipe outcome, with y growing downward.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum UpDown {
    /// Negative offsets.
    Up,
    /// Positive offsets.
    Down,
}

/// Axis a 2D pointer translation is projected onto.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Axis {
    /// Use the x component.
    #[default]
    Horizontal,
    /// Use the y component.
    Vertical,
}

impl Axis {
    /// Signed offset of `translation` along this axis.
    pub fn project(self, translation: Vec2) -> f64 {
        match self {
            Self::Horizontal => translation.x,
            Self::Vertical => translation.y,
        }
    }
}

/// Two-way classifier with a symmetric dead zone.
///
/// `offset >= threshold` resolves to the positive direction, `offset <= -threshold` to the
/// negative one. Anything in between, and NaN, is undecided.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Threshold<D> {
    threshold: f64,
    negative: D,
    positive: D,
}

impl<D> Threshold<D> {
    /// Create a classifier; `threshold` must be finite and strictly positive.
    pub fn new(threshold: f64, negative: D, positive: D) -> Result<Self, ConfigError> {
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(ConfigError::InvalidThreshold(threshold));
        }
        Ok(Self {
            threshold,
            negative,
            positive,
        })
    }

    /// Distance the drag must reach to commit.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Threshold<LeftRight> {
    /// Horizontal classifier: left below `-threshold`, right above `threshold`.
    pub fn left_right(threshold: f64) -> Result<Self, ConfigError> {
        Self::new(threshold, LeftRight::Left, LeftRight::Right)
    }
}

impl Threshold<UpDown> {
    /// Vertical classifier: up below `-threshold`, down above `threshold`.
    pub fn up_down(threshold: f64) -> Result<Self, ConfigError> {
        Self::new(threshold, UpDown::Up, UpDown::Down)
    }
}

impl<D: Clone> Classify<D> for Threshold<D> {
    fn classify(&self, offset: f64) -> Option<D> {
        if offset >= self.threshold {
            Some(self.positive.clone())
        } else if offset <= -self.threshold {
            Some(self.negative.clone())
        } else {
            None
        }
    }
}
