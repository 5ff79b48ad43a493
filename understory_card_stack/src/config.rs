// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stack configuration and validation errors.
//!
//! [`StackConfig`] is immutable once built. Invalid values are rejected at construction time
//! with a [`ConfigError`], so nothing downstream (window computation, transforms, gestures)
//! has to re-check them.
//!
//! ```
//! use understory_card_stack::config::{ConfigError, StackConfig};
//!
//! let config = StackConfig::builder().max_visible_cards(3).card_offset(8.0).build().unwrap();
//! assert_eq!(config.max_visible_cards(), 3);
//!
//! assert_eq!(StackConfig::builder().max_visible_cards(0).build(), Err(ConfigError::ZeroVisibleCards));
//! ```

use core::num::NonZeroUsize;

/// Errors reported when building a [`StackConfig`] or a
/// [`Threshold`](crate::direction::Threshold) classifier.
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// `max_visible_cards` was zero.
    #[error("max_visible_cards must be at least 1")]
    ZeroVisibleCards,
    /// `card_offset` was NaN or infinite.
    #[error("card_offset must be finite, got {0}")]
    NonFiniteOffset(f64),
    /// `card_scale` was negative, non-finite, or would shrink the deepest visible card to nothing.
    #[error("card_scale {scale} leaves no positive size for {max_visible_cards} visible cards")]
    ScaleOutOfRange {
        /// Rejected per-depth shrink factor.
        scale: f64,
        /// Visible card count the scale was checked against.
        max_visible_cards: usize,
    },
    /// A swipe threshold was not finite and strictly positive.
    #[error("swipe threshold must be finite and positive, got {0}")]
    InvalidThreshold(f64),
}

/// Rendering configuration of a card stack.
///
/// - `max_visible_cards`: how many cards, counting the top one, are rendered at once.
/// - `card_offset`: vertical distance between consecutive depths.
/// - `card_scale`: shrink factor applied per depth; the card at depth `d` is drawn at
///   `1 - card_scale * d` of its size.
///
/// Invariant: `card_scale * (max_visible_cards - 1) < 1`, so every visible card keeps a
/// positive size.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StackConfig {
    max_visible_cards: NonZeroUsize,
    card_offset: f64,
    card_scale: f64,
}

impl StackConfig {
    /// Default number of rendered cards.
    pub const DEFAULT_MAX_VISIBLE_CARDS: usize = 5;
    /// Default vertical offset between depths.
    pub const DEFAULT_CARD_OFFSET: f64 = 10.0;
    /// Default per-depth shrink factor.
    pub const DEFAULT_CARD_SCALE: f64 = 0.1;

    /// Validate and build a configuration.
    pub fn new(
        max_visible_cards: usize,
        card_offset: f64,
        card_scale: f64,
    ) -> Result<Self, ConfigError> {
        let max_visible_cards =
            NonZeroUsize::new(max_visible_cards).ok_or(ConfigError::ZeroVisibleCards)?;
        if !card_offset.is_finite() {
            return Err(ConfigError::NonFiniteOffset(card_offset));
        }
        let deepest = (max_visible_cards.get() - 1) as f64;
        if !card_scale.is_finite() || card_scale < 0.0 || card_scale * deepest >= 1.0 {
            return Err(ConfigError::ScaleOutOfRange {
                scale: card_scale,
                max_visible_cards: max_visible_cards.get(),
            });
        }
        Ok(Self {
            max_visible_cards,
            card_offset,
            card_scale,
        })
    }

    /// Start a builder seeded with the defaults.
    pub fn builder() -> StackConfigBuilder {
        StackConfigBuilder::default()
    }

    /// Maximum number of rendered cards (always at least 1).
    pub fn max_visible_cards(&self) -> usize {
        self.max_visible_cards.get()
    }

    /// Vertical distance between consecutive depths.
    pub fn card_offset(&self) -> f64 {
        self.card_offset
    }

    /// Per-depth shrink factor.
    pub fn card_scale(&self) -> f64 {
        self.card_scale
    }

    /// Scale factor of the card at `depth`.
    pub fn scale_at(&self, depth: usize) -> f64 {
        1.0 - self.card_scale * depth as f64
    }

    /// Vertical offset of the card at `depth`.
    pub fn offset_at(&self, depth: usize) -> f64 {
        self.card_offset * depth as f64
    }
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            max_visible_cards: NonZeroUsize::new(Self::DEFAULT_MAX_VISIBLE_CARDS)
                .unwrap_or(NonZeroUsize::MIN),
            card_offset: Self::DEFAULT_CARD_OFFSET,
            card_scale: Self::DEFAULT_CARD_SCALE,
        }
    }
}

/// Builder for [`StackConfig`]; validation happens in [`build`](Self::build).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StackConfigBuilder {
    max_visible_cards: usize,
    card_offset: f64,
    card_scale: f64,
}

impl Default for StackConfigBuilder {
    fn default() -> Self {
        Self {
            max_visible_cards: StackConfig::DEFAULT_MAX_VISIBLE_CARDS,
            card_offset: StackConfig::DEFAULT_CARD_OFFSET,
            card_scale: StackConfig::DEFAULT_CARD_SCALE,
        }
    }
}

impl StackConfigBuilder {
    /// Set the maximum number of rendered cards.
    pub fn max_visible_cards(mut self, n: usize) -> Self {
        self.max_visible_cards = n;
        self
    }

    /// Set the vertical offset between depths.
    pub fn card_offset(mut self, offset: f64) -> Self {
        self.card_offset = offset;
        self
    }

    /// Set the per-depth shrink factor.
    pub fn card_scale(mut self, scale: f64) -> Self {
        self.card_scale = scale;
        self
    }

    /// Validate the settings.
    pub fn build(self) -> Result<StackConfig, ConfigError> {
        StackConfig::new(self.max_visible_cards, self.card_offset, self.card_scale)
    }
}
