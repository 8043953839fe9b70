// Copyright 2026 the Gridpaper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use crate::error::RectError;
use crate::modes::AxisDirection;

/// Linear mapping between a selector's value space and one world axis.
///
/// A selector reports values in its own span (`0..1` by default). A reading
/// `v` is first normalized to `t = (v - span.start) / span.len()`, clamped to
/// `[0, 1]`, optionally flipped by [`AxisDirection::Inverted`], and then
/// interpolated as `world.start + t * (world.end - world.start)`.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisMapping {
    world: Range<f64>,
    selector_span: Range<f64>,
    direction: AxisDirection,
}

impl AxisMapping {
    /// Creates a forward mapping from the unit selector span onto `world`.
    #[must_use]
    pub fn new(world: Range<f64>) -> Self {
        Self {
            world,
            selector_span: 0.0..1.0,
            direction: AxisDirection::Forward,
        }
    }

    /// Builder-style variant of [`AxisMapping::set_direction`].
    #[must_use]
    pub fn with_direction(mut self, direction: AxisDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Returns the world range this mapping interpolates over.
    #[must_use]
    pub fn world_range(&self) -> Range<f64> {
        self.world.clone()
    }

    /// Replaces the world range.
    pub fn set_world_range(&mut self, world: Range<f64>) {
        self.world = world;
    }

    /// Returns the selector value span.
    #[must_use]
    pub fn selector_span(&self) -> Range<f64> {
        self.selector_span.clone()
    }

    /// Sets the selector value span.
    ///
    /// A reversed span is normalized so that `start <= end`. A span with zero
    /// length (or non-finite ends) cannot be normalized against and is ignored.
    pub fn set_selector_span(&mut self, span: Range<f64>) {
        let (start, end) = if span.start <= span.end {
            (span.start, span.end)
        } else {
            (span.end, span.start)
        };
        if !(start.is_finite() && end.is_finite()) || end - start <= 0.0 {
            log::warn!("ignoring unusable selector span {start}..{end}");
            return;
        }
        self.selector_span = start..end;
    }

    /// Returns the mapping direction.
    #[must_use]
    pub fn direction(&self) -> AxisDirection {
        self.direction
    }

    /// Sets the mapping direction.
    pub fn set_direction(&mut self, direction: AxisDirection) {
        self.direction = direction;
    }

    /// Normalizes a selector value into `[0, 1]`, before any direction flip.
    #[must_use]
    pub fn normalize(&self, value: f64) -> f64 {
        let len = self.selector_span.end - self.selector_span.start;
        ((value - self.selector_span.start) / len).clamp(0.0, 1.0)
    }

    /// Maps one selector value to a world coordinate.
    #[must_use]
    pub fn selector_to_world(&self, value: f64) -> f64 {
        let t = match self.direction {
            AxisDirection::Forward => self.normalize(value),
            AxisDirection::Inverted => 1.0 - self.normalize(value),
        };
        self.world.start + t * (self.world.end - self.world.start)
    }

    /// Maps one world coordinate back to a selector value.
    ///
    /// World coordinates outside the mapped range clamp to the selector span.
    #[must_use]
    pub fn world_to_selector(&self, x: f64) -> f64 {
        let w_len = self.world.end - self.world.start;
        let t = if w_len == 0.0 {
            0.0
        } else {
            ((x - self.world.start) / w_len).clamp(0.0, 1.0)
        };
        let t = match self.direction {
            AxisDirection::Forward => t,
            AxisDirection::Inverted => 1.0 - t,
        };
        self.selector_span.start + t * (self.selector_span.end - self.selector_span.start)
    }

    /// Maps a selector `[lower, upper]` reading to a world range.
    ///
    /// The result is ordered (`start <= end`) regardless of direction. It may
    /// be empty when `lower == upper`; deciding what to do with an empty window
    /// is left to the caller. Readings outside the selector span are clamped
    /// onto it.
    pub fn selector_range_to_world(&self, lower: f64, upper: f64) -> Result<Range<f64>, RectError> {
        if !(lower.is_finite() && upper.is_finite()) {
            return Err(RectError::NonFinite);
        }
        if lower > upper {
            return Err(RectError::ReversedRange { lower, upper });
        }
        let a = self.selector_to_world(lower);
        let b = self.selector_to_world(upper);
        Ok(if a <= b { a..b } else { b..a })
    }

    /// Maps a world range back to an ordered selector `lower..upper` range.
    #[must_use]
    pub fn world_range_to_selector(&self, world: Range<f64>) -> Range<f64> {
        let a = self.world_to_selector(world.start);
        let b = self.world_to_selector(world.end);
        if a <= b { a..b } else { b..a }
    }
}
