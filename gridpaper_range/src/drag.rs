// Copyright 2026 the Gridpaper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag bookkeeping for a pointer grabbing part of a range bar.
//!
//! ## Usage
//!
//! 1) Hit-test the pointer against the bar to get a [`DragTarget`].
//! 2) Record the grab with [`TrackDrag::begin`], capturing the bounds at grab time.
//! 3) On each move, [`TrackDrag::proposed_range`] gives the bounds the bar
//!    should move to, measured from the grab rather than accumulated per move,
//!    so clamping at the ends of the track never drifts the handle away from
//!    the pointer.

use kurbo::Rect;

/// The part of a range bar under the pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DragTarget {
    /// The lower-bound handle.
    Lower,
    /// The upper-bound handle.
    Upper,
    /// The thumb between the handles; dragging it moves both bounds.
    Body,
}

/// An active drag on a range bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct TrackDrag {
    pub(crate) target: DragTarget,
    /// Track rectangle in device space at grab time.
    pub(crate) track: Rect,
    /// Pointer position at grab time, in bar values.
    origin: f64,
    lower_at_start: f64,
    upper_at_start: f64,
}

impl TrackDrag {
    pub(crate) fn begin(
        target: DragTarget,
        track: Rect,
        origin: f64,
        lower: f64,
        upper: f64,
    ) -> Self {
        Self {
            target,
            track,
            origin,
            lower_at_start: lower,
            upper_at_start: upper,
        }
    }

    /// Total pointer offset since the grab, in bar values.
    pub(crate) fn offset(&self, value: f64) -> f64 {
        value - self.origin
    }

    /// Bounds `(lower, upper)` implied by the pointer now being at `value`.
    ///
    /// Only the grabbed bound moves for a handle drag; a body drag shifts both
    /// and keeps the span. No clamping happens here.
    pub(crate) fn proposed_range(&self, value: f64) -> (f64, f64) {
        let offset = self.offset(value);
        match self.target {
            DragTarget::Lower => (self.lower_at_start + offset, self.upper_at_start),
            DragTarget::Upper => (self.lower_at_start, self.upper_at_start + offset),
            DragTarget::Body => (self.lower_at_start + offset, self.upper_at_start + offset),
        }
    }
}
