// Copyright 2026 the Gridpaper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The range selector contract consumed by the viewport controller.
//!
//! A selector is anything with a lower and an upper bound, such as a dual
//! handle scrollbar. [`RangeSelector`] is the read side the controller needs
//! when synchronizing. [`ObservableRange`] adds change subscription and the
//! write side used to push the display window back into the selector.

use alloc::boxed::Box;

/// Read access to a selector's current bounds.
pub trait RangeSelector {
    /// Current lower bound.
    fn lower_range(&self) -> f64;
    /// Current upper bound.
    fn upper_range(&self) -> f64;
}

impl<R: RangeSelector + ?Sized> RangeSelector for &R {
    fn lower_range(&self) -> f64 {
        (**self).lower_range()
    }

    fn upper_range(&self) -> f64 {
        (**self).upper_range()
    }
}

/// Copy of a selector's bounds at the moment a change was notified.
///
/// Callbacks receive a snapshot instead of the selector itself, so they never
/// need to borrow the selector that is notifying them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeSnapshot {
    /// Lower bound.
    pub lower: f64,
    /// Upper bound.
    pub upper: f64,
}

impl RangeSnapshot {
    /// Creates a snapshot.
    #[must_use]
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Takes a snapshot of any selector.
    #[must_use]
    pub fn of<R: RangeSelector + ?Sized>(selector: &R) -> Self {
        Self {
            lower: selector.lower_range(),
            upper: selector.upper_range(),
        }
    }
}

impl RangeSelector for RangeSnapshot {
    fn lower_range(&self) -> f64 {
        self.lower
    }

    fn upper_range(&self) -> f64 {
        self.upper
    }
}

/// Which bound a change callback listens to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RangeBound {
    /// The lower bound.
    Lower,
    /// The upper bound.
    Upper,
}

/// Handle returned by [`ObservableRange::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CallbackId(u64);

impl CallbackId {
    /// Wraps a raw id. Selectors hand these out; ids must be unique per selector.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw id.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Boxed change callback.
pub type RangeCallback = Box<dyn FnMut(&RangeSnapshot)>;

/// A selector that notifies subscribers and accepts programmatic updates.
pub trait ObservableRange: RangeSelector {
    /// Registers `callback` to run whenever `bound` changes.
    fn subscribe(&mut self, bound: RangeBound, callback: RangeCallback) -> CallbackId;

    /// Removes a callback. Returns `false` if `id` was not registered.
    fn unsubscribe(&mut self, id: CallbackId) -> bool;

    /// Moves both bounds at once, notifying subscribers of whichever changed.
    fn set_range(&mut self, lower: f64, upper: f64);
}
