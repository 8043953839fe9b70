// Copyright 2026 the Gridpaper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::ops::Range;

use gridpaper_view::{
    Axis, CallbackId, ObservableRange, RangeBound, RangeCallback, RangeSelector, RangeSnapshot,
};
use kurbo::{Point, Rect};

use crate::drag::{DragTarget, TrackDrag};

/// Default pointer hit radius around each handle, in device pixels.
pub const DEFAULT_HANDLE_RADIUS: f64 = 8.0;

struct Subscriber {
    id: CallbackId,
    bound: RangeBound,
    callback: RangeCallback,
}

impl fmt::Debug for Subscriber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscriber")
            .field("id", &self.id)
            .field("bound", &self.bound)
            .finish_non_exhaustive()
    }
}

/// A dual-handle range bar: a `lower..upper` window inside a fixed domain.
///
/// The bar keeps `domain.start <= lower`, `upper <= domain.end` and
/// `upper - lower >= min_span` at all times. Every setter clamps into those
/// constraints rather than failing, and notifies the callbacks registered for
/// whichever bound actually moved.
///
/// Orientation decides which pointer coordinate drives a drag. Horizontal
/// bars run left to right; vertical bars run top to bottom, so `lower` is the
/// handle nearer the top of the track.
#[derive(Debug)]
pub struct DualRange {
    orientation: Axis,
    domain: Range<f64>,
    lower: f64,
    upper: f64,
    min_span: f64,
    handle_radius: f64,
    subscribers: Vec<Subscriber>,
    next_id: u64,
    drag: Option<TrackDrag>,
}

impl DualRange {
    /// Creates a bar over the unit domain, fully open (`0..1`).
    ///
    /// The minimum span defaults to 1% of the domain.
    #[must_use]
    pub fn new(orientation: Axis) -> Self {
        Self {
            orientation,
            domain: 0.0..1.0,
            lower: 0.0,
            upper: 1.0,
            min_span: 0.01,
            handle_radius: DEFAULT_HANDLE_RADIUS,
            subscribers: Vec::new(),
            next_id: 0,
            drag: None,
        }
    }

    /// Creates a horizontal bar.
    #[must_use]
    pub fn horizontal() -> Self {
        Self::new(Axis::Horizontal)
    }

    /// Creates a vertical bar.
    #[must_use]
    pub fn vertical() -> Self {
        Self::new(Axis::Vertical)
    }

    /// Builder-style variant of [`DualRange::set_domain`].
    #[must_use]
    pub fn with_domain(mut self, domain: Range<f64>) -> Self {
        self.set_domain(domain);
        self
    }

    /// Replaces the domain and opens the bar over all of it.
    ///
    /// A reversed domain is normalized. A domain with zero length or non-finite
    /// ends is ignored. The minimum span is rescaled to the same fraction of the
    /// new domain. Callbacks are not notified, as this is meant for setup;
    /// owners re-sync the bounds afterwards.
    pub fn set_domain(&mut self, domain: Range<f64>) {
        let (start, end) = if domain.start <= domain.end {
            (domain.start, domain.end)
        } else {
            (domain.end, domain.start)
        };
        if !(start.is_finite() && end.is_finite()) || end - start <= 0.0 {
            log::warn!("ignoring unusable range bar domain {start}..{end}");
            return;
        }
        let fraction = self.min_span / (self.domain.end - self.domain.start);
        self.domain = start..end;
        self.lower = start;
        self.upper = end;
        self.min_span = fraction * (end - start);
        self.drag = None;
    }

    /// Builder-style variant of [`DualRange::set_min_span`].
    #[must_use]
    pub fn with_min_span(mut self, min_span: f64) -> Self {
        self.set_min_span(min_span);
        self
    }

    /// Sets the hit radius around each handle, in device pixels.
    #[must_use]
    pub fn with_handle_radius(mut self, radius: f64) -> Self {
        self.handle_radius = radius.abs();
        self
    }

    /// Returns the bar orientation.
    #[must_use]
    pub fn orientation(&self) -> Axis {
        self.orientation
    }

    /// Returns the domain.
    #[must_use]
    pub fn domain(&self) -> Range<f64> {
        self.domain.clone()
    }

    /// Returns the minimum distance kept between the bounds.
    #[must_use]
    pub fn min_span(&self) -> f64 {
        self.min_span
    }

    /// Sets the minimum distance between the bounds.
    ///
    /// The value is clamped to `[0, domain length]`; zero allows the handles
    /// to meet. If the current window is narrower, it is widened.
    pub fn set_min_span(&mut self, min_span: f64) {
        let len = self.domain.end - self.domain.start;
        self.min_span = min_span.max(0.0).min(len);
        if self.upper - self.lower < self.min_span {
            self.set_range(self.lower, self.upper);
        }
    }

    /// Current lower bound.
    #[must_use]
    pub fn lower_range(&self) -> f64 {
        self.lower
    }

    /// Current upper bound.
    #[must_use]
    pub fn upper_range(&self) -> f64 {
        self.upper
    }

    /// Current `upper - lower`.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.upper - self.lower
    }

    /// Moves the lower bound, clamped to `[domain.start, upper - min_span]`.
    pub fn set_lower_range(&mut self, value: f64) {
        if !value.is_finite() {
            log::warn!("ignoring non-finite lower bound {value}");
            return;
        }
        let value = value.min(self.upper - self.min_span).max(self.domain.start);
        if value == self.lower {
            return;
        }
        self.lower = value;
        self.notify(RangeBound::Lower);
    }

    /// Moves the upper bound, clamped to `[lower + min_span, domain.end]`.
    pub fn set_upper_range(&mut self, value: f64) {
        if !value.is_finite() {
            log::warn!("ignoring non-finite upper bound {value}");
            return;
        }
        let value = value.max(self.lower + self.min_span).min(self.domain.end);
        if value == self.upper {
            return;
        }
        self.upper = value;
        self.notify(RangeBound::Upper);
    }

    /// Moves both bounds.
    ///
    /// Swapped arguments are reordered, both are clamped into the domain and a
    /// window narrower than the minimum span is widened about its center. Both
    /// bounds are stored before any callback runs, so every callback observes
    /// the final window.
    pub fn set_range(&mut self, lower: f64, upper: f64) {
        if !(lower.is_finite() && upper.is_finite()) {
            log::warn!("ignoring non-finite range {lower}..{upper}");
            return;
        }
        let (lower, upper) = if lower <= upper {
            (lower, upper)
        } else {
            (upper, lower)
        };
        let (lower, upper) = self.constrain(lower, upper);
        let lower_changed = lower != self.lower;
        let upper_changed = upper != self.upper;
        self.lower = lower;
        self.upper = upper;
        if lower_changed {
            self.notify(RangeBound::Lower);
        }
        if upper_changed {
            self.notify(RangeBound::Upper);
        }
    }

    /// Shifts the window by `delta` domain units, keeping its span.
    pub fn scroll_by(&mut self, delta: f64) {
        if !delta.is_finite() || delta == 0.0 {
            return;
        }
        let span = self.span();
        let lower = (self.lower + delta)
            .min(self.domain.end - span)
            .max(self.domain.start);
        self.set_range(lower, lower + span);
    }

    /// Scales the window about `anchor` (a domain value); `factor > 1` narrows it.
    ///
    /// The anchor keeps its relative position inside the window where the
    /// domain allows. The span stays within `[min_span, domain length]`.
    pub fn zoom_by(&mut self, factor: f64, anchor: f64) {
        if !(factor.is_finite() && factor > 0.0 && anchor.is_finite()) {
            return;
        }
        let len = self.domain.end - self.domain.start;
        let old_span = self.span();
        let span = (old_span / factor).max(self.min_span).min(len);
        let t = if old_span > 0.0 {
            ((anchor - self.lower) / old_span).max(0.0).min(1.0)
        } else {
            0.5
        };
        let lower = (anchor - t * span)
            .min(self.domain.end - span)
            .max(self.domain.start);
        self.set_range(lower, lower + span);
    }

    /// Registers a callback for changes of the lower bound.
    pub fn add_lower_range_change_callback<F>(&mut self, callback: F) -> CallbackId
    where
        F: FnMut(&RangeSnapshot) + 'static,
    {
        self.add_callback(RangeBound::Lower, Box::new(callback))
    }

    /// Registers a callback for changes of the upper bound.
    pub fn add_upper_range_change_callback<F>(&mut self, callback: F) -> CallbackId
    where
        F: FnMut(&RangeSnapshot) + 'static,
    {
        self.add_callback(RangeBound::Upper, Box::new(callback))
    }

    /// Removes a callback. Returns `false` if `id` is unknown.
    pub fn remove_callback(&mut self, id: CallbackId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|s| s.id != id);
        let removed = self.subscribers.len() != before;
        if removed {
            log::trace!("{:?} range bar: removed callback {}", self.orientation, id.get());
        }
        removed
    }

    /// Number of registered callbacks.
    #[must_use]
    pub fn callback_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Converts a pointer position to a domain value along `track`.
    ///
    /// Positions beyond the ends of the track clamp to the domain ends.
    #[must_use]
    pub fn value_at(&self, pos: Point, track: Rect) -> f64 {
        let (p, start, len) = self.along(pos, track);
        let domain_len = self.domain.end - self.domain.start;
        if len <= 0.0 {
            return self.domain.start;
        }
        let t = ((p - start) / len).max(0.0).min(1.0);
        self.domain.start + t * domain_len
    }

    /// Converts a domain value to a device coordinate along `track`.
    #[must_use]
    pub fn position_of(&self, value: f64, track: Rect) -> f64 {
        let track = track.abs();
        let (start, len) = match self.orientation {
            Axis::Horizontal => (track.x0, track.width()),
            Axis::Vertical => (track.y0, track.height()),
        };
        let t = (value - self.domain.start) / (self.domain.end - self.domain.start);
        start + t * len
    }

    /// Device-space rectangle of the thumb (the part between the handles).
    #[must_use]
    pub fn thumb_rect(&self, track: Rect) -> Rect {
        let track = track.abs();
        let a = self.position_of(self.lower, track);
        let b = self.position_of(self.upper, track);
        match self.orientation {
            Axis::Horizontal => Rect::new(a, track.y0, b, track.y1),
            Axis::Vertical => Rect::new(track.x0, a, track.x1, b),
        }
    }

    /// Returns which part of the bar is under `pos`, if any.
    ///
    /// Handles win over the body; when both handles are within reach the
    /// nearer one wins, ties going to the lower handle unless the pointer is
    /// past the upper one.
    #[must_use]
    pub fn hit_test(&self, pos: Point, track: Rect) -> Option<DragTarget> {
        let track = track.abs();
        let r = self.handle_radius;
        let (across, lo, hi) = match self.orientation {
            Axis::Horizontal => (pos.y, track.y0, track.y1),
            Axis::Vertical => (pos.x, track.x0, track.x1),
        };
        if across < lo - r || across > hi + r {
            return None;
        }
        let (p, _, _) = self.along(pos, track);
        let pl = self.position_of(self.lower, track);
        let pu = self.position_of(self.upper, track);
        let dl = (p - pl).abs();
        let du = (p - pu).abs();
        if dl <= r || du <= r {
            if dl < du || (dl == du && p <= pl) {
                return Some(DragTarget::Lower);
            }
            return Some(DragTarget::Upper);
        }
        if p > pl && p < pu {
            return Some(DragTarget::Body);
        }
        None
    }

    /// Starts a drag if `pos` hits the bar.
    pub fn pointer_down(&mut self, pos: Point, track: Rect) -> Option<DragTarget> {
        let target = self.hit_test(pos, track)?;
        let origin = self.value_at(pos, track);
        self.drag = Some(TrackDrag::begin(target, track, origin, self.lower, self.upper));
        log::trace!("{:?} range bar: grabbed {target:?}", self.orientation);
        Some(target)
    }

    /// Continues an active drag. Returns `true` if either bound moved.
    pub fn pointer_move(&mut self, pos: Point) -> bool {
        let Some(drag) = self.drag else {
            return false;
        };
        let before = (self.lower, self.upper);
        let value = self.value_at(pos, drag.track);
        let (lower, upper) = drag.proposed_range(value);
        match drag.target {
            DragTarget::Lower => self.set_lower_range(lower),
            DragTarget::Upper => self.set_upper_range(upper),
            DragTarget::Body => {
                let span = upper - lower;
                let lower = lower.min(self.domain.end - span).max(self.domain.start);
                self.set_range(lower, lower + span);
            }
        }
        (self.lower, self.upper) != before
    }

    /// Ends the active drag, returning what was being dragged.
    pub fn pointer_up(&mut self) -> Option<DragTarget> {
        self.drag.take().map(|d| d.target)
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Returns the current bounds as a snapshot.
    #[must_use]
    pub fn snapshot(&self) -> RangeSnapshot {
        RangeSnapshot::new(self.lower, self.upper)
    }

    fn add_callback(&mut self, bound: RangeBound, callback: RangeCallback) -> CallbackId {
        let id = CallbackId::new(self.next_id);
        self.next_id += 1;
        self.subscribers.push(Subscriber {
            id,
            bound,
            callback,
        });
        log::trace!(
            "{:?} range bar: added {bound:?} callback {}",
            self.orientation,
            id.get()
        );
        id
    }

    fn notify(&mut self, bound: RangeBound) {
        let snapshot = self.snapshot();
        for subscriber in self.subscribers.iter_mut().filter(|s| s.bound == bound) {
            (subscriber.callback)(&snapshot);
        }
    }

    /// Pointer coordinate along the track plus the track's start and length.
    fn along(&self, pos: Point, track: Rect) -> (f64, f64, f64) {
        let track = track.abs();
        match self.orientation {
            Axis::Horizontal => (pos.x, track.x0, track.width()),
            Axis::Vertical => (pos.y, track.y0, track.height()),
        }
    }

    fn constrain(&self, lower: f64, upper: f64) -> (f64, f64) {
        let Range { start, end } = self.domain;
        let lower = lower.max(start).min(end);
        let upper = upper.max(start).min(end);
        if upper - lower >= self.min_span {
            return (lower, upper);
        }
        let center = (lower + upper) * 0.5;
        let lower = (center - self.min_span * 0.5)
            .min(end - self.min_span)
            .max(start);
        (lower, (lower + self.min_span).min(end))
    }
}

impl RangeSelector for DualRange {
    fn lower_range(&self) -> f64 {
        self.lower
    }

    fn upper_range(&self) -> f64 {
        self.upper
    }
}

impl ObservableRange for DualRange {
    fn subscribe(&mut self, bound: RangeBound, callback: RangeCallback) -> CallbackId {
        self.add_callback(bound, callback)
    }

    fn unsubscribe(&mut self, id: CallbackId) -> bool {
        self.remove_callback(id)
    }

    fn set_range(&mut self, lower: f64, upper: f64) {
        Self::set_range(self, lower, upper);
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    use gridpaper_view::{Axis, ObservableRange, RangeBound, RangeSnapshot};
    use kurbo::{Point, Rect};

    use super::DualRange;
    use crate::DragTarget;

    fn recorder(bar: &mut DualRange) -> Rc<RefCell<Vec<(RangeBound, RangeSnapshot)>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let lower_log = Rc::clone(&log);
        bar.add_lower_range_change_callback(move |s| {
            lower_log.borrow_mut().push((RangeBound::Lower, *s));
        });
        let upper_log = Rc::clone(&log);
        bar.add_upper_range_change_callback(move |s| {
            upper_log.borrow_mut().push((RangeBound::Upper, *s));
        });
        log
    }

    const TRACK: Rect = Rect::new(0.0, 0.0, 200.0, 20.0);

    #[test]
    fn starts_fully_open() {
        let bar = DualRange::horizontal();
        assert_eq!(bar.lower_range(), 0.0);
        assert_eq!(bar.upper_range(), 1.0);
        assert_eq!(bar.orientation(), Axis::Horizontal);
        assert_eq!(bar.min_span(), 0.01);
    }

    #[test]
    fn setters_clamp_and_notify_only_changed_bounds() {
        let mut bar = DualRange::horizontal();
        let log = recorder(&mut bar);

        bar.set_lower_range(0.25);
        bar.set_lower_range(0.25);
        bar.set_upper_range(2.0);
        bar.set_upper_range(0.1);

        let log = log.borrow();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0], (RangeBound::Lower, RangeSnapshot::new(0.25, 1.0)));
        assert_eq!(log[1].0, RangeBound::Upper);
        assert!((bar.upper_range() - 0.26).abs() < 1e-12);
    }

    #[test]
    fn set_range_stores_both_before_notifying() {
        let mut bar = DualRange::vertical();
        let log = recorder(&mut bar);

        bar.set_range(0.75, 0.25);
        let log = log.borrow();
        assert_eq!(log.len(), 2);
        for (_, snapshot) in log.iter() {
            assert_eq!(*snapshot, RangeSnapshot::new(0.25, 0.75));
        }
    }

    #[test]
    fn narrow_window_is_widened_to_min_span() {
        let mut bar = DualRange::horizontal().with_min_span(0.1);
        bar.set_range(0.5, 0.5);
        assert!((bar.lower_range() - 0.45).abs() < 1e-12);
        assert!((bar.upper_range() - 0.55).abs() < 1e-12);

        bar.set_range(1.0, 1.0);
        assert!((bar.lower_range() - 0.9).abs() < 1e-12);
        assert!((bar.upper_range() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn zero_min_span_lets_handles_meet() {
        let mut bar = DualRange::horizontal().with_min_span(0.0);
        bar.set_range(0.5, 0.5);
        assert_eq!(bar.lower_range(), 0.5);
        assert_eq!(bar.upper_range(), 0.5);
    }

    #[test]
    fn non_finite_input_is_ignored() {
        let mut bar = DualRange::horizontal();
        let log = recorder(&mut bar);
        bar.set_lower_range(f64::NAN);
        bar.set_upper_range(f64::INFINITY);
        bar.set_range(f64::NAN, 0.5);
        assert!(log.borrow().is_empty());
        assert_eq!(bar.snapshot(), RangeSnapshot::new(0.0, 1.0));
    }

    #[test]
    fn remove_callback_unsubscribes() {
        let mut bar = DualRange::horizontal();
        let hits = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&hits);
        let id = bar.add_lower_range_change_callback(move |_| *counter.borrow_mut() += 1);
        assert_eq!(bar.callback_count(), 1);

        bar.set_lower_range(0.1);
        assert!(bar.remove_callback(id));
        assert!(!bar.remove_callback(id));
        bar.set_lower_range(0.2);
        assert_eq!(*hits.borrow(), 1);
        assert_eq!(bar.callback_count(), 0);
    }

    #[test]
    fn observable_range_contract() {
        let mut bar = DualRange::horizontal();
        let seen = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&seen);
        let id = ObservableRange::subscribe(
            &mut bar,
            RangeBound::Upper,
            alloc::boxed::Box::new(move |s: &RangeSnapshot| *sink.borrow_mut() = Some(*s)),
        );
        ObservableRange::set_range(&mut bar, 0.2, 0.4);
        assert_eq!(*seen.borrow(), Some(RangeSnapshot::new(0.2, 0.4)));
        assert!(bar.unsubscribe(id));
    }

    #[test]
    fn custom_domain_rescales_min_span() {
        let bar = DualRange::horizontal().with_domain(100.0..0.0);
        assert_eq!(bar.domain(), 0.0..100.0);
        assert_eq!(bar.snapshot(), RangeSnapshot::new(0.0, 100.0));
        assert!((bar.min_span() - 1.0).abs() < 1e-12);

        let ignored = DualRange::horizontal().with_domain(3.0..3.0);
        assert_eq!(ignored.domain(), 0.0..1.0);
    }

    #[test]
    fn set_domain_keeps_subscribers_quiet() {
        let mut bar = DualRange::horizontal();
        let log = recorder(&mut bar);
        bar.set_range(0.2, 0.4);
        log.borrow_mut().clear();

        bar.set_domain(0.0..10.0);
        assert_eq!(bar.snapshot(), RangeSnapshot::new(0.0, 10.0));
        assert!(log.borrow().is_empty());
        assert_eq!(bar.callback_count(), 2);

        bar.set_range(2.5, 5.0);
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn scroll_and_zoom_keep_within_domain() {
        let mut bar = DualRange::horizontal();
        bar.set_range(0.2, 0.4);
        bar.scroll_by(10.0);
        assert!((bar.lower_range() - 0.8).abs() < 1e-12);
        assert!((bar.upper_range() - 1.0).abs() < 1e-12);

        bar.set_range(0.0, 1.0);
        bar.zoom_by(4.0, 0.5);
        assert!((bar.lower_range() - 0.375).abs() < 1e-12);
        assert!((bar.upper_range() - 0.625).abs() < 1e-12);

        bar.zoom_by(1.0e9, 0.5);
        assert!((bar.span() - bar.min_span()).abs() < 1e-12);

        bar.zoom_by(1.0e-9, 0.5);
        assert_eq!(bar.snapshot(), RangeSnapshot::new(0.0, 1.0));
    }

    #[test]
    fn hit_test_finds_handles_and_body() {
        let mut bar = DualRange::horizontal();
        bar.set_range(0.25, 0.75);
        // Handles sit at x = 50 and x = 150 on a 200 px track.
        assert_eq!(
            bar.hit_test(Point::new(52.0, 10.0), TRACK),
            Some(DragTarget::Lower)
        );
        assert_eq!(
            bar.hit_test(Point::new(145.0, 10.0), TRACK),
            Some(DragTarget::Upper)
        );
        assert_eq!(
            bar.hit_test(Point::new(100.0, 10.0), TRACK),
            Some(DragTarget::Body)
        );
        assert_eq!(bar.hit_test(Point::new(10.0, 10.0), TRACK), None);
        assert_eq!(bar.hit_test(Point::new(100.0, 60.0), TRACK), None);
    }

    #[test]
    fn dragging_lower_handle() {
        let mut bar = DualRange::horizontal();
        bar.set_range(0.25, 0.75);
        let log = recorder(&mut bar);

        assert_eq!(
            bar.pointer_down(Point::new(50.0, 10.0), TRACK),
            Some(DragTarget::Lower)
        );
        assert!(bar.is_dragging());
        assert!(bar.pointer_move(Point::new(20.0, 10.0)));
        assert!((bar.lower_range() - 0.1).abs() < 1e-12);
        assert_eq!(bar.upper_range(), 0.75);

        // Dragging past the upper handle stops at the minimum span.
        bar.pointer_move(Point::new(199.0, 10.0));
        assert!((bar.lower_range() - 0.74).abs() < 1e-12);

        assert_eq!(bar.pointer_up(), Some(DragTarget::Lower));
        assert!(!bar.is_dragging());
        assert!(!bar.pointer_move(Point::new(0.0, 10.0)));
        assert!(log.borrow().iter().all(|(b, _)| *b == RangeBound::Lower));
    }

    #[test]
    fn dragging_body_keeps_span_and_stops_at_end() {
        let mut bar = DualRange::horizontal();
        bar.set_range(0.25, 0.75);
        bar.pointer_down(Point::new(100.0, 10.0), TRACK);

        bar.pointer_move(Point::new(120.0, 10.0));
        assert!((bar.lower_range() - 0.35).abs() < 1e-12);
        assert!((bar.upper_range() - 0.85).abs() < 1e-12);

        bar.pointer_move(Point::new(400.0, 10.0));
        assert!((bar.lower_range() - 0.5).abs() < 1e-12);
        assert!((bar.upper_range() - 1.0).abs() < 1e-12);

        // Coming back, the thumb follows the pointer from the grab point.
        bar.pointer_move(Point::new(100.0, 10.0));
        assert!((bar.lower_range() - 0.25).abs() < 1e-12);
        bar.pointer_up();
    }

    #[test]
    fn vertical_bar_measures_from_top() {
        let mut bar = DualRange::vertical();
        let track = Rect::new(0.0, 0.0, 20.0, 400.0);
        assert_eq!(bar.value_at(Point::new(10.0, 100.0), track), 0.25);

        bar.set_range(0.0, 0.5);
        assert_eq!(bar.thumb_rect(track), Rect::new(0.0, 0.0, 20.0, 200.0));
        assert_eq!(
            bar.pointer_down(Point::new(10.0, 198.0), track),
            Some(DragTarget::Upper)
        );
        bar.pointer_move(Point::new(10.0, 300.0));
        assert!((bar.upper_range() - 0.755).abs() < 1e-12);
    }
}
