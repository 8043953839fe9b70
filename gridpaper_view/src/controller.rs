// Copyright 2026 the Gridpaper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::error::RectError;
use crate::mapping::AxisMapping;
use crate::modes::{Axis, AxisDirection, WindowPolicy};
use crate::rect::{DisplayRect, Extent};
use crate::selector::RangeSelector;
use crate::surface::DrawingSurface;

/// Result of feeding an update into a [`ViewportController`].
///
/// Selector callbacks have nowhere to send an error, so invalid updates are
/// reported here (and logged) instead of through `Result`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SyncOutcome {
    /// The update resolved to the window already on display.
    Unchanged,
    /// The display rectangle changed and the surface was asked to redraw.
    Updated,
    /// The update was refused; the previous window is still on display.
    Rejected(RectError),
}

impl SyncOutcome {
    /// Returns `true` for [`SyncOutcome::Updated`].
    #[must_use]
    pub fn is_updated(&self) -> bool {
        matches!(self, Self::Updated)
    }

    /// Returns `true` for [`SyncOutcome::Rejected`].
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

/// Keeps a [`DisplayRect`] in sync with a horizontal and a vertical range selector.
///
/// The controller owns the display rectangle and the drawing surface showing
/// it. Each axis has its own [`AxisMapping`] from selector values to world
/// coordinates over the configured [`Extent`]:
/// - The horizontal axis is [`AxisDirection::Forward`]: selector start is the
///   left edge of the extent.
/// - The vertical axis is [`AxisDirection::Inverted`]: selector start (the top
///   of a vertical track) is the top of the extent, i.e. its maximum Y.
///
/// Every change to the display rectangle bumps [`ViewportController::revision`]
/// and calls [`DrawingSurface::set_view`]. Updates that would leave an empty
/// window are handled according to the [`WindowPolicy`].
#[derive(Debug)]
pub struct ViewportController<S> {
    extent: Extent,
    display: DisplayRect,
    horizontal: AxisMapping,
    vertical: AxisMapping,
    window_policy: WindowPolicy,
    min_window: Size,
    revision: u64,
    surface: S,
}

impl<S: DrawingSurface> ViewportController<S> {
    /// Creates a controller showing the whole `extent` and draws it once.
    pub fn new(extent: Extent, surface: S) -> Self {
        let mut controller = Self {
            extent,
            display: extent,
            horizontal: AxisMapping::new(extent.x_range()),
            vertical: AxisMapping::new(extent.y_range()).with_direction(AxisDirection::Inverted),
            window_policy: WindowPolicy::default(),
            min_window: Size::ZERO,
            revision: 0,
            surface,
        };
        controller.surface.set_view(&controller.display);
        controller
    }

    /// Replaces the extent and shows all of it.
    ///
    /// Both axis mappings are re-targeted at the new extent. The surface is
    /// redrawn even if the window did not change, since whatever was drawn
    /// may have depended on the old extent.
    pub fn initialize(&mut self, extent: Extent) {
        self.extent = extent;
        self.horizontal.set_world_range(extent.x_range());
        self.vertical.set_world_range(extent.y_range());
        self.display = extent;
        self.revision += 1;
        log::debug!("viewport initialized to {extent:?}");
        self.surface.set_view(&self.display);
    }

    /// Shows the whole extent again.
    pub fn reset(&mut self) -> SyncOutcome {
        self.commit(self.extent)
    }

    /// Reads the horizontal selector and updates the X bounds.
    ///
    /// The Y bounds are never touched.
    pub fn on_horizontal_change<R: RangeSelector + ?Sized>(&mut self, selector: &R) -> SyncOutcome {
        self.sync_axis(Axis::Horizontal, selector.lower_range(), selector.upper_range())
    }

    /// Reads the vertical selector and updates the Y bounds.
    ///
    /// The X bounds are never touched.
    pub fn on_vertical_change<R: RangeSelector + ?Sized>(&mut self, selector: &R) -> SyncOutcome {
        self.sync_axis(Axis::Vertical, selector.lower_range(), selector.upper_range())
    }

    /// Dispatches to [`Self::on_horizontal_change`] or [`Self::on_vertical_change`].
    pub fn on_change<R: RangeSelector + ?Sized>(&mut self, axis: Axis, selector: &R) -> SyncOutcome {
        match axis {
            Axis::Horizontal => self.on_horizontal_change(selector),
            Axis::Vertical => self.on_vertical_change(selector),
        }
    }

    /// Replaces the display rectangle directly.
    ///
    /// The rectangle is first moved inside the extent, then each axis is held
    /// to the minimum window size according to the window policy.
    pub fn set_display_rect(&mut self, rect: DisplayRect) -> SyncOutcome {
        let rect = rect.clamped_within(&self.extent);
        let result = self
            .fit_window(Axis::Horizontal, rect.x_range())
            .and_then(|x| Ok((x, self.fit_window(Axis::Vertical, rect.y_range())?)))
            .and_then(|(x, y)| DisplayRect::from_ranges(x, y));
        match result {
            Ok(candidate) => self.commit(candidate),
            Err(err) => Self::reject("display rect", err),
        }
    }

    /// Pans the window by `delta` world units, staying inside the extent.
    pub fn pan_by(&mut self, delta: Vec2) -> SyncOutcome {
        if delta == Vec2::ZERO {
            return SyncOutcome::Unchanged;
        }
        match self.display.translated(delta) {
            Ok(moved) => self.commit(moved.clamped_within(&self.extent)),
            Err(err) => Self::reject("pan", err),
        }
    }

    /// Zooms about a world-space anchor; `factor > 1` zooms in.
    ///
    /// The anchor keeps its position in the window as far as the extent and
    /// the minimum window size allow. Non-positive or non-finite factors are
    /// ignored.
    pub fn zoom_about(&mut self, anchor: Point, factor: f64) -> SyncOutcome {
        if !(factor.is_finite() && factor > 0.0) || factor == 1.0 {
            return SyncOutcome::Unchanged;
        }
        let x = widen_to_minimum(
            zoom_axis(self.display.x_range(), anchor.x, factor),
            self.extent.x_range(),
            self.min_window.width,
        );
        let y = widen_to_minimum(
            zoom_axis(self.display.y_range(), anchor.y, factor),
            self.extent.y_range(),
            self.min_window.height,
        );
        match DisplayRect::from_ranges(x, y) {
            Ok(zoomed) => self.commit(zoomed.clamped_within(&self.extent)),
            Err(err) => Self::reject("zoom", err),
        }
    }

    /// Returns the current display rectangle.
    #[must_use]
    pub fn display_rect(&self) -> DisplayRect {
        self.display
    }

    /// Returns the configured extent.
    #[must_use]
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Selector ranges `(horizontal, vertical)` that describe the current window.
    ///
    /// This is the controller-to-selector half of the synchronization: writing
    /// these back into the selectors and then notifying the controller yields
    /// [`SyncOutcome::Unchanged`] (up to rounding).
    #[must_use]
    pub fn selector_ranges(&self) -> (Range<f64>, Range<f64>) {
        (
            self.horizontal.world_range_to_selector(self.display.x_range()),
            self.vertical.world_range_to_selector(self.display.y_range()),
        )
    }

    /// World-to-device transform for drawing the current window into `view`.
    ///
    /// See [`DisplayRect::view_transform`].
    #[must_use]
    pub fn view_transform(&self, view: Rect) -> Option<Affine> {
        self.display.view_transform(view)
    }

    /// Returns the mapping used for `axis`.
    #[must_use]
    pub fn mapping(&self, axis: Axis) -> &AxisMapping {
        match axis {
            Axis::Horizontal => &self.horizontal,
            Axis::Vertical => &self.vertical,
        }
    }

    /// Sets the selector-to-world direction for `axis`.
    ///
    /// The display rectangle is unchanged; selectors should be re-synced from
    /// [`Self::selector_ranges`] afterwards.
    pub fn set_direction(&mut self, axis: Axis, direction: AxisDirection) {
        self.mapping_mut(axis).set_direction(direction);
    }

    /// Sets the selector value span for `axis` (default `0..1`).
    pub fn set_selector_span(&mut self, axis: Axis, span: Range<f64>) {
        self.mapping_mut(axis).set_selector_span(span);
    }

    /// Sets the policy for updates that would produce a too-small window.
    pub fn set_window_policy(&mut self, policy: WindowPolicy) {
        self.window_policy = policy;
    }

    /// Returns the window policy.
    #[must_use]
    pub fn window_policy(&self) -> WindowPolicy {
        self.window_policy
    }

    /// Sets the minimum window size in world units.
    ///
    /// Negative and NaN components are treated as zero. Applies to subsequent
    /// updates only.
    pub fn set_min_window_size(&mut self, size: Size) {
        self.min_window = Size::new(size.width.max(0.0), size.height.max(0.0));
    }

    /// Returns the minimum window size in world units.
    #[must_use]
    pub fn min_window_size(&self) -> Size {
        self.min_window
    }

    /// Counter bumped on every change of the display rectangle.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Redraws the surface without changing the window.
    pub fn redraw(&mut self) {
        self.surface.set_view(&self.display);
    }

    /// Returns the drawing surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns the drawing surface mutably.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Consumes the controller and returns its surface.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Snapshot of the controller state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        let (horizontal_selector, vertical_selector) = self.selector_ranges();
        ViewportDebugInfo {
            extent: self.extent,
            display_rect: self.display,
            horizontal_selector,
            vertical_selector,
            horizontal_direction: self.horizontal.direction(),
            vertical_direction: self.vertical.direction(),
            window_policy: self.window_policy,
            min_window: self.min_window,
            revision: self.revision,
        }
    }

    fn mapping_mut(&mut self, axis: Axis) -> &mut AxisMapping {
        match axis {
            Axis::Horizontal => &mut self.horizontal,
            Axis::Vertical => &mut self.vertical,
        }
    }

    fn sync_axis(&mut self, axis: Axis, lower: f64, upper: f64) -> SyncOutcome {
        let result = self
            .mapping(axis)
            .selector_range_to_world(lower, upper)
            .and_then(|world| self.fit_window(axis, world))
            .and_then(|world| match axis {
                Axis::Horizontal => self.display.with_x_range(world),
                Axis::Vertical => self.display.with_y_range(world),
            });
        match result {
            Ok(candidate) => self.commit(candidate),
            Err(err) => match axis {
                Axis::Horizontal => Self::reject("horizontal selector", err),
                Axis::Vertical => Self::reject("vertical selector", err),
            },
        }
    }

    /// Applies the window policy to a proposed world range on `axis`.
    fn fit_window(&self, axis: Axis, world: Range<f64>) -> Result<Range<f64>, RectError> {
        let (bounds, min_span) = match axis {
            Axis::Horizontal => (self.extent.x_range(), self.min_window.width),
            Axis::Vertical => (self.extent.y_range(), self.min_window.height),
        };
        let span = world.end - world.start;
        if span > 0.0 && span >= min_span {
            return Ok(world);
        }
        let err = if span > 0.0 {
            RectError::WindowTooSmall { span, min: min_span }
        } else {
            match axis {
                Axis::Horizontal => RectError::EmptyWidth {
                    min: world.start,
                    max: world.end,
                },
                Axis::Vertical => RectError::EmptyHeight {
                    min: world.start,
                    max: world.end,
                },
            }
        };
        match self.window_policy {
            WindowPolicy::Reject => Err(err),
            WindowPolicy::ClampToMinimum => {
                if min_span <= 0.0 {
                    return Err(err);
                }
                let widened = widen_to_minimum(world.clone(), bounds, min_span);
                log::debug!("{axis:?} window {world:?} widened to {widened:?}");
                Ok(widened)
            }
        }
    }

    fn commit(&mut self, candidate: DisplayRect) -> SyncOutcome {
        if candidate == self.display {
            return SyncOutcome::Unchanged;
        }
        self.display = candidate;
        self.revision += 1;
        log::trace!("viewport r{} -> {candidate:?}", self.revision);
        self.surface.set_view(&self.display);
        SyncOutcome::Updated
    }

    fn reject(source: &str, err: RectError) -> SyncOutcome {
        log::warn!("{source} update rejected, keeping previous window: {err}");
        SyncOutcome::Rejected(err)
    }
}

fn zoom_axis(span: Range<f64>, anchor: f64, factor: f64) -> Range<f64> {
    (anchor - (anchor - span.start) / factor)..(anchor + (span.end - anchor) / factor)
}

/// Widens `world` about its center to `min_span`, sliding it inside `bounds`.
///
/// The target span never exceeds the bounds. Ranges already wide enough are
/// returned as-is.
fn widen_to_minimum(world: Range<f64>, bounds: Range<f64>, min_span: f64) -> Range<f64> {
    let target = min_span.min(bounds.end - bounds.start);
    if world.end - world.start >= target {
        return world;
    }
    let center = (world.start + world.end) * 0.5;
    let start = (center - target * 0.5).min(bounds.end - target).max(bounds.start);
    start..start + target
}

/// Debug snapshot of a [`ViewportController`] state.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportDebugInfo {
    /// Configured extent.
    pub extent: Extent,
    /// Current display rectangle.
    pub display_rect: DisplayRect,
    /// Horizontal selector range describing the display rectangle.
    pub horizontal_selector: Range<f64>,
    /// Vertical selector range describing the display rectangle.
    pub vertical_selector: Range<f64>,
    /// Horizontal mapping direction.
    pub horizontal_direction: AxisDirection,
    /// Vertical mapping direction.
    pub vertical_direction: AxisDirection,
    /// Policy for too-small windows.
    pub window_policy: WindowPolicy,
    /// Minimum window size in world units.
    pub min_window: Size,
    /// Current revision.
    pub revision: u64,
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::{Point, Size, Vec2};

    use super::{SyncOutcome, ViewportController};
    use crate::{
        Axis, AxisDirection, DisplayRect, DrawingSurface, RangeSnapshot, RectError, WindowPolicy,
    };

    #[derive(Debug, Default)]
    struct RecordingSurface {
        views: Vec<DisplayRect>,
    }

    impl DrawingSurface for RecordingSurface {
        fn set_view(&mut self, rect: &DisplayRect) {
            self.views.push(*rect);
        }
    }

    fn default_extent() -> DisplayRect {
        DisplayRect::new(-4000.0, 4000.0, -6000.0, 6000.0).unwrap()
    }

    fn controller() -> ViewportController<RecordingSurface> {
        ViewportController::new(default_extent(), RecordingSurface::default())
    }

    #[test]
    fn starts_at_full_extent_and_draws_once() {
        let c = controller();
        assert_eq!(c.display_rect(), default_extent());
        assert_eq!(c.surface().views, [default_extent()]);
        assert_eq!(c.revision(), 0);
    }

    #[test]
    fn full_horizontal_range_maps_to_full_extent() {
        let mut c = controller();
        c.on_horizontal_change(&RangeSnapshot::new(0.25, 0.5));
        c.on_horizontal_change(&RangeSnapshot::new(0.0, 1.0));
        let r = c.display_rect();
        assert_eq!(r.min_x(), -4000.0);
        assert_eq!(r.max_x(), 4000.0);
    }

    #[test]
    fn half_window_over_default_extent() {
        let mut c = controller();
        let outcome = c.on_horizontal_change(&RangeSnapshot::new(0.25, 0.75));
        assert_eq!(outcome, SyncOutcome::Updated);
        let r = c.display_rect();
        assert_eq!(r.min_x(), -2000.0);
        assert_eq!(r.max_x(), 2000.0);
        assert_eq!(c.surface().views.last(), Some(&r));
        assert_eq!(c.revision(), 1);
    }

    #[test]
    fn empty_selector_window_is_rejected() {
        let mut c = controller();
        c.on_horizontal_change(&RangeSnapshot::new(0.25, 0.75));
        let before = c.display_rect();
        let draws = c.surface().views.len();

        let outcome = c.on_horizontal_change(&RangeSnapshot::new(0.5, 0.5));
        assert_eq!(
            outcome,
            SyncOutcome::Rejected(RectError::EmptyWidth { min: 0.0, max: 0.0 })
        );
        assert_eq!(c.display_rect(), before);
        assert_eq!(c.surface().views.len(), draws);

        let outcome = c.on_vertical_change(&RangeSnapshot::new(0.3, 0.3));
        assert!(outcome.is_rejected());
        assert_eq!(c.display_rect(), before);
    }

    #[test]
    fn reversed_and_nan_readings_are_rejected() {
        let mut c = controller();
        assert!(
            c.on_horizontal_change(&RangeSnapshot::new(0.9, 0.1))
                .is_rejected()
        );
        assert!(
            c.on_vertical_change(&RangeSnapshot::new(f64::NAN, 0.1))
                .is_rejected()
        );
        assert_eq!(c.display_rect(), default_extent());
    }

    #[test]
    fn axes_are_independent() {
        let mut c = controller();
        c.on_vertical_change(&RangeSnapshot::new(0.0, 0.5));
        let y_before = c.display_rect().y_range();

        c.on_horizontal_change(&RangeSnapshot::new(0.1, 0.2));
        assert_eq!(c.display_rect().y_range(), y_before);

        let x_before = c.display_rect().x_range();
        c.on_vertical_change(&RangeSnapshot::new(0.6, 0.9));
        assert_eq!(c.display_rect().x_range(), x_before);
    }

    #[test]
    fn vertical_axis_is_inverted() {
        let mut c = controller();
        // Top half of the track shows the upper half of the world.
        c.on_vertical_change(&RangeSnapshot::new(0.0, 0.5));
        assert_eq!(c.display_rect().y_range(), 0.0..6000.0);

        c.set_direction(Axis::Vertical, AxisDirection::Forward);
        c.on_vertical_change(&RangeSnapshot::new(0.0, 0.5));
        assert_eq!(c.display_rect().y_range(), -6000.0..0.0);
    }

    #[test]
    fn every_valid_reading_keeps_invariant() {
        let mut c = controller();
        let steps = 20;
        for i in 0..steps {
            for j in (i + 1)..=steps {
                let lower = f64::from(i) / f64::from(steps);
                let upper = f64::from(j) / f64::from(steps);
                let h = c.on_horizontal_change(&RangeSnapshot::new(lower, upper));
                let v = c.on_vertical_change(&RangeSnapshot::new(lower, upper));
                assert!(!h.is_rejected() && !v.is_rejected(), "{lower}..{upper}");
                let r = c.display_rect();
                assert!(r.min_x() < r.max_x());
                assert!(r.min_y() < r.max_y());
            }
        }
    }

    #[test]
    fn clamp_policy_widens_to_minimum_window() {
        let mut c = controller();
        c.set_window_policy(WindowPolicy::ClampToMinimum);
        c.set_min_window_size(Size::new(100.0, 200.0));

        let outcome = c.on_horizontal_change(&RangeSnapshot::new(0.5, 0.5));
        assert_eq!(outcome, SyncOutcome::Updated);
        assert_eq!(c.display_rect().x_range(), -50.0..50.0);

        // At the edge of the track the window slides back inside the extent.
        c.on_vertical_change(&RangeSnapshot::new(0.0, 0.0));
        assert_eq!(c.display_rect().y_range(), 5800.0..6000.0);
    }

    #[test]
    fn reject_policy_honors_minimum_window() {
        let mut c = controller();
        c.set_min_window_size(Size::new(1000.0, 1000.0));
        let outcome = c.on_horizontal_change(&RangeSnapshot::new(0.5, 0.5625));
        assert_eq!(
            outcome,
            SyncOutcome::Rejected(RectError::WindowTooSmall {
                span: 500.0,
                min: 1000.0
            })
        );
        assert_eq!(c.display_rect(), default_extent());
    }

    #[test]
    fn clamp_policy_with_zero_minimum_still_rejects_empty() {
        let mut c = controller();
        c.set_window_policy(WindowPolicy::ClampToMinimum);
        assert!(
            c.on_horizontal_change(&RangeSnapshot::new(0.2, 0.2))
                .is_rejected()
        );
    }

    #[test]
    fn unchanged_update_does_not_redraw() {
        let mut c = controller();
        let outcome = c.on_horizontal_change(&RangeSnapshot::new(0.0, 1.0));
        assert_eq!(outcome, SyncOutcome::Unchanged);
        assert_eq!(c.surface().views.len(), 1);
        assert_eq!(c.revision(), 0);
    }

    #[test]
    fn selector_ranges_round_trip() {
        let mut c = controller();
        c.on_horizontal_change(&RangeSnapshot::new(0.1, 0.4));
        c.on_vertical_change(&RangeSnapshot::new(0.2, 0.7));

        let (h, v) = c.selector_ranges();
        assert!((h.start - 0.1).abs() < 1e-12 && (h.end - 0.4).abs() < 1e-12);
        assert!((v.start - 0.2).abs() < 1e-12 && (v.end - 0.7).abs() < 1e-12);

        let revision = c.revision();
        c.on_horizontal_change(&RangeSnapshot::new(h.start, h.end));
        c.on_vertical_change(&RangeSnapshot::new(v.start, v.end));
        let r = c.display_rect();
        assert!((r.min_x() - -3200.0).abs() < 1e-9);
        assert!(c.revision() - revision <= 2);
    }

    #[test]
    fn pan_stays_inside_extent() {
        let mut c = controller();
        c.on_horizontal_change(&RangeSnapshot::new(0.0, 0.5));
        assert_eq!(c.pan_by(Vec2::new(10.0, 10.0)), SyncOutcome::Updated);
        assert_eq!(c.display_rect().x_range(), -3990.0..10.0);
        // Y already spans the whole extent; it cannot move.
        assert_eq!(c.display_rect().y_range(), -6000.0..6000.0);

        c.pan_by(Vec2::new(1.0e6, 0.0));
        assert_eq!(c.display_rect().x_range(), 0.0..4000.0);
        assert_eq!(c.pan_by(Vec2::ZERO), SyncOutcome::Unchanged);
    }

    #[test]
    fn zoom_keeps_anchor_and_respects_extent() {
        let mut c = controller();
        let anchor = Point::new(1000.0, -3000.0);
        c.zoom_about(anchor, 4.0);
        let r = c.display_rect();
        assert_eq!(r.width(), 2000.0);
        assert_eq!(r.height(), 3000.0);
        // The anchor stays at the same fraction of the window.
        assert!(((anchor.x - r.min_x()) / r.width() - 5000.0 / 8000.0).abs() < 1e-12);

        // Zooming out past the extent clamps to it.
        c.zoom_about(anchor, 0.01);
        assert_eq!(c.display_rect(), default_extent());

        assert_eq!(c.zoom_about(anchor, 0.0), SyncOutcome::Unchanged);
        assert_eq!(c.zoom_about(anchor, f64::NAN), SyncOutcome::Unchanged);
    }

    #[test]
    fn zoom_stops_at_minimum_window() {
        let mut c = controller();
        c.set_min_window_size(Size::new(10.0, 10.0));
        c.zoom_about(Point::ORIGIN, 1.0e6);
        let r = c.display_rect();
        assert_eq!(r.width(), 10.0);
        assert_eq!(r.height(), 10.0);
    }

    #[test]
    fn set_display_rect_clamps_into_extent() {
        let mut c = controller();
        let wanted = DisplayRect::new(3000.0, 5000.0, -100.0, 100.0).unwrap();
        assert_eq!(c.set_display_rect(wanted), SyncOutcome::Updated);
        assert_eq!(
            c.display_rect(),
            DisplayRect::new(2000.0, 4000.0, -100.0, 100.0).unwrap()
        );
    }

    #[test]
    fn reset_and_initialize_show_full_extent() {
        let mut c = controller();
        c.on_horizontal_change(&RangeSnapshot::new(0.25, 0.75));
        assert_eq!(c.reset(), SyncOutcome::Updated);
        assert_eq!(c.display_rect(), default_extent());

        let small = DisplayRect::new(0.0, 10.0, 0.0, 10.0).unwrap();
        c.initialize(small);
        assert_eq!(c.display_rect(), small);
        assert_eq!(c.extent(), small);
        c.on_horizontal_change(&RangeSnapshot::new(0.5, 1.0));
        assert_eq!(c.display_rect().x_range(), 5.0..10.0);

        c.initialize(default_extent());
        assert_eq!(c.display_rect(), default_extent());
    }

    #[test]
    fn debug_info_reflects_state() {
        let mut c = controller();
        c.on_horizontal_change(&RangeSnapshot::new(0.25, 0.75));
        let info = c.debug_info();
        assert_eq!(info.display_rect, c.display_rect());
        assert_eq!(info.horizontal_direction, AxisDirection::Forward);
        assert_eq!(info.vertical_direction, AxisDirection::Inverted);
        assert_eq!(info.window_policy, WindowPolicy::Reject);
        assert_eq!(info.revision, 1);
    }
}
