// Copyright 2026 the Gridpaper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::{Cell, Ref, RefCell};
use core::ops::{Deref, DerefMut, Range};

use gridpaper_grid::{GridSeries, GridSurface};
use gridpaper_range::DualRange;
use gridpaper_view::{
    Axis, AxisDirection, CallbackId, DisplayRect, ObservableRange, RangeBound, RangeSnapshot,
    SyncOutcome, ViewportController, WindowPolicy,
};
use kurbo::{Point, Size, Vec2};

use crate::config::{ConfigError, GridPaperConfig};

type SharedController<S> = Rc<RefCell<ViewportController<S>>>;

/// Selector-space slack below which a bar and the window count as agreeing.
const DRIFT_TOLERANCE: f64 = 1e-9;

/// A grid-paper canvas with a horizontal and a vertical range bar.
///
/// The paper owns both bars and the [`ViewportController`]. Moving either bar
/// (by pointer, wheel, or programmatically) updates the controller through
/// callbacks registered at construction. Going the other way, [`pan_by`],
/// [`zoom_about`], and [`reset`] update the controller first and then move
/// the bars to match.
///
/// When the controller refuses a bar reading, or widens it to the minimum
/// window, the bar is moved back onto the window actually shown as soon as
/// the [`BarMut`] handle it was changed through is dropped.
///
/// The bar callbacks only hold weak references to the controller, and are
/// removed again by [`destruct`] or on drop.
///
/// [`pan_by`]: GridPaper::pan_by
/// [`zoom_about`]: GridPaper::zoom_about
/// [`reset`]: GridPaper::reset
/// [`destruct`]: GridPaper::destruct
#[derive(Debug)]
pub struct GridPaper<S: GridSurface + 'static> {
    config: GridPaperConfig,
    series: GridSeries,
    controller: SharedController<S>,
    horizontal: DualRange,
    vertical: DualRange,
    corrections: Rc<Corrections>,
    subscriptions: Vec<(Axis, CallbackId)>,
}

impl<S: GridSurface + 'static> GridPaper<S> {
    /// Validates `config`, shows its full extent on `surface`, and wires up both bars.
    ///
    /// The surface is handed the configured grid ladder before its first
    /// frame. `config.canvas_id` names the element the surface draws into;
    /// browser hosts pass it to `WebCanvasSurface::from_canvas_id` when
    /// building the surface.
    pub fn new(config: GridPaperConfig, mut surface: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let extent = config.extent()?;
        let series = config.series()?;
        surface.set_series(&series);
        let controller = Rc::new(RefCell::new(ViewportController::new(extent, surface)));

        let mut paper = Self {
            config,
            series,
            controller,
            horizontal: DualRange::horizontal(),
            vertical: DualRange::vertical(),
            corrections: Rc::new(Corrections::default()),
            subscriptions: Vec::with_capacity(4),
        };
        paper.sync_bars();
        paper.subscribe(Axis::Horizontal);
        paper.subscribe(Axis::Vertical);
        log::debug!("grid paper `{}` ready over {extent:?}", paper.config.canvas_id);
        Ok(paper)
    }

    fn subscribe(&mut self, axis: Axis) {
        for bound in [RangeBound::Lower, RangeBound::Upper] {
            let weak = Rc::downgrade(&self.controller);
            let corrections = Rc::clone(&self.corrections);
            let callback = Box::new(move |range: &RangeSnapshot| {
                if !forward(&weak, axis, range) {
                    corrections.mark(axis);
                }
            });
            let id = self.raw_bar_mut(axis).subscribe(bound, callback);
            self.subscriptions.push((axis, id));
        }
    }

    /// The configuration the paper was built from.
    #[must_use]
    pub fn config(&self) -> &GridPaperConfig {
        &self.config
    }

    /// The validated grid ladder from the configuration.
    #[must_use]
    pub fn series(&self) -> &GridSeries {
        &self.series
    }

    /// The current visible window.
    #[must_use]
    pub fn display_rect(&self) -> DisplayRect {
        self.controller.borrow().display_rect()
    }

    /// Borrows the controller.
    ///
    /// Use the paper's own setters to change it, so the bars follow.
    #[must_use]
    pub fn controller(&self) -> Ref<'_, ViewportController<S>> {
        self.controller.borrow()
    }

    /// The horizontal bar.
    #[must_use]
    pub fn horizontal_bar(&self) -> &DualRange {
        &self.horizontal
    }

    /// The vertical bar.
    #[must_use]
    pub fn vertical_bar(&self) -> &DualRange {
        &self.vertical
    }

    /// The horizontal bar, for forwarding pointer or wheel input.
    pub fn horizontal_bar_mut(&mut self) -> BarMut<'_, S> {
        self.bar_mut(Axis::Horizontal)
    }

    /// The vertical bar, for forwarding pointer or wheel input.
    pub fn vertical_bar_mut(&mut self) -> BarMut<'_, S> {
        self.bar_mut(Axis::Vertical)
    }

    /// The bar driving `axis`.
    #[must_use]
    pub fn bar(&self, axis: Axis) -> &DualRange {
        match axis {
            Axis::Horizontal => &self.horizontal,
            Axis::Vertical => &self.vertical,
        }
    }

    /// The bar driving `axis`, mutably.
    ///
    /// Dropping the returned handle moves the bar back onto the window if the
    /// controller did not take its reading as-is.
    pub fn bar_mut(&mut self, axis: Axis) -> BarMut<'_, S> {
        BarMut { paper: self, axis }
    }

    fn raw_bar_mut(&mut self, axis: Axis) -> &mut DualRange {
        match axis {
            Axis::Horizontal => &mut self.horizontal,
            Axis::Vertical => &mut self.vertical,
        }
    }

    /// Re-reads the horizontal bar into the controller.
    pub fn on_horizontal_change(&mut self) -> SyncOutcome {
        self.reread(Axis::Horizontal)
    }

    /// Re-reads the vertical bar into the controller.
    pub fn on_vertical_change(&mut self) -> SyncOutcome {
        self.reread(Axis::Vertical)
    }

    /// Shows `rect` (clamped to the extent) and moves both bars to match.
    pub fn set_display_rect(&mut self, rect: DisplayRect) -> SyncOutcome {
        let outcome = self.controller.borrow_mut().set_display_rect(rect);
        self.after(outcome)
    }

    /// Pans by `delta` world units and moves both bars to match.
    pub fn pan_by(&mut self, delta: Vec2) -> SyncOutcome {
        let outcome = self.controller.borrow_mut().pan_by(delta);
        self.after(outcome)
    }

    /// Pans by a device-space drag of `delta` pixels on a canvas of `view` size.
    ///
    /// Dragging right or down moves the content with the pointer, so the
    /// window moves left or up in world space.
    pub fn pan_by_device(&mut self, delta: Vec2, view: Size) -> SyncOutcome {
        if !(view.width > 0.0 && view.height > 0.0) {
            return SyncOutcome::Unchanged;
        }
        let rect = self.display_rect();
        let world = Vec2::new(
            -delta.x * rect.width() / view.width,
            delta.y * rect.height() / view.height,
        );
        self.pan_by(world)
    }

    /// Zooms about a world-space anchor (`factor > 1` zooms in) and moves both bars to match.
    pub fn zoom_about(&mut self, anchor: Point, factor: f64) -> SyncOutcome {
        let outcome = self.controller.borrow_mut().zoom_about(anchor, factor);
        self.after(outcome)
    }

    /// Shows the full extent again and moves both bars to match.
    pub fn reset(&mut self) -> SyncOutcome {
        let outcome = self.controller.borrow_mut().reset();
        self.after(outcome)
    }

    /// Sets how bar readings narrower than the minimum window are handled.
    pub fn set_window_policy(&mut self, policy: WindowPolicy) {
        self.controller.borrow_mut().set_window_policy(policy);
    }

    /// Sets the minimum window size in world units, for later bar readings.
    pub fn set_min_window_size(&mut self, size: Size) {
        self.controller.borrow_mut().set_min_window_size(size);
    }

    /// Sets which end of `axis`'s bar is the low end of the extent.
    ///
    /// The window stays put; the bar moves to describe it under the new
    /// direction.
    pub fn set_direction(&mut self, axis: Axis, direction: AxisDirection) {
        self.controller.borrow_mut().set_direction(axis, direction);
        self.sync_bar(axis);
    }

    /// Sets the value span of `axis`'s bar (default `0..1`).
    ///
    /// The bar's domain becomes `span` and its handles move to describe the
    /// current window. Unusable spans are ignored.
    pub fn set_selector_span(&mut self, axis: Axis, span: Range<f64>) {
        let span = {
            let mut controller = self.controller.borrow_mut();
            controller.set_selector_span(axis, span);
            controller.mapping(axis).selector_span()
        };
        self.raw_bar_mut(axis).set_domain(span);
        self.sync_bar(axis);
    }

    /// Number of live bar callbacks owned by the paper.
    #[must_use]
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Disconnects both bars from the controller.
    ///
    /// Afterwards the bars still work but no longer move the window. Calling
    /// this twice is harmless.
    pub fn destruct(&mut self) {
        for (axis, id) in core::mem::take(&mut self.subscriptions) {
            if !self.raw_bar_mut(axis).unsubscribe(id) {
                log::warn!("callback {} on the {axis:?} bar was already gone", id.get());
            }
        }
        log::trace!("grid paper `{}` disconnected", self.config.canvas_id);
    }

    fn reread(&mut self, axis: Axis) -> SyncOutcome {
        let reading = RangeSnapshot::of(self.bar(axis));
        let (outcome, agrees) = {
            let mut controller = self.controller.borrow_mut();
            let outcome = controller.on_change(axis, &reading);
            (outcome, agrees_with(&controller, axis, &reading))
        };
        if outcome.is_rejected() || !agrees {
            self.sync_bar(axis);
        }
        outcome
    }

    fn after(&mut self, outcome: SyncOutcome) -> SyncOutcome {
        if outcome.is_updated() {
            self.sync_bars();
        }
        outcome
    }

    /// Moves any bar whose last reading the controller did not take as-is.
    fn flush_corrections(&mut self) {
        for axis in [Axis::Horizontal, Axis::Vertical] {
            if self.corrections.take(axis) {
                log::debug!("{axis:?} bar moved back onto the displayed window");
                self.sync_bar(axis);
            }
        }
    }

    fn sync_bars(&mut self) {
        self.sync_bar(Axis::Horizontal);
        self.sync_bar(Axis::Vertical);
    }

    fn sync_bar(&mut self, axis: Axis) {
        let range = {
            let (h, v) = self.controller.borrow().selector_ranges();
            match axis {
                Axis::Horizontal => h,
                Axis::Vertical => v,
            }
        };
        self.raw_bar_mut(axis).set_range(range.start, range.end);
        // The write-back itself is taken as-is, or the bar has clamped it and
        // the controller now follows the bar.
        self.corrections.take(axis);
    }
}

impl<S: GridSurface + 'static> Drop for GridPaper<S> {
    fn drop(&mut self) {
        self.destruct();
    }
}

/// Mutable access to one of a [`GridPaper`]'s bars.
///
/// Derefs to the [`DualRange`]. On drop, a bar the controller disagreed with
/// is moved back onto the displayed window.
#[derive(Debug)]
pub struct BarMut<'a, S: GridSurface + 'static> {
    paper: &'a mut GridPaper<S>,
    axis: Axis,
}

impl<S: GridSurface + 'static> Deref for BarMut<'_, S> {
    type Target = DualRange;

    fn deref(&self) -> &DualRange {
        self.paper.bar(self.axis)
    }
}

impl<S: GridSurface + 'static> DerefMut for BarMut<'_, S> {
    fn deref_mut(&mut self) -> &mut DualRange {
        self.paper.raw_bar_mut(self.axis)
    }
}

impl<S: GridSurface + 'static> Drop for BarMut<'_, S> {
    fn drop(&mut self) {
        self.paper.flush_corrections();
    }
}

/// Bars waiting to be moved back onto the displayed window.
#[derive(Debug, Default)]
struct Corrections {
    horizontal: Cell<bool>,
    vertical: Cell<bool>,
}

impl Corrections {
    fn flag(&self, axis: Axis) -> &Cell<bool> {
        match axis {
            Axis::Horizontal => &self.horizontal,
            Axis::Vertical => &self.vertical,
        }
    }

    fn mark(&self, axis: Axis) {
        self.flag(axis).set(true);
    }

    fn take(&self, axis: Axis) -> bool {
        self.flag(axis).replace(false)
    }
}

/// Feeds a bar reading into the controller.
///
/// Returns `false` when the bar no longer describes the displayed window.
fn forward<S: GridSurface>(
    controller: &Weak<RefCell<ViewportController<S>>>,
    axis: Axis,
    range: &RangeSnapshot,
) -> bool {
    let Some(controller) = controller.upgrade() else {
        log::trace!("{axis:?} bar changed after its controller was dropped");
        return true;
    };
    let Ok(mut controller) = controller.try_borrow_mut() else {
        log::warn!("{axis:?} bar changed while the controller was borrowed; ignored");
        return false;
    };
    let outcome = controller.on_change(axis, range);
    !outcome.is_rejected() && agrees_with(&controller, axis, range)
}

fn agrees_with<S: GridSurface>(
    controller: &ViewportController<S>,
    axis: Axis,
    reading: &RangeSnapshot,
) -> bool {
    let (h, v) = controller.selector_ranges();
    let shown = match axis {
        Axis::Horizontal => h,
        Axis::Vertical => v,
    };
    near(shown.start, reading.lower) && near(shown.end, reading.upper)
}

fn near(a: f64, b: f64) -> bool {
    let diff = a - b;
    -DRIFT_TOLERANCE <= diff && diff <= DRIFT_TOLERANCE
}
