// Copyright 2026 the Gridpaper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use kurbo::{Affine, Point, Rect, Vec2};

use crate::error::RectError;

/// The configured total coordinate extent that selectors map onto.
///
/// It shares the validity rules of [`DisplayRect`]: both spans are finite and
/// strictly positive.
pub type Extent = DisplayRect;

/// A visible window over the world coordinate plane.
///
/// The fields are private so that every `DisplayRect` in existence satisfies
/// `min_x < max_x` and `min_y < max_y` with finite coordinates. World Y grows
/// upward; see [`DisplayRect::view_transform`] for the mapping onto a device
/// rectangle whose Y grows downward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayRect {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
}

impl DisplayRect {
    /// Creates a rectangle from its four bounds, validating the invariant.
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Result<Self, RectError> {
        if !(min_x.is_finite() && max_x.is_finite() && min_y.is_finite() && max_y.is_finite()) {
            return Err(RectError::NonFinite);
        }
        if min_x >= max_x {
            return Err(RectError::EmptyWidth {
                min: min_x,
                max: max_x,
            });
        }
        if min_y >= max_y {
            return Err(RectError::EmptyHeight {
                min: min_y,
                max: max_y,
            });
        }
        Ok(Self {
            min_x,
            max_x,
            min_y,
            max_y,
        })
    }

    /// Creates a rectangle from a pair of axis ranges.
    pub fn from_ranges(x: Range<f64>, y: Range<f64>) -> Result<Self, RectError> {
        Self::new(x.start, x.end, y.start, y.end)
    }

    /// Converts a Kurbo rectangle, treating `x0`/`y0` as the minimum corner.
    ///
    /// The rectangle is not normalized first; a rect with `x0 > x1` is an
    /// error rather than silently flipped.
    pub fn from_rect(rect: Rect) -> Result<Self, RectError> {
        Self::new(rect.x0, rect.x1, rect.y0, rect.y1)
    }

    /// Minimum X.
    #[must_use]
    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    /// Maximum X.
    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    /// Minimum Y.
    #[must_use]
    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    /// Maximum Y.
    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    /// Horizontal span; always positive.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Vertical span; always positive.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Center point in world coordinates.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) * 0.5,
            (self.min_y + self.max_y) * 0.5,
        )
    }

    /// The X bounds as a range.
    #[must_use]
    pub fn x_range(&self) -> Range<f64> {
        self.min_x..self.max_x
    }

    /// The Y bounds as a range.
    #[must_use]
    pub fn y_range(&self) -> Range<f64> {
        self.min_y..self.max_y
    }

    /// Returns this rectangle as a Kurbo rect with `(x0, y0)` at the minimum corner.
    #[must_use]
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.min_x, self.min_y, self.max_x, self.max_y)
    }

    /// Returns `true` if `point` lies inside or on the boundary.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }

    /// Returns a copy with the X bounds replaced.
    pub fn with_x_range(&self, x: Range<f64>) -> Result<Self, RectError> {
        Self::new(x.start, x.end, self.min_y, self.max_y)
    }

    /// Returns a copy with the Y bounds replaced.
    pub fn with_y_range(&self, y: Range<f64>) -> Result<Self, RectError> {
        Self::new(self.min_x, self.max_x, y.start, y.end)
    }

    /// Returns a copy translated by `delta` world units.
    ///
    /// Translation never changes the spans, so the invariant holds as long as
    /// the result stays finite.
    pub fn translated(&self, delta: Vec2) -> Result<Self, RectError> {
        Self::new(
            self.min_x + delta.x,
            self.max_x + delta.x,
            self.min_y + delta.y,
            self.max_y + delta.y,
        )
    }

    /// Moves (and if necessary shrinks) this rectangle so it lies within `extent`.
    ///
    /// Each axis keeps its span when it fits, sliding back inside the extent;
    /// a span larger than the extent is reduced to the extent's span.
    #[must_use]
    pub fn clamped_within(&self, extent: &Extent) -> Self {
        let (min_x, max_x) = clamp_axis(self.x_range(), extent.x_range());
        let (min_y, max_y) = clamp_axis(self.y_range(), extent.y_range());
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// World-to-device transform that stretches this window over `view`.
    ///
    /// The axes are scaled independently. World `max_y` lands on the top edge
    /// of `view` (`view.y0`) and world `min_y` on the bottom edge, so the
    /// transform flips Y. Returns `None` when `view` has no area.
    #[must_use]
    pub fn view_transform(&self, view: Rect) -> Option<Affine> {
        let view = view.abs();
        if view.width() <= 0.0 || view.height() <= 0.0 {
            return None;
        }
        let sx = view.width() / self.width();
        let sy = view.height() / self.height();
        Some(Affine::new([
            sx,
            0.0,
            0.0,
            -sy,
            view.x0 - self.min_x * sx,
            view.y0 + self.max_y * sy,
        ]))
    }
}

impl From<DisplayRect> for Rect {
    fn from(rect: DisplayRect) -> Self {
        rect.to_rect()
    }
}

impl TryFrom<Rect> for DisplayRect {
    type Error = RectError;

    fn try_from(rect: Rect) -> Result<Self, Self::Error> {
        Self::from_rect(rect)
    }
}

fn clamp_axis(span: Range<f64>, bounds: Range<f64>) -> (f64, f64) {
    let len = (span.end - span.start).min(bounds.end - bounds.start);
    let mut start = span.start.max(bounds.start);
    if start + len > bounds.end {
        start = bounds.end - len;
    }
    (start, start + len)
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Vec2};

    use super::DisplayRect;
    use crate::RectError;

    #[test]
    fn new_rejects_empty_and_non_finite() {
        assert_eq!(
            DisplayRect::new(1.0, 1.0, 0.0, 1.0),
            Err(RectError::EmptyWidth { min: 1.0, max: 1.0 })
        );
        assert_eq!(
            DisplayRect::new(0.0, 1.0, 2.0, -2.0),
            Err(RectError::EmptyHeight {
                min: 2.0,
                max: -2.0
            })
        );
        assert_eq!(
            DisplayRect::new(f64::NAN, 1.0, 0.0, 1.0),
            Err(RectError::NonFinite)
        );
        assert_eq!(
            DisplayRect::new(0.0, f64::INFINITY, 0.0, 1.0),
            Err(RectError::NonFinite)
        );
    }

    #[test]
    fn accessors_and_kurbo_conversion() {
        let r = DisplayRect::new(-4000.0, 4000.0, -6000.0, 6000.0).unwrap();
        assert_eq!(r.width(), 8000.0);
        assert_eq!(r.height(), 12000.0);
        assert_eq!(r.center(), Point::ORIGIN);

        let k: Rect = r.into();
        assert_eq!(k, Rect::new(-4000.0, -6000.0, 4000.0, 6000.0));
        assert_eq!(DisplayRect::try_from(k), Ok(r));

        // A flipped Kurbo rect is refused rather than normalized.
        assert!(DisplayRect::from_rect(Rect::new(1.0, 0.0, 0.0, 1.0)).is_err());
    }

    #[test]
    fn clamped_within_slides_and_shrinks() {
        let extent = DisplayRect::new(0.0, 100.0, 0.0, 100.0).unwrap();

        let slid = DisplayRect::new(90.0, 110.0, -5.0, 5.0)
            .unwrap()
            .clamped_within(&extent);
        assert_eq!(slid, DisplayRect::new(80.0, 100.0, 0.0, 10.0).unwrap());

        let shrunk = DisplayRect::new(-50.0, 150.0, 10.0, 20.0)
            .unwrap()
            .clamped_within(&extent);
        assert_eq!(shrunk, DisplayRect::new(0.0, 100.0, 10.0, 20.0).unwrap());
    }

    #[test]
    fn translated_keeps_spans() {
        let r = DisplayRect::new(0.0, 10.0, 0.0, 20.0).unwrap();
        let t = r.translated(Vec2::new(10.0, 10.0)).unwrap();
        assert_eq!(t.width(), r.width());
        assert_eq!(t.height(), r.height());
        assert_eq!(t.min_x(), 10.0);
        assert_eq!(t.min_y(), 10.0);
    }

    #[test]
    fn view_transform_flips_y_and_fills_view() {
        let r = DisplayRect::new(-100.0, 100.0, -50.0, 50.0).unwrap();
        let view = Rect::new(0.0, 0.0, 400.0, 100.0);
        let xf = r.view_transform(view).unwrap();

        let top_left = xf * Point::new(-100.0, 50.0);
        assert!((top_left.x - 0.0).abs() < 1e-9);
        assert!((top_left.y - 0.0).abs() < 1e-9);

        let bottom_right = xf * Point::new(100.0, -50.0);
        assert!((bottom_right.x - 400.0).abs() < 1e-9);
        assert!((bottom_right.y - 100.0).abs() < 1e-9);

        assert!(r.view_transform(Rect::new(0.0, 0.0, 0.0, 10.0)).is_none());
    }
}
