// Copyright 2026 the Gridpaper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid-line generation for a visible window.

use alloc::vec::Vec;
use core::ops::Range;

use gridpaper_view::DisplayRect;
use kurbo::{Affine, Line, Point, Rect, Size};

use crate::series::{GridLevel, GridSeries};

/// On-screen spacing thresholds used to pick a grid level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridStyle {
    /// Minimum device-space distance between major lines.
    pub min_major_spacing_px: f64,
    /// Minor lines are dropped when closer than this in device space.
    pub min_minor_spacing_px: f64,
    /// Upper bound on lines emitted per axis.
    pub max_lines_per_axis: usize,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            min_major_spacing_px: 48.0,
            min_minor_spacing_px: 8.0,
            max_lines_per_axis: 4096,
        }
    }
}

/// How a grid line should be drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// A subdivision line.
    Minor,
    /// A major line.
    Major,
    /// The world axis through the origin.
    Axis,
}

/// A single grid line at a world coordinate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLine {
    /// World X for vertical lines, world Y for horizontal lines.
    pub position: f64,
    /// Line kind.
    pub kind: LineKind,
}

/// Grid lines covering one visible window.
#[derive(Clone, Debug, PartialEq)]
pub struct GridLines {
    /// The level the lines were generated at.
    pub level: GridLevel,
    /// Whether minor lines were emitted.
    pub show_minor: bool,
    /// Lines of constant X, ascending.
    pub vertical: Vec<GridLine>,
    /// Lines of constant Y, ascending.
    pub horizontal: Vec<GridLine>,
}

impl GridLines {
    /// Total number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertical.len() + self.horizontal.len()
    }

    /// Returns `true` if no lines were generated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertical.is_empty() && self.horizontal.is_empty()
    }

    /// Maps the lines into device space, spanning the full `view` rectangle.
    ///
    /// `transform` is the world-to-device map, usually from
    /// [`DisplayRect::view_transform`].
    pub fn device_lines(
        &self,
        transform: Affine,
        view: Rect,
    ) -> impl Iterator<Item = (Line, LineKind)> + '_ {
        let vertical = self.vertical.iter().map(move |line| {
            let x = (transform * Point::new(line.position, 0.0)).x;
            (Line::new((x, view.y0), (x, view.y1)), line.kind)
        });
        let horizontal = self.horizontal.iter().map(move |line| {
            let y = (transform * Point::new(0.0, line.position)).y;
            (Line::new((view.x0, y), (view.x1, y)), line.kind)
        });
        vertical.chain(horizontal)
    }
}

/// Generates the grid lines visible through `rect` drawn into a `view` of the given size.
///
/// Both axes share one level so grid cells stay square in world units; it is
/// chosen from the more zoomed-out axis. A degenerate `view` yields no lines.
#[must_use]
pub fn grid_lines(
    rect: &DisplayRect,
    view: Size,
    series: &GridSeries,
    style: &GridStyle,
) -> GridLines {
    let mut out = GridLines {
        level: series.finest(),
        show_minor: false,
        vertical: Vec::new(),
        horizontal: Vec::new(),
    };
    if !(view.width > 0.0 && view.height > 0.0 && view.is_finite()) {
        return out;
    }

    let units_per_px = (rect.width() / view.width).max(rect.height() / view.height);
    let level = series.select(style.min_major_spacing_px * units_per_px);
    let show_minor = level.minor < level.major
        && level.minor / units_per_px >= style.min_minor_spacing_px;
    out.level = level;
    out.show_minor = show_minor;

    let step = if show_minor { level.minor } else { level.major };
    let per_major = major_ratio(level, show_minor);
    out.vertical = axis_lines(rect.x_range(), step, per_major, style.max_lines_per_axis);
    out.horizontal = axis_lines(rect.y_range(), step, per_major, style.max_lines_per_axis);
    log::trace!(
        "grid level {}/{} minor={} lines={}",
        level.major,
        level.minor,
        show_minor,
        out.len()
    );
    out
}

/// Number of `step`s between major lines.
#[allow(
    clippy::cast_possible_truncation,
    reason = "major/minor ratios in a grid series are small integers"
)]
fn major_ratio(level: GridLevel, show_minor: bool) -> i64 {
    match level.minor_per_major() {
        Some(ratio) if show_minor => (ratio as i64).max(1),
        _ => 1,
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "indices are bounded by the line cap checked beforehand"
)]
fn axis_lines(range: Range<f64>, step: f64, per_major: i64, cap: usize) -> Vec<GridLine> {
    let first = libm::ceil(range.start / step);
    let last = libm::floor(range.end / step);
    if !(first.is_finite() && last.is_finite()) || last < first {
        return Vec::new();
    }
    let count = last - first + 1.0;
    if count > cap as f64 {
        log::warn!("skipping {count} grid lines, more than the cap of {cap}");
        return Vec::new();
    }
    let (first, last) = (first as i64, last as i64);
    (first..=last)
        .map(|k| GridLine {
            position: k as f64 * step,
            kind: if k == 0 {
                LineKind::Axis
            } else if k % per_major == 0 {
                LineKind::Major
            } else {
                LineKind::Minor
            },
        })
        .collect()
}
