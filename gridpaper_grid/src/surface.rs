// Copyright 2026 the Gridpaper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use gridpaper_view::DrawingSurface;

use crate::series::GridSeries;

/// A [`DrawingSurface`] that draws grid lines from a [`GridSeries`].
///
/// Owners of a surface hand it their configured ladder through
/// [`GridSurface::set_series`] before the first frame. Surfaces that do not
/// draw a grid can rely on the default, which ignores the ladder.
pub trait GridSurface: DrawingSurface {
    /// Replaces the grid ladder used for subsequent frames.
    fn set_series(&mut self, series: &GridSeries) {
        let _ = series;
    }
}

/// Headless surface: there is no grid to configure.
impl GridSurface for () {}
