// Copyright 2026 the Gridpaper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=gridpaper_web_canvas --heading-base-level=0

//! Canvas 2D drawing surface for Gridpaper.
//!
//! [`WebCanvasSurface`] implements [`DrawingSurface`] and [`GridSurface`] on top of
//! `web_sys::CanvasRenderingContext2d` when targeting `wasm32`. Every new
//! window clears the canvas and strokes the grid for it, one path per
//! [`LineKind`], using the colors of a [`CanvasTheme`].
//!
//! ```no_run
//! #[cfg(target_arch = "wasm32")]
//! fn make_surface() -> Result<gridpaper_web_canvas::WebCanvasSurface, wasm_bindgen::JsValue> {
//!     gridpaper_web_canvas::WebCanvasSurface::from_canvas_id("preview")
//! }
//! ```
//!
//! On other targets the surface is headless: it still plans the grid for each
//! window (so hosts and tests can inspect what would be drawn) but paints
//! nothing.

#![no_std]

extern crate alloc;

use gridpaper_grid::{GridSeries, GridStyle, GridSurface, LineKind, grid_lines};
use gridpaper_view::{DisplayRect, DrawingSurface};
use kurbo::Size;
use peniko::Color;

#[cfg(any(target_arch = "wasm32", test))]
use alloc::string::{String, ToString};
#[cfg(target_arch = "wasm32")]
use alloc::format;
#[cfg(target_arch = "wasm32")]
use gridpaper_grid::GridLines;
#[cfg(target_arch = "wasm32")]
use kurbo::{Point, Rect};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};
#[cfg(target_arch = "wasm32")]
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

#[cfg(any(target_arch = "wasm32", test))]
fn color_to_css(color: Color) -> String {
    // `Rgba8` formats as a CSS `rgb(...)`/`rgba(...)` string.
    color.to_rgba8().to_string()
}

/// Colors and stroke width used to paint the grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasTheme {
    /// Fill behind the grid.
    pub background: Color,
    /// Stroke for minor lines.
    pub minor: Color,
    /// Stroke for major lines.
    pub major: Color,
    /// Stroke for the axes through the origin.
    pub axis: Color,
    /// Stroke width in device pixels.
    pub line_width: f64,
}

impl CanvasTheme {
    /// Stroke color for lines of `kind`.
    #[must_use]
    pub fn color_for(&self, kind: LineKind) -> Color {
        match kind {
            LineKind::Minor => self.minor,
            LineKind::Major => self.major,
            LineKind::Axis => self.axis,
        }
    }
}

impl Default for CanvasTheme {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            minor: Color::from_rgb8(0xdd, 0xe6, 0xf0),
            major: Color::from_rgb8(0xa9, 0xbe, 0xd4),
            axis: Color::from_rgb8(0x4a, 0x5d, 0x73),
            line_width: 1.0,
        }
    }
}

/// A grid-paper [`DrawingSurface`] backed by a Canvas 2D context.
#[derive(Debug)]
pub struct WebCanvasSurface {
    #[cfg(target_arch = "wasm32")]
    canvas: HtmlCanvasElement,
    #[cfg(target_arch = "wasm32")]
    ctx: CanvasRenderingContext2d,
    #[cfg(not(target_arch = "wasm32"))]
    size: Size,
    series: GridSeries,
    style: GridStyle,
    theme: CanvasTheme,
    last_view: Option<DisplayRect>,
    last_line_count: usize,
    frames: u64,
}

#[cfg(target_arch = "wasm32")]
impl WebCanvasSurface {
    /// Creates a surface drawing into `canvas`.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("missing 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            canvas,
            ctx,
            series: GridSeries::default(),
            style: GridStyle::default(),
            theme: CanvasTheme::default(),
            last_view: None,
            last_line_count: 0,
            frames: 0,
        })
    }

    /// Looks up an existing `<canvas>` element by id and draws into it.
    ///
    /// The element is never created; a missing or non-canvas element is an error.
    pub fn from_canvas_id(id: &str) -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("no document available"))?;
        let element = document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("no element with id `{id}`")))?;
        let canvas = element
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str(&format!("element `{id}` is not a canvas")))?;
        Self::new(canvas)
    }

    /// The canvas being drawn into.
    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Canvas size in device pixels.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(f64::from(self.canvas.width()), f64::from(self.canvas.height()))
    }

    fn paint(&self, rect: &DisplayRect, size: Size, lines: &GridLines) {
        let view = Rect::from_origin_size(Point::ZERO, size);
        let _ = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        self.ctx.clear_rect(0.0, 0.0, size.width, size.height);
        self.ctx.set_fill_style_str(&color_to_css(self.theme.background));
        self.ctx.fill_rect(0.0, 0.0, size.width, size.height);

        let Some(transform) = rect.view_transform(view) else {
            log::warn!("canvas has no area; grid not drawn");
            return;
        };
        self.ctx.set_line_width(self.theme.line_width);
        // Axes last so they sit on top.
        for kind in [LineKind::Minor, LineKind::Major, LineKind::Axis] {
            self.ctx.begin_path();
            for (line, _) in lines.device_lines(transform, view).filter(|(_, k)| *k == kind) {
                self.ctx.move_to(line.p0.x, line.p0.y);
                self.ctx.line_to(line.p1.x, line.p1.y);
            }
            self.ctx.set_stroke_style_str(&color_to_css(self.theme.color_for(kind)));
            self.ctx.stroke();
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl WebCanvasSurface {
    /// Creates a headless surface of the given size.
    ///
    /// Only available off `wasm32`, where there is no canvas to draw into.
    #[must_use]
    pub fn headless(size: Size) -> Self {
        Self {
            size,
            series: GridSeries::default(),
            style: GridStyle::default(),
            theme: CanvasTheme::default(),
            last_view: None,
            last_line_count: 0,
            frames: 0,
        }
    }

    /// Surface size in device pixels.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }
}

impl WebCanvasSurface {
    /// Replaces the grid ladder.
    #[must_use]
    pub fn with_series(mut self, series: GridSeries) -> Self {
        self.series = series;
        self
    }

    /// Replaces the spacing thresholds.
    #[must_use]
    pub fn with_style(mut self, style: GridStyle) -> Self {
        self.style = style;
        self
    }

    /// Replaces the colors.
    #[must_use]
    pub fn with_theme(mut self, theme: CanvasTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Grid ladder in use.
    #[must_use]
    pub fn series(&self) -> &GridSeries {
        &self.series
    }

    /// Colors in use.
    #[must_use]
    pub fn theme(&self) -> &CanvasTheme {
        &self.theme
    }

    /// The window last drawn, if any.
    #[must_use]
    pub fn last_view(&self) -> Option<DisplayRect> {
        self.last_view
    }

    /// Number of grid lines in the last frame.
    #[must_use]
    pub fn last_line_count(&self) -> usize {
        self.last_line_count
    }

    /// Number of frames drawn so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl DrawingSurface for WebCanvasSurface {
    fn set_view(&mut self, rect: &DisplayRect) {
        let size = self.size();
        let lines = grid_lines(rect, size, &self.series, &self.style);
        #[cfg(target_arch = "wasm32")]
        self.paint(rect, size, &lines);
        self.last_view = Some(*rect);
        self.last_line_count = lines.len();
        self.frames += 1;
        log::trace!("frame {} drew {} grid lines", self.frames, lines.len());
    }
}

impl GridSurface for WebCanvasSurface {
    fn set_series(&mut self, series: &GridSeries) {
        self.series = series.clone();
        log::debug!("canvas grid ladder set to {} levels", series.levels().len());
    }
}
