// Copyright 2026 the Gridpaper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=gridpaper --heading-base-level=0

//! Gridpaper: a scrollable grid-paper canvas driven by two range bars.
//!
//! [`GridPaper`] ties together the pieces of the workspace:
//! - a [`gridpaper_view::ViewportController`] owning the visible window and a
//!   [`gridpaper_grid::GridSurface`] that draws it with the configured grid ladder,
//! - a horizontal and a vertical [`gridpaper_range::DualRange`] whose handles
//!   pick the window on each axis,
//! - the validated [`GridPaperConfig`] (extent, grid ladder, canvas id).
//!
//! Moving a bar moves the window; panning, zooming, or resetting the paper
//! moves the bars.
//!
//! ```rust
//! use gridpaper::{GridPaper, GridPaperConfig};
//! use kurbo::Vec2;
//!
//! // `()` is a headless surface. In a browser, build the surface with
//! // `WebCanvasSurface::from_canvas_id(&config.canvas_id)` instead.
//! let mut paper = GridPaper::new(GridPaperConfig::default(), ()).unwrap();
//! assert_eq!(paper.display_rect().x_range(), -4000.0..4000.0);
//!
//! paper.horizontal_bar_mut().set_range(0.25, 0.75);
//! assert_eq!(paper.display_rect().x_range(), -2000.0..2000.0);
//! assert_eq!(paper.display_rect().y_range(), -6000.0..6000.0);
//!
//! // Panning moves the bar along with the window.
//! paper.pan_by(Vec2::new(1000.0, 0.0));
//! assert!((paper.horizontal_bar().lower_range() - 0.375).abs() < 1e-9);
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to `kurbo/std`.
//! - `libm`: `no_std` float math through `kurbo/libm`.
//! - `serde`: `Serialize`/`Deserialize` for [`GridPaperConfig`].
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod config;
mod paper;

pub use config::{ConfigError, GridPaperConfig};
pub use paper::{BarMut, GridPaper};
