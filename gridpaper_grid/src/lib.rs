// Copyright 2026 the Gridpaper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=gridpaper_grid --heading-base-level=0

//! Gridpaper Grid: grid-line generation for a visible window.
//!
//! A [`GridSeries`] is a ladder of `[major, minor]` line spacings. Given the
//! visible [`gridpaper_view::DisplayRect`] and the size of the surface it is
//! drawn into, [`grid_lines`] picks the finest level whose major lines stay at
//! least [`GridStyle::min_major_spacing_px`] apart on screen, repeating the
//! ladder by powers of ten when zoomed out past its coarsest level, and emits
//! the visible lines tagged as minor, major, or axis.
//!
//! Surfaces that draw the grid implement [`GridSurface`] so the ladder they
//! draw with can be configured by whoever owns them.
//!
//! ```rust
//! use gridpaper_grid::{GridSeries, GridStyle, LineKind, grid_lines};
//! use gridpaper_view::DisplayRect;
//! use kurbo::Size;
//!
//! let rect = DisplayRect::new(-5.0, 5.0, -5.0, 5.0).unwrap();
//! let lines = grid_lines(
//!     &rect,
//!     Size::new(100.0, 100.0),
//!     &GridSeries::default(),
//!     &GridStyle::default(),
//! );
//! assert_eq!(lines.level.major, 5.0);
//! assert!(lines.vertical.iter().any(|line| line.kind == LineKind::Axis));
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod lines;
mod series;
mod surface;

pub use lines::{GridLine, GridLines, GridStyle, LineKind, grid_lines};
pub use series::{DEFAULT_SERIES, GridLevel, GridSeries, SeriesError};
pub use surface::GridSurface;
