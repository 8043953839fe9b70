// Copyright 2026 the Gridpaper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use gridpaper_grid::{DEFAULT_SERIES, GridSeries, SeriesError};
use gridpaper_view::{Extent, RectError};

/// Startup configuration for a [`GridPaper`](crate::GridPaper).
///
/// With the `serde` feature, missing fields deserialize to their defaults and
/// field names use `camelCase` (`canvasId`, `gridSeries`, `minX`, ...).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct GridPaperConfig {
    /// Id of the `<canvas>` element to draw into.
    ///
    /// The paper itself never touches the DOM; hosts build the surface with
    /// `gridpaper_web_canvas::WebCanvasSurface::from_canvas_id(&config.canvas_id)`.
    pub canvas_id: String,
    /// Grid ladder as `[major, minor]` spacings, each major a whole multiple of its minor.
    pub grid_series: Vec<[f64; 2]>,
    /// Left edge of the extent.
    pub min_x: f64,
    /// Right edge of the extent.
    pub max_x: f64,
    /// Bottom edge of the extent.
    pub min_y: f64,
    /// Top edge of the extent.
    pub max_y: f64,
}

impl Default for GridPaperConfig {
    fn default() -> Self {
        Self {
            canvas_id: String::from("preview"),
            grid_series: DEFAULT_SERIES.to_vec(),
            min_x: -4000.0,
            max_x: 4000.0,
            min_y: -6000.0,
            max_y: 6000.0,
        }
    }
}

impl GridPaperConfig {
    /// Sets the canvas element id.
    #[must_use]
    pub fn with_canvas_id(mut self, id: impl Into<String>) -> Self {
        self.canvas_id = id.into();
        self
    }

    /// Sets the grid ladder.
    #[must_use]
    pub fn with_grid_series(mut self, series: Vec<[f64; 2]>) -> Self {
        self.grid_series = series;
        self
    }

    /// Sets the extent bounds.
    #[must_use]
    pub fn with_extent(mut self, min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        self.min_x = min_x;
        self.max_x = max_x;
        self.min_y = min_y;
        self.max_y = max_y;
        self
    }

    /// The configured extent.
    pub fn extent(&self) -> Result<Extent, ConfigError> {
        Ok(Extent::new(self.min_x, self.max_x, self.min_y, self.max_y)?)
    }

    /// The configured grid ladder.
    pub fn series(&self) -> Result<GridSeries, ConfigError> {
        Ok(GridSeries::new(self.grid_series.iter().copied())?)
    }

    /// Checks every field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.canvas_id.trim().is_empty() {
            return Err(ConfigError::EmptyCanvasId);
        }
        self.extent()?;
        self.series()?;
        Ok(())
    }
}

/// Error returned for an unusable [`GridPaperConfig`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// `canvas_id` is empty or whitespace.
    EmptyCanvasId,
    /// The extent bounds do not form a valid rectangle.
    Extent(RectError),
    /// The grid ladder is empty or has an invalid level.
    Series(SeriesError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCanvasId => f.write_str("canvas id must not be empty"),
            Self::Extent(err) => write!(f, "invalid extent: {err}"),
            Self::Series(err) => write!(f, "invalid grid series: {err}"),
        }
    }
}

impl core::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::EmptyCanvasId => None,
            Self::Extent(err) => Some(err),
            Self::Series(err) => Some(err),
        }
    }
}

impl From<RectError> for ConfigError {
    fn from(err: RectError) -> Self {
        Self::Extent(err)
    }
}

impl From<SeriesError> for ConfigError {
    fn from(err: SeriesError) -> Self {
        Self::Series(err)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;
    use core::error::Error;

    use gridpaper_grid::SeriesError;
    use gridpaper_view::RectError;

    use super::{ConfigError, GridPaperConfig};

    #[test]
    fn defaults_are_valid() {
        let config = GridPaperConfig::default();
        assert_eq!(config.canvas_id, "preview");
        assert_eq!(config.validate(), Ok(()));
        let extent = config.extent().unwrap();
        assert_eq!(extent.x_range(), -4000.0..4000.0);
        assert_eq!(extent.y_range(), -6000.0..6000.0);
        assert_eq!(config.series().unwrap().levels().len(), 7);
    }

    #[test]
    fn empty_canvas_id_is_rejected() {
        let config = GridPaperConfig::default().with_canvas_id("  ");
        assert_eq!(config.validate(), Err(ConfigError::EmptyCanvasId));
    }

    #[test]
    fn bad_extent_is_rejected() {
        let config = GridPaperConfig::default().with_extent(10.0, 10.0, 0.0, 1.0);
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Extent(RectError::EmptyWidth { .. })));
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("invalid extent"));
    }

    #[test]
    fn bad_series_is_rejected() {
        let config = GridPaperConfig::default().with_grid_series(vec![]);
        assert_eq!(
            config.validate(),
            Err(ConfigError::Series(SeriesError::Empty))
        );
    }
}
