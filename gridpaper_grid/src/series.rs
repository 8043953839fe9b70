// Copyright 2026 the Gridpaper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::fmt;

/// One rung of the grid ladder: major line spacing and its subdivision.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLevel {
    /// Spacing between major lines, in world units.
    pub major: f64,
    /// Spacing between minor lines, in world units. Divides `major` a whole
    /// number of times.
    pub minor: f64,
}

impl GridLevel {
    /// Creates a level.
    #[must_use]
    pub const fn new(major: f64, minor: f64) -> Self {
        Self { major, minor }
    }

    /// Returns this level with both spacings multiplied by `factor`.
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            major: self.major * factor,
            minor: self.minor * factor,
        }
    }

    /// Number of minor steps per major step, if that is a whole number.
    ///
    /// Grid lines are classified by counting minor steps, so a level whose
    /// ratio is fractional would put its major lines in the wrong place.
    #[must_use]
    pub fn minor_per_major(&self) -> Option<f64> {
        if !(self.major.is_finite() && self.minor.is_finite() && self.minor > 0.0) {
            return None;
        }
        let ratio = self.major / self.minor;
        let whole = libm::round(ratio);
        (whole >= 1.0 && libm::fabs(ratio - whole) <= RATIO_TOLERANCE * whole).then_some(whole)
    }

    fn is_valid(&self) -> bool {
        self.minor_per_major().is_some()
    }
}

impl From<[f64; 2]> for GridLevel {
    fn from([major, minor]: [f64; 2]) -> Self {
        Self { major, minor }
    }
}

/// Relative slack allowed when checking that `major / minor` is whole.
const RATIO_TOLERANCE: f64 = 1e-9;

/// Error returned when building a [`GridSeries`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesError {
    /// The series has no levels.
    Empty,
    /// A level has a non-finite or non-positive spacing, or `major` is not a
    /// whole multiple of `minor`.
    InvalidLevel {
        /// Index of the offending level in the input.
        index: usize,
    },
}

impl fmt::Display for SeriesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("grid series needs at least one level"),
            Self::InvalidLevel { index } => write!(
                f,
                "grid level {index} must have finite spacings with major a whole multiple of minor > 0"
            ),
        }
    }
}

impl core::error::Error for SeriesError {}

/// The ladder of grid levels a canvas steps through as it zooms.
///
/// Levels are kept sorted by major spacing, finest first. The default is
/// the 1-2-5 ladder from 0.1 to 10 world units.
#[derive(Clone, Debug, PartialEq)]
pub struct GridSeries {
    levels: Vec<GridLevel>,
}

impl GridSeries {
    /// Builds a series, validating and sorting the levels.
    pub fn new<I, L>(levels: I) -> Result<Self, SeriesError>
    where
        I: IntoIterator<Item = L>,
        L: Into<GridLevel>,
    {
        let mut out = Vec::new();
        for (index, level) in levels.into_iter().enumerate() {
            let level = level.into();
            if !level.is_valid() {
                return Err(SeriesError::InvalidLevel { index });
            }
            out.push(level);
        }
        if out.is_empty() {
            return Err(SeriesError::Empty);
        }
        out.sort_by(|a, b| a.major.total_cmp(&b.major));
        Ok(Self { levels: out })
    }

    /// Returns the levels, finest first.
    #[must_use]
    pub fn levels(&self) -> &[GridLevel] {
        &self.levels
    }

    /// Returns the levels as `[major, minor]` pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<[f64; 2]> {
        self.levels.iter().map(|l| [l.major, l.minor]).collect()
    }

    /// Finest level.
    #[must_use]
    pub fn finest(&self) -> GridLevel {
        self.levels[0]
    }

    /// Picks the finest level whose major spacing is at least `min_spacing` world units.
    ///
    /// Past the coarsest level the ladder repeats scaled by powers of ten, so
    /// a zoomed-out view still gets a sensible grid. Zoomed in past the finest
    /// level, the finest level is returned as-is.
    #[must_use]
    pub fn select(&self, min_spacing: f64) -> GridLevel {
        if !(min_spacing.is_finite() && min_spacing > 0.0) {
            return self.finest();
        }
        let mut scale = 1.0_f64;
        // f64 tops out around 1e308; the loop is bounded well before that.
        for _ in 0..=308 {
            for level in &self.levels {
                let scaled = level.scaled(scale);
                if scaled.major >= min_spacing {
                    return scaled;
                }
            }
            scale *= 10.0;
        }
        log::warn!("no grid level reaches a spacing of {min_spacing}");
        self.levels[self.levels.len() - 1].scaled(scale)
    }
}

impl Default for GridSeries {
    fn default() -> Self {
        Self {
            levels: DEFAULT_SERIES.iter().copied().map(GridLevel::from).collect(),
        }
    }
}

/// The default `[major, minor]` ladder.
pub const DEFAULT_SERIES: [[f64; 2]; 7] = [
    [0.1, 0.1],
    [0.2, 0.2],
    [0.5, 0.1],
    [1.0, 0.5],
    [2.0, 2.0],
    [5.0, 1.0],
    [10.0, 1.0],
];
