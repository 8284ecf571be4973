//! Chart geometry: value scaling, screen coordinates, SVG paths and hit-testing

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use thiserror::Error;

/// Fraction of the value range added above and below the curve
pub const VALUE_MARGIN: f64 = 0.1;

/// Relative widening applied to a flat (constant) series
pub const FLAT_WIDEN_FRACTION: f64 = 0.05;

/// Number of horizontal grid lines
pub const GRID_LINES: usize = 4;

/// Errors raised by chart layout
#[derive(Debug, Error, PartialEq)]
pub enum ChartError {
    #[error("cannot lay out an empty series")]
    EmptySeries,

    #[error("chart {width}x{height} leaves no drawable area inside padding {padding}")]
    DegenerateFrame { width: f64, height: f64, padding: f64 },

    #[error("failed to draw chart: {0}")]
    Render(String),
}

/// Screen-space layout of a numeric series
///
/// `points` is aligned 1:1 with `values`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartGeometry {
    /// The series this geometry was laid out from
    pub values: Vec<f64>,

    /// Polyline through every point ("M x y L x y ...")
    pub line_path: String,

    /// Polyline closed down to the bottom padding line
    pub area_path: String,

    /// Screen coordinates of each value
    pub points: Vec<(f64, f64)>,

    /// Value mapped to the bottom padding line
    pub y_min: f64,

    /// Value mapped to the top padding line
    pub y_max: f64,

    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl ChartGeometry {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn plot_width(&self) -> f64 {
        self.width - 2.0 * self.padding
    }

    pub fn plot_height(&self) -> f64 {
        self.height - 2.0 * self.padding
    }

    /// Screen y of the bottom padding line
    pub fn baseline(&self) -> f64 {
        self.padding + self.plot_height()
    }

    pub fn point(&self, index: usize) -> Option<(f64, f64)> {
        self.points.get(index).copied()
    }

    pub fn value(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Nearest series index for a horizontal screen offset
    ///
    /// Monotonic in `touch_x` and clamped to `[0, len - 1]`; anything left of
    /// the padding maps to 0 and anything right of `width - padding` to the
    /// last index.
    pub fn locate(&self, touch_x: f64) -> usize {
        let last = self.points.len().saturating_sub(1);
        let segments = last.max(1) as f64;
        let raw = ((touch_x - self.padding) / self.plot_width() * segments).round();

        if raw.is_nan() || raw <= 0.0 {
            0
        } else if raw >= last as f64 {
            last
        } else {
            raw as usize
        }
    }

    /// Screen y of each horizontal grid line, top to bottom
    pub fn grid_lines(&self) -> Vec<f64> {
        let steps = (GRID_LINES - 1) as f64;
        (0..GRID_LINES)
            .map(|i| self.padding + self.plot_height() * i as f64 / steps)
            .collect()
    }
}

/// Value-axis bounds for a series: flat ranges widened, then a 10% margin
///
/// Returns `None` for an empty series.
pub fn value_bounds(values: &[f64]) -> Option<(f64, f64)> {
    if values.is_empty() {
        return None;
    }

    let mut min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let mut max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if min == max {
        let delta = if min == 0.0 { 1.0 } else { min.abs() * FLAT_WIDEN_FRACTION };
        min -= delta;
        max += delta;
    }

    let range = max - min;
    Some((min - range * VALUE_MARGIN, max + range * VALUE_MARGIN))
}

/// Lay out a series inside a `width` x `height` chart with uniform padding
///
/// Index `i` maps linearly onto `[padding, width - padding]`; values map onto
/// `[padding, height - padding]` with larger values higher up.
pub fn layout(
    values: &[f64],
    width: f64,
    height: f64,
    padding: f64,
) -> Result<ChartGeometry, ChartError> {
    let plot_width = width - 2.0 * padding;
    let plot_height = height - 2.0 * padding;
    if !(plot_width > 0.0 && plot_height > 0.0) {
        return Err(ChartError::DegenerateFrame { width, height, padding });
    }

    let (y_min, y_max) = value_bounds(values).ok_or(ChartError::EmptySeries)?;
    let segments = values.len().saturating_sub(1).max(1) as f64;

    let points: Vec<(f64, f64)> = values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let x = padding + plot_width * i as f64 / segments;
            let y = padding + plot_height - (v - y_min) / (y_max - y_min) * plot_height;
            (x, y)
        })
        .collect();

    let mut line_path = String::new();
    for (i, (x, y)) in points.iter().enumerate() {
        let command = if i == 0 { "M" } else { " L" };
        let _ = write!(line_path, "{} {} {}", command, x, y);
    }

    debug!(
        "Laid out {} points in {}x{} (value axis {:.2}..{:.2})",
        points.len(),
        width,
        height,
        y_min,
        y_max
    );

    let mut geometry = ChartGeometry {
        values: values.to_vec(),
        line_path,
        area_path: String::new(),
        points,
        y_min,
        y_max,
        width,
        height,
        padding,
    };
    let bottom = geometry.baseline();
    geometry.area_path = format!(
        "{} L {} {} L {} {} Z",
        geometry.line_path,
        padding + plot_width,
        bottom,
        padding,
        bottom
    );

    Ok(geometry)
}
