//! Projection output structures

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::granularity::Granularity;
use crate::format::format_currency;

/// A single point of a projected net worth series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// Step index (0 = now)
    pub index: u32,

    pub date: NaiveDate,

    /// Projected net worth
    pub value: f64,

    /// Formatted date label for this granularity
    pub label: String,
}

/// Complete projection result, `steps + 1` points in date order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionSeries {
    pub granularity: Granularity,

    /// Net monthly contribution the projection was run with
    pub monthly_net: f64,

    /// Annual growth rate the projection was run with
    pub annual_growth_rate: f64,

    pub points: Vec<ProjectionPoint>,
}

impl ProjectionSeries {
    pub fn new(granularity: Granularity, monthly_net: f64, annual_growth_rate: f64) -> Self {
        Self {
            granularity,
            monthly_net,
            annual_growth_rate,
            points: Vec::with_capacity(granularity.steps() as usize + 1),
        }
    }

    pub fn add_point(&mut self, point: ProjectionPoint) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Bare values, the input to chart layout
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// Every point after "now", for the per-period breakdown list
    pub fn breakdown(&self) -> &[ProjectionPoint] {
        self.points.get(1..).unwrap_or(&[])
    }

    /// Tooltip text for a focused point, e.g. "March 2027 · $41,210"
    pub fn tooltip_text(&self, index: usize) -> Option<String> {
        self.points
            .get(index)
            .map(|p| format!("{} · {}", p.label, format_currency(p.value)))
    }

    /// Headline numbers for the projection screen
    pub fn summary(&self) -> ProjectionSummary {
        let first = self.points.first();
        let last = self.points.last();

        ProjectionSummary {
            granularity: self.granularity,
            now_value: first.map(|p| p.value).unwrap_or(0.0),
            end_value: last.map(|p| p.value).unwrap_or(0.0),
            monthly_net: self.monthly_net,
            annual_growth_rate: self.annual_growth_rate,
            first_label: first.map(|p| p.label.clone()).unwrap_or_default(),
            last_label: last.map(|p| p.label.clone()).unwrap_or_default(),
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub granularity: Granularity,
    pub now_value: f64,
    pub end_value: f64,
    pub monthly_net: f64,
    pub annual_growth_rate: f64,
    pub first_label: String,
    pub last_label: String,
}

impl ProjectionSummary {
    /// Date range shown under the chart ("January 2026 → January 2036")
    pub fn axis_hint(&self) -> String {
        format!("{} → {}", self.first_label, self.last_label)
    }
}
