//! Application configuration shared by the CLI and embedding hosts

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default profile storage file
pub const DEFAULT_DATA_PATH: &str = "networth_data.json";

/// Chart sizing rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Chart height in px
    pub height: f64,

    /// Padding inside the chart on every side
    pub padding: f64,

    /// Upper bound on chart width
    pub max_width: f64,

    /// Horizontal space the host keeps around the chart
    pub outer_margin: f64,
}

impl ChartConfig {
    /// Chart width for a host of `available_width` px
    pub fn chart_width(&self, available_width: f64) -> f64 {
        (available_width - self.outer_margin).min(self.max_width)
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            height: 220.0,
            padding: 12.0,
            max_width: 800.0,
            outer_margin: 24.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// File backing the profile store
    pub data_path: PathBuf,

    pub chart: ChartConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            chart: ChartConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_width() {
        let config = ChartConfig::default();
        assert_eq!(config.chart_width(400.0), 376.0);
        assert_eq!(config.chart_width(2000.0), 800.0);
    }
}
