//! Net Worth Projection - compounding savings projection with interactive chart geometry
//!
//! This library provides:
//! - Net worth projections at daily, monthly and yearly granularity
//! - Chart layout, hit-testing, tooltip placement and focus tracking
//! - SVG rendering of the projected series
//! - A persisted, observable store for the user's financial profile

pub mod profile;
pub mod projection;
pub mod chart;
pub mod format;
pub mod config;

// Re-export commonly used types
pub use profile::{FinancialProfile, ProfileField, ProfileStore};
pub use projection::{project, Granularity, ProjectionEngine, ProjectionSeries};
pub use chart::{layout, ChartGeometry, FocusTracker};
pub use config::{AppConfig, ChartConfig};
