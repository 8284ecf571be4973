//! Net worth projection engine

mod granularity;
mod state;
mod engine;
mod series;

pub use granularity::Granularity;
pub use state::ProjectionState;
pub use engine::{project, project_from_today, ProjectionConfig, ProjectionEngine, ProjectionError};
pub use series::{ProjectionPoint, ProjectionSeries, ProjectionSummary};
