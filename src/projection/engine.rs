//! Core projection engine: compounding growth plus linear contributions

use chrono::{Local, NaiveDate};
use log::debug;
use thiserror::Error;

use super::granularity::Granularity;
use super::series::{ProjectionPoint, ProjectionSeries};
use super::state::ProjectionState;
use crate::format::format_date_label;
use crate::profile::FinancialProfile;

/// Errors raised while building a projection
#[derive(Debug, Error)]
pub enum ProjectionError {
    #[error("date of step {step} from {start} is out of range")]
    DateOutOfRange { start: NaiveDate, step: u32 },
}

/// Configuration for a projection run
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    /// Step size and horizon
    pub granularity: Granularity,

    /// Date of point 0 ("now")
    pub start_date: NaiveDate,
}

impl ProjectionConfig {
    pub fn new(granularity: Granularity, start_date: NaiveDate) -> Self {
        Self { granularity, start_date }
    }

    /// Projection starting from the local date today
    pub fn today(granularity: Granularity) -> Self {
        Self::new(granularity, Local::now().date_naive())
    }
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self::today(Granularity::default())
    }
}

/// Main projection engine
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Run the projection for a profile
    ///
    /// Point 0 is the current savings; each later point grows the previous
    /// one by the per-step rate and adds the per-step contribution.
    pub fn project_profile(
        &self,
        profile: &FinancialProfile,
    ) -> Result<ProjectionSeries, ProjectionError> {
        let granularity = self.config.granularity;
        let start = self.config.start_date;
        let steps = granularity.steps();

        debug!(
            "Projecting {} from {} over {} steps (growth {}, net {}/month)",
            granularity, start, steps, profile.annual_growth_rate, profile.monthly_net()
        );

        let mut series =
            ProjectionSeries::new(granularity, profile.monthly_net(), profile.annual_growth_rate);
        let mut state = ProjectionState::from_profile(profile, granularity, start);
        series.add_point(self.record(&state));

        for step in 1..=steps {
            state
                .advance(granularity, start)
                .ok_or(ProjectionError::DateOutOfRange { start, step })?;
            series.add_point(self.record(&state));
        }

        Ok(series)
    }

    fn record(&self, state: &ProjectionState) -> ProjectionPoint {
        ProjectionPoint {
            index: state.step,
            date: state.date,
            value: state.value,
            label: format_date_label(state.date, self.config.granularity),
        }
    }
}

/// Project a profile forward at the given granularity from `start_date`
pub fn project(
    profile: &FinancialProfile,
    granularity: Granularity,
    start_date: NaiveDate,
) -> Result<ProjectionSeries, ProjectionError> {
    ProjectionEngine::new(ProjectionConfig::new(granularity, start_date)).project_profile(profile)
}

/// Project a profile forward starting today
pub fn project_from_today(
    profile: &FinancialProfile,
    granularity: Granularity,
) -> Result<ProjectionSeries, ProjectionError> {
    ProjectionEngine::new(ProjectionConfig::today(granularity)).project_profile(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn test_series_lengths() {
        let profile = FinancialProfile::default();
        for g in Granularity::ALL {
            let series = project(&profile, g, start()).unwrap();
            assert_eq!(series.len(), g.steps() as usize + 1, "{}", g);
        }
    }

    #[test]
    fn test_first_point_is_savings() {
        let profile = FinancialProfile::new(12_345.67, 100.0, 5_000.0, 0.12);
        for g in Granularity::ALL {
            let series = project(&profile, g, start()).unwrap();
            assert_eq!(series.points[0].value, 12_345.67);
            assert_eq!(series.points[0].date, start());
        }
    }

    #[test]
    fn test_flat_series_without_growth_or_contribution() {
        let profile = FinancialProfile::new(5_000.0, 3_000.0, 3_000.0, 0.0);
        for g in Granularity::ALL {
            let series = project(&profile, g, start()).unwrap();
            assert!(series.points.iter().all(|p| p.value == 5_000.0), "{}", g);
        }
    }

    #[test]
    fn test_linear_series_without_growth() {
        let profile = FinancialProfile::new(1_000.0, 600.0, 100.0, 0.0);
        let series = project(&profile, Granularity::Monthly, start()).unwrap();
        assert_relative_eq!(series.points[10].value, 6_000.0, epsilon = 1e-9);
        assert_relative_eq!(series.points[120].value, 61_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_monthly_compounding_matches_annual_rate() {
        let profile = FinancialProfile::new(10_000.0, 4_000.0, 4_000.0, 0.07);
        let series = project(&profile, Granularity::Monthly, start()).unwrap();
        assert_relative_eq!(series.points[12].value, 10_700.0, max_relative = 1e-12);
        assert_relative_eq!(
            series.points[120].value,
            10_000.0 * 1.07_f64.powi(10),
            max_relative = 1e-10
        );
    }

    #[test]
    fn test_daily_compounding_matches_annual_rate() {
        let profile = FinancialProfile::new(10_000.0, 0.0, 0.0, 0.05);
        let series = project(&profile, Granularity::Daily, start()).unwrap();
        assert_relative_eq!(series.points[365].value, 10_500.0, max_relative = 1e-10);
    }

    #[test]
    fn test_yearly_default_profile_reference() {
        let profile = FinancialProfile::default();
        let series = project(&profile, Granularity::Yearly, start()).unwrap();

        assert_eq!(series.len(), 31);
        assert_eq!(series.points[0].value, 10_000.0);

        // Future value of savings plus an ordinary annuity of 30,000/year
        let growth = 1.07_f64.powi(30);
        let expected = 10_000.0 * growth + 30_000.0 * (growth - 1.0) / 0.07;
        assert_relative_eq!(series.points[30].value, expected, max_relative = 1e-6);
    }

    #[test]
    fn test_negative_net_contribution_is_clamped() {
        let profile = FinancialProfile::new(10_000.0, 1_000.0, 4_000.0, 0.0);
        let series = project(&profile, Granularity::Yearly, start()).unwrap();
        assert_eq!(series.points[30].value, 10_000.0);
        assert_eq!(series.monthly_net, 0.0);
    }

    #[test]
    fn test_dates_strictly_increase_and_labels_follow_granularity() {
        let profile = FinancialProfile::default();
        for g in Granularity::ALL {
            let series = project(&profile, g, start()).unwrap();
            assert!(series.points.windows(2).all(|w| w[0].date < w[1].date), "{}", g);
        }

        let monthly = project(&profile, Granularity::Monthly, start()).unwrap();
        assert_eq!(monthly.points[0].label, "October 2026");
        assert_eq!(monthly.points[3].label, "January 2027");
        assert_eq!(monthly.points[3].date, NaiveDate::from_ymd_opt(2027, 1, 1).unwrap());

        let daily = project(&profile, Granularity::Daily, start()).unwrap();
        assert_eq!(daily.points[14].label, "Nov 1, 2026");

        let yearly = project(&profile, Granularity::Yearly, start()).unwrap();
        assert_eq!(yearly.points[30].label, "2056");
    }

    #[test]
    fn test_growth_of_minus_one_propagates() {
        let profile = FinancialProfile::new(10_000.0, 0.0, 0.0, -1.0);
        let series = project(&profile, Granularity::Monthly, start()).unwrap();
        assert_eq!(series.points[0].value, 10_000.0);
        assert_eq!(series.points[1].value, 0.0);
    }

    #[test]
    fn test_date_out_of_range() {
        let profile = FinancialProfile::default();
        let result = project(&profile, Granularity::Yearly, NaiveDate::MAX);
        assert!(matches!(result, Err(ProjectionError::DateOutOfRange { step: 1, .. })));
    }
}
