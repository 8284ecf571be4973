//! Running state of a projection as it steps forward

use chrono::NaiveDate;

use super::granularity::Granularity;
use crate::profile::FinancialProfile;

/// Position and balance of a projection at one step
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Current step (0 = now)
    pub step: u32,

    /// Projected net worth at this step
    pub value: f64,

    /// Calendar date of this step
    pub date: NaiveDate,

    /// Growth applied per step, compounded from the annual rate
    pub rate_per_step: f64,

    /// Contribution added per step
    pub contrib_per_step: f64,
}

impl ProjectionState {
    /// Initialize state at "now"
    pub fn from_profile(
        profile: &FinancialProfile,
        granularity: Granularity,
        start: NaiveDate,
    ) -> Self {
        let steps_per_year = f64::from(granularity.steps_per_year());

        Self {
            step: 0,
            value: profile.savings,
            date: start,
            // Compounding steps_per_year times reproduces the annual rate exactly
            rate_per_step: (1.0 + profile.annual_growth_rate).powf(1.0 / steps_per_year) - 1.0,
            // Contributions are spread linearly, not compounded
            contrib_per_step: profile.monthly_net() * 12.0 / steps_per_year,
        }
    }

    /// Advance one step: grow the balance, add the contribution, move the date
    ///
    /// Returns `None` if the next date is not representable.
    pub fn advance(&mut self, granularity: Granularity, start: NaiveDate) -> Option<()> {
        let step = self.step + 1;
        self.date = granularity.step_date(start, step)?;
        self.step = step;
        self.value = self.value * (1.0 + self.rate_per_step) + self.contrib_per_step;
        Some(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rates_per_step() {
        let profile = FinancialProfile::new(0.0, 5_000.0, 2_000.0, 0.07);
        let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();

        let monthly = ProjectionState::from_profile(&profile, Granularity::Monthly, start);
        assert_relative_eq!(monthly.contrib_per_step, 3_000.0);
        assert_relative_eq!((1.0 + monthly.rate_per_step).powi(12), 1.07, epsilon = 1e-12);

        let daily = ProjectionState::from_profile(&profile, Granularity::Daily, start);
        assert_relative_eq!(daily.contrib_per_step, 36_000.0 / 365.0);

        let yearly = ProjectionState::from_profile(&profile, Granularity::Yearly, start);
        assert_relative_eq!(yearly.rate_per_step, 0.07, epsilon = 1e-12);
        assert_relative_eq!(yearly.contrib_per_step, 36_000.0);
    }

    #[test]
    fn test_advance() {
        let profile = FinancialProfile::new(1_000.0, 100.0, 0.0, 0.0);
        let start = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
        let mut state = ProjectionState::from_profile(&profile, Granularity::Monthly, start);

        state.advance(Granularity::Monthly, start).unwrap();
        assert_eq!(state.step, 1);
        assert_eq!(state.date, NaiveDate::from_ymd_opt(2026, 4, 1).unwrap());
        assert_relative_eq!(state.value, 1_100.0);
    }
}
