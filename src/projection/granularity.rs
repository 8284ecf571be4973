//! Projection granularity and calendar stepping

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Time step of a projection, each with a fixed horizon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// 365 daily steps over one year
    Daily,
    /// 120 monthly steps over ten years
    #[default]
    Monthly,
    /// 30 yearly steps over thirty years
    Yearly,
}

impl Granularity {
    pub const ALL: [Granularity; 3] =
        [Granularity::Daily, Granularity::Monthly, Granularity::Yearly];

    pub fn steps_per_year(&self) -> u32 {
        match self {
            Granularity::Daily => 365,
            Granularity::Monthly => 12,
            Granularity::Yearly => 1,
        }
    }

    pub fn horizon_years(&self) -> u32 {
        match self {
            Granularity::Daily => 1,
            Granularity::Monthly => 10,
            Granularity::Yearly => 30,
        }
    }

    /// Number of steps after "now" (the series holds one more point)
    pub fn steps(&self) -> u32 {
        self.steps_per_year() * self.horizon_years()
    }

    /// Date of step `step` counted from `start`
    ///
    /// Daily adds calendar days. Monthly lands on the 1st of the month
    /// `step` months later; yearly on January 1st `step` years later.
    /// Returns `None` past chrono's representable range.
    pub fn step_date(&self, start: NaiveDate, step: u32) -> Option<NaiveDate> {
        match self {
            Granularity::Daily => start.checked_add_days(Days::new(u64::from(step))),
            Granularity::Monthly => {
                let month_index = i64::from(start.month0()) + i64::from(step);
                let year = i64::from(start.year()) + month_index.div_euclid(12);
                let month = month_index.rem_euclid(12) as u32 + 1;
                NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, 1)
            }
            Granularity::Yearly => {
                let year = start.year().checked_add(i32::try_from(step).ok()?)?;
                NaiveDate::from_ymd_opt(year, 1, 1)
            }
        }
    }

    /// Title used for the breakdown list ("Monthly Breakdown")
    pub fn title(&self) -> &'static str {
        match self {
            Granularity::Daily => "Daily",
            Granularity::Monthly => "Monthly",
            Granularity::Yearly => "Yearly",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Granularity::Daily => "daily",
            Granularity::Monthly => "monthly",
            Granularity::Yearly => "yearly",
        })
    }
}

impl FromStr for Granularity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "daily" | "d" => Ok(Granularity::Daily),
            "monthly" | "m" => Ok(Granularity::Monthly),
            "yearly" | "y" => Ok(Granularity::Yearly),
            other => Err(format!("Unknown granularity: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_step_table() {
        assert_eq!(Granularity::Daily.steps(), 365);
        assert_eq!(Granularity::Monthly.steps(), 120);
        assert_eq!(Granularity::Yearly.steps(), 30);
    }

    #[test]
    fn test_daily_steps_cross_month_and_year() {
        let start = date(2025, 12, 30);
        assert_eq!(Granularity::Daily.step_date(start, 0), Some(start));
        assert_eq!(Granularity::Daily.step_date(start, 2), Some(date(2026, 1, 1)));
        assert_eq!(Granularity::Daily.step_date(date(2028, 2, 28), 1), Some(date(2028, 2, 29)));
    }

    #[test]
    fn test_monthly_steps_pin_to_first() {
        let start = date(2026, 1, 31);
        assert_eq!(Granularity::Monthly.step_date(start, 1), Some(date(2026, 2, 1)));
        assert_eq!(Granularity::Monthly.step_date(start, 11), Some(date(2026, 12, 1)));
        assert_eq!(Granularity::Monthly.step_date(start, 12), Some(date(2027, 1, 1)));
        assert_eq!(Granularity::Monthly.step_date(date(2026, 11, 15), 3), Some(date(2027, 2, 1)));
        assert_eq!(Granularity::Monthly.step_date(start, 120), Some(date(2036, 1, 1)));
    }

    #[test]
    fn test_yearly_steps_pin_to_new_year() {
        let start = date(2026, 10, 18);
        assert_eq!(Granularity::Yearly.step_date(start, 1), Some(date(2027, 1, 1)));
        assert_eq!(Granularity::Yearly.step_date(start, 30), Some(date(2056, 1, 1)));
    }

    #[test]
    fn test_step_out_of_range() {
        assert_eq!(Granularity::Yearly.step_date(NaiveDate::MAX, 1), None);
    }

    #[test]
    fn test_parse_and_display() {
        for g in Granularity::ALL {
            assert_eq!(g.to_string().parse::<Granularity>().unwrap(), g);
        }
        assert!("weekly".parse::<Granularity>().is_err());
        assert_eq!(Granularity::default(), Granularity::Monthly);
    }
}
