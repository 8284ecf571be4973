//! Financial profile entered by the user

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Savings, cash flow and growth assumptions driving a projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialProfile {
    /// Current savings (net worth at projection start)
    pub savings: f64,

    /// Monthly take-home income
    pub monthly_income: f64,

    /// Monthly spending
    pub monthly_expenses: f64,

    /// Expected annual growth as a fraction (0.07 = 7%)
    pub annual_growth_rate: f64,
}

impl FinancialProfile {
    pub fn new(
        savings: f64,
        monthly_income: f64,
        monthly_expenses: f64,
        annual_growth_rate: f64,
    ) -> Self {
        Self {
            savings,
            monthly_income,
            monthly_expenses,
            annual_growth_rate,
        }
    }

    /// Net monthly contribution, clamped at zero
    ///
    /// Spending more than you earn does not draw down savings in this model.
    pub fn monthly_net(&self) -> f64 {
        (self.monthly_income - self.monthly_expenses).max(0.0)
    }

    pub fn get(&self, field: ProfileField) -> f64 {
        match field {
            ProfileField::Savings => self.savings,
            ProfileField::MonthlyIncome => self.monthly_income,
            ProfileField::MonthlyExpenses => self.monthly_expenses,
            ProfileField::AnnualGrowthRate => self.annual_growth_rate,
        }
    }

    /// Copy of this profile with one field replaced
    pub fn with_field(mut self, field: ProfileField, value: f64) -> Self {
        match field {
            ProfileField::Savings => self.savings = value,
            ProfileField::MonthlyIncome => self.monthly_income = value,
            ProfileField::MonthlyExpenses => self.monthly_expenses = value,
            ProfileField::AnnualGrowthRate => self.annual_growth_rate = value,
        }
        self
    }
}

impl Default for FinancialProfile {
    fn default() -> Self {
        Self {
            savings: 10_000.0,
            monthly_income: 6_000.0,
            monthly_expenses: 3_500.0,
            annual_growth_rate: 0.07,
        }
    }
}

/// One editable field of the profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfileField {
    Savings,
    MonthlyIncome,
    MonthlyExpenses,
    AnnualGrowthRate,
}

impl ProfileField {
    pub const ALL: [ProfileField; 4] = [
        ProfileField::Savings,
        ProfileField::MonthlyIncome,
        ProfileField::MonthlyExpenses,
        ProfileField::AnnualGrowthRate,
    ];

    /// Key used in the persisted JSON record
    pub fn key(&self) -> &'static str {
        match self {
            ProfileField::Savings => "savings",
            ProfileField::MonthlyIncome => "monthlyIncome",
            ProfileField::MonthlyExpenses => "monthlyExpenses",
            ProfileField::AnnualGrowthRate => "annualGrowthRate",
        }
    }

    /// Form label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::Savings => "Current Savings",
            ProfileField::MonthlyIncome => "Monthly Income",
            ProfileField::MonthlyExpenses => "Monthly Expenses",
            ProfileField::AnnualGrowthRate => "Expected Annual Growth (%)",
        }
    }

    /// Growth is typed in percent and stored as a fraction
    pub fn is_percentage(&self) -> bool {
        matches!(self, ProfileField::AnnualGrowthRate)
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ProfileField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "savings" => Ok(ProfileField::Savings),
            "monthlyincome" | "income" => Ok(ProfileField::MonthlyIncome),
            "monthlyexpenses" | "expenses" => Ok(ProfileField::MonthlyExpenses),
            "annualgrowthrate" | "growth" => Ok(ProfileField::AnnualGrowthRate),
            other => Err(format!("Unknown profile field: {}", other)),
        }
    }
}

/// Parse free-form numeric text from the input form
///
/// Everything except digits, `.` and `-` is stripped first, so `"$1,234.50"`
/// reads as 1234.5. Text that still does not parse coerces to 0.
pub fn coerce_number(text: &str) -> f64 {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    cleaned.parse::<f64>().unwrap_or(0.0)
}
