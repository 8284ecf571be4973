//! Display formatting for currency, percentages and projection date labels
//!
//! All output is en-US: USD with no fraction digits, `Jan 5, 2026` style dates.

use chrono::NaiveDate;

use crate::projection::Granularity;

/// Format a dollar amount as whole US dollars, e.g. `$12,346` or `-$1,200`.
///
/// Rounds half away from zero. Non-finite values render as `NaN`, `$∞` or `-$∞`.
pub fn format_currency(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "$∞".to_string() } else { "-$∞".to_string() };
    }

    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let grouped = group_thousands(&digits);

    if rounded < 0.0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Format a fractional rate as a percentage with fixed decimals (0.07 -> "7.0%")
pub fn format_percent(rate: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, rate * 100.0)
}

/// Format a projection date the way its granularity is labelled
pub fn format_date_label(date: NaiveDate, granularity: Granularity) -> String {
    match granularity {
        Granularity::Daily => date.format("%b %-d, %Y").to_string(),
        Granularity::Monthly => date.format("%B %Y").to_string(),
        Granularity::Yearly => date.format("%Y").to_string(),
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
