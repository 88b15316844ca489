//! Display formatting helpers
//!
//! Pure functions over already-loaded values; no locale machinery, just
//! the en-US shapes the dashboard renders.

use chrono::{DateTime, Utc};

/// Format a dollar amount as US currency with thousands grouping.
///
/// # Examples
///
/// ```
/// use bizhub_app::format::usd;
///
/// assert_eq!(usd(12.5), "$12.50");
/// assert_eq!(usd(1234567.891), "$1,234,567.89");
/// assert_eq!(usd(0.0), "$0.00");
/// ```
pub fn usd(amount: f64) -> String {
    let negative = amount < 0.0;
    let total_cents = (amount.abs() * 100.0).round() as u64;
    let dollars = total_cents / 100;
    let cents = total_cents % 100;

    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{cents:02}")
}

/// Format a timestamp as a short en-US date ("Jan 5, 2026").
pub fn short_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Human-facing order code: the last six characters of the document id.
pub fn order_code(id: &str) -> &str {
    let start = id.len().saturating_sub(6);
    // Document ids are hex, so the boundary is always a char boundary.
    &id[start..]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn usd_groups_thousands() {
        assert_eq!(usd(1000.0), "$1,000.00");
        assert_eq!(usd(999.99), "$999.99");
        assert_eq!(usd(1234567.8), "$1,234,567.80");
    }

    #[test]
    fn usd_rounds_to_cents() {
        assert_eq!(usd(19.999), "$20.00");
        assert_eq!(usd(0.005), "$0.01");
    }

    #[test]
    fn usd_handles_negative_amounts() {
        assert_eq!(usd(-42.5), "-$42.50");
    }

    #[test]
    fn short_date_is_en_us() {
        let date = Utc.with_ymd_and_hms(2026, 1, 5, 12, 0, 0).unwrap();
        assert_eq!(short_date(&date), "Jan 5, 2026");
    }

    #[test]
    fn order_code_takes_last_six() {
        assert_eq!(order_code("66b2f0c4a1d2e3f4a5b6c7d8"), "b6c7d8");
        assert_eq!(order_code("abc"), "abc");
    }
}
