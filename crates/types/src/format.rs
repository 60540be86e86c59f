//! Display formatting for money, quantities and document dates.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime};

/// Offset between the Buddhist and Gregorian calendar years.
pub const BUDDHIST_ERA_OFFSET: i32 = 543;

/// Formats a money value with two decimals and `,` thousands grouping.
///
/// Missing or non-finite values display as `0.00`.
pub fn format_amount(value: Option<f64>) -> String {
    let Some(n) = value.filter(|n| n.is_finite()) else {
        return "0.00".to_string();
    };

    let fixed = format!("{:.2}", n.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let grouped = group_thousands(int_part);

    if n < 0.0 && fixed != "0.00" {
        format!("-{}.{}", grouped, frac_part)
    } else {
        format!("{}.{}", grouped, frac_part)
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Formats a number in its shortest form: `150`, `10.5`.
///
/// Integral values never carry a trailing `.0`. Non-finite values yield an
/// empty string.
pub fn format_number(n: f64) -> String {
    if !n.is_finite() {
        return String::new();
    }
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Formats a CSS length magnitude without a trailing `.0` (`6`, `1.5`).
pub fn format_css_number(n: f32) -> String {
    if !n.is_finite() {
        return "0".to_string();
    }
    let rounded = (n * 1000.0).round() / 1000.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{}", rounded)
    }
}

/// Parses a document date given as an RFC 3339 timestamp or a plain `YYYY-MM-DD`.
///
/// Timestamps are shifted into `offset` before the calendar date is taken, so
/// the result does not depend on the host time zone.
pub fn parse_document_date(raw: &str, offset: FixedOffset) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&offset).date_naive());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(naive.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// `dd/mm/yyyy` in the Gregorian calendar.
pub fn format_dmy(date: NaiveDate) -> String {
    format!("{:02}/{:02}/{}", date.day(), date.month(), date.year())
}

/// `dd/mm/yyyy` in the Buddhist calendar.
pub fn format_dmy_buddhist(date: NaiveDate) -> String {
    format!(
        "{:02}/{:02}/{}",
        date.day(),
        date.month(),
        date.year() + BUDDHIST_ERA_OFFSET
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bangkok() -> FixedOffset {
        FixedOffset::east_opt(7 * 3600).unwrap()
    }

    #[test]
    fn amounts_are_grouped_with_two_decimals() {
        assert_eq!(format_amount(Some(150.0)), "150.00");
        assert_eq!(format_amount(Some(10.5)), "10.50");
        assert_eq!(format_amount(Some(1234567.891)), "1,234,567.89");
        assert_eq!(format_amount(Some(-1000.0)), "-1,000.00");
    }

    #[test]
    fn missing_or_invalid_amounts_display_as_zero() {
        assert_eq!(format_amount(None), "0.00");
        assert_eq!(format_amount(Some(f64::NAN)), "0.00");
        assert_eq!(format_amount(Some(f64::INFINITY)), "0.00");
    }

    #[test]
    fn numbers_use_shortest_form() {
        assert_eq!(format_number(1.0), "1");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(f64::NAN), "");
    }

    #[test]
    fn css_numbers_drop_trailing_zeroes() {
        assert_eq!(format_css_number(6.0), "6");
        assert_eq!(format_css_number(1.5), "1.5");
        assert_eq!(format_css_number(170.0), "170");
    }

    #[test]
    fn timestamps_are_shifted_into_the_configured_offset() {
        let date = parse_document_date("2025-09-01T17:00:00.000Z", bangkok()).unwrap();
        assert_eq!(format_dmy(date), "02/09/2025");
        assert_eq!(format_dmy_buddhist(date), "02/09/2568");
    }

    #[test]
    fn plain_dates_and_garbage() {
        let date = parse_document_date("2024-01-31", bangkok()).unwrap();
        assert_eq!(format_dmy(date), "31/01/2024");
        assert!(parse_document_date("not a date", bangkok()).is_none());
        assert!(parse_document_date("", bangkok()).is_none());
    }
}
