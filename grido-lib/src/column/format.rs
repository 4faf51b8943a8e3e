//! Value formatting per column kind

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

use crate::model::Value;

/// How a column turns values into display text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ColumnKind {
    /// The value's plain string form.
    #[default]
    Text,
    /// Fixed-point number with thousands grouping.
    Number {
        decimals: u32,
        dec_point: String,
        thousands_sep: String,
    },
    /// Date/time rendered with a `chrono` format string.
    Date { format: String },
}

impl ColumnKind {
    /// Number kind with `decimals` places, `.` as decimal point and `,`
    /// between thousands.
    pub fn number(decimals: u32) -> Self {
        Self::Number {
            decimals,
            dec_point: ".".to_string(),
            thousands_sep: ",".to_string(),
        }
    }

    /// Date kind with the given `chrono` format string.
    pub fn date(format: impl Into<String>) -> Self {
        Self::Date {
            format: format.into(),
        }
    }

    /// Default date format: day.month.year.
    pub const DEFAULT_DATE_FORMAT: &'static str = "%d.%m.%Y";

    /// Formats a value. Values this kind cannot interpret fall back to their
    /// plain string form; `Null` is always empty.
    pub fn format(&self, value: &Value) -> String {
        if value.is_null() {
            return String::new();
        }

        match self {
            Self::Text => value.to_plain_string(),
            Self::Number {
                decimals,
                dec_point,
                thousands_sep,
            } => match to_decimal(value) {
                Some(number) => format_number(number, *decimals, dec_point, thousands_sep),
                None => value.to_plain_string(),
            },
            Self::Date { format } => match to_datetime(value) {
                Some(dt) => dt.format(format).to_string(),
                None => value.to_plain_string(),
            },
        }
    }
}

fn to_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Int(n) => Some(Decimal::from(*n)),
        Value::Long(n) => Some(Decimal::from(*n)),
        Value::Float(n) => Decimal::from_f64(*n),
        Value::Decimal(d) => Some(*d),
        Value::String(s) => Decimal::from_str(s.trim()).ok(),
        _ => None,
    }
}

fn to_datetime(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::DateTime(dt) => Some(*dt),
        Value::String(s) => parse_datetime(s.trim()),
        _ => None,
    }
}

fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn format_number(number: Decimal, decimals: u32, dec_point: &str, thousands_sep: &str) -> String {
    let rounded = number.round_dp(decimals);
    let digits = rounded.abs().to_string();
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), ""));

    let mut out = String::new();
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }

    let len = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(thousands_sep);
        }
        out.push(ch);
    }

    if decimals > 0 {
        out.push_str(dec_point);
        let mut frac = frac_part.to_string();
        while frac.len() < decimals as usize {
            frac.push('0');
        }
        out.push_str(&frac);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_groups_thousands() {
        let kind = ColumnKind::number(2);
        assert_eq!(kind.format(&Value::from(1234567)), "1,234,567.00");
        assert_eq!(kind.format(&Value::from("-1234.567")), "-1,234.57");
        assert_eq!(kind.format(&Value::from(0.5)), "0.50");
    }

    #[test]
    fn number_without_decimals() {
        let kind = ColumnKind::Number {
            decimals: 0,
            dec_point: ",".to_string(),
            thousands_sep: " ".to_string(),
        };
        assert_eq!(kind.format(&Value::from(1000)), "1 000");
        assert_eq!(kind.format(&Value::from(999)), "999");
    }

    #[test]
    fn number_falls_back_to_plain_text() {
        let kind = ColumnKind::number(0);
        assert_eq!(kind.format(&Value::from("n/a")), "n/a");
        assert_eq!(kind.format(&Value::Null), "");
    }

    #[test]
    fn date_formats_strings_and_datetimes() {
        let kind = ColumnKind::date(ColumnKind::DEFAULT_DATE_FORMAT);
        assert_eq!(kind.format(&Value::from("2024-03-05")), "05.03.2024");
        assert_eq!(kind.format(&Value::from("2024-03-05 10:20:30")), "05.03.2024");

        let dt = DateTime::parse_from_rfc3339("2024-12-31T23:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(kind.format(&Value::from(dt)), "31.12.2024");
        assert_eq!(kind.format(&Value::from("soon")), "soon");
    }
}
