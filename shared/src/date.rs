//! Order dates
//!
//! Orders carry a plain calendar date exchanged as `yyyy-MM-dd`, the same
//! format produced by an HTML `<input type="date">`.

use chrono::{Local, NaiveDate};

/// Wire and form format of an order date.
pub const FECHA_FORMAT: &str = "%Y-%m-%d";

/// Parses a `yyyy-MM-dd` string.
///
/// Returns `None` for anything else, including surrounding whitespace.
pub fn parse_fecha(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, FECHA_FORMAT).ok()
}

/// Formats a date as `yyyy-MM-dd`.
#[inline]
pub fn format_fecha(date: NaiveDate) -> String {
    date.format(FECHA_FORMAT).to_string()
}

/// Today's local date, used to prefill a blank order form.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates_only() {
        assert_eq!(parse_fecha("2024-01-01"), NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(parse_fecha("01/01/2024"), None);
        assert_eq!(parse_fecha("2024-02-30"), None);
        assert_eq!(parse_fecha(""), None);
    }

    #[test]
    fn formats_with_zero_padding() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_fecha(d), "2024-03-05");
        assert_eq!(parse_fecha(&format_fecha(today())), Some(today()));
    }
}
