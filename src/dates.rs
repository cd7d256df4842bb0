use chrono::{DateTime, NaiveDate, NaiveDateTime};
use lazy_static::lazy_static;
use regex::Regex;

const MAX_MASK_DIGITS: usize = 8;

const LOOSE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"];

lazy_static! {
    static ref DISPLAY_DATE: Regex = Regex::new(r"^(\d{1,2})[/.\-](\d{1,2})[/.\-](\d{2,4})$")
        .expect("Failed to create display date regex");
    static ref CANONICAL_DATE: Regex = Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").unwrap();
}

/// Progressive `DD/MM/YYYY` mask over raw keystrokes. Keeps digits only,
/// caps them at eight, and never validates; masking is display-only.
pub fn mask_input(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(MAX_MASK_DIGITS)
        .collect();

    match digits.len() {
        0..=2 => digits,
        3..=4 => format!("{}/{}", &digits[..2], &digits[2..]),
        _ => format!("{}/{}/{}", &digits[..2], &digits[2..4], &digits[4..]),
    }
}

/**
Converts a typed `D/M/Y` date (separators `/`, `.` or `-`) to the canonical
`YYYY-MM-DD` form, or an empty string when the shape or the month/day bounds
fail. Day-of-month is only bounded to [1, 31]; `31/02/2024` canonicalizes
as-is and it is the caller's data that is malformed, not the conversion.
*/
pub fn to_canonical(display: &str) -> String {
    let Some(captures) = DISPLAY_DATE.captures(display.trim()) else {
        return String::new();
    };

    let day: u32 = captures[1].parse().unwrap_or(0);
    let month: u32 = captures[2].parse().unwrap_or(0);
    let year_digits = &captures[3];
    let mut year: i32 = year_digits.parse().unwrap_or(0);

    // Two-digit years pivot at 70: 70 -> 1970, 69 -> 2069.
    if year_digits.len() == 2 {
        year = if year >= 70 { 1900 + year } else { 2000 + year };
    }

    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return String::new();
    }

    format!("{year:04}-{month:02}-{day:02}")
}

/// Inverse of [`to_canonical`]: `YYYY-MM-DD` back to the `DD/MM/YYYY`
/// editing form, empty string when the input is not canonical.
pub fn to_display(canonical: &str) -> String {
    match CANONICAL_DATE.captures(canonical.trim()) {
        Some(captures) => format!("{}/{}/{}", &captures[3], &captures[2], &captures[1]),
        None => String::new(),
    }
}

/// Best-effort calendar-day read used only by the filter engine. Accepts
/// ISO dates and datetimes (with or without offset) and strips the time,
/// so same-day comparisons are exact. Absent or unparseable input is
/// `None`, which date filters treat as "no constraint".
pub fn parse_loose(value: Option<&str>) -> Option<NaiveDate> {
    let raw = value?.trim();

    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.date_naive());
    }

    LOOSE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|datetime| datetime.date())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn should_mask_progressively() {
        assert_eq!(mask_input(""), "");
        assert_eq!(mask_input("1"), "1");
        assert_eq!(mask_input("15"), "15");
        assert_eq!(mask_input("150"), "15/0");
        assert_eq!(mask_input("1503"), "15/03");
        assert_eq!(mask_input("15032"), "15/03/2");
        assert_eq!(mask_input("15032024"), "15/03/2024");
    }

    #[test_log::test]
    fn should_mask_ignoring_non_digits_and_overflow() {
        assert_eq!(mask_input("abc15"), "15");
        assert_eq!(mask_input("15/03/2024"), "15/03/2024");
        assert_eq!(mask_input("150320249999"), "15/03/2024");
    }

    #[test_log::test]
    fn should_canonicalize_full_dates() {
        assert_eq!(to_canonical("15/03/2024"), "2024-03-15");
        assert_eq!(to_canonical("1/2/2024"), "2024-02-01");
        assert_eq!(to_canonical("15.03.2024"), "2024-03-15");
        assert_eq!(to_canonical("15-03-2024"), "2024-03-15");
    }

    #[test_log::test]
    fn should_expand_two_digit_years_at_the_70_pivot() {
        assert_eq!(to_canonical("01/01/70"), "1970-01-01");
        assert_eq!(to_canonical("01/01/69"), "2069-01-01");
        assert_eq!(to_canonical("31/12/99"), "1999-12-31");
        assert_eq!(to_canonical("01/01/00"), "2000-01-01");
    }

    #[test_log::test]
    fn should_reject_out_of_bound_fields() {
        assert_eq!(to_canonical("31/13/2024"), "");
        assert_eq!(to_canonical("00/10/2024"), "");
        assert_eq!(to_canonical("32/10/2024"), "");
        assert_eq!(to_canonical("not a date"), "");
        assert_eq!(to_canonical(""), "");
    }

    #[test_log::test]
    fn should_keep_day_overflow_unchecked() {
        // Day-of-month is bounded to [1, 31] only; 31/02 still canonicalizes.
        assert_eq!(to_canonical("31/02/2024"), "2024-02-31");
    }

    #[test_log::test]
    fn should_format_canonical_for_display() {
        assert_eq!(to_display("2024-03-15"), "15/03/2024");
        assert_eq!(to_display("2024-3-15"), "");
        assert_eq!(to_display("15/03/2024"), "");
        assert_eq!(to_display(""), "");
    }

    #[test_log::test]
    fn should_round_trip_display_dates() {
        assert_eq!(to_display(&to_canonical("05/04/2024")), "05/04/2024");
        assert_eq!(to_display(&to_canonical("01/01/70")), "01/01/1970");
    }

    #[test_log::test]
    fn should_parse_loose_iso_shapes() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();

        assert_eq!(parse_loose(Some("2024-03-15")), Some(day));
        assert_eq!(parse_loose(Some("2024-03-15T18:30:00")), Some(day));
        assert_eq!(parse_loose(Some("2024-03-15T18:30:00Z")), Some(day));
        assert_eq!(parse_loose(Some("2024-03-15 18:30:00")), Some(day));
    }

    #[test_log::test]
    fn should_parse_loose_to_none_on_garbage() {
        assert_eq!(parse_loose(None), None);
        assert_eq!(parse_loose(Some("")), None);
        assert_eq!(parse_loose(Some("  ")), None);
        assert_eq!(parse_loose(Some("em breve")), None);
    }
}
