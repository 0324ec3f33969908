//! Date check for free-text messages
//!
//! A message is accepted only when it is a `DD.MM.YYYY` date equal to today.

use chrono::NaiveDate;

/// Format used for parsing input, writing rows and quoting today's date.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Outcome of checking a free-text message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateCheck {
    /// Parsed and equal to today; carries the normalized `DD.MM.YYYY` text.
    Accepted(String),
    /// Unparsable, or a valid date other than today.
    Rejected,
}

/// Parses `input` as `DD.MM.YYYY`.
///
/// Any whitespace rejects the input; chrono would otherwise skip it before
/// each numeric field.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    if input.chars().any(char::is_whitespace) {
        return None;
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT).ok()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Checks `input` against `today`.
pub fn check_date(input: &str, today: NaiveDate) -> DateCheck {
    match parse_date(input) {
        Some(date) if date == today => DateCheck::Accepted(format_date(date)),
        _ => DateCheck::Rejected,
    }
}

/// Today's date in the local timezone.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn accepts_today() {
        let today = ymd(2030, 1, 1);
        assert_eq!(check_date("01.01.2030", today), DateCheck::Accepted("01.01.2030".into()));
    }

    #[test]
    fn rejects_other_days() {
        let today = ymd(2026, 10, 19);
        assert_eq!(check_date("01.01.2030", today), DateCheck::Rejected);
        assert_eq!(check_date("18.10.2026", today), DateCheck::Rejected);
    }

    #[test]
    fn rejects_garbage() {
        let today = ymd(2026, 10, 19);
        for input in ["not a date", "", "2026-10-19", "32.01.2026", "19.13.2026", "19.10"] {
            assert_eq!(check_date(input, today), DateCheck::Rejected, "{input:?}");
        }
    }

    #[test]
    fn normalizes_unpadded_input() {
        let today = ymd(2026, 3, 5);
        assert_eq!(check_date("5.3.2026", today), DateCheck::Accepted("05.03.2026".into()));
    }

    #[test]
    fn rejects_surrounding_or_inner_whitespace() {
        let today = ymd(2026, 10, 19);
        for input in [" 19.10.2026", "19.10.2026 ", " 19.10.2026 ", "19. 10.2026", "19.10.2026\n"] {
            assert_eq!(check_date(input, today), DateCheck::Rejected, "{input:?}");
        }
        assert_eq!(check_date("19.10.2026", today), DateCheck::Accepted("19.10.2026".into()));
    }

    #[test]
    fn formats_with_leading_zeros() {
        assert_eq!(format_date(ymd(2026, 1, 9)), "09.01.2026");
    }
}
