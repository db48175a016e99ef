mod holidays;

pub use holidays::public_holiday;

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Proceed,
    Skip(SkipReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    Weekend,
    PublicHoliday(&'static str),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weekend => write!(f, "weekend"),
            Self::PublicHoliday(name) => write!(f, "public holiday ({name})"),
        }
    }
}

/// Decides whether a run should happen at all. Must be consulted before any
/// network activity: a `Skip` day produces no fetch, no email, no write.
pub fn check(date: NaiveDate) -> Verdict {
    if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
        return Verdict::Skip(SkipReason::Weekend);
    }
    if let Some(name) = holidays::public_holiday(date) {
        return Verdict::Skip(SkipReason::PublicHoliday(name));
    }
    Verdict::Proceed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_saturdays_and_sundays_are_skipped() {
        assert_eq!(
            check(date(2025, 11, 22)),
            Verdict::Skip(SkipReason::Weekend)
        );
        assert_eq!(
            check(date(2025, 11, 23)),
            Verdict::Skip(SkipReason::Weekend)
        );
    }

    #[test]
    fn test_weekday_holidays_are_skipped_with_their_name() {
        // Labour day 2025 falls on a Thursday.
        assert_eq!(
            check(date(2025, 5, 1)),
            Verdict::Skip(SkipReason::PublicHoliday("Svátek práce"))
        );
        // Easter Monday 2025.
        assert_eq!(
            check(date(2025, 4, 21)),
            Verdict::Skip(SkipReason::PublicHoliday("Velikonoční pondělí"))
        );
    }

    #[test]
    fn test_weekend_wins_over_a_holiday_on_the_same_day() {
        // St Wenceslas day 2025 falls on a Sunday.
        assert_eq!(
            check(date(2025, 9, 28)),
            Verdict::Skip(SkipReason::Weekend)
        );
    }

    #[test]
    fn test_ordinary_weekdays_proceed() {
        assert_eq!(check(date(2025, 11, 25)), Verdict::Proceed);
        assert_eq!(check(date(2025, 8, 25)), Verdict::Proceed);
    }

    #[test]
    fn test_skip_reasons_print_for_the_log() {
        assert_eq!(SkipReason::Weekend.to_string(), "weekend");
        assert_eq!(
            SkipReason::PublicHoliday("Svátek práce").to_string(),
            "public holiday (Svátek práce)"
        );
    }
}
