//! Reporting period
//!
//! A year-month that labels the summary. It does not scope the entry collections.

use super::error::LedgerError;
use chrono::{Datelike, Month, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// A calendar year-month, e.g. `2026-10`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    /// Create a period; `None` if `month` is not 1..=12
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Period { year, month })
    }

    /// The period containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        Period {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Human-readable label, e.g. `October 2026`
    pub fn label(&self) -> String {
        let name = u8::try_from(self.month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map(|m| m.name())
            .unwrap_or("Unknown");
        format!("{} {}", name, self.year)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Period {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (year, month) = trimmed
            .split_once('-')
            .ok_or_else(|| LedgerError::invalid_period(s))?;

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if year.len() != 4 || month.len() != 2 || !all_digits(year) || !all_digits(month) {
            return Err(LedgerError::invalid_period(s));
        }

        let year: i32 = year.parse().map_err(|_| LedgerError::invalid_period(s))?;
        let month: u32 = month.parse().map_err(|_| LedgerError::invalid_period(s))?;

        Period::new(year, month).ok_or_else(|| LedgerError::invalid_period(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("2026-10", 2026, 10)]
    #[case(" 2027-01 ", 2027, 1)]
    #[case("1999-12", 1999, 12)]
    fn test_parse_period(#[case] input: &str, #[case] year: i32, #[case] month: u32) {
        let period: Period = input.parse().unwrap();
        assert_eq!(period.year(), year);
        assert_eq!(period.month(), month);
    }

    #[rstest]
    #[case::month_out_of_range("2026-13")]
    #[case::month_zero("2026-00")]
    #[case::missing_dash("202610")]
    #[case::full_date("2026-10-01")]
    #[case::short_year("26-10")]
    #[case::empty("")]
    #[case::signed_year("+202-10")]
    #[case::negative_year("-202-10")]
    #[case::signed_month("2026-+1")]
    fn test_parse_period_errors(#[case] input: &str) {
        assert!(matches!(
            input.parse::<Period>(),
            Err(LedgerError::InvalidPeriod { .. })
        ));
    }

    #[rstest]
    #[case(2026, 10, "October 2026")]
    #[case(2027, 1, "January 2027")]
    fn test_label(#[case] year: i32, #[case] month: u32, #[case] expected: &str) {
        assert_eq!(Period::new(year, month).unwrap().label(), expected);
    }

    #[test]
    fn test_display_zero_pads_month() {
        assert_eq!(Period::new(2026, 3).unwrap().to_string(), "2026-03");
    }

    #[test]
    fn test_containing() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        assert_eq!(Period::containing(date), Period::new(2026, 10).unwrap());
    }
}
