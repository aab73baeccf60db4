//! Calendar periods used to page through the remote archives.

use chrono::{Datelike, Months, NaiveDate, Weekday};
use std::fmt;
use std::fmt::{Display, Formatter};

/// A calendar month of a specific year.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct Month(pub i32, pub u32);

impl Month {
    pub fn new(month: u32, year: i32) -> Self {
        Self(year, month)
    }
    pub fn year(self) -> i32 {
        self.0
    }
    pub fn month(self) -> u32 {
        self.1
    }

    /// First day of the month, `None` if the month number is not in `1..=12`.
    pub fn first_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.0, self.1, 1)
    }

    /// Last day of the month, accounting for leap years.
    pub fn last_day(self) -> Option<NaiveDate> {
        self.first_day()?
            .checked_add_months(Months::new(1))?
            .pred_opt()
    }
}

impl Display for Month {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.0, self.1)
    }
}

/// An ISO-8601 week, identified by its ISO year and week number.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct IsoWeekId {
    pub year: i32,
    pub week: u32,
}

impl IsoWeekId {
    pub fn new(year: i32, week: u32) -> Self {
        Self { year, week }
    }

    /// Monday of the week, `None` if the year has no such week (e.g. week 53 of 2021).
    pub fn monday(self) -> Option<NaiveDate> {
        NaiveDate::from_isoywd_opt(self.year, self.week, Weekday::Mon)
    }
}

impl Display for IsoWeekId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-W{:02}", self.year, self.week)
    }
}

/// One page of remote data. Every request, log line and fetch error carries one of these.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FetchPeriod {
    Month(Month),
    Week(IsoWeekId),
}

impl Display for FetchPeriod {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            FetchPeriod::Month(month) => write!(f, "{month}"),
            FetchPeriod::Week(week) => write!(f, "{week}"),
        }
    }
}

/// How much of a month a single archive request covers.
///
/// `ThroughDay28` reproduces the historic behaviour of requesting every month as if it ended on
/// the 28th, which silently drops the last one to three days of most months. `FullMonth` is the
/// default.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum MonthSpan {
    #[default]
    FullMonth,
    ThroughDay28,
}

impl MonthSpan {
    /// Inclusive `(start_date, end_date)` of the request for `month`.
    pub fn date_range(self, month: Month) -> Option<(NaiveDate, NaiveDate)> {
        let start = month.first_day()?;
        let end = match self {
            MonthSpan::FullMonth => month.last_day()?,
            MonthSpan::ThroughDay28 => start.with_day(28)?,
        };
        Some((start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn full_month_covers_every_day() {
        assert_eq!(
            MonthSpan::FullMonth.date_range(Month::new(7, 2019)),
            Some((date(2019, 7, 1), date(2019, 7, 31)))
        );
        assert_eq!(
            MonthSpan::FullMonth.date_range(Month::new(9, 2019)),
            Some((date(2019, 9, 1), date(2019, 9, 30)))
        );
        assert_eq!(
            MonthSpan::FullMonth.date_range(Month::new(2, 2020)),
            Some((date(2020, 2, 1), date(2020, 2, 29)))
        );
        assert_eq!(
            MonthSpan::FullMonth.date_range(Month::new(12, 2020)),
            Some((date(2020, 12, 1), date(2020, 12, 31)))
        );
    }

    #[test]
    fn day_28_span_ends_on_the_28th() {
        assert_eq!(
            MonthSpan::ThroughDay28.date_range(Month::new(8, 2018)),
            Some((date(2018, 8, 1), date(2018, 8, 28)))
        );
    }

    #[test]
    fn invalid_month_has_no_range() {
        assert_eq!(MonthSpan::FullMonth.date_range(Month::new(13, 2018)), None);
        assert_eq!(MonthSpan::ThroughDay28.date_range(Month::new(0, 2018)), None);
    }

    #[test]
    fn iso_week_monday() {
        // 2020-W53 exists, 2021-W53 does not.
        assert_eq!(IsoWeekId::new(2020, 53).monday(), Some(date(2020, 12, 28)));
        assert_eq!(IsoWeekId::new(2021, 53).monday(), None);
        assert_eq!(IsoWeekId::new(2021, 1).monday(), Some(date(2021, 1, 4)));
    }

    #[test]
    fn periods_display_compactly() {
        assert_eq!(FetchPeriod::Month(Month::new(7, 2013)).to_string(), "2013-07");
        assert_eq!(FetchPeriod::Week(IsoWeekId::new(2013, 5)).to_string(), "2013-W05");
    }
}
