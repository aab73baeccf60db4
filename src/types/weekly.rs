use chrono::NaiveDate;
use serde::Serialize;

/// Anything that carries an ISO week number and one aggregated value.
///
/// Implemented by both weekly row types so that the window finder works on either.
pub trait WeekValue {
    fn iso_week(&self) -> u32;
    fn value(&self) -> f64;
}

/// The aggregate of one ISO week of one year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyRecord {
    pub iso_year: i32,
    /// Always in `1..=53`.
    pub iso_week: u32,
    /// Monday of the ISO week.
    pub week_start: NaiveDate,
    pub value: f64,
}

/// The average of one ISO week across every year in the fetched span.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekNormal {
    pub iso_week: u32,
    pub value: f64,
}

impl WeekValue for WeeklyRecord {
    fn iso_week(&self) -> u32 {
        self.iso_week
    }
    fn value(&self) -> f64 {
        self.value
    }
}

impl WeekValue for WeekNormal {
    fn iso_week(&self) -> u32 {
        self.iso_week
    }
    fn value(&self) -> f64 {
        self.value
    }
}
