use crate::aggregate::weekly_frame::ISO_WEEK;
use polars::prelude::{col, lit, LazyFrame};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("Week range {start}..={end} is empty")]
    Inverted { start: u32, end: u32 },

    #[error("Week {0} is not an ISO week number (1-53)")]
    OutOfRange(u32),
}

/// A closed range of ISO week numbers, `start <= end`, both in `1..=53`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekRange {
    start: u32,
    end: u32,
}

impl WeekRange {
    pub fn new(start: u32, end: u32) -> Result<Self, FilterError> {
        for week in [start, end] {
            if !(1..=53).contains(&week) {
                return Err(FilterError::OutOfRange(week));
            }
        }
        if start > end {
            return Err(FilterError::Inverted { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(self) -> u32 {
        self.start
    }

    pub fn end(self) -> u32 {
        self.end
    }

    pub fn contains(self, week: u32) -> bool {
        (self.start..=self.end).contains(&week)
    }
}

impl TryFrom<(u32, u32)> for WeekRange {
    type Error = FilterError;

    fn try_from((start, end): (u32, u32)) -> Result<Self, Self::Error> {
        WeekRange::new(start, end)
    }
}

impl fmt::Display for WeekRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "weeks {}-{}", self.start, self.end)
    }
}

pub trait WeekFilterExt {
    /// Keeps the rows whose `iso_week` column lies in `range` (inclusive on both ends).
    ///
    /// Row order is preserved, and applying the same range twice is the same as applying it
    /// once.
    fn filter_weeks(self, range: WeekRange) -> LazyFrame;
}

impl WeekFilterExt for LazyFrame {
    fn filter_weeks(self, range: WeekRange) -> LazyFrame {
        self.filter(
            col(ISO_WEEK)
                .gt_eq(lit(range.start as i32))
                .and(col(ISO_WEEK).lt_eq(lit(range.end as i32))),
        )
    }
}
