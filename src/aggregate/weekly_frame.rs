//! Lazy wrappers around the aggregated weekly tables.

use crate::aggregate::error::AggregationError;
use crate::filtering::{WeekFilterExt, WeekRange};
use crate::types::observation::Metric;
use crate::types::period::IsoWeekId;
use crate::types::weekly::{WeekNormal, WeeklyRecord};
use polars::prelude::{col, Column, DataFrame, DataType, LazyFrame, Series};

pub const ISO_YEAR: &str = "iso_year";
pub const ISO_WEEK: &str = "iso_week";
/// Monday of the ISO week, formatted `YYYY-MM-DD`.
pub const WEEK_START: &str = "week_start";
/// String rendition of `iso_year`, used to group chart series.
pub const YEAR_LABEL: &str = "year";
/// String rendition of `iso_week`, used as the chart x axis.
pub const WEEK_LABEL: &str = "week";

/// One row per (ISO year, ISO week), ordered chronologically.
///
/// Columns: `iso_year` (i32), `iso_week` (i32), `week_start` (str) and the metric's column (f64).
#[derive(Clone)]
pub struct WeeklyFrame {
    pub frame: LazyFrame,
    metric: Metric,
}

impl WeeklyFrame {
    pub fn new(frame: LazyFrame, metric: Metric) -> Self {
        Self { frame, metric }
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Restricts the table to the ISO weeks in `range`.
    pub fn filter_weeks(&self, range: WeekRange) -> WeeklyFrame {
        WeeklyFrame::new(self.frame.clone().filter_weeks(range), self.metric)
    }

    pub fn collect(&self) -> Result<DataFrame, AggregationError> {
        Ok(self.frame.clone().collect()?)
    }

    pub fn to_records(&self) -> Result<Vec<WeeklyRecord>, AggregationError> {
        let df = self.collect()?;
        let years = i32_values(&df, ISO_YEAR)?;
        let weeks = i32_values(&df, ISO_WEEK)?;
        let values = f64_values(&df, self.metric.column_name())?;

        years
            .into_iter()
            .zip(weeks)
            .zip(values)
            .map(|((iso_year, week), value)| {
                let invalid = || AggregationError::InvalidIsoWeek {
                    year: iso_year,
                    week,
                };
                let iso_week = u32::try_from(week).map_err(|_| invalid())?;
                let week_start = IsoWeekId::new(iso_year, iso_week)
                    .monday()
                    .ok_or_else(invalid)?;
                Ok(WeeklyRecord {
                    iso_year,
                    iso_week,
                    week_start,
                    value,
                })
            })
            .collect()
    }

    /// Table for a grouped chart: adds string `year` and `week` label columns.
    pub fn grouped_chart_data(&self) -> Result<DataFrame, AggregationError> {
        Ok(self
            .frame
            .clone()
            .with_columns([
                col(ISO_YEAR).cast(DataType::String).alias(YEAR_LABEL),
                col(ISO_WEEK).cast(DataType::String).alias(WEEK_LABEL),
            ])
            .collect()?)
    }

    /// Table for a continuous single-series chart, labelled by `week_start`.
    pub fn time_series_chart_data(&self) -> Result<DataFrame, AggregationError> {
        Ok(self
            .frame
            .clone()
            .select([col(WEEK_START), col(self.metric.column_name())])
            .collect()?)
    }
}

/// One row per ISO week, each the average of that week across all fetched years, ordered by
/// week number.
///
/// Columns: `iso_week` (i32) and the metric's column (f64).
#[derive(Clone)]
pub struct WeeklyNormalsFrame {
    pub frame: LazyFrame,
    metric: Metric,
}

impl WeeklyNormalsFrame {
    pub fn new(frame: LazyFrame, metric: Metric) -> Self {
        Self { frame, metric }
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    pub fn filter_weeks(&self, range: WeekRange) -> WeeklyNormalsFrame {
        WeeklyNormalsFrame::new(self.frame.clone().filter_weeks(range), self.metric)
    }

    pub fn collect(&self) -> Result<DataFrame, AggregationError> {
        Ok(self.frame.clone().collect()?)
    }

    pub fn to_normals(&self) -> Result<Vec<WeekNormal>, AggregationError> {
        let df = self.collect()?;
        let weeks = i32_values(&df, ISO_WEEK)?;
        let values = f64_values(&df, self.metric.column_name())?;

        weeks
            .into_iter()
            .zip(values)
            .map(|(week, value)| match u32::try_from(week) {
                Ok(iso_week @ 1..=53) => Ok(WeekNormal { iso_week, value }),
                _ => Err(AggregationError::WeekOutOfRange(week)),
            })
            .collect()
    }

    /// Table for a single-series chart, labelled by week number.
    pub fn chart_data(&self) -> Result<DataFrame, AggregationError> {
        Ok(self
            .frame
            .clone()
            .with_column(col(ISO_WEEK).cast(DataType::String).alias(WEEK_LABEL))
            .collect()?)
    }
}

fn column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Series, AggregationError> {
    df.column(name)
        .map(Column::as_materialized_series)
        .map_err(|e| AggregationError::ColumnNotFound(name.to_string(), e))
}

fn i32_values(df: &DataFrame, name: &str) -> Result<Vec<i32>, AggregationError> {
    column(df, name)?
        .i32()?
        .into_iter()
        .enumerate()
        .map(|(row, value)| {
            value.ok_or_else(|| AggregationError::NullValue {
                column: name.to_string(),
                row,
            })
        })
        .collect()
}

fn f64_values(df: &DataFrame, name: &str) -> Result<Vec<f64>, AggregationError> {
    column(df, name)?
        .f64()?
        .into_iter()
        .enumerate()
        .map(|(row, value)| {
            value.ok_or_else(|| AggregationError::NullValue {
                column: name.to_string(),
                row,
            })
        })
        .collect()
}
