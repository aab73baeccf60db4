//! Buckets raw observations into ISO-8601 weeks.

use crate::aggregate::error::AggregationError;
use crate::aggregate::weekly_frame::{
    WeeklyFrame, WeeklyNormalsFrame, ISO_WEEK, ISO_YEAR, WEEK_START,
};
use crate::types::observation::{Metric, RawObservation};
use chrono::{Datelike, Days};
use log::debug;
use polars::prelude::*;

/// Aggregates one [`Metric`] of a sequence of observations per ISO week.
///
/// A week runs Monday to Sunday and belongs to the ISO year that contains its Thursday, so
/// 2019-12-30 is in 2020-W01 and 2021-01-03 is in 2020-W53. Weeks without observations do not
/// appear in any output.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeeklyAggregator {
    metric: Metric,
}

impl WeeklyAggregator {
    pub fn new(metric: Metric) -> Self {
        Self { metric }
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// One row per observation, keyed by ISO year and week.
    pub fn observation_frame(
        &self,
        observations: &[RawObservation],
    ) -> Result<DataFrame, AggregationError> {
        let mut iso_years = Vec::with_capacity(observations.len());
        let mut iso_weeks = Vec::with_capacity(observations.len());
        let mut week_starts = Vec::with_capacity(observations.len());
        let mut values = Vec::with_capacity(observations.len());

        for observation in observations {
            let date = observation.timestamp.date();
            let iso = date.iso_week();
            let monday = date - Days::new(u64::from(date.weekday().num_days_from_monday()));
            iso_years.push(iso.year());
            iso_weeks.push(iso.week() as i32);
            week_starts.push(monday.format("%Y-%m-%d").to_string());
            values.push(self.metric.extract(observation));
        }

        Ok(df!(
            ISO_YEAR => iso_years,
            ISO_WEEK => iso_weeks,
            WEEK_START => week_starts,
            self.metric.column_name() => values
        )?)
    }

    /// Weekly totals per (ISO year, ISO week). Missing values contribute nothing to the sum.
    pub fn weekly_sums(
        &self,
        observations: &[RawObservation],
    ) -> Result<WeeklyFrame, AggregationError> {
        debug!(
            "Summing {} over {} observations",
            self.metric,
            observations.len()
        );
        let value = self.metric.column_name();
        let frame = self
            .observation_frame(observations)?
            .lazy()
            .group_by([col(ISO_YEAR), col(ISO_WEEK)])
            .agg([col(WEEK_START).first(), col(value).sum()])
            .sort([ISO_YEAR, ISO_WEEK], SortMultipleOptions::default());
        Ok(WeeklyFrame::new(frame, self.metric))
    }

    /// Weekly averages per (ISO year, ISO week). Missing values are left out of both the total
    /// and the count; weeks with no values at all are dropped.
    pub fn weekly_means(
        &self,
        observations: &[RawObservation],
    ) -> Result<WeeklyFrame, AggregationError> {
        debug!(
            "Averaging {} over {} observations",
            self.metric,
            observations.len()
        );
        let value = self.metric.column_name();
        let frame = self
            .observation_frame(observations)?
            .lazy()
            .group_by([col(ISO_WEEK), col(ISO_YEAR)])
            .agg([col(WEEK_START).first(), col(value).mean()])
            .filter(col(value).is_not_null())
            .sort([ISO_YEAR, ISO_WEEK], SortMultipleOptions::default());
        Ok(WeeklyFrame::new(frame, self.metric))
    }

    /// The historical average of each ISO week: first the mean per (week, year), then the mean
    /// of those across years. Every year with data for a week weighs the same, however many
    /// observations it contributed.
    pub fn weekly_normals(
        &self,
        observations: &[RawObservation],
    ) -> Result<WeeklyNormalsFrame, AggregationError> {
        let value = self.metric.column_name();
        let frame = self
            .weekly_means(observations)?
            .frame
            .group_by([col(ISO_WEEK)])
            .agg([col(value).mean()])
            .sort([ISO_WEEK], SortMultipleOptions::default());
        Ok(WeeklyNormalsFrame::new(frame, self.metric))
    }
}
