//! Chart presets for the weekly tables.

use crate::aggregate::weekly_frame::{
    WeeklyFrame, WeeklyNormalsFrame, WEEK_LABEL, WEEK_START, YEAR_LABEL,
};
use crate::chart::error::RenderError;
use crate::chart::weekly_chart::WeeklyChart;

/// Per-year weekly totals, one series per ISO year sharing a week-of-year x axis.
pub fn yearly_totals_chart(frame: &WeeklyFrame) -> Result<WeeklyChart, RenderError> {
    let metric = frame.metric();
    WeeklyChart::builder()
        .data(frame.grouped_chart_data()?)
        .labels(WEEK_LABEL)
        .values(metric.column_name())
        .group(YEAR_LABEL)
        .title(format!("Total {metric} by Week of the Year"))
        .x_title("Week of the Year")
        .y_title(format!("Total {metric}"))
        .build()
}

/// The weekly values as one continuous series, one bar per week, labelled by the week's Monday.
pub fn weekly_time_series_chart(frame: &WeeklyFrame) -> Result<WeeklyChart, RenderError> {
    let metric = frame.metric();
    WeeklyChart::builder()
        .data(frame.time_series_chart_data()?)
        .labels(WEEK_START)
        .values(metric.column_name())
        .title(format!("Weekly {metric}"))
        .x_title("Week Starting")
        .y_title(format!("{metric}"))
        .build()
}

/// The multi-year average of each ISO week as a single series.
pub fn weekly_normals_chart(frame: &WeeklyNormalsFrame) -> Result<WeeklyChart, RenderError> {
    let metric = frame.metric();
    WeeklyChart::builder()
        .data(frame.chart_data()?)
        .labels(WEEK_LABEL)
        .values(metric.column_name())
        .title(format!("Average {metric} by ISO Week"))
        .x_title("ISO Week")
        .y_title(format!("Average {metric}"))
        .build()
}
