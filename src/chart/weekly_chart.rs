use crate::chart::error::RenderError;
use bon::bon;
use log::info;
use plotlars::{BarPlot, Plot};
use polars::prelude::DataFrame;
use std::collections::BTreeSet;

/// A bar chart over weekly data, ready to be displayed.
///
/// With a `group` column every distinct value of that column becomes its own series and the
/// series are drawn side by side per x-axis label. Without one the chart has a single series
/// named after the value column.
#[derive(Debug, Clone)]
pub struct WeeklyChart {
    data: DataFrame,
    labels: String,
    values: String,
    group: Option<String>,
    title: String,
    x_title: String,
    y_title: String,
    series: Vec<String>,
}

#[bon]
impl WeeklyChart {
    /// Validates the chart data and resolves the series names.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::EmptyTable`] when `data` has no rows and
    /// [`RenderError::ColumnNotFound`] when `labels`, `values` or `group` is not a column of
    /// `data`.
    #[builder]
    pub fn new(
        data: DataFrame,
        labels: &str,
        values: &str,
        group: Option<&str>,
        #[builder(into)] title: String,
        #[builder(into)] x_title: String,
        #[builder(into)] y_title: String,
    ) -> Result<Self, RenderError> {
        if data.height() == 0 {
            return Err(RenderError::EmptyTable);
        }
        for name in [labels, values].into_iter().chain(group) {
            data.column(name)
                .map_err(|e| RenderError::ColumnNotFound(name.to_string(), e))?;
        }

        let series = match group {
            Some(group) => data
                .column(group)?
                .as_materialized_series()
                .str()?
                .into_iter()
                .flatten()
                .map(str::to_string)
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect(),
            None => vec![values.to_string()],
        };

        Ok(Self {
            data,
            labels: labels.to_string(),
            values: values.to_string(),
            group: group.map(str::to_string),
            title,
            x_title,
            y_title,
            series,
        })
    }

    /// Series names in legend order.
    pub fn series(&self) -> &[String] {
        &self.series
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn data(&self) -> &DataFrame {
        &self.data
    }

    /// Displays the chart (opens it in the default browser).
    pub fn render(&self) {
        info!(
            "Rendering '{}' with {} series over {} rows",
            self.title,
            self.series.len(),
            self.data.height()
        );
        BarPlot::builder()
            .data(&self.data)
            .labels(&self.labels)
            .values(&self.values)
            .maybe_group(self.group.as_deref())
            .plot_title(self.title.as_str())
            .x_title(self.x_title.as_str())
            .y_title(self.y_title.as_str())
            .maybe_legend_title(self.group.as_ref().map(|_| "Year"))
            .build()
            .plot();
    }
}
