use crate::aggregate::error::AggregationError;
use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Nothing to chart: the table is empty")]
    EmptyTable,

    #[error("Required column '{0}' not found in chart data")]
    ColumnNotFound(String, #[source] PolarsError),

    #[error("Failed reading chart data: {0}")]
    DataFrameProcessing(#[from] PolarsError),

    #[error("Failed preparing chart data")]
    Aggregation(#[from] AggregationError),
}
