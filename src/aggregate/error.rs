use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AggregationError {
    #[error("Failed processing DataFrame: {0}")]
    DataFrameProcessing(#[from] PolarsError),

    #[error("Required column '{0}' not found in DataFrame")]
    ColumnNotFound(String, #[source] PolarsError),

    #[error("Column '{column}' has no value in row {row}")]
    NullValue { column: String, row: usize },

    #[error("Week number {0} is outside 1-53")]
    WeekOutOfRange(i32),

    #[error("ISO week {week} of {year} does not exist")]
    InvalidIsoWeek { year: i32, week: i32 },
}
