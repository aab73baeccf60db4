use crate::aggregate::error::AggregationError;
use crate::chart::error::RenderError;
use crate::filtering::FilterError;
use crate::weather_data::error::FetchError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RainWindowError {
    #[error("Fetch stage failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Aggregation stage failed: {0}")]
    Aggregation(#[from] AggregationError),

    #[error("Filter stage failed: {0}")]
    Filter(#[from] FilterError),

    #[error("Render stage failed: {0}")]
    Render(#[from] RenderError),

    #[error("Only {available} weeks left after filtering, need {window} for a window")]
    NotEnoughWeeks { available: usize, window: usize },
}
