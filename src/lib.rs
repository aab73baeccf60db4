//! Finds the driest consecutive ISO weeks of the year at a location from historic hourly
//! weather archives, and charts the weekly totals per year.

mod aggregate;
mod chart;
mod config;
mod error;
mod filtering;
mod pipeline;
mod types;
mod weather_data;
mod window;

#[cfg(test)]
mod test_support;

pub use config::PipelineConfig;
pub use error::RainWindowError;
pub use pipeline::{PipelineReport, RainWindow};

pub use aggregate::aggregator::WeeklyAggregator;
pub use aggregate::error::AggregationError;
pub use aggregate::weekly_frame::*;

pub use chart::error::RenderError;
pub use chart::renderer::*;
pub use chart::weekly_chart::WeeklyChart;

pub use filtering::{FilterError, WeekFilterExt, WeekRange};
pub use window::{find_min_window, WeekWindow, DEFAULT_WINDOW};

pub use types::observation::{LatLon, Metric, RawObservation};
pub use types::period::{FetchPeriod, IsoWeekId, Month, MonthSpan};
pub use types::weather_code::WeatherCode;
pub use types::weekly::{WeekNormal, WeekValue, WeeklyRecord};

pub use weather_data::archive::ARCHIVE_URL;
pub use weather_data::error::FetchError;
pub use weather_data::fetcher::WeatherFetcher;
pub use weather_data::http::{ApiRequest, HttpGet};
