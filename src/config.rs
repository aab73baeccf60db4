use crate::types::observation::{LatLon, Metric};
use crate::types::period::MonthSpan;
use crate::window::DEFAULT_WINDOW;
use bon::Builder;

/// Everything the pipeline needs to know. All fields have defaults, so
/// `PipelineConfig::default()` reproduces the standard run: Oxford, the summers of 2013-2022.
///
/// # Examples
///
/// ```
/// use rain_window::PipelineConfig;
///
/// let config = PipelineConfig::builder()
///     .start_year(2018)
///     .end_year(2024)
///     .months(vec![6, 7, 8])
///     .build();
/// assert_eq!(config.window, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct PipelineConfig {
    #[builder(default = LatLon(51.754816, -1.254367))]
    pub location: LatLon,
    /// First year fetched.
    #[builder(default = 2013)]
    pub start_year: i32,
    /// Exclusive.
    #[builder(default = 2023)]
    pub end_year: i32,
    #[builder(default = vec![7, 8, 9])]
    pub months: Vec<u32>,
    #[builder(default)]
    pub month_span: MonthSpan,
    #[builder(default)]
    pub metric: Metric,
    /// ISO weeks shown in the per-year chart, inclusive.
    #[builder(default = (25, 40))]
    pub chart_weeks: (u32, u32),
    /// ISO weeks searched for the driest window, inclusive.
    #[builder(default = (30, 40))]
    pub analysis_weeks: (u32, u32),
    #[builder(default = DEFAULT_WINDOW)]
    pub window: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
