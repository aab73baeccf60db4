//! The end-to-end run: fetch once, then the visualization path and the analysis path.

use crate::aggregate::aggregator::WeeklyAggregator;
use crate::chart::renderer::{weekly_normals_chart, yearly_totals_chart};
use crate::chart::weekly_chart::WeeklyChart;
use crate::config::PipelineConfig;
use crate::error::RainWindowError;
use crate::filtering::WeekRange;
use crate::types::observation::RawObservation;
use crate::weather_data::fetcher::WeatherFetcher;
use crate::weather_data::http::HttpGet;
use crate::window::{find_min_window, WeekWindow};
use log::info;

/// Result of a full run.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    /// Per-year weekly totals over the chart weeks.
    pub yearly_chart: WeeklyChart,
    /// Multi-year weekly averages over the analysis weeks.
    pub normals_chart: WeeklyChart,
    pub driest: WeekWindow,
    pub window: usize,
}

impl PipelineReport {
    /// The one-line answer printed by the binary.
    pub fn summary(&self) -> String {
        if self.window == 2 {
            format!(
                "The two consecutive ISO weeks with the least average rain are weeks {} and {}.",
                self.driest.first_week, self.driest.last_week
            )
        } else {
            format!(
                "The {} consecutive ISO weeks with the least average rain are weeks {} to {}.",
                self.window, self.driest.first_week, self.driest.last_week
            )
        }
    }

    pub fn charts(&self) -> [&WeeklyChart; 2] {
        [&self.yearly_chart, &self.normals_chart]
    }
}

/// Runs the whole analysis for one configuration.
///
/// # Examples
///
/// ```no_run
/// use rain_window::{PipelineConfig, RainWindow};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let pipeline = RainWindow::new(reqwest::blocking::Client::new(), PipelineConfig::default());
/// let report = pipeline.run()?;
/// println!("{}", report.summary());
/// # Ok(())
/// # }
/// ```
pub struct RainWindow<C = reqwest::blocking::Client> {
    fetcher: WeatherFetcher<C>,
    config: PipelineConfig,
}

impl<C: HttpGet> RainWindow<C> {
    pub fn new(client: C, config: PipelineConfig) -> Self {
        let fetcher =
            WeatherFetcher::new(client, config.location).with_month_span(config.month_span);
        Self::with_fetcher(fetcher, config)
    }

    pub fn with_fetcher(fetcher: WeatherFetcher<C>, config: PipelineConfig) -> Self {
        Self { fetcher, config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn fetch(&self) -> Result<Vec<RawObservation>, RainWindowError> {
        Ok(self.fetcher.fetch_hourly_precipitation(
            self.config.start_year..self.config.end_year,
            &self.config.months,
        )?)
    }

    /// Weekly totals per year, restricted to the chart weeks.
    pub fn yearly_chart(
        &self,
        observations: &[RawObservation],
    ) -> Result<WeeklyChart, RainWindowError> {
        let range = WeekRange::try_from(self.config.chart_weeks)?;
        let weekly = WeeklyAggregator::new(self.config.metric)
            .weekly_sums(observations)?
            .filter_weeks(range);
        Ok(yearly_totals_chart(&weekly)?)
    }

    /// The driest run of `window` weeks among the multi-year weekly averages, plus the chart of
    /// those averages.
    pub fn driest_window(
        &self,
        observations: &[RawObservation],
    ) -> Result<(WeekWindow, WeeklyChart), RainWindowError> {
        let range = WeekRange::try_from(self.config.analysis_weeks)?;
        let normals = WeeklyAggregator::new(self.config.metric)
            .weekly_normals(observations)?
            .filter_weeks(range);
        let rows = normals.to_normals()?;

        let driest = find_min_window(&rows, self.config.window).ok_or(
            RainWindowError::NotEnoughWeeks {
                available: rows.len(),
                window: self.config.window,
            },
        )?;
        info!(
            "Driest {} weeks in {}: {}-{} (total {:.3})",
            self.config.window, range, driest.first_week, driest.last_week, driest.total
        );
        Ok((driest, weekly_normals_chart(&normals)?))
    }

    pub fn run(&self) -> Result<PipelineReport, RainWindowError> {
        // Validate both ranges before any network traffic.
        WeekRange::try_from(self.config.chart_weeks)?;
        WeekRange::try_from(self.config.analysis_weeks)?;

        let observations = self.fetch()?;
        let yearly_chart = self.yearly_chart(&observations)?;
        let (driest, normals_chart) = self.driest_window(&observations)?;
        Ok(PipelineReport {
            yearly_chart,
            normals_chart,
            driest,
            window: self.config.window,
        })
    }
}
