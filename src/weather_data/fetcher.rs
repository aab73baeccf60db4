//! Pages through the remote archives one (year, period) at a time.

use crate::types::observation::{LatLon, RawObservation};
use crate::types::period::{FetchPeriod, IsoWeekId, Month, MonthSpan};
use crate::weather_data::archive::{ArchiveResponse, ARCHIVE_URL, HOURLY_FIELDS};
use crate::weather_data::error::FetchError;
use crate::weather_data::history::{history_url, HistoryResponse};
use crate::weather_data::http::{ApiRequest, HttpGet};
use log::{debug, info};
use std::ops::Range;

/// Fetches raw observations for a fixed location.
///
/// Requests are issued sequentially, one per (year, period), and the returned observations
/// keep request order. Any failed request aborts the whole fetch; there is no retry.
///
/// # Examples
///
/// ```no_run
/// use rain_window::{LatLon, WeatherFetcher};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let fetcher = WeatherFetcher::new(reqwest::blocking::Client::new(), LatLon(51.75, -1.25));
/// let observations = fetcher.fetch_hourly_precipitation(2019..2021, &[7, 8])?;
/// println!("{} hourly observations", observations.len());
/// # Ok(())
/// # }
/// ```
pub struct WeatherFetcher<C = reqwest::blocking::Client> {
    client: C,
    location: LatLon,
    archive_url: String,
    month_span: MonthSpan,
}

impl<C: HttpGet> WeatherFetcher<C> {
    pub fn new(client: C, location: LatLon) -> Self {
        Self {
            client,
            location,
            archive_url: ARCHIVE_URL.to_string(),
            month_span: MonthSpan::default(),
        }
    }

    pub fn with_archive_url(mut self, archive_url: impl Into<String>) -> Self {
        self.archive_url = archive_url.into();
        self
    }

    pub fn with_month_span(mut self, month_span: MonthSpan) -> Self {
        self.month_span = month_span;
        self
    }

    pub fn location(&self) -> LatLon {
        self.location
    }

    /// Builds the archive request for one month.
    pub fn archive_request(&self, month: Month) -> Result<ApiRequest, FetchError> {
        let period = FetchPeriod::Month(month);
        let (start, end) = self
            .month_span
            .date_range(month)
            .ok_or(FetchError::InvalidPeriod { period })?;
        Ok(ApiRequest::new(period, self.archive_url.as_str())
            .param("latitude", self.location.0)
            .param("longitude", self.location.1)
            .param("hourly", HOURLY_FIELDS)
            .param("start_date", start.format("%Y-%m-%d"))
            .param("end_date", end.format("%Y-%m-%d")))
    }

    /// Hourly precipitation (and weather codes) for every `month` of every year in `years`.
    pub fn fetch_hourly_precipitation(
        &self,
        years: Range<i32>,
        months: &[u32],
    ) -> Result<Vec<RawObservation>, FetchError> {
        let mut observations = Vec::new();
        for year in years {
            for &month in months {
                let request = self.archive_request(Month::new(month, year))?;
                info!("Fetching hourly archive data for {}", request.period);
                let body = HttpGet::get(&self.client, &request)?;
                let page = ArchiveResponse::from_body(request.period, &body)?
                    .into_observations(request.period)?;
                debug!("{} observations for {}", page.len(), request.period);
                observations.extend(page);
            }
        }
        info!("Fetched {} hourly observations", observations.len());
        Ok(observations)
    }

    /// Daily sunshine hours for every ISO week in `weeks` of every year in `years`, from the
    /// per-week history endpoint at `base_url`.
    pub fn fetch_weekly_sunshine(
        &self,
        base_url: &str,
        years: Range<i32>,
        weeks: &[u32],
    ) -> Result<Vec<RawObservation>, FetchError> {
        let mut observations = Vec::new();
        for year in years {
            for &week in weeks {
                let week = IsoWeekId::new(year, week);
                let period = FetchPeriod::Week(week);
                if week.monday().is_none() {
                    return Err(FetchError::InvalidPeriod { period });
                }
                let request = ApiRequest::new(period, history_url(base_url, week));
                info!("Fetching sunshine history for {}", period);
                let body = HttpGet::get(&self.client, &request)?;
                let page = HistoryResponse::from_body(period, &body)?.into_observations(week)?;
                debug!("{} observations for {}", page.len(), period);
                observations.extend(page);
            }
        }
        info!("Fetched {} daily sunshine observations", observations.len());
        Ok(observations)
    }
}
