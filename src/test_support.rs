//! Canned HTTP responses for unit tests.

use crate::weather_data::error::FetchError;
use crate::weather_data::http::{ApiRequest, HttpGet};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde_json::json;
use std::cell::RefCell;

type HourlyValue = Box<dyn Fn(NaiveDateTime) -> Option<f64>>;

/// Answers archive requests with one synthetic reading per hour between `start_date` and
/// `end_date`, and history requests with seven days of sunshine. Records every request.
pub struct FixtureClient {
    hourly: HourlyValue,
    sunshine: Option<f64>,
    broken_period: Option<String>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl Default for FixtureClient {
    fn default() -> Self {
        Self::hourly(|_| Some(0.0))
    }
}

impl FixtureClient {
    pub fn hourly(value: impl Fn(NaiveDateTime) -> Option<f64> + 'static) -> Self {
        Self {
            hourly: Box::new(value),
            sunshine: None,
            broken_period: None,
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn constant_rain(mm: f64) -> Self {
        Self::hourly(move |_| Some(mm))
    }

    pub fn constant_sunshine(hours: f64) -> Self {
        let mut client = Self::default();
        client.sunshine = Some(hours);
        client
    }

    /// Answers requests for `period` (e.g. `"2020-08"`) with a body that is not JSON.
    pub fn with_broken_period(mut self, period: &str) -> Self {
        self.broken_period = Some(period.to_string());
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    fn archive_body(&self, request: &ApiRequest) -> String {
        let parse = |key: &str| {
            request
                .query_value(key)
                .and_then(|v| NaiveDate::parse_from_str(v, "%Y-%m-%d").ok())
                .expect("fixture requests carry start and end dates")
        };
        let start = parse("start_date").and_hms_opt(0, 0, 0).unwrap();
        let end = parse("end_date").and_hms_opt(23, 0, 0).unwrap();

        let mut time = Vec::new();
        let mut precipitation = Vec::new();
        let mut hour = start;
        while hour <= end {
            time.push(hour.format("%Y-%m-%dT%H:%M").to_string());
            precipitation.push((self.hourly)(hour));
            hour += Duration::hours(1);
        }
        let weathercode: Vec<i64> = precipitation
            .iter()
            .map(|p| if p.unwrap_or(0.0) > 0.0 { 61 } else { 1 })
            .collect();

        json!({
            "latitude": request.query_value("latitude"),
            "longitude": request.query_value("longitude"),
            "hourly": {
                "time": time,
                "precipitation": precipitation,
                "weathercode": weathercode,
            }
        })
        .to_string()
    }
}

impl HttpGet for FixtureClient {
    fn get(&self, request: &ApiRequest) -> Result<String, FetchError> {
        self.requests.borrow_mut().push(request.clone());

        if self.broken_period.as_deref() == Some(request.period.to_string().as_str()) {
            return Ok("<html>Service Unavailable</html>".to_string());
        }
        Ok(match self.sunshine {
            Some(hours) => json!({ "days": vec![json!({ "sunshine_hours": hours }); 7] }).to_string(),
            None => self.archive_body(request),
        })
    }
}
