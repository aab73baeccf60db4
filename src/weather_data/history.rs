//! Typed schema of the per-week history response.
//!
//! The endpoint is addressed as `{base}/{year}/{week}` and answers with one entry per day of the
//! ISO week, starting on Monday:
//!
//! ```json
//! {"days": [{"sunshine_hours": 7.5}, {"sunshine_hours": null}]}
//! ```

use crate::types::observation::RawObservation;
use crate::types::period::{FetchPeriod, IsoWeekId};
use crate::weather_data::error::FetchError;
use chrono::Days;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct HistoryResponse {
    pub days: Vec<HistoryDay>,
}

#[derive(Debug, Deserialize)]
pub struct HistoryDay {
    #[serde(default)]
    pub sunshine_hours: Option<f64>,
}

pub fn history_url(base: &str, week: IsoWeekId) -> String {
    format!("{}/{}/{}", base.trim_end_matches('/'), week.year, week.week)
}

impl HistoryResponse {
    pub fn from_body(period: FetchPeriod, body: &str) -> Result<Self, FetchError> {
        serde_json::from_str(body).map_err(|e| FetchError::MalformedJson { period, source: e })
    }

    /// One observation per day, timestamped at midnight of that day.
    pub fn into_observations(self, week: IsoWeekId) -> Result<Vec<RawObservation>, FetchError> {
        let period = FetchPeriod::Week(week);
        if self.days.len() > 7 {
            return Err(FetchError::UnexpectedShape {
                period,
                message: format!("{} days reported for a single week", self.days.len()),
            });
        }
        let monday = week.monday().ok_or(FetchError::InvalidPeriod { period })?;

        self.days
            .into_iter()
            .zip(0u64..)
            .map(|(day, offset)| {
                let date = monday
                    .checked_add_days(Days::new(offset))
                    .ok_or(FetchError::InvalidPeriod { period })?;
                Ok(RawObservation::new(
                    date.and_time(Default::default()),
                    day.sunshine_hours,
                ))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate, Weekday};

    #[test]
    fn days_start_on_monday() -> Result<(), Box<dyn std::error::Error>> {
        let week = IsoWeekId::new(2021, 31);
        let period = FetchPeriod::Week(week);
        let body = r#"{"days": [{"sunshine_hours": 7.5}, {"sunshine_hours": null}, {}]}"#;
        let observations = HistoryResponse::from_body(period, body)?.into_observations(week)?;

        assert_eq!(observations.len(), 3);
        assert_eq!(
            observations[0].timestamp.date(),
            NaiveDate::from_ymd_opt(2021, 8, 2).unwrap()
        );
        assert_eq!(observations[0].timestamp.weekday(), Weekday::Mon);
        assert_eq!(observations[2].timestamp.weekday(), Weekday::Wed);
        assert_eq!(observations[0].value, Some(7.5));
        assert_eq!(observations[1].value, None);
        assert_eq!(observations[2].value, None);
        Ok(())
    }

    #[test]
    fn more_than_a_week_of_days_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
        let week = IsoWeekId::new(2021, 31);
        let body = format!(r#"{{"days": [{}]}}"#, vec![r#"{"sunshine_hours": 1.0}"#; 8].join(","));
        let err = HistoryResponse::from_body(FetchPeriod::Week(week), &body)?
            .into_observations(week)
            .unwrap_err();
        assert!(matches!(err, FetchError::UnexpectedShape { .. }));
        Ok(())
    }

    #[test]
    fn nonexistent_week_is_invalid() -> Result<(), Box<dyn std::error::Error>> {
        let week = IsoWeekId::new(2021, 53);
        let err = HistoryResponse::from_body(FetchPeriod::Week(week), r#"{"days": []}"#)?
            .into_observations(week)
            .unwrap_err();
        assert!(matches!(err, FetchError::InvalidPeriod { .. }));
        Ok(())
    }

    #[test]
    fn url_has_year_and_week_segments() {
        assert_eq!(
            history_url("https://example.org/history/", IsoWeekId::new(2019, 7)),
            "https://example.org/history/2019/7"
        );
    }
}
