//! Typed schema of the hourly archive response and its conversion into observations.

use crate::types::observation::RawObservation;
use crate::types::period::FetchPeriod;
use crate::types::weather_code::WeatherCode;
use crate::weather_data::error::FetchError;
use chrono::{NaiveDate, NaiveDateTime};
use log::warn;
use serde::Deserialize;

pub const ARCHIVE_URL: &str = "https://archive-api.open-meteo.com/v1/archive";

/// Hourly fields requested from the archive.
pub const HOURLY_FIELDS: &str = "precipitation,weathercode";

#[derive(Debug, Deserialize)]
pub struct ArchiveResponse {
    pub hourly: HourlyBlock,
}

/// Parallel arrays, one entry per hour.
#[derive(Debug, Deserialize)]
pub struct HourlyBlock {
    pub time: Vec<String>,
    pub precipitation: Vec<Option<f64>>,
    #[serde(default, alias = "weather_code")]
    pub weathercode: Option<Vec<Option<i64>>>,
}

/// Parses an archive timestamp. The archive emits `YYYY-MM-DDTHH:MM`; seconds and bare dates
/// are accepted as well.
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .or_else(|_| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d").map(|d| d.and_time(Default::default()))
        })
}

impl ArchiveResponse {
    pub fn from_body(period: FetchPeriod, body: &str) -> Result<Self, FetchError> {
        serde_json::from_str(body).map_err(|e| FetchError::MalformedJson { period, source: e })
    }

    /// Flattens the parallel arrays into one observation per timestamp.
    pub fn into_observations(
        self,
        period: FetchPeriod,
    ) -> Result<Vec<RawObservation>, FetchError> {
        let HourlyBlock {
            time,
            precipitation,
            weathercode,
        } = self.hourly;

        if precipitation.len() != time.len() {
            return Err(FetchError::UnexpectedShape {
                period,
                message: format!(
                    "{} timestamps but {} precipitation values",
                    time.len(),
                    precipitation.len()
                ),
            });
        }
        if let Some(codes) = &weathercode {
            if codes.len() != time.len() {
                return Err(FetchError::UnexpectedShape {
                    period,
                    message: format!(
                        "{} timestamps but {} weather codes",
                        time.len(),
                        codes.len()
                    ),
                });
            }
        }

        let mut codes = weathercode.map(Vec::into_iter);
        time.into_iter()
            .zip(precipitation)
            .map(|(raw_time, value)| {
                let timestamp = parse_timestamp(&raw_time).map_err(|e| FetchError::Timestamp {
                    period,
                    value: raw_time.clone(),
                    source: e,
                })?;
                let code = codes
                    .as_mut()
                    .and_then(|it| it.next())
                    .flatten()
                    .and_then(|raw| {
                        let code = WeatherCode::from_i64(raw);
                        if code.is_none() {
                            warn!("Unknown weather code {} at {} ({})", raw, raw_time, period);
                        }
                        code
                    });
                Ok(RawObservation::new(timestamp, value).with_weather_code(code))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::period::Month;

    const PERIOD: FetchPeriod = FetchPeriod::Month(Month(2020, 7));

    #[test]
    fn parses_parallel_arrays() -> Result<(), Box<dyn std::error::Error>> {
        let body = r#"{
            "latitude": 51.75, "longitude": -1.25,
            "hourly_units": {"time": "iso8601", "precipitation": "mm"},
            "hourly": {
                "time": ["2020-07-01T00:00", "2020-07-01T01:00", "2020-07-01T02:00"],
                "precipitation": [0.0, null, 1.5],
                "weathercode": [1, 63, null]
            }
        }"#;
        let observations = ArchiveResponse::from_body(PERIOD, body)?.into_observations(PERIOD)?;

        assert_eq!(observations.len(), 3);
        assert_eq!(observations[1].timestamp, parse_timestamp("2020-07-01T01:00")?);
        assert_eq!(observations[1].value, None);
        assert_eq!(observations[1].weather_code, Some(WeatherCode::Rain));
        assert_eq!(observations[2].value, Some(1.5));
        assert_eq!(observations[2].weather_code, None);
        Ok(())
    }

    #[test]
    fn weather_codes_are_optional() -> Result<(), Box<dyn std::error::Error>> {
        let body = r#"{"hourly": {"time": ["2020-07-01T00:00"], "precipitation": [0.2]}}"#;
        let observations = ArchiveResponse::from_body(PERIOD, body)?.into_observations(PERIOD)?;
        assert_eq!(observations.len(), 1);
        assert_eq!(observations[0].weather_code, None);
        Ok(())
    }

    #[test]
    fn missing_hourly_block_is_malformed() {
        let err = ArchiveResponse::from_body(PERIOD, r#"{"error": true, "reason": "x"}"#)
            .unwrap_err();
        assert!(matches!(err, FetchError::MalformedJson { period, .. } if period == PERIOD));
    }

    #[test]
    fn ragged_arrays_are_rejected() -> Result<(), Box<dyn std::error::Error>> {
        let body = r#"{"hourly": {"time": ["2020-07-01T00:00", "2020-07-01T01:00"], "precipitation": [0.2]}}"#;
        let err = ArchiveResponse::from_body(PERIOD, body)?
            .into_observations(PERIOD)
            .unwrap_err();
        assert!(matches!(err, FetchError::UnexpectedShape { .. }));
        Ok(())
    }

    #[test]
    fn bad_timestamp_names_the_value() -> Result<(), Box<dyn std::error::Error>> {
        let body = r#"{"hourly": {"time": ["yesterday"], "precipitation": [0.2]}}"#;
        let err = ArchiveResponse::from_body(PERIOD, body)?
            .into_observations(PERIOD)
            .unwrap_err();
        match err {
            FetchError::Timestamp { value, period, .. } => {
                assert_eq!(value, "yesterday");
                assert_eq!(period, PERIOD);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn timestamp_formats() -> Result<(), chrono::ParseError> {
        let minutes = parse_timestamp("2020-07-01T13:00")?;
        let seconds = parse_timestamp("2020-07-01T13:00:00")?;
        assert_eq!(minutes, seconds);
        assert_eq!(
            parse_timestamp("2020-07-01")?,
            parse_timestamp("2020-07-01T00:00")?
        );
        Ok(())
    }
}
