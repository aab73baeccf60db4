use crate::types::weather_code::WeatherCode;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
///
/// # Examples
///
/// ```
/// use rain_window::LatLon;
///
/// let oxford = LatLon(51.754816, -1.254367);
/// assert_eq!(oxford.0, 51.754816); // Latitude
/// assert_eq!(oxford.1, -1.254367); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);

/// A single timestamped reading, one per entry of an archive response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawObservation {
    pub timestamp: NaiveDateTime,
    /// Precipitation (mm) for the hourly archive, sunshine hours for the weekly history.
    /// `None` when the archive reported `null`.
    pub value: Option<f64>,
    pub weather_code: Option<WeatherCode>,
}

impl RawObservation {
    pub fn new(timestamp: NaiveDateTime, value: Option<f64>) -> Self {
        Self {
            timestamp,
            value,
            weather_code: None,
        }
    }

    pub fn with_weather_code(mut self, weather_code: Option<WeatherCode>) -> Self {
        self.weather_code = weather_code;
        self
    }
}

/// The quantity that gets aggregated per week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Metric {
    /// Observed precipitation in millimetres.
    #[default]
    Precipitation,
    /// Hours of sunshine, from the weekly history endpoint.
    SunshineHours,
    /// 1 for every observation whose weather code denotes precipitation, 0 otherwise.
    WetHours,
}

impl Metric {
    /// Name of the value column in aggregated frames.
    pub fn column_name(self) -> &'static str {
        match self {
            Metric::Precipitation => "precipitation",
            Metric::SunshineHours => "sunshine_hours",
            Metric::WetHours => "wet_hours",
        }
    }

    /// Extracts this metric from an observation. Missing inputs yield `None`.
    pub fn extract(self, observation: &RawObservation) -> Option<f64> {
        match self {
            Metric::Precipitation | Metric::SunshineHours => observation.value,
            Metric::WetHours => observation
                .weather_code
                .map(|code| if code.is_wet() { 1.0 } else { 0.0 }),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Metric::Precipitation => "Precipitation",
            Metric::SunshineHours => "Sunshine Hours",
            Metric::WetHours => "Precipitation Hours",
        };
        write!(f, "{label}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at_noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2020, 7, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn value_metrics_pass_through() {
        let obs = RawObservation::new(at_noon(), Some(0.4));
        assert_eq!(Metric::Precipitation.extract(&obs), Some(0.4));
        assert_eq!(Metric::SunshineHours.extract(&obs), Some(0.4));
        assert_eq!(
            Metric::Precipitation.extract(&RawObservation::new(at_noon(), None)),
            None
        );
    }

    #[test]
    fn wet_hours_follow_the_weather_code() {
        let rainy = RawObservation::new(at_noon(), Some(0.0))
            .with_weather_code(Some(WeatherCode::LightRain));
        let foggy =
            RawObservation::new(at_noon(), Some(0.0)).with_weather_code(Some(WeatherCode::Fog));
        let unknown = RawObservation::new(at_noon(), Some(1.2));

        assert_eq!(Metric::WetHours.extract(&rainy), Some(1.0));
        assert_eq!(Metric::WetHours.extract(&foggy), Some(0.0));
        assert_eq!(Metric::WetHours.extract(&unknown), None);
    }
}
