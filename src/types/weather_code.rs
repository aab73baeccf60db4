//! Defines the `WeatherCode` enum, mapping the WMO weather interpretation codes returned by the
//! archive's `weathercode` field to descriptive variants.

use serde::Serialize;

/// Represents a WMO weather interpretation code (WW) as reported by the archive.
///
/// Only the subset of the WMO table that the archive actually emits is modelled. Several
/// codes share an intensity ladder (light, moderate, dense/heavy), which is folded into
/// separate variants here.
///
/// Convert a raw integer with [`WeatherCode::from_i64`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
pub enum WeatherCode {
    /// Code 0: Clear sky.
    ClearSky = 0,
    /// Code 1: Mainly clear.
    MainlyClear = 1,
    /// Code 2: Partly cloudy.
    PartlyCloudy = 2,
    /// Code 3: Overcast.
    Overcast = 3,
    /// Code 45: Fog.
    Fog = 45,
    /// Code 48: Depositing rime fog.
    RimeFog = 48,
    /// Code 51: Light drizzle.
    LightDrizzle = 51,
    /// Code 53: Moderate drizzle.
    Drizzle = 53,
    /// Code 55: Dense drizzle.
    DenseDrizzle = 55,
    /// Code 56: Light freezing drizzle.
    LightFreezingDrizzle = 56,
    /// Code 57: Dense freezing drizzle.
    DenseFreezingDrizzle = 57,
    /// Code 61: Slight rain.
    LightRain = 61,
    /// Code 63: Moderate rain.
    Rain = 63,
    /// Code 65: Heavy rain.
    HeavyRain = 65,
    /// Code 66: Light freezing rain.
    LightFreezingRain = 66,
    /// Code 67: Heavy freezing rain.
    HeavyFreezingRain = 67,
    /// Code 71: Slight snowfall.
    LightSnowfall = 71,
    /// Code 73: Moderate snowfall.
    Snowfall = 73,
    /// Code 75: Heavy snowfall.
    HeavySnowfall = 75,
    /// Code 77: Snow grains.
    SnowGrains = 77,
    /// Code 80: Slight rain showers.
    LightRainShower = 80,
    /// Code 81: Moderate rain showers.
    RainShower = 81,
    /// Code 82: Violent rain showers.
    ViolentRainShower = 82,
    /// Code 85: Slight snow showers.
    SnowShower = 85,
    /// Code 86: Heavy snow showers.
    HeavySnowShower = 86,
    /// Code 95: Thunderstorm, slight or moderate.
    Thunderstorm = 95,
    /// Code 96: Thunderstorm with slight hail.
    ThunderstormWithHail = 96,
    /// Code 99: Thunderstorm with heavy hail.
    ThunderstormWithHeavyHail = 99,
}

impl WeatherCode {
    /// Attempts to convert a WMO code into a `WeatherCode` variant.
    ///
    /// Returns `None` for codes the archive does not document (e.g. `4` or `100`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rain_window::WeatherCode;
    ///
    /// assert_eq!(WeatherCode::from_i64(63), Some(WeatherCode::Rain));
    /// assert_eq!(WeatherCode::from_i64(4), None);
    /// ```
    pub fn from_i64(value: i64) -> Option<Self> {
        match value {
            0 => Some(WeatherCode::ClearSky),
            1 => Some(WeatherCode::MainlyClear),
            2 => Some(WeatherCode::PartlyCloudy),
            3 => Some(WeatherCode::Overcast),
            45 => Some(WeatherCode::Fog),
            48 => Some(WeatherCode::RimeFog),
            51 => Some(WeatherCode::LightDrizzle),
            53 => Some(WeatherCode::Drizzle),
            55 => Some(WeatherCode::DenseDrizzle),
            56 => Some(WeatherCode::LightFreezingDrizzle),
            57 => Some(WeatherCode::DenseFreezingDrizzle),
            61 => Some(WeatherCode::LightRain),
            63 => Some(WeatherCode::Rain),
            65 => Some(WeatherCode::HeavyRain),
            66 => Some(WeatherCode::LightFreezingRain),
            67 => Some(WeatherCode::HeavyFreezingRain),
            71 => Some(WeatherCode::LightSnowfall),
            73 => Some(WeatherCode::Snowfall),
            75 => Some(WeatherCode::HeavySnowfall),
            77 => Some(WeatherCode::SnowGrains),
            80 => Some(WeatherCode::LightRainShower),
            81 => Some(WeatherCode::RainShower),
            82 => Some(WeatherCode::ViolentRainShower),
            85 => Some(WeatherCode::SnowShower),
            86 => Some(WeatherCode::HeavySnowShower),
            95 => Some(WeatherCode::Thunderstorm),
            96 => Some(WeatherCode::ThunderstormWithHail),
            99 => Some(WeatherCode::ThunderstormWithHeavyHail),
            _ => None,
        }
    }

    /// Whether the code describes falling precipitation of any kind (drizzle, rain, snow,
    /// showers or thunderstorms). Fog and cloud cover are dry.
    pub fn is_wet(self) -> bool {
        (self as i64) >= 51
    }
}
