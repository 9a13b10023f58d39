use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::FetchError;

/// Free-text city name sent to the provider as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityQuery(String);

impl CityQuery {
    pub fn new(name: impl Into<String>) -> Result<Self, FetchError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(FetchError::EmptyCity);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CityQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Untyped body of the provider's current-conditions endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct RawCurrentWeather(pub serde_json::Value);

/// Untyped body of the provider's 3-hour forecast endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct RawForecastList(pub serde_json::Value);

/// One of the eight compass buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WindDirection {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl WindDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            WindDirection::N => "N",
            WindDirection::NE => "NE",
            WindDirection::E => "E",
            WindDirection::SE => "SE",
            WindDirection::S => "S",
            WindDirection::SW => "SW",
            WindDirection::W => "W",
            WindDirection::NW => "NW",
        }
    }

    pub const fn all() -> &'static [WindDirection] {
        &[
            WindDirection::N,
            WindDirection::NE,
            WindDirection::E,
            WindDirection::SE,
            WindDirection::S,
            WindDirection::SW,
            WindDirection::W,
            WindDirection::NW,
        ]
    }
}

impl fmt::Display for WindDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    Meters(u32),
    Unknown,
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Meters(m) => write!(f, "{m} meters"),
            Visibility::Unknown => f.write_str("N/A"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Current conditions in canonical units. Temperatures are Celsius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub city: String,
    pub country: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub description: String,
    pub humidity_pct: u8,
    pub pressure_hpa: u32,
    pub wind_speed_mps: f64,
    pub wind_degrees: f64,
    pub wind_direction: WindDirection,
    pub dew_point_c: f64,
    pub visibility: Visibility,
    pub icon_url: String,
    pub coordinates: Coordinates,
    pub local_time: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub timestamp: DateTime<Utc>,
    pub temperature_c: f64,
}

/// Forecast points in provider order, 3 hours apart.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ForecastSeries {
    pub points: Vec<ForecastPoint>,
    /// City UTC offset in seconds, used when labelling timestamps.
    pub utc_offset_secs: i32,
}

impl ForecastSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyEntry {
    /// Day of month, zero padded ("05").
    pub day: String,
    /// Abbreviated month name ("Mar").
    pub month: String,
    pub icon_id: String,
    pub temperature_c: f64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FiveDaySummary {
    pub days: Vec<DailyEntry>,
}
