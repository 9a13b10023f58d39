//! Core library for the `weatherwise` client.
//!
//! This crate defines:
//! - Fetching raw payloads from OpenWeatherMap
//! - Normalizing them into canonical, Celsius-based values
//! - Presentation helpers (display units, hourly chart data, wind map page)
//! - Configuration & credentials handling
//!
//! It is used by `weatherwise-cli`, but can also be reused by other front ends.

pub mod chart;
pub mod cities;
pub mod config;
pub mod error;
pub mod model;
pub mod normalize;
pub mod provider;
pub mod report;
pub mod units;
pub mod wind_map;

pub use chart::HourlyChart;
pub use config::Config;
pub use error::{FetchError, NormalizeError, QueryError};
pub use model::{
    CityQuery, Coordinates, DailyEntry, FiveDaySummary, ForecastPoint, ForecastSeries,
    RawCurrentWeather, RawForecastList, Visibility, WeatherSnapshot, WindDirection,
};
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider, provider_from_config};
pub use report::{WeatherReport, fetch_five_day};
pub use units::{TemperatureUnit, kelvin_to_celsius, to_fahrenheit};
pub use wind_map::WindMap;
