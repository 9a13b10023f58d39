use std::{fmt::Debug, time::Duration};

use async_trait::async_trait;

use crate::{
    Config,
    error::FetchError,
    model::{CityQuery, RawCurrentWeather, RawForecastList},
    provider::openweather::OpenWeatherProvider,
};

pub mod openweather;

/// Source of raw weather payloads for a city.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch_current(&self, city: &CityQuery) -> Result<RawCurrentWeather, FetchError>;

    async fn fetch_forecast(&self, city: &CityQuery) -> Result<RawForecastList, FetchError>;
}

/// Construct the OpenWeather provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.api_key().ok_or_else(|| {
        anyhow::anyhow!(
            "No API key configured.\n\
                 Hint: run `weatherwise configure` or set {}.",
            crate::config::API_KEY_ENV
        )
    })?;

    let mut provider = OpenWeatherProvider::new(api_key)
        .with_timeout(Duration::from_secs(config.timeout_secs()))?;

    if let Some(base_url) = &config.base_url {
        provider = provider.with_base_url(base_url.clone());
    }

    Ok(Box::new(provider))
}
