use tracing::{info, instrument};

use crate::{
    error::QueryError,
    model::{CityQuery, FiveDaySummary, ForecastSeries, WeatherSnapshot},
    normalize::{normalize_current, normalize_five_day, normalize_forecast},
    provider::WeatherProvider,
};

/// Current conditions and hourly series for one searched city. Built fresh per search.
///
/// The five-day view is fetched separately through [`fetch_five_day`].
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub snapshot: WeatherSnapshot,
    pub forecast: ForecastSeries,
}

impl WeatherReport {
    /// Current conditions followed by the forecast, one request after the other.
    #[instrument(skip(provider, city), fields(city = %city))]
    pub async fn fetch(
        provider: &dyn WeatherProvider,
        city: &CityQuery,
    ) -> Result<Self, QueryError> {
        let current = provider.fetch_current(city).await?;
        let forecast = provider.fetch_forecast(city).await?;

        let snapshot = normalize_current(&current)?;
        let series = normalize_forecast(&forecast)?;

        info!(
            city = %snapshot.city,
            country = %snapshot.country,
            points = series.len(),
            "Weather report ready"
        );

        Ok(Self { snapshot, forecast: series })
    }
}

/// Forecast-only query backing the five-day view.
#[instrument(skip(provider, city), fields(city = %city))]
pub async fn fetch_five_day(
    provider: &dyn WeatherProvider,
    city: &CityQuery,
) -> Result<FiveDaySummary, QueryError> {
    let forecast = provider.fetch_forecast(city).await?;
    Ok(normalize_five_day(&forecast)?)
}
