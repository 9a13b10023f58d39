use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, instrument, warn};

use crate::{
    error::FetchError,
    model::{CityQuery, RawCurrentWeather, RawForecastList},
};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            http: Client::new(),
        }
    }

    /// Point the provider at another host, e.g. a mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, FetchError> {
        self.http = Client::builder().timeout(timeout).build()?;
        Ok(self)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `{base_url}/{endpoint}?q={city}&appid={key}` and parse the body as JSON.
    ///
    /// Temperatures come back in Kelvin since no `units` parameter is sent.
    #[instrument(skip(self, city), fields(city = %city))]
    async fn get_json(
        &self,
        endpoint: &str,
        city: &CityQuery,
    ) -> Result<serde_json::Value, FetchError> {
        let url = format!("{}/{}", self.base_url, endpoint);

        let res = self
            .http
            .get(&url)
            .query(&[("q", city.as_str()), ("appid", self.api_key.as_str())])
            .send()
            .await
            .inspect_err(|e| warn!(error = %e, "OpenWeather request failed"))?;

        let status = res.status();
        let body = res.text().await?;
        debug!(%status, bytes = body.len(), "OpenWeather response received");

        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::CityNotFound);
        }

        if !status.is_success() {
            let message = error_message(&body);
            warn!(%status, %message, "OpenWeather returned an error");
            return Err(FetchError::ProviderError { message });
        }

        serde_json::from_str(&body).map_err(|e| {
            FetchError::MalformedResponse(format!(
                "{endpoint} body is not valid JSON ({e}): {}",
                truncate_body(&body)
            ))
        })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn fetch_current(&self, city: &CityQuery) -> Result<RawCurrentWeather, FetchError> {
        self.get_json("weather", city).await.map(RawCurrentWeather)
    }

    async fn fetch_forecast(&self, city: &CityQuery) -> Result<RawForecastList, FetchError> {
        self.get_json("forecast", city).await.map(RawForecastList)
    }
}

/// The `message` field of an OpenWeather error body.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(json) => json
            .get("message")
            .and_then(|m| m.as_str())
            .unwrap_or("Unknown error")
            .to_string(),
        Err(_) if body.trim().is_empty() => "Unknown error".to_string(),
        Err(_) => truncate_body(body),
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}
