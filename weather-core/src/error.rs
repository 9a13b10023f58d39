use thiserror::Error;

/// Failures of a provider round trip.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The city query was empty after trimming.
    #[error("City name must not be empty")]
    EmptyCity,

    /// The provider answered with a not-found status.
    #[error("City not found, please enter again.")]
    CityNotFound,

    /// Any other non-2xx answer.
    #[error("Failed to retrieve weather information: {message}")]
    ProviderError { message: String },

    /// Network, timeout or body-read failure.
    #[error("Request error: {cause}")]
    TransportError { cause: String },

    /// A 2xx body that is not JSON.
    #[error("Malformed response from provider: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::TransportError { cause: err.to_string() }
    }
}

/// Failures turning a raw provider payload into canonical values.
#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl From<serde_json::Error> for NormalizeError {
    fn from(err: serde_json::Error) -> Self {
        NormalizeError::MalformedResponse(err.to_string())
    }
}

/// Error of a full query cycle (fetch followed by normalize).
#[derive(Debug, Error)]
pub enum QueryError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}

impl QueryError {
    pub fn is_city_not_found(&self) -> bool {
        matches!(self, QueryError::Fetch(FetchError::CityNotFound))
    }
}
