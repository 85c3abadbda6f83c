//! Weather API error types.

/// Errors that can occur when fetching a weather forecast.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Authentication failed
    #[error("unauthorized: check WEATHER_API_KEY")]
    Unauthorized,

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// The forecast window contains no entries for the requested date
    #[error("no forecast available for {date}")]
    NoForecast { date: chrono::NaiveDate },
}
