//! OpenWeatherMap forecast client.

use chrono::NaiveDate;
use serde::Deserialize;

use super::error::WeatherError;
use super::summary::{DaySummary, summarize};

/// Default base URL for the OpenWeatherMap 5-day forecast API.
const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Wrapper for the forecast response.
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub list: Vec<ForecastEntry>,
}

/// One 3-hourly forecast entry. Only the fields the summary needs.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastEntry {
    /// Timestamp as "YYYY-MM-DD HH:MM:SS".
    pub dt_txt: String,
    pub main: ForecastMain,
    pub weather: Vec<ForecastCondition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastMain {
    /// Temperature in degrees Celsius (metric units requested).
    pub temp: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastCondition {
    /// Condition description, e.g. "light rain".
    pub description: String,
}

/// Configuration for the weather client.
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    /// OpenWeatherMap API key.
    pub api_key: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl WeatherConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

/// Client for the OpenWeatherMap forecast API.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl WeatherClient {
    /// Create a new weather client.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api_key: config.api_key,
            base_url: config.base_url,
        })
    }

    /// Fetch the forecast for a city and reduce it to a one-day summary.
    pub async fn day_summary(
        &self,
        city: &str,
        date: NaiveDate,
    ) -> Result<DaySummary, WeatherError> {
        let url = format!("{}/forecast", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(WeatherError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WeatherError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let forecast: ForecastResponse =
            serde_json::from_str(&body).map_err(|e| WeatherError::Json {
                message: e.to_string(),
            })?;

        summarize(&forecast.list, date)
    }
}
