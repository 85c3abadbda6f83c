//! Caching layer for weather responses.
//!
//! Forecast summaries change slowly relative to how often an interactive
//! caller re-plans a tour, so responses are cached by (city, date) with a
//! TTL rather than re-fetched on every request.

use std::time::Duration;

use chrono::NaiveDate;
use moka::future::Cache as MokaCache;

use crate::weather::{DaySummary, WeatherClient, WeatherError};

/// Cache key for weather summaries: (city, date).
type WeatherKey = (String, NaiveDate);

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(10 * 60),
            max_capacity: 500,
        }
    }
}

/// Cache for one-day weather summaries.
pub struct WeatherCache {
    summaries: MokaCache<WeatherKey, DaySummary>,
}

impl WeatherCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let summaries = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { summaries }
    }

    /// Get a cached summary.
    pub async fn get(&self, key: &WeatherKey) -> Option<DaySummary> {
        self.summaries.get(key).await
    }

    /// Insert a summary into the cache.
    pub async fn insert(&self, key: WeatherKey, summary: DaySummary) {
        self.summaries.insert(key, summary).await;
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.summaries.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.summaries.invalidate_all();
    }
}

/// Weather client with caching.
///
/// Wraps a [`WeatherClient`] and caches day summaries. Errors are not
/// cached: a failed fetch is retried on the next call.
pub struct CachedWeatherClient {
    client: WeatherClient,
    cache: WeatherCache,
}

impl CachedWeatherClient {
    /// Create a new cached client.
    pub fn new(client: WeatherClient, cache_config: &CacheConfig) -> Self {
        Self {
            client,
            cache: WeatherCache::new(cache_config),
        }
    }

    /// Get the day summary for a city, using the cache if possible.
    pub async fn day_summary(
        &self,
        city: &str,
        date: NaiveDate,
    ) -> Result<DaySummary, WeatherError> {
        let key = (city.to_string(), date);

        if let Some(cached) = self.cache.get(&key).await {
            return Ok(cached);
        }

        let summary = self.client.day_summary(city, date).await?;
        self.cache.insert(key, summary.clone()).await;
        Ok(summary)
    }

    /// Returns the number of cached summaries.
    pub fn cached_entries(&self) -> u64 {
        self.cache.entry_count()
    }
}
