//! Weather passthrough to the Open-Meteo forecast API.
//!
//! Requests default to the destination coordinates and are cached per
//! `(lat, lon, compact)` for [`CACHE_TTL`]. The upstream JSON is returned as
//! is; callers pick the fields they render.

mod cache;


use std::time::Duration;

use log::{debug, warn};
use reqwest::Client;
use serde_json::Value;

pub use cache::TtlCache;

use crate::{
    error::{Result, TripError},
    params::WeatherQuery,
};

/// Rameshwaram.
pub const DEFAULT_LAT: f64 = 9.2876;
pub const DEFAULT_LON: f64 = 79.3129;

pub const OPEN_METEO_URL: &str = "https://api.open-meteo.com/v1/forecast";
pub const FORECAST_TIME_ZONE: &str = "Asia/Kolkata";
pub const CACHE_TTL: Duration = Duration::from_secs(15 * 60);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CacheKey {
    lat: u64,
    lon: u64,
    compact: bool,
}

impl CacheKey {
    fn new(lat: f64, lon: f64, compact: bool) -> Self {
        Self {
            lat: lat.to_bits(),
            lon: lon.to_bits(),
            compact,
        }
    }
}

/// Query parameters for one forecast request.
///
/// Compact requests carry current temperature, weather code and wind plus
/// today's range. Full requests add humidity, apparent temperature, wind
/// direction, hourly temperatures and a five-day daily forecast with
/// sunrise, sunset and UV index.
pub fn forecast_params(lat: f64, lon: f64, compact: bool) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("latitude", lat.to_string()),
        ("longitude", lon.to_string()),
        ("timezone", FORECAST_TIME_ZONE.to_string()),
    ];

    if compact {
        params.extend([
            (
                "current",
                "temperature_2m,weather_code,wind_speed_10m".to_string(),
            ),
            (
                "daily",
                "temperature_2m_max,temperature_2m_min,weather_code".to_string(),
            ),
            ("forecast_days", "1".to_string()),
        ]);
    } else {
        params.extend([
            (
                "current",
                [
                    "temperature_2m",
                    "relative_humidity_2m",
                    "apparent_temperature",
                    "weather_code",
                    "wind_speed_10m",
                    "wind_direction_10m",
                ]
                .join(","),
            ),
            ("hourly", "temperature_2m,weather_code".to_string()),
            (
                "daily",
                [
                    "temperature_2m_max",
                    "temperature_2m_min",
                    "sunrise",
                    "sunset",
                    "uv_index_max",
                    "weather_code",
                ]
                .join(","),
            ),
            ("forecast_days", "5".to_string()),
        ]);
    }

    params
}

/// HTTP client for the forecast API with a response cache.
#[derive(Debug)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
    cache: TtlCache<CacheKey, Value>,
}

impl WeatherClient {
    pub fn new() -> Self {
        Self::with_base_url(OPEN_METEO_URL)
    }

    /// Points the client at another forecast endpoint.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            cache: TtlCache::new(CACHE_TTL),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches a forecast, serving a cached response when one is fresh.
    ///
    /// # Errors
    ///
    /// * `TripError::InvalidInput` - Coordinates are out of range
    /// * `TripError::Weather` - The request failed or the API answered with a
    ///   non-success status
    pub async fn forecast(&self, query: &WeatherQuery) -> Result<Value> {
        let (lat, lon) = query.validate()?;
        let key = CacheKey::new(lat, lon, query.compact);
        if let Some(cached) = self.cache.get(&key) {
            debug!("Weather cache hit for {lat},{lon}");
            return Ok(cached);
        }

        let response = self
            .client
            .get(&self.base_url)
            .query(&forecast_params(lat, lon, query.compact))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Weather API answered {status} for {lat},{lon}");
            return Err(TripError::Weather {
                message: format!("Weather API error: {status}"),
            });
        }

        let body: Value = response.json().await?;
        self.cache.insert(key, body.clone());
        Ok(body)
    }
}

impl Default for WeatherClient {
    fn default() -> Self {
        Self::new()
    }
}
