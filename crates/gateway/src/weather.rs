//! Current conditions for a city (Visual Crossing timeline API).

use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use crate::error::ExternalError;
use crate::fetch::{decode_json, endpoint_with_segments, HttpFetch};

/// Today's weather as shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    /// Resolved address, or the city as typed when the service omits it.
    pub location: String,
    pub temp: f64,
    pub conditions: String,
    pub description: String,
    pub humidity: f64,
    pub wind_speed: f64,
}

#[derive(Debug, Deserialize)]
struct TimelineResponse {
    #[serde(rename = "resolvedAddress")]
    resolved_address: Option<String>,
    days: Vec<TimelineDay>,
}

#[derive(Debug, Deserialize)]
struct TimelineDay {
    temp: f64,
    conditions: String,
    description: Option<String>,
    humidity: f64,
    windspeed: f64,
}

#[derive(Clone)]
pub struct WeatherClient {
    fetcher: Arc<dyn HttpFetch>,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    pub fn new(fetcher: Arc<dyn HttpFetch>, base_url: String, api_key: String) -> Self {
        Self {
            fetcher,
            base_url,
            api_key,
        }
    }

    pub async fn forecast(&self, city: &str) -> Result<Forecast, ExternalError> {
        let url = endpoint_with_segments(&self.base_url, &[city])?;
        let query = [
            ("unitGroup", "metric"),
            ("key", self.api_key.as_str()),
            ("include", "current"),
            ("lang", "ru"),
        ]
        .map(|(k, v)| (k.to_string(), v.to_string()));

        let response: TimelineResponse = decode_json(self.fetcher.fetch(&url, &query).await?)?;
        let today = response
            .days
            .into_iter()
            .next()
            .ok_or_else(|| ExternalError::MalformedBody("days is empty".to_string()))?;

        info!(city = %city, "Weather fetched");
        let description = match today.description {
            Some(d) if !d.trim().is_empty() => d,
            _ => today.conditions.clone(),
        };
        Ok(Forecast {
            location: response
                .resolved_address
                .unwrap_or_else(|| city.to_string()),
            temp: today.temp,
            conditions: today.conditions,
            description,
            humidity: today.humidity,
            wind_speed: today.windspeed,
        })
    }
}
