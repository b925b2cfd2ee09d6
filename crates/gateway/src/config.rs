//! Endpoints, credentials and timeout for the content APIs.

use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Applied to the whole request, body included.
    pub timeout: Duration,
    /// Visual Crossing timeline endpoint; the city is appended as a path segment.
    pub weather_url: String,
    pub weather_api_key: String,
    /// exchangerate-api v6 endpoint; `{key}/latest/USD` is appended.
    pub rates_url: String,
    pub rates_api_key: String,
    pub joke_url: String,
    pub activity_url: String,
    pub fact_url: String,
    pub cat_url: String,
    /// PokéAPI endpoint; the lowercased name is appended.
    pub pokemon_url: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            weather_url:
                "https://weather.visualcrossing.com/VisualCrossingWebServices/rest/services/timeline"
                    .to_string(),
            weather_api_key: String::new(),
            rates_url: "https://v6.exchangerate-api.com/v6".to_string(),
            rates_api_key: String::new(),
            joke_url: "https://v2.jokeapi.dev/joke/Any?safe-mode".to_string(),
            activity_url: "https://apis.scrimba.com/bored/api/activity".to_string(),
            fact_url: "https://uselessfacts.jsph.pl/random.json".to_string(),
            cat_url: "https://api.thecatapi.com/v1/images/search".to_string(),
            pokemon_url: "https://pokeapi.co/api/v2/pokemon".to_string(),
        }
    }
}
