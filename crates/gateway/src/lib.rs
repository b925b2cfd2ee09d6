//! # gateway
//!
//! External API gateway: every call is a single GET through [`HttpFetch`] whose outcome is either a
//! typed payload or an [`ExternalError`] (network, bad status, malformed body). No retries.
//!
//! ```rust,no_run
//! use gateway::{Gateway, GatewayConfig};
//!
//! async fn example() -> Result<(), gateway::ExternalError> {
//!     let gateway = Gateway::from_config(&GatewayConfig::default())?;
//!     let forecast = gateway.weather.forecast("Moscow").await?;
//!     println!("{} {}", forecast.location, forecast.temp);
//!     Ok(())
//! }
//! ```

mod config;
mod error;
mod fetch;
mod fun;
mod pokemon;
mod rates;
mod weather;

pub use config::GatewayConfig;
pub use error::{ExternalError, ExternalErrorKind};
pub use fetch::{decode_json, endpoint_with_segments, FetchResponse, HttpFetch, ReqwestFetcher};
pub use fun::{Activity, CatImage, Fact, FunClient, Joke};
pub use pokemon::{Pokemon, PokemonClient};
pub use rates::{ExchangeRates, RatesClient};
pub use weather::{Forecast, WeatherClient};

use std::sync::Arc;

/// All content clients sharing one fetcher.
#[derive(Clone)]
pub struct Gateway {
    pub weather: WeatherClient,
    pub rates: RatesClient,
    pub fun: FunClient,
    pub pokemon: PokemonClient,
}

impl Gateway {
    /// Builds every client on top of the given fetcher.
    pub fn new(fetcher: Arc<dyn HttpFetch>, config: &GatewayConfig) -> Self {
        Self {
            weather: WeatherClient::new(
                fetcher.clone(),
                config.weather_url.clone(),
                config.weather_api_key.clone(),
            ),
            rates: RatesClient::new(
                fetcher.clone(),
                config.rates_url.clone(),
                config.rates_api_key.clone(),
            ),
            fun: FunClient::new(
                fetcher.clone(),
                config.joke_url.clone(),
                config.activity_url.clone(),
                config.fact_url.clone(),
                config.cat_url.clone(),
            ),
            pokemon: PokemonClient::new(fetcher, config.pokemon_url.clone()),
        }
    }

    /// Builds a reqwest-backed gateway with the configured timeout.
    pub fn from_config(config: &GatewayConfig) -> Result<Self, ExternalError> {
        let fetcher = ReqwestFetcher::new(config.timeout)
            .map_err(|e| ExternalError::Network(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self::new(Arc::new(fetcher), config))
    }
}
