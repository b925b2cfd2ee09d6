//! USD and EUR rates in roubles (exchangerate-api v6).

use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use crate::error::ExternalError;
use crate::fetch::{decode_json, endpoint_with_segments, HttpFetch};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExchangeRates {
    /// Roubles per US dollar.
    pub usd_rub: f64,
    /// Roubles per euro.
    pub eur_rub: f64,
}

#[derive(Debug, Deserialize)]
struct LatestResponse {
    conversion_rates: ConversionRates,
}

#[derive(Debug, Deserialize)]
struct ConversionRates {
    #[serde(rename = "RUB")]
    rub: f64,
    #[serde(rename = "EUR")]
    eur: f64,
}

#[derive(Clone)]
pub struct RatesClient {
    fetcher: Arc<dyn HttpFetch>,
    base_url: String,
    api_key: String,
}

impl RatesClient {
    pub fn new(fetcher: Arc<dyn HttpFetch>, base_url: String, api_key: String) -> Self {
        Self {
            fetcher,
            base_url,
            api_key,
        }
    }

    pub async fn latest(&self) -> Result<ExchangeRates, ExternalError> {
        let url = endpoint_with_segments(&self.base_url, &[&self.api_key, "latest", "USD"])?;
        let response: LatestResponse = decode_json(self.fetcher.fetch(&url, &[]).await?)?;
        let rates = response.conversion_rates;

        // Rates are quoted against USD, so EUR->RUB goes through the dollar.
        if rates.eur <= 0.0 || !rates.eur.is_finite() {
            return Err(ExternalError::MalformedBody(format!(
                "EUR rate is not positive: {}",
                rates.eur
            )));
        }

        info!(usd_rub = rates.rub, "Exchange rates fetched");
        Ok(ExchangeRates {
            usd_rub: rates.rub,
            eur_rub: rates.rub / rates.eur,
        })
    }
}
