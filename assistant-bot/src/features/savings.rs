//! Exchange rates and saving tips.

use dbot_core::Reply;
use gateway::{ExchangeRates, RatesClient};
use rand::seq::IndexedRandom;
use tracing::warn;

use crate::texts;

pub async fn rates(client: &RatesClient) -> Reply {
    match client.latest().await {
        Ok(rates) => Reply::text(format_rates(&rates)),
        Err(e) => {
            warn!(kind = ?e.kind(), error = %e, "Exchange rates request failed");
            Reply::text(texts::RATES_FAILED)
        }
    }
}

pub fn format_rates(rates: &ExchangeRates) -> String {
    format!(
        "1 USD - {:.2} RUB\n1 EUR - {:.2} RUB",
        rates.usd_rub, rates.eur_rub
    )
}

pub fn tip() -> Reply {
    let tip = texts::SAVING_TIPS
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or(texts::SAVING_TIPS[0]);
    Reply::text(tip)
}
