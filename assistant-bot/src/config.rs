//! Bot config loaded from environment variables.

use anyhow::{Context, Result};
use gateway::GatewayConfig;
use std::env;
use std::time::Duration;

pub const DEFAULT_LOG_FILE: &str = "logs/assistant-bot.log";
pub const DEFAULT_DATABASE_URL: &str = "sqlite://./assistant_bot.db";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct BotConfig {
    /// BOT_TOKEN; the CLI `--token` overrides it.
    pub bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL. Points the bot at a mock server in tests.
    pub telegram_api_url: Option<String>,
    pub log_file: String,
    /// SQLite URL of the user store.
    pub database_url: String,
    /// Timeout for every third-party API request.
    pub http_timeout_secs: u64,
    pub weather_api_key: String,
    pub exchange_rate_api_key: String,
}

impl BotConfig {
    /// Loads from the environment. `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("BOT_TOKEN").context("BOT_TOKEN not set")?,
        };
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        let http_timeout_secs = match env::var("HTTP_TIMEOUT_SECS") {
            Ok(s) => s
                .parse()
                .with_context(|| format!("HTTP_TIMEOUT_SECS is not a number: {}", s))?,
            Err(_) => DEFAULT_HTTP_TIMEOUT_SECS,
        };
        let weather_api_key = env::var("WEATHER_API_KEY").unwrap_or_default();
        let exchange_rate_api_key = env::var("EXCHANGE_RATE_API_KEY").unwrap_or_default();

        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
            database_url,
            http_timeout_secs,
            weather_api_key,
            exchange_rate_api_key,
        })
    }

    /// Checks the API URL (if set) and the timeout.
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            anyhow::bail!("BOT_TOKEN is empty");
        }
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        if self.http_timeout_secs == 0 {
            anyhow::bail!("HTTP_TIMEOUT_SECS must be greater than zero");
        }
        Ok(())
    }

    /// API keys that are not configured; the matching features answer with an error.
    pub fn missing_api_keys(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.weather_api_key.is_empty() {
            missing.push("WEATHER_API_KEY");
        }
        if self.exchange_rate_api_key.is_empty() {
            missing.push("EXCHANGE_RATE_API_KEY");
        }
        missing
    }

    /// Gateway config with production endpoints and this config's keys and timeout.
    pub fn gateway_config(&self) -> GatewayConfig {
        GatewayConfig {
            timeout: Duration::from_secs(self.http_timeout_secs),
            weather_api_key: self.weather_api_key.clone(),
            rates_api_key: self.exchange_rate_api_key.clone(),
            ..GatewayConfig::default()
        }
    }
}
