//! Minimal transport config: token and optional Bot API URL.

pub struct TelegramConfig {
    pub bot_token: String,
    /// Overrides `https://api.telegram.org`, e.g. a local Bot API server or a mock.
    pub telegram_api_url: Option<String>,
}

impl TelegramConfig {
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
        }
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.telegram_api_url = Some(url.into());
        self
    }
}
