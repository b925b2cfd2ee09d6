//! Shared test utilities for assistant-bot integration tests.
//!
//! Provides RecordingBot (dbot_core::Bot), StubFetch (gateway::HttpFetch), stores that fail on
//! purpose, and TestBot: a router wired like production over those stubs.

#![allow(dead_code)]

use std::sync::{Arc, Mutex, Once};

use assistant_bot::{build_router, AppServices, ConversationSession, FlowState};
use async_trait::async_trait;
use chrono::Utc;
use dbot_core::{Bot, Chat, Dispatch, Message, MessageDirection, MessageKind, Reply, User};
use gateway::{ExternalError, FetchResponse, Gateway, GatewayConfig, HttpFetch};
use handler_chain::MessageRouter;
use storage::{
    ConsentStatus, ExpenseCategory, SqliteUserStore, StorageError, Upserted, UserProfile, UserStore,
    EXPENSE_SLOTS,
};
use tokio::sync::RwLock;
use tracing_subscriber::{fmt, EnvFilter};

/// Username the dispatcher would learn from `get_me`.
pub const BOT_USERNAME: &str = "assistant_bot";

static TRACING_INIT: Once = Once::new();

pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = fmt().with_env_filter(env_filter).with_test_writer().try_init();
    });
}

/// Records every reply instead of sending it.
#[derive(Default)]
pub struct RecordingBot {
    replies: Mutex<Vec<(i64, Reply)>>,
}

impl RecordingBot {
    pub fn replies(&self) -> Vec<(i64, Reply)> {
        self.replies.lock().unwrap().clone()
    }

    pub fn last(&self) -> Reply {
        self.replies
            .lock()
            .unwrap()
            .last()
            .map(|(_, reply)| reply.clone())
            .expect("no reply recorded")
    }

    pub fn count(&self) -> usize {
        self.replies.lock().unwrap().len()
    }
}

#[async_trait]
impl Bot for RecordingBot {
    async fn send_reply(&self, chat: &Chat, reply: &Reply) -> dbot_core::Result<()> {
        self.replies.lock().unwrap().push((chat.id, reply.clone()));
        Ok(())
    }
}

/// Answers requests by the first route whose key occurs in the URL; unrouted URLs fail with
/// a network error. Every requested URL is recorded.
#[derive(Default)]
pub struct StubFetch {
    routes: Mutex<Vec<(String, Result<FetchResponse, ExternalError>)>>,
    calls: Mutex<Vec<String>>,
}

impl StubFetch {
    pub fn route(&self, url_part: &str, response: Result<FetchResponse, ExternalError>) {
        self.routes
            .lock()
            .unwrap()
            .insert(0, (url_part.to_string(), response));
    }

    pub fn ok(&self, url_part: &str, body: &str) {
        self.route(url_part, Ok(FetchResponse::new(200, body)));
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpFetch for StubFetch {
    async fn fetch(
        &self,
        url: &str,
        _query: &[(String, String)],
    ) -> Result<FetchResponse, ExternalError> {
        self.calls.lock().unwrap().push(url.to_string());
        self.routes
            .lock()
            .unwrap()
            .iter()
            .find(|(part, _)| url.contains(part.as_str()))
            .map(|(_, response)| response.clone())
            .unwrap_or_else(|| Err(ExternalError::Network(format!("no route for {}", url))))
    }
}

/// Store whose database is gone.
pub struct BrokenStore;

fn broken() -> StorageError {
    StorageError::Database("unable to open database file".to_string())
}

#[async_trait]
impl UserStore for BrokenStore {
    async fn get_profile(&self, _telegram_id: i64) -> Result<Option<UserProfile>, StorageError> {
        Err(broken())
    }

    async fn upsert_consent(
        &self,
        _telegram_id: i64,
        _display_name: &str,
        _status: ConsentStatus,
    ) -> Result<Upserted, StorageError> {
        Err(broken())
    }

    async fn register(&self, _telegram_id: i64, _display_name: &str) -> Result<Upserted, StorageError> {
        Err(broken())
    }

    async fn save_expenses(
        &self,
        _telegram_id: i64,
        _categories: &[ExpenseCategory; EXPENSE_SLOTS],
    ) -> Result<UserProfile, StorageError> {
        Err(broken())
    }
}

/// SQLite store whose expense writes fail.
pub struct SaveFailingStore(pub SqliteUserStore);

#[async_trait]
impl UserStore for SaveFailingStore {
    async fn get_profile(&self, telegram_id: i64) -> Result<Option<UserProfile>, StorageError> {
        self.0.get_profile(telegram_id).await
    }

    async fn upsert_consent(
        &self,
        telegram_id: i64,
        display_name: &str,
        status: ConsentStatus,
    ) -> Result<Upserted, StorageError> {
        self.0.upsert_consent(telegram_id, display_name, status).await
    }

    async fn register(&self, telegram_id: i64, display_name: &str) -> Result<Upserted, StorageError> {
        self.0.register(telegram_id, display_name).await
    }

    async fn save_expenses(
        &self,
        _telegram_id: i64,
        _categories: &[ExpenseCategory; EXPENSE_SLOTS],
    ) -> Result<UserProfile, StorageError> {
        Err(StorageError::Database("database is locked".to_string()))
    }
}

pub fn test_gateway_config() -> GatewayConfig {
    GatewayConfig {
        weather_url: "http://weather.test/timeline".to_string(),
        weather_api_key: "weather-key".to_string(),
        rates_url: "http://rates.test/v6".to_string(),
        rates_api_key: "rates-key".to_string(),
        joke_url: "http://joke.test/joke/Any?safe-mode".to_string(),
        activity_url: "http://activity.test/api/activity".to_string(),
        fact_url: "http://fact.test/random.json".to_string(),
        cat_url: "http://cat.test/v1/images/search".to_string(),
        pokemon_url: "http://pokemon.test/api/v2/pokemon".to_string(),
        ..GatewayConfig::default()
    }
}

pub async fn memory_store() -> Arc<SqliteUserStore> {
    Arc::new(
        SqliteUserStore::new("sqlite::memory:")
            .await
            .expect("Failed to create store"),
    )
}

/// Production handler chain over a recording bot, a stub fetcher and the given store.
pub struct TestBot {
    pub router: MessageRouter<ConversationSession>,
    pub bot: Arc<RecordingBot>,
    pub fetch: Arc<StubFetch>,
    pub store: Arc<dyn UserStore>,
    next_message_id: Mutex<i64>,
}

impl TestBot {
    pub async fn new() -> Self {
        let store: Arc<dyn UserStore> = memory_store().await;
        Self::with_store(store)
    }

    pub fn with_store(store: Arc<dyn UserStore>) -> Self {
        init_tracing();
        let bot = Arc::new(RecordingBot::default());
        let fetch = Arc::new(StubFetch::default());
        let gateway = Gateway::new(fetch.clone(), &test_gateway_config());
        let services = AppServices {
            bot_username: Arc::new(RwLock::new(Some(BOT_USERNAME.to_string()))),
            ..AppServices::new(store.clone(), gateway)
        };
        let router = build_router(&services, bot.clone());
        Self {
            router,
            bot,
            fetch,
            store,
            next_message_id: Mutex::new(100),
        }
    }

    fn message(&self, user_id: i64, content: &str, kind: MessageKind, id: Option<&str>) -> Message {
        let id = match id {
            Some(id) => id.to_string(),
            None => {
                let mut next = self.next_message_id.lock().unwrap();
                *next += 1;
                next.to_string()
            }
        };
        Message {
            id,
            user: user(user_id),
            chat: Chat {
                id: user_id,
                chat_type: "private".to_string(),
            },
            content: content.to_string(),
            kind,
            direction: MessageDirection::Incoming,
            created_at: Utc::now(),
        }
    }

    /// Sends a text message and returns the reply it produced.
    pub async fn say(&self, user_id: i64, text: &str) -> Reply {
        let before = self.bot.count();
        let reply = self.send(user_id, text).await;
        assert_eq!(self.bot.count(), before + 1, "expected one reply to {:?}", text);
        reply.unwrap()
    }

    /// Sends a text message; `None` when the bot stayed silent.
    pub async fn send(&self, user_id: i64, text: &str) -> Option<Reply> {
        let before = self.bot.count();
        let message = self.message(user_id, text, MessageKind::Text, None);
        self.router.dispatch(&message).await.unwrap();
        (self.bot.count() > before).then(|| self.bot.last())
    }

    /// Presses an inline button attached to bot message `message_id`.
    pub async fn press(&self, user_id: i64, action: &str, message_id: &str) -> Option<Reply> {
        let before = self.bot.count();
        let message = self.message(user_id, "", MessageKind::Action(action.to_string()), Some(message_id));
        self.router.dispatch(&message).await.unwrap();
        (self.bot.count() > before).then(|| self.bot.last())
    }

    pub async fn state(&self, user_id: i64) -> FlowState {
        self.router.snapshot(user_id).await.state()
    }
}

pub fn user(id: i64) -> User {
    User {
        id,
        username: Some(format!("user{}", id)),
        first_name: Some("Ann".to_string()),
        last_name: Some("Lee".to_string()),
    }
}
