//! Slash commands, parsed with teloxide's [`BotCommands`].

use std::sync::Arc;

use async_trait::async_trait;
use dbot_core::{Handler, HandlerResponse, Message, Reply, Result};
use gateway::Gateway;
use storage::UserStore;
use teloxide::utils::command::BotCommands;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use crate::conversation::ConversationSession;
use crate::features::{finance, fun, menus, savings, weather};
use crate::texts;

#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase", description = "Вот что я умею:")]
pub enum Command {
    #[command(description = "начать работу")]
    Start,
    #[command(description = "получить помощь")]
    Help,
    #[command(description = "прервать текущий диалог")]
    Cancel,
    #[command(description = "прогноз погоды")]
    Forecast,
    #[command(description = "случайный факт")]
    Fact,
    #[command(description = "чем заняться, когда скучно")]
    Bored,
    #[command(description = "случайный котик")]
    Cat,
    #[command(description = "шутка")]
    Joke,
    #[command(description = "информация о покемоне")]
    Pokemon(String),
    #[command(description = "курс валют")]
    Rates,
    #[command(description = "совет по экономии")]
    Tips,
    #[command(description = "ввести личные расходы")]
    Finances,
    #[command(description = "кнопки со ссылками")]
    Links,
    #[command(description = "показать больше опций")]
    Dynamic,
}

/// `/start`, `/help` and `/cancel` (bare or addressed to us as `/cmd@bot`) interrupt any active flow.
pub fn is_escape_command(text: &str, bot_username: Option<&str>) -> bool {
    command_name(text, bot_username).is_some_and(|name| matches!(name, "start" | "help" | "cancel"))
}

/// A slash command whose `@bot` suffix names some other bot. An unknown own username means
/// no suffix can be ours.
pub fn is_foreign_command(text: &str, bot_username: Option<&str>) -> bool {
    matches!(
        split_command(text),
        Some((_, Some(target))) if !bot_username.is_some_and(|me| me.eq_ignore_ascii_case(target))
    )
}

fn command_name<'a>(text: &'a str, bot_username: Option<&str>) -> Option<&'a str> {
    if is_foreign_command(text, bot_username) {
        return None;
    }
    split_command(text).map(|(name, _)| name)
}

fn split_command(text: &str) -> Option<(&str, Option<&str>)> {
    let word = text.split_whitespace().next()?.strip_prefix('/')?;
    Some(match word.split_once('@') {
        Some((name, target)) => (name, Some(target)),
        None => (word, None),
    })
}

pub struct CommandHandler {
    store: Arc<dyn UserStore>,
    gateway: Gateway,
    bot_username: Arc<RwLock<Option<String>>>,
}

impl CommandHandler {
    pub fn new(
        store: Arc<dyn UserStore>,
        gateway: Gateway,
        bot_username: Arc<RwLock<Option<String>>>,
    ) -> Self {
        Self {
            store,
            gateway,
            bot_username,
        }
    }

    fn parse(text: &str, username: &str) -> Option<Command> {
        match Command::parse(text, username) {
            Ok(command) => Some(command),
            Err(e) => {
                debug!(error = %e, "Not a known command");
                None
            }
        }
    }
}

#[async_trait]
impl Handler<ConversationSession> for CommandHandler {
    #[instrument(skip(self, message, session), fields(user_id = message.user.id))]
    async fn handle(
        &self,
        message: &Message,
        session: &mut ConversationSession,
    ) -> Result<HandlerResponse> {
        let Some(text) = message.text().filter(|_| message.is_command()) else {
            return Ok(HandlerResponse::Continue);
        };

        let username = self.bot_username.read().await.clone();
        if is_foreign_command(text, username.as_deref()) {
            debug!("Command addressed to another bot");
            return Ok(HandlerResponse::Stop);
        }

        let Some(command) = Self::parse(text, username.as_deref().unwrap_or_default()) else {
            if command_name(text, username.as_deref()) == Some("pokemon") {
                return Ok(HandlerResponse::text(texts::POKEMON_USAGE));
            }
            return Ok(HandlerResponse::Continue);
        };

        let fun_client = &self.gateway.fun;
        let reply = match command {
            Command::Start => menus::start(),
            Command::Help => menus::help(),
            Command::Cancel => menus::cancelled(),
            Command::Forecast => weather::start(session),
            Command::Fact => fun::fact(fun_client).await,
            Command::Bored => fun::activity(fun_client).await,
            Command::Cat => fun::cat(fun_client).await,
            Command::Joke => fun::joke(fun_client).await,
            Command::Pokemon(name) if name.trim().is_empty() => Reply::text(texts::POKEMON_USAGE),
            Command::Pokemon(name) => fun::pokemon(&self.gateway.pokemon, &name).await,
            Command::Rates => savings::rates(&self.gateway.rates).await,
            Command::Tips => savings::tip(),
            Command::Finances => {
                finance::start(self.store.as_ref(), message.user.id, session).await?
            }
            Command::Links => menus::links(),
            Command::Dynamic => menus::dynamic(),
        };
        Ok(HandlerResponse::Reply(reply))
    }
}
