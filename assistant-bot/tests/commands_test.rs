//! Integration tests for the weather flow, content commands, menus and inline actions, with the
//! gateway served by a stub fetcher.

mod common;

use assistant_bot::texts;
use assistant_bot::FlowState;
use common::TestBot;
use dbot_core::{InlineButton, Markup, TextFormat};
use gateway::{ExternalError, FetchResponse};

const ANN: i64 = 1001;

const FORECAST_JSON: &str = r#"{
    "resolvedAddress": "Москва, Россия",
    "days": [{"temp": 12.3, "conditions": "Overcast", "description": "Облачно",
              "humidity": 81.0, "windspeed": 14.4}]
}"#;

/// **Test: Forecast flow success.**
///
/// **Setup:** Weather route returns a valid timeline.
/// **Action:** /forecast, then a city.
/// **Expected:** City prompt, then the formatted forecast; session back to IDLE.
#[tokio::test]
async fn test_forecast_success() {
    let bot = TestBot::new().await;
    bot.fetch.ok("weather.test", FORECAST_JSON);

    assert_eq!(bot.say(ANN, "/forecast").await.text, texts::ASK_CITY);
    assert_eq!(bot.state(ANN).await, FlowState::AwaitingCity);

    let reply = bot.say(ANN, "Москва").await;
    assert!(reply.text.contains("🌍 Местоположение: Москва, Россия"));
    assert!(reply.text.contains("🌡 Температура: 12.3 °C"));
    assert!(reply.text.contains("☁ Погода: Облачно"));
    assert_eq!(bot.state(ANN).await, FlowState::Idle);
    assert_eq!(bot.fetch.calls().len(), 1);
}

/// **Test: Gateway timeout reports a network failure and resets without retry.**
#[tokio::test]
async fn test_forecast_timeout_resets_flow() {
    let bot = TestBot::new().await;
    bot.fetch.route(
        "weather.test",
        Err(ExternalError::Network("operation timed out".to_string())),
    );

    bot.say(ANN, "/forecast").await;
    assert_eq!(bot.say(ANN, "Москва").await.text, texts::NETWORK_ERROR);
    assert_eq!(bot.state(ANN).await, FlowState::Idle);
    assert_eq!(bot.fetch.calls().len(), 1);
}

/// **Test: Bad status and malformed payload have their own replies.**
#[tokio::test]
async fn test_forecast_failure_kinds() {
    let bot = TestBot::new().await;

    bot.fetch.route("weather.test", Ok(FetchResponse::new(401, "Invalid API key")));
    bot.say(ANN, "/forecast").await;
    assert_eq!(bot.say(ANN, "Москва").await.text, texts::WEATHER_BAD_STATUS);
    assert_eq!(bot.state(ANN).await, FlowState::Idle);

    bot.fetch.ok("weather.test", r#"{"days": []}"#);
    bot.say(ANN, "/forecast").await;
    assert_eq!(bot.say(ANN, "Москва").await.text, texts::MALFORMED_RESPONSE);
    assert_eq!(bot.state(ANN).await, FlowState::Idle);
}

/// **Test: Blank city re-prompts without calling the gateway.**
#[tokio::test]
async fn test_forecast_blank_city() {
    let bot = TestBot::new().await;
    bot.say(ANN, "/forecast").await;

    assert_eq!(bot.say(ANN, "  ").await.text, texts::ASK_CITY);
    assert_eq!(bot.state(ANN).await, FlowState::AwaitingCity);
    assert!(bot.fetch.calls().is_empty());
}

/// **Test: /pokemon needs a name and makes no request without one.**
#[tokio::test]
async fn test_pokemon_usage() {
    let bot = TestBot::new().await;

    assert_eq!(bot.say(ANN, "/pokemon").await.text, texts::POKEMON_USAGE);
    assert_eq!(bot.say(ANN, "/pokemon    ").await.text, texts::POKEMON_USAGE);
    assert!(bot.fetch.calls().is_empty());
}

/// **Test: /pokemon lookup success and not found.**
#[tokio::test]
async fn test_pokemon_lookup() {
    let bot = TestBot::new().await;
    bot.fetch.route("pokemon/missingno", Ok(FetchResponse::new(404, "Not Found")));
    bot.fetch.ok(
        "pokemon/pikachu",
        r#"{
            "name": "pikachu", "height": 4, "weight": 60,
            "abilities": [{"ability": {"name": "static"}}],
            "types": [{"type": {"name": "electric"}}],
            "sprites": {"other": {"official-artwork": {"front_default": "https://img/25.png"}}}
        }"#,
    );

    let found = bot.say(ANN, "/pokemon Pikachu").await;
    assert_eq!(found.format, TextFormat::Html);
    assert!(found.text.contains("<b>Pikachu</b>"));
    assert!(found.text.contains("Вес: 6.0 кг"));
    assert!(bot.fetch.calls()[0].ends_with("/pokemon/pikachu"));

    let missing = bot.say(ANN, "/pokemon MissingNo").await;
    assert_eq!(missing.text, texts::pokemon_not_found("MissingNo"));
}

/// **Test: Content commands format their payloads.**
#[tokio::test]
async fn test_content_commands() {
    let bot = TestBot::new().await;
    bot.fetch.ok("fact.test", r#"{"id": "1", "text": "Факт дня"}"#);
    bot.fetch.ok(
        "joke.test",
        r#"{"type": "twopart", "setup": "Why?", "delivery": "Because."}"#,
    );
    bot.fetch.ok("cat.test", r#"[{"id": "a", "url": "https://cdn/cat.jpg"}]"#);
    bot.fetch.ok(
        "activity.test",
        r#"{"activity": "Learn Rust", "type": "education", "participants": 1, "price": 0.1}"#,
    );

    assert_eq!(bot.say(ANN, "/fact").await.text, "Факт дня");
    assert_eq!(bot.say(ANN, "/joke").await.text, "Why?\nBecause.");

    let cat = bot.say(ANN, "/cat").await;
    assert_eq!(cat.photo_url.as_deref(), Some("https://cdn/cat.jpg"));

    let bored = bot.say(ANN, "/bored").await;
    assert!(bored.text.contains("Тип: Образование"));
}

/// **Test: Content failures get per-command texts.**
#[tokio::test]
async fn test_content_failures() {
    let bot = TestBot::new().await;
    bot.fetch.ok("cat.test", "[]");

    assert_eq!(bot.say(ANN, "/cat").await.text, texts::CAT_FAILED);
    assert_eq!(bot.say(ANN, "/fact").await.text, texts::FACT_FAILED);
    assert_eq!(bot.say(ANN, "/joke").await.text, texts::JOKE_FAILED);
    assert_eq!(bot.say(ANN, "/bored").await.text, texts::ACTIVITY_FAILED);
    assert_eq!(bot.say(ANN, texts::BTN_RATES).await.text, texts::RATES_FAILED);
}

/// **Test: Exchange rates button.**
#[tokio::test]
async fn test_rates() {
    let bot = TestBot::new().await;
    bot.fetch.ok(
        "rates.test/v6/rates-key/latest/USD",
        r#"{"result": "success", "conversion_rates": {"USD": 1, "RUB": 90.0, "EUR": 0.9}}"#,
    );

    assert_eq!(
        bot.say(ANN, "/rates").await.text,
        "1 USD - 90.00 RUB\n1 EUR - 100.00 RUB"
    );
}

/// **Test: Tips, greetings and unknown text.**
#[tokio::test]
async fn test_static_replies() {
    let bot = TestBot::new().await;

    assert!(texts::SAVING_TIPS.contains(&bot.say(ANN, texts::BTN_TIPS).await.text.as_str()));
    assert_eq!(bot.say(ANN, texts::BTN_HELLO).await.text, "Привет, <b>Ann</b>!");
    assert_eq!(bot.say(ANN, texts::BTN_BYE).await.text, "До свидания, <b>Ann</b>!");
    assert_eq!(bot.say(ANN, "/help").await.text, texts::HELP);
    assert_eq!(bot.say(ANN, "what?").await.text, texts::UNKNOWN_INPUT);
    assert_eq!(bot.say(ANN, "/unknown").await.text, texts::UNKNOWN_INPUT);
}

/// **Test: /links carries URL buttons.**
#[tokio::test]
async fn test_links() {
    let bot = TestBot::new().await;

    let reply = bot.say(ANN, "/links").await;

    let Some(Markup::Inline(rows)) = reply.markup else {
        panic!("expected inline keyboard");
    };
    assert_eq!(rows.len(), 3);
    assert!(rows
        .iter()
        .flatten()
        .all(|b| matches!(b, InlineButton::Url { .. })));
}

/// **Test: /dynamic, show_more edits the button message, options answer in HTML.**
#[tokio::test]
async fn test_dynamic_menu() {
    let bot = TestBot::new().await;

    let reply = bot.say(ANN, "/dynamic").await;
    assert_eq!(reply.text, texts::DYNAMIC_PROMPT);

    let edited = bot.press(ANN, "show_more", "555").await.expect("edit reply");
    assert_eq!(edited.text, texts::CHOOSE_OPTION);
    assert_eq!(edited.edit_message_id.as_deref(), Some("555"));

    let chosen = bot.press(ANN, "option_2", "555").await.expect("option reply");
    assert_eq!(chosen.text, "Вы выбрали: <b>Опция 2</b>");
    assert_eq!(chosen.format, TextFormat::Html);
    assert!(chosen.edit_message_id.is_none());

    assert!(bot.press(ANN, "something_else", "555").await.is_none());
}

/// **Test: Inline actions do not disturb an active flow.**
#[tokio::test]
async fn test_action_during_flow() {
    let bot = TestBot::new().await;
    bot.say(ANN, "/forecast").await;

    bot.press(ANN, "option_1", "9").await.expect("option reply");

    assert_eq!(bot.state(ANN).await, FlowState::AwaitingCity);
}
