//! Content commands: fact, activity, cat, joke, Pokémon.

use dbot_core::Reply;
use gateway::{Activity, ExternalError, FunClient, Pokemon, PokemonClient};
use tracing::warn;

use crate::texts::{self, escape_html, format_decimal};

pub async fn fact(client: &FunClient) -> Reply {
    match client.fact().await {
        Ok(fact) => Reply::text(fact.text),
        Err(e) => failed("fact", &e, texts::FACT_FAILED),
    }
}

pub async fn activity(client: &FunClient) -> Reply {
    match client.activity().await {
        Ok(activity) => Reply::html(format_activity(&activity)),
        Err(e) => failed("activity", &e, texts::ACTIVITY_FAILED),
    }
}

pub async fn cat(client: &FunClient) -> Reply {
    match client.cat().await {
        Ok(image) => Reply::photo(image.url),
        Err(e) => failed("cat", &e, texts::CAT_FAILED),
    }
}

pub async fn joke(client: &FunClient) -> Reply {
    match client.joke().await {
        Ok(joke) => Reply::text(joke.text()),
        Err(e) => failed("joke", &e, texts::JOKE_FAILED),
    }
}

/// Looks up `name`; the caller has already rejected a blank name.
pub async fn pokemon(client: &PokemonClient, name: &str) -> Reply {
    match client.lookup(name).await {
        Ok(pokemon) => Reply::html(format_pokemon(&pokemon)),
        Err(ExternalError::BadStatus(404)) => Reply::text(texts::pokemon_not_found(name.trim())),
        Err(e) => failed("pokemon", &e, texts::POKEMON_FAILED),
    }
}

fn failed(source: &str, err: &ExternalError, text: &str) -> Reply {
    warn!(source, kind = ?err.kind(), error = %err, "Content request failed");
    Reply::text(text)
}

/// Price is reported on a 0..1 scale and shown out of ten.
pub fn format_activity(activity: &Activity) -> String {
    format!(
        "💡 <b>{}</b>\nТип: {}\nУчастников: {}\nЦена: {:.0}/10",
        escape_html(&activity.activity),
        escape_html(&activity.kind_ru()),
        activity.participants,
        activity.price * 10.0
    )
}

pub fn format_pokemon(pokemon: &Pokemon) -> String {
    let mut text = format!(
        "🌟 <b>{}</b>\nТипы: {}\nСпособности: {}\nРост: {} м\nВес: {} кг",
        escape_html(&capitalize(&pokemon.name)),
        escape_html(&pokemon.types.join(", ")),
        escape_html(&pokemon.abilities.join(", ")),
        format_decimal(pokemon.height_m),
        format_decimal(pokemon.weight_kg),
    );
    if let Some(url) = &pokemon.artwork_url {
        text.push_str(&format!("\n<a href=\"{}\">Посмотреть</a>", escape_html(url)));
    }
    text
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
