//! Pokémon lookup by name (PokéAPI).

use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use crate::error::ExternalError;
use crate::fetch::{decode_json, endpoint_with_segments, HttpFetch};

const MAX_ABILITIES: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct Pokemon {
    pub name: String,
    /// At most three, in API order.
    pub abilities: Vec<String>,
    pub types: Vec<String>,
    /// Metres.
    pub height_m: f64,
    /// Kilograms.
    pub weight_kg: f64,
    pub artwork_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PokemonResponse {
    name: String,
    abilities: Vec<AbilitySlot>,
    types: Vec<TypeSlot>,
    height: u32,
    weight: u32,
    #[serde(default)]
    sprites: Sprites,
}

#[derive(Debug, Deserialize)]
struct AbilitySlot {
    ability: Named,
}

#[derive(Debug, Deserialize)]
struct TypeSlot {
    #[serde(rename = "type")]
    kind: Named,
}

#[derive(Debug, Deserialize)]
struct Named {
    name: String,
}

#[derive(Debug, Default, Deserialize)]
struct Sprites {
    #[serde(default)]
    other: Option<OtherSprites>,
}

#[derive(Debug, Deserialize)]
struct OtherSprites {
    #[serde(rename = "official-artwork")]
    official_artwork: Option<Artwork>,
}

#[derive(Debug, Deserialize)]
struct Artwork {
    front_default: Option<String>,
}

#[derive(Clone)]
pub struct PokemonClient {
    fetcher: Arc<dyn HttpFetch>,
    base_url: String,
}

impl PokemonClient {
    pub fn new(fetcher: Arc<dyn HttpFetch>, base_url: String) -> Self {
        Self { fetcher, base_url }
    }

    /// Looks up `name` case-insensitively. An unknown name surfaces as `BadStatus(404)`.
    pub async fn lookup(&self, name: &str) -> Result<Pokemon, ExternalError> {
        let name = name.trim().to_lowercase();
        let url = endpoint_with_segments(&self.base_url, &[&name])?;
        let raw: PokemonResponse = decode_json(self.fetcher.fetch(&url, &[]).await?)?;

        info!(pokemon = %raw.name, "Pokemon fetched");
        Ok(Pokemon {
            name: raw.name,
            abilities: raw
                .abilities
                .into_iter()
                .take(MAX_ABILITIES)
                .map(|slot| slot.ability.name)
                .collect(),
            types: raw.types.into_iter().map(|slot| slot.kind.name).collect(),
            height_m: f64::from(raw.height) / 10.0,
            weight_kg: f64::from(raw.weight) / 10.0,
            artwork_url: raw
                .sprites
                .other
                .and_then(|o| o.official_artwork)
                .and_then(|a| a.front_default),
        })
    }
}
