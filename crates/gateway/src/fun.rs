//! Light content: jokes, activity ideas, random facts, cat pictures.

use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use crate::error::ExternalError;
use crate::fetch::{decode_json, HttpFetch};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type")]
pub enum Joke {
    #[serde(rename = "single")]
    Single { joke: String },
    #[serde(rename = "twopart")]
    TwoPart { setup: String, delivery: String },
}

impl Joke {
    /// The joke as one block of text.
    pub fn text(&self) -> String {
        match self {
            Joke::Single { joke } => joke.clone(),
            Joke::TwoPart { setup, delivery } => format!("{}\n{}", setup, delivery),
        }
    }
}

/// Something to do when bored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Activity {
    pub activity: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub participants: u32,
    pub price: f64,
}

impl Activity {
    /// Russian name of the activity type; unknown types are capitalized as-is.
    pub fn kind_ru(&self) -> String {
        let known = match self.kind.as_str() {
            "education" => "Образование",
            "recreational" => "Развлечения",
            "social" => "Социальное",
            "diy" => "Сделай сам",
            "charity" => "Благотворительность",
            "cooking" => "Готовка",
            "relaxation" => "Отдых",
            "music" => "Музыка",
            "busywork" => "Занятость",
            other => return capitalize(other),
        };
        known.to_string()
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Fact {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatImage {
    pub url: String,
}

#[derive(Clone)]
pub struct FunClient {
    fetcher: Arc<dyn HttpFetch>,
    joke_url: String,
    activity_url: String,
    fact_url: String,
    cat_url: String,
}

impl FunClient {
    pub fn new(
        fetcher: Arc<dyn HttpFetch>,
        joke_url: String,
        activity_url: String,
        fact_url: String,
        cat_url: String,
    ) -> Self {
        Self {
            fetcher,
            joke_url,
            activity_url,
            fact_url,
            cat_url,
        }
    }

    pub async fn joke(&self) -> Result<Joke, ExternalError> {
        let joke = decode_json(self.fetcher.fetch(&self.joke_url, &[]).await?)?;
        info!("Joke fetched");
        Ok(joke)
    }

    pub async fn activity(&self) -> Result<Activity, ExternalError> {
        let activity = decode_json(self.fetcher.fetch(&self.activity_url, &[]).await?)?;
        info!("Activity fetched");
        Ok(activity)
    }

    pub async fn fact(&self) -> Result<Fact, ExternalError> {
        let query = [("language".to_string(), "ru".to_string())];
        let fact = decode_json(self.fetcher.fetch(&self.fact_url, &query).await?)?;
        info!("Fact fetched");
        Ok(fact)
    }

    pub async fn cat(&self) -> Result<CatImage, ExternalError> {
        let images: Vec<CatImage> = decode_json(self.fetcher.fetch(&self.cat_url, &[]).await?)?;
        let image = images
            .into_iter()
            .next()
            .ok_or_else(|| ExternalError::MalformedBody("no images returned".to_string()))?;
        info!(url = %image.url, "Cat image fetched");
        Ok(image)
    }
}
