//! HTTP deck provider for deck-of-cards style JSON APIs.

use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::card::Card;
use crate::error::ProviderError;

use super::{Deck, DeckProvider, Draw};

/// Base URL of the public deck-of-cards API.
pub const DEFAULT_API_URL: &str = "https://www.deckofcardsapi.com/api/deck";

/// A [`DeckProvider`] backed by an HTTP JSON API.
///
/// Any service exposing the deck-of-cards endpoints works:
/// `{base}/new/shuffle/?deck_count=N`, `{base}/{id}/draw/?count=N` and
/// `{base}/{id}`.
pub struct HttpDeckProvider {
    /// Shared HTTP client.
    client: Client,
    /// Base URL without a trailing slash.
    base_url: String,
}

impl Default for HttpDeckProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpDeckProvider {
    /// Creates a provider pointed at the public deck-of-cards API.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_API_URL)
    }

    /// Creates a provider pointed at a custom base URL.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Creates a provider from the environment.
    ///
    /// Optional: `DECK_API_URL` (defaults to the public deck-of-cards API).
    #[must_use]
    pub fn from_env() -> Self {
        match std::env::var("DECK_API_URL") {
            Ok(url) => Self::with_base_url(url),
            Err(_) => Self::new(),
        }
    }

    /// Fetches `url` and decodes the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ProviderError> {
        debug!(url, "deck provider request");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| ProviderError::Malformed(e.to_string()))
    }
}

impl DeckProvider for HttpDeckProvider {
    async fn new_deck(&self, deck_count: u8) -> Result<Deck, ProviderError> {
        let url = format!("{}/new/shuffle/?deck_count={deck_count}", self.base_url);
        let body: NewDeckResponse = self.get_json(&url).await?;

        if !body.success {
            return Err(ProviderError::DrawRefused);
        }

        Ok(Deck {
            id: body.deck_id,
            remaining: body.remaining,
        })
    }

    async fn draw(&self, deck_id: &str, count: usize) -> Result<Draw, ProviderError> {
        let url = format!("{}/{deck_id}/draw/?count={count}", self.base_url);
        let body: DrawResponse = self.get_json(&url).await?;

        if !body.success {
            return Err(ProviderError::DrawRefused);
        }

        Ok(Draw {
            cards: body.cards,
            remaining: body.remaining,
        })
    }

    async fn remaining(&self, deck_id: &str) -> Result<usize, ProviderError> {
        let url = format!("{}/{deck_id}", self.base_url);
        let body: DeckStateResponse = self.get_json(&url).await?;
        Ok(body.remaining)
    }
}

// Wire format of the deck-of-cards API.

#[derive(Deserialize)]
struct NewDeckResponse {
    success: bool,
    deck_id: String,
    #[serde(default)]
    remaining: usize,
}

#[derive(Deserialize)]
struct DrawResponse {
    success: bool,
    #[serde(default)]
    cards: Vec<Card>,
    #[serde(default)]
    remaining: usize,
}

#[derive(Deserialize)]
struct DeckStateResponse {
    #[serde(default)]
    remaining: usize,
}
