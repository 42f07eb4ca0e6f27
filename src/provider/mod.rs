//! Deck providers: where the cards come from.
//!
//! The engine only ever talks to a [`DeckProvider`], so a match can run
//! against the remote deck-of-cards API ([`HttpDeckProvider`]) or a seeded
//! in-memory shoe ([`LocalDeckProvider`]) without the game logic noticing.

use crate::card::Card;
use crate::error::ProviderError;

mod http;
mod local;

pub use http::{DEFAULT_API_URL, HttpDeckProvider};
pub use local::LocalDeckProvider;

/// A freshly created deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Opaque identifier assigned by the provider.
    pub id: String,
    /// Number of undrawn cards.
    pub remaining: usize,
}

/// Cards returned by a single draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    /// The drawn cards, in draw order.
    pub cards: Vec<Card>,
    /// Number of undrawn cards left after this draw.
    pub remaining: usize,
}

/// A source of shuffled decks and drawn cards.
///
/// Every draw decrements the deck's remaining count on the provider side;
/// the engine treats the provider as the single source of truth for it.
#[expect(
    async_fn_in_trait,
    reason = "providers are awaited directly by a generic game, never spawned"
)]
pub trait DeckProvider {
    /// Creates and shuffles a fresh deck of `deck_count` standard decks.
    async fn new_deck(&self, deck_count: u8) -> Result<Deck, ProviderError>;

    /// Draws `count` cards from the deck.
    async fn draw(&self, deck_id: &str, count: usize) -> Result<Draw, ProviderError>;

    /// Queries the number of undrawn cards left in the deck.
    async fn remaining(&self, deck_id: &str) -> Result<usize, ProviderError>;
}
