//! A War card game engine driven by a pluggable deck-of-cards provider.
//!
//! The crate provides a [`Game`] type that manages the full match flow:
//! drawing one card per player, comparing ranks, awarding points, and
//! fighting wars (burn three, flip one) until a tie breaks. Cards come from
//! a [`DeckProvider`] — either the remote deck-of-cards HTTP API
//! ([`HttpDeckProvider`]) or a seeded in-memory shoe ([`LocalDeckProvider`]).
//!
//! # Example
//!
//! ```no_run
//! use warrs::{Game, GameOptions, HttpDeckProvider};
//!
//! # async fn demo() -> Result<(), warrs::RoundError> {
//! let provider = HttpDeckProvider::new();
//! let mut game = Game::start(provider, GameOptions::default()).await?;
//!
//! while !game.is_over() {
//!     let round = game.play_round().await?;
//!     println!("{:?} (+{})", round.outcome, round.points);
//! }
//! # Ok(())
//! # }
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod card;
pub mod error;
pub mod game;
pub mod options;
pub mod provider;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::{ProviderError, RoundError};
pub use game::{Game, GameState, Scores};
pub use options::GameOptions;
pub use provider::{
    DEFAULT_API_URL, Deck, DeckProvider, Draw, HttpDeckProvider, LocalDeckProvider,
};
pub use result::{MatchOutcome, RoundOutcome, RoundResult, Winner};
