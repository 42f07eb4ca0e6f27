//! Game engine and match state management.

use tracing::info;

use crate::error::ProviderError;
use crate::options::GameOptions;
use crate::provider::{Deck, DeckProvider};

mod round;
pub mod state;

pub use state::{GameState, Scores};

/// A two-player War match driven by a deck provider.
///
/// The game owns the deck handle, the scores, and the match phase, and
/// mutates them only through [`play_round`](Self::play_round). Resolution
/// suspends at provider calls, and the `&mut self` receiver guarantees that
/// at most one resolution is ever in flight.
pub struct Game<P> {
    /// The deck provider.
    provider: P,
    /// Game options.
    options: GameOptions,
    /// Deck handle; `remaining` caches the provider's count as of the last
    /// successful draw.
    deck: Deck,
    /// Current scores.
    scores: Scores,
    /// Current match phase.
    state: GameState,
}

impl<P: DeckProvider> Game<P> {
    /// Starts a match by requesting a fresh shuffled deck from the provider.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use warrs::{Game, GameOptions, LocalDeckProvider};
    ///
    /// # async fn demo() -> Result<(), warrs::RoundError> {
    /// let provider = LocalDeckProvider::new(42);
    /// let mut game = Game::start(provider, GameOptions::default()).await?;
    /// let result = game.play_round().await?;
    /// println!("{:?}", result.outcome);
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the provider cannot supply a new deck.
    pub async fn start(provider: P, options: GameOptions) -> Result<Self, ProviderError> {
        let deck = provider.new_deck(options.deck_count).await?;
        info!(deck_id = %deck.id, remaining = deck.remaining, "match started");

        Ok(Self {
            provider,
            options,
            deck,
            scores: Scores::default(),
            state: GameState::InProgress,
        })
    }

    /// Resets the match: fresh deck, zeroed scores.
    ///
    /// On failure the old match state is kept unchanged, so a reset can be
    /// retried.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider cannot supply a new deck.
    pub async fn reset(&mut self) -> Result<(), ProviderError> {
        let deck = self.provider.new_deck(self.options.deck_count).await?;
        info!(deck_id = %deck.id, remaining = deck.remaining, "match reset");

        self.deck = deck;
        self.scores = Scores::default();
        self.state = GameState::InProgress;
        Ok(())
    }

    /// Returns the current scores.
    #[must_use]
    pub const fn scores(&self) -> Scores {
        self.scores
    }

    /// Returns the number of cards remaining as of the last resolution.
    #[must_use]
    pub const fn cards_remaining(&self) -> usize {
        self.deck.remaining
    }

    /// Returns the current match phase.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns whether the match is over.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state == GameState::GameOver
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the provider-assigned deck identifier.
    #[must_use]
    pub fn deck_id(&self) -> &str {
        &self.deck.id
    }
}
