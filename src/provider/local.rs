//! In-memory deck provider with seeded shuffling.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::ProviderError;

use super::{Deck, DeckProvider, Draw};

/// A [`DeckProvider`] that shuffles and deals entirely in memory.
///
/// Useful for offline play and deterministic tests: the same seed always
/// produces the same card order. Overdrawing is refused the same way the
/// remote API refuses it.
pub struct LocalDeckProvider {
    /// Undrawn cards per deck, top of the deck last.
    decks: Mutex<HashMap<String, Vec<Card>>>,
    /// Shuffle RNG.
    rng: Mutex<ChaCha8Rng>,
    /// Next deck number to assign.
    next_id: AtomicU32,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl LocalDeckProvider {
    /// Creates a provider with the given shuffle seed.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::LocalDeckProvider;
    ///
    /// let provider = LocalDeckProvider::new(42);
    /// let _ = provider;
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            decks: Mutex::new(HashMap::new()),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
            next_id: AtomicU32::new(0),
        }
    }

    /// Creates and shuffles a shoe with the specified number of decks.
    fn create_shoe(deck_count: u8, rng: &mut ChaCha8Rng) -> Vec<Card> {
        let mut cards = Vec::with_capacity(deck_count as usize * DECK_SIZE);

        for _ in 0..deck_count {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    cards.push(Card::new(rank, suit));
                }
            }
        }

        cards.shuffle(rng);
        cards
    }
}

impl DeckProvider for LocalDeckProvider {
    async fn new_deck(&self, deck_count: u8) -> Result<Deck, ProviderError> {
        let id = format!("local-{}", self.next_id.fetch_add(1, Ordering::SeqCst));
        let cards = Self::create_shoe(deck_count, &mut lock(&self.rng));
        let remaining = cards.len();

        lock(&self.decks).insert(id.clone(), cards);
        debug!(deck_id = %id, remaining, "local deck created");

        Ok(Deck { id, remaining })
    }

    async fn draw(&self, deck_id: &str, count: usize) -> Result<Draw, ProviderError> {
        let mut decks = lock(&self.decks);
        let deck = decks
            .get_mut(deck_id)
            .ok_or_else(|| ProviderError::UnknownDeck(deck_id.to_string()))?;

        if deck.len() < count {
            return Err(ProviderError::DrawRefused);
        }

        let cards: Vec<Card> = (0..count).filter_map(|_| deck.pop()).collect();
        Ok(Draw {
            cards,
            remaining: deck.len(),
        })
    }

    async fn remaining(&self, deck_id: &str) -> Result<usize, ProviderError> {
        lock(&self.decks)
            .get(deck_id)
            .map(Vec::len)
            .ok_or_else(|| ProviderError::UnknownDeck(deck_id.to_string()))
    }
}
