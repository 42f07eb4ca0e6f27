use tracing::{debug, info, warn};

use crate::card::Card;
use crate::error::{ProviderError, RoundError};
use crate::provider::DeckProvider;
use crate::result::{RoundOutcome, RoundResult, Winner};

use super::{Game, GameState};

/// Compares two face-up cards by rank. `None` means war.
fn duel(player1: &Card, player2: &Card) -> Option<Winner> {
    use core::cmp::Ordering;

    match player1.rank.cmp(&player2.rank) {
        Ordering::Greater => Some(Winner::Player1),
        Ordering::Less => Some(Winner::Player2),
        Ordering::Equal => None,
    }
}

/// Extracts exactly one card per player from a draw.
fn take_pair(cards: Vec<Card>) -> Result<[Card; 2], ProviderError> {
    let got = cards.len();
    cards
        .try_into()
        .map_err(|_| ProviderError::ShortDraw { want: 2, got })
}

impl<P: DeckProvider> Game<P> {
    /// Plays one round: draw a card per player, compare ranks, and award
    /// points, fighting wars until the tie breaks.
    ///
    /// An ordinary win pays [`GameOptions::round_points`] and a war win pays
    /// [`GameOptions::war_points`]. When a war cannot be completed (fewer
    /// than [`GameOptions::war_cost`] cards remain) no points are awarded and
    /// the match ends on current scores. When the deck is exhausted after
    /// any resolution the match ends the same way.
    ///
    /// Scores and match phase are only mutated after every provider call has
    /// succeeded, so a failed round can simply be retried.
    ///
    /// [`GameOptions::round_points`]: crate::GameOptions::round_points
    /// [`GameOptions::war_points`]: crate::GameOptions::war_points
    /// [`GameOptions::war_cost`]: crate::GameOptions::war_cost
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::GameOver`] if the match already ended, or
    /// [`RoundError::Provider`] if the deck provider failed mid-resolution.
    pub async fn play_round(&mut self) -> Result<RoundResult, RoundError> {
        if self.state == GameState::GameOver {
            return Err(RoundError::GameOver);
        }

        let opening = self.provider.draw(&self.deck.id, 2).await?;
        let mut remaining = opening.remaining;
        let mut cards = take_pair(opening.cards)?;
        let mut wars: u32 = 0;

        let (decided, points) = match duel(&cards[0], &cards[1]) {
            Some(winner) => (Some(winner), self.options.round_points),
            None => loop {
                // War: burn face-down cards, then flip one each. The burn
                // needs a full complement or the war cannot be fought.
                let available = self.provider.remaining(&self.deck.id).await?;
                remaining = available;
                if available < self.options.war_cost() {
                    warn!(available, "not enough cards left to complete the war");
                    break (None, 0);
                }

                self.provider
                    .draw(&self.deck.id, self.options.war_burn * 2)
                    .await?;
                let flip = self.provider.draw(&self.deck.id, 2).await?;
                remaining = flip.remaining;
                cards = take_pair(flip.cards)?;
                wars += 1;

                if let Some(winner) = duel(&cards[0], &cards[1]) {
                    break (Some(winner), self.options.war_points);
                }
                debug!(wars, remaining, "war flip tied, fighting again");
            },
        };

        // Every provider call succeeded; only now touch match state.
        if let Some(winner) = decided {
            self.scores.award(winner, points);
        }
        self.deck.remaining = remaining;

        let outcome = decided.map_or(RoundOutcome::WarAborted, RoundOutcome::from);
        let ending = if remaining == 0 || outcome == RoundOutcome::WarAborted {
            self.state = GameState::GameOver;
            let standing = self.scores.standing();
            info!(
                ?standing,
                player1 = self.scores.player1,
                player2 = self.scores.player2,
                "match over"
            );
            Some(standing)
        } else {
            None
        };

        debug!(?outcome, points, wars, remaining, "round resolved");

        Ok(RoundResult {
            outcome,
            points,
            cards,
            wars,
            remaining,
            ending,
        })
    }
}
