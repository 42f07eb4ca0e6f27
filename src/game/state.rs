//! Match state types.

use crate::result::{MatchOutcome, Winner};

/// Match phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Rounds can still be played.
    InProgress,
    /// The deck is spent (or a war could not complete); scores are final.
    GameOver,
}

/// Running scores for both players. Scores never decrease.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scores {
    /// Player 1's score.
    pub player1: u32,
    /// Player 2's score.
    pub player2: u32,
}

impl Scores {
    /// Awards `points` to the winner.
    pub const fn award(&mut self, winner: Winner, points: u32) {
        match winner {
            Winner::Player1 => self.player1 += points,
            Winner::Player2 => self.player2 += points,
        }
    }

    /// Returns the final standing implied by the current scores.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::{MatchOutcome, Scores};
    ///
    /// let scores = Scores { player1: 3, player2: 1 };
    /// assert_eq!(scores.standing(), MatchOutcome::Player1);
    /// ```
    #[must_use]
    pub const fn standing(&self) -> MatchOutcome {
        if self.player1 > self.player2 {
            MatchOutcome::Player1
        } else if self.player2 > self.player1 {
            MatchOutcome::Player2
        } else {
            MatchOutcome::Tie
        }
    }
}
