//! Round and match result types.

use crate::card::Card;

/// Which player won a decisive comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    /// Player 1 had the higher rank.
    Player1,
    /// Player 2 had the higher rank.
    Player2,
}

/// Outcome of a single round resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Player 1 took the round.
    Player1Wins,
    /// Player 2 took the round.
    Player2Wins,
    /// A war could not be completed because too few cards remained.
    /// No points were awarded and the match ends on current scores.
    WarAborted,
}

impl From<Winner> for RoundOutcome {
    fn from(winner: Winner) -> Self {
        match winner {
            Winner::Player1 => Self::Player1Wins,
            Winner::Player2 => Self::Player2Wins,
        }
    }
}

/// Final standing of a finished match, derived purely from scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Player 1 finished with the higher score.
    Player1,
    /// Player 2 finished with the higher score.
    Player2,
    /// Both players finished with equal scores.
    Tie,
}

/// Result of a single call to [`Game::play_round`](crate::Game::play_round).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// How the round was decided.
    pub outcome: RoundOutcome,
    /// Points awarded to the winner (0 when the war was aborted).
    pub points: u32,
    /// The deciding face-up pair: the initial draw for an ordinary round,
    /// or the last war flip. Player 1's card first.
    pub cards: [Card; 2],
    /// Number of war iterations fought (0 for an ordinary round).
    pub wars: u32,
    /// Cards remaining in the deck after this resolution.
    pub remaining: usize,
    /// Set when this resolution ended the match.
    pub ending: Option<MatchOutcome>,
}
