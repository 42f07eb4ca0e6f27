//! Error types for provider calls and round resolution.

use thiserror::Error;

/// Errors reported by a deck provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider could not be reached.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// The provider answered with a non-success HTTP status.
    #[error("provider returned HTTP status {status}")]
    Status {
        /// The HTTP status code.
        status: u16,
    },
    /// The provider refused the draw (`success: false`).
    #[error("provider refused the draw")]
    DrawRefused,
    /// The provider payload could not be decoded.
    #[error("malformed provider response: {0}")]
    Malformed(String),
    /// The provider returned fewer cards than requested.
    #[error("provider returned {got} cards, expected {want}")]
    ShortDraw {
        /// Number of cards requested.
        want: usize,
        /// Number of cards actually returned.
        got: usize,
    },
    /// The deck identifier is unknown to the provider.
    #[error("unknown deck id `{0}`")]
    UnknownDeck(String),
}

/// Errors that can occur while resolving a round.
///
/// A provider failure leaves scores and game state exactly as they were, so
/// the caller may simply retry the round.
#[derive(Debug, Error)]
pub enum RoundError {
    /// The match is already over; no further rounds can be played.
    #[error("the match is already over")]
    GameOver,
    /// A deck provider call failed. Match state is unchanged.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}
