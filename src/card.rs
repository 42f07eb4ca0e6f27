//! Card types shared with the deck provider wire format.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Card rank, ordered low to high with face cards above the numerals.
///
/// The ordering is the one War is played with: `Two` is lowest and `Ace`
/// beats everything. Serde names match the deck provider's `value` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// 2.
    #[serde(rename = "2")]
    Two,
    /// 3.
    #[serde(rename = "3")]
    Three,
    /// 4.
    #[serde(rename = "4")]
    Four,
    /// 5.
    #[serde(rename = "5")]
    Five,
    /// 6.
    #[serde(rename = "6")]
    Six,
    /// 7.
    #[serde(rename = "7")]
    Seven,
    /// 8.
    #[serde(rename = "8")]
    Eight,
    /// 9.
    #[serde(rename = "9")]
    Nine,
    /// 10.
    #[serde(rename = "10")]
    Ten,
    /// Jack.
    #[serde(rename = "JACK")]
    Jack,
    /// Queen.
    #[serde(rename = "QUEEN")]
    Queen,
    /// King.
    #[serde(rename = "KING")]
    King,
    /// Ace (high).
    #[serde(rename = "ACE")]
    Ace,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the numeric value used for comparisons (2-14, ACE=14).
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::Rank;
    ///
    /// assert_eq!(Rank::Two.value(), 2);
    /// assert_eq!(Rank::Jack.value(), 11);
    /// assert_eq!(Rank::Ace.value(), 14);
    /// ```
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8 + 2
    }

    /// Returns the single-character code used in provider image URLs.
    ///
    /// `Ten` is `'0'`, matching the deck-of-cards API convention.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Ten => '0',
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
            Self::Ace => 'A',
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Jack => write!(f, "JACK"),
            Self::Queen => write!(f, "QUEEN"),
            Self::King => write!(f, "KING"),
            Self::Ace => write!(f, "ACE"),
            numeral => write!(f, "{}", numeral.value()),
        }
    }
}

/// Card suit. Unordered; suits never influence a round outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns the single-character code used in provider image URLs.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Hearts => 'H',
            Self::Diamonds => 'D',
            Self::Clubs => 'C',
            Self::Spades => 'S',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hearts => write!(f, "HEARTS"),
            Self::Diamonds => write!(f, "DIAMONDS"),
            Self::Clubs => write!(f, "CLUBS"),
            Self::Spades => write!(f, "SPADES"),
        }
    }
}

/// A playing card as drawn from a deck provider. Immutable once drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// The rank of the card (the provider's `value` field).
    #[serde(rename = "value")]
    pub rank: Rank,
    /// The suit of the card. Cosmetic only.
    pub suit: Suit,
    /// URL of the card face image, if the provider supplies one.
    #[serde(default)]
    pub image: String,
}

impl Card {
    /// Creates a new card with a provider-style image URL.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::{Card, Rank, Suit};
    ///
    /// let card = Card::new(Rank::King, Suit::Hearts);
    /// assert!(card.image.ends_with("KH.png"));
    /// ```
    #[must_use]
    pub fn new(rank: Rank, suit: Suit) -> Self {
        let image = format!(
            "https://deckofcardsapi.com/static/img/{}{}.png",
            rank.code(),
            suit.code()
        );
        Self { rank, suit, image }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
