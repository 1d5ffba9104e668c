//! Card types and value derivation.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
    /// Pseudo-suit carried by joker cards.
    Joker,
}

impl Suit {
    /// The four regular suits, in deck-building order.
    pub const STANDARD: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns the display name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
            Self::Spades => "Spades",
            Self::Joker => "Joker",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            Self::Hearts,
            Self::Diamonds,
            Self::Clubs,
            Self::Spades,
            Self::Joker,
        ]
        .into_iter()
        .find(|suit| suit.name() == s)
        .ok_or(ParseError::UnknownSuit)
    }
}

/// Card rank.
///
/// Joker cards carry a color marker ([`Rank::Red`] or [`Rank::Black`]) in
/// place of a face rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Red joker marker.
    Red,
    /// Black joker marker.
    Black,
}

impl Rank {
    /// The default thirteen ranks, in deck-building order.
    pub const STANDARD: [Self; 13] = [
        Self::Ace,
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
    ];

    /// Returns the display name of the rank.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
            Self::Red => "Red",
            Self::Black => "Black",
        }
    }

    /// Returns whether this is a joker color marker rather than a face rank.
    #[must_use]
    pub const fn is_joker_marker(self) -> bool {
        matches!(self, Self::Red | Self::Black)
    }

    /// Returns the numeric pip count for `Two` through `Ten`.
    #[must_use]
    pub const fn pips(self) -> Option<u8> {
        match self {
            Self::Two => Some(2),
            Self::Three => Some(3),
            Self::Four => Some(4),
            Self::Five => Some(5),
            Self::Six => Some(6),
            Self::Seven => Some(7),
            Self::Eight => Some(8),
            Self::Nine => Some(9),
            Self::Ten => Some(10),
            _ => None,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rank {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::STANDARD
            .into_iter()
            .chain([Self::Red, Self::Black])
            .find(|rank| rank.name() == s)
            .ok_or(ParseError::UnknownRank)
    }
}

/// The score a card counts for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardValue {
    /// A single value.
    Single(u8),
    /// Two alternatives, low then high (an ace counting as 1 or 11).
    Dual(u8, u8),
}

impl CardValue {
    /// Derives a value from the rank alone.
    ///
    /// Ace is `Dual(1, 11)`, face cards are 10, pip cards count their pips
    /// and joker markers are 0.
    #[must_use]
    pub const fn derive(rank: Rank) -> Self {
        match rank {
            Rank::Ace => Self::Dual(1, 11),
            Rank::Jack | Rank::Queen | Rank::King => Self::Single(10),
            Rank::Red | Rank::Black => Self::Single(0),
            _ => match rank.pips() {
                Some(pips) => Self::Single(pips),
                None => Self::Single(0),
            },
        }
    }

    /// Returns the lowest value this card can count for.
    #[must_use]
    pub const fn low(self) -> u8 {
        match self {
            Self::Single(value) | Self::Dual(value, _) => value,
        }
    }

    /// Returns the highest value this card can count for.
    #[must_use]
    pub const fn high(self) -> u8 {
        match self {
            Self::Single(value) | Self::Dual(_, value) => value,
        }
    }
}

impl From<u8> for CardValue {
    fn from(value: u8) -> Self {
        Self::Single(value)
    }
}

impl From<(u8, u8)> for CardValue {
    fn from((low, high): (u8, u8)) -> Self {
        Self::Dual(low, high)
    }
}

impl fmt::Display for CardValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(value) => write!(f, "{value}"),
            Self::Dual(low, high) => write!(f, "{low}/{high}"),
        }
    }
}

/// A playing card.
///
/// Cards are plain values: the value is fixed when the card is created and
/// never changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card, or the color marker for a joker.
    pub rank: Rank,
    /// The value of the card.
    pub value: CardValue,
}

impl Card {
    /// Creates a new card whose value is derived from its rank.
    ///
    /// # Example
    ///
    /// ```
    /// use decks::{Card, CardValue, Rank, Suit};
    ///
    /// let ace = Card::new(Suit::Hearts, Rank::Ace);
    /// assert_eq!(ace.value, CardValue::Dual(1, 11));
    /// ```
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            value: CardValue::derive(rank),
        }
    }

    /// Creates a new card with an explicit value.
    ///
    /// Note: This function does not check the value against the rank.
    #[must_use]
    pub const fn with_value(suit: Suit, rank: Rank, value: CardValue) -> Self {
        Self { suit, rank, value }
    }

    /// Creates a joker of the given color marker.
    #[must_use]
    pub const fn joker(color: Rank) -> Self {
        Self::new(Suit::Joker, color)
    }

    /// Returns whether this card is a joker.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        matches!(self.suit, Suit::Joker)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// Number of cards in a standard deck without jokers.
pub const DECK_SIZE: usize = 52;
