//! Named deck configurations for common card games.

use core::fmt;
use core::str::FromStr;

use log::debug;

use crate::card::{CardValue, Rank};
use crate::error::ParseError;

/// A named, predefined deck shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum Preset {
    /// A single 52-card deck.
    #[default]
    Standard,
    /// A single 52-card deck, identical to [`Preset::Standard`].
    Poker,
    /// A six-deck shoe with blackjack card values.
    Blackjack,
    /// A 24-card deck of nines through aces.
    Euchre,
    /// A 52-card deck plus one pair of jokers.
    ///
    /// Unlike every other preset, the jokers are added once after all deck
    /// blocks rather than once per block.
    DoubleJoker,
}

/// Configuration backing a [`Preset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetConfig {
    /// Registry name.
    pub name: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// Number of deck blocks.
    pub decks: u8,
    /// Whether jokers are included.
    pub jokers: bool,
    /// Whether the joker pair is added once regardless of the deck count.
    pub jokers_once: bool,
    /// Ranks in deck-building order.
    pub ranks: &'static [Rank],
    /// Per-rank values; ranks missing from the table are worth 0.
    ///
    /// `None` means values are derived from the rank.
    pub values: Option<&'static [(Rank, CardValue)]>,
}

impl PresetConfig {
    /// Looks up the value of `rank` in the value table.
    ///
    /// Returns `None` if this preset derives values from ranks instead.
    #[must_use]
    pub fn table_value(&self, rank: Rank) -> Option<CardValue> {
        let table = self.values?;
        Some(
            table
                .iter()
                .find(|(r, _)| *r == rank)
                .map_or(CardValue::Single(0), |&(_, value)| value),
        )
    }
}

static EUCHRE_RANKS: [Rank; 6] = [
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
];

static BLACKJACK_VALUES: [(Rank, CardValue); 13] = [
    (Rank::Ace, CardValue::Single(11)),
    (Rank::Two, CardValue::Single(2)),
    (Rank::Three, CardValue::Single(3)),
    (Rank::Four, CardValue::Single(4)),
    (Rank::Five, CardValue::Single(5)),
    (Rank::Six, CardValue::Single(6)),
    (Rank::Seven, CardValue::Single(7)),
    (Rank::Eight, CardValue::Single(8)),
    (Rank::Nine, CardValue::Single(9)),
    (Rank::Ten, CardValue::Single(10)),
    (Rank::Jack, CardValue::Single(10)),
    (Rank::Queen, CardValue::Single(10)),
    (Rank::King, CardValue::Single(10)),
];

static REGISTRY: [PresetConfig; 5] = [
    PresetConfig {
        name: "standard",
        description: "Standard 52-card deck",
        decks: 1,
        jokers: false,
        jokers_once: false,
        ranks: &Rank::STANDARD,
        values: None,
    },
    PresetConfig {
        name: "poker",
        description: "Standard 52-card deck for poker",
        decks: 1,
        jokers: false,
        jokers_once: false,
        ranks: &Rank::STANDARD,
        values: None,
    },
    PresetConfig {
        name: "blackjack",
        description: "Six-deck blackjack shoe (Ace 11, face cards 10)",
        decks: 6,
        jokers: false,
        jokers_once: false,
        ranks: &Rank::STANDARD,
        values: Some(&BLACKJACK_VALUES),
    },
    PresetConfig {
        name: "euchre",
        description: "24-card euchre deck (9 through Ace)",
        decks: 1,
        jokers: false,
        jokers_once: false,
        ranks: &EUCHRE_RANKS,
        values: None,
    },
    PresetConfig {
        name: "double_joker",
        description: "Standard 52-card deck with a single pair of jokers",
        decks: 1,
        jokers: true,
        jokers_once: true,
        ranks: &Rank::STANDARD,
        values: None,
    },
];

impl Preset {
    /// Every registered preset, in registry order.
    pub const ALL: [Self; 5] = [
        Self::Standard,
        Self::Poker,
        Self::Blackjack,
        Self::Euchre,
        Self::DoubleJoker,
    ];

    /// Returns the configuration for this preset.
    #[must_use]
    pub fn config(self) -> &'static PresetConfig {
        let index = match self {
            Self::Standard => 0,
            Self::Poker => 1,
            Self::Blackjack => 2,
            Self::Euchre => 3,
            Self::DoubleJoker => 4,
        };
        &REGISTRY[index]
    }

    /// Returns the registry name.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.config().name
    }

    /// Returns the human-readable description.
    #[must_use]
    pub fn description(self) -> &'static str {
        self.config().description
    }

    /// Looks up a preset by name, falling back to [`Preset::Standard`].
    ///
    /// # Example
    ///
    /// ```
    /// use decks::Preset;
    ///
    /// assert_eq!(Preset::lookup("euchre"), Preset::Euchre);
    /// assert_eq!(Preset::lookup("canasta"), Preset::Standard);
    /// ```
    #[must_use]
    pub fn lookup(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            debug!("unknown preset {name:?}, using standard");
            Self::Standard
        })
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.name() == s)
            .ok_or(ParseError::UnknownPreset)
    }
}

/// Lists every preset as `(name, description)` pairs.
pub fn presets() -> impl Iterator<Item = (&'static str, &'static str)> {
    REGISTRY.iter().map(|config| (config.name, config.description))
}
