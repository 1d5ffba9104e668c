//! Deck configuration options.

use alloc::vec::Vec;

use crate::card::Rank;
use crate::preset::Preset;

/// Configuration options for building a [`Deck`](crate::Deck).
///
/// Every override left as `None` falls back to the preset's value. Use the
/// builder pattern to customize options:
///
/// ```
/// use decks::{DeckOptions, Preset};
///
/// let options = DeckOptions::default()
///     .with_preset(Preset::Poker)
///     .with_jokers(true)
///     .with_decks(2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeckOptions {
    /// Preset the deck starts from.
    pub preset: Preset,
    /// Joker inclusion override.
    pub jokers: Option<bool>,
    /// Deck count override.
    pub decks: Option<u8>,
    /// Rank list override.
    pub ranks: Option<Vec<Rank>>,
}

impl DeckOptions {
    /// Sets the preset.
    ///
    /// # Example
    ///
    /// ```
    /// use decks::{DeckOptions, Preset};
    ///
    /// let options = DeckOptions::default().with_preset(Preset::Euchre);
    /// assert_eq!(options.preset, Preset::Euchre);
    /// ```
    #[must_use]
    pub const fn with_preset(mut self, preset: Preset) -> Self {
        self.preset = preset;
        self
    }

    /// Sets the preset by registry name.
    ///
    /// Unknown names select [`Preset::Standard`].
    ///
    /// # Example
    ///
    /// ```
    /// use decks::{DeckOptions, Preset};
    ///
    /// let options = DeckOptions::default().with_preset_name("blackjack");
    /// assert_eq!(options.preset, Preset::Blackjack);
    ///
    /// let options = DeckOptions::default().with_preset_name("uno");
    /// assert_eq!(options.preset, Preset::Standard);
    /// ```
    #[must_use]
    pub fn with_preset_name(mut self, name: &str) -> Self {
        self.preset = Preset::lookup(name);
        self
    }

    /// Overrides whether jokers are included.
    ///
    /// # Example
    ///
    /// ```
    /// use decks::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_jokers(false);
    /// assert_eq!(options.jokers, Some(false));
    /// ```
    #[must_use]
    pub const fn with_jokers(mut self, jokers: bool) -> Self {
        self.jokers = Some(jokers);
        self
    }

    /// Overrides the number of decks.
    ///
    /// An explicit `0` is honored and builds an empty deck.
    ///
    /// # Example
    ///
    /// ```
    /// use decks::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_decks(6);
    /// assert_eq!(options.decks, Some(6));
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = Some(decks);
        self
    }

    /// Overrides the rank list.
    ///
    /// [`Rank::Red`] and [`Rank::Black`] only mark jokers and are ignored
    /// when the deck is built; use [`DeckOptions::with_jokers`] instead.
    ///
    /// # Example
    ///
    /// ```
    /// use decks::{DeckOptions, Rank};
    ///
    /// let options = DeckOptions::default().with_ranks([Rank::Ace, Rank::King]);
    /// assert_eq!(options.ranks.as_deref(), Some(&[Rank::Ace, Rank::King][..]));
    /// ```
    #[must_use]
    pub fn with_ranks(mut self, ranks: impl IntoIterator<Item = Rank>) -> Self {
        self.ranks = Some(ranks.into_iter().collect());
        self
    }
}
