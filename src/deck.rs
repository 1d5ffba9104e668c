//! The deck and its mutation operations.

use alloc::vec::Vec;

use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, CardValue, Rank, Suit};
use crate::options::DeckOptions;
use crate::preset::{Preset, PresetConfig};

/// An ordered stack of cards built from a preset and optional overrides.
///
/// The end of the card sequence is the top of the deck: [`Deck::draw`] and
/// [`Deck::peek`] operate there.
///
/// The deck owns a seeded random number generator used by [`Deck::shuffle`]
/// and [`Deck::cut`]. Use [`Deck::shuffle_with`] and [`Deck::cut_with`] to
/// supply a different source of randomness.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Cards, bottom first.
    cards: Vec<Card>,
    /// Preset the deck was built from.
    preset: Preset,
    /// Effective ranks.
    ranks: Vec<Rank>,
    /// Effective joker inclusion.
    jokers: bool,
    /// Effective number of deck blocks.
    decks: u8,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a new deck with the given seed.
    ///
    /// The deck is built in order (not shuffled). Joker color markers in a
    /// rank override are dropped; jokers only come from the joker setting.
    ///
    /// # Example
    ///
    /// ```
    /// use decks::{Deck, DeckOptions, Preset};
    ///
    /// let options = DeckOptions::default()
    ///     .with_preset(Preset::Poker)
    ///     .with_jokers(true)
    ///     .with_decks(2);
    /// let deck = Deck::new(options, 42);
    /// assert_eq!(deck.len(), 108);
    /// ```
    #[must_use]
    pub fn new(options: DeckOptions, seed: u64) -> Self {
        let config = options.preset.config();
        let mut deck = Self {
            cards: Vec::new(),
            preset: options.preset,
            ranks: options.ranks.map_or_else(
                || config.ranks.to_vec(),
                |ranks| ranks.into_iter().filter(|rank| !rank.is_joker_marker()).collect(),
            ),
            jokers: options.jokers.unwrap_or(config.jokers),
            decks: options.decks.unwrap_or(config.decks),
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        deck.reset();
        deck
    }

    /// Creates a new deck from a preset with no overrides.
    #[must_use]
    pub fn with_preset(preset: Preset, seed: u64) -> Self {
        Self::new(DeckOptions::default().with_preset(preset), seed)
    }

    /// Rebuilds the deck in order from its configuration.
    ///
    /// Cards are laid down suit by suit, rank by rank, once per deck block.
    /// Jokers (red, then black) follow each block, except for
    /// [`Preset::DoubleJoker`] which adds a single pair after all blocks.
    pub fn reset(&mut self) {
        let config = self.preset.config();
        let jokers_per_block = if self.jokers && !config.jokers_once {
            2
        } else {
            0
        };
        let block_len = Suit::STANDARD.len() * self.ranks.len() + jokers_per_block;

        self.cards.clear();
        self.cards.reserve(usize::from(self.decks) * block_len + 2);

        for _ in 0..self.decks {
            for suit in Suit::STANDARD {
                for &rank in &self.ranks {
                    self.cards.push(card_for(config, suit, rank));
                }
            }
            if jokers_per_block > 0 {
                self.push_jokers(config);
            }
        }

        if self.jokers && config.jokers_once {
            self.push_jokers(config);
        }

        debug!(
            "reset {} deck: {} block(s), {} rank(s), jokers {}, {} cards",
            self.preset,
            self.decks,
            self.ranks.len(),
            self.jokers,
            self.cards.len()
        );
    }

    fn push_jokers(&mut self, config: &PresetConfig) {
        self.cards.push(card_for(config, Suit::Joker, Rank::Red));
        self.cards.push(card_for(config, Suit::Joker, Rank::Black));
    }

    /// Shuffles the deck using its own random number generator.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
        trace!("shuffled {} cards", self.cards.len());
    }

    /// Shuffles the deck using the given random number generator.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        trace!("shuffled {} cards", self.cards.len());
    }

    /// Cuts the deck using its own random number generator.
    ///
    /// Returns the cut index, or `None` if the deck has at most one card.
    pub fn cut(&mut self) -> Option<usize> {
        cut_cards(&mut self.cards, &mut self.rng)
    }

    /// Cuts the deck using the given random number generator.
    ///
    /// A split point is picked uniformly between 30% and 70% of the deck
    /// (both inclusive) and the cards below it are moved to the top.
    ///
    /// Returns the cut index, or `None` if the deck has at most one card.
    pub fn cut_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<usize> {
        cut_cards(&mut self.cards, rng)
    }

    /// Draws the top card.
    ///
    /// Returns `None` if the deck is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the top card without removing it.
    ///
    /// Returns `None` if the deck is empty.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Finds the first card with the given rank and suit, in current order.
    #[must_use]
    pub fn find_card(&self, rank: Rank, suit: Suit) -> Option<&Card> {
        self.cards
            .iter()
            .find(|card| card.rank == rank && card.suit == suit)
    }

    /// Finds a card by rank and suit names, such as `("Ace", "Spades")`.
    ///
    /// Names are matched exactly. Returns `None` if either name is unknown or
    /// no such card is in the deck.
    ///
    /// # Example
    ///
    /// ```
    /// use decks::{Deck, Preset};
    ///
    /// let deck = Deck::with_preset(Preset::Standard, 1);
    /// assert!(deck.find_card_by_name("Ace", "Spades").is_some());
    /// assert!(deck.find_card_by_name("Joker", "Green").is_none());
    /// ```
    #[must_use]
    pub fn find_card_by_name(&self, rank: &str, suit: &str) -> Option<&Card> {
        let rank = rank.parse().ok()?;
        let suit = suit.parse().ok()?;
        self.find_card(rank, suit)
    }

    /// Returns whether the deck holds a card with the given value and suit.
    ///
    /// Values are compared exactly: an ace valued `Dual(1, 11)` does not match
    /// a plain `1` or `11`.
    #[must_use]
    pub fn has_card(&self, value: impl Into<CardValue>, suit: Suit) -> bool {
        let value = value.into();
        self.cards
            .iter()
            .any(|card| card.value == value && card.suit == suit)
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the preset the deck was built from.
    #[must_use]
    pub const fn preset(&self) -> Preset {
        self.preset
    }

    /// Returns the suits the deck is built from.
    #[must_use]
    pub const fn suits(&self) -> &'static [Suit] {
        &Suit::STANDARD
    }

    /// Returns the effective ranks.
    #[must_use]
    pub fn ranks(&self) -> &[Rank] {
        &self.ranks
    }

    /// Returns whether jokers are included.
    #[must_use]
    pub const fn includes_jokers(&self) -> bool {
        self.jokers
    }

    /// Returns the number of deck blocks.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }
}

/// Builds a card, taking its value from the preset table when there is one.
fn card_for(config: &PresetConfig, suit: Suit, rank: Rank) -> Card {
    config
        .table_value(rank)
        .map_or_else(|| Card::new(suit, rank), |value| Card::with_value(suit, rank, value))
}

/// Returns the inclusive range of cut indices for a deck of `len` cards.
///
/// The bounds are `floor(0.3 * len)` and `ceil(0.7 * len)`.
const fn cut_bounds(len: usize) -> (usize, usize) {
    (len * 3 / 10, (len * 7).div_ceil(10))
}

fn cut_cards<R: Rng + ?Sized>(cards: &mut [Card], rng: &mut R) -> Option<usize> {
    if cards.len() <= 1 {
        return None;
    }

    let (min, max) = cut_bounds(cards.len());
    let index = rng.random_range(min..=max);
    cards.rotate_left(index);
    debug!("cut {} cards at {index}", cards.len());
    Some(index)
}

#[cfg(test)]
mod tests {
    use super::cut_bounds;

    #[test]
    fn cut_bounds_match_rounding() {
        assert_eq!(cut_bounds(2), (0, 2));
        assert_eq!(cut_bounds(10), (3, 7));
        assert_eq!(cut_bounds(24), (7, 17));
        assert_eq!(cut_bounds(52), (15, 37));
        assert_eq!(cut_bounds(54), (16, 38));
    }
}
