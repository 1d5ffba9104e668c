//! Playing-card decks with optional `no_std` support.
//!
//! The crate provides a [`Deck`] type that builds decks from named game
//! presets, optionally with jokers or several deck blocks, and supports
//! shuffling, cutting, drawing, peeking, and searching.
//!
//! # Example
//!
//! ```
//! use decks::{Deck, DeckOptions, Rank, Suit};
//!
//! let mut deck = Deck::new(DeckOptions::default(), 42);
//! deck.shuffle();
//! assert!(deck.find_card(Rank::Three, Suit::Clubs).is_some());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod options;
pub mod preset;

// Re-export main types
pub use card::{Card, CardValue, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::ParseError;
pub use options::DeckOptions;
pub use preset::{Preset, PresetConfig, presets};
