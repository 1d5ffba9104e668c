//! Builds a standard deck, shuffles it, and looks for a card.
//!
//! Run with `RUST_LOG=debug` to see the deck's log records.

use std::time::{SystemTime, UNIX_EPOCH};

use decks::{Deck, DeckOptions, Rank, Suit, presets};

fn main() {
    env_logger::init();

    println!("Available presets:");
    for (name, description) in presets() {
        println!("  {name:<13} {description}");
    }

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut deck = Deck::new(DeckOptions::default().with_decks(1).with_jokers(false), seed);
    deck.shuffle();

    match deck.find_card(Rank::Three, Suit::Clubs) {
        Some(card) => println!("Found {card} (value {})", card.value),
        None => println!("3 of Clubs is not in the deck"),
    }

    if let Some(top) = deck.peek() {
        println!("Top card: {top}");
    }
    println!("{} cards remaining", deck.len());
}
