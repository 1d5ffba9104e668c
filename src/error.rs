//! Error types for parsing card and preset names.

use thiserror::Error;

/// Errors that can occur when parsing a name.
///
/// Parsing is exact and case-sensitive: `"Spades"` parses, `"spades"` does
/// not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Suit name not recognized.
    #[error("unknown suit")]
    UnknownSuit,
    /// Rank name not recognized.
    #[error("unknown rank")]
    UnknownRank,
    /// Preset name not recognized.
    #[error("unknown preset")]
    UnknownPreset,
}
