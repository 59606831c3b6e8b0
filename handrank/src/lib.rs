//! `handrank` evaluates 7-card poker hands, with or without jokers, by
//! walking a precomputed transition table: once the table is built (or
//! mapped back from a previous run), looking up a hand costs one array read
//! per card.
//!
//! # Example
//!
//! ```no_run
//! use handrank::{lookup, str_to_cards};
//!
//! // The very first lookup on a machine builds and persists the hand rank
//! // tables, which takes a while; every later process just maps them back.
//! let cards = str_to_cards("AhKhQhJhTh2c3d").unwrap();
//! let rank_code = lookup(&cards).unwrap();
//! assert_eq!(handrank::to_hand(rank_code), handrank::HandCategory::StraightFlush);
//! ```
//!
//! Jokers (`X` rank, e.g. `Xh`) are resolved by substitution: `lookup`
//! transparently builds and persists the 56-card joker table the first time
//! it sees one, alongside the 52-card standard table it's built on top of.

mod bootstrap;
mod cactus;
mod config;
mod error;
mod joker;
mod subset;
mod terminal;
mod table;

pub use config::Config;
pub use error::HandRankError;
pub use handrank_base::constants::HandCategory;
pub use handrank_base::{Card, Deck, FullDeck, Hand, JokerDeck, ParseError, Rank, Suit};

use std::str::FromStr;

/// Makes sure the hand rank tables are ready under `config`, building and
/// persisting whatever is missing. Idempotent; safe to call from multiple
/// threads. Call this once at startup if you want table construction (which
/// can take a while the very first time) to happen on your own schedule
/// rather than lazily on the first [`lookup`].
pub fn init(config: &Config) -> Result<(), HandRankError> {
    bootstrap::init(config)
}

/// Looks up the rank code of a hand of 5, 6 or 7 cards (1-based indices
/// into the 56-card extended deck; see [`Card::index`]). Larger is better;
/// compare two rank codes directly to compare hands. Builds the hand rank
/// tables under the default [`Config`] on first use if [`init`] hasn't
/// already been called.
pub fn lookup(cards: &[u8]) -> Result<u32, HandRankError> {
    let table = bootstrap::table()?;
    table.lookup(cards).map(|rank| rank as u32)
}

/// Builds a [`Card`] from a rank and suit character, e.g. `to_card('A',
/// 'h')` for the ace of hearts. `'X'` is the joker rank.
pub fn to_card(rank: char, suit: char) -> Result<Card, HandRankError> {
    let card = format!("{rank}{suit}").parse::<Card>()?;
    Ok(card)
}

/// Classifies a rank code (as returned by [`lookup`]) into its
/// [`HandCategory`].
pub fn to_hand(rank_code: u32) -> HandCategory {
    HandCategory::from_rank_code(rank_code)
}

/// Parses a contiguous two-characters-per-card string (e.g. `"AhKhQhJhTh"`,
/// no separators) into 1-based card indices ready for [`lookup`].
pub fn str_to_cards(s: &str) -> Result<Vec<u8>, HandRankError> {
    let hand = Hand::from_str(s)?;
    Ok(hand.iter().map(|card| card.index()).collect())
}

/// Renders 1-based card indices back into their contiguous string form,
/// e.g. `"AhKhQhJhTh"`. Inverse of [`str_to_cards`].
pub fn dump_hand(cards: &[u8]) -> Result<String, HandRankError> {
    let mut s = String::with_capacity(cards.len() * 2);
    for &index in cards {
        let card = Card::from_index(index)?;
        s.push_str(&card.to_string());
    }
    Ok(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_card_parses_rank_and_suit() {
        let card = to_card('A', 'h').unwrap();
        assert_eq!(card.to_string(), "Ah");
    }

    #[test]
    fn to_card_rejects_bad_rank() {
        assert!(to_card('Y', 'h').is_err());
    }

    #[test]
    fn str_to_cards_round_trips_with_dump_hand() {
        let cards = str_to_cards("AhKhQhJhTh").unwrap();
        assert_eq!(dump_hand(&cards).unwrap(), "AhKhQhJhTh");
    }

    #[test]
    fn to_hand_maps_category_boundaries() {
        assert_eq!(to_hand(4096 + 1), HandCategory::HighCard);
        assert_eq!(to_hand(4096 * 10), HandCategory::FiveOfAKind);
    }
}
