use core::convert::TryFrom;
use core::fmt;
use core::str::FromStr;

use crate::constants::PRIMES;
use crate::rank::Rank;
use crate::suit::Suit;

/// A card from the 56-card extended deck (52 standard cards, plus 4 suited
/// jokers).
///
/// Stored as the 1-based card index from the data model: `index = rank*4 +
/// suit + 1`, with rank 0..12 for 2..A and rank 13 for the joker. Index 0 is
/// reserved as the "no card" sentinel and is never a valid `Card` value.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Card(u8);

impl Card {
    /// Creates a new card of the given `rank` and `suit`.
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Card(rank as u8 * SUIT_COUNT_U8 + suit as u8 + 1)
    }

    /// Builds a card from its 1-based index in `1..=56`.
    pub fn from_index(index: u8) -> Result<Self, ParseError> {
        if (1..=56).contains(&index) {
            Ok(Card(index))
        } else {
            Err(ParseError)
        }
    }

    /// Returns the card's 1-based index.
    pub fn index(self) -> u8 {
        self.0
    }

    /// Returns the rank of the card.
    pub fn rank(self) -> Rank {
        Rank::try_from((self.0 - 1) / SUIT_COUNT_U8).unwrap()
    }

    /// Returns the suit of the card. Jokers carry a suit too: the extended
    /// deck has one joker per suit.
    pub fn suit(self) -> Suit {
        Suit::try_from((self.0 - 1) % SUIT_COUNT_U8).unwrap()
    }

    /// Returns `true` if this card is a joker.
    pub fn is_joker(self) -> bool {
        self.rank().is_joker()
    }

    /// Converts this card to its Cactus-Kev 32-bit word, `xxxbbbbb
    /// bbbbbbbb cdhsrrrr xxpppppp`.
    ///
    /// Returns `None` for jokers, which have no Cactus-Kev representation
    /// and must be resolved by substitution before reaching the 5-card
    /// evaluator.
    pub fn to_kev(self) -> Option<u32> {
        if self.is_joker() {
            return None;
        }

        let r = self.rank() as u32;
        let prime = PRIMES[r as usize];
        let suit_bit = match self.suit() {
            Suit::Clubs => 1u32 << 12,
            Suit::Diamonds => 1u32 << 13,
            Suit::Hearts => 1u32 << 14,
            Suit::Spades => 1u32 << 15,
        };

        Some(prime | (r << 8) | suit_bit | (1u32 << (16 + r)))
    }
}

const SUIT_COUNT_U8: u8 = 4;

/// Extracts the rank field (`0..=13`) from a Cactus-Kev card word.
pub fn get_kev_rank(kev_card: u32) -> u32 {
    (kev_card >> 8) & 0xF
}

/// The fixed mixing function behind the 5-card evaluator's perfect hash of
/// rank prime products, factored into its two addressing components: `b`
/// selects a bucket in `hash_adjust`, and `a` combines with the bucket's
/// stored adjustment to index `hash_values`.
///
/// Shared verbatim by the table generator (which buckets prime products by
/// `b` and searches for per-bucket adjustments) and the runtime evaluator
/// (`hash_values[(a ^ hash_adjust[b]) as usize]`), so the two can never
/// drift apart. The evaluator indexes `hash_values` with no modulo, so the
/// generator's search only accepts an `adjust` for which `a ^ adjust`
/// already falls inside `hash_values`' bounds — `a` alone ranges over
/// `[0, 8191]` (13 bits) but `hash_values` holds one entry per paired hand
/// (4888), so most candidate `adjust` values are rejected as out of range
/// before a collision is even checked.
pub fn find_fast_components(u: u32) -> (u32, u32) {
    let mut u = u.wrapping_add(0xE91AAA35);
    u ^= u >> 16;
    u = u.wrapping_add(u << 8);
    u ^= u >> 4;
    let b = (u >> 8) & 0x1FF;
    let a = u.wrapping_add(u << 2) >> 19;
    (a, b)
}

/// An error which can be returned when parsing a [`Card`] or [`Hand`](crate::Hand).
///
/// This error is used as the error type for all [`FromStr`] implementations in handrank_base.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct ParseError;

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse value")
    }
}

impl std::error::Error for ParseError {}

impl FromStr for Card {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 2 {
            return Err(ParseError);
        }

        let rank = s[..1].parse::<Rank>()?;
        let suit = s[1..].parse::<Suit>()?;

        Ok(Self::new(rank, suit))
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank().as_char(), self.suit().as_char())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.rank().as_char(), self.suit().as_char())
    }
}
