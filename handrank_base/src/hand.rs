use core::fmt;
use core::iter::FusedIterator;
use core::str::FromStr;

use crate::card::{Card, ParseError};
use crate::constants::MAX_HAND_SIZE;

/// An unordered collection of 0-7 cards, drawn from either the standard
/// 52-card deck or the 56-card extended deck with jokers.
///
/// Cards are stored by their 1-based index (0 = empty slot), matching the
/// card-index sentinel convention used throughout the canonical hand ID.
#[derive(PartialEq, Eq, Hash, Clone, Copy)]
pub struct Hand {
    cards: [u8; MAX_HAND_SIZE],
    len: u8,
}

impl Hand {
    /// Constructs an empty [`Hand`].
    pub fn new() -> Hand {
        Hand {
            cards: [0; MAX_HAND_SIZE],
            len: 0,
        }
    }

    /// Returns `true` if the hand contains the given card.
    pub fn contains(&self, card: Card) -> bool {
        self.cards[..self.len as usize].contains(&card.index())
    }

    /// Returns the total number of cards in the hand.
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Returns `true` if the hand does not contain any cards.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts a card into the hand.
    ///
    /// Fails if the hand already holds [`MAX_HAND_SIZE`] cards or already
    /// contains this card.
    pub fn insert(&mut self, card: Card) -> Result<(), ParseError> {
        if self.len as usize >= MAX_HAND_SIZE || self.contains(card) {
            return Err(ParseError);
        }

        self.cards[self.len as usize] = card.index();
        self.len += 1;
        Ok(())
    }

    /// Returns the cards in the hand as their 1-based indices, in insertion
    /// order. This is the representation [`lookup`](crate) and the
    /// canonical ID builder consume directly.
    pub fn as_indices(&self) -> &[u8] {
        &self.cards[..self.len as usize]
    }

    /// Returns an iterator over all cards in the hand, in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter { hand: self, idx: 0 }
    }
}

impl Default for Hand {
    fn default() -> Hand {
        Hand::new()
    }
}

impl Extend<Card> for Hand {
    #[inline]
    fn extend<T: IntoIterator<Item = Card>>(&mut self, iter: T) {
        for card in iter {
            self.insert(card).expect("hand overflow or duplicate card");
        }
    }
}

impl FromIterator<Card> for Hand {
    #[inline]
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        let mut hand = Hand::new();
        hand.extend(iter);
        hand
    }
}

impl FromStr for Hand {
    type Err = ParseError;

    /// Parses the contiguous two-characters-per-card grammar, e.g.
    /// `"6h7hXc9hTh"` — no separators between cards.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() % 2 != 0 || s.len() / 2 > MAX_HAND_SIZE {
            return Err(ParseError);
        }

        let mut hand = Hand::new();
        let mut i = 0;
        while i < s.len() {
            let card: Card = s.get(i..i + 2).ok_or(ParseError)?.parse()?;
            hand.insert(card)?;
            i += 2;
        }
        Ok(hand)
    }
}

impl fmt::Debug for Hand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for card in self.iter() {
            write!(f, "{:?}", card)?;
        }
        Ok(())
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for card in self.iter() {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = Card;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug)]
pub struct Iter<'a> {
    hand: &'a Hand,
    idx: u8,
}

impl<'a> Iterator for Iter<'a> {
    type Item = Card;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx as usize >= self.hand.len() {
            return None;
        }
        let card = Card::from_index(self.hand.cards[self.idx as usize]).unwrap();
        self.idx += 1;
        Some(card)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.hand.len() - self.idx as usize;
        (len, Some(len))
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {}
impl<'a> FusedIterator for Iter<'a> {}
