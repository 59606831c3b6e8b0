use std::convert::TryFrom;
use std::str::FromStr;

use crate::card::ParseError;

/// One of the thirteen ranks of a standard French playing card deck, plus
/// the [`Joker`](Rank::Joker) rank used by the 56-card extended deck.
///
/// The joker has no concrete Cactus-Kev representation: it stands for any
/// rank and any suit, and is resolved by substitution before 5-card
/// evaluation (spec §4.4).
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum Rank {
    Two = 0,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
    Joker,
}

impl TryFrom<u8> for Rank {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Rank::Two),
            1 => Ok(Rank::Three),
            2 => Ok(Rank::Four),
            3 => Ok(Rank::Five),
            4 => Ok(Rank::Six),
            5 => Ok(Rank::Seven),
            6 => Ok(Rank::Eight),
            7 => Ok(Rank::Nine),
            8 => Ok(Rank::Ten),
            9 => Ok(Rank::Jack),
            10 => Ok(Rank::Queen),
            11 => Ok(Rank::King),
            12 => Ok(Rank::Ace),
            13 => Ok(Rank::Joker),
            _ => Err(ParseError),
        }
    }
}

impl FromStr for Rank {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 1 {
            return Err(ParseError);
        }

        let c = s.chars().next().unwrap();
        let idx = match c {
            '2'..='9' => c.to_digit(10).unwrap() as u8 - 2,
            'T' => 8,
            'J' => 9,
            'Q' => 10,
            'K' => 11,
            'A' => 12,
            'X' => 13,
            _ => return Err(ParseError),
        };
        Self::try_from(idx)
    }
}

impl Rank {
    /// Returns `true` if this rank is the joker, rather than a concrete
    /// card rank.
    pub fn is_joker(self) -> bool {
        self == Rank::Joker
    }

    pub(crate) fn as_char(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
            Rank::Joker => 'X',
        }
    }
}
