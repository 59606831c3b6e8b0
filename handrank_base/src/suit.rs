use std::convert::TryFrom;
use std::str::FromStr;

use crate::card::ParseError;

/// One of the four French playing card suits.
///
/// The discriminants match the two-bit suit field used by the canonical
/// hand ID's `rrrr00ss` lane byte and by [`to_card`](crate::card::to_card):
/// hearts, diamonds, clubs, spades.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Suit {
    Hearts = 0,
    Diamonds,
    Clubs,
    Spades,
}

impl TryFrom<u8> for Suit {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Suit::Hearts),
            1 => Ok(Suit::Diamonds),
            2 => Ok(Suit::Clubs),
            3 => Ok(Suit::Spades),
            _ => Err(ParseError),
        }
    }
}

impl FromStr for Suit {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        match s {
            "h" => Ok(Suit::Hearts),
            "d" => Ok(Suit::Diamonds),
            "c" => Ok(Suit::Clubs),
            "s" => Ok(Suit::Spades),
            _ => Err(ParseError),
        }
    }
}

impl Suit {
    pub(crate) fn as_char(self) -> char {
        match self {
            Suit::Hearts => 'h',
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
            Suit::Spades => 's',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("h", Ok(Suit::Hearts))]
    #[case("d", Ok(Suit::Diamonds))]
    #[case("c", Ok(Suit::Clubs))]
    #[case("s", Ok(Suit::Spades))]
    #[case("x", Err(ParseError))]
    #[case("H", Err(ParseError))]
    fn parse(#[case] s: &str, #[case] expected: Result<Suit, ParseError>) {
        let result = s.parse::<Suit>();
        assert_eq!(result, expected);
    }

    #[test]
    fn round_trip() {
        for suit in [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades] {
            let c = suit.as_char();
            assert_eq!(c.to_string().parse::<Suit>().unwrap(), suit);
        }
    }
}
