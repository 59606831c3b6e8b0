use crate::card::Card;
use crate::rank::Rank;
use crate::suit::Suit;

/// Number of cards in a standard deck.
pub const CARD_COUNT: usize = 52;

/// Number of cards in the extended deck (52 standard cards plus 4 suited jokers).
pub const JOKER_CARD_COUNT: usize = 56;

/// Number of distinct ranks in a standard 52-card deck.
pub const RANK_COUNT: usize = 13;

/// Number of distinct ranks in the extended deck, including the joker rank.
pub const JOKER_RANK_COUNT: usize = 14;

/// Number of suits.
pub const SUIT_COUNT: usize = 4;

/// Maximum number of cards that can be stored in a [`Hand`](crate::Hand), and
/// the number of lanes in a canonical partial-hand ID.
pub const MAX_HAND_SIZE: usize = 7;

/// Multiplier separating hand categories in a rank code: `(category << 12) |
/// within_category_rank`.
pub const RANK_OFFSET: u32 = 4096;

/// Prime assigned to each rank (deuce=2, trey=3, four=5, ..., ace=41), used in
/// the Cactus-Kev card word's low byte and in the 5-card evaluator's prime
/// product hash.
pub static PRIMES: [u32; RANK_COUNT] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41];

/// The six ways to choose 5 of 6 card positions, in the fixed order the
/// 6-card evaluator (C3) iterates them.
pub static PERM6: [[usize; 5]; 6] = [
    [0, 1, 2, 3, 4],
    [0, 1, 2, 3, 5],
    [0, 1, 2, 4, 5],
    [0, 1, 3, 4, 5],
    [0, 2, 3, 4, 5],
    [1, 2, 3, 4, 5],
];

/// The twenty-one ways to choose 5 of 7 card positions, in the fixed order
/// the 7-card evaluator (C3) iterates them.
pub static PERM7: [[usize; 5]; 21] = [
    [0, 1, 2, 3, 4],
    [0, 1, 2, 3, 5],
    [0, 1, 2, 3, 6],
    [0, 1, 2, 4, 5],
    [0, 1, 2, 4, 6],
    [0, 1, 2, 5, 6],
    [0, 1, 3, 4, 5],
    [0, 1, 3, 4, 6],
    [0, 1, 3, 5, 6],
    [0, 1, 4, 5, 6],
    [0, 2, 3, 4, 5],
    [0, 2, 3, 4, 6],
    [0, 2, 3, 5, 6],
    [0, 2, 4, 5, 6],
    [0, 3, 4, 5, 6],
    [1, 2, 3, 4, 5],
    [1, 2, 3, 4, 6],
    [1, 2, 3, 5, 6],
    [1, 2, 4, 5, 6],
    [1, 3, 4, 5, 6],
    [2, 3, 4, 5, 6],
];

/// Cactus-Kev rank (1..=7462, 1 = best) cut points partitioning the 5-card
/// evaluator's output into the ten hand categories, from
/// [`HandCategory::HighCard`] to [`HandCategory::StraightFlush`]. Used to
/// convert a Cactus-Kev rank into a rank code (see [`HandCategory`]).
pub static KEV_CUT_POINTS: [u32; 8] = [1277, 4137, 4995, 5853, 5863, 7140, 7296, 7452];

/// A poker hand category, ordered worst to best. The discriminant is the
/// `category` field of a rank code: `rank_code >> 12`.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum HandCategory {
    HighCard = 1,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
    FiveOfAKind,
}

/// Every card of the standard 52-card deck, and additionally the 4 suited
/// jokers if `with_jokers` is set, in rank-then-suit order.
pub fn all_cards(with_jokers: bool) -> Vec<Card> {
    let ranks: &[Rank] = if with_jokers {
        &[
            Rank::Two,
            Rank::Three,
            Rank::Four,
            Rank::Five,
            Rank::Six,
            Rank::Seven,
            Rank::Eight,
            Rank::Nine,
            Rank::Ten,
            Rank::Jack,
            Rank::Queen,
            Rank::King,
            Rank::Ace,
            Rank::Joker,
        ]
    } else {
        &[
            Rank::Two,
            Rank::Three,
            Rank::Four,
            Rank::Five,
            Rank::Six,
            Rank::Seven,
            Rank::Eight,
            Rank::Nine,
            Rank::Ten,
            Rank::Jack,
            Rank::Queen,
            Rank::King,
            Rank::Ace,
        ]
    };

    let mut cards = Vec::with_capacity(ranks.len() * SUIT_COUNT);
    for &rank in ranks {
        for &suit in &[Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades] {
            cards.push(Card::new(rank, suit));
        }
    }
    cards
}

impl HandCategory {
    pub fn from_rank_code(rank_code: u32) -> Self {
        match rank_code >> 12 {
            1 => HandCategory::HighCard,
            2 => HandCategory::OnePair,
            3 => HandCategory::TwoPair,
            4 => HandCategory::ThreeOfAKind,
            5 => HandCategory::Straight,
            6 => HandCategory::Flush,
            7 => HandCategory::FullHouse,
            8 => HandCategory::FourOfAKind,
            9 => HandCategory::StraightFlush,
            10 => HandCategory::FiveOfAKind,
            other => unreachable!("rank code with category {other} is not a valid hand category"),
        }
    }
}
