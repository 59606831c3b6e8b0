//! The 6- and 7-card evaluators (C3): best-of-subsets over the 5-card
//! evaluator, iterating the fixed position lists in
//! `handrank_base::constants` rather than generating combinations at
//! runtime.

use handrank_base::constants::{PERM6, PERM7};

use crate::cactus::eval_5hand;

fn subset(cards: &[u32], positions: &[usize; 5]) -> [u32; 5] {
    [
        cards[positions[0]],
        cards[positions[1]],
        cards[positions[2]],
        cards[positions[3]],
        cards[positions[4]],
    ]
}

/// Evaluates the best 5-card hand out of 6, returning a Cactus-Kev rank
/// (1..=7462, 1 = best).
pub fn eval_6hand(cards: &[u32; 6]) -> u16 {
    PERM6
        .iter()
        .map(|positions| eval_5hand(&subset(cards, positions)))
        .min()
        .expect("PERM6 is non-empty")
}

/// Evaluates the best 5-card hand out of 7, returning a Cactus-Kev rank
/// (1..=7462, 1 = best).
pub fn eval_7hand(cards: &[u32; 7]) -> u16 {
    PERM7
        .iter()
        .map(|positions| eval_5hand(&subset(cards, positions)))
        .min()
        .expect("PERM7 is non-empty")
}

#[cfg(test)]
mod tests {
    use super::*;
    use handrank_base::Card;
    use std::str::FromStr;

    fn kev(s: &str) -> u32 {
        Card::from_str(s).unwrap().to_kev().unwrap()
    }

    #[test]
    fn seven_card_picks_the_flush_over_the_pair() {
        let hand = [
            kev("2h"),
            kev("5h"),
            kev("9h"),
            kev("Jh"),
            kev("Kh"),
            kev("2d"),
            kev("2c"),
        ];
        let best = eval_7hand(&hand);
        let flush_alone = crate::cactus::eval_5cards(
            kev("2h"),
            kev("5h"),
            kev("9h"),
            kev("Jh"),
            kev("Kh"),
        );
        assert_eq!(best, flush_alone);
    }

    #[test]
    fn six_card_ignores_the_worst_card() {
        let hand = [
            kev("Ah"),
            kev("Ad"),
            kev("Ac"),
            kev("As"),
            kev("2h"),
            kev("3d"),
        ];
        let quads_alone = crate::cactus::eval_5cards(
            kev("Ah"),
            kev("Ad"),
            kev("Ac"),
            kev("As"),
            kev("3d"),
        );
        assert_eq!(eval_6hand(&hand), quads_alone);
    }
}
