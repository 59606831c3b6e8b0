//! The 5-card evaluator (C2): Cactus-Kev / Senzee perfect-hash evaluation of
//! five Cactus-Kev card words into a rank in `1..=7462` (1 = best).
//!
//! `flushes`/`unique5`/`hash_adjust`/`hash_values` are generated at compile
//! time by `handrank_codegen::cactus` (see `build.rs`) and embedded here via
//! `include!(concat!(env!("OUT_DIR"), ...))`.

use handrank_base::find_fast_components;

include!(concat!(env!("OUT_DIR"), "/cactus_tables.rs"));

/// Evaluates five Cactus-Kev card words, returning a rank in `1..=7462`
/// (1 = best). Grounded on `eval_5cards` in
/// `examples/original_source/pokerlib.cpp`.
pub fn eval_5cards(c1: u32, c2: u32, c3: u32, c4: u32, c5: u32) -> u16 {
    let q = ((c1 | c2 | c3 | c4 | c5) >> 16) as usize;

    if c1 & c2 & c3 & c4 & c5 & 0xF000 != 0 {
        return FLUSHES[q];
    }

    let straight_or_high = UNIQUE5[q];
    if straight_or_high != 0 {
        return straight_or_high;
    }

    let product = (c1 & 0xFF) * (c2 & 0xFF) * (c3 & 0xFF) * (c4 & 0xFF) * (c5 & 0xFF);
    let (a, b) = find_fast_components(product);
    HASH_VALUES[(a ^ HASH_ADJUST[b as usize] as u32) as usize]
}

/// Evaluates a five-card Cactus-Kev hand.
pub fn eval_5hand(cards: &[u32; 5]) -> u16 {
    eval_5cards(cards[0], cards[1], cards[2], cards[3], cards[4])
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
    fn royal_flush_beats_low_straight_flush() {
        let royal = eval_5cards(kev("Th"), kev("Jh"), kev("Qh"), kev("Kh"), kev("Ah"));
        let steel_wheel = eval_5cards(kev("Ah"), kev("2h"), kev("3h"), kev("4h"), kev("5h"));
        assert!(royal < steel_wheel, "smaller Cactus-Kev rank is better");
    }

    #[test]
    fn four_of_a_kind_beats_full_house() {
        let quads = eval_5cards(kev("2h"), kev("2d"), kev("2c"), kev("2s"), kev("3h"));
        let boat = eval_5cards(kev("4h"), kev("4d"), kev("4c"), kev("5s"), kev("5h"));
        assert!(quads < boat);
    }

    #[test]
    fn high_card_is_worst_category() {
        let high_card = eval_5cards(kev("2h"), kev("5d"), kev("9c"), kev("Js"), kev("Kh"));
        let pair = eval_5cards(kev("2h"), kev("2d"), kev("9c"), kev("Js"), kev("Kh"));
        assert!(high_card > pair);
    }
}
