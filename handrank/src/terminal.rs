//! Turns a canonical partial-hand ID (C5) with its suits possibly erased
//! back into a concrete hand to evaluate, for both the standard deck and
//! the joker deck.
//!
//! Grounded on `do_eval`/`do_joker_eval` in
//! `examples/original_source/pokerlib.cpp`. The trick that makes both
//! functions work directly off the canonical ID, without ever seeing the
//! original concrete cards: a lane whose suit was erased during
//! canonicalization (because it couldn't affect the outcome) is handed an
//! arbitrary suit, cycling round-robin through 1..=4 while skipping
//! whichever suit is the hand's "mainsuit" — the one suit, if any, that
//! survived erasure. Skipping it means the substitution can never
//! accidentally manufacture a flush the real hand didn't have.

use handrank_base::constants::PRIMES;

use crate::cactus::eval_5hand;
use crate::joker;
use crate::subset::{eval_6hand, eval_7hand};

const JOKER_RANK_FIELD: u8 = 14;

/// Unpacks a canonical ID's `num_cards` lanes into `(rank_field, suit_field)`
/// pairs, rank in `1..=14` (14 = joker), suit in `0..=4` (0 = erased).
fn unpack_lanes(id: i64, num_cards: usize) -> [(u8, u8); 7] {
    let mut lanes = [(0u8, 0u8); 7];
    for (i, lane) in lanes.iter_mut().enumerate().take(num_cards) {
        let byte = ((id >> (8 * i)) & 0xFF) as u8;
        *lane = ((byte >> 4) & 0xF, byte & 0xF);
    }
    lanes
}

/// The suit that survived erasure, if any: the last (lowest-rank, since
/// lanes sort high-to-low) lane whose suit field is non-zero.
fn mainsuit(lanes: &[(u8, u8)]) -> u8 {
    let mut main = 0u8;
    for &(_, suit) in lanes {
        if suit != 0 {
            main = suit;
        }
    }
    main
}

/// Assigns the next round-robin suit, skipping `mainsuit` so an erased lane
/// can never be given the one suit the hand actually has.
fn next_suit(iterator: &mut u8, mainsuit: u8) -> u8 {
    let mut suit = *iterator;
    *iterator = if *iterator == 4 { 1 } else { *iterator + 1 };
    if suit == mainsuit {
        suit = *iterator;
        *iterator = if *iterator == 4 { 1 } else { *iterator + 1 };
    }
    suit
}

fn kev_word(rank0: u32, suit1_4: u32) -> u32 {
    PRIMES[rank0 as usize] | (rank0 << 8) | (1u32 << (suit1_4 + 11)) | (1u32 << (16 + rank0))
}

/// Converts a Cactus-Kev rank (1..=7462, 1 = best) into a rank code:
/// `(category << 12) | within_category_rank`, larger meaning better.
/// Grounded on `convert_kev_rank` in
/// `examples/original_source/pokerlib.hpp`.
pub fn convert_kev_rank(kev_rank: u32) -> u32 {
    let result = 7463 - kev_rank;
    let cuts = handrank_base::constants::KEV_CUT_POINTS;

    let mut lower = 0u32;
    for (i, &cut) in cuts.iter().enumerate() {
        if result <= cut {
            return (result - lower) + 4096 * (i as u32 + 1);
        }
        lower = cut;
    }
    (result - lower) + 4096 * (cuts.len() as u32 + 1)
}

/// Evaluates a canonical, joker-free partial-hand ID of `num_cards` cards
/// (5, 6 or 7) into a rank code. This is `handrank_codegen`'s
/// `TerminalEvaluator` for the standard (52-card) table.
pub fn evaluate_standard_id(id: i64, num_cards: usize) -> i32 {
    if id == 0 {
        return 0;
    }

    let lanes = unpack_lanes(id, num_cards);
    let main = mainsuit(&lanes[..num_cards]);

    let mut words = [0u32; 7];
    let mut suit_iter = 1u8;
    for (i, &(rank_field, suit_field)) in lanes.iter().enumerate().take(num_cards) {
        debug_assert_ne!(rank_field, JOKER_RANK_FIELD, "standard table saw a joker lane");
        let rank0 = (rank_field - 1) as u32;
        let suit = if suit_field == 0 {
            next_suit(&mut suit_iter, main)
        } else {
            suit_field
        };
        words[i] = kev_word(rank0, suit as u32);
    }

    let kev_rank = match num_cards {
        5 => eval_5hand(&[words[0], words[1], words[2], words[3], words[4]]),
        6 => eval_6hand(&[words[0], words[1], words[2], words[3], words[4], words[5]]),
        7 => eval_7hand(&[
            words[0], words[1], words[2], words[3], words[4], words[5], words[6],
        ]),
        other => unreachable!("evaluate_standard_id called with {other} cards"),
    };

    convert_kev_rank(kev_rank as u32) as i32
}

/// Evaluates a canonical partial-hand ID that may include jokers, of
/// `num_cards` cards (5, 6 or 7), into a rank code. This is
/// `handrank_codegen`'s `TerminalEvaluator` for the joker (56-card) table.
///
/// `standard_lookup` evaluates a fully concrete hand of 1-based card
/// indices (`1..=52`, never a joker) via the already-built standard table's
/// C8 walk — jokers are resolved by substitution (C4) before ever reaching
/// it.
pub fn evaluate_joker_id(id: i64, num_cards: usize, standard_lookup: &dyn Fn(&[u8]) -> i32) -> i32 {
    if id == 0 {
        return 0;
    }

    let lanes = unpack_lanes(id, num_cards);
    let main = mainsuit(&lanes[..num_cards]);

    // Jokers have rank field 14, the highest possible, so the canonical
    // descending sort always puts every joker lane before every concrete
    // lane: the first `joker_count` lanes are exactly the jokers.
    let joker_count = lanes[..num_cards]
        .iter()
        .take_while(|&&(rank, _)| rank == JOKER_RANK_FIELD)
        .count();

    let mut rankcount = [0u32; 13];
    for &(rank_field, _) in lanes[joker_count..num_cards].iter() {
        rankcount[(rank_field - 1) as usize] += 1;
    }

    let mut dupcount = 1u32;
    let mut mainrank = 0usize;
    if joker_count > 0 {
        // Ascending scan with `>=` keeps the rank achieving the highest
        // count, breaking ties toward the higher rank (spec §4.4 step 2:
        // "prefer the highest-count rank; tiebreak by highest rank").
        for (rank0, &count) in rankcount.iter().enumerate() {
            if count >= dupcount {
                dupcount = count;
                mainrank = rank0;
            }
        }
    }

    if dupcount as usize + joker_count >= 5 {
        return mainrank as i32 + 4096 * 10;
    }

    let mut wk = [0u8; 7];
    let mut suit_iter = 1u8;
    for (i, &(rank_field, suit_field)) in lanes.iter().enumerate().take(num_cards) {
        if rank_field == JOKER_RANK_FIELD {
            continue;
        }
        let rank0 = rank_field - 1;
        let suit = if suit_field == 0 {
            next_suit(&mut suit_iter, main)
        } else {
            suit_field
        };
        wk[i] = rank0 * 4 + suit;
    }

    if joker_count == 0 {
        return standard_lookup(&wk[..num_cards]);
    }

    let joker_positions: Vec<usize> = (0..joker_count).collect();
    joker::enumerate_substitutions(&mut wk[..num_cards], &joker_positions, standard_lookup)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_kev_rank_best_hand_is_top_of_straight_flush() {
        // kev rank 1 (royal flush) is the best of the 10 straight flushes,
        // so it gets the highest within-category index, 10.
        assert_eq!(convert_kev_rank(1), 4096 * 9 + 10);
    }

    #[test]
    fn convert_kev_rank_worst_hand_is_bottom_of_high_card() {
        assert_eq!(convert_kev_rank(7462), 4096 + 1);
    }

    #[test]
    fn convert_kev_rank_is_monotone() {
        // Smaller kev rank (better hand) must never produce a smaller code.
        assert!(convert_kev_rank(100) > convert_kev_rank(5000));
    }
}
