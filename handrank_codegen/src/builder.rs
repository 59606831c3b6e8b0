//! The transition table builder (C7): a two-pass pipeline that discovers
//! every reachable partial-hand ID and then emits the dense transition
//! table `handrank`'s lookup walk (C8) consumes.
//!
//! Grounded on `generate_standard`/`generate` in
//! `examples/original_source/pokerlib.cpp`. Evaluating a terminal (7-card)
//! id into a rank code is deck-variant-specific (plain Cactus-Kev for the
//! standard deck, joker substitution search for the joker deck), so this
//! module stays agnostic to that and takes it as a callback — `handrank`
//! supplies its own C2/C3/C4 evaluators at build time, keeping this crate's
//! only dependency on `handrank_base`.

use handrank_base::constants::MAX_HAND_SIZE;

use crate::canonical::{make_id, num_cards};
use crate::registry::IdRegistry;

/// Evaluates a canonical partial-hand ID of `num_cards` cards (5, 6 or 7)
/// into a rank code. Called only for ids that have reached a length the
/// table needs a terminal rank for.
pub trait TerminalEvaluator {
    fn evaluate(&self, id: i64, num_cards: usize) -> i32;
}

impl<F: Fn(i64, usize) -> i32> TerminalEvaluator for F {
    fn evaluate(&self, id: i64, num_cards: usize) -> i32 {
        self(id, num_cards)
    }
}

/// The dense transition table produced by [`build`], plus the id count it
/// was built over (for logging/diagnostics).
pub struct BuiltTable {
    pub hr: Vec<i32>,
    pub num_ids: usize,
    pub row_width: usize,
}

/// Runs the two-pass builder for a deck of `deck_size` cards (52 or 56),
/// producing the dense transition table.
///
/// Pass 1 walks the driver loop discovering every partial-hand id reachable
/// in fewer than 7 cards, registering each with [`IdRegistry`]. Pass 2 walks
/// the same loop again, now writing either a forwarding pointer to the next
/// row (if fewer than 7 cards have accumulated) or a terminal rank code
/// (from `evaluator`, at 7 cards) into the output array. The registry must
/// be fully populated by pass 1 before pass 2 starts, since pass 2 relies on
/// `save` returning already-assigned slots without inserting anything new.
pub fn build(deck_size: usize, evaluator: &dyn TerminalEvaluator) -> BuiltTable {
    let row_width = deck_size + 1;
    let mut registry = IdRegistry::new();

    log::info!("pass 1: discovering partial-hand ids (deck_size={deck_size})");
    let start = std::time::Instant::now();
    run_pass1(deck_size, &mut registry);
    log::info!(
        "pass 1 done: {} ids in {:.2}s",
        registry.len(),
        start.elapsed().as_secs_f64()
    );

    log::info!("pass 2: emitting rank table ({} rows)", registry.len());
    let start = std::time::Instant::now();
    let hr = run_pass2(deck_size, &mut registry, evaluator);
    log::info!(
        "pass 2 done: {} entries in {:.2}s",
        hr.len(),
        start.elapsed().as_secs_f64()
    );

    BuiltTable {
        hr,
        num_ids: registry.len(),
        row_width,
    }
}

fn run_pass1(deck_size: usize, registry: &mut IdRegistry) {
    let mut id_num = 0usize;
    while id_num < registry.len() {
        let current_id = registry.id_at(id_num);
        for card in 1..=(deck_size as u8) {
            let folded = make_id(current_id, card);
            if folded.num_cards < MAX_HAND_SIZE {
                registry.save(folded.id);
            }
        }
        id_num += 1;
    }
}

fn run_pass2(
    deck_size: usize,
    registry: &mut IdRegistry,
    evaluator: &dyn TerminalEvaluator,
) -> Vec<i32> {
    let row_width = deck_size + 1;
    let num_rows = registry.len();
    // Row `slot`'s data physically lives at offset `(slot + 1) * row_width`,
    // one row_width further out than the slot number suggests — row 0 is
    // left empty so the table walk can start at `p = row_width` with no
    // special case for the empty hand. See `Table::lookup` (C8).
    let mut hr = vec![0i32; (num_rows + 1) * row_width];

    let mut id_num = 0usize;
    while id_num < registry.len() {
        let current_id = registry.id_at(id_num);
        let depth = num_cards(current_id);
        let row_start = (id_num + 1) * row_width;

        for card in 1..=(deck_size as u8) {
            let folded = make_id(current_id, card);
            let entry = if folded.num_cards < MAX_HAND_SIZE {
                let slot = registry.save(folded.id);
                (slot * row_width + row_width) as i32
            } else {
                evaluator.evaluate(folded.id, folded.num_cards)
            };
            hr[row_start + card as usize] = entry;
        }

        if depth == 5 || depth == 6 {
            hr[row_start] = evaluator.evaluate(current_id, depth);
        }

        id_num += 1;
    }

    hr
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A tiny stand-in deck of 4 cards (no joker) with a trivial evaluator
    /// that just returns the id itself truncated to i32, so we can check
    /// the table's structural invariants without a real poker evaluator.
    fn trivial_eval(id: i64, _num_cards: usize) -> i32 {
        (id & 0x7FFF_FFFF) as i32
    }

    #[test]
    fn row_zero_is_the_starting_state() {
        let built = build(4, &trivial_eval);
        // Slot 0 (the empty hand) lives at physical offset row_width; every
        // card transition from it must land on a forwarding pointer since 1
        // card is always < 7.
        for card in 1..=4 {
            let entry = built.hr[built.row_width + card as usize];
            assert_eq!(entry as usize % built.row_width, 0);
        }
    }

    #[test]
    fn terminal_depth_rows_are_populated() {
        let built = build(4, &trivial_eval);
        assert!(built.num_ids > 1);
        assert_eq!(built.hr.len(), (built.num_ids + 1) * built.row_width);
    }
}
