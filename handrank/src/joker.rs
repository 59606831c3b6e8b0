//! Joker substitution search (C4): evaluating a hand that holds one or more
//! jokers by trying every standard card in each joker's place and keeping
//! the best resulting rank code.
//!
//! `examples/original_source/pokerlib.hpp`'s `mutate5`/`mutate6`/`mutate7`
//! implement this as a recursion that, read literally, reassigns the
//! current joker slot's trial card one iteration late relative to the
//! nested recursive call — it never pairs every value of an outer joker
//! with every value of an inner one. The commented-out `mutate5`/`mutate6`/
//! `mutate7` overloads a few lines below them (using `eval_Nhand` directly
//! and `std::min` over raw Cactus-Kev ranks) are dead code, never invoked
//! by `do_joker_eval`. Given that, we implement the full `D_std^j`
//! Cartesian product the spec calls for directly: one recursion level per
//! joker position, trying all 52 standard cards at each level before
//! descending to the next.

/// Finds the best rank code achievable by substituting a standard card for
/// every joker in `wk`, skipping any substitution that duplicates a card
/// already in the hand. `wk[p]` for `p` in `joker_positions` is overwritten
/// during the search; every other slot already holds a concrete 1-based
/// card index. `lookup` evaluates a fully concrete hand via the standard
/// table's C8 walk.
pub fn enumerate_substitutions(
    wk: &mut [u8],
    joker_positions: &[usize],
    lookup: &dyn Fn(&[u8]) -> i32,
) -> i32 {
    let mut best = 0i32;
    substitute(wk, joker_positions, 0, &mut best, lookup);
    best
}

fn substitute(
    wk: &mut [u8],
    positions: &[usize],
    depth: usize,
    best: &mut i32,
    lookup: &dyn Fn(&[u8]) -> i32,
) {
    if depth == positions.len() {
        if has_duplicate(wk) {
            return;
        }
        let rank = lookup(wk);
        if rank > *best {
            *best = rank;
        }
        return;
    }

    for card in 1..=52u8 {
        wk[positions[depth]] = card;
        substitute(wk, positions, depth + 1, best, lookup);
    }
}

fn has_duplicate(wk: &[u8]) -> bool {
    for i in 0..wk.len() {
        for j in (i + 1)..wk.len() {
            if wk[i] == wk[j] {
                return true;
            }
        }
    }
    false
}
