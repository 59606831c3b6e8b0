//! Canonical partial-hand IDs (C5): folding a new card into a partial hand's
//! 64-bit fingerprint, erasing suits that cannot affect the outcome.

/// Result of folding one more card into a partial-hand ID.
pub struct Folded {
    /// The canonical 64-bit ID of the resulting hand, or 0 if the card
    /// duplicates one already in the hand, or the hand would hold more
    /// than four of one rank.
    pub id: i64,
    /// The number of cards accumulated, including the new one.
    pub num_cards: usize,
}

/// Folds `new_card` (a 1-based card index) into the partial hand identified
/// by `id_in`, returning the canonical ID of the resulting hand.
///
/// `id_in` holds up to 6 cards, one per little-endian byte in `rrrr00ss`
/// form (or 0 for unused lanes). The new card always lands in lane 0 before
/// the lanes are sorted back into canonical order.
pub fn make_id(id_in: i64, new_card: u8) -> Folded {
    let mut lanes = [0u8; 7];
    for i in 0..6 {
        lanes[i + 1] = ((id_in >> (8 * i)) & 0xFF) as u8;
    }

    let c = new_card - 1;
    let rank = c / 4;
    let suit = c % 4;
    lanes[0] = ((rank + 1) << 4) | (suit + 1);

    let mut suitcount = [0u32; 5];
    let mut rankcount = [0u32; 15];
    let mut num_cards = 0usize;
    let mut jokercount = 0u32;
    let mut duplicate = false;

    for (i, &lane) in lanes.iter().enumerate() {
        if lane == 0 {
            break;
        }
        num_cards += 1;

        let lane_suit = (lane & 0xF) as usize;
        let lane_rank = ((lane >> 4) & 0xF) as usize;
        if lane_rank == 14 {
            jokercount += 1;
        }
        suitcount[lane_suit] += 1;
        rankcount[lane_rank] += 1;

        if i != 0 && lanes[0] == lane {
            duplicate = true;
        }
    }

    if duplicate {
        return Folded { id: 0, num_cards };
    }

    if num_cards > 4 && rankcount.iter().any(|&count| count > 4) {
        return Folded { id: 0, num_cards };
    }

    let needsuited = num_cards as i32 - 2;
    for lane in lanes.iter_mut().take(num_cards) {
        let lane_suit = (*lane & 0xF) as usize;
        let lane_rank = (*lane >> 4) & 0xF;
        let erase = (suitcount[lane_suit] as i32 + jokercount as i32) < needsuited
            || lane_rank == 14
            || jokercount == 4;
        if erase {
            *lane &= 0xF0;
        }
    }

    bose_nelson_sort_7(&mut lanes);

    let mut id = 0i64;
    for (i, &lane) in lanes.iter().enumerate() {
        id |= (lane as i64) << (8 * i);
    }

    Folded { id, num_cards }
}

/// Counts the non-zero lanes of a canonical ID, i.e. how many cards it holds.
pub fn num_cards(id: i64) -> usize {
    (0..7)
        .take_while(|i| ((id >> (8 * i)) & 0xFF) != 0)
        .count()
}

/// Sorts 7 lanes into decreasing order using the fixed Bose-Nelson sorting
/// network for n=7 (16 conditional max-swaps).
fn bose_nelson_sort_7(wk: &mut [u8; 7]) {
    macro_rules! swap_if_less {
        ($i:expr, $j:expr) => {
            if wk[$i] < wk[$j] {
                wk.swap($i, $j);
            }
        };
    }

    swap_if_less!(0, 4);
    swap_if_less!(1, 5);
    swap_if_less!(2, 6);
    swap_if_less!(0, 2);
    swap_if_less!(1, 3);
    swap_if_less!(4, 6);
    swap_if_less!(2, 4);
    swap_if_less!(3, 5);
    swap_if_less!(0, 1);
    swap_if_less!(2, 3);
    swap_if_less!(4, 5);
    swap_if_less!(1, 4);
    swap_if_less!(3, 6);
    swap_if_less!(1, 2);
    swap_if_less!(3, 4);
    swap_if_less!(5, 6);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(rank0: u8, suit0: u8) -> u8 {
        rank0 * 4 + suit0 + 1
    }

    #[test]
    fn sort_is_descending() {
        let mut lanes = [3u8, 1, 4, 1, 5, 9, 2];
        bose_nelson_sort_7(&mut lanes);
        for w in lanes.windows(2) {
            assert!(w[0] >= w[1]);
        }
        let mut sorted = lanes.to_vec();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(lanes.to_vec(), sorted);
    }

    #[test]
    fn single_card_gets_no_suit_erasure() {
        let folded = make_id(0, card(5, 2));
        assert_eq!(folded.num_cards, 1);
        assert_ne!(folded.id, 0);
        assert_eq!(folded.id & 0xF, 3);
    }

    #[test]
    fn duplicate_card_is_rejected() {
        let first = make_id(0, card(5, 2));
        let second = make_id(first.id, card(5, 2));
        assert_eq!(second.id, 0);
    }

    #[test]
    fn repeating_a_card_after_all_four_suits_is_rejected() {
        let mut id = 0;
        for suit in 0..4u8 {
            let folded = make_id(id, card(7, suit));
            id = folded.id;
        }
        let folded = make_id(id, card(7, 0));
        assert_eq!(folded.id, 0);
    }

    #[test]
    fn reordering_insertion_yields_same_id() {
        let a1 = make_id(0, card(10, 1));
        let a2 = make_id(a1.id, card(3, 0));

        let b1 = make_id(0, card(3, 0));
        let b2 = make_id(b1.id, card(10, 1));

        assert_eq!(a2.id, b2.id);
    }

    #[test]
    fn irrelevant_suit_is_erased_for_five_cards() {
        // Five cards, at most two of any one suit: no suit can matter.
        let mut id = make_id(0, card(0, 0)).id;
        id = make_id(id, card(1, 1)).id;
        id = make_id(id, card(2, 2)).id;
        id = make_id(id, card(3, 3)).id;
        let folded = make_id(id, card(4, 0));
        for i in 0..5 {
            let lane = (folded.id >> (8 * i)) & 0xFF;
            assert_eq!(lane & 0xF, 0, "suit should be erased in lane {i}");
        }
    }
}
