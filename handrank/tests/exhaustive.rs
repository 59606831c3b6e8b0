//! Exhaustive category-frequency checks from spec.md §8. These enumerate
//! the full C(52,7)/C(56,7) hand space and so are gated behind `--ignored`
//! rather than run on every `cargo test`, the way this corpus gates its
//! own expensive exhaustive checks off the default test path.

use handrank::{lookup, HandCategory};

/// Calls `f` with every 7-card combination of `1..=deck_size`.
fn for_each_7_combo(deck_size: u8, mut f: impl FnMut(&[u8; 7])) {
    let mut combo = [0u8; 7];
    fn recurse(deck_size: u8, start: u8, depth: usize, combo: &mut [u8; 7], f: &mut dyn FnMut(&[u8; 7])) {
        if depth == 7 {
            f(combo);
            return;
        }
        for card in start..=deck_size {
            combo[depth] = card;
            recurse(deck_size, card + 1, depth + 1, combo, f);
        }
    }
    recurse(deck_size, 1, 0, &mut combo, &mut f);
}

#[test]
#[ignore = "enumerates all 133,784,560 7-card standard hands"]
fn standard_deck_category_frequencies_match_known_counts() {
    let mut counts = [0u64; 11];
    for_each_7_combo(52, |cards| {
        let rank_code = lookup(cards).unwrap();
        let category = HandCategory::from_rank_code(rank_code) as usize;
        counts[category] += 1;
    });

    assert_eq!(counts[0], 0, "no hand should fail to reach a category");
    assert_eq!(counts[HandCategory::HighCard as usize], 23_294_460);
    assert_eq!(counts[HandCategory::OnePair as usize], 58_627_800);
    assert_eq!(counts[HandCategory::TwoPair as usize], 31_433_400);
    assert_eq!(counts[HandCategory::ThreeOfAKind as usize], 6_461_620);
    assert_eq!(counts[HandCategory::Straight as usize], 6_180_020);
    assert_eq!(counts[HandCategory::Flush as usize], 4_047_644);
    assert_eq!(counts[HandCategory::FullHouse as usize], 3_473_184);
    assert_eq!(counts[HandCategory::FourOfAKind as usize], 224_848);
    assert_eq!(counts[HandCategory::StraightFlush as usize], 41_584);
    assert_eq!(counts[HandCategory::FiveOfAKind as usize], 0);

    let total: u64 = counts.iter().sum();
    assert_eq!(total, 133_784_560);
}

#[test]
#[ignore = "enumerates all 231,917,400 7-card joker hands"]
fn joker_deck_never_misses_a_category_and_reaches_five_of_a_kind() {
    let mut counts = [0u64; 11];
    for_each_7_combo(56, |cards| {
        let rank_code = lookup(cards).unwrap();
        let category = HandCategory::from_rank_code(rank_code) as usize;
        counts[category] += 1;
    });

    assert_eq!(counts[0], 0, "no hand should fail to reach a category");
    assert!(counts[HandCategory::FiveOfAKind as usize] > 0);

    let total: u64 = counts.iter().sum();
    assert_eq!(total, 231_917_400);
}
