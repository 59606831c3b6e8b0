//! End-to-end scenarios from spec.md §8, plus the permutation and
//! suit-relabeling invariance properties. These exercise the real table
//! build (standard and joker) on first use, so the whole suite pays that
//! cost once per test binary run.

use handrank::{lookup, str_to_cards, to_hand, HandCategory};

fn category_of(cards: &str) -> HandCategory {
    let indices = str_to_cards(cards).unwrap();
    to_hand(lookup(&indices).unwrap())
}

#[test]
fn high_card() {
    assert_eq!(category_of("3c5c8cTcJsKsAs"), HandCategory::HighCard);
}

#[test]
fn joker_completes_a_straight_flush() {
    assert_eq!(category_of("6h7hXc9hTh2dQh"), HandCategory::StraightFlush);
}

#[test]
fn joker_promotes_quads_to_five_of_a_kind() {
    assert_eq!(category_of("JhJcJdJsXh2dQh"), HandCategory::FiveOfAKind);
}

#[test]
fn four_jokers_are_always_five_of_a_kind() {
    assert_eq!(category_of("XcXdXhXs2s5h"), HandCategory::FiveOfAKind);
}

#[test]
fn joker_completes_a_straight_not_a_straight_flush() {
    // The filled card (6 or J) can't share a suit with the rest of the run,
    // so this must land one category below a straight flush.
    assert_eq!(category_of("Xc7s8s9cTd2d9h"), HandCategory::Straight);
}

#[test]
fn joker_pairs_the_best_available_card() {
    assert_eq!(category_of("Xc3d8h5cAd9sJh"), HandCategory::OnePair);
}

#[test]
fn ordering_within_category_favors_the_stronger_hand() {
    let weak = lookup(&str_to_cards("2c3d5h7s9cThKs").unwrap()).unwrap();
    let strong = lookup(&str_to_cards("2c3d5h7s9cThAs").unwrap()).unwrap();
    assert_eq!(to_hand(weak), HandCategory::HighCard);
    assert_eq!(to_hand(strong), HandCategory::HighCard);
    assert!(strong > weak, "an ace-high hand must outrank a king-high hand");
}

#[test]
fn permuting_the_cards_does_not_change_the_rank_code() {
    let cards = str_to_cards("AhKhQhJhTh2c3d").unwrap();
    let rank_code = lookup(&cards).unwrap();

    let mut reversed = cards.clone();
    reversed.reverse();
    assert_eq!(lookup(&reversed).unwrap(), rank_code);

    let shuffled = vec![cards[3], cards[0], cards[6], cards[1], cards[5], cards[2], cards[4]];
    assert_eq!(lookup(&shuffled).unwrap(), rank_code);
}

#[test]
fn relabeling_every_suit_consistently_does_not_change_the_rank_code() {
    // Same ranks, hdcs -> shdc rotated one step; a flush stays a flush, a
    // pair stays a pair, the rank code must be identical either way.
    let original = str_to_cards("AhKhQhJhTh2c3d").unwrap();
    let relabeled = str_to_cards("AsKsQsJsTs2h3d").unwrap();
    assert_eq!(lookup(&original).unwrap(), lookup(&relabeled).unwrap());
}

#[test]
fn invalid_hand_size_is_rejected() {
    let cards = str_to_cards("AhKhQh").unwrap();
    assert!(lookup(&cards).is_err());
}

#[test]
fn bad_card_string_is_rejected() {
    assert!(str_to_cards("Zz").is_err());
}
