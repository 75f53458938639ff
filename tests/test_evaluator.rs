use itertools::Itertools;
use rand::rngs::StdRng;
use rand::SeedableRng;

use bss_advisor::cards::{parse_board, parse_card, Card, Deck};
use bss_advisor::evaluator::*;

fn c(notation: &str) -> Card {
    parse_card(notation).unwrap()
}

fn five(notation: &str) -> [Card; 5] {
    let cards = parse_board(notation).unwrap();
    [cards[0], cards[1], cards[2], cards[3], cards[4]]
}

#[test]
fn test_category_straight_flush() {
    assert_eq!(
        evaluate_five(&five("9h8h7h6h5h")).category(),
        HandCategory::StraightFlush
    );
}

#[test]
fn test_category_four_of_a_kind() {
    assert_eq!(
        evaluate_five(&five("KsKhKdKc2h")).category(),
        HandCategory::FourOfAKind
    );
}

#[test]
fn test_category_full_house() {
    assert_eq!(
        evaluate_five(&five("QsQhQd2c2d")).category(),
        HandCategory::FullHouse
    );
}

#[test]
fn test_category_flush() {
    assert_eq!(
        evaluate_five(&five("As9s7s5s3s")).category(),
        HandCategory::Flush
    );
}

#[test]
fn test_category_straight() {
    assert_eq!(
        evaluate_five(&five("9s8h7d6c5s")).category(),
        HandCategory::Straight
    );
}

#[test]
fn test_category_trips() {
    assert_eq!(
        evaluate_five(&five("7s7h7dKcQd")).category(),
        HandCategory::ThreeOfAKind
    );
}

#[test]
fn test_category_two_pair() {
    assert_eq!(
        evaluate_five(&five("JsJhTsTd3c")).category(),
        HandCategory::TwoPair
    );
}

#[test]
fn test_category_one_pair() {
    assert_eq!(
        evaluate_five(&five("AsAhKdQc9s")).category(),
        HandCategory::OnePair
    );
}

#[test]
fn test_category_high_card() {
    assert_eq!(
        evaluate_five(&five("AsKd9h7c5s")).category(),
        HandCategory::HighCard
    );
}

#[test]
fn test_category_ladder_total_order() {
    // One canonical hand per category, strongest first; every cross-category
    // pair must respect the ladder.
    let ladder = [
        five("9h8h7h6h5h"), // straight flush
        five("KsKhKdKc2h"), // four of a kind
        five("QsQhQd2c2d"), // full house
        five("As9s7s5s3s"), // flush
        five("9s8h7d6c5s"), // straight
        five("7s7h7dKcQd"), // three of a kind
        five("JsJhTsTd3c"), // two pair
        five("AsAhKdQc9s"), // one pair
        five("AsKd9h7c5s"), // high card
    ];

    for i in 0..ladder.len() {
        for j in (i + 1)..ladder.len() {
            assert!(
                evaluate_five(&ladder[i]) > evaluate_five(&ladder[j]),
                "hand {} should beat hand {}",
                i,
                j
            );
        }
    }
}

#[test]
fn test_royal_beats_lower_straight_flush() {
    assert!(evaluate_five(&five("AsKsQsJsTs")) > evaluate_five(&five("KhQhJhTh9h")));
}

#[test]
fn test_evaluation_deterministic() {
    let hand = five("AsAhKdQc9s");
    let first = evaluate_five(&hand);
    for _ in 0..10 {
        assert_eq!(evaluate_five(&hand), first);
    }
}

#[test]
fn test_tie_with_different_suits() {
    // Pair of kings with A-Q-5 kickers, suits permuted.
    let h1 = evaluate_five(&five("KsKhAdQc5s"));
    let h2 = evaluate_five(&five("KdKcAhQs5h"));
    assert_eq!(h1, h2);
}

#[test]
fn test_wheel_is_five_high_straight() {
    let wheel = evaluate_five(&five("As2h3d4c5s"));
    assert_eq!(wheel.category(), HandCategory::Straight);

    let six_high = evaluate_five(&five("2s3h4d5c6s"));
    assert!(wheel < six_high);
}

#[test]
fn test_wheel_straight_flush_below_six_high() {
    let wheel = evaluate_five(&five("Ah2h3h4h5h"));
    assert_eq!(wheel.category(), HandCategory::StraightFlush);
    assert!(wheel < evaluate_five(&five("2s3s4s5s6s")));
}

#[test]
fn test_higher_pair_beats_lower_pair_with_big_kickers() {
    // Primary rank must dominate every kicker.
    let aces_small = evaluate_five(&five("AsAh5d4c3s"));
    let deuces_big = evaluate_five(&five("2s2hAdKcQh"));
    assert!(aces_small > deuces_big);
}

#[test]
fn test_higher_trips_beat_lower_trips_with_big_kickers() {
    let aces_trips = evaluate_five(&five("AsAhAd3c2s"));
    let deuce_trips = evaluate_five(&five("2s2h2dAcKs"));
    assert!(aces_trips > deuce_trips);
}

#[test]
fn test_kicker_decides_within_pair() {
    let ak = evaluate_five(&five("AsAhKd7c5s"));
    let aq = evaluate_five(&five("AdAcQh7s5h"));
    assert!(ak > aq);
}

#[test]
fn test_two_pair_ordering() {
    let aces_up = evaluate_five(&five("AsAh2d2cKs"));
    let kings_up = evaluate_five(&five("KsKhQdQcAs"));
    assert!(aces_up > kings_up);
}

#[test]
fn test_flush_compares_all_kickers() {
    let h1 = evaluate_five(&five("AsKs9s7s5s"));
    let h2 = evaluate_five(&five("AhKh9h7h4h"));
    assert!(h1 > h2);
}

#[test]
fn test_seven_card_equals_five_card_for_five() {
    let cards = parse_board("AsAhKdQc9s").unwrap();
    assert_eq!(evaluate_seven(&cards), evaluate_five(&five("AsAhKdQc9s")));
}

#[test]
fn test_seven_card_sentinel_below_five() {
    assert_eq!(evaluate_seven(&[c("As"), c("Kh")]), HandScore::NONE);
    assert_eq!(evaluate_seven(&[]), HandScore::NONE);
}

#[test]
fn test_seven_card_finds_flush() {
    let cards = parse_board("AsKs2s3d9s7h4s").unwrap();
    assert_eq!(evaluate_seven(&cards).category(), HandCategory::Flush);
}

#[test]
fn test_seven_card_finds_wheel() {
    let cards = parse_board("As2h3d4c5sKhQd").unwrap();
    assert_eq!(evaluate_seven(&cards).category(), HandCategory::Straight);
}

#[test]
fn test_seven_card_matches_brute_force() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..25 {
        let mut deck = Deck::new(None);
        let cards = deck.draw(7, &mut rng);

        let brute = cards
            .iter()
            .combinations(5)
            .map(|combo| evaluate_five(&[*combo[0], *combo[1], *combo[2], *combo[3], *combo[4]]))
            .max()
            .unwrap();

        assert_eq!(evaluate_seven(&cards), brute);
    }
}

#[test]
fn test_six_card_evaluation() {
    let cards = parse_board("AsAhAdAc2s2h").unwrap();
    assert_eq!(evaluate_seven(&cards).category(), HandCategory::FourOfAKind);
}
