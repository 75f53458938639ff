use rand::rngs::StdRng;
use rand::SeedableRng;

use bss_advisor::cards::*;

fn c(notation: &str) -> Card {
    parse_card(notation).unwrap()
}

#[test]
fn test_card_creation() {
    let card = Card::new(Rank::Ace, Suit::Spades);
    assert_eq!(card.rank, Rank::Ace);
    assert_eq!(card.suit, Suit::Spades);
    assert_eq!(card.value(), 14);
}

#[test]
fn test_rank_value_mapping() {
    assert_eq!(Rank::Two.value(), 2);
    assert_eq!(Rank::Ten.value(), 10);
    assert_eq!(Rank::Jack.value(), 11);
    assert_eq!(Rank::Queen.value(), 12);
    assert_eq!(Rank::King.value(), 13);
    assert_eq!(Rank::Ace.value(), 14);
}

#[test]
fn test_invalid_rank() {
    assert!(Rank::from_char('X').is_err());
    assert!(Rank::parse("11").is_err());
}

#[test]
fn test_invalid_suit() {
    assert!(Suit::parse("x").is_err());
    assert!(Suit::parse("spade").is_err());
}

#[test]
fn test_card_str() {
    assert_eq!(format!("{}", Card::new(Rank::King, Suit::Diamonds)), "Kd");
}

#[test]
fn test_card_pretty() {
    assert_eq!(Card::new(Rank::Ace, Suit::Spades).pretty(), "A\u{2660}");
}

#[test]
fn test_parse_card_basic() {
    assert_eq!(parse_card("As").unwrap(), Card::new(Rank::Ace, Suit::Spades));
    assert_eq!(parse_card("Td").unwrap(), Card::new(Rank::Ten, Suit::Diamonds));
}

#[test]
fn test_parse_card_numeric_ten() {
    assert_eq!(
        parse_card("10h").unwrap(),
        Card::new(Rank::Ten, Suit::Hearts)
    );
}

#[test]
fn test_parse_card_symbol_suit() {
    assert_eq!(
        parse_card("A\u{2665}").unwrap(),
        Card::new(Rank::Ace, Suit::Hearts)
    );
    assert_eq!(
        parse_card("K\u{2660}").unwrap(),
        Card::new(Rank::King, Suit::Spades)
    );
}

#[test]
fn test_parse_card_word_suit() {
    assert_eq!(
        parse_card("A hearts").unwrap(),
        Card::new(Rank::Ace, Suit::Hearts)
    );
    assert_eq!(
        parse_card("10 clubs").unwrap(),
        Card::new(Rank::Ten, Suit::Clubs)
    );
}

#[test]
fn test_parse_card_case_insensitive() {
    assert_eq!(parse_card("AH").unwrap(), Card::new(Rank::Ace, Suit::Hearts));
    assert_eq!(parse_card("kd").unwrap(), Card::new(Rank::King, Suit::Diamonds));
}

#[test]
fn test_parse_card_invalid() {
    assert!(parse_card("ABC").is_err());
    assert!(parse_card("A").is_err());
    assert!(parse_card("").is_err());
}

#[test]
fn test_parse_board_flop() {
    let board = parse_board("AsKdQh").unwrap();
    assert_eq!(board.len(), 3);
    assert_eq!(board[0], Card::new(Rank::Ace, Suit::Spades));
}

#[test]
fn test_parse_board_with_spaces_and_commas() {
    assert_eq!(parse_board("As Kd Qh").unwrap().len(), 3);
    assert_eq!(parse_board("As,Kd,Qh,5c").unwrap().len(), 4);
}

#[test]
fn test_parse_board_contiguous_with_ten() {
    let board = parse_board("10s9d8c").unwrap();
    assert_eq!(board[0], Card::new(Rank::Ten, Suit::Spades));
    assert_eq!(board.len(), 3);
}

#[test]
fn test_parse_board_river() {
    assert_eq!(parse_board("As Kd Qh 5c 2s").unwrap().len(), 5);
}

#[test]
fn test_parse_board_empty() {
    assert_eq!(parse_board("").unwrap().len(), 0);
}

#[test]
fn test_parse_board_invalid() {
    assert!(parse_board("AsK").is_err());
}

#[test]
fn test_parse_hole_cards() {
    let hole = parse_hole_cards("AhKs").unwrap();
    assert_eq!(hole[0], Card::new(Rank::Ace, Suit::Hearts));
    assert_eq!(hole[1], Card::new(Rank::King, Suit::Spades));
}

#[test]
fn test_parse_hole_cards_wrong_arity() {
    assert!(parse_hole_cards("Ah").is_err());
    assert!(parse_hole_cards("AhKsQd").is_err());
}

#[test]
fn test_deck_full() {
    assert_eq!(Deck::new(None).len(), 52);
}

#[test]
fn test_deck_exclude() {
    let excluded = vec![c("As"), c("Kh")];
    assert_eq!(Deck::new(Some(&excluded)).len(), 50);
}

#[test]
fn test_deck_exclude_never_drawn() {
    let excluded = vec![c("As"), c("Kh")];
    let mut rng = StdRng::seed_from_u64(7);
    let mut deck = Deck::new(Some(&excluded));
    let drawn = deck.draw(50, &mut rng);
    assert_eq!(drawn.len(), 50);
    assert!(!drawn.contains(&c("As")));
    assert!(!drawn.contains(&c("Kh")));
}

#[test]
fn test_deck_deal() {
    let mut deck = Deck::new(None);
    let cards = deck.deal(5).unwrap();
    assert_eq!(cards.len(), 5);
    assert_eq!(deck.len(), 47);
}

#[test]
fn test_deck_deal_too_many() {
    let mut deck = Deck::new(None);
    assert!(deck.deal(53).is_err());
}

#[test]
fn test_deck_draw_without_replacement() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut deck = Deck::new(None);
    let drawn = deck.draw(20, &mut rng);
    assert_eq!(drawn.len(), 20);
    assert_eq!(deck.len(), 32);

    let unique: std::collections::HashSet<Card> = drawn.iter().copied().collect();
    assert_eq!(unique.len(), 20);
}

#[test]
fn test_deck_draw_caps_at_remaining() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut deck = Deck::new(None);
    let drawn = deck.draw(60, &mut rng);
    assert_eq!(drawn.len(), 52);
    assert!(deck.is_empty());
}

#[test]
fn test_deck_shuffle_preserves_cards() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut deck = Deck::new(None);
    let before: std::collections::HashSet<Card> = deck.cards().iter().copied().collect();
    deck.shuffle(&mut rng);
    let after: std::collections::HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(before, after);
    assert_eq!(deck.len(), 52);
}

#[test]
fn test_simplify_pair() {
    assert_eq!(simplify_hand(&[c("As"), c("Ah")]).unwrap(), "AA");
}

#[test]
fn test_simplify_suited() {
    assert_eq!(simplify_hand(&[c("As"), c("Ks")]).unwrap(), "AKs");
}

#[test]
fn test_simplify_offsuit_ordering() {
    assert_eq!(simplify_hand(&[c("9h"), c("Td")]).unwrap(), "T9o");
}

#[test]
fn test_simplify_wrong_arity() {
    assert!(simplify_hand(&[c("As")]).is_err());
}

#[test]
fn test_hand_combos_pair() {
    assert_eq!(hand_combos("AA").unwrap().len(), 6);
}

#[test]
fn test_hand_combos_suited() {
    let combos = hand_combos("AKs").unwrap();
    assert_eq!(combos.len(), 4);
    for (c1, c2) in &combos {
        assert_eq!(c1.suit, c2.suit);
    }
}

#[test]
fn test_hand_combos_offsuit() {
    let combos = hand_combos("AKo").unwrap();
    assert_eq!(combos.len(), 12);
    for (c1, c2) in &combos {
        assert_ne!(c1.suit, c2.suit);
    }
}

#[test]
fn test_hand_combos_specific() {
    let combos = hand_combos("AsKh").unwrap();
    assert_eq!(combos.len(), 1);
    assert_eq!(combos[0].0, c("As"));
    assert_eq!(combos[0].1, c("Kh"));
}

#[test]
fn test_hand_combos_invalid() {
    assert!(hand_combos("AKx").is_err());
}
