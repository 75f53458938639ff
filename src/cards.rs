use std::collections::HashSet;
use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{AdvisorError, AdvisorResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    pub fn from_char(c: char) -> AdvisorResult<Rank> {
        match c.to_ascii_uppercase() {
            '2' => Ok(Rank::Two),
            '3' => Ok(Rank::Three),
            '4' => Ok(Rank::Four),
            '5' => Ok(Rank::Five),
            '6' => Ok(Rank::Six),
            '7' => Ok(Rank::Seven),
            '8' => Ok(Rank::Eight),
            '9' => Ok(Rank::Nine),
            'T' => Ok(Rank::Ten),
            'J' => Ok(Rank::Jack),
            'Q' => Ok(Rank::Queen),
            'K' => Ok(Rank::King),
            'A' => Ok(Rank::Ace),
            _ => Err(AdvisorError::InvalidRank(c.to_string())),
        }
    }

    /// Parses a rank from either the letter form or the numeric "10".
    pub fn parse(s: &str) -> AdvisorResult<Rank> {
        if s == "10" {
            return Ok(Rank::Ten);
        }
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Rank::from_char(c),
            _ => Err(AdvisorError::InvalidRank(s.to_string())),
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    pub fn value(self) -> u8 {
        self as u8
    }
}

pub const ALL_RANKS: [Rank; 13] = [
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    /// Normalizes any accepted suit encoding to a canonical suit: the letter
    /// forms `s/h/d/c`, the word forms, and the symbol forms.
    pub fn parse(s: &str) -> AdvisorResult<Suit> {
        match s.trim().to_lowercase().as_str() {
            "s" | "\u{2660}" | "spades" => Ok(Suit::Spades),
            "h" | "\u{2665}" | "hearts" => Ok(Suit::Hearts),
            "d" | "\u{2666}" | "diamonds" => Ok(Suit::Diamonds),
            "c" | "\u{2663}" | "clubs" => Ok(Suit::Clubs),
            _ => Err(AdvisorError::InvalidSuit(s.to_string())),
        }
    }

    pub fn from_char(c: char) -> AdvisorResult<Suit> {
        Suit::parse(&c.to_string())
    }

    pub fn to_char(self) -> char {
        match self {
            Suit::Spades => 's',
            Suit::Hearts => 'h',
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Suit::Spades => "\u{2660}",
            Suit::Hearts => "\u{2665}",
            Suit::Diamonds => "\u{2666}",
            Suit::Clubs => "\u{2663}",
        }
    }
}

pub const ALL_SUITS: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    pub fn value(&self) -> u8 {
        self.rank.value()
    }

    pub fn pretty(&self) -> String {
        format!("{}{}", self.rank.to_char(), self.suit.symbol())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.to_char(), self.suit.to_char())
    }
}

pub fn parse_card(notation: &str) -> AdvisorResult<Card> {
    let notation = notation.trim();
    let chars: Vec<char> = notation.chars().collect();
    if chars.len() < 2 {
        return Err(AdvisorError::InvalidCardNotation(notation.to_string()));
    }
    let (rank_len, rank) = if chars[0] == '1' && chars[1] == '0' {
        (2, Rank::Ten)
    } else {
        (1, Rank::from_char(chars[0])?)
    };
    let suit_str: String = chars[rank_len..].iter().collect();
    let suit = Suit::parse(&suit_str)?;
    Ok(Card::new(rank, suit))
}

pub fn parse_board(notation: &str) -> AdvisorResult<Vec<Card>> {
    let cleaned = notation.trim().replace(',', " ");
    if cleaned.is_empty() {
        return Ok(Vec::new());
    }
    if cleaned.split_whitespace().nth(1).is_some() {
        return cleaned.split_whitespace().map(parse_card).collect();
    }

    // Contiguous notation like "AsKdQh" or "10s9d8c".
    let chars: Vec<char> = cleaned.chars().collect();
    let mut cards = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let take = if chars[i] == '1' { 3 } else { 2 };
        if i + take > chars.len() {
            return Err(AdvisorError::InvalidBoardNotation(notation.to_string()));
        }
        let s: String = chars[i..i + take].iter().collect();
        cards.push(parse_card(&s)?);
        i += take;
    }
    Ok(cards)
}

pub fn parse_hole_cards(notation: &str) -> AdvisorResult<[Card; 2]> {
    let cards = parse_board(notation)
        .map_err(|_| AdvisorError::InvalidHandNotation(notation.to_string()))?;
    match cards.as_slice() {
        &[first, second] => Ok([first, second]),
        _ => Err(AdvisorError::InvalidHandSize),
    }
}

/// Canonical two-card notation: "QQ", "AKs", "T9o".
pub fn simplify_hand(cards: &[Card]) -> AdvisorResult<String> {
    if cards.len() != 2 {
        return Err(AdvisorError::InvalidHandSize);
    }
    let (c1, c2) = (cards[0], cards[1]);
    let (hi, lo) = if c1.rank >= c2.rank {
        (c1.rank, c2.rank)
    } else {
        (c2.rank, c1.rank)
    };

    if hi == lo {
        return Ok(format!("{}{}", hi.to_char(), lo.to_char()));
    }

    let suffix = if c1.suit == c2.suit { "s" } else { "o" };
    Ok(format!("{}{}{}", hi.to_char(), lo.to_char(), suffix))
}

/// Expands a hand notation ("AA", "AKs", "AKo", or specific cards like
/// "AsKh") into every concrete two-card combination it stands for.
pub fn hand_combos(notation: &str) -> AdvisorResult<Vec<(Card, Card)>> {
    let notation = notation.trim();
    let chars: Vec<char> = notation.chars().collect();

    // Pair notation: "AA".
    if chars.len() == 2 && chars[0] == chars[1] {
        let rank = Rank::from_char(chars[0])?;
        let mut combos = Vec::new();
        for i in 0..ALL_SUITS.len() {
            for j in (i + 1)..ALL_SUITS.len() {
                combos.push((Card::new(rank, ALL_SUITS[i]), Card::new(rank, ALL_SUITS[j])));
            }
        }
        return Ok(combos);
    }

    // Suited/offsuit notation: "AKs" or "AKo".
    if chars.len() == 3 && (chars[2] == 's' || chars[2] == 'o') {
        let r1 = Rank::from_char(chars[0])?;
        let r2 = Rank::from_char(chars[1])?;

        if chars[2] == 's' {
            return Ok(ALL_SUITS
                .iter()
                .map(|&s| (Card::new(r1, s), Card::new(r2, s)))
                .collect());
        }

        let mut combos = Vec::new();
        for &s1 in &ALL_SUITS {
            for &s2 in &ALL_SUITS {
                if s1 != s2 {
                    combos.push((Card::new(r1, s1), Card::new(r2, s2)));
                }
            }
        }
        return Ok(combos);
    }

    // Specific cards: "AsKh".
    if let Ok([c1, c2]) = parse_hole_cards(notation) {
        return Ok(vec![(c1, c2)]);
    }

    Err(AdvisorError::InvalidHandNotation(notation.to_string()))
}

pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Full 52-card deck minus any excluded cards; uniqueness is structural.
    pub fn new(exclude: Option<&[Card]>) -> Deck {
        let excluded: HashSet<Card> = exclude
            .map(|e| e.iter().copied().collect())
            .unwrap_or_default();
        let cards = ALL_RANKS
            .iter()
            .flat_map(|&r| ALL_SUITS.iter().map(move |&s| Card::new(r, s)))
            .filter(|c| !excluded.contains(c))
            .collect();
        Deck { cards }
    }

    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) -> &mut Self {
        self.cards.shuffle(rng);
        self
    }

    /// Deals the next `n` cards in order, erroring when over-asked.
    pub fn deal(&mut self, n: usize) -> AdvisorResult<Vec<Card>> {
        if n > self.cards.len() {
            return Err(AdvisorError::NotEnoughDeck {
                requested: n,
                available: self.cards.len(),
            });
        }
        Ok(self.cards.drain(..n).collect())
    }

    /// Draws up to `count` cards uniformly at random without replacement.
    /// Asking for more than remain returns every remaining card.
    pub fn draw<R: Rng>(&mut self, count: usize, rng: &mut R) -> Vec<Card> {
        let n = count.min(self.cards.len());
        let mut drawn = Vec::with_capacity(n);
        for _ in 0..n {
            let idx = rng.gen_range(0..self.cards.len());
            drawn.push(self.cards.swap_remove(idx));
        }
        drawn
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
