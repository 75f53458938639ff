use std::fmt;

use itertools::Itertools;

use crate::cards::Card;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandCategory::HighCard => write!(f, "High Card"),
            HandCategory::OnePair => write!(f, "One Pair"),
            HandCategory::TwoPair => write!(f, "Two Pair"),
            HandCategory::ThreeOfAKind => write!(f, "Three of a Kind"),
            HandCategory::Straight => write!(f, "Straight"),
            HandCategory::Flush => write!(f, "Flush"),
            HandCategory::FullHouse => write!(f, "Full House"),
            HandCategory::FourOfAKind => write!(f, "Four of a Kind"),
            HandCategory::StraightFlush => write!(f, "Straight Flush"),
        }
    }
}

/// Width of one category band. The tiebreak sum maxes out at
/// 14 * (15^4 + ... + 15^0) = 759,374, so bands never collide.
const BAND: u64 = 1_000_000;

/// A fully ordered hand score: category band plus positional-weighted
/// tiebreaks. Comparing two scores compares the hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandScore(u64);

impl HandScore {
    /// Sentinel for inputs that cannot form a five-card hand.
    pub const NONE: HandScore = HandScore(0);

    pub fn category(self) -> HandCategory {
        match self.0 / BAND {
            8 => HandCategory::StraightFlush,
            7 => HandCategory::FourOfAKind,
            6 => HandCategory::FullHouse,
            5 => HandCategory::Flush,
            4 => HandCategory::Straight,
            3 => HandCategory::ThreeOfAKind,
            2 => HandCategory::TwoPair,
            1 => HandCategory::OnePair,
            _ => HandCategory::HighCard,
        }
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Tiebreak vector (primary rank first, then kickers descending) folded
/// into one integer. Each slot gets a descending power of 15 so no value
/// can spill into a more significant slot.
fn weighted(tiebreak: &[u8]) -> u64 {
    tiebreak
        .iter()
        .enumerate()
        .map(|(i, &v)| v as u64 * 15u64.pow(4 - i as u32))
        .sum()
}

fn score(category: HandCategory, tiebreak: &[u8]) -> HandScore {
    HandScore(category as u64 * BAND + weighted(tiebreak))
}

/// High card of a straight formed by `values` (sorted descending), if any.
/// The wheel A-5-4-3-2 counts as a 5-high straight.
fn straight_high(values: &[u8]) -> Option<u8> {
    let mut unique: Vec<u8> = values.to_vec();
    unique.dedup();
    if unique.len() < 5 {
        return None;
    }

    for window in unique.windows(5) {
        if window[0] - window[4] == 4 {
            return Some(window[0]);
        }
    }

    if [14, 5, 4, 3, 2].iter().all(|v| unique.contains(v)) {
        return Some(5);
    }

    None
}

/// Scores exactly five cards. Pure and integer-only: equal hands score
/// exactly equal.
pub fn evaluate_five(cards: &[Card; 5]) -> HandScore {
    let mut values: Vec<u8> = cards.iter().map(|c| c.value()).collect();
    values.sort_unstable_by(|a, b| b.cmp(a));

    let flush = cards.windows(2).all(|w| w[0].suit == w[1].suit);
    let straight = straight_high(&values);

    let mut counts = [0u8; 15];
    for &v in &values {
        counts[v as usize] += 1;
    }

    // Rank histogram ordered by (count desc, rank desc).
    let mut freq: Vec<(u8, u8)> = (2..=14u8)
        .filter(|&v| counts[v as usize] > 0)
        .map(|v| (counts[v as usize], v))
        .collect();
    freq.sort_unstable_by(|a, b| b.0.cmp(&a.0).then(b.1.cmp(&a.1)));

    if flush {
        if let Some(high) = straight {
            return score(HandCategory::StraightFlush, &[high]);
        }
    }

    if freq[0].0 == 4 {
        let quad = freq[0].1;
        let kicker = freq.iter().find(|e| e.1 != quad).map(|e| e.1).unwrap_or(0);
        return score(HandCategory::FourOfAKind, &[quad, kicker]);
    }

    if freq[0].0 == 3 && freq.len() > 1 && freq[1].0 == 2 {
        return score(HandCategory::FullHouse, &[freq[0].1, freq[1].1]);
    }

    if flush {
        return score(HandCategory::Flush, &values);
    }

    if let Some(high) = straight {
        return score(HandCategory::Straight, &[high]);
    }

    if freq[0].0 == 3 {
        let trips = freq[0].1;
        let mut tiebreak = vec![trips];
        tiebreak.extend(values.iter().copied().filter(|&v| v != trips));
        return score(HandCategory::ThreeOfAKind, &tiebreak);
    }

    let pairs: Vec<u8> = freq.iter().filter(|e| e.0 == 2).map(|e| e.1).collect();

    if pairs.len() == 2 {
        let kicker = values
            .iter()
            .copied()
            .find(|v| !pairs.contains(v))
            .unwrap_or(0);
        return score(HandCategory::TwoPair, &[pairs[0], pairs[1], kicker]);
    }

    if pairs.len() == 1 {
        let pair = pairs[0];
        let mut tiebreak = vec![pair];
        tiebreak.extend(values.iter().copied().filter(|&v| v != pair));
        return score(HandCategory::OnePair, &tiebreak);
    }

    score(HandCategory::HighCard, &values)
}

/// Best five-card score over any 5 to 7 cards, by exhaustive combination
/// search. Fewer than five cards yields [HandScore::NONE]; callers are
/// expected to guard arity before trusting the result.
pub fn evaluate_seven(cards: &[Card]) -> HandScore {
    if cards.len() < 5 {
        return HandScore::NONE;
    }
    if cards.len() == 5 {
        return evaluate_five(&[cards[0], cards[1], cards[2], cards[3], cards[4]]);
    }

    cards
        .iter()
        .combinations(5)
        .map(|combo| evaluate_five(&[*combo[0], *combo[1], *combo[2], *combo[3], *combo[4]]))
        .max()
        .unwrap_or(HandScore::NONE)
}
