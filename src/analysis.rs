use rand::Rng;

use crate::cards::{simplify_hand, Card};
use crate::charts;
use crate::decision::Action;
use crate::equity::{calculate_hand_strength, equity_vs_range, POSTFLOP_TRIALS, PREFLOP_TRIALS};
use crate::position::Position;

/// Structural classification of two hole cards: pair / suitedness / gap.
/// Labels and tier groups follow the BSS grouping; strength numbers never
/// come from here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandClass {
    pub label: &'static str,
    pub group: u8,
}

pub fn classify(cards: &[Card; 2]) -> HandClass {
    let (c1, c2) = (cards[0], cards[1]);
    let pair = c1.rank == c2.rank;
    let suited = c1.suit == c2.suit;
    let high = c1.value().max(c2.value());
    let low = c1.value().min(c2.value());
    let gap = high - low;

    let (label, group) = if pair {
        if high >= 10 {
            ("Premium Pair", 1)
        } else if high >= 7 {
            ("Medium Pair", 2)
        } else {
            ("Small Pair", 3)
        }
    } else if high == 14 {
        if low >= 10 {
            if suited {
                ("Premium Suited", 1)
            } else {
                ("Premium Offsuit", 1)
            }
        } else if low >= 7 {
            if suited {
                ("Strong Suited Ace", 2)
            } else {
                ("Weak Ace", 4)
            }
        } else if suited {
            ("Suited Ace", 3)
        } else {
            ("Weak Ace", 5)
        }
    } else if high >= 11 {
        if low >= 9 && gap <= 3 {
            if suited {
                ("Strong Suited", 2)
            } else {
                ("Strong Offsuit", 3)
            }
        } else if suited {
            ("Suited Connector", 3)
        } else {
            ("Weak", 5)
        }
    } else if suited && gap <= 2 {
        ("Suited Connector", 4)
    } else {
        ("Weak", 5)
    };

    HandClass { label, group }
}

/// Full analysis of a starting hand (optionally with a board): type label,
/// tier group, Monte-Carlo strength, win rates and a rough EV in big
/// blinds.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    pub hand_type: &'static str,
    pub group: u8,
    pub strength: f64,
    pub vs_random: f64,
    pub vs_premium: f64,
    pub expected_value: f64,
}

impl HandAnalysis {
    pub fn tier(&self) -> String {
        format!("Group {}", self.group)
    }
}

/// Analyzes exactly two hole cards; any other arity yields `None` rather
/// than an error. Strength is equity against one random hand; vs-premium
/// pits the hand against the premium tier range.
pub fn analyze_hand<R: Rng>(
    cards: &[Card],
    community: &[Card],
    rng: &mut R,
) -> Option<HandAnalysis> {
    if cards.len() != 2 {
        return None;
    }

    let class = classify(&[cards[0], cards[1]]);
    let strength = calculate_hand_strength(cards, community, rng);

    let trials = if community.is_empty() {
        PREFLOP_TRIALS
    } else {
        POSTFLOP_TRIALS
    };
    let vs_premium = equity_vs_range(cards, charts::tiers().premium.as_slice(), community, trials, rng)
        .map(|e| e.percent())
        .unwrap_or(0.0);

    Some(HandAnalysis {
        hand_type: class.label,
        group: class.group,
        strength,
        vs_random: strength,
        vs_premium,
        expected_value: (strength - 50.0) * 0.1,
    })
}

/// Preflop action advice keyed on equity tiers and position gates.
#[derive(Debug, Clone)]
pub struct Recommendation {
    pub action: Action,
    pub sizing: Option<&'static str>,
    pub description: String,
    pub reasoning: String,
    pub vs_three_bet: Option<&'static str>,
}

/// Equity tiers calibrated to win rate against one random hand (TT+ and
/// big aces sit above 65; late-position opens above 55; steals above 48).
/// Tunables, like the decision-engine margins.
pub const OPEN_ANY_THRESHOLD: f64 = 65.0;
pub const LATE_OPEN_THRESHOLD: f64 = 55.0;
pub const STEAL_THRESHOLD: f64 = 48.0;

/// Pure tier/position gate; `strength` is the Monte-Carlo equity.
pub fn recommend_for(
    strength: f64,
    hand_type: &str,
    notation: &str,
    position: Position,
) -> Recommendation {
    if strength >= OPEN_ANY_THRESHOLD {
        return Recommendation {
            action: Action::Raise,
            sizing: Some("3-4x BB"),
            description: format!("Strong {hand_type} from {position}"),
            reasoning: format!(
                "{notation} is a premium hand suitable for opening from any position. \
                 Build the pot with strong equity."
            ),
            vs_three_bet: Some("4-bet for value or call depending on opponent range"),
        };
    }

    if strength >= LATE_OPEN_THRESHOLD {
        if position.is_late() {
            return Recommendation {
                action: Action::Raise,
                sizing: Some("2.5-3x BB"),
                description: "Good hand from late position".to_string(),
                reasoning: format!(
                    "{notation} plays well from {position}. Take advantage of positional equity."
                ),
                vs_three_bet: Some("Call most 3-bets, fold to very tight opponents"),
            };
        }
        return Recommendation {
            action: Action::Call,
            sizing: None,
            description: "Decent hand from early position".to_string(),
            reasoning: format!(
                "{notation} has playability but not strong enough to open from {position} \
                 in tight ranges."
            ),
            vs_three_bet: None,
        };
    }

    if strength >= STEAL_THRESHOLD {
        if position.is_steal_seat() {
            return Recommendation {
                action: Action::Raise,
                sizing: Some("2.5x BB"),
                description: "Playable from late position/blinds".to_string(),
                reasoning: format!(
                    "{notation} has enough equity to open from {position}. Steal blinds or defend."
                ),
                vs_three_bet: Some("Fold to 3-bets unless getting good odds"),
            };
        }
        return Recommendation {
            action: Action::Fold,
            sizing: None,
            description: "Too weak for early/middle position".to_string(),
            reasoning: format!(
                "{notation} doesn't meet opening requirements for {position}. \
                 Wait for better spots."
            ),
            vs_three_bet: None,
        };
    }

    if position == Position::Bb {
        return Recommendation {
            action: Action::Call,
            sizing: None,
            description: "Defend big blind with correct odds".to_string(),
            reasoning: format!("{notation} can defend BB against reasonable sizing with pot odds."),
            vs_three_bet: None,
        };
    }

    Recommendation {
        action: Action::Fold,
        sizing: None,
        description: "Weak hand - fold".to_string(),
        reasoning: format!("{notation} is too weak to play profitably from {position}."),
        vs_three_bet: None,
    }
}

/// Convenience wrapper: classify, estimate preflop strength, recommend.
/// `None` unless given exactly two cards.
pub fn recommend<R: Rng>(
    cards: &[Card],
    position: Position,
    rng: &mut R,
) -> Option<Recommendation> {
    if cards.len() != 2 {
        return None;
    }
    let class = classify(&[cards[0], cards[1]]);
    let strength = calculate_hand_strength(cards, &[], rng);
    let notation = simplify_hand(cards).ok()?;
    Some(recommend_for(strength, class.label, &notation, position))
}
