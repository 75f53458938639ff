use std::fmt;

use rand::Rng;

use crate::position::Position;

/// Behavioral archetypes for the practice opponent. Each carries an
/// aggression probability and a base equity threshold to continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Profile {
    Tight,
    Loose,
    Aggressive,
    Passive,
    Balanced,
}

pub const ALL_PROFILES: [Profile; 5] = [
    Profile::Tight,
    Profile::Loose,
    Profile::Aggressive,
    Profile::Passive,
    Profile::Balanced,
];

impl Profile {
    /// Probability the profile takes the aggressive line when the edge
    /// alone does not force a raise.
    pub fn aggression(self) -> f64 {
        match self {
            Profile::Tight => 0.35,
            Profile::Loose => 0.55,
            Profile::Aggressive => 0.8,
            Profile::Passive => 0.2,
            Profile::Balanced => 0.5,
        }
    }

    /// Base equity percentage required to continue.
    pub fn base_threshold(self) -> f64 {
        match self {
            Profile::Tight => 58.0,
            Profile::Loose => 36.0,
            Profile::Aggressive => 42.0,
            Profile::Passive => 50.0,
            Profile::Balanced => 46.0,
        }
    }

    pub fn persona(self) -> &'static str {
        match self {
            Profile::Tight => "Tight Tim",
            Profile::Loose => "Loose Larry",
            Profile::Aggressive => "Aggressive Amy",
            Profile::Passive => "Passive Pete",
            Profile::Balanced => "Pro Player",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Profile::Tight => "Only plays premium hands",
            Profile::Loose => "Plays many hands",
            Profile::Aggressive => "Applies pressure constantly",
            Profile::Passive => "Avoids big pots",
            Profile::Balanced => "Mixes value and bluffs",
        }
    }

    pub fn style(self) -> &'static str {
        match self {
            Profile::Tight => "Folds often preflop, pushes edges hard with strong ranges",
            Profile::Loose => "Wider ranges, more curiosity calls, less discipline",
            Profile::Aggressive => "Higher raise frequency, more semi-bluffs",
            Profile::Passive => "Check/call heavy, rarely 3-bets",
            Profile::Balanced => "Range-aware, pot-odds aware, hard to exploit",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Profile::Tight => "tight",
            Profile::Loose => "loose",
            Profile::Aggressive => "aggressive",
            Profile::Passive => "passive",
            Profile::Balanced => "balanced",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Fold,
    Call,
    Raise,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Fold => write!(f, "FOLD"),
            Action::Call => write!(f, "CALL"),
            Action::Raise => write!(f, "RAISE"),
        }
    }
}

/// The situation a decision is made in. `strength` is the Monte-Carlo
/// equity percentage; `pot_odds` is the call/(pot after call) ratio.
#[derive(Debug, Clone, Copy)]
pub struct Spot {
    pub strength: f64,
    pub position: Position,
    pub pot_odds: f64,
    pub to_call: f64,
    pub stack: f64,
    pub board_cards: usize,
}

#[derive(Debug, Clone)]
pub struct Decision {
    pub action: Action,
    pub amount: Option<f64>,
    pub reasoning: String,
}

/// Continuation thresholds tighten slightly once the flop is out.
const STREET_FACTOR: f64 = 1.05;
/// Pot-odds requirement is softened by this many percentage points.
const ODDS_TOLERANCE: f64 = 5.0;
/// Edge over the call threshold that always raises.
const AUTO_RAISE_EDGE: f64 = 12.0;
/// Edge that raises only when the aggression draw hits.
const MIXED_RAISE_EDGE: f64 = 4.0;
/// Raise sizing floor in chips.
const MIN_RAISE: f64 = 12.0;

/// Picks fold/call/raise for a spot. Stateless per call; the only
/// randomness is the aggression draw on marginal raise edges, so the
/// fold branches are exactly reproducible.
pub fn decide<R: Rng>(profile: Profile, spot: &Spot, rng: &mut R) -> Decision {
    if spot.to_call > spot.stack {
        return Decision {
            action: Action::Fold,
            amount: None,
            reasoning: "Insufficient chips to continue.".to_string(),
        };
    }

    let street_factor = if spot.board_cards >= 3 {
        STREET_FACTOR
    } else {
        1.0
    };
    let call_threshold = profile.base_threshold() * street_factor;
    let odds_floor = spot.pot_odds * 100.0 - ODDS_TOLERANCE;
    let required = call_threshold.max(odds_floor);

    if spot.strength < required {
        return Decision {
            action: Action::Fold,
            amount: None,
            reasoning: format!(
                "Equity {:.1}% is below threshold ({:.1}%).",
                spot.strength, required
            ),
        };
    }

    let edge = spot.strength - call_threshold;
    let wants_raise =
        edge > AUTO_RAISE_EDGE || (edge > MIXED_RAISE_EDGE && rng.gen::<f64>() < profile.aggression());

    if wants_raise {
        let base = (spot.to_call * (2.0 + profile.aggression())).max(MIN_RAISE);
        let amount = base.round().min(spot.stack);
        return Decision {
            action: Action::Raise,
            amount: Some(amount),
            reasoning: format!(
                "Equity {:.1}% with the {} profile: apply pressure.",
                spot.strength,
                profile.persona()
            ),
        };
    }

    Decision {
        action: Action::Call,
        amount: None,
        reasoning: format!(
            "Equity {:.1}% supports a call with current pot odds.",
            spot.strength
        ),
    }
}
