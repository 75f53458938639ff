use std::cmp::Ordering;
use std::fmt;

use rand::Rng;
use rayon::prelude::*;

use crate::cards::{hand_combos, Card, Deck};
use crate::error::{AdvisorError, AdvisorResult};
use crate::evaluator::evaluate_seven;

/// Default trial counts by street. Preflop has the most unknown cards, so
/// it gets the larger sample; both are tunables, not contracts.
pub const PREFLOP_TRIALS: u32 = 400;
pub const POSTFLOP_TRIALS: u32 = 250;

/// Tallies from a Monte-Carlo equity run against one random opponent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EquityEstimate {
    pub wins: u32,
    pub ties: u32,
    pub losses: u32,
    pub trials: u32,
}

impl EquityEstimate {
    /// Hero's pot share as a percentage in [0, 100]:
    /// (wins + ties/2) / trials * 100. Zero trials reads as 0.
    pub fn percent(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        (self.wins as f64 + self.ties as f64 * 0.5) / self.trials as f64 * 100.0
    }
}

impl fmt::Display for EquityEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = self.trials.max(1) as f64;
        write!(
            f,
            "Win {:.1}% | Tie {:.1}% | Lose {:.1}% (equity: {:.1}%)",
            self.wins as f64 / t * 100.0,
            self.ties as f64 / t * 100.0,
            self.losses as f64 / t * 100.0,
            self.percent(),
        )
    }
}

/// One simulated showdown: random opponent hand, random run-out, best-of-7
/// comparison. Returns hero's result ordering.
fn run_trial<R: Rng>(hero: &[Card], community: &[Card], rng: &mut R) -> Ordering {
    let known: Vec<Card> = hero.iter().chain(community.iter()).copied().collect();
    let mut deck = Deck::new(Some(&known));

    let villain = deck.draw(2, rng);
    let runout = deck.draw(5usize.saturating_sub(community.len()), rng);

    let mut hero_seven = hero.to_vec();
    hero_seven.extend_from_slice(community);
    hero_seven.extend_from_slice(&runout);

    let mut villain_seven = villain;
    villain_seven.extend_from_slice(community);
    villain_seven.extend_from_slice(&runout);

    evaluate_seven(&hero_seven).cmp(&evaluate_seven(&villain_seven))
}

/// Monte-Carlo equity of `hero` against one uniformly random opponent hand.
///
/// Requires exactly two hero cards; anything else yields the zero estimate
/// rather than an error. The RNG is injectable so tests can seed it.
pub fn estimate_equity<R: Rng>(
    hero: &[Card],
    community: &[Card],
    trials: u32,
    rng: &mut R,
) -> EquityEstimate {
    if hero.len() != 2 || community.len() > 5 {
        return EquityEstimate::default();
    }

    let mut est = EquityEstimate {
        trials,
        ..Default::default()
    };
    for _ in 0..trials {
        match run_trial(hero, community, rng) {
            Ordering::Greater => est.wins += 1,
            Ordering::Equal => est.ties += 1,
            Ordering::Less => est.losses += 1,
        }
    }
    est
}

/// Parallel variant for large trial counts; statistically identical to
/// [estimate_equity] with a thread-local RNG per worker.
pub fn estimate_equity_par(hero: &[Card], community: &[Card], trials: u32) -> EquityEstimate {
    if hero.len() != 2 || community.len() > 5 {
        return EquityEstimate::default();
    }

    let (wins, ties, losses) = (0..trials)
        .into_par_iter()
        .map(|_| {
            let mut rng = rand::thread_rng();
            match run_trial(hero, community, &mut rng) {
                Ordering::Greater => (1u32, 0u32, 0u32),
                Ordering::Equal => (0, 1, 0),
                Ordering::Less => (0, 0, 1),
            }
        })
        .reduce(|| (0, 0, 0), |a, b| (a.0 + b.0, a.1 + b.1, a.2 + b.2));

    EquityEstimate {
        wins,
        ties,
        losses,
        trials,
    }
}

/// Equity against a fixed set of hand notations ("AA", "AKs", ...), with
/// combos blocked by hero or board cards removed and trials split evenly
/// across the surviving combos.
pub fn equity_vs_range<R: Rng>(
    hero: &[Card],
    range: &[String],
    community: &[Card],
    trials: u32,
    rng: &mut R,
) -> AdvisorResult<EquityEstimate> {
    if hero.len() != 2 {
        return Err(AdvisorError::InvalidHandSize);
    }

    let dead: Vec<Card> = hero.iter().chain(community.iter()).copied().collect();
    let mut combos: Vec<(Card, Card)> = Vec::new();
    for notation in range {
        for (c1, c2) in hand_combos(notation)? {
            if !dead.contains(&c1) && !dead.contains(&c2) {
                combos.push((c1, c2));
            }
        }
    }

    if combos.is_empty() {
        return Err(AdvisorError::NoValidCombos);
    }

    let per_combo = (trials as usize / combos.len()).max(1) as u32;
    let mut est = EquityEstimate::default();

    for &(v1, v2) in &combos {
        let mut known = dead.clone();
        known.push(v1);
        known.push(v2);

        for _ in 0..per_combo {
            let mut deck = Deck::new(Some(&known));
            let runout = deck.draw(5usize.saturating_sub(community.len()), rng);

            let mut hero_seven = hero.to_vec();
            hero_seven.extend_from_slice(community);
            hero_seven.extend_from_slice(&runout);

            let mut villain_seven = vec![v1, v2];
            villain_seven.extend_from_slice(community);
            villain_seven.extend_from_slice(&runout);

            match evaluate_seven(&hero_seven).cmp(&evaluate_seven(&villain_seven)) {
                Ordering::Greater => est.wins += 1,
                Ordering::Equal => est.ties += 1,
                Ordering::Less => est.losses += 1,
            }
            est.trials += 1;
        }
    }

    Ok(est)
}

/// Street-scaled equity clamped to [0, 100]; the canonical hand-strength
/// number. Returns 0 unless given exactly two hole cards.
pub fn calculate_hand_strength<R: Rng>(cards: &[Card], community: &[Card], rng: &mut R) -> f64 {
    if cards.len() != 2 {
        return 0.0;
    }
    let trials = if community.is_empty() {
        PREFLOP_TRIALS
    } else {
        POSTFLOP_TRIALS
    };
    estimate_equity(cards, community, trials, rng)
        .percent()
        .clamp(0.0, 100.0)
}
