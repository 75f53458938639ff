use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::position::Position;

static CHARTS_JSON: &str = include_str!("../data/charts.json");

#[derive(Deserialize, Debug)]
pub struct RangeBreakdown {
    pub pairs: String,
    pub suited: String,
    pub offsuit: String,
}

/// Opening chart for one position: always-open hands, mixed-frequency
/// hands, and summary metadata. Read-only configuration, not logic.
#[derive(Deserialize, Debug)]
pub struct PositionChart {
    pub open: Vec<String>,
    pub mixed: Vec<String>,
    pub percentage: f64,
    pub combos: u32,
    pub breakdown: RangeBreakdown,
    pub strategy: String,
}

#[derive(Deserialize, Debug)]
pub struct HandTiers {
    pub premium: Vec<String>,
    pub strong: Vec<String>,
    pub playable: Vec<String>,
    pub speculative: Vec<String>,
    pub weak: Vec<String>,
}

impl HandTiers {
    pub fn named(&self) -> [(&'static str, &[String]); 5] {
        [
            ("premium", self.premium.as_slice()),
            ("strong", self.strong.as_slice()),
            ("playable", self.playable.as_slice()),
            ("speculative", self.speculative.as_slice()),
            ("weak", self.weak.as_slice()),
        ]
    }
}

#[derive(Deserialize, Debug)]
struct ChartData {
    charts: HashMap<String, PositionChart>,
    tiers: HandTiers,
}

static DATA: Lazy<ChartData> =
    Lazy::new(|| serde_json::from_str(CHARTS_JSON).expect("Failed to parse starting-hand charts"));

/// Chart for a position; the +1 seats resolve through their chart key.
pub fn chart_for(position: Position) -> &'static PositionChart {
    DATA.charts
        .get(position.chart_key())
        .expect("embedded chart data covers every position key")
}

pub fn tiers() -> &'static HandTiers {
    &DATA.tiers
}

/// Tier name for a simplified hand notation, if the hand is ranked.
pub fn tier_of(notation: &str) -> Option<&'static str> {
    tiers()
        .named()
        .into_iter()
        .find(|(_, hands)| hands.iter().any(|h| h == notation))
        .map(|(name, _)| name)
}
