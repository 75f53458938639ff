use std::fmt;

use crate::error::{AdvisorError, AdvisorResult};

/// Canonical table positions for a full-ring table, in opening order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Utg,
    UtgPlus1,
    Mp,
    MpPlus1,
    Co,
    Btn,
    Sb,
    Bb,
}

pub const ALL_POSITIONS: [Position; 8] = [
    Position::Utg,
    Position::UtgPlus1,
    Position::Mp,
    Position::MpPlus1,
    Position::Co,
    Position::Btn,
    Position::Sb,
    Position::Bb,
];

impl Position {
    pub fn parse(s: &str) -> AdvisorResult<Position> {
        match s.trim().to_uppercase().as_str() {
            "UTG" => Ok(Position::Utg),
            "UTG+1" | "UTG1" => Ok(Position::UtgPlus1),
            "MP" => Ok(Position::Mp),
            "MP+1" | "MP1" => Ok(Position::MpPlus1),
            "CO" => Ok(Position::Co),
            "BTN" => Ok(Position::Btn),
            "SB" => Ok(Position::Sb),
            "BB" => Ok(Position::Bb),
            _ => Err(AdvisorError::InvalidPosition(s.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Position::Utg => "UTG",
            Position::UtgPlus1 => "UTG+1",
            Position::Mp => "MP",
            Position::MpPlus1 => "MP+1",
            Position::Co => "CO",
            Position::Btn => "BTN",
            Position::Sb => "SB",
            Position::Bb => "BB",
        }
    }

    /// Chart key for the embedded opening charts; the +1 seats share the
    /// chart of the seat they sit behind.
    pub fn chart_key(self) -> &'static str {
        match self {
            Position::Utg | Position::UtgPlus1 => "UTG",
            Position::Mp | Position::MpPlus1 => "MP",
            Position::Co => "CO",
            Position::Btn => "BTN",
            Position::Sb => "SB",
            Position::Bb => "BB",
        }
    }

    /// Seats that open wider thanks to acting late: CO, BTN, SB.
    pub fn is_late(self) -> bool {
        matches!(self, Position::Co | Position::Btn | Position::Sb)
    }

    /// Seats from which marginal hands attack the blinds: BTN, SB, BB.
    pub fn is_steal_seat(self) -> bool {
        matches!(self, Position::Btn | Position::Sb | Position::Bb)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
