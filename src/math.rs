use crate::error::{AdvisorError, AdvisorResult};

/// Equity required to break even on a call: bet / (pot + 2 * bet).
pub fn pot_odds(pot: f64, bet: f64) -> AdvisorResult<f64> {
    if pot <= 0.0 || bet <= 0.0 {
        return Err(AdvisorError::InvalidValue(
            "Pot and bet must be positive".to_string(),
        ));
    }
    Ok(bet / (pot + bet + bet))
}

/// Expected value of calling `bet` into `pot` with the given equity.
pub fn ev(equity: f64, pot: f64, bet: f64) -> f64 {
    let win_amount = pot + bet;
    equity * win_amount - (1.0 - equity) * bet
}

/// Fold frequency a pure bluff needs to profit.
pub fn break_even_pct(pot: f64, bet: f64) -> AdvisorResult<f64> {
    if pot + bet <= 0.0 {
        return Err(AdvisorError::InvalidValue(
            "Total pot must be positive".to_string(),
        ));
    }
    Ok(bet / (pot + bet + bet))
}
