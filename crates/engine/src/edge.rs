//! Value edge against the market-implied probability
//!
//! The "true" probability fed in is the correlation-adjusted combined
//! confidence. A positive edge means the model believes the parlay is
//! underpriced by the market; a non-positive edge is reported as-is, never
//! hidden or rounded away.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::types::OddsQuote;

/// Implied probability and value edge for a parlay at a given market price
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeReport {
    /// Market-implied win probability (0-100)
    pub implied_probability_pct: f64,
    /// True minus implied probability, in percentage points
    pub value_edge_pct: f64,
}

/// Compare the model's win probability against a validated market quote.
pub fn calculate_edge(true_probability_pct: f64, odds: &OddsQuote) -> EdgeReport {
    let implied = odds.implied_probability_pct();
    EdgeReport {
        implied_probability_pct: implied,
        value_edge_pct: true_probability_pct.clamp(0.0, 100.0) - implied,
    }
}

/// Convenience for callers holding a raw American-odds integer.
///
/// Signals `MissingMarketData` on a malformed price instead of dividing by
/// zero or guessing; the caller must treat the parlay as "edge unknown".
pub fn edge_from_american(
    true_probability_pct: f64,
    american: i32,
) -> Result<EdgeReport, EngineError> {
    let quote = OddsQuote::new(american)?;
    Ok(calculate_edge(true_probability_pct, &quote))
}
