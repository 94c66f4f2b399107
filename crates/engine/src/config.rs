//! Centralized numeric policy for the parlay engine
//!
//! Every threshold the five evaluation stages share lives in one struct, so
//! the risk tier shown in one place always agrees numerically with the grade
//! and the stake shown elsewhere. Defaults form the reference policy; all
//! values are overridable by the host.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum number of legs in a parlay
    pub max_legs: usize,

    /// Per-leg stacking discount applied to the naive product (0.02 = 2% per leg)
    pub stacking_discount_per_leg: f64,

    /// Penalty (percentage points) per same-player multi-stat pair
    pub same_player_penalty_pts: f64,
    /// Penalty (percentage points) per same-team pair
    pub same_team_penalty_pts: f64,
    /// Penalty (percentage points) per same-game pair on opposite teams
    pub same_game_penalty_pts: f64,
    /// Cap on the accumulated correlation penalty
    pub max_correlation_penalty_pts: f64,

    /// Accumulated penalty at or above this is at least medium risk
    pub medium_risk_threshold_pts: f64,
    /// Accumulated penalty above this is high risk
    pub high_risk_threshold_pts: f64,

    /// A+ band: minimum adjusted confidence
    pub elite_confidence_pts: f64,
    /// A+ band: minimum value edge
    pub elite_edge_pts: f64,
    /// A band: minimum adjusted confidence
    pub strong_confidence_pts: f64,
    /// B band: minimum adjusted confidence
    pub playable_confidence_pts: f64,
    /// C band: minimum adjusted confidence
    pub caution_confidence_pts: f64,
    /// Below this adjusted confidence the grade is F
    pub bust_confidence_pts: f64,
    /// C band tolerates a negative edge no worse than this magnitude
    pub edge_tolerance_pts: f64,

    /// Fraction of full Kelly to stake (0.25 = quarter Kelly)
    pub kelly_multiplier: f64,
    /// Hard ceiling on the staked bankroll fraction, in percent
    pub max_stake_pct: f64,
    /// Bankroll expressed in units
    pub bankroll_units: f64,
    /// Hard ceiling on a single stake, in units
    pub max_units_per_bet: f64,

    /// A leg this many points below the slip average is a swap candidate
    pub swap_gap_pts: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_legs: 6,
            stacking_discount_per_leg: 0.02,
            same_player_penalty_pts: 10.0,
            same_team_penalty_pts: 8.0,
            same_game_penalty_pts: 6.0,
            max_correlation_penalty_pts: 20.0,
            medium_risk_threshold_pts: 5.0,
            high_risk_threshold_pts: 12.0,
            elite_confidence_pts: 72.0,
            elite_edge_pts: 5.0,
            strong_confidence_pts: 65.0,
            playable_confidence_pts: 55.0,
            caution_confidence_pts: 45.0,
            bust_confidence_pts: 35.0,
            edge_tolerance_pts: 5.0,
            kelly_multiplier: 0.25,
            max_stake_pct: 3.0,
            bankroll_units: 100.0,
            max_units_per_bet: 3.0,
            swap_gap_pts: 10.0,
        }
    }
}
