//! Pairwise correlation detection across parlay legs
//!
//! Legs are correlated when they share a player (different stat), a team, or
//! a game. Each pair is charged once for its strongest relationship; charges
//! accumulate across pairs and are capped so correlation alone cannot drive
//! the confidence gauge past its displayed range.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::EngineConfig;
use crate::types::Leg;

/// Discrete correlation risk tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskTier::Low => write!(f, "low"),
            RiskTier::Medium => write!(f, "medium"),
            RiskTier::High => write!(f, "high"),
        }
    }
}

/// Accumulated correlation penalty for a parlay
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationPenalty {
    /// Penalty magnitude in percentage points (>= 0); subtract from the
    /// combined confidence to get the adjusted probability
    pub penalty_pts: f64,
    pub tier: RiskTier,
    /// One human-readable warning per detected pair
    pub warnings: Vec<String>,
}

impl CorrelationPenalty {
    pub fn none() -> Self {
        Self {
            penalty_pts: 0.0,
            tier: RiskTier::Low,
            warnings: Vec::new(),
        }
    }
}

/// Inspect legs pairwise and accumulate the correlation penalty.
///
/// Monotonic: adding a leg that shares context with an existing leg can only
/// increase the penalty magnitude or leave it unchanged.
pub fn analyze_correlation(legs: &[Leg], config: &EngineConfig) -> CorrelationPenalty {
    let mut penalty = 0.0;
    let mut warnings = Vec::new();

    for i in 0..legs.len() {
        for j in (i + 1)..legs.len() {
            let (a, b) = (&legs[i], &legs[j]);

            // Strongest relationship wins; same-team already implies
            // same-game, so a pair is never double charged.
            if a.player == b.player && a.stat_type != b.stat_type {
                penalty += config.same_player_penalty_pts;
                debug!(player = %a.player, "same-player multi-stat pair");
                warnings.push(format!(
                    "Same-player multi-stat: {} {} and {} move together",
                    a.player, a.stat_type, b.stat_type
                ));
            } else if a.team == b.team {
                penalty += config.same_team_penalty_pts;
                debug!(team = %a.team, "same-team pair");
                warnings.push(format!(
                    "Same-team stack: {} and {} both depend on the {} offense",
                    a.player, b.player, a.team
                ));
            } else if a.game_id == b.game_id {
                penalty += config.same_game_penalty_pts;
                debug!(game = %a.game_id, "same-game pair");
                warnings.push(format!(
                    "Same-game stack: {} and {} share the {} script",
                    a.player, b.player, a.game_id
                ));
            }
        }
    }

    let penalty = penalty.min(config.max_correlation_penalty_pts);

    CorrelationPenalty {
        penalty_pts: penalty,
        tier: tier_for_penalty(penalty, config),
        warnings,
    }
}

/// Map an accumulated penalty magnitude to its risk tier.
///
/// The same thresholds feed the grader, so tier and magnitude never disagree.
pub fn tier_for_penalty(penalty_pts: f64, config: &EngineConfig) -> RiskTier {
    if penalty_pts > config.high_risk_threshold_pts {
        RiskTier::High
    } else if penalty_pts >= config.medium_risk_threshold_pts {
        RiskTier::Medium
    } else {
        RiskTier::Low
    }
}
