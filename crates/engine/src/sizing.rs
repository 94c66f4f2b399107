//! Fractional-Kelly stake sizing
//!
//! Quarter-Kelly against the parlay's net payout, hard-capped so a single
//! bet never exceeds a small bankroll fraction. A non-positive edge always
//! returns a zero stake, regardless of confidence; a high correlation tier
//! halves the otherwise-computed stake.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::EngineConfig;
use crate::correlation::RiskTier;
use crate::types::OddsQuote;

/// Recommended stake for a graded parlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakeRecommendation {
    /// Stake in bankroll units, rounded to 2 decimal places
    pub suggested_units: Decimal,
    /// Staked bankroll fraction in percent, after the multiplier and caps
    pub kelly_pct: Decimal,
}

impl StakeRecommendation {
    pub fn no_stake() -> Self {
        Self {
            suggested_units: Decimal::ZERO,
            kelly_pct: Decimal::ZERO,
        }
    }
}

/// Size a stake from the value edge, risk tier, and market payout.
///
/// `kelly_pct = (edge / net_payout) * kelly_multiplier`, capped at
/// `max_stake_pct`; units follow from the bankroll and are capped at
/// `max_units_per_bet`. Units and percentage are halved together on high
/// risk so the two outputs always agree.
pub fn recommend_stake(
    value_edge_pct: f64,
    risk_tier: RiskTier,
    odds: &OddsQuote,
    config: &EngineConfig,
) -> StakeRecommendation {
    if value_edge_pct <= 0.0 {
        return StakeRecommendation::no_stake();
    }

    // Valid American odds always pay out something.
    let net_payout = odds.net_payout();
    if net_payout <= 0.0 {
        return StakeRecommendation::no_stake();
    }

    let edge = Decimal::from_f64_retain(value_edge_pct).unwrap_or(Decimal::ZERO);
    let payout = Decimal::from_f64_retain(net_payout).unwrap_or(Decimal::ONE);
    let multiplier = Decimal::from_f64_retain(config.kelly_multiplier).unwrap_or(dec!(0.25));
    let stake_cap_pct = Decimal::from_f64_retain(config.max_stake_pct).unwrap_or(dec!(3));
    let bankroll = Decimal::from_f64_retain(config.bankroll_units).unwrap_or(dec!(100));
    let max_units = Decimal::from_f64_retain(config.max_units_per_bet).unwrap_or(dec!(3));

    let full_kelly_pct = edge / payout;
    let mut kelly_pct = (full_kelly_pct * multiplier).min(stake_cap_pct);
    let mut units = (kelly_pct / dec!(100) * bankroll).min(max_units);

    if risk_tier == RiskTier::High {
        kelly_pct /= dec!(2);
        units /= dec!(2);
    }

    let recommendation = StakeRecommendation {
        suggested_units: units.round_dp(2),
        kelly_pct: kelly_pct.round_dp(2),
    };

    debug!(
        edge = value_edge_pct,
        payout = net_payout,
        units = %recommendation.suggested_units,
        kelly_pct = %recommendation.kelly_pct,
        "stake sized"
    );

    recommendation
}
