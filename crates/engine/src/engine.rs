//! Parlay evaluation pipeline
//!
//! Runs the five stages in order: combine leg confidences, discount for
//! correlation, measure value edge against the market quote, grade, and size
//! the stake. Stateless: the host owns the current parlay snapshot and simply
//! re-evaluates on every mutation.

use serde::Serialize;
use tracing::info;

use crate::confidence::combine_confidence;
use crate::config::EngineConfig;
use crate::correlation::{analyze_correlation, CorrelationPenalty};
use crate::edge::calculate_edge;
use crate::error::EngineError;
use crate::grade::{grade_parlay, GradeResult};
use crate::sizing::{recommend_stake, StakeRecommendation};
use crate::types::{AlternativeLeg, Leg, OddsQuote, Parlay};

/// Full output of one evaluation pass
#[derive(Debug, Clone, Serialize)]
pub struct ParlayEvaluation {
    /// Combined confidence before the correlation discount (0-100)
    pub combined_confidence: f64,
    pub correlation: CorrelationPenalty,
    pub grade: GradeResult,
    /// None when market data is missing: edge unknown, never edge zero
    pub stake: Option<StakeRecommendation>,
}

/// Stateless evaluation engine; holds only the numeric policy.
pub struct ParlayEngine {
    config: EngineConfig,
}

impl ParlayEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Validate a leg set against the engine's capacity policy.
    pub fn build_parlay(&self, legs: Vec<Leg>) -> Result<Parlay, EngineError> {
        Parlay::new(legs, self.config.max_legs)
    }

    /// Evaluate a parlay snapshot against an optional market quote.
    ///
    /// `alternatives` is the candidate set for swap suggestions, supplied by
    /// the external recommendation source; pass an empty slice to skip.
    pub fn evaluate(
        &self,
        parlay: &Parlay,
        odds: Option<&OddsQuote>,
        alternatives: &[AlternativeLeg],
    ) -> ParlayEvaluation {
        let legs = parlay.legs();
        info!(
            legs = legs.len(),
            odds = ?odds.map(|quote| quote.american()),
            "evaluating parlay"
        );

        let combined = combine_confidence(legs, &self.config);
        let correlation = analyze_correlation(legs, &self.config);
        let adjusted = (combined - correlation.penalty_pts).clamp(0.0, 100.0);

        let edge = odds.map(|quote| calculate_edge(adjusted, quote));
        let grade = grade_parlay(
            adjusted,
            edge.as_ref(),
            &correlation,
            legs,
            alternatives,
            &self.config,
        );
        let stake = match (edge.as_ref(), odds) {
            (Some(report), Some(quote)) => Some(recommend_stake(
                report.value_edge_pct,
                correlation.tier,
                quote,
                &self.config,
            )),
            _ => None,
        };

        info!(
            grade = %grade.grade,
            adjusted_confidence = adjusted,
            penalty = correlation.penalty_pts,
            tier = %correlation.tier,
            "evaluation complete"
        );

        ParlayEvaluation {
            combined_confidence: combined,
            correlation,
            grade,
            stake,
        }
    }
}

impl Default for ParlayEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::correlation::RiskTier;
    use crate::grade::{Grade, Recommendation};
    use crate::types::{Direction, StatType};
    use rust_decimal_macros::dec;

    fn make_leg(player: &str, team: &str, game_id: &str, confidence: f64) -> Leg {
        Leg {
            player: player.to_string(),
            team: team.to_string(),
            stat_type: StatType::ReceivingYards,
            line: 60.5,
            direction: Direction::Over,
            game_id: game_id.to_string(),
            opponent: "OPP".to_string(),
            confidence,
            projection: Some(70.0),
            cushion: Some(9.5),
        }
    }

    #[test]
    fn test_independent_two_leg_slip_with_value() {
        // Confidences 80 and 75, no shared context: combined 58; at +100 the
        // market implies 50%, an 8-point edge; B band with a 2-unit stake.
        let engine = ParlayEngine::default();
        let parlay = engine
            .build_parlay(vec![
                make_leg("Kelce", "KC", "KC@BUF", 80.0),
                make_leg("Chase", "CIN", "CIN@PIT", 75.0),
            ])
            .unwrap();
        let odds = OddsQuote::new(100).unwrap();

        let evaluation = engine.evaluate(&parlay, Some(&odds), &[]);

        assert_eq!(evaluation.combined_confidence, 58.0);
        assert_eq!(evaluation.correlation.penalty_pts, 0.0);
        assert_eq!(evaluation.correlation.tier, RiskTier::Low);
        assert_eq!(evaluation.grade.value_edge_pct, Some(8.0));
        assert!(evaluation.grade.grade >= Grade::B);
        assert_eq!(evaluation.grade.recommendation, Recommendation::Playable);

        let stake = evaluation.stake.unwrap();
        assert_eq!(stake.suggested_units, dec!(2));
        assert!(stake.suggested_units > dec!(0));
    }

    #[test]
    fn test_same_game_stack_with_no_value_gets_no_stake() {
        // Confidences 70 and 65 from one matchup: combined 44, same-game
        // penalty drives the true probability to 38; at -110 the market
        // implies 52.4%, so the edge is negative and the stake must be zero.
        let engine = ParlayEngine::default();
        let parlay = engine
            .build_parlay(vec![
                make_leg("Kelce", "KC", "KC@BUF", 70.0),
                make_leg("Diggs", "BUF", "KC@BUF", 65.0),
            ])
            .unwrap();
        let odds = OddsQuote::new(-110).unwrap();

        let evaluation = engine.evaluate(&parlay, Some(&odds), &[]);

        assert_eq!(evaluation.combined_confidence, 44.0);
        assert!(evaluation.correlation.tier >= RiskTier::Medium);
        assert_eq!(evaluation.grade.true_probability_pct, 38.0);
        assert!(evaluation.grade.value_edge_pct.unwrap() < 0.0);
        assert!(evaluation.grade.grade <= Grade::D);

        let stake = evaluation.stake.unwrap();
        assert_eq!(stake.suggested_units, dec!(0));
        assert_eq!(stake.kelly_pct, dec!(0));
    }

    #[test]
    fn test_missing_odds_degrades_instead_of_failing() {
        let engine = ParlayEngine::default();
        let parlay = engine
            .build_parlay(vec![make_leg("Kelce", "KC", "KC@BUF", 90.0)])
            .unwrap();

        let evaluation = engine.evaluate(&parlay, None, &[]);

        assert!(evaluation.stake.is_none());
        assert_eq!(evaluation.grade.value_edge_pct, None);
        assert_eq!(evaluation.grade.implied_probability_pct, None);
        // Confidence-only grading caps at B.
        assert!(evaluation.grade.grade <= Grade::B);
        assert!(evaluation
            .grade
            .risk_factors
            .iter()
            .any(|r| r.contains("Market edge unavailable")));
    }

    #[test]
    fn test_build_parlay_enforces_capacity() {
        let engine = ParlayEngine::default();
        let legs: Vec<Leg> = (0..7)
            .map(|i| {
                make_leg(
                    &format!("Player {}", i),
                    &format!("T{}", i),
                    &format!("G{}", i),
                    70.0,
                )
            })
            .collect();
        assert_eq!(
            engine.build_parlay(legs).unwrap_err(),
            EngineError::TooManyLegs { count: 7, max: 6 }
        );
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let engine = ParlayEngine::default();
        let parlay = engine
            .build_parlay(vec![
                make_leg("Kelce", "KC", "KC@BUF", 80.0),
                make_leg("Chase", "CIN", "CIN@PIT", 75.0),
            ])
            .unwrap();
        let odds = OddsQuote::new(120).unwrap();

        let first = engine.evaluate(&parlay, Some(&odds), &[]);
        let second = engine.evaluate(&parlay, Some(&odds), &[]);

        assert_eq!(first.combined_confidence, second.combined_confidence);
        assert_eq!(first.grade.grade, second.grade.grade);
        assert_eq!(first.stake, second.stake);
    }

    #[test]
    fn test_evaluation_serializes() {
        let engine = ParlayEngine::default();
        let parlay = engine
            .build_parlay(vec![make_leg("Kelce", "KC", "KC@BUF", 80.0)])
            .unwrap();
        let odds = OddsQuote::new(100).unwrap();

        let evaluation = engine.evaluate(&parlay, Some(&odds), &[]);
        let json = serde_json::to_string(&evaluation).unwrap();

        assert!(json.contains("\"combined_confidence\""));
        assert!(json.contains("\"grade\""));
        assert!(json.contains("\"suggested_units\""));
    }
}
