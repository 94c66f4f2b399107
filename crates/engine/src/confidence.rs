//! Combined parlay win-probability from independent leg confidences
//!
//! Treats each leg's confidence as an independent probability and takes the
//! product, then applies a per-leg stacking discount so the naive product does
//! not over-reward long parlays of moderately confident legs. Correlation
//! between legs is handled downstream by the analyzer, not here.

use crate::config::EngineConfig;
use crate::types::Leg;

/// Combine leg confidences into a single win-probability percentage.
///
/// Returns a rounded value in [0, 100]. An empty leg list is no parlay and
/// returns 0. A single leg still pays the discount (1 - d); parity with the
/// posted leg confidence is not a goal.
pub fn combine_confidence(legs: &[Leg], config: &EngineConfig) -> f64 {
    if legs.is_empty() {
        return 0.0;
    }

    let product: f64 = legs
        .iter()
        .map(|leg| leg.confidence.clamp(0.0, 100.0) / 100.0)
        .product();

    let discount = 1.0 - legs.len() as f64 * config.stacking_discount_per_leg;
    let combined = (product * 100.0 * discount.max(0.0)).round();

    combined.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Direction, StatType};

    fn make_leg(player: &str, confidence: f64) -> Leg {
        Leg {
            player: player.to_string(),
            team: player.to_string(),
            stat_type: StatType::ReceivingYards,
            line: 60.5,
            direction: Direction::Over,
            game_id: format!("{}-game", player),
            opponent: "OPP".to_string(),
            confidence,
            projection: None,
            cushion: None,
        }
    }

    #[test]
    fn test_empty_legs_is_zero() {
        let config = EngineConfig::default();
        assert_eq!(combine_confidence(&[], &config), 0.0);
    }

    #[test]
    fn test_single_leg_keeps_discount() {
        // 80 * (1 - 0.02) = 78.4, rounds to 78. The discount applies even to
        // one leg; callers must not expect parity with the leg confidence.
        let config = EngineConfig::default();
        let combined = combine_confidence(&[make_leg("A", 80.0)], &config);
        assert_eq!(combined, 78.0);
    }

    #[test]
    fn test_two_independent_legs() {
        // 0.80 * 0.75 * 100 * (1 - 2 * 0.02) = 57.6, rounds to 58
        let config = EngineConfig::default();
        let legs = vec![make_leg("A", 80.0), make_leg("B", 75.0)];
        assert_eq!(combine_confidence(&legs, &config), 58.0);
    }

    #[test]
    fn test_result_in_range_for_any_confidence() {
        let config = EngineConfig::default();
        for conf in [0.0, 1.0, 33.3, 50.0, 99.9, 100.0] {
            for count in 1..=6 {
                let legs: Vec<Leg> = (0..count)
                    .map(|i| make_leg(&format!("P{}", i), conf))
                    .collect();
                let combined = combine_confidence(&legs, &config);
                assert!(
                    (0.0..=100.0).contains(&combined),
                    "combined {} out of range for conf={} count={}",
                    combined,
                    conf,
                    count
                );
            }
        }
    }

    #[test]
    fn test_out_of_range_confidence_is_clamped() {
        let config = EngineConfig::default();
        let combined = combine_confidence(&[make_leg("A", 140.0)], &config);
        assert!(combined <= 100.0);
        let combined = combine_confidence(&[make_leg("A", -20.0)], &config);
        assert_eq!(combined, 0.0);
    }

    #[test]
    fn test_stacking_discount_is_monotonic_in_leg_count() {
        let config = EngineConfig::default();
        let mut previous = 101.0;
        for count in 1..=6 {
            let legs: Vec<Leg> = (0..count)
                .map(|i| make_leg(&format!("P{}", i), 80.0))
                .collect();
            let combined = combine_confidence(&legs, &config);
            assert!(
                combined <= previous,
                "adding a leg must not increase combined confidence"
            );
            previous = combined;
        }
    }
}
