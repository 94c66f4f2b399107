//! Letter grade, recommendation text, and leg-swap suggestions
//!
//! Grade assignment is ordinal and monotonic: higher adjusted confidence or
//! higher value edge never produces a worse letter, and a higher risk tier
//! never produces a better one. When market data is missing the grade is
//! confidence-only and capped at B, with the gap called out as a risk factor.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

use crate::config::EngineConfig;
use crate::correlation::{CorrelationPenalty, RiskTier};
use crate::edge::EdgeReport;
use crate::types::{AlternativeLeg, Leg};

/// Ordinal letter grade, F lowest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    F,
    D,
    C,
    B,
    A,
    #[serde(rename = "A+")]
    APlus,
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Grade::F => write!(f, "F"),
            Grade::D => write!(f, "D"),
            Grade::C => write!(f, "C"),
            Grade::B => write!(f, "B"),
            Grade::A => write!(f, "A"),
            Grade::APlus => write!(f, "A+"),
        }
    }
}

/// Short categorical recommendation shown alongside the grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    StrongPlay,
    Playable,
    ProceedWithCaution,
    Avoid,
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Recommendation::StrongPlay => write!(f, "Strong Play"),
            Recommendation::Playable => write!(f, "Playable"),
            Recommendation::ProceedWithCaution => write!(f, "Proceed with Caution"),
            Recommendation::Avoid => write!(f, "Avoid"),
        }
    }
}

/// Swap suggestion for a leg dragging the slip down
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwapSuggestion {
    /// Index of the weak leg in the parlay
    pub leg_index: usize,
    pub replacement: Leg,
    pub reason: String,
}

/// Full grading output for a parlay
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeResult {
    pub grade: Grade,
    /// Combined confidence after the correlation discount (0-100)
    pub adjusted_confidence: f64,
    pub recommendation: Recommendation,
    pub analysis: String,
    pub risk_factors: Vec<String>,
    /// True minus implied probability; None when market data is missing
    pub value_edge_pct: Option<f64>,
    pub implied_probability_pct: Option<f64>,
    pub true_probability_pct: f64,
    pub suggestions: Vec<SwapSuggestion>,
}

/// Grade a parlay from its adjusted confidence, market edge, and risk tier.
pub fn grade_parlay(
    adjusted_confidence: f64,
    edge: Option<&EdgeReport>,
    correlation: &CorrelationPenalty,
    legs: &[Leg],
    alternatives: &[AlternativeLeg],
    config: &EngineConfig,
) -> GradeResult {
    let conf = adjusted_confidence.clamp(0.0, 100.0);

    let grade = match edge {
        Some(report) => assign_grade(conf, report.value_edge_pct, correlation.tier, config),
        None => degraded_grade(conf, correlation.tier, config),
    };
    let recommendation = recommendation_for(grade);

    let mut risk_factors = correlation.warnings.clone();
    for leg in legs {
        if let Some(cushion) = leg.cushion {
            if cushion < 0.0 {
                risk_factors.push(format!(
                    "{} projects on the wrong side of the line ({:+.1})",
                    leg.label(),
                    cushion
                ));
            }
        }
        if leg.confidence < config.caution_confidence_pts {
            risk_factors.push(format!(
                "{} carries low confidence ({:.0})",
                leg.label(),
                leg.confidence
            ));
        }
    }
    if edge.is_none() {
        risk_factors.push("Market edge unavailable; graded on confidence only".to_string());
    }

    debug!(grade = %grade, conf, tier = %correlation.tier, "assigned grade");

    GradeResult {
        grade,
        adjusted_confidence: conf,
        recommendation,
        analysis: build_analysis(conf, edge, correlation, legs.len()),
        risk_factors,
        value_edge_pct: edge.map(|e| e.value_edge_pct),
        implied_probability_pct: edge.map(|e| e.implied_probability_pct),
        true_probability_pct: conf,
        suggestions: suggest_swaps(legs, alternatives, config),
    }
}

/// Confidence-led bucketing, edge- and risk-adjusted.
fn assign_grade(conf: f64, edge: f64, tier: RiskTier, config: &EngineConfig) -> Grade {
    // High correlation with sub-playable confidence never grades above D.
    if tier == RiskTier::High && conf < config.playable_confidence_pts {
        return bust_grade(conf, edge, config);
    }
    if conf >= config.elite_confidence_pts && edge >= config.elite_edge_pts && tier == RiskTier::Low
    {
        return Grade::APlus;
    }
    if conf >= config.strong_confidence_pts && edge > 0.0 && tier != RiskTier::High {
        return Grade::A;
    }
    if conf >= config.playable_confidence_pts && edge >= 0.0 {
        return Grade::B;
    }
    if conf >= config.caution_confidence_pts && edge > -config.edge_tolerance_pts {
        return Grade::C;
    }
    bust_grade(conf, edge, config)
}

fn bust_grade(conf: f64, edge: f64, config: &EngineConfig) -> Grade {
    if conf < config.bust_confidence_pts || edge <= -(2.0 * config.edge_tolerance_pts) {
        Grade::F
    } else {
        Grade::D
    }
}

/// Confidence-only bucketing when the market price is unknown, capped at B.
fn degraded_grade(conf: f64, tier: RiskTier, config: &EngineConfig) -> Grade {
    let grade = if conf >= config.strong_confidence_pts {
        Grade::B
    } else if conf >= config.playable_confidence_pts {
        Grade::C
    } else if conf >= config.bust_confidence_pts {
        Grade::D
    } else {
        Grade::F
    };
    if tier == RiskTier::High && grade > Grade::C {
        Grade::C
    } else {
        grade
    }
}

fn recommendation_for(grade: Grade) -> Recommendation {
    match grade {
        Grade::APlus | Grade::A => Recommendation::StrongPlay,
        Grade::B => Recommendation::Playable,
        Grade::C => Recommendation::ProceedWithCaution,
        Grade::D | Grade::F => Recommendation::Avoid,
    }
}

fn build_analysis(
    conf: f64,
    edge: Option<&EdgeReport>,
    correlation: &CorrelationPenalty,
    leg_count: usize,
) -> String {
    let mut parts = vec![format!(
        "{}-leg parlay with a {:.0}% adjusted win probability",
        leg_count, conf
    )];
    match edge {
        Some(report) if report.value_edge_pct > 0.0 => parts.push(format!(
            "the market implies {:.1}%, a {:+.1} point value edge",
            report.implied_probability_pct, report.value_edge_pct
        )),
        Some(report) => parts.push(format!(
            "the market implies {:.1}%, leaving no value at this price ({:+.1} points)",
            report.implied_probability_pct, report.value_edge_pct
        )),
        None => parts.push("no market price is available to measure value".to_string()),
    }
    if correlation.penalty_pts > 0.0 {
        parts.push(format!(
            "correlated legs cost {:.0} points ({} risk)",
            correlation.penalty_pts, correlation.tier
        ));
    }
    let mut analysis = parts.join("; ");
    analysis.push('.');
    analysis
}

/// Suggest replacements for legs materially below the slip average.
///
/// The candidate set comes from the external recommendation source; the
/// grader never searches for alternatives itself.
fn suggest_swaps(
    legs: &[Leg],
    alternatives: &[AlternativeLeg],
    config: &EngineConfig,
) -> Vec<SwapSuggestion> {
    if legs.is_empty() || alternatives.is_empty() {
        return Vec::new();
    }

    let average = legs.iter().map(|l| l.confidence).sum::<f64>() / legs.len() as f64;
    let mut suggestions = Vec::new();

    for (index, leg) in legs.iter().enumerate() {
        let gap = average - leg.confidence;
        if gap <= config.swap_gap_pts {
            continue;
        }

        let candidate = alternatives
            .iter()
            .filter(|alt| alt.leg.confidence > leg.confidence)
            .filter(|alt| legs.iter().all(|l| l.identity() != alt.leg.identity()))
            .max_by(|a, b| {
                a.flex_score
                    .partial_cmp(&b.flex_score)
                    .unwrap_or(Ordering::Equal)
            });

        if let Some(alt) = candidate {
            suggestions.push(SwapSuggestion {
                leg_index: index,
                replacement: alt.leg.clone(),
                reason: format!(
                    "{} sits {:.0} points below the slip average; {} rates higher (flex {:.0})",
                    leg.label(),
                    gap,
                    alt.leg.label(),
                    alt.flex_score
                ),
            });
        }
    }

    suggestions
}
