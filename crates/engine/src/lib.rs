//! Parlay Risk & Sizing Engine
//!
//! Pure, synchronous evaluation core behind an NFL prop-recommendation app.
//! Provides:
//! - Combined parlay win-probability with a per-leg stacking discount
//! - Pairwise correlation detection (same game / team / player) with tiers
//! - Value edge against the sportsbook's implied probability
//! - Letter grade, recommendation, risk factors, and swap suggestions
//! - Capped fractional-Kelly stake sizing
//!
//! Leg confidences, market odds, and swap candidates come from external
//! collaborators; the engine performs no I/O and holds no state.

pub mod confidence;
pub mod config;
pub mod correlation;
pub mod edge;
pub mod engine;
pub mod error;
pub mod grade;
pub mod sizing;
pub mod types;

// Re-exports for convenience
pub use confidence::combine_confidence;
pub use config::EngineConfig;
pub use correlation::{analyze_correlation, tier_for_penalty, CorrelationPenalty, RiskTier};
pub use edge::{calculate_edge, edge_from_american, EdgeReport};
pub use engine::{ParlayEngine, ParlayEvaluation};
pub use error::EngineError;
pub use grade::{grade_parlay, Grade, GradeResult, Recommendation, SwapSuggestion};
pub use sizing::{recommend_stake, StakeRecommendation};
pub use types::{AlternativeLeg, Direction, Leg, OddsQuote, Parlay, StatType};
