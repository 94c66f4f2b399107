//! Error taxonomy for the parlay engine
//!
//! Every failure mode is a typed result the caller can branch on. Invalid
//! parlays are rejected before any evaluation runs; missing market data is
//! propagated as "edge unknown", never substituted with zero.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// A parlay must contain at least one leg.
    #[error("parlay has no legs")]
    EmptyParlay,

    /// Leg count exceeds the configured maximum.
    #[error("parlay has {count} legs, maximum is {max}")]
    TooManyLegs { count: usize, max: usize },

    /// Two legs share the same (player, stat type, direction) identity.
    #[error("duplicate leg in parlay: {0}")]
    DuplicateLeg(String),

    /// Odds absent, zero, or not a valid American price (|odds| < 100).
    #[error("market odds missing or malformed")]
    MissingMarketData,
}
