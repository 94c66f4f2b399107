//! Types for the parlay evaluation engine

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Bet direction relative to the posted line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Over,
    Under,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Over => write!(f, "OVER"),
            Direction::Under => write!(f, "UNDER"),
        }
    }
}

/// Stat category of a player prop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatType {
    PassingYards,
    PassingTouchdowns,
    Completions,
    Interceptions,
    RushingYards,
    RushingAttempts,
    ReceivingYards,
    Receptions,
    ReceivingTouchdowns,
}

impl std::fmt::Display for StatType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatType::PassingYards => write!(f, "Passing Yards"),
            StatType::PassingTouchdowns => write!(f, "Passing TDs"),
            StatType::Completions => write!(f, "Completions"),
            StatType::Interceptions => write!(f, "Interceptions"),
            StatType::RushingYards => write!(f, "Rushing Yards"),
            StatType::RushingAttempts => write!(f, "Rushing Attempts"),
            StatType::ReceivingYards => write!(f, "Receiving Yards"),
            StatType::Receptions => write!(f, "Receptions"),
            StatType::ReceivingTouchdowns => write!(f, "Receiving TDs"),
        }
    }
}

/// One prop bet candidate
///
/// Confidence, projection, and cushion are produced by the upstream scoring
/// pipeline; the engine consumes them as opaque inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Leg {
    pub player: String,
    pub team: String,
    pub stat_type: StatType,
    pub line: f64,
    pub direction: Direction,
    /// Game identifier shared by both teams in the matchup (e.g. "KC@BUF-wk3")
    pub game_id: String,
    pub opponent: String,
    /// Win confidence from the upstream scoring pipeline (0-100)
    pub confidence: f64,
    pub projection: Option<f64>,
    /// Projection minus line, signed (negative = projection on the wrong side)
    pub cushion: Option<f64>,
}

impl Leg {
    /// Identity key; two legs with the same key are duplicates
    pub fn identity(&self) -> (&str, StatType, Direction) {
        (self.player.as_str(), self.stat_type, self.direction)
    }

    /// Short label used in warnings and suggestions
    pub fn label(&self) -> String {
        format!(
            "{} {} {} {}",
            self.player, self.stat_type, self.direction, self.line
        )
    }
}

/// An ordered, deduplicated collection of 1..=max legs
///
/// Construction validates the invariants; an existing `Parlay` is always
/// well-formed and the engine never mutates it.
#[derive(Debug, Clone, Serialize)]
pub struct Parlay {
    legs: Vec<Leg>,
}

impl Parlay {
    /// Build a parlay, rejecting empty/over-capacity leg sets and duplicates
    pub fn new(legs: Vec<Leg>, max_legs: usize) -> Result<Self, EngineError> {
        if legs.is_empty() {
            return Err(EngineError::EmptyParlay);
        }
        if legs.len() > max_legs {
            return Err(EngineError::TooManyLegs {
                count: legs.len(),
                max: max_legs,
            });
        }
        for i in 0..legs.len() {
            for j in (i + 1)..legs.len() {
                if legs[i].identity() == legs[j].identity() {
                    return Err(EngineError::DuplicateLeg(legs[i].label()));
                }
            }
        }
        Ok(Self { legs })
    }

    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    pub fn len(&self) -> usize {
        self.legs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }
}

/// Market price in American odds
///
/// The field is private so a quote can only exist with a valid price; the
/// conversions below can therefore never divide by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OddsQuote {
    american: i32,
}

impl OddsQuote {
    /// Validate an American-odds integer. Zero or |odds| < 100 is malformed.
    pub fn new(american: i32) -> Result<Self, EngineError> {
        if american.abs() < 100 {
            return Err(EngineError::MissingMarketData);
        }
        Ok(Self { american })
    }

    pub fn american(&self) -> i32 {
        self.american
    }

    /// Market-implied win probability as a percentage (0-100)
    pub fn implied_probability_pct(&self) -> f64 {
        let o = self.american as f64;
        if o > 0.0 {
            100.0 * 100.0 / (o + 100.0)
        } else {
            100.0 * -o / (-o + 100.0)
        }
    }

    /// Decimal odds: total payout per unit staked
    pub fn decimal_odds(&self) -> f64 {
        let o = self.american as f64;
        if o > 0.0 {
            1.0 + o / 100.0
        } else {
            1.0 + 100.0 / -o
        }
    }

    /// Net payout per unit staked (decimal odds minus the stake)
    pub fn net_payout(&self) -> f64 {
        self.decimal_odds() - 1.0
    }
}

/// A candidate replacement leg from the external recommendation source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlternativeLeg {
    pub leg: Leg,
    /// Flex/utility score reported by the recommendation source
    pub flex_score: f64,
}
