//! Core value types for constraints.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Constraint strength.
///
/// A strength is a real number clipped to `[0, REQUIRED]`. Required
/// constraints must hold exactly; weaker ones are satisfied as well as
/// possible, with violations weighted by their strength.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "StrengthRepr", into = "StrengthRepr")]
pub struct Strength(f64);

impl Strength {
    pub const REQUIRED: Strength = Strength(1_001_001_000.0);
    pub const STRONG: Strength = Strength(1_000_000.0);
    pub const MEDIUM: Strength = Strength(1_000.0);
    pub const WEAK: Strength = Strength(1.0);

    /// Create a custom strength, clipped to the valid range.
    pub fn new(value: f64) -> Self {
        Self(clip(value))
    }

    /// Compose a strength from per-level multipliers and a weight.
    ///
    /// Each level is clamped to `[0, 1000]` before it is scaled, so a
    /// strong component of 1 always outweighs any amount of medium.
    pub fn from_levels(strong: f64, medium: f64, weak: f64, weight: f64) -> Self {
        let mut value = 0.0;
        value += strong.clamp(0.0, 1000.0) * weight * 1_000_000.0;
        value += medium.clamp(0.0, 1000.0) * weight * 1_000.0;
        value += weak.clamp(0.0, 1000.0) * weight;
        Self::new(value)
    }

    /// The raw strength value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Check if this is a required strength.
    pub fn is_required(self) -> bool {
        self.0 >= Self::REQUIRED.0
    }

    /// The level name, if this strength is exactly one of the named levels.
    pub fn name(self) -> Option<&'static str> {
        match self {
            s if s == Self::REQUIRED => Some("required"),
            s if s == Self::STRONG => Some("strong"),
            s if s == Self::MEDIUM => Some("medium"),
            s if s == Self::WEAK => Some("weak"),
            _ => None,
        }
    }
}

impl Default for Strength {
    fn default() -> Self {
        Self::REQUIRED
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.0),
        }
    }
}

impl FromStr for Strength {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "required" => Ok(Self::REQUIRED),
            "strong" => Ok(Self::STRONG),
            "medium" => Ok(Self::MEDIUM),
            "weak" => Ok(Self::WEAK),
            other => other
                .parse::<f64>()
                .map(Self::new)
                .map_err(|_| format!("unknown strength: {}", s)),
        }
    }
}

impl From<f64> for Strength {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

/// Clip a raw strength value to `[0, REQUIRED]`.
pub fn clip(value: f64) -> f64 {
    value.min(Strength::REQUIRED.0).max(0.0)
}

/// Serialized form of a strength: a level name or a number.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum StrengthRepr {
    Named(String),
    Value(f64),
}

impl TryFrom<StrengthRepr> for Strength {
    type Error = String;

    fn try_from(repr: StrengthRepr) -> Result<Self, Self::Error> {
        match repr {
            StrengthRepr::Named(name) => name.parse(),
            StrengthRepr::Value(value) if value.is_nan() => Err("strength is NaN".to_string()),
            StrengthRepr::Value(value) => Ok(Self::new(value)),
        }
    }
}

impl From<Strength> for StrengthRepr {
    fn from(strength: Strength) -> Self {
        match strength.name() {
            Some(name) => StrengthRepr::Named(name.to_string()),
            None => StrengthRepr::Value(strength.0),
        }
    }
}

/// The relation of a constraint `expression <relation> 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    LessEq,
    GreaterEq,
    Eq,
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relation::LessEq => f.write_str("<="),
            Relation::GreaterEq => f.write_str(">="),
            Relation::Eq => f.write_str("=="),
        }
    }
}
