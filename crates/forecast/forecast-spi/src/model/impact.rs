//! Qualitative impact-link attributes and their fixed numeric mappings.
//!
//! Magnitudes, directions, and ramp weights are behavioral constants of the
//! effect model. Unknown or missing text always maps to a zero effect.

use serde::{Deserialize, Serialize};

/// Weights for the three-year onset ramp of an event effect, applied to the
/// years `[start, start + 1, start + 2]`.
pub const RAMP_WEIGHTS: [f64; 3] = [0.3, 0.65, 1.0];

/// Qualitative effect magnitude of an impact link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Magnitude {
    High,
    Medium,
    Low,
    Negligible,
}

impl Magnitude {
    /// Parse the `impact_magnitude` column value. Unknown text yields `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Some(Magnitude::High),
            "medium" => Some(Magnitude::Medium),
            "low" => Some(Magnitude::Low),
            "negligible" => Some(Magnitude::Negligible),
            _ => None,
        }
    }

    /// Fixed effect size for this magnitude.
    pub fn effect_size(&self) -> f64 {
        match self {
            Magnitude::High => 0.15,
            Magnitude::Medium => 0.08,
            Magnitude::Low => 0.03,
            Magnitude::Negligible => 0.01,
        }
    }
}

/// Qualitative effect direction of an impact link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Increase,
    Decrease,
    Stabilize,
    Mixed,
}

impl Direction {
    /// Parse the `impact_direction` column value. Unknown text yields `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "increase" => Some(Direction::Increase),
            "decrease" => Some(Direction::Decrease),
            "stabilize" => Some(Direction::Stabilize),
            "mixed" => Some(Direction::Mixed),
            _ => None,
        }
    }

    /// Sign applied to the effect size.
    pub fn sign(&self) -> f64 {
        match self {
            Direction::Increase => 1.0,
            Direction::Decrease => -1.0,
            Direction::Stabilize | Direction::Mixed => 0.0,
        }
    }
}

/// Signed effect of one link: magnitude effect size times direction sign,
/// with unrecognized or missing values defaulting to zero.
pub fn link_effect(magnitude: Option<&str>, direction: Option<&str>) -> f64 {
    let size = magnitude
        .and_then(Magnitude::parse)
        .map(|m| m.effect_size())
        .unwrap_or(0.0);
    let sign = direction
        .and_then(Direction::parse)
        .map(|d| d.sign())
        .unwrap_or(0.0);
    size * sign
}
