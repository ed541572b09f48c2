//! Scenario multipliers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Macro-assumption scenario applied uniformly to a forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    Pessimistic,
    Base,
    Optimistic,
}

impl Scenario {
    /// Fixed scalar multiplier for this scenario.
    pub fn factor(&self) -> f64 {
        match self {
            Scenario::Pessimistic => 0.85,
            Scenario::Base => 1.0,
            Scenario::Optimistic => 1.15,
        }
    }

    /// All defined scenarios.
    pub fn all() -> [Scenario; 3] {
        [Scenario::Pessimistic, Scenario::Base, Scenario::Optimistic]
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Scenario::Pessimistic => "pessimistic",
            Scenario::Base => "base",
            Scenario::Optimistic => "optimistic",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Scenario {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pessimistic" => Ok(Scenario::Pessimistic),
            "base" => Ok(Scenario::Base),
            "optimistic" => Ok(Scenario::Optimistic),
            other => Err(format!(
                "Unknown scenario '{}'. Use 'pessimistic', 'base', or 'optimistic'",
                other
            )),
        }
    }
}
