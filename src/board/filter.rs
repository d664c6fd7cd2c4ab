use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use super::card::PredictionCard;
use super::classify::{ConfidenceTier, Direction};

/// View filter selected with the buttons above the cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    High,
    Over,
    Under,
}

impl Filter {
    /// Button order on the page.
    pub const ALL: [Filter; 4] = [Filter::All, Filter::High, Filter::Over, Filter::Under];

    pub fn matches(&self, card: &PredictionCard) -> bool {
        match self {
            Filter::All => true,
            Filter::High => card.confidence == ConfidenceTier::High,
            Filter::Over => card.direction == Direction::Over,
            Filter::Under => card.direction == Direction::Under,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::High => "high",
            Filter::Over => "over",
            Filter::Under => "under",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All Predictions",
            Filter::High => "High Confidence",
            Filter::Over => "Over",
            Filter::Under => "Under",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Filter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Filter::All),
            "high" => Ok(Filter::High),
            "over" => Ok(Filter::Over),
            "under" => Ok(Filter::Under),
            other => anyhow::bail!("unknown filter '{}'", other),
        }
    }
}

// Query strings go through `FromStr` so `?filter=High` is accepted like "High".parse().
impl<'de> Deserialize<'de> for Filter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
