//! Over/under classification and confidence tiers.
//!
//! These are the only place the thresholds are evaluated; the rendered
//! `data-type` / `data-confidence` markers and the filter both read the
//! values produced here.

use serde::Serialize;

/// Which side of the line the model recommends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Over,
    Under,
}

impl Direction {
    /// "UNDER" anywhere in the recommendation (case-sensitive) means under;
    /// anything else, including a missing recommendation, is over.
    pub fn from_recommendation(recommendation: &str) -> Self {
        if recommendation.contains("UNDER") {
            Direction::Under
        } else {
            Direction::Over
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Over => "over",
            Direction::Under => "under",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

impl ConfidenceTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceTier::High => "high",
            ConfidenceTier::Medium => "medium",
            ConfidenceTier::Low => "low",
        }
    }

    /// Badge text
    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceTier::High => "High",
            ConfidenceTier::Medium => "Medium",
            ConfidenceTier::Low => "Low",
        }
    }
}

/// Probability cut-offs (0–100 scale) for the confidence tiers.
///
/// With the defaults the medium band (`>= 65 && <= 35`) is empty, so every
/// prediction is either high or low.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub high_upper: f64,
    pub high_lower: f64,
    pub medium_upper: f64,
    pub medium_lower: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds {
            high_upper: 75.0,
            high_lower: 25.0,
            medium_upper: 65.0,
            medium_lower: 35.0,
        }
    }
}

impl Thresholds {
    /// Classify a probability. A missing or unparseable probability is low.
    pub fn classify(&self, probability: Option<f64>) -> ConfidenceTier {
        let p = match probability {
            Some(p) if !p.is_nan() => p,
            _ => return ConfidenceTier::Low,
        };

        if p >= self.high_upper || p <= self.high_lower {
            ConfidenceTier::High
        } else if p >= self.medium_upper && p <= self.medium_lower {
            ConfidenceTier::Medium
        } else {
            ConfidenceTier::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_under_substring() {
        assert_eq!(Direction::from_recommendation("UNDER 4.5"), Direction::Under);
        assert_eq!(
            Direction::from_recommendation("Strong UNDER play"),
            Direction::Under
        );
    }

    #[test]
    fn test_direction_defaults_to_over() {
        assert_eq!(Direction::from_recommendation("OVER 5.5"), Direction::Over);
        assert_eq!(Direction::from_recommendation("PASS"), Direction::Over);
        assert_eq!(Direction::from_recommendation(""), Direction::Over);
    }

    #[test]
    fn test_direction_is_case_sensitive() {
        assert_eq!(Direction::from_recommendation("under 4.5"), Direction::Over);
    }

    #[test]
    fn test_high_at_both_extremes() {
        let t = Thresholds::default();
        assert_eq!(t.classify(Some(80.0)), ConfidenceTier::High);
        assert_eq!(t.classify(Some(20.0)), ConfidenceTier::High);
        assert_eq!(t.classify(Some(75.0)), ConfidenceTier::High);
        assert_eq!(t.classify(Some(25.0)), ConfidenceTier::High);
    }

    #[test]
    fn test_middle_band_is_low_with_defaults() {
        let t = Thresholds::default();
        for p in [25.1, 35.0, 50.0, 65.0, 70.0, 74.9] {
            assert_eq!(t.classify(Some(p)), ConfidenceTier::Low, "p = {}", p);
        }
    }

    #[test]
    fn test_missing_probability_is_low() {
        let t = Thresholds::default();
        assert_eq!(t.classify(None), ConfidenceTier::Low);
        assert_eq!(t.classify(Some(f64::NAN)), ConfidenceTier::Low);
    }

    #[test]
    fn test_medium_reachable_with_overlapping_band() {
        let t = Thresholds {
            medium_upper: 35.0,
            medium_lower: 65.0,
            ..Thresholds::default()
        };
        assert_eq!(t.classify(Some(50.0)), ConfidenceTier::Medium);
        assert_eq!(t.classify(Some(70.0)), ConfidenceTier::Low);
        assert_eq!(t.classify(Some(90.0)), ConfidenceTier::High);
    }

    #[test]
    fn test_serialized_names_match_markers() {
        for d in [Direction::Over, Direction::Under] {
            assert_eq!(serde_json::to_value(d).unwrap(), d.as_str());
        }
        for c in [ConfidenceTier::High, ConfidenceTier::Medium, ConfidenceTier::Low] {
            assert_eq!(serde_json::to_value(c).unwrap(), c.as_str());
        }
    }

    #[test]
    fn test_classify_is_pure() {
        let t = Thresholds::default();
        for p in [0.0, 24.0, 50.0, 76.0, 100.0] {
            assert_eq!(t.classify(Some(p)), t.classify(Some(p)));
        }
    }
}
