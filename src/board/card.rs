use serde::Serialize;

use super::classify::{ConfidenceTier, Direction, Thresholds};
use super::format;
use crate::feed::PredictionRecord;

/// A prediction record with its classification and display strings attached.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionCard {
    pub pitcher_name: String,
    pub opponent: String,
    pub line: String,
    pub expected_so: String,
    pub probability: String,
    pub recommendation: String,
    pub direction: Direction,
    pub confidence: ConfidenceTier,
    pub visible: bool,
}

impl PredictionCard {
    pub fn from_record(record: &PredictionRecord, thresholds: &Thresholds) -> Self {
        let recommendation = record.recommendation.clone().unwrap_or_default();
        let probability = record.probability.as_ref().and_then(|p| p.as_number());

        PredictionCard {
            pitcher_name: record.pitcher_name.clone().unwrap_or_default(),
            opponent: record.opponent.clone().unwrap_or_default(),
            line: format::one_decimal(record.line.as_ref()),
            expected_so: format::one_decimal(record.expected_so.as_ref()),
            probability: format::probability(record.probability.as_ref()),
            direction: Direction::from_recommendation(&recommendation),
            confidence: thresholds.classify(probability),
            recommendation,
            visible: true,
        }
    }
}
