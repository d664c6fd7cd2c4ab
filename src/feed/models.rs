use serde::{Deserialize, Serialize};

/// The feed document published alongside the board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionFeed {
    pub stats: StatsSummary,
    pub timestamp: String,
    /// Absent or null is treated the same as an empty list
    #[serde(default)]
    pub predictions: Option<Vec<PredictionRecord>>,
}

/// Summary numbers shown above the cards
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatsSummary {
    #[serde(default)]
    pub total_games: Option<f64>,
    #[serde(default)]
    pub high_confidence: Option<f64>,
    /// Fraction of winning picks over the last 7 days (0.0–1.0)
    #[serde(default)]
    pub model_win_rate_7d: Option<f64>,
    /// Fraction of winning picks over the last 30 days (0.0–1.0)
    #[serde(default)]
    pub model_win_rate_30d: Option<f64>,
}

/// One strikeout prop prediction.
///
/// Every field is optional so a single malformed record only blanks out its
/// own cells instead of failing the whole feed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictionRecord {
    #[serde(default)]
    pub pitcher_name: Option<String>,
    #[serde(default)]
    pub opponent: Option<String>,
    /// Strikeout line, e.g. 5.5
    #[serde(default)]
    pub line: Option<FieldValue>,
    /// Model's expected strikeouts
    #[serde(default)]
    pub expected_so: Option<FieldValue>,
    /// Probability of the over, 0–100
    #[serde(default)]
    pub probability: Option<FieldValue>,
    /// e.g. "OVER 5.5" or "UNDER 4.5"
    #[serde(default)]
    pub recommendation: Option<String>,
}

/// A feed value that may be published either as a number or as free text ("N/A").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Numeric reading of the value. Text is read by its leading numeric
    /// prefix, so "72.5%" yields 72.5 and "N/A" yields `None`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(s) => parse_leading_float(s),
        }
    }
}

/// Parse the longest decimal prefix of `s` after leading whitespace.
fn parse_leading_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        let sign = if bytes.first() == Some(&b'-') { -1.0 } else { 1.0 };
        return Some(sign * f64::INFINITY);
    }

    let mut seen_digit = false;
    let mut seen_dot = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }
    if !seen_digit {
        return None;
    }

    // Optional exponent, only consumed when it has at least one digit
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits = bytes[exp_end..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_full_feed() {
        let raw = r#"{
            "timestamp": "2024-06-01 10:00 ET",
            "stats": { "total_games": 12, "high_confidence": 4,
                       "model_win_rate_7d": 0.62, "model_win_rate_30d": 0.58 },
            "predictions": [
                { "pitcher_name": "Gerrit Cole", "opponent": "BOS", "line": 6.5,
                  "expected_so": 7.2, "probability": 78.4, "recommendation": "OVER 6.5" },
                { "pitcher_name": "Chris Sale", "opponent": "NYY", "line": "N/A",
                  "expected_so": "5.1", "probability": "22", "recommendation": "UNDER 5.5" }
            ]
        }"#;
        let feed: PredictionFeed = serde_json::from_str(raw).unwrap();
        assert_eq!(feed.timestamp, "2024-06-01 10:00 ET");
        assert_eq!(feed.stats.total_games, Some(12.0));
        let preds = feed.predictions.unwrap();
        assert_eq!(preds.len(), 2);
        assert_eq!(preds[0].line, Some(FieldValue::Number(6.5)));
        assert_eq!(preds[1].line, Some(FieldValue::Text("N/A".into())));
        assert_eq!(preds[1].probability, Some(FieldValue::Text("22".into())));
    }

    #[test]
    fn test_missing_predictions_is_none() {
        let raw = r#"{ "timestamp": "t", "stats": {} }"#;
        let feed: PredictionFeed = serde_json::from_str(raw).unwrap();
        assert!(feed.predictions.is_none());
        assert!(feed.stats.model_win_rate_7d.is_none());
    }

    #[test]
    fn test_missing_stats_is_rejected() {
        let raw = r#"{ "timestamp": "t", "predictions": [] }"#;
        assert!(serde_json::from_str::<PredictionFeed>(raw).is_err());
    }

    #[test]
    fn test_sparse_record_parses() {
        let raw = r#"{ "pitcher_name": "Zack Wheeler" }"#;
        let rec: PredictionRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(rec.pitcher_name.as_deref(), Some("Zack Wheeler"));
        assert!(rec.recommendation.is_none());
        assert!(rec.probability.is_none());
    }

    #[test]
    fn test_as_number_from_text() {
        assert_relative_eq!(FieldValue::Text("72.5".into()).as_number().unwrap(), 72.5);
        assert_relative_eq!(FieldValue::Text(" 72.5%".into()).as_number().unwrap(), 72.5);
        assert_relative_eq!(FieldValue::Text("-3".into()).as_number().unwrap(), -3.0);
        assert_relative_eq!(FieldValue::Text(".5".into()).as_number().unwrap(), 0.5);
        assert_relative_eq!(FieldValue::Text("1e2x".into()).as_number().unwrap(), 100.0);
        assert_relative_eq!(FieldValue::Text("7e".into()).as_number().unwrap(), 7.0);
    }

    #[test]
    fn test_as_number_unparseable() {
        assert!(FieldValue::Text("N/A".into()).as_number().is_none());
        assert!(FieldValue::Text("".into()).as_number().is_none());
        assert!(FieldValue::Text("-".into()).as_number().is_none());
        assert!(FieldValue::Text(".".into()).as_number().is_none());
    }
}
