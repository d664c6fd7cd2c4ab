pub mod models;
pub mod source;

pub use models::{FieldValue, PredictionFeed, PredictionRecord, StatsSummary};
pub use source::{FeedSource, FileFeed, HttpFeed};

use reqwest::StatusCode;
use tracing::{error, info};

/// Shown in place of the cards whenever the feed cannot be loaded.
pub const FEED_ERROR_MESSAGE: &str = "Error loading predictions. Please try again later.";

/// The feed was unavailable or malformed.
///
/// The variants exist for logging only; every one of them is shown to the
/// reader as [`FEED_ERROR_MESSAGE`].
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("failed to read feed: {0}")]
    Io(#[from] std::io::Error),
    #[error("feed request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("feed server returned {0}")]
    Status(StatusCode),
    #[error("invalid feed URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("malformed feed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Fetch and parse the feed once.
///
/// Failures are logged here; callers only decide how to present them.
pub async fn load_predictions(source: &dyn FeedSource) -> Result<PredictionFeed, FeedError> {
    let result = fetch_and_parse(source).await;
    match &result {
        Ok(feed) => info!(
            "Loaded {} predictions from {} (timestamp: {})",
            feed.predictions.as_ref().map_or(0, Vec::len),
            source.describe(),
            feed.timestamp
        ),
        Err(e) => error!("Error loading predictions from {}: {}", source.describe(), e),
    }
    result
}

async fn fetch_and_parse(source: &dyn FeedSource) -> Result<PredictionFeed, FeedError> {
    let body = source.fetch().await?;
    Ok(serde_json::from_slice(&body)?)
}


#[cfg(test)]
mod tests {
    use super::testing::StaticFeed;
    use super::*;

    #[tokio::test]
    async fn test_load_valid_feed() {
        let source = StaticFeed::json(
            r#"{ "timestamp": "t", "stats": { "total_games": 3 },
                 "predictions": [ { "pitcher_name": "A", "recommendation": "OVER 5.5" } ] }"#,
        );
        let feed = load_predictions(&source).await.unwrap();
        assert_eq!(feed.predictions.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_non_json_body_is_malformed() {
        let source = StaticFeed::json("<html>404</html>");
        let err = load_predictions(&source).await.unwrap_err();
        assert!(matches!(err, FeedError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_missing_timestamp_is_malformed() {
        let source = StaticFeed::json(r#"{ "stats": {}, "predictions": [] }"#);
        let err = load_predictions(&source).await.unwrap_err();
        assert!(matches!(err, FeedError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_unavailable_source_is_io_error() {
        let err = load_predictions(&StaticFeed::unavailable()).await.unwrap_err();
        assert!(matches!(err, FeedError::Io(_)));
    }
}
