use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::board::Thresholds;

/// Pitcher strikeout prediction board
#[derive(Parser, Debug, Clone)]
#[command(name = "prediction-board", version, about)]
pub struct Config {
    /// Feed document path, relative to the feed base URL when one is set
    #[arg(long, env = "FEED_PATH", default_value = "predictions.json")]
    pub feed_path: String,

    /// Base URL the feed path is resolved against (e.g. https://example.com/board/).
    /// When absent the feed is read from the local filesystem.
    #[arg(long, env = "FEED_BASE_URL")]
    pub feed_base_url: Option<String>,

    /// Dashboard listen address
    #[arg(long, env = "DASHBOARD_ADDR", default_value = "0.0.0.0:8080")]
    pub dashboard_addr: String,

    /// Page auto-refresh interval in seconds (0 = disabled)
    #[arg(long, env = "REFRESH_INTERVAL_SECS", default_value = "0")]
    pub refresh_interval_secs: u64,

    /// Timeout for HTTP feed requests in seconds (no timeout when unset)
    #[arg(long, env = "REQUEST_TIMEOUT_SECS")]
    pub request_timeout_secs: Option<u64>,

    /// Render the board once to this file and exit instead of serving it
    #[arg(long, env = "RENDER_TO")]
    pub render_to: Option<PathBuf>,

    /// Probability at or above which a prediction is high confidence
    #[arg(long, env = "HIGH_UPPER", default_value = "75.0")]
    pub high_upper: f64,

    /// Probability at or below which a prediction is high confidence
    #[arg(long, env = "HIGH_LOWER", default_value = "25.0")]
    pub high_lower: f64,

    /// Lower bound of the medium band (probability must be >= this)
    #[arg(long, env = "MEDIUM_UPPER", default_value = "65.0")]
    pub medium_upper: f64,

    /// Upper bound of the medium band (probability must be <= this)
    #[arg(long, env = "MEDIUM_LOWER", default_value = "35.0")]
    pub medium_lower: f64,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.feed_path.trim().is_empty() {
            anyhow::bail!("feed_path must not be empty");
        }
        if let Some(base) = &self.feed_base_url {
            url::Url::parse(base)
                .map_err(|e| anyhow::anyhow!("feed_base_url is not a valid URL: {}", e))?;
        }
        for (name, value) in [
            ("high_upper", self.high_upper),
            ("high_lower", self.high_lower),
            ("medium_upper", self.medium_upper),
            ("medium_lower", self.medium_lower),
        ] {
            if !(0.0..=100.0).contains(&value) {
                anyhow::bail!("{} must be between 0.0 and 100.0", name);
            }
        }
        if self.high_lower > self.high_upper {
            anyhow::bail!("high_lower must not exceed high_upper");
        }
        if self.request_timeout_secs == Some(0) {
            anyhow::bail!("request_timeout_secs must be positive when set");
        }
        Ok(())
    }

    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            high_upper: self.high_upper,
            high_lower: self.high_lower,
            medium_upper: self.medium_upper,
            medium_lower: self.medium_lower,
        }
    }

    pub fn refresh_interval(&self) -> Option<Duration> {
        match self.refresh_interval_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        let mut argv = vec!["prediction-board"];
        argv.extend_from_slice(args);
        Config::try_parse_from(argv).expect("valid arguments")
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = parse(&[]);
        assert!(config.validate().is_ok());
        assert_eq!(config.feed_path, "predictions.json");
        assert!(config.refresh_interval().is_none());
        assert_eq!(config.thresholds(), Thresholds::default());
    }

    #[test]
    fn test_refresh_interval_enabled() {
        let config = parse(&["--refresh-interval-secs", "300"]);
        assert_eq!(config.refresh_interval(), Some(Duration::from_secs(300)));
    }

    #[test]
    fn test_rejects_out_of_range_threshold() {
        let config = parse(&["--high-upper", "120"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_inverted_high_band() {
        let config = parse(&["--high-upper", "20", "--high-lower", "30"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_base_url() {
        let config = parse(&["--feed-base-url", "not a url"]);
        assert!(config.validate().is_err());
    }
}
