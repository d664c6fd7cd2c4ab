use async_trait::async_trait;
use reqwest::Client;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;
use url::Url;

use super::FeedError;

/// Where the feed document comes from.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch the raw feed body. Exactly one request per call, no retries.
    async fn fetch(&self) -> Result<Vec<u8>, FeedError>;

    /// Human-readable location for logging.
    fn describe(&self) -> String;
}

/// Feed read from the local filesystem.
pub struct FileFeed {
    path: PathBuf,
}

impl FileFeed {
    pub fn new(path: impl AsRef<Path>) -> Self {
        FileFeed {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl FeedSource for FileFeed {
    async fn fetch(&self) -> Result<Vec<u8>, FeedError> {
        debug!("Reading feed from {}", self.path.display());
        Ok(tokio::fs::read(&self.path).await?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Feed fetched with a single GET relative to a base URL.
pub struct HttpFeed {
    http: Client,
    url: Url,
}

impl HttpFeed {
    /// Resolve `path` against `base_url` the way a browser resolves a
    /// relative link: "predictions.json" against "https://host/board/"
    /// gives "https://host/board/predictions.json".
    pub fn new(base_url: &str, path: &str, timeout: Option<Duration>) -> Result<Self, FeedError> {
        let url = Url::parse(base_url)?.join(path)?;
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;
        Ok(HttpFeed { http, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl FeedSource for HttpFeed {
    async fn fetch(&self) -> Result<Vec<u8>, FeedError> {
        debug!("Fetching feed from {}", self.url);

        let resp = self.http.get(self.url.clone()).send().await?;

        if !resp.status().is_success() {
            return Err(FeedError::Status(resp.status()));
        }

        Ok(resp.bytes().await?.to_vec())
    }

    fn describe(&self) -> String {
        self.url().to_string()
    }
}
