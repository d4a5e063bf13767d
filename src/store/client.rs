//! HTTP client for the subscriber store
//!
//! Talks to a PostgREST-style endpoint (`{base}/rest/v1/{collection}`), which
//! is what hosted Postgres services expose for table inserts.

use super::{StoreError, SubscriberStore};
use crate::config::WaitlistConfig;
use crate::state::SubscriberRecord;
use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

/// Collection signups are inserted into unless configured otherwise
pub const DEFAULT_COLLECTION: &str = "subscribers";

/// Path prefix of the REST interface under the store's base URL
const REST_PREFIX: &str = "rest/v1/";

/// Client for inserting rows into the remote store
pub struct StoreClient {
    http: reqwest::Client,
    /// Base URL of the store, always ending in `/`
    base_url: Option<Url>,
    /// Anonymous API key, sent both as `apikey` and as a bearer token
    api_key: Option<String>,
}

/// Error body returned by the store on rejected requests
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl StoreClient {
    /// Create a client; `None` for `store_url` yields a client whose inserts
    /// always fail with [`StoreError::NotConfigured`].
    pub fn new(store_url: Option<&str>, api_key: Option<String>) -> Result<Self, StoreError> {
        let base_url = store_url.map(parse_base_url).transpose()?;
        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
            api_key,
        })
    }

    pub fn from_config(config: &WaitlistConfig) -> Result<Self, StoreError> {
        Self::new(config.store_url.as_deref(), config.api_key.clone())
    }

    /// A client with no endpoint
    pub fn unconfigured() -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: None,
            api_key: None,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.base_url.is_some()
    }

    fn collection_url(&self, collection: &str) -> Result<Url, StoreError> {
        let base = self.base_url.as_ref().ok_or(StoreError::NotConfigured)?;
        Ok(base.join(REST_PREFIX)?.join(collection)?)
    }
}

#[async_trait]
impl SubscriberStore for StoreClient {
    async fn insert(&self, collection: &str, record: &SubscriberRecord) -> Result<(), StoreError> {
        let url = self.collection_url(collection)?;
        tracing::debug!("Inserting into {url}");

        let mut request = self
            .http
            .post(url)
            .header("Prefer", "return=minimal")
            .json(&[record]);
        if let Some(key) = &self.api_key {
            request = request.header("apikey", key).bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(StoreError::Rejected {
            status: status.as_u16(),
            message: rejection_message(&body),
        })
    }
}

fn parse_base_url(raw: &str) -> Result<Url, StoreError> {
    let mut url = Url::parse(raw)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Pull a readable message out of an error response body
fn rejection_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.message,
        Err(_) => body.trim().to_string(),
    }
}
