//! Store error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no subscriber store endpoint is configured")]
    NotConfigured,
    #[error("invalid store endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
    #[error("request to subscriber store failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("subscriber store rejected the insert ({status}): {message}")]
    Rejected { status: u16, message: String },
}
