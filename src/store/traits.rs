//! Trait abstraction for the store client to enable mocking in tests

use super::StoreError;
use crate::state::SubscriberRecord;
use async_trait::async_trait;

/// Insert-only view of the remote data store
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubscriberStore: Send + Sync {
    /// Insert one record into `collection`
    async fn insert(&self, collection: &str, record: &SubscriberRecord) -> Result<(), StoreError>;
}
