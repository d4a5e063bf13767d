//! Subscriber store: the remote collection signups are inserted into

mod client;
mod error;
mod traits;

pub use client::{StoreClient, DEFAULT_COLLECTION};
pub use error::StoreError;
pub use traits::SubscriberStore;

#[cfg(test)]
pub use traits::MockSubscriberStore;
