use std::fmt::Debug;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Identifier assigned by the store to an appended record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("{0}")]
    Rejected(String),
    #[error("document store unavailable")]
    Unavailable,
}

impl StoreError {
    pub fn remote_message(&self) -> Option<&str> {
        match self {
            Self::Rejected(message) if !message.trim().is_empty() => Some(message),
            Self::Rejected(_) | Self::Unavailable => None,
        }
    }
}

/// Append-only collection store.
#[async_trait]
pub trait DocumentStore: Debug + Send + Sync {
    async fn append(
        &self,
        collection: &str,
        record: serde_json::Value,
    ) -> Result<DocumentId, StoreError>;
}
