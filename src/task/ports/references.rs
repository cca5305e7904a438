//! Lookup port for entities a task refers to but does not own.

use crate::task::domain::{EventId, HashtagId, TagId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for reference lookups.
pub type ReferenceLookupResult<T> = Result<T, ReferenceLookupError>;

/// Resolves tags, events, and hashtags by identifier.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskReferenceLookup: Send + Sync {
    /// Returns whether the tag exists.
    async fn tag_exists(&self, id: TagId) -> ReferenceLookupResult<bool>;

    /// Returns whether the event exists.
    async fn event_exists(&self, id: EventId) -> ReferenceLookupResult<bool>;

    /// Returns the subset of `ids` that exist, preserving request order.
    async fn existing_hashtags(&self, ids: &[HashtagId]) -> ReferenceLookupResult<Vec<HashtagId>>;
}

/// Errors returned by reference lookup implementations.
#[derive(Debug, Clone, Error)]
pub enum ReferenceLookupError {
    /// Persistence-layer failure.
    #[error("reference lookup failed: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ReferenceLookupError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
