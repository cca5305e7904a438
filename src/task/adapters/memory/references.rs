//! In-memory reference lookup for tags, events, and hashtags.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{EventId, HashtagId, TagId},
    ports::{ReferenceLookupError, ReferenceLookupResult, TaskReferenceLookup},
};

/// Thread-safe in-memory registry of referenceable entities.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReferenceLookup {
    state: Arc<RwLock<ReferenceState>>,
}

#[derive(Debug, Default)]
struct ReferenceState {
    tags: HashSet<TagId>,
    events: HashSet<EventId>,
    hashtags: HashSet<HashtagId>,
}

impl InMemoryReferenceLookup {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a tag so tasks may refer to it.
    pub fn add_tag(&self, id: TagId) {
        self.with_state(|state| {
            state.tags.insert(id);
        });
    }

    /// Registers an event so tasks may refer to it.
    pub fn add_event(&self, id: EventId) {
        self.with_state(|state| {
            state.events.insert(id);
        });
    }

    /// Registers a hashtag so tasks may refer to it.
    pub fn add_hashtag(&self, id: HashtagId) {
        self.with_state(|state| {
            state.hashtags.insert(id);
        });
    }

    fn with_state(&self, apply: impl FnOnce(&mut ReferenceState)) {
        // A poisoned lock still holds consistent sets; recover and continue.
        let mut state = self
            .state
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        apply(&mut state);
    }

    fn read<T>(&self, query: impl FnOnce(&ReferenceState) -> T) -> ReferenceLookupResult<T> {
        let state = self.state.read().map_err(|err| {
            ReferenceLookupError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(query(&state))
    }
}

#[async_trait]
impl TaskReferenceLookup for InMemoryReferenceLookup {
    async fn tag_exists(&self, id: TagId) -> ReferenceLookupResult<bool> {
        self.read(|state| state.tags.contains(&id))
    }

    async fn event_exists(&self, id: EventId) -> ReferenceLookupResult<bool> {
        self.read(|state| state.events.contains(&id))
    }

    async fn existing_hashtags(&self, ids: &[HashtagId]) -> ReferenceLookupResult<Vec<HashtagId>> {
        self.read(|state| {
            ids.iter()
                .copied()
                .filter(|id| state.hashtags.contains(id))
                .collect()
        })
    }
}
