//! `PostgreSQL` lookup for tags, events, and hashtags.

use super::{
    TaskPgPool,
    schema::{events, hashtags, tags},
};
use crate::task::{
    domain::{EventId, HashtagId, TagId},
    ports::{ReferenceLookupError, ReferenceLookupResult, TaskReferenceLookup},
};
use async_trait::async_trait;
use diesel::dsl::exists;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use std::collections::HashSet;
use uuid::Uuid;

/// `PostgreSQL`-backed reference lookup.
#[derive(Debug, Clone)]
pub struct PostgresReferenceLookup {
    pool: TaskPgPool,
}

impl PostgresReferenceLookup {
    /// Creates a lookup from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> ReferenceLookupResult<T>
    where
        F: FnOnce(&mut PgConnection) -> QueryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(ReferenceLookupError::persistence)?;
            f(&mut connection).map_err(ReferenceLookupError::persistence)
        })
        .await
        .map_err(ReferenceLookupError::persistence)?
    }
}

#[async_trait]
impl TaskReferenceLookup for PostgresReferenceLookup {
    async fn tag_exists(&self, id: TagId) -> ReferenceLookupResult<bool> {
        self.run_blocking(move |connection| {
            diesel::select(exists(tags::table.find(id.into_inner()))).get_result(connection)
        })
        .await
    }

    async fn event_exists(&self, id: EventId) -> ReferenceLookupResult<bool> {
        self.run_blocking(move |connection| {
            diesel::select(exists(events::table.find(id.into_inner()))).get_result(connection)
        })
        .await
    }

    async fn existing_hashtags(&self, ids: &[HashtagId]) -> ReferenceLookupResult<Vec<HashtagId>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let requested: Vec<Uuid> = ids.iter().map(|id| id.into_inner()).collect();
        let lookup = requested.clone();
        let found: HashSet<Uuid> = self
            .run_blocking(move |connection| {
                hashtags::table
                    .filter(hashtags::id.eq_any(lookup))
                    .select(hashtags::id)
                    .load::<Uuid>(connection)
            })
            .await?
            .into_iter()
            .collect();

        Ok(requested
            .into_iter()
            .filter(|id| found.contains(id))
            .map(HashtagId::from_uuid)
            .collect())
    }
}
