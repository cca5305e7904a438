//! `PostgreSQL` adapters for task persistence and reference lookup.

mod models;
mod references;
mod repository;
mod schema;

pub use references::PostgresReferenceLookup;
pub use repository::PostgresTaskRepository;

use crate::config::DatabaseConfig;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use std::time::Duration;

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// Builds a connection pool from database settings.
///
/// # Errors
///
/// Returns [`PoolError`] when the pool cannot establish its initial
/// connections within the configured timeout.
pub fn build_pool(config: &DatabaseConfig) -> Result<TaskPgPool, PoolError> {
    let manager = ConnectionManager::<PgConnection>::new(config.url.as_str());
    Pool::builder()
        .max_size(config.max_connections)
        .connection_timeout(Duration::from_secs(config.connection_timeout_secs))
        .build(manager)
}
