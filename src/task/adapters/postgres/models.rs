//! Diesel row models for task persistence.

use super::schema::{task_hashtags, task_items, tasks};
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Internal task identifier.
    pub id: uuid::Uuid,
    /// Owning user identifier.
    pub owner_id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Lifecycle status name.
    pub status: String,
    /// Optional deadline.
    pub deadline: Option<NaiveDate>,
    /// Optional tag reference.
    pub tag_id: Option<uuid::Uuid>,
    /// Optional event reference.
    pub event_id: Option<uuid::Uuid>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Internal task identifier.
    pub id: uuid::Uuid,
    /// Owning user identifier.
    pub owner_id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Lifecycle status name.
    pub status: String,
    /// Optional deadline.
    pub deadline: Option<NaiveDate>,
    /// Optional tag reference.
    pub tag_id: Option<uuid::Uuid>,
    /// Optional event reference.
    pub event_id: Option<uuid::Uuid>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Mutable task columns written on save.
///
/// `None` clears the column rather than leaving it untouched.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct TaskChangeset {
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Lifecycle status name.
    pub status: String,
    /// Optional deadline.
    pub deadline: Option<NaiveDate>,
    /// Optional tag reference.
    pub tag_id: Option<uuid::Uuid>,
    /// Optional event reference.
    pub event_id: Option<uuid::Uuid>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Row model for task items, used for both reads and writes.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = task_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskItemRow {
    /// Item identifier.
    pub id: uuid::Uuid,
    /// Owning task identifier.
    pub task_id: uuid::Uuid,
    /// Item title.
    pub title: String,
    /// Completion flag.
    pub completed: bool,
    /// Zero-based display position.
    pub position: i32,
}

/// Row model for task-to-hashtag links.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = task_hashtags)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskHashtagRow {
    /// Task identifier.
    pub task_id: uuid::Uuid,
    /// Hashtag identifier.
    pub hashtag_id: uuid::Uuid,
    /// Zero-based attachment order.
    pub position: i32,
}
