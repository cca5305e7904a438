//! Repository port for task persistence and lookup.

use crate::task::domain::{EventId, TagId, Task, TaskId, TaskItem, TaskItemId, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task together with its items and hashtag links.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID already
    /// exists.
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Writes the whole aggregate and deletes the detached items as one
    /// atomic change.
    ///
    /// Items in `task` are inserted or overwritten; items listed in
    /// `removed_items` are deleted. Either everything commits or nothing
    /// does.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn save(&self, task: &Task, removed_items: &[TaskItemId]) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns the items currently attached to a task, in display order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn find_items(&self, id: TaskId) -> TaskRepositoryResult<Vec<TaskItem>>;

    /// Returns every task owned by the user.
    async fn find_by_owner(&self, owner: UserId) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns the user's tasks attached to the event.
    async fn find_by_owner_and_event(
        &self,
        owner: UserId,
        event: EventId,
    ) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns every task filed under any of the tags.
    async fn find_by_tags(&self, tags: &[TagId]) -> TaskRepositoryResult<Vec<Task>>;

    /// Deletes a task and every item it owns.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
