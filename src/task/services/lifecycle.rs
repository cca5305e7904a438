//! Service layer for task creation, lookup, update, and deletion.

use super::SaveTaskRequest;
use crate::task::{
    domain::{
        EventId, HashtagId, NewTaskItem, StatusChange, TagId, Task, TaskDomainError, TaskFields,
        TaskId, TaskItem, TaskStatus, TaskSummary, TaskUpdatePlan, UserId, reconcile_items,
        validate_deadline, validate_status,
    },
    ports::{ReferenceLookupError, TaskReferenceLookup, TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Client-facing category of a service failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The request was understood but violates a validation rule.
    ExpectationFailed,
    /// The task or a referenced entity does not exist.
    NotFound,
    /// Infrastructure failure unrelated to the request contents.
    Internal,
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// The task does not exist.
    #[error("task not found for id: {0}")]
    TaskNotFound(TaskId),
    /// The referenced tag does not exist.
    #[error("tag not found for id: {0}")]
    TagNotFound(TagId),
    /// The referenced event does not exist.
    #[error("event not found for id: {0}")]
    EventNotFound(EventId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(TaskRepositoryError),
    /// Reference lookup failed.
    #[error(transparent)]
    Lookup(#[from] ReferenceLookupError),
}

impl From<TaskRepositoryError> for TaskServiceError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::TaskNotFound(id),
            other => Self::Repository(other),
        }
    }
}

impl TaskServiceError {
    /// Maps the error onto the failure a client should see.
    #[must_use]
    pub const fn failure_kind(&self) -> FailureKind {
        match self {
            Self::Domain(_) => FailureKind::ExpectationFailed,
            Self::TaskNotFound(_) | Self::TagNotFound(_) | Self::EventNotFound(_) => {
                FailureKind::NotFound
            }
            Self::Repository(_) | Self::Lookup(_) => FailureKind::Internal,
        }
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
#[derive(Clone)]
pub struct TaskService<R, L, C>
where
    R: TaskRepository,
    L: TaskReferenceLookup,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    references: Arc<L>,
    clock: Arc<C>,
}

impl<R, L, C> TaskService<R, L, C>
where
    R: TaskRepository,
    L: TaskReferenceLookup,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, references: Arc<L>, clock: Arc<C>) -> Self {
        Self {
            repository,
            references,
            clock,
        }
    }

    /// Creates a task owned by `owner`.
    ///
    /// An absent status defaults to [`TaskStatus::Backlog`]. Item identifiers
    /// in the request are ignored; every item is created fresh.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] for invalid input,
    /// [`TaskServiceError::TagNotFound`] or [`TaskServiceError::EventNotFound`]
    /// for unresolvable references, and repository failures otherwise.
    pub async fn create(&self, owner: UserId, request: SaveTaskRequest) -> TaskServiceResult<Task> {
        let status = validate_status(request.status())?.unwrap_or(TaskStatus::Backlog);
        let deadline = validate_deadline(request.deadline(), Some(status))?;
        request.validate_shape()?;
        let fields = self.resolve_fields(&request).await?;
        let items = request.items().iter().map(NewTaskItem::from).collect();

        let task = Task::new(
            owner,
            fields,
            StatusChange { status, deadline },
            items,
            &*self.clock,
        );
        self.repository.store(&task).await?;
        info!(task_id = %task.id(), status = %task.status(), items = task.items().len(), "created task");
        Ok(task)
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::TaskNotFound`] when the task does not
    /// exist.
    pub async fn get_by_id(&self, task_id: TaskId) -> TaskServiceResult<Task> {
        self.load(task_id).await
    }

    /// Lists summaries of every task owned by `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn find_all(&self, owner: UserId) -> TaskServiceResult<Vec<TaskSummary>> {
        let tasks = self.repository.find_by_owner(owner).await?;
        Ok(summarize(&tasks))
    }

    /// Lists summaries of the user's tasks attached to an event.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::EventNotFound`] when the event does not
    /// exist.
    pub async fn find_all_by_event(
        &self,
        owner: UserId,
        event: EventId,
    ) -> TaskServiceResult<Vec<TaskSummary>> {
        if !self.references.event_exists(event).await? {
            return Err(TaskServiceError::EventNotFound(event));
        }
        let tasks = self.repository.find_by_owner_and_event(owner, event).await?;
        Ok(summarize(&tasks))
    }

    /// Lists summaries of every task filed under any of `tags`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn find_all_by_tags(&self, tags: &[TagId]) -> TaskServiceResult<Vec<TaskSummary>> {
        let tasks = self.repository.find_by_tags(tags).await?;
        Ok(summarize(&tasks))
    }

    /// Lists a task's items in display order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::TaskNotFound`] when the task does not
    /// exist.
    pub async fn list_items(&self, task_id: TaskId) -> TaskServiceResult<Vec<TaskItem>> {
        Ok(self.repository.find_items(task_id).await?)
    }

    /// Replaces a task's state with the request, reconciling its items.
    ///
    /// The status is checked first, then the deadline, then the titles.
    /// Validation, reference resolution, and reconciliation all finish
    /// before the single atomic save; a rejected request writes nothing. An
    /// absent status keeps the stored status and deadline.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] for an invalid status, deadline,
    /// or blank title; [`TaskServiceError::TagNotFound`],
    /// [`TaskServiceError::EventNotFound`], or
    /// [`TaskServiceError::TaskNotFound`] for unresolvable identifiers; and
    /// repository failures otherwise.
    pub async fn update_task(
        &self,
        task_id: TaskId,
        request: SaveTaskRequest,
    ) -> TaskServiceResult<Task> {
        let status = validate_status(request.status())?;
        let deadline = validate_deadline(request.deadline(), status)?;
        request.validate_shape()?;
        let fields = self.resolve_fields(&request).await?;
        let mut task = self.load(task_id).await?;

        let items = reconcile_items(task.items(), request.items());
        let (kept, created, deleted) = (items.kept.len(), items.created.len(), items.deleted.len());
        let plan = TaskUpdatePlan {
            fields,
            status: status.map(|next| StatusChange {
                status: next,
                deadline,
            }),
            items,
        };

        let removed = task.apply_update(plan, &*self.clock);
        self.repository.save(&task, &removed).await?;
        info!(%task_id, kept, created, deleted, "updated task");
        Ok(task)
    }

    /// Changes only the status and deadline of a task.
    ///
    /// An absent status leaves the task untouched and returns its current
    /// summary.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] for an invalid status or
    /// deadline and [`TaskServiceError::TaskNotFound`] when the task does not
    /// exist.
    pub async fn update_status(
        &self,
        task_id: TaskId,
        raw_status: Option<&str>,
        raw_deadline: Option<&str>,
    ) -> TaskServiceResult<TaskSummary> {
        let status = validate_status(raw_status)?;
        let deadline = validate_deadline(raw_deadline, status)?;
        let mut task = self.load(task_id).await?;

        let Some(new_status) = status else {
            debug!(%task_id, "no status supplied, task left unchanged");
            return Ok(task.summary());
        };

        task.change_status(
            StatusChange {
                status: new_status,
                deadline,
            },
            &*self.clock,
        );
        self.repository.save(&task, &[]).await?;
        info!(%task_id, status = %new_status, "updated task status");
        Ok(task.summary())
    }

    /// Deletes a task and its items.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::TaskNotFound`] when the task does not
    /// exist.
    pub async fn delete_by_id(&self, task_id: TaskId) -> TaskServiceResult<()> {
        self.repository.delete(task_id).await?;
        info!(%task_id, "deleted task");
        Ok(())
    }

    async fn load(&self, task_id: TaskId) -> TaskServiceResult<Task> {
        self.repository
            .find_by_id(task_id)
            .await?
            .ok_or(TaskServiceError::TaskNotFound(task_id))
    }

    async fn resolve_fields(&self, request: &SaveTaskRequest) -> TaskServiceResult<TaskFields> {
        if let Some(tag) = request.tag_id()
            && !self.references.tag_exists(tag).await?
        {
            return Err(TaskServiceError::TagNotFound(tag));
        }
        if let Some(event) = request.event_id()
            && !self.references.event_exists(event).await?
        {
            return Err(TaskServiceError::EventNotFound(event));
        }

        let requested = distinct_hashtags(request.hashtag_ids());
        let hashtags = if requested.is_empty() {
            Vec::new()
        } else {
            let found = self.references.existing_hashtags(&requested).await?;
            if found.len() < requested.len() {
                debug!(
                    requested = requested.len(),
                    found = found.len(),
                    "dropping unknown hashtags"
                );
            }
            found
        };

        Ok(TaskFields {
            title: request.title().to_owned(),
            description: request.description().map(str::to_owned),
            tag: request.tag_id(),
            event: request.event_id(),
            hashtags,
        })
    }
}

/// Removes repeated hashtag ids, keeping first-seen order.
fn distinct_hashtags(ids: &[HashtagId]) -> Vec<HashtagId> {
    let mut seen = HashSet::with_capacity(ids.len());
    ids.iter().copied().filter(|id| seen.insert(*id)).collect()
}

fn summarize(tasks: &[Task]) -> Vec<TaskSummary> {
    tasks.iter().map(Task::summary).collect()
}
