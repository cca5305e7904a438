//! Task aggregate root and the staged changes applied to it.

use super::{
    EventId, HashtagId, ItemReconciliation, NewTaskItem, TagId, TaskId, TaskItem, TaskItemId,
    TaskStatus, UserId,
};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Scalar task attributes and references settled by validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFields {
    /// Task title.
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Tag the task is filed under, if any.
    pub tag: Option<TagId>,
    /// Event the task belongs to, if any.
    pub event: Option<EventId>,
    /// Hashtags attached to the task.
    pub hashtags: Vec<HashtagId>,
}

/// Validated status and deadline pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusChange {
    /// New lifecycle status.
    pub status: TaskStatus,
    /// Deadline derived for that status.
    pub deadline: Option<NaiveDate>,
}

/// Fully validated replacement state for an existing task.
///
/// Built before anything is written so that a rejected request never leaves
/// a partially mutated aggregate behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskUpdatePlan {
    /// Replacement scalar fields.
    pub fields: TaskFields,
    /// Status change, or `None` to keep the stored status and deadline.
    pub status: Option<StatusChange>,
    /// Item reconciliation against the loaded task.
    pub items: ItemReconciliation,
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    owner: UserId,
    title: String,
    description: Option<String>,
    status: TaskStatus,
    deadline: Option<NaiveDate>,
    tag: Option<TagId>,
    event: Option<EventId>,
    hashtags: Vec<HashtagId>,
    items: Vec<TaskItem>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owner.
    pub owner: UserId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: Option<String>,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted deadline.
    pub deadline: Option<NaiveDate>,
    /// Persisted tag reference.
    pub tag: Option<TagId>,
    /// Persisted event reference.
    pub event: Option<EventId>,
    /// Persisted hashtag references.
    pub hashtags: Vec<HashtagId>,
    /// Persisted items in display order.
    pub items: Vec<TaskItem>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task owned by `owner`.
    #[must_use]
    pub fn new(
        owner: UserId,
        fields: TaskFields,
        status: StatusChange,
        items: Vec<NewTaskItem>,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            owner,
            title: fields.title,
            description: fields.description,
            status: status.status,
            deadline: status.deadline,
            tag: fields.tag,
            event: fields.event,
            hashtags: fields.hashtags,
            items: items.into_iter().map(TaskItem::create).collect(),
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            owner: data.owner,
            title: data.title,
            description: data.description,
            status: data.status,
            deadline: data.deadline,
            tag: data.tag,
            event: data.event,
            hashtags: data.hashtags,
            items: data.items,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn owner(&self) -> UserId {
        self.owner
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<NaiveDate> {
        self.deadline
    }

    /// Returns the tag reference, if any.
    #[must_use]
    pub const fn tag(&self) -> Option<TagId> {
        self.tag
    }

    /// Returns the event reference, if any.
    #[must_use]
    pub const fn event(&self) -> Option<EventId> {
        self.event
    }

    /// Returns the attached hashtags.
    #[must_use]
    pub fn hashtags(&self) -> &[HashtagId] {
        &self.hashtags
    }

    /// Returns the checklist items in display order.
    #[must_use]
    pub fn items(&self) -> &[TaskItem] {
        &self.items
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the lightweight summary view of this task.
    #[must_use]
    pub fn summary(&self) -> TaskSummary {
        TaskSummary {
            id: self.id,
            title: self.title.clone(),
            status: self.status,
            deadline: self.deadline,
        }
    }

    /// Applies a validated update plan and returns the identifiers of the
    /// items the plan detaches.
    ///
    /// Items staged for creation receive fresh identifiers and are appended
    /// after the kept items.
    pub fn apply_update(&mut self, plan: TaskUpdatePlan, clock: &impl Clock) -> Vec<TaskItemId> {
        let removed = plan.items.deleted_ids();
        let TaskUpdatePlan {
            fields,
            status,
            items,
        } = plan;

        self.title = fields.title;
        self.description = fields.description;
        self.tag = fields.tag;
        self.event = fields.event;
        self.hashtags = fields.hashtags;
        if let Some(change) = status {
            self.set_status(change);
        }
        self.items = items
            .kept
            .into_iter()
            .chain(items.created.into_iter().map(TaskItem::create))
            .collect();
        self.touch(clock);
        removed
    }

    /// Replaces the status and deadline.
    pub fn change_status(&mut self, change: StatusChange, clock: &impl Clock) {
        self.set_status(change);
        self.touch(clock);
    }

    const fn set_status(&mut self, change: StatusChange) {
        self.status = change.status;
        self.deadline = change.deadline;
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

/// Lightweight task view used by listings and status updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSummary {
    /// Task identifier.
    pub id: TaskId,
    /// Task title.
    pub title: String,
    /// Lifecycle status.
    pub status: TaskStatus,
    /// Deadline, if any.
    pub deadline: Option<NaiveDate>,
}
