//! Checklist items owned by a task.

use super::{TaskDomainError, TaskItemId};
use serde::{Deserialize, Serialize};

/// A persisted checklist entry belonging to exactly one task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskItem {
    id: TaskItemId,
    title: String,
    completed: bool,
}

impl TaskItem {
    /// Reconstructs an item from persisted values.
    #[must_use]
    pub fn from_persisted(id: TaskItemId, title: impl Into<String>, completed: bool) -> Self {
        Self {
            id,
            title: title.into(),
            completed,
        }
    }

    /// Gives a staged item its identity.
    #[must_use]
    pub fn create(item: NewTaskItem) -> Self {
        Self {
            id: TaskItemId::new(),
            title: item.title,
            completed: item.completed,
        }
    }

    /// Returns the item identifier.
    #[must_use]
    pub const fn id(&self) -> TaskItemId {
        self.id
    }

    /// Returns the item title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns whether the item is checked off.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    pub(crate) fn overwrite(&mut self, title: &str, completed: bool) {
        title.clone_into(&mut self.title);
        self.completed = completed;
    }
}

/// An item staged for creation that has not been given an identity yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTaskItem {
    /// Item title.
    pub title: String,
    /// Completion flag.
    pub completed: bool,
}

impl NewTaskItem {
    /// Creates a staged item.
    #[must_use]
    pub fn new(title: impl Into<String>, completed: bool) -> Self {
        Self {
            title: title.into(),
            completed,
        }
    }
}

/// Item descriptor carried by create and update requests.
///
/// An `id` that matches an existing item updates it in place; anything else
/// creates a new item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskItemInput {
    /// Identifier of the existing item to update, if any.
    #[serde(default)]
    pub id: Option<TaskItemId>,
    /// Requested title.
    pub title: String,
    /// Requested completion flag.
    #[serde(default)]
    pub completed: bool,
}

impl TaskItemInput {
    /// Describes a brand-new item.
    #[must_use]
    pub fn new(title: impl Into<String>, completed: bool) -> Self {
        Self {
            id: None,
            title: title.into(),
            completed,
        }
    }

    /// Describes a change to the item with the given identifier.
    #[must_use]
    pub fn existing(id: TaskItemId, title: impl Into<String>, completed: bool) -> Self {
        Self {
            id: Some(id),
            title: title.into(),
            completed,
        }
    }

    /// Checks that the descriptor carries a usable title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyItemTitle`] when the title is blank.
    pub fn validate(&self) -> Result<(), TaskDomainError> {
        if self.title.trim().is_empty() {
            return Err(TaskDomainError::EmptyItemTitle);
        }
        Ok(())
    }
}

impl From<&TaskItem> for TaskItemInput {
    fn from(item: &TaskItem) -> Self {
        Self::existing(item.id(), item.title(), item.completed())
    }
}

impl From<&TaskItemInput> for NewTaskItem {
    fn from(input: &TaskItemInput) -> Self {
        Self::new(input.title.clone(), input.completed)
    }
}
