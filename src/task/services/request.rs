//! Request payloads accepted by the task service.

use crate::task::domain::{EventId, HashtagId, TagId, TaskDomainError, TaskItemInput};
use serde::{Deserialize, Serialize};

/// Payload for creating a task or replacing an existing task's state.
///
/// `status` and `deadline` stay raw strings until the service validates them
/// against the status policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveTaskRequest {
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    deadline: Option<String>,
    #[serde(default)]
    tag_id: Option<TagId>,
    #[serde(default)]
    event_id: Option<EventId>,
    #[serde(default)]
    hashtag_ids: Vec<HashtagId>,
    #[serde(default)]
    items: Vec<TaskItemInput>,
}

impl SaveTaskRequest {
    /// Creates a request with only a title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            status: None,
            deadline: None,
            tag_id: None,
            event_id: None,
            hashtag_ids: Vec::new(),
            items: Vec::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the raw status name.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets the raw deadline string.
    #[must_use]
    pub fn with_deadline(mut self, deadline: impl Into<String>) -> Self {
        self.deadline = Some(deadline.into());
        self
    }

    /// Sets the tag reference.
    #[must_use]
    pub const fn with_tag(mut self, tag: TagId) -> Self {
        self.tag_id = Some(tag);
        self
    }

    /// Sets the event reference.
    #[must_use]
    pub const fn with_event(mut self, event: EventId) -> Self {
        self.event_id = Some(event);
        self
    }

    /// Sets the hashtag references.
    #[must_use]
    pub fn with_hashtags(mut self, hashtags: impl IntoIterator<Item = HashtagId>) -> Self {
        self.hashtag_ids = hashtags.into_iter().collect();
        self
    }

    /// Sets the requested item list.
    #[must_use]
    pub fn with_items(mut self, items: impl IntoIterator<Item = TaskItemInput>) -> Self {
        self.items = items.into_iter().collect();
        self
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the raw status name, if any.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Returns the raw deadline, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<&str> {
        self.deadline.as_deref()
    }

    /// Returns the tag reference, if any.
    #[must_use]
    pub const fn tag_id(&self) -> Option<TagId> {
        self.tag_id
    }

    /// Returns the event reference, if any.
    #[must_use]
    pub const fn event_id(&self) -> Option<EventId> {
        self.event_id
    }

    /// Returns the hashtag references.
    #[must_use]
    pub fn hashtag_ids(&self) -> &[HashtagId] {
        &self.hashtag_ids
    }

    /// Returns the requested items.
    #[must_use]
    pub fn items(&self) -> &[TaskItemInput] {
        &self.items
    }

    /// Rejects requests with a blank task title or blank item titles.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTaskTitle`] or
    /// [`TaskDomainError::EmptyItemTitle`].
    pub fn validate_shape(&self) -> Result<(), TaskDomainError> {
        if self.title.trim().is_empty() {
            return Err(TaskDomainError::EmptyTaskTitle);
        }
        self.items.iter().try_for_each(TaskItemInput::validate)
    }
}
