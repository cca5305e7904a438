//! Task lifecycle status and status-name validation.

use super::{ParseTaskStatusError, TaskDomainError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TaskStatus {
    /// Parked work with no commitment to a date.
    Backlog,
    /// Planned work waiting to be started.
    Todo,
    /// Work currently underway.
    Progress,
    /// Finished work.
    Done,
}

impl TaskStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 4] = [Self::Backlog, Self::Todo, Self::Progress, Self::Done];

    /// Returns the canonical name used on the wire and in storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Backlog => "BACKLOG",
            Self::Todo => "TODO",
            Self::Progress => "PROGRESS",
            Self::Done => "DONE",
        }
    }

    /// Returns the canonical names of every status.
    #[must_use]
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|status| status.as_str()).collect()
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    /// Parses a canonical status name. Matching is exact and case-sensitive.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| ParseTaskStatusError(value.to_owned()))
    }
}

/// Validates an optional status name supplied by a caller.
///
/// Returns `Ok(None)` when no status was supplied, leaving the decision of
/// what an absent status means to the caller.
///
/// # Errors
///
/// Returns [`TaskDomainError::InvalidStatusName`] when the name does not
/// exactly match one of the canonical status names.
pub fn validate_status(raw: Option<&str>) -> Result<Option<TaskStatus>, TaskDomainError> {
    raw.map(|value| {
        TaskStatus::try_from(value).map_err(|_| TaskDomainError::InvalidStatusName {
            value: value.to_owned(),
            valid: TaskStatus::names(),
        })
    })
    .transpose()
}
