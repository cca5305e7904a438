//! Status-dependent deadline policy.

use super::{TaskDomainError, TaskStatus};
use chrono::NaiveDate;

const DEADLINE_FORMAT: &str = "%Y-%m-%d";

/// Validates or derives a task deadline for the given status.
///
/// | status             | deadline absent      | deadline present     |
/// |--------------------|----------------------|----------------------|
/// | `TODO`, `PROGRESS` | `InvalidDeadline`    | parsed date          |
/// | `DONE`             | `None`               | parsed date          |
/// | `BACKLOG`          | `None`               | `None` (discarded)   |
/// | no status          | `None`               | `None` (discarded)   |
///
/// An empty string counts as an absent deadline.
///
/// # Errors
///
/// Returns [`TaskDomainError::InvalidDeadline`] when a `TODO` or `PROGRESS`
/// status has no deadline, and [`TaskDomainError::InvalidDate`] when a
/// deadline that is used cannot be parsed as an ISO calendar date.
pub fn validate_deadline(
    raw: Option<&str>,
    status: Option<TaskStatus>,
) -> Result<Option<NaiveDate>, TaskDomainError> {
    let supplied = raw.filter(|value| !value.is_empty());
    match (status, supplied) {
        (Some(required @ (TaskStatus::Todo | TaskStatus::Progress)), None) => {
            Err(TaskDomainError::InvalidDeadline(required))
        }
        (Some(TaskStatus::Todo | TaskStatus::Progress | TaskStatus::Done), Some(value)) => {
            parse_deadline(value).map(Some)
        }
        (Some(TaskStatus::Done), None) => Ok(None),
        (Some(TaskStatus::Backlog) | None, discarded) => {
            if let Some(value) = discarded {
                tracing::warn!(
                    deadline = value,
                    status = status.map_or("<absent>", TaskStatus::as_str),
                    "discarding deadline for a status without deadlines"
                );
            }
            Ok(None)
        }
    }
}

/// Parses `YYYY-MM-DD` strictly: the value must be the canonical rendering
/// of the date it parses to, so padding, signs, and whitespace are rejected.
fn parse_deadline(value: &str) -> Result<NaiveDate, TaskDomainError> {
    NaiveDate::parse_from_str(value, DEADLINE_FORMAT)
        .ok()
        .filter(|date| date.format(DEADLINE_FORMAT).to_string() == value)
        .ok_or_else(|| TaskDomainError::InvalidDate(value.to_owned()))
}
