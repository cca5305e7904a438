//! Error types for task domain validation and parsing.

use super::TaskStatus;
use thiserror::Error;

/// Errors returned while validating task mutations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The status name is not one of the known statuses.
    #[error("invalid status value: {value}. Valid values are: [{}]", valid.join(", "))]
    InvalidStatusName {
        /// The rejected status name.
        value: String,
        /// Every accepted status name.
        valid: Vec<&'static str>,
    },

    /// The status requires a deadline but none was supplied.
    #[error("deadline must have a value when status is {0}")]
    InvalidDeadline(TaskStatus),

    /// The deadline is not an ISO calendar date.
    #[error("invalid deadline date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTaskTitle,

    /// A task item title is empty after trimming.
    #[error("task item title must not be empty")]
    EmptyItemTitle,
}

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
