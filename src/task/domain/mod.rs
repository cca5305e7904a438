//! Domain model for task management.
//!
//! The task domain covers status validation, the status-dependent deadline
//! policy, checklist item reconciliation, and the task aggregate itself.
//! Infrastructure concerns stay outside of this boundary.

mod deadline;
mod error;
mod ids;
mod item;
mod reconcile;
mod status;
mod task;

pub use deadline::validate_deadline;
pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::{EventId, HashtagId, TagId, TaskId, TaskItemId, UserId};
pub use item::{NewTaskItem, TaskItem, TaskItemInput};
pub use reconcile::{ItemReconciliation, reconcile_items};
pub use status::{TaskStatus, validate_status};
pub use task::{PersistedTaskData, StatusChange, Task, TaskFields, TaskSummary, TaskUpdatePlan};
