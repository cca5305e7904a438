//! Application services for task orchestration.

mod lifecycle;
mod request;

pub use lifecycle::{FailureKind, TaskService, TaskServiceError, TaskServiceResult};
pub use request::SaveTaskRequest;
