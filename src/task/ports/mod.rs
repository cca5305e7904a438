//! Port contracts for task management.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod references;
pub mod repository;

pub use references::{ReferenceLookupError, ReferenceLookupResult, TaskReferenceLookup};
pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};

#[cfg(test)]
pub use references::MockTaskReferenceLookup;
#[cfg(test)]
pub use repository::MockTaskRepository;
