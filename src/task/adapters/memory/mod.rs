//! In-memory adapters for task management.

mod references;
mod task;

pub use references::InMemoryReferenceLookup;
pub use task::InMemoryTaskRepository;
