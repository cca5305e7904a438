//! Shared world state for task update BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskory::task::{
    adapters::memory::{InMemoryReferenceLookup, InMemoryTaskRepository},
    domain::{Task, TaskItemInput},
    services::{TaskService, TaskServiceError},
};

/// Service type used by the BDD world.
pub type TestTaskService =
    TaskService<InMemoryTaskRepository, InMemoryReferenceLookup, DefaultClock>;

/// Status and deadline the pending update carries.
#[derive(Debug, Clone, Default)]
pub struct PendingStatus {
    pub status: Option<String>,
    pub deadline: Option<String>,
}

/// Scenario world for task update behaviour tests.
pub struct TaskUpdateWorld {
    pub service: TestTaskService,
    pub task: Option<Task>,
    pub pending_items: Vec<TaskItemInput>,
    pub pending_status: PendingStatus,
    pub last_update_result: Option<Result<Task, TaskServiceError>>,
}

impl TaskUpdateWorld {
    /// Creates a world with no task and an empty pending update.
    #[must_use]
    pub fn new() -> Self {
        let service = TaskService::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(InMemoryReferenceLookup::new()),
            Arc::new(DefaultClock),
        );

        Self {
            service,
            task: None,
            pending_items: Vec::new(),
            pending_status: PendingStatus::default(),
            last_update_result: None,
        }
    }

    /// Returns the task created by the background step.
    ///
    /// # Errors
    ///
    /// Returns an error when no task has been created yet.
    pub fn task(&self) -> Result<&Task, eyre::Report> {
        self.task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
    }
}

impl Default for TaskUpdateWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskUpdateWorld {
    TaskUpdateWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Splits a comma-separated list of titles.
#[must_use]
pub fn split_titles(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .map(str::to_owned)
        .collect()
}
