//! Shared helpers for in-memory integration tests.

use std::sync::Arc;

use eyre::WrapErr;
use mockable::DefaultClock;
use rstest::fixture;
use taskory::task::{
    adapters::memory::{InMemoryReferenceLookup, InMemoryTaskRepository},
    domain::{Task, TaskItem, TaskItemInput, UserId},
    services::{SaveTaskRequest, TaskService},
};

/// Service wired to in-memory adapters.
pub type TestService = TaskService<InMemoryTaskRepository, InMemoryReferenceLookup, DefaultClock>;

/// Service plus handles to the adapters behind it.
pub struct Fixture {
    pub service: TestService,
    pub references: Arc<InMemoryReferenceLookup>,
    pub owner: UserId,
}

/// Provides a fresh service for each test.
#[fixture]
pub fn fixture() -> Fixture {
    let references = Arc::new(InMemoryReferenceLookup::new());
    let service = TaskService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::clone(&references),
        Arc::new(DefaultClock),
    );
    Fixture {
        service,
        references,
        owner: UserId::new(),
    }
}

/// Creates a `TODO` task with the given item titles, none completed.
///
/// # Errors
///
/// Returns an error when the service rejects the request.
pub async fn create_todo(fixture: &Fixture, titles: &[&str]) -> Result<Task, eyre::Report> {
    let request = SaveTaskRequest::new("Integration task")
        .with_status("TODO")
        .with_deadline("2026-11-01")
        .with_items(titles.iter().map(|title| TaskItemInput::new(*title, false)));
    fixture
        .service
        .create(fixture.owner, request)
        .await
        .wrap_err("create seed task")
}

/// Finds the item titled `title`.
///
/// # Errors
///
/// Returns an error when no item has that title.
pub fn item_named<'a>(task: &'a Task, title: &str) -> Result<&'a TaskItem, eyre::Report> {
    task.items()
        .iter()
        .find(|item| item.title() == title)
        .ok_or_else(|| eyre::eyre!("no item titled {title}"))
}

/// Returns `(title, completed)` pairs in display order.
#[must_use]
pub fn item_pairs(task: &Task) -> Vec<(String, bool)> {
    task.items()
        .iter()
        .map(|item| (item.title().to_owned(), item.completed()))
        .collect()
}
