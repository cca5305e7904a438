//! In-memory repository for task management tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{EventId, TagId, Task, TaskId, TaskItem, TaskItemId, UserId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Every write happens under one lock acquisition, so a `save` is observed
/// either entirely or not at all.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn collect_matching(
        &self,
        predicate: impl Fn(&Task) -> bool,
    ) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.read()?;
        let mut found: Vec<Task> = state
            .tasks
            .values()
            .filter(|task| predicate(task))
            .cloned()
            .collect();
        found.sort_by_key(|task| (task.created_at(), task.id()));
        Ok(found)
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        if state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn save(&self, task: &Task, _removed_items: &[TaskItemId]) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        let stored = state
            .tasks
            .get_mut(&task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?;
        // The aggregate carries its full item list, so detached items vanish
        // with the replacement.
        *stored = task.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.read()?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn find_items(&self, id: TaskId) -> TaskRepositoryResult<Vec<TaskItem>> {
        let state = self.read()?;
        state
            .tasks
            .get(&id)
            .map(|task| task.items().to_vec())
            .ok_or(TaskRepositoryError::NotFound(id))
    }

    async fn find_by_owner(&self, owner: UserId) -> TaskRepositoryResult<Vec<Task>> {
        self.collect_matching(|task| task.owner() == owner)
    }

    async fn find_by_owner_and_event(
        &self,
        owner: UserId,
        event: EventId,
    ) -> TaskRepositoryResult<Vec<Task>> {
        self.collect_matching(|task| task.owner() == owner && task.event() == Some(event))
    }

    async fn find_by_tags(&self, tags: &[TagId]) -> TaskRepositoryResult<Vec<Task>> {
        self.collect_matching(|task| task.tag().is_some_and(|tag| tags.contains(&tag)))
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        state
            .tasks
            .remove(&id)
            .map(|_| ())
            .ok_or(TaskRepositoryError::NotFound(id))
    }
}
