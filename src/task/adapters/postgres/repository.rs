//! `PostgreSQL` repository implementation for task storage.

use super::{
    TaskPgPool,
    models::{NewTaskRow, TaskChangeset, TaskHashtagRow, TaskItemRow, TaskRow},
    schema::{task_hashtags, task_items, tasks},
};
use crate::task::{
    domain::{
        EventId, HashtagId, PersistedTaskData, TagId, Task, TaskId, TaskItem, TaskItemId,
        TaskStatus, UserId,
    },
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::upsert::excluded;
use std::collections::HashMap;
use uuid::Uuid;

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }

    async fn load_where<F>(&self, query: F) -> TaskRepositoryResult<Vec<Task>>
    where
        F: FnOnce(&mut PgConnection) -> QueryResult<Vec<TaskRow>> + Send + 'static,
    {
        self.run_blocking(move |connection| {
            let rows = query(connection).map_err(TaskRepositoryError::persistence)?;
            hydrate(connection, rows)
        })
        .await
    }
}

impl From<DieselError> for TaskRepositoryError {
    fn from(err: DieselError) -> Self {
        Self::persistence(err)
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let new_row = to_new_row(task);
        let items = to_item_rows(task)?;
        let links = to_hashtag_rows(task)?;

        self.run_blocking(move |connection| {
            connection.transaction(|conn| {
                diesel::insert_into(tasks::table)
                    .values(&new_row)
                    .execute(conn)
                    .map_err(|err| match err {
                        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                            TaskRepositoryError::DuplicateTask(task_id)
                        }
                        other => TaskRepositoryError::persistence(other),
                    })?;
                if !items.is_empty() {
                    diesel::insert_into(task_items::table)
                        .values(&items)
                        .execute(conn)?;
                }
                replace_hashtags(conn, task_id, &links)
            })
        })
        .await
    }

    async fn save(&self, task: &Task, removed_items: &[TaskItemId]) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let changes = to_changeset(task);
        let items = to_item_rows(task)?;
        let links = to_hashtag_rows(task)?;
        let removed: Vec<Uuid> = removed_items.iter().map(|id| id.into_inner()).collect();

        self.run_blocking(move |connection| {
            connection.transaction(|conn| {
                let updated = diesel::update(tasks::table.find(task_id.into_inner()))
                    .set(&changes)
                    .execute(conn)?;
                if updated == 0 {
                    return Err(TaskRepositoryError::NotFound(task_id));
                }

                if !removed.is_empty() {
                    diesel::delete(
                        task_items::table
                            .filter(task_items::task_id.eq(task_id.into_inner()))
                            .filter(task_items::id.eq_any(removed)),
                    )
                    .execute(conn)?;
                }

                if !items.is_empty() {
                    diesel::insert_into(task_items::table)
                        .values(&items)
                        .on_conflict(task_items::id)
                        .do_update()
                        .set((
                            task_items::title.eq(excluded(task_items::title)),
                            task_items::completed.eq(excluded(task_items::completed)),
                            task_items::position.eq(excluded(task_items::position)),
                        ))
                        .execute(conn)?;
                }

                replace_hashtags(conn, task_id, &links)
            })
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .find(id.into_inner())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            match row {
                Some(found) => Ok(hydrate(connection, vec![found])?.pop()),
                None => Ok(None),
            }
        })
        .await
    }

    async fn find_items(&self, id: TaskId) -> TaskRepositoryResult<Vec<TaskItem>> {
        self.run_blocking(move |connection| {
            let exists = diesel::select(diesel::dsl::exists(tasks::table.find(id.into_inner())))
                .get_result::<bool>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if !exists {
                return Err(TaskRepositoryError::NotFound(id));
            }
            let rows = task_items::table
                .filter(task_items::task_id.eq(id.into_inner()))
                .order(task_items::position.asc())
                .select(TaskItemRow::as_select())
                .load::<TaskItemRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(rows.into_iter().map(row_to_item).collect())
        })
        .await
    }

    async fn find_by_owner(&self, owner: UserId) -> TaskRepositoryResult<Vec<Task>> {
        self.load_where(move |connection| {
            tasks::table
                .filter(tasks::owner_id.eq(owner.into_inner()))
                .order((tasks::created_at.asc(), tasks::id.asc()))
                .select(TaskRow::as_select())
                .load(connection)
        })
        .await
    }

    async fn find_by_owner_and_event(
        &self,
        owner: UserId,
        event: EventId,
    ) -> TaskRepositoryResult<Vec<Task>> {
        self.load_where(move |connection| {
            tasks::table
                .filter(tasks::owner_id.eq(owner.into_inner()))
                .filter(tasks::event_id.eq(event.into_inner()))
                .order((tasks::created_at.asc(), tasks::id.asc()))
                .select(TaskRow::as_select())
                .load(connection)
        })
        .await
    }

    async fn find_by_tags(&self, tags: &[TagId]) -> TaskRepositoryResult<Vec<Task>> {
        if tags.is_empty() {
            return Ok(Vec::new());
        }
        let tag_ids: Vec<Option<Uuid>> = tags.iter().map(|tag| Some(tag.into_inner())).collect();
        self.load_where(move |connection| {
            tasks::table
                .filter(tasks::tag_id.eq_any(tag_ids))
                .order((tasks::created_at.asc(), tasks::id.asc()))
                .select(TaskRow::as_select())
                .load(connection)
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            // Items and hashtag links cascade with the task row.
            let deleted = diesel::delete(tasks::table.find(id.into_inner()))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if deleted == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn replace_hashtags(
    connection: &mut PgConnection,
    task_id: TaskId,
    links: &[TaskHashtagRow],
) -> TaskRepositoryResult<()> {
    diesel::delete(task_hashtags::table.filter(task_hashtags::task_id.eq(task_id.into_inner())))
        .execute(connection)?;
    if !links.is_empty() {
        diesel::insert_into(task_hashtags::table)
            .values(links)
            .execute(connection)?;
    }
    Ok(())
}

/// Loads items and hashtag links for `rows` and assembles aggregates,
/// preserving row order.
fn hydrate(connection: &mut PgConnection, rows: Vec<TaskRow>) -> TaskRepositoryResult<Vec<Task>> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }
    let ids: Vec<Uuid> = rows.iter().map(|row| row.id).collect();

    let item_rows = task_items::table
        .filter(task_items::task_id.eq_any(ids.clone()))
        .order((task_items::task_id.asc(), task_items::position.asc()))
        .select(TaskItemRow::as_select())
        .load::<TaskItemRow>(connection)
        .map_err(TaskRepositoryError::persistence)?;
    let link_rows = task_hashtags::table
        .filter(task_hashtags::task_id.eq_any(ids))
        .order((task_hashtags::task_id.asc(), task_hashtags::position.asc()))
        .select(TaskHashtagRow::as_select())
        .load::<TaskHashtagRow>(connection)
        .map_err(TaskRepositoryError::persistence)?;

    let mut items = group_by_task(item_rows, |row| row.task_id);
    let mut links = group_by_task(link_rows, |row| row.task_id);

    rows.into_iter()
        .map(|row| {
            let owned_items = items.remove(&row.id).unwrap_or_default();
            let hashtags = links.remove(&row.id).unwrap_or_default();
            row_to_task(row, owned_items, hashtags)
        })
        .collect()
}

fn group_by_task<R>(rows: Vec<R>, key: impl Fn(&R) -> Uuid) -> HashMap<Uuid, Vec<R>> {
    let mut grouped: HashMap<Uuid, Vec<R>> = HashMap::new();
    for row in rows {
        grouped.entry(key(&row)).or_default().push(row);
    }
    grouped
}

pub(super) fn to_new_row(task: &Task) -> NewTaskRow {
    NewTaskRow {
        id: task.id().into_inner(),
        owner_id: task.owner().into_inner(),
        title: task.title().to_owned(),
        description: task.description().map(str::to_owned),
        status: task.status().as_str().to_owned(),
        deadline: task.deadline(),
        tag_id: task.tag().map(TagId::into_inner),
        event_id: task.event().map(EventId::into_inner),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    }
}

pub(super) fn to_changeset(task: &Task) -> TaskChangeset {
    TaskChangeset {
        title: task.title().to_owned(),
        description: task.description().map(str::to_owned),
        status: task.status().as_str().to_owned(),
        deadline: task.deadline(),
        tag_id: task.tag().map(TagId::into_inner),
        event_id: task.event().map(EventId::into_inner),
        updated_at: task.updated_at(),
    }
}

pub(super) fn to_item_rows(task: &Task) -> TaskRepositoryResult<Vec<TaskItemRow>> {
    task.items()
        .iter()
        .enumerate()
        .map(|(index, item)| {
            Ok(TaskItemRow {
                id: item.id().into_inner(),
                task_id: task.id().into_inner(),
                title: item.title().to_owned(),
                completed: item.completed(),
                position: i32::try_from(index).map_err(TaskRepositoryError::persistence)?,
            })
        })
        .collect()
}

pub(super) fn to_hashtag_rows(task: &Task) -> TaskRepositoryResult<Vec<TaskHashtagRow>> {
    task.hashtags()
        .iter()
        .enumerate()
        .map(|(index, hashtag)| {
            Ok(TaskHashtagRow {
                task_id: task.id().into_inner(),
                hashtag_id: hashtag.into_inner(),
                position: i32::try_from(index).map_err(TaskRepositoryError::persistence)?,
            })
        })
        .collect()
}

fn row_to_item(row: TaskItemRow) -> TaskItem {
    TaskItem::from_persisted(TaskItemId::from_uuid(row.id), row.title, row.completed)
}

pub(super) fn row_to_task(
    row: TaskRow,
    items: Vec<TaskItemRow>,
    hashtags: Vec<TaskHashtagRow>,
) -> TaskRepositoryResult<Task> {
    let status =
        TaskStatus::try_from(row.status.as_str()).map_err(TaskRepositoryError::persistence)?;

    let data = PersistedTaskData {
        id: TaskId::from_uuid(row.id),
        owner: UserId::from_uuid(row.owner_id),
        title: row.title,
        description: row.description,
        status,
        deadline: row.deadline,
        tag: row.tag_id.map(TagId::from_uuid),
        event: row.event_id.map(EventId::from_uuid),
        hashtags: hashtags
            .into_iter()
            .map(|link| HashtagId::from_uuid(link.hashtag_id))
            .collect(),
        items: items.into_iter().map(row_to_item).collect(),
        created_at: row.created_at,
        updated_at: row.updated_at,
    };
    Ok(Task::from_persisted(data))
}
