//! Reconciliation of a task's item collection against a requested end state.

use super::{NewTaskItem, TaskItem, TaskItemId, TaskItemInput};
use std::collections::{HashMap, HashSet};

/// Outcome of reconciling existing items with a requested item list.
///
/// The task's collection after applying the outcome is exactly
/// `kept` followed by `created`; `deleted` items are detached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemReconciliation {
    /// Existing items referenced by the request, with requested values
    /// applied, in their original relative order.
    pub kept: Vec<TaskItem>,
    /// Items to create, in request order.
    pub created: Vec<NewTaskItem>,
    /// Existing items the request no longer references.
    pub deleted: Vec<TaskItem>,
}

impl ItemReconciliation {
    /// Returns the identifiers of the items to delete.
    #[must_use]
    pub fn deleted_ids(&self) -> Vec<TaskItemId> {
        self.deleted.iter().map(TaskItem::id).collect()
    }

    /// Returns `true` when applying the outcome changes nothing structurally.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.created.is_empty() && self.deleted.is_empty()
    }
}

/// Computes which items to keep, create, and delete.
///
/// A requested item whose `id` matches an existing item overwrites that
/// item's title and completion flag. A requested item without an `id`, or
/// with an `id` unknown to `existing`, becomes a new item. Existing items
/// whose `id` never appears in the request are deleted, so an empty request
/// clears the collection.
#[must_use]
pub fn reconcile_items(existing: &[TaskItem], requested: &[TaskItemInput]) -> ItemReconciliation {
    let mut matched: HashMap<TaskItemId, TaskItem> = existing
        .iter()
        .map(|item| (item.id(), item.clone()))
        .collect();
    let requested_ids: HashSet<TaskItemId> =
        requested.iter().filter_map(|input| input.id).collect();

    let mut created = Vec::new();
    for input in requested {
        match input.id.and_then(|id| matched.get_mut(&id)) {
            Some(item) => item.overwrite(&input.title, input.completed),
            None => created.push(NewTaskItem::from(input)),
        }
    }

    let (kept, deleted) = existing
        .iter()
        .partition::<Vec<&TaskItem>, _>(|item| requested_ids.contains(&item.id()));

    ItemReconciliation {
        kept: kept
            .into_iter()
            .filter_map(|item| matched.remove(&item.id()))
            .collect(),
        created,
        deleted: deleted.into_iter().cloned().collect(),
    }
}
