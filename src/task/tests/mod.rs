//! Unit tests for the task domain and services.


use crate::task::domain::TaskItemId;
use uuid::Uuid;

/// Builds a deterministic item identifier for readable fixtures.
fn item_id(n: u128) -> TaskItemId {
    TaskItemId::from_uuid(Uuid::from_u128(n))
}
