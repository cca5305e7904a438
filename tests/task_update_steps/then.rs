//! Then steps for task update BDD scenarios.

use super::world::{TaskUpdateWorld, run_async, split_titles};
use chrono::NaiveDate;
use rstest_bdd_macros::then;
use taskory::task::{
    domain::{Task, TaskItem, TaskStatus},
    services::FailureKind,
};

fn updated_task(world: &TaskUpdateWorld) -> Result<&Task, eyre::Report> {
    match world.last_update_result.as_ref() {
        Some(Ok(task)) => Ok(task),
        Some(Err(err)) => Err(eyre::eyre!("update failed: {err}")),
        None => Err(eyre::eyre!("update was not submitted")),
    }
}

#[then(r#"the task items are "{titles}""#)]
fn task_items_are(world: &TaskUpdateWorld, titles: String) -> Result<(), eyre::Report> {
    let task = updated_task(world)?;
    let actual: Vec<&str> = task.items().iter().map(TaskItem::title).collect();
    let expected = split_titles(&titles);
    eyre::ensure!(
        actual == expected,
        "expected items {expected:?}, found {actual:?}"
    );
    Ok(())
}

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskUpdateWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let task = updated_task(world)?;
    eyre::ensure!(
        task.status() == expected,
        "expected status {expected}, found {}",
        task.status()
    );
    Ok(())
}

#[then(r#"the task deadline is "{deadline}""#)]
fn task_deadline_is(world: &TaskUpdateWorld, deadline: String) -> Result<(), eyre::Report> {
    let expected = NaiveDate::parse_from_str(&deadline, "%Y-%m-%d")
        .map_err(|err| eyre::eyre!("invalid expected deadline in scenario: {err}"))?;
    let task = updated_task(world)?;
    eyre::ensure!(
        task.deadline() == Some(expected),
        "expected deadline {expected}, found {:?}",
        task.deadline()
    );
    Ok(())
}

#[then("the task has no deadline")]
fn task_has_no_deadline(world: &TaskUpdateWorld) -> Result<(), eyre::Report> {
    let task = updated_task(world)?;
    eyre::ensure!(
        task.deadline().is_none(),
        "expected no deadline, found {:?}",
        task.deadline()
    );
    Ok(())
}

#[then(r#"the update fails as "{kind}""#)]
fn update_fails_as(world: &TaskUpdateWorld, kind: String) -> Result<(), eyre::Report> {
    let expected = match kind.as_str() {
        "expectation failed" => FailureKind::ExpectationFailed,
        "not found" => FailureKind::NotFound,
        "internal" => FailureKind::Internal,
        other => return Err(eyre::eyre!("unknown failure kind in scenario: {other}")),
    };
    let Some(Err(err)) = world.last_update_result.as_ref() else {
        return Err(eyre::eyre!(
            "expected a failed update, got {:?}",
            world.last_update_result
        ));
    };
    eyre::ensure!(
        err.failure_kind() == expected,
        "expected {expected:?}, got {err}"
    );
    Ok(())
}

#[then("the stored task is unchanged")]
fn stored_task_unchanged(world: &TaskUpdateWorld) -> Result<(), eyre::Report> {
    let original = world.task()?;
    let stored = run_async(world.service.get_by_id(original.id()))
        .map_err(|err| eyre::eyre!("reload task: {err}"))?;
    eyre::ensure!(&stored == original, "stored task changed after rejection");
    Ok(())
}
