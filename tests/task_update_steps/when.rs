//! When steps for task update BDD scenarios.

use super::world::{TaskUpdateWorld, run_async};
use rstest_bdd_macros::when;
use taskory::task::{domain::TaskItemInput, services::SaveTaskRequest};

fn existing_item(
    world: &TaskUpdateWorld,
    title: &str,
    new_title: &str,
) -> Result<TaskItemInput, eyre::Report> {
    let item = world
        .task()?
        .items()
        .iter()
        .find(|item| item.title() == title)
        .ok_or_else(|| eyre::eyre!("no item titled {title}"))?;
    Ok(TaskItemInput::existing(item.id(), new_title, true))
}

#[when(r#"the update keeps item "{title}" completed"#)]
fn keep_item(world: &mut TaskUpdateWorld, title: String) -> Result<(), eyre::Report> {
    let input = existing_item(world, &title, &title)?;
    world.pending_items.push(input);
    Ok(())
}

#[when(r#"the update renames item "{title}" to "{new_title}" completed"#)]
fn rename_item(
    world: &mut TaskUpdateWorld,
    title: String,
    new_title: String,
) -> Result<(), eyre::Report> {
    let input = existing_item(world, &title, &new_title)?;
    world.pending_items.push(input);
    Ok(())
}

#[when(r#"the update adds item "{title}""#)]
fn add_item(world: &mut TaskUpdateWorld, title: String) {
    world.pending_items.push(TaskItemInput::new(title, false));
}

#[when(r#"the update sets status "{status}" due "{deadline}""#)]
fn set_status_with_deadline(world: &mut TaskUpdateWorld, status: String, deadline: String) {
    world.pending_status.status = Some(status);
    world.pending_status.deadline = Some(deadline);
}

#[when(r#"the update sets status "{status}" without a deadline"#)]
fn set_status_without_deadline(world: &mut TaskUpdateWorld, status: String) {
    world.pending_status.status = Some(status);
    world.pending_status.deadline = None;
}

#[when("the update is submitted")]
fn submit_update(world: &mut TaskUpdateWorld) -> Result<(), eyre::Report> {
    let task = world.task()?;
    let task_id = task.id();
    let mut request =
        SaveTaskRequest::new(task.title()).with_items(world.pending_items.iter().cloned());
    if let Some(status) = world.pending_status.status.clone() {
        request = request.with_status(status);
    }
    if let Some(deadline) = world.pending_status.deadline.clone() {
        request = request.with_deadline(deadline);
    }

    let result = run_async(world.service.update_task(task_id, request));
    world.last_update_result = Some(result);
    Ok(())
}
