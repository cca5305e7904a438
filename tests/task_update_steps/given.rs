//! Given steps for task update BDD scenarios.

use super::world::{TaskUpdateWorld, run_async, split_titles};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskory::task::{
    domain::{TaskItemInput, UserId},
    services::SaveTaskRequest,
};

#[given(r#"a "{status}" task due "{deadline}" with items "{titles}""#)]
fn task_with_items(
    world: &mut TaskUpdateWorld,
    status: String,
    deadline: String,
    titles: String,
) -> Result<(), eyre::Report> {
    let request = SaveTaskRequest::new("Scenario task")
        .with_status(status)
        .with_deadline(deadline)
        .with_items(
            split_titles(&titles)
                .into_iter()
                .map(|title| TaskItemInput::new(title, false)),
        );
    let created = run_async(world.service.create(UserId::new(), request))
        .wrap_err("create task for update scenario")?;
    world.task = Some(created);
    Ok(())
}

#[given("the task has been deleted")]
fn task_deleted(world: &mut TaskUpdateWorld) -> Result<(), eyre::Report> {
    let task_id = world.task()?.id();
    run_async(world.service.delete_by_id(task_id)).wrap_err("delete task in scenario setup")?;
    Ok(())
}
