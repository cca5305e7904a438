//! Integration tests for full task updates.

use super::helpers::{Fixture, create_todo, fixture, item_named, item_pairs};
use chrono::NaiveDate;
use rstest::rstest;
use taskory::task::{
    domain::{HashtagId, TagId, TaskItemInput, TaskStatus},
    services::{FailureKind, SaveTaskRequest},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_keeps_edits_adds_and_removes_items(fixture: Fixture) -> Result<(), eyre::Report> {
    let task = create_todo(&fixture, &["a", "b", "c"]).await?;
    let a = item_named(&task, "a")?.id();
    let c = item_named(&task, "c")?.id();
    let request = SaveTaskRequest::new("Integration task")
        .with_status("DONE")
        .with_deadline("2026-12-01")
        .with_items([
            TaskItemInput::existing(a, "a", true),
            TaskItemInput::existing(c, "c2", true),
            TaskItemInput::new("d", false),
        ]);

    let updated = fixture.service.update_task(task.id(), request).await?;

    eyre::ensure!(
        item_pairs(&updated)
            == vec![
                ("a".to_owned(), true),
                ("c2".to_owned(), true),
                ("d".to_owned(), false),
            ],
        "unexpected items: {:?}",
        item_pairs(&updated)
    );
    eyre::ensure!(updated.status() == TaskStatus::Done, "status not applied");
    eyre::ensure!(
        updated.deadline() == NaiveDate::from_ymd_opt(2026, 12, 1),
        "deadline not applied"
    );
    let listed = fixture.service.list_items(task.id()).await?;
    eyre::ensure!(listed == updated.items(), "stored items diverge");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_item_list_clears_items(fixture: Fixture) -> Result<(), eyre::Report> {
    let task = create_todo(&fixture, &["a", "b"]).await?;

    let updated = fixture
        .service
        .update_task(task.id(), SaveTaskRequest::new("Integration task"))
        .await?;

    eyre::ensure!(updated.items().is_empty(), "items were not cleared");
    eyre::ensure!(
        fixture.service.list_items(task.id()).await?.is_empty(),
        "stored items were not cleared"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_replaces_references(fixture: Fixture) -> Result<(), eyre::Report> {
    let tag = TagId::new();
    let hashtag = HashtagId::new();
    fixture.references.add_tag(tag);
    fixture.references.add_hashtag(hashtag);
    let task = create_todo(&fixture, &[]).await?;
    let request = SaveTaskRequest::new("Tagged")
        .with_description("now filed")
        .with_tag(tag)
        .with_hashtags([hashtag]);

    let updated = fixture.service.update_task(task.id(), request).await?;

    eyre::ensure!(updated.tag() == Some(tag), "tag not applied");
    eyre::ensure!(updated.hashtags() == [hashtag], "hashtags not applied");
    eyre::ensure!(updated.description() == Some("now filed"), "description lost");
    let by_tag = fixture.service.find_all_by_tags(&[tag]).await?;
    eyre::ensure!(
        by_tag.iter().map(|summary| summary.id).eq([task.id()]),
        "tag listing mismatch"
    );
    Ok(())
}

#[rstest]
#[case::lower_case_status("done", Some("2026-12-01"))]
#[case::progress_without_deadline("PROGRESS", None)]
#[case::empty_deadline("TODO", Some(""))]
#[case::impossible_date("TODO", Some("2026-02-30"))]
#[tokio::test(flavor = "multi_thread")]
async fn invalid_status_or_deadline_writes_nothing(
    fixture: Fixture,
    #[case] status: &str,
    #[case] deadline: Option<&str>,
) -> Result<(), eyre::Report> {
    let task = create_todo(&fixture, &["a"]).await?;
    let mut request = SaveTaskRequest::new("Changed")
        .with_status(status)
        .with_items([TaskItemInput::new("x", false)]);
    if let Some(raw) = deadline {
        request = request.with_deadline(raw);
    }

    let Err(err) = fixture.service.update_task(task.id(), request).await else {
        eyre::bail!("update should be rejected");
    };

    eyre::ensure!(
        err.failure_kind() == FailureKind::ExpectationFailed,
        "unexpected failure: {err}"
    );
    let stored = fixture.service.get_by_id(task.id()).await?;
    eyre::ensure!(stored == task, "stored task changed after rejection");
    Ok(())
}
