//! Integration tests for status-only updates.

use super::helpers::{Fixture, create_todo, fixture, item_pairs};
use chrono::NaiveDate;
use rstest::rstest;
use taskory::task::{domain::TaskStatus, services::FailureKind};

#[rstest]
#[case::backlog_discards_deadline("BACKLOG", Some("2026-12-01"), None)]
#[case::todo_keeps_deadline("TODO", Some("2026-12-01"), NaiveDate::from_ymd_opt(2026, 12, 1))]
#[case::done_keeps_deadline("DONE", Some("2026-12-31"), NaiveDate::from_ymd_opt(2026, 12, 31))]
#[tokio::test(flavor = "multi_thread")]
async fn status_update_follows_deadline_policy(
    fixture: Fixture,
    #[case] status: &str,
    #[case] deadline: Option<&str>,
    #[case] expected: Option<NaiveDate>,
) -> Result<(), eyre::Report> {
    let task = create_todo(&fixture, &["keep me"]).await?;

    let summary = fixture
        .service
        .update_status(task.id(), Some(status), deadline)
        .await?;

    eyre::ensure!(summary.status.as_str() == status, "status mismatch");
    eyre::ensure!(summary.deadline == expected, "deadline mismatch");
    let stored = fixture.service.get_by_id(task.id()).await?;
    eyre::ensure!(
        item_pairs(&stored) == vec![("keep me".to_owned(), false)],
        "status update touched items"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_status_is_rejected(fixture: Fixture) -> Result<(), eyre::Report> {
    let task = create_todo(&fixture, &[]).await?;

    let Err(err) = fixture
        .service
        .update_status(task.id(), Some("Todo"), Some("2026-12-01"))
        .await
    else {
        eyre::bail!("mixed-case status should be rejected");
    };

    eyre::ensure!(err.failure_kind() == FailureKind::ExpectationFailed, "{err}");
    let stored = fixture.service.get_by_id(task.id()).await?;
    eyre::ensure!(stored.status() == TaskStatus::Todo, "status changed");
    Ok(())
}
