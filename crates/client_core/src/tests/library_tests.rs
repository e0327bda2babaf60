use std::fs;

use shared::domain::SummaryHash;

use super::*;
use crate::{
    result::ActionError,
    test_support::{recording_controller, MockClipboard, MockSummarizer, RecordingSink},
};

fn saved(id: &str, text: &str) -> SavedSummary {
    SavedSummary {
        id: SummaryId::new(id),
        hash: SummaryHash::new(format!("hash-{id}")),
        summary: text.to_string(),
        created_at: Some("2024-05-01 10:00".into()),
    }
}

struct Fixture {
    page: LibraryPage,
    api: Arc<MockSummarizer>,
    sink: Arc<RecordingSink>,
    dir: tempfile::TempDir,
}

fn fixture(api: MockSummarizer) -> Fixture {
    let (controller, sink) = recording_controller();
    let api = Arc::new(api);
    let dir = tempfile::tempdir().expect("tempdir");
    let page = LibraryPage::new(
        controller,
        api.clone(),
        Arc::new(MockClipboard::default()),
        TextDownloader::new(dir.path()),
        vec![saved("a", "short"), saved("b", &"long line ".repeat(200))],
        estimate_content_height,
    );
    Fixture {
        page,
        api,
        sink,
        dir,
    }
}

#[test]
fn cards_collapse_only_past_threshold() {
    let fx = fixture(MockSummarizer::new());
    let items = fx.page.items();

    let short = &items[0].card;
    assert!(!short.toggle_visible());
    assert!(!short.divider_visible());
    assert!(!short.is_collapsed());

    let long = &items[1].card;
    assert!(long.toggle_visible());
    assert!(long.is_collapsed());

    let b = SummaryId::new("b");
    assert_eq!(fx.page.toggle(&b), Some(true));
    assert_eq!(fx.page.toggle(&b), Some(false));
    assert_eq!(fx.page.toggle(&SummaryId::new("missing")), None);
}

#[test]
fn controls_are_looked_up_by_item_and_name() {
    let fx = fixture(MockSummarizer::new());
    let a = SummaryId::new("a");

    for name in ["copy", "download", "delete"] {
        let control = fx.page.control(&a, name).expect("control");
        assert_eq!(control.name(), name);
        assert!(control.is_enabled());
    }
    assert!(fx.page.control(&a, "share").is_none());
    assert!(fx.page.control(&SummaryId::new("missing"), "copy").is_none());
}

#[test]
fn height_estimate_grows_with_wrapped_lines() {
    assert_eq!(estimate_content_height("one line"), 24);
    assert_eq!(estimate_content_height(&"x".repeat(161)), 72);
    assert_eq!(estimate_content_height("a\nb\nc"), 72);
}

#[tokio::test]
async fn delete_removes_item_and_notifies() {
    let fx = fixture(MockSummarizer::new());
    let id = SummaryId::new("a");

    let result = fx.page.delete(&id).await;

    assert!(result.ok());
    assert_eq!(fx.api.deleted.lock().as_slice(), [id.clone()]);
    assert!(!fx.page.contains(&id));
    assert_eq!(fx.page.items().len(), 1);
    let note = fx.sink.last().expect("notification");
    assert_eq!(note.message, "Summary deleted!");
    assert!(!note.is_error);
}

#[tokio::test]
async fn failed_delete_keeps_item_and_reports_not_found() {
    let fx = fixture(
        MockSummarizer::new()
            .delete_returns(ActionResult::failure(ActionError::server(400, "Server error"))),
    );
    let id = SummaryId::new("a");

    let result = fx.page.delete(&id).await;

    assert!(!result.ok());
    assert_eq!(result.status(), 400);
    assert_eq!(result.error_message(), Some("Summary not found!"));
    assert!(fx.page.contains(&id));
    let note = fx.sink.last().expect("notification");
    assert_eq!(note.message, "Summary not found!");
    assert!(note.is_error);
    let delete = fx.page.control(&id, "delete").expect("control");
    assert!(delete.is_enabled());
}

#[tokio::test]
async fn delete_network_failure_keeps_network_message() {
    let fx = fixture(MockSummarizer::new().delete_returns(ActionResult::network()));
    let id = SummaryId::new("b");

    let result = fx.page.delete(&id).await;

    assert_eq!(result.error_message(), Some("Network error!"));
    assert!(fx.page.contains(&id));
}

#[tokio::test]
async fn unknown_item_fails_without_request() {
    let fx = fixture(MockSummarizer::new());

    let result = fx.page.delete(&SummaryId::new("gone")).await;

    assert_eq!(result.error_message(), Some("Summary not found!"));
    assert_eq!(fx.api.call_count(), 0);
    assert!(fx.sink.last().expect("notification").is_error);
}

#[tokio::test]
async fn download_and_copy_use_item_text() {
    let fx = fixture(MockSummarizer::new());
    let id = SummaryId::new("a");

    let path = fx.page.download(&id).await.into_data().expect("path");
    assert!(path.starts_with(fx.dir.path()));
    assert_eq!(fs::read_to_string(path).expect("read"), "short");

    assert!(fx.page.copy(&id).await.ok());
    let messages: Vec<_> = fx
        .sink
        .notifications()
        .into_iter()
        .map(|note| note.message)
        .collect();
    assert_eq!(messages, ["Summary downloaded!", "Copied to clipboard!"]);
}
