//! Saved summaries with per-item copy, download, delete and expand controls.

use std::{path::PathBuf, sync::Arc};

use parking_lot::Mutex;
use shared::{domain::SummaryId, protocol::SavedSummary};
use tracing::debug;

use crate::{
    backend::SummarizerApi,
    clipboard::{copy_text, ClipboardWriter, COPIED_MESSAGE},
    collapse::CollapsibleCard,
    control::Control,
    controller::{ActionController, ActionSpec},
    download::{TextDownloader, DOWNLOADED_MESSAGE},
    feedback::NotificationRequest,
    result::ActionResult,
};

pub const DELETED_MESSAGE: &str = "Summary deleted!";
pub const NOT_FOUND_MESSAGE: &str = "Summary not found!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedItemView {
    pub summary: SavedSummary,
    pub card: CollapsibleCard,
}

struct SavedItem {
    summary: SavedSummary,
    card: CollapsibleCard,
    copy: Control,
    download: Control,
    delete: Control,
}

impl SavedItem {
    fn new(summary: SavedSummary, content_height: u32) -> Self {
        Self {
            summary,
            card: CollapsibleCard::measure(content_height),
            copy: Control::new("copy", "content_copy").with_feedback_label("check"),
            download: Control::new("download", "download").with_feedback_label("check"),
            delete: Control::new("delete", "delete").with_feedback_label("check"),
        }
    }
}

#[derive(Clone, Copy)]
enum ItemAction {
    Copy,
    Download,
    Delete,
}

pub struct LibraryPage {
    controller: ActionController,
    api: Arc<dyn SummarizerApi>,
    clipboard: Arc<dyn ClipboardWriter>,
    downloader: TextDownloader,
    items: Mutex<Vec<SavedItem>>,
}

impl LibraryPage {
    /// `measure` stands in for the rendered height of each summary.
    pub fn new(
        controller: ActionController,
        api: Arc<dyn SummarizerApi>,
        clipboard: Arc<dyn ClipboardWriter>,
        downloader: TextDownloader,
        summaries: Vec<SavedSummary>,
        measure: impl Fn(&str) -> u32,
    ) -> Self {
        let items = summaries
            .into_iter()
            .map(|summary| {
                let height = measure(&summary.summary);
                SavedItem::new(summary, height)
            })
            .collect();

        Self {
            controller,
            api,
            clipboard,
            downloader,
            items: Mutex::new(items),
        }
    }

    pub fn items(&self) -> Vec<SavedItemView> {
        self.items
            .lock()
            .iter()
            .map(|item| SavedItemView {
                summary: item.summary.clone(),
                card: item.card,
            })
            .collect()
    }

    pub fn contains(&self, id: &SummaryId) -> bool {
        self.items.lock().iter().any(|item| &item.summary.id == id)
    }

    /// Flip the expand state of one card; `None` for an unknown id.
    pub fn toggle(&self, id: &SummaryId) -> Option<bool> {
        let mut items = self.items.lock();
        let item = items.iter_mut().find(|item| &item.summary.id == id)?;
        Some(item.card.toggle())
    }

    pub fn control(&self, id: &SummaryId, name: &str) -> Option<Control> {
        let items = self.items.lock();
        let item = items.iter().find(|item| &item.summary.id == id)?;
        match name {
            "copy" => Some(item.copy.clone()),
            "download" => Some(item.download.clone()),
            "delete" => Some(item.delete.clone()),
            _ => None,
        }
    }

    fn lookup(&self, id: &SummaryId, action: ItemAction) -> Option<(Control, String)> {
        let items = self.items.lock();
        let item = items.iter().find(|item| &item.summary.id == id)?;
        let control = match action {
            ItemAction::Copy => &item.copy,
            ItemAction::Download => &item.download,
            ItemAction::Delete => &item.delete,
        };
        Some((control.clone(), item.summary.summary.clone()))
    }

    fn unknown_item<T>(&self, id: &SummaryId) -> ActionResult<T> {
        debug!(%id, "no saved summary with this id");
        self.controller
            .sink()
            .notify(NotificationRequest::error(NOT_FOUND_MESSAGE));
        ActionResult::validation(NOT_FOUND_MESSAGE)
    }

    pub async fn copy(&self, id: &SummaryId) -> ActionResult<()> {
        let Some((control, text)) = self.lookup(id, ItemAction::Copy) else {
            return self.unknown_item(id);
        };
        let spec = ActionSpec::new("copy_saved", &control).success_message(COPIED_MESSAGE);
        self.controller
            .run(
                spec,
                async { copy_text(self.clipboard.as_ref(), &text) },
                |_| {},
            )
            .await
    }

    pub async fn download(&self, id: &SummaryId) -> ActionResult<PathBuf> {
        let Some((control, text)) = self.lookup(id, ItemAction::Download) else {
            return self.unknown_item(id);
        };
        let spec = ActionSpec::new("download_saved", &control).success_message(DOWNLOADED_MESSAGE);
        self.controller
            .run(spec, async { self.downloader.download(&text) }, |_| {})
            .await
    }

    /// Removes the item from the view once the backend confirms.
    pub async fn delete(&self, id: &SummaryId) -> ActionResult<()> {
        let Some((control, _)) = self.lookup(id, ItemAction::Delete) else {
            return self.unknown_item(id);
        };
        let spec = ActionSpec::new("delete_saved", &control).success_message(DELETED_MESSAGE);
        let call = async {
            self.api
                .delete(id)
                .await
                .map_server_error(NOT_FOUND_MESSAGE)
        };
        self.controller
            .run(spec, call, |_| {
                self.items.lock().retain(|item| &item.summary.id != id);
            })
            .await
    }
}

/// Rough rendered height of `text` in layout units, for front-ends without a
/// layout engine.
pub fn estimate_content_height(text: &str) -> u32 {
    const CHARS_PER_LINE: usize = 80;
    const LINE_HEIGHT: u32 = 24;

    let lines: usize = text
        .lines()
        .map(|line| line.chars().count().div_ceil(CHARS_PER_LINE).max(1))
        .sum();
    u32::try_from(lines)
        .unwrap_or(u32::MAX)
        .saturating_mul(LINE_HEIGHT)
}

#[cfg(test)]
#[path = "tests/library_tests.rs"]
mod tests;
