//! The summarizer page: text input, summarize button and the summary toolbar.

use std::{path::PathBuf, sync::Arc};

use parking_lot::Mutex;
use shared::{domain::SummaryHash, protocol::SummarizeResponse};
use tracing::info;

use crate::{
    backend::SummarizerApi,
    char_limit::{CharCounterView, CharLimitGuard},
    clipboard::{copy_text, ClipboardWriter, COPIED_MESSAGE},
    control::Control,
    controller::{ActionController, ActionSpec},
    download::{TextDownloader, DOWNLOADED_MESSAGE},
    result::ActionResult,
};

pub const NO_TEXT_MESSAGE: &str = "No text provided!";
pub const NO_SUMMARY_TO_SAVE_MESSAGE: &str = "No summary to save!";
pub const EMPTY_SUMMARY_MESSAGE: &str = "Summary is empty!";
pub const SAVED_MESSAGE: &str = "Summary saved!";

const COPY: usize = 0;
const SAVE: usize = 1;
const DOWNLOAD: usize = 2;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryCardView {
    pub text: String,
    pub hash: Option<SummaryHash>,
    pub visible: bool,
}

struct SummarizerView {
    input: String,
    limit: CharLimitGuard,
    loader_visible: bool,
    card: SummaryCardView,
}

pub struct SummarizerPage {
    controller: ActionController,
    api: Arc<dyn SummarizerApi>,
    clipboard: Arc<dyn ClipboardWriter>,
    downloader: TextDownloader,
    summarize_button: Control,
    tools: [Control; 3],
    view: Mutex<SummarizerView>,
}

impl SummarizerPage {
    pub fn new(
        controller: ActionController,
        api: Arc<dyn SummarizerApi>,
        clipboard: Arc<dyn ClipboardWriter>,
        downloader: TextDownloader,
    ) -> Self {
        let summarize_button = Control::new("summarize", "Summarize");
        let tools = [
            Control::new("copy", "content_copy")
                .with_feedback_label("check")
                .disabled(),
            Control::new("save", "bookmark_border")
                .with_feedback_label("check")
                .disabled(),
            Control::new("download", "download")
                .with_feedback_label("check")
                .disabled(),
        ];
        let limit = CharLimitGuard::new(summarize_button.clone());

        Self {
            controller,
            api,
            clipboard,
            downloader,
            summarize_button,
            tools,
            view: Mutex::new(SummarizerView {
                input: String::new(),
                limit,
                loader_visible: false,
                card: SummaryCardView::default(),
            }),
        }
    }

    pub fn summarize_button(&self) -> &Control {
        &self.summarize_button
    }

    pub fn copy_button(&self) -> &Control {
        &self.tools[COPY]
    }

    pub fn save_button(&self) -> &Control {
        &self.tools[SAVE]
    }

    pub fn download_button(&self) -> &Control {
        &self.tools[DOWNLOAD]
    }

    pub fn card(&self) -> SummaryCardView {
        self.view.lock().card.clone()
    }

    pub fn loader_visible(&self) -> bool {
        self.view.lock().loader_visible
    }

    pub fn counter(&self) -> CharCounterView {
        self.view.lock().limit.counter().clone()
    }

    pub fn input_text(&self) -> String {
        self.view.lock().input.clone()
    }

    /// Keystroke handler: stores the text and re-checks the character limit.
    pub fn input(&self, text: &str) {
        let mut view = self.view.lock();
        view.input = text.to_string();
        view.limit.on_input(text);
    }

    /// Shows an already generated summary and unlocks the toolbar, as a
    /// successful summarize would.
    pub fn open_summary(&self, text: &str, hash: Option<SummaryHash>) {
        self.view.lock().card = SummaryCardView {
            text: text.to_string(),
            hash,
            visible: true,
        };
        for tool in &self.tools {
            tool.set_disabled(false);
        }
    }

    pub async fn summarize(&self) -> ActionResult<SummarizeResponse> {
        let call = async {
            let text = self.view.lock().input.trim().to_string();
            if text.is_empty() {
                return ActionResult::validation(NO_TEXT_MESSAGE);
            }

            let card_was_visible = {
                let mut view = self.view.lock();
                view.loader_visible = true;
                std::mem::replace(&mut view.card.visible, false)
            };
            let result = self.api.summarize(&text).await;

            let mut view = self.view.lock();
            view.loader_visible = false;
            if !result.ok() {
                view.card.visible = card_was_visible;
            }
            result
        };

        let spec = ActionSpec::new("summarize", &self.summarize_button).dependents(&self.tools);
        self.controller
            .run(spec, call, |response: &SummarizeResponse| {
                if let Some(cached) = response.cached {
                    info!(hash = %response.hash, cached = cached.as_str(), "summary received");
                }
                self.view.lock().card = SummaryCardView {
                    text: response.summary.clone(),
                    hash: Some(response.hash.clone()),
                    visible: true,
                };
            })
            .await
    }

    pub async fn copy(&self) -> ActionResult<()> {
        let text = self.view.lock().card.text.clone();
        let spec =
            ActionSpec::new("copy_summary", &self.tools[COPY]).success_message(COPIED_MESSAGE);
        self.controller
            .run(
                spec,
                async { copy_text(self.clipboard.as_ref(), &text) },
                |_| {},
            )
            .await
    }

    pub async fn save(&self) -> ActionResult<()> {
        let spec = ActionSpec::new("save_summary", &self.tools[SAVE]).success_message(SAVED_MESSAGE);
        let call = async {
            let card = self.view.lock().card.clone();
            let Some(hash) = card.hash else {
                return ActionResult::validation(NO_SUMMARY_TO_SAVE_MESSAGE);
            };
            if card.text.is_empty() {
                return ActionResult::validation(EMPTY_SUMMARY_MESSAGE);
            }
            self.api.save(&card.text, &hash).await
        };
        self.controller.run(spec, call, |_| {}).await
    }

    pub async fn download(&self) -> ActionResult<PathBuf> {
        let text = self.view.lock().card.text.clone();
        let spec = ActionSpec::new("download_summary", &self.tools[DOWNLOAD])
            .success_message(DOWNLOADED_MESSAGE);
        self.controller
            .run(spec, async { self.downloader.download(&text) }, |_| {})
            .await
    }
}

#[cfg(test)]
#[path = "tests/summarizer_tests.rs"]
mod tests;
