//! Headless client for the summarizer, task board and weather front-ends.
//!
//! Every interactive feature runs through [`ActionController::run`]: lock the
//! triggering control, await a backend or local call, apply the result to the
//! view on success, unlock, and report to a [`FeedbackSink`].

use std::time::Duration;

pub mod backend;
pub mod char_limit;
pub mod clipboard;
pub mod collapse;
pub mod control;
pub mod controller;
pub mod download;
pub mod feedback;
pub mod library;
pub mod result;
pub mod summarizer;
pub mod tasks;
pub mod weather;

pub use backend::{HttpBackend, SummarizerApi, WeatherApi};
pub use clipboard::ClipboardWriter;
pub use control::{Control, UiActionState};
pub use controller::{ActionController, ActionSpec};
pub use download::TextDownloader;
pub use feedback::{FeedbackSink, NotificationRequest, Snackbar, SnackbarView};
pub use library::LibraryPage;
pub use result::{ActionError, ActionResult};
pub use summarizer::SummarizerPage;
pub use tasks::TaskBoard;
pub use weather::WeatherWidget;

pub const MAX_INPUT_CHARS: usize = 5000;
pub const NOTIFICATION_DURATION: Duration = Duration::from_millis(3000);
pub const LABEL_RESTORE_DELAY: Duration = Duration::from_millis(1500);
/// Content taller than this (layout units) starts collapsed.
pub const COLLAPSE_THRESHOLD: u32 = 150;

#[cfg(test)]
#[path = "tests/support.rs"]
pub(crate) mod test_support;

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
