//! Writes summaries to disk as timestamped text files.

use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::result::ActionResult;

pub const NO_SUMMARY_MESSAGE: &str = "No summary found!";
pub const DOWNLOADED_MESSAGE: &str = "Summary downloaded!";
const DOWNLOAD_FAILED_MESSAGE: &str = "Download failed!";

/// `summary-<unix millis>.txt`
pub fn summary_file_name(now: DateTime<Utc>) -> String {
    format!("summary-{}.txt", now.timestamp_millis())
}

#[derive(Debug, Clone)]
pub struct TextDownloader {
    dir: PathBuf,
}

impl TextDownloader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Blank text is rejected without touching the filesystem.
    pub fn download(&self, text: &str) -> ActionResult<PathBuf> {
        if text.trim().is_empty() {
            return ActionResult::validation(NO_SUMMARY_MESSAGE);
        }

        let path = self.dir.join(summary_file_name(Utc::now()));
        let written = fs::create_dir_all(&self.dir).and_then(|()| fs::write(&path, text));
        match written {
            Ok(()) => {
                info!(path = %path.display(), "summary written");
                ActionResult::local(path)
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to write summary");
                ActionResult::local_failure(DOWNLOAD_FAILED_MESSAGE)
            }
        }
    }
}
