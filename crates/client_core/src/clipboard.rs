use crate::result::ActionResult;

pub const COPIED_MESSAGE: &str = "Copied to clipboard!";
pub const COPY_FAILED_MESSAGE: &str = "Copy failed!";

/// System clipboard seam; front-ends plug in their platform clipboard.
pub trait ClipboardWriter: Send + Sync {
    fn write_text(&self, text: &str) -> anyhow::Result<()>;
}

pub(crate) fn copy_text(clipboard: &dyn ClipboardWriter, text: &str) -> ActionResult<()> {
    match clipboard.write_text(text) {
        Ok(()) => ActionResult::local(()),
        Err(err) => {
            tracing::warn!(error = %err, "clipboard write failed");
            ActionResult::local_failure(COPY_FAILED_MESSAGE)
        }
    }
}
