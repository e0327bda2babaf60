//! Transient user feedback: the snackbar and the sink trait actions report to.

use std::{sync::Arc, time::Duration};

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::NOTIFICATION_DURATION;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    pub message: String,
    pub is_error: bool,
    pub duration: Duration,
}

impl NotificationRequest {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: false,
            duration: NOTIFICATION_DURATION,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: true,
            duration: NOTIFICATION_DURATION,
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

/// Where actions send their outcome messages.
pub trait FeedbackSink: Send + Sync {
    fn notify(&self, request: NotificationRequest);
    fn dismiss(&self);
}

/// Sink for components that report through their own view instead.
pub struct SilentSink;

impl FeedbackSink for SilentSink {
    fn notify(&self, request: NotificationRequest) {
        debug!(message = %request.message, is_error = request.is_error, "notification dropped");
    }

    fn dismiss(&self) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnackbarRole {
    Alert,
    Status,
}

impl SnackbarRole {
    pub fn as_str(self) -> &'static str {
        match self {
            SnackbarRole::Alert => "alert",
            SnackbarRole::Status => "status",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnackbarIcon {
    Warning,
    Check,
}

/// What the snackbar currently renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnackbarView {
    pub visible: bool,
    pub message: String,
    pub is_error: bool,
    pub role: SnackbarRole,
    pub icon: SnackbarIcon,
}

impl Default for SnackbarView {
    fn default() -> Self {
        Self {
            visible: false,
            message: String::new(),
            is_error: false,
            role: SnackbarRole::Status,
            icon: SnackbarIcon::Check,
        }
    }
}

#[derive(Default)]
struct SnackbarState {
    view: SnackbarView,
    generation: u64,
}

/// Single-slot notification display.
///
/// A new notification replaces whatever is showing. Each show starts its own
/// auto-dismiss timer; timers belonging to an older notification are no-ops.
#[derive(Clone, Default)]
pub struct Snackbar {
    state: Arc<Mutex<SnackbarState>>,
}

impl Snackbar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> SnackbarView {
        self.state.lock().view.clone()
    }

    pub fn is_visible(&self) -> bool {
        self.state.lock().view.visible
    }

    fn hide_if_current(&self, generation: u64) {
        let mut state = self.state.lock();
        if state.generation != generation {
            return;
        }
        state.view.visible = false;
        state.view.is_error = false;
    }
}

impl FeedbackSink for Snackbar {
    fn notify(&self, request: NotificationRequest) {
        let generation = {
            let mut state = self.state.lock();
            state.generation += 1;
            state.view = SnackbarView {
                visible: true,
                message: request.message,
                is_error: request.is_error,
                role: if request.is_error {
                    SnackbarRole::Alert
                } else {
                    SnackbarRole::Status
                },
                icon: if request.is_error {
                    SnackbarIcon::Warning
                } else {
                    SnackbarIcon::Check
                },
            };
            state.generation
        };

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            warn!("no async runtime; snackbar stays visible until dismissed");
            return;
        };
        let snackbar = self.clone();
        let duration = request.duration;
        runtime.spawn(async move {
            tokio::time::sleep(duration).await;
            snackbar.hide_if_current(generation);
        });
    }

    fn dismiss(&self) {
        let mut state = self.state.lock();
        state.generation += 1;
        state.view.visible = false;
        state.view.is_error = false;
    }
}

#[cfg(test)]
#[path = "tests/feedback_tests.rs"]
mod tests;
