//! The guarded action runner every interactive feature is built on.

use std::{future::Future, panic::AssertUnwindSafe, sync::Arc};

use futures::FutureExt;
use tracing::{debug, error, info, warn};

use crate::{
    control::{Control, ControlSnapshot},
    feedback::{FeedbackSink, NotificationRequest},
    result::ActionResult,
};

pub const ACTION_UNAVAILABLE_MESSAGE: &str = "Action unavailable!";

/// Which controls an action guards and how it reports success.
pub struct ActionSpec<'a> {
    name: &'a str,
    trigger: &'a Control,
    dependents: &'a [Control],
    success_message: Option<String>,
}

impl<'a> ActionSpec<'a> {
    /// A silent-on-success action triggered by `trigger`.
    pub fn new(name: &'a str, trigger: &'a Control) -> Self {
        Self {
            name,
            trigger,
            dependents: &[],
            success_message: None,
        }
    }

    /// Controls disabled while the action is in flight and enabled once it
    /// succeeds. On failure they go back to whatever they were before.
    pub fn dependents(mut self, controls: &'a [Control]) -> Self {
        self.dependents = controls;
        self
    }

    pub fn success_message(mut self, message: impl Into<String>) -> Self {
        self.success_message = Some(message.into());
        self
    }
}

#[derive(Clone)]
pub struct ActionController {
    sink: Arc<dyn FeedbackSink>,
}

impl ActionController {
    pub fn new(sink: Arc<dyn FeedbackSink>) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &Arc<dyn FeedbackSink> {
        &self.sink
    }

    /// Lock, call, apply on success, unlock, notify.
    ///
    /// `call` is not polled when the trigger is disabled; the action is
    /// ignored and reported as unavailable without a notification. A panic
    /// inside `call` is reported as a network failure. The trigger is
    /// unlocked even if `apply` panics.
    pub async fn run<T, Fut, A>(&self, spec: ActionSpec<'_>, call: Fut, apply: A) -> ActionResult<T>
    where
        Fut: Future<Output = ActionResult<T>>,
        A: FnOnce(&T),
    {
        let Some(in_flight) = spec.trigger.begin() else {
            debug!(action = spec.name, control = spec.trigger.name(), "trigger disabled; ignored");
            return ActionResult::validation(ACTION_UNAVAILABLE_MESSAGE);
        };
        let dependents = ControlSnapshot::lock(spec.dependents);
        debug!(action = spec.name, "action started");

        let result = match AssertUnwindSafe(call).catch_unwind().await {
            Ok(result) => result,
            Err(_) => {
                error!(action = spec.name, "action call panicked");
                ActionResult::network()
            }
        };

        match result.data() {
            Some(data) => {
                apply(data);
                dependents.enable_all();
            }
            // Dropping the snapshot puts dependents back as they were.
            None => drop(dependents),
        }
        drop(in_flight);

        match result.error() {
            Some(err) => {
                warn!(
                    action = spec.name,
                    status = result.status(),
                    error = %err,
                    "action failed"
                );
                self.sink.notify(NotificationRequest::error(err.message()));
            }
            None => {
                info!(action = spec.name, status = result.status(), "action succeeded");
                if let Some(message) = spec.success_message {
                    self.sink.notify(NotificationRequest::success(message));
                }
            }
        }

        result
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
