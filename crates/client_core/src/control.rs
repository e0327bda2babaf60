//! Interactive controls and their per-control action state.

use std::{fmt, sync::Arc, time::Duration};

use parking_lot::Mutex;
use tracing::debug;

use crate::LABEL_RESTORE_DELAY;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiActionState {
    Idle,
    InFlight,
    /// Settled, enabled again, still showing its feedback label.
    Cooldown,
}

#[derive(Debug, Clone)]
struct FeedbackLabel {
    label: String,
    restore_after: Duration,
}

#[derive(Debug)]
struct ControlInner {
    state: UiActionState,
    /// Disabled by something other than its own action (a dependent lock, a guard).
    disabled: bool,
    label: String,
    generation: u64,
}

/// A button-like control. Cloning yields another handle to the same control.
#[derive(Clone)]
pub struct Control {
    name: Arc<str>,
    idle_label: Arc<str>,
    feedback: Option<FeedbackLabel>,
    inner: Arc<Mutex<ControlInner>>,
}

impl fmt::Debug for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("Control")
            .field("name", &self.name)
            .field("state", &inner.state)
            .field("disabled", &inner.disabled)
            .field("label", &inner.label)
            .finish()
    }
}

impl Control {
    pub fn new(name: &str, label: &str) -> Self {
        Self {
            name: Arc::from(name),
            idle_label: Arc::from(label),
            feedback: None,
            inner: Arc::new(Mutex::new(ControlInner {
                state: UiActionState::Idle,
                disabled: false,
                label: label.to_string(),
                generation: 0,
            })),
        }
    }

    /// Show `label` once an action settles, then restore the idle label after
    /// the standard delay.
    pub fn with_feedback_label(self, label: &str) -> Self {
        self.with_feedback_label_after(label, LABEL_RESTORE_DELAY)
    }

    pub fn with_feedback_label_after(mut self, label: &str, restore_after: Duration) -> Self {
        self.feedback = Some(FeedbackLabel {
            label: label.to_string(),
            restore_after,
        });
        self
    }

    pub fn disabled(self) -> Self {
        self.set_disabled(true);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> UiActionState {
        self.inner.lock().state
    }

    pub fn label(&self) -> String {
        self.inner.lock().label.clone()
    }

    pub fn is_enabled(&self) -> bool {
        let inner = self.inner.lock();
        inner.state != UiActionState::InFlight && !inner.disabled
    }

    pub fn set_disabled(&self, disabled: bool) {
        self.inner.lock().disabled = disabled;
    }

    pub(crate) fn is_externally_disabled(&self) -> bool {
        self.inner.lock().disabled
    }

    /// Move Idle/Cooldown to InFlight. `None` when the control cannot fire.
    pub(crate) fn begin(&self) -> Option<InFlightGuard> {
        let mut inner = self.inner.lock();
        if inner.state == UiActionState::InFlight || inner.disabled {
            return None;
        }
        inner.state = UiActionState::InFlight;
        inner.label = self.idle_label.to_string();
        inner.generation += 1;
        Some(InFlightGuard {
            control: self.clone(),
        })
    }

    fn settle(&self) {
        let Some(feedback) = &self.feedback else {
            let mut inner = self.inner.lock();
            inner.state = UiActionState::Idle;
            return;
        };

        let generation = {
            let mut inner = self.inner.lock();
            inner.state = UiActionState::Cooldown;
            inner.label = feedback.label.clone();
            inner.generation
        };

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            self.restore(generation);
            return;
        };
        let control = self.clone();
        let delay = feedback.restore_after;
        runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            control.restore(generation);
        });
    }

    fn restore(&self, generation: u64) {
        let mut inner = self.inner.lock();
        if inner.generation != generation || inner.state != UiActionState::Cooldown {
            debug!(control = %self.name, "stale label restore skipped");
            return;
        }
        inner.state = UiActionState::Idle;
        inner.label = self.idle_label.to_string();
    }
}

/// Returns the control to an enabled state when dropped, including on unwind.
#[must_use = "dropping the guard immediately unlocks the control"]
pub(crate) struct InFlightGuard {
    control: Control,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.control.settle();
    }
}

/// Disabled flags of a set of controls, captured before an action locks them.
///
/// Dropping an unconsumed snapshot restores the captured flags, so an unwind
/// out of the action leaves dependents as they were.
pub(crate) struct ControlSnapshot {
    entries: Vec<(Control, bool)>,
}

impl ControlSnapshot {
    pub(crate) fn lock(controls: &[Control]) -> Self {
        let entries = controls
            .iter()
            .map(|control| {
                let was_disabled = control.is_externally_disabled();
                control.set_disabled(true);
                (control.clone(), was_disabled)
            })
            .collect();
        Self { entries }
    }

    pub(crate) fn enable_all(mut self) {
        for (control, _) in self.entries.drain(..) {
            control.set_disabled(false);
        }
    }
}

impl Drop for ControlSnapshot {
    fn drop(&mut self) {
        for (control, was_disabled) in self.entries.drain(..) {
            control.set_disabled(was_disabled);
        }
    }
}
