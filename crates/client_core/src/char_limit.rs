use crate::{control::Control, MAX_INPUT_CHARS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharCounterView {
    pub text: String,
    pub danger: bool,
}

/// Mirrors input length into a counter and blocks the submit control past
/// the limit.
pub struct CharLimitGuard {
    max: usize,
    submit: Control,
    counter: CharCounterView,
}

impl CharLimitGuard {
    pub fn new(submit: Control) -> Self {
        Self::with_max(submit, MAX_INPUT_CHARS)
    }

    pub fn with_max(submit: Control, max: usize) -> Self {
        Self {
            max,
            submit,
            counter: CharCounterView {
                text: format!("0 / {max}"),
                danger: false,
            },
        }
    }

    /// Returns whether the limit is exceeded.
    pub fn on_input(&mut self, text: &str) -> bool {
        let length = text.chars().count();
        let exceeded = length > self.max;
        self.counter = CharCounterView {
            text: format!("{length} / {}", self.max),
            danger: exceeded,
        };
        self.submit.set_disabled(exceeded);
        exceeded
    }

    pub fn counter(&self) -> &CharCounterView {
        &self.counter
    }

    pub fn exceeded(&self) -> bool {
        self.counter.danger
    }
}
