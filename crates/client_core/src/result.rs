//! Outcome of a guarded UI action.

use thiserror::Error;

pub const NETWORK_ERROR_MESSAGE: &str = "Network error!";
pub const SERVER_ERROR_MESSAGE: &str = "Server error";
pub const VALIDATION_STATUS: u16 = 400;
pub const LOCAL_FAILURE_STATUS: u16 = 500;

/// Why an action failed. Every variant is terminal for the attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// A local precondition failed; no request was made.
    #[error("{message}")]
    Validation { message: String },
    /// A local side effect (clipboard, file write) failed after its
    /// preconditions held.
    #[error("{message}")]
    Local { message: String },
    /// The backend answered with a non-success status.
    #[error("{message}")]
    Server { status: u16, message: String },
    /// The request never reached a server or its response was unreadable.
    #[error("{message}")]
    Network { message: String },
}

impl ActionError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn local(message: impl Into<String>) -> Self {
        Self::Local {
            message: message.into(),
        }
    }

    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    pub fn network() -> Self {
        Self::Network {
            message: NETWORK_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn status(&self) -> u16 {
        match self {
            ActionError::Validation { .. } => VALIDATION_STATUS,
            ActionError::Local { .. } => LOCAL_FAILURE_STATUS,
            ActionError::Server { status, .. } => *status,
            ActionError::Network { .. } => 0,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ActionError::Validation { message }
            | ActionError::Local { message }
            | ActionError::Server { message, .. }
            | ActionError::Network { message } => message,
        }
    }
}

/// `{ok, status, data, error}` with the invariant that `error` is present iff
/// `ok` is false and `data` only when `ok` is true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResult<T> {
    status: u16,
    outcome: Result<T, ActionError>,
}

impl<T> ActionResult<T> {
    pub fn success(status: u16, data: T) -> Self {
        Self {
            status,
            outcome: Ok(data),
        }
    }

    /// Successful local computation that never touched the network.
    pub fn local(data: T) -> Self {
        Self::success(200, data)
    }

    pub fn failure(error: ActionError) -> Self {
        Self {
            status: error.status(),
            outcome: Err(error),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::failure(ActionError::validation(message))
    }

    pub fn local_failure(message: impl Into<String>) -> Self {
        Self::failure(ActionError::local(message))
    }

    pub fn network() -> Self {
        Self::failure(ActionError::network())
    }

    pub fn ok(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn data(&self) -> Option<&T> {
        self.outcome.as_ref().ok()
    }

    pub fn error(&self) -> Option<&ActionError> {
        self.outcome.as_ref().err()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error().map(ActionError::message)
    }

    pub fn into_data(self) -> Option<T> {
        self.outcome.ok()
    }

    pub fn into_result(self) -> Result<T, ActionError> {
        self.outcome
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ActionResult<U> {
        ActionResult {
            status: self.status,
            outcome: self.outcome.map(f),
        }
    }

    /// Replace the message of a server failure, keeping its status.
    pub fn map_server_error(self, message: impl Into<String>) -> Self {
        match self.outcome {
            Err(ActionError::Server { status, .. }) => {
                Self::failure(ActionError::server(status, message))
            }
            other => Self {
                status: self.status,
                outcome: other,
            },
        }
    }
}
