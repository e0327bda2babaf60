use serde::{Deserialize, Serialize};

/// Failure body returned by the backends on non-2xx responses.
///
/// The summarizer sends `{"error": ...}`; the weather service also echoes the
/// numeric status as `{"error": ..., "status": 404}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>, status: u16) -> Self {
        Self {
            error: Some(error.into()),
            status: Some(status),
        }
    }

    /// Each field is read on its own; a field of the wrong type is treated as
    /// missing without discarding the other.
    pub fn from_json(value: &serde_json::Value) -> Self {
        Self {
            error: value
                .get("error")
                .and_then(serde_json::Value::as_str)
                .map(str::to_string),
            status: value
                .get("status")
                .and_then(serde_json::Value::as_u64)
                .and_then(|status| u16::try_from(status).ok()),
        }
    }

    /// Error text from the body, falling back to `fallback` when missing or blank.
    pub fn message_or(&self, fallback: &str) -> String {
        match self.error.as_deref().map(str::trim) {
            Some(message) if !message.is_empty() => message.to_string(),
            _ => fallback.to_string(),
        }
    }
}
