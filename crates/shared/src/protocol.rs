use serde::{Deserialize, Serialize};

use crate::domain::{CacheSource, SummaryHash, SummaryId, TaskId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeRequest {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
    pub hash: SummaryHash,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cached: Option<CacheSource>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveSummaryRequest {
    pub summary: String,
    pub hash: SummaryHash,
}

/// A summary persisted in the backend library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSummary {
    pub id: SummaryId,
    pub hash: SummaryHash,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Weather fields as pre-formatted by the weather backend, e.g. `"21.5°C"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub city: String,
    pub icon: String,
    pub temperature: String,
    pub condition: String,
    pub humidity: String,
    pub wind_speed: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: TaskId,
    pub task: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}
