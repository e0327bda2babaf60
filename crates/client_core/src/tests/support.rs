//! Test doubles shared by the unit test modules.

use std::sync::Arc;

use anyhow::anyhow;
use async_trait::async_trait;
use parking_lot::Mutex;
use shared::{
    domain::{CacheSource, SummaryHash, SummaryId},
    protocol::{SummarizeResponse, WeatherReport},
};

use crate::{
    backend::{SummarizerApi, WeatherApi},
    clipboard::ClipboardWriter,
    controller::ActionController,
    feedback::{FeedbackSink, NotificationRequest},
    result::ActionResult,
};

#[derive(Default)]
pub struct RecordingSink {
    notifications: Mutex<Vec<NotificationRequest>>,
}

impl RecordingSink {
    pub fn notifications(&self) -> Vec<NotificationRequest> {
        self.notifications.lock().clone()
    }

    pub fn last(&self) -> Option<NotificationRequest> {
        self.notifications.lock().last().cloned()
    }

    pub fn count(&self) -> usize {
        self.notifications.lock().len()
    }
}

impl FeedbackSink for RecordingSink {
    fn notify(&self, request: NotificationRequest) {
        self.notifications.lock().push(request);
    }

    fn dismiss(&self) {}
}

pub fn recording_controller() -> (ActionController, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    (ActionController::new(sink.clone()), sink)
}

pub fn summary_response(summary: &str, hash: &str) -> SummarizeResponse {
    SummarizeResponse {
        summary: summary.to_string(),
        hash: SummaryHash::new(hash),
        cached: Some(CacheSource::Fresh),
    }
}

pub struct MockSummarizer {
    summarize_result: Mutex<ActionResult<SummarizeResponse>>,
    save_result: Mutex<ActionResult<()>>,
    delete_result: Mutex<ActionResult<()>>,
    pub summarized: Mutex<Vec<String>>,
    pub saved: Mutex<Vec<(String, SummaryHash)>>,
    pub deleted: Mutex<Vec<SummaryId>>,
}

impl MockSummarizer {
    pub fn new() -> Self {
        Self {
            summarize_result: Mutex::new(ActionResult::success(200, summary_response("S", "H"))),
            save_result: Mutex::new(ActionResult::success(200, ())),
            delete_result: Mutex::new(ActionResult::success(200, ())),
            summarized: Mutex::new(Vec::new()),
            saved: Mutex::new(Vec::new()),
            deleted: Mutex::new(Vec::new()),
        }
    }

    pub fn summarize_returns(self, result: ActionResult<SummarizeResponse>) -> Self {
        *self.summarize_result.lock() = result;
        self
    }

    pub fn set_summarize_result(&self, result: ActionResult<SummarizeResponse>) {
        *self.summarize_result.lock() = result;
    }

    pub fn save_returns(self, result: ActionResult<()>) -> Self {
        *self.save_result.lock() = result;
        self
    }

    pub fn delete_returns(self, result: ActionResult<()>) -> Self {
        *self.delete_result.lock() = result;
        self
    }

    pub fn call_count(&self) -> usize {
        self.summarized.lock().len() + self.saved.lock().len() + self.deleted.lock().len()
    }
}

#[async_trait]
impl SummarizerApi for MockSummarizer {
    async fn summarize(&self, text: &str) -> ActionResult<SummarizeResponse> {
        self.summarized.lock().push(text.to_string());
        self.summarize_result.lock().clone()
    }

    async fn save(&self, summary: &str, hash: &SummaryHash) -> ActionResult<()> {
        self.saved.lock().push((summary.to_string(), hash.clone()));
        self.save_result.lock().clone()
    }

    async fn delete(&self, id: &SummaryId) -> ActionResult<()> {
        self.deleted.lock().push(id.clone());
        self.delete_result.lock().clone()
    }
}

pub fn paris_report() -> WeatherReport {
    WeatherReport {
        city: "Paris".into(),
        icon: "04d".into(),
        temperature: "21.5°C".into(),
        condition: "broken clouds".into(),
        humidity: "40%".into(),
        wind_speed: "3.1 km/h".into(),
    }
}

pub struct MockWeather {
    result: ActionResult<WeatherReport>,
    pub cities: Mutex<Vec<String>>,
}

impl MockWeather {
    pub fn returning(result: ActionResult<WeatherReport>) -> Self {
        Self {
            result,
            cities: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl WeatherApi for MockWeather {
    async fn weather(&self, city: &str) -> ActionResult<WeatherReport> {
        self.cities.lock().push(city.to_string());
        self.result.clone()
    }
}

#[derive(Default)]
pub struct MockClipboard {
    fail: bool,
    pub written: Mutex<Vec<String>>,
}

impl MockClipboard {
    pub fn failing() -> Self {
        Self {
            fail: true,
            written: Mutex::new(Vec::new()),
        }
    }
}

impl ClipboardWriter for MockClipboard {
    fn write_text(&self, text: &str) -> anyhow::Result<()> {
        if self.fail {
            return Err(anyhow!("clipboard unavailable"));
        }
        self.written.lock().push(text.to_string());
        Ok(())
    }
}
