//! JSON-over-HTTP clients for the summarizer and weather backends.

use anyhow::{bail, Context};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use shared::{
    domain::{SummaryHash, SummaryId},
    error::ErrorBody,
    protocol::{SaveSummaryRequest, SummarizeRequest, SummarizeResponse, WeatherReport},
};
use tracing::{debug, warn};
use url::Url;

use crate::result::{ActionError, ActionResult, SERVER_ERROR_MESSAGE};

#[async_trait]
pub trait SummarizerApi: Send + Sync {
    async fn summarize(&self, text: &str) -> ActionResult<SummarizeResponse>;
    async fn save(&self, summary: &str, hash: &SummaryHash) -> ActionResult<()>;
    async fn delete(&self, id: &SummaryId) -> ActionResult<()>;
}

#[async_trait]
pub trait WeatherApi: Send + Sync {
    async fn weather(&self, city: &str) -> ActionResult<WeatherReport>;
}

/// One backend base URL; requests never error past this type, every failure
/// comes back as an [`ActionResult`].
#[derive(Clone)]
pub struct HttpBackend {
    http: Client,
    base_url: Url,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: &str) -> anyhow::Result<Self> {
        let base_url =
            Url::parse(base_url).with_context(|| format!("invalid backend url '{base_url}'"))?;
        if base_url.cannot_be_a_base() {
            bail!("backend url '{base_url}' cannot carry a path");
        }
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Base URL with `segments` appended, each percent-encoded as one segment.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

#[async_trait]
impl SummarizerApi for HttpBackend {
    async fn summarize(&self, text: &str) -> ActionResult<SummarizeResponse> {
        let url = self.endpoint(&["summarize"]);
        debug!(%url, chars = text.chars().count(), "requesting summary");
        let response = self
            .http
            .post(url)
            .json(&SummarizeRequest {
                text: text.to_string(),
            })
            .send()
            .await;
        read_json(response).await
    }

    async fn save(&self, summary: &str, hash: &SummaryHash) -> ActionResult<()> {
        let url = self.endpoint(&["save"]);
        debug!(%url, %hash, "saving summary");
        let response = self
            .http
            .post(url)
            .json(&SaveSummaryRequest {
                summary: summary.to_string(),
                hash: hash.clone(),
            })
            .send()
            .await;
        read_ack(response).await
    }

    async fn delete(&self, id: &SummaryId) -> ActionResult<()> {
        let url = self.endpoint(&["delete", id.as_str()]);
        debug!(%url, "deleting summary");
        let response = self.http.delete(url).send().await;
        read_ack(response).await
    }
}

#[async_trait]
impl WeatherApi for HttpBackend {
    async fn weather(&self, city: &str) -> ActionResult<WeatherReport> {
        let url = self.endpoint(&["weather", city]);
        debug!(%url, "requesting weather");
        let response = self.http.get(url).send().await;
        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(
    response: Result<Response, reqwest::Error>,
) -> ActionResult<T> {
    let response = match response {
        Ok(response) => response,
        Err(err) => {
            warn!(error = %err, "request did not reach the backend");
            return ActionResult::network();
        }
    };

    let status = response.status();
    let body = response.json::<serde_json::Value>().await.ok();
    if !status.is_success() {
        return server_failure(status.as_u16(), body.as_ref());
    }

    match body.map(serde_json::from_value::<T>) {
        Some(Ok(data)) => ActionResult::success(status.as_u16(), data),
        Some(Err(err)) => {
            warn!(error = %err, "unexpected response body");
            ActionResult::network()
        }
        None => {
            warn!(status = status.as_u16(), "response body is not json");
            ActionResult::network()
        }
    }
}

/// Like [`read_json`] for endpoints whose success body carries nothing we use.
async fn read_ack(response: Result<Response, reqwest::Error>) -> ActionResult<()> {
    let response = match response {
        Ok(response) => response,
        Err(err) => {
            warn!(error = %err, "request did not reach the backend");
            return ActionResult::network();
        }
    };

    let status = response.status();
    if status.is_success() {
        return ActionResult::success(status.as_u16(), ());
    }
    let body = response.json::<serde_json::Value>().await.ok();
    server_failure(status.as_u16(), body.as_ref())
}

fn server_failure<T>(http_status: u16, body: Option<&serde_json::Value>) -> ActionResult<T> {
    let body = body.map(ErrorBody::from_json).unwrap_or_default();
    let status = body.status.unwrap_or(http_status);
    ActionResult::failure(ActionError::server(
        status,
        body.message_or(SERVER_ERROR_MESSAGE),
    ))
}

#[cfg(test)]
#[path = "tests/backend_tests.rs"]
mod tests;
