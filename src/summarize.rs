use std::time::Duration;

use eyre::Result;
use log::debug;
use serde_json::{Number, Value};

use crate::SummaryResult;
use crate::error::{GENERIC_RATE_LIMIT_REASON, GENERIC_SERVICE_ERROR, RequestError};

/// Used when neither the CLI nor the config file names an endpoint
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/summarize";

/// Tells tunnelling proxies (ngrok) to skip their browser interstitial
const SKIP_WARNING_HEADER: &str = "ngrok-skip-browser-warning";

/// Client for the remote summarization endpoint
#[derive(Debug, Clone)]
pub struct SummaryClient {
    http: reqwest::Client,
    endpoint: String,
}

impl SummaryClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Build a client whose requests fail with a transport error after `timeout`
    pub fn with_timeout(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Request the summary for `video_id`. Issues exactly one HTTP request.
    pub async fn fetch(&self, video_id: &str) -> Result<SummaryResult, RequestError> {
        debug!("Requesting summary: {} video_id={video_id}", self.endpoint);

        let resp = self
            .http
            .get(&self.endpoint)
            .query(&[("video_id", video_id)])
            .header(SKIP_WARNING_HEADER, "true")
            .send()
            .await
            .map_err(|e| RequestError::NetworkFailure { reason: e.to_string() })?;

        let status = resp.status().as_u16();

        // text() honours the charset the server declares; this is the only decode of the body bytes
        let body = resp
            .text()
            .await
            .map_err(|e| RequestError::NetworkFailure { reason: e.to_string() })?;

        debug!("Summary service answered {status} ({} bytes)", body.len());
        classify(status, &body)
    }
}

/// Turn a status code and response body into a summary or a typed error.
///
/// The body is parsed once, before looking at the status.
pub fn classify(status: u16, body: &str) -> Result<SummaryResult, RequestError> {
    let parsed = serde_json::from_str::<Value>(body);

    if status == 429 {
        let data = parsed.unwrap_or(Value::Null);
        return Err(RequestError::RateLimited {
            retry_after_seconds: retry_after(&data),
            reason: error_field(&data).unwrap_or(GENERIC_RATE_LIMIT_REASON).to_string(),
        });
    }

    if (200..300).contains(&status) {
        let data = parsed.map_err(|e| RequestError::MalformedResponse {
            status,
            reason: e.to_string(),
        })?;
        let result: SummaryResult = serde_json::from_value(data).map_err(|e| RequestError::MalformedResponse {
            status,
            reason: e.to_string(),
        })?;
        return Ok(result);
    }

    let message = parsed
        .ok()
        .as_ref()
        .and_then(error_field)
        .unwrap_or(GENERIC_SERVICE_ERROR)
        .to_string();
    Err(RequestError::ServiceError { status, message })
}

fn error_field(data: &Value) -> Option<&str> {
    data.get("error").and_then(|e| e.as_str()).filter(|e| !e.is_empty())
}

/// The wait as the body states it; 0 when absent or not a number
fn retry_after(data: &Value) -> Number {
    match data.get("retry_after_seconds") {
        Some(Value::Number(n)) => n.clone(),
        _ => Number::from(0),
    }
}
