//! HTTP backend for the real government APIs
//!
//! POSTs the service payload as JSON to `<endpoint><path>` and expects a JSON
//! object back. Every failure maps to a [`BackendError`], which the services
//! turn into `failed` results.

use std::time::Duration;

use log::debug;
use serde_json::Value;

use crate::core::ports::{BackendCall, BackendError, VerificationBackend};

/// Longest response body kept in a status error
const MAX_ERROR_BODY: usize = 512;

/// JSON-over-HTTP verification backend
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpBackend {
    /// Create a backend whose requests give up after `timeout`
    pub fn new(timeout: Duration) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("carerpassport/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| BackendError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, timeout })
    }

    fn map_send_error(&self, e: &reqwest::Error) -> BackendError {
        if e.is_timeout() {
            BackendError::Timeout(self.timeout)
        } else {
            BackendError::Transport(e.to_string())
        }
    }
}

impl VerificationBackend for HttpBackend {
    async fn call(&self, call: BackendCall<'_>) -> Result<Value, BackendError> {
        let url = call.url();
        debug!("POST {url} for {}", call.service());

        let response = self
            .client
            .post(&url)
            .json(call.payload)
            .send()
            .await
            .map_err(|e| self.map_send_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let mut body = response.text().await.unwrap_or_default();
            if body.len() > MAX_ERROR_BODY {
                let mut end = MAX_ERROR_BODY;
                while !body.is_char_boundary(end) {
                    end -= 1;
                }
                body.truncate(end);
            }
            return Err(BackendError::Status {
                service: call.service(),
                status: status.as_u16(),
                body,
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| BackendError::Malformed(format!("invalid JSON: {e}")))?;

        if !body.is_object() {
            return Err(BackendError::Malformed(format!(
                "{} response is not a JSON object",
                call.service()
            )));
        }
        Ok(body)
    }
}
