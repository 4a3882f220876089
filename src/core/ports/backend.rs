//! Verification backend port
//!
//! Defines the single call-shaped seam between verification services and the
//! government APIs they consult (Home Office, DVLA, HMRC, DVSA).

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use crate::core::models::VerificationKind;

/// One request to an issuing authority
#[derive(Debug, Clone, Copy)]
pub struct BackendCall<'a> {
    /// Which service is calling
    pub kind: VerificationKind,
    /// Base address of the authority's API
    pub endpoint: &'a str,
    /// Path under the endpoint
    pub path: &'a str,
    /// JSON body to send
    pub payload: &'a Value,
}

impl BackendCall<'_> {
    /// Service name of the caller
    #[must_use]
    pub const fn service(&self) -> &'static str {
        self.kind.service_name()
    }

    /// Full URL: endpoint joined with path
    #[must_use]
    pub fn url(&self) -> String {
        format!("{}{}", self.endpoint.trim_end_matches('/'), self.path)
    }
}

/// Why a backend call produced no usable response
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The request never completed (DNS, connect, TLS, reset)
    #[error("API call failed: {0}")]
    Transport(String),

    /// The authority answered with a non-success status
    #[error("API call failed: {service} returned HTTP {status}: {body}")]
    Status {
        /// Service name of the caller
        service: &'static str,
        /// HTTP status code
        status: u16,
        /// Response body, possibly truncated
        body: String,
    },

    /// The response was not the JSON object the service expects
    #[error("malformed response: {0}")]
    Malformed(String),

    /// No response within the configured timeout
    #[error("API call timed out after {0:?}")]
    Timeout(Duration),
}

/// Backend that performs the external check
///
/// Implementations must be safe to share between concurrent verifications.
pub trait VerificationBackend: Send + Sync {
    /// Send `call` and return the authority's JSON response
    fn call(
        &self,
        call: BackendCall<'_>,
    ) -> impl Future<Output = Result<Value, BackendError>> + Send;
}

impl<B: VerificationBackend> VerificationBackend for Arc<B> {
    fn call(
        &self,
        call: BackendCall<'_>,
    ) -> impl Future<Output = Result<Value, BackendError>> + Send {
        (**self).call(call)
    }
}

impl<B: VerificationBackend> VerificationBackend for &B {
    fn call(
        &self,
        call: BackendCall<'_>,
    ) -> impl Future<Output = Result<Value, BackendError>> + Send {
        (**self).call(call)
    }
}
