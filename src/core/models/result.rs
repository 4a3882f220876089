//! Verification result model
//!
//! The normalized outcome shared by every verification service.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::VerificationStatus;
use super::ids::{random_base36, unix_millis};

/// Outcome of one verification attempt
///
/// `verification_id` and `verified_at` are generated when the result is built,
/// never reused between attempts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
    /// Whether the document was accepted
    pub success: bool,

    /// Normalized status
    pub status: VerificationStatus,

    /// Human-readable explanation
    pub message: String,

    /// Service-specific details (licence categories, visa type, MOT history...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    /// Document expiry date as reported by the authority
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,

    /// `<service>-<unix millis>-<random suffix>`
    pub verification_id: String,

    /// When this result was built (RFC 3339)
    pub verified_at: String,
}

impl VerificationResult {
    /// Create a result with a fresh id for the given service
    #[must_use]
    pub fn new(
        service_name: &str,
        success: bool,
        status: VerificationStatus,
        message: impl Into<String>,
    ) -> Self {
        Self::with_id(generate_verification_id(service_name), success, status, message)
    }

    fn with_id(
        verification_id: String,
        success: bool,
        status: VerificationStatus,
        message: impl Into<String>,
    ) -> Self {
        Self {
            success,
            status,
            message: message.into(),
            data: None,
            expiry_date: None,
            verification_id,
            verified_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// The request was incomplete; nothing was sent to the authority
    #[must_use]
    pub fn invalid(service_name: &str, message: impl Into<String>) -> Self {
        Self::new(service_name, false, VerificationStatus::Invalid, message)
    }

    /// The check was denied or could not be completed
    #[must_use]
    pub fn failed(service_name: &str, message: impl Into<String>) -> Self {
        Self::new(service_name, false, VerificationStatus::Failed, message)
    }

    /// No verification service exists for the document type
    #[must_use]
    pub fn no_service(document_type: &str) -> Self {
        Self::with_id(
            format!("no-service-{}", unix_millis()),
            false,
            VerificationStatus::Failed,
            format!("No verification service available for {document_type}"),
        )
    }

    /// Attach service-specific details
    #[must_use]
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Attach the document expiry date
    #[must_use]
    pub fn with_expiry_date(mut self, expiry_date: Option<String>) -> Self {
        self.expiry_date = expiry_date;
        self
    }
}

/// Generate a verification id: service name, timestamp and a 9 character suffix
#[must_use]
pub fn generate_verification_id(service_name: &str) -> String {
    format!("{service_name}-{}-{}", unix_millis(), random_base36(9))
}
