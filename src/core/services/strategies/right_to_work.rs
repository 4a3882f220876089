//! Home Office right-to-work check via share code

use serde_json::json;

use super::{ResponseMapping, VerificationService, any_empty, check};
use crate::core::models::{
    DocumentData, VerificationKind, VerificationRequest, VerificationResult,
};
use crate::core::ports::{BackendCall, VerificationBackend};

const PATH: &str = "/check-immigration-status";

const INVALID_MESSAGE: &str = "Share code and date of birth are required";

const MAPPING: ResponseMapping = ResponseMapping {
    validity_key: "hasRightToWork",
    data_keys: &["visaType", "workRestrictions", "employer"],
    expiry_key: Some("expiryDate"),
};

/// Verifies a share code against the holder's date of birth
#[derive(Debug, Clone)]
pub struct RightToWorkService {
    endpoint: String,
}

impl RightToWorkService {
    /// Create a service talking to `endpoint`
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for RightToWorkService {
    fn default() -> Self {
        Self::new(VerificationKind::RightToWork.default_endpoint())
    }
}

impl VerificationService for RightToWorkService {
    fn kind(&self) -> VerificationKind {
        VerificationKind::RightToWork
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn verify<B: VerificationBackend>(
        &self,
        request: &VerificationRequest,
        backend: &B,
    ) -> VerificationResult {
        let service = self.kind().service_name();

        let (share_code, date_of_birth) = match &request.document_data {
            DocumentData::RightToWork {
                share_code,
                date_of_birth,
            } if !any_empty(&[share_code.as_str(), date_of_birth.as_str()]) => {
                (share_code, date_of_birth)
            },
            _ => return VerificationResult::invalid(service, INVALID_MESSAGE),
        };

        let payload = json!({
            "shareCode": share_code,
            "dateOfBirth": date_of_birth,
        });
        let call = BackendCall {
            kind: self.kind(),
            endpoint: &self.endpoint,
            path: PATH,
            payload: &payload,
        };

        check(backend, call, MAPPING).await
    }
}
