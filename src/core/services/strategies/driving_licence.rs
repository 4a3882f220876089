//! DVLA driver enquiry via licence number and check code

use serde_json::json;

use super::{ResponseMapping, VerificationService, any_empty, check};
use crate::core::models::{
    DocumentData, VerificationKind, VerificationRequest, VerificationResult,
};
use crate::core::ports::{BackendCall, VerificationBackend};

const PATH: &str = "/driver-enquiry-service";

const INVALID_MESSAGE: &str = "Licence number and check code are required";

const MAPPING: ResponseMapping = ResponseMapping {
    validity_key: "isValid",
    data_keys: &["licenceType", "categories", "endorsements", "points", "address"],
    expiry_key: Some("expiryDate"),
};

/// Verifies a UK driving licence; also serves the points check
#[derive(Debug, Clone)]
pub struct DrivingLicenceService {
    endpoint: String,
}

impl DrivingLicenceService {
    /// Create a service talking to `endpoint`
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for DrivingLicenceService {
    fn default() -> Self {
        Self::new(VerificationKind::DrivingLicence.default_endpoint())
    }
}

impl VerificationService for DrivingLicenceService {
    fn kind(&self) -> VerificationKind {
        VerificationKind::DrivingLicence
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

        // The registration number is only kept for cross-referencing; DVLA never sees it
        let (licence_number, check_code) = match &request.document_data {
            DocumentData::DrivingLicence {
                licence_number,
                check_code,
                ..
            } if !any_empty(&[licence_number.as_str(), check_code.as_str()]) => {
                (licence_number, check_code)
            },
            _ => return VerificationResult::invalid(service, INVALID_MESSAGE),
        };

        let payload = json!({
            "licenceNumber": licence_number,
            "checkCode": check_code,
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
