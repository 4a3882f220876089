//! DVSA MOT history lookup

use serde_json::json;

use super::{ResponseMapping, VerificationService, any_empty, check};
use crate::core::models::{
    DocumentData, VerificationKind, VerificationRequest, VerificationResult,
};
use crate::core::ports::{BackendCall, VerificationBackend};

const PATH: &str = "/trade/vehicles/mot-tests";

const INVALID_MESSAGE: &str = "Vehicle registration number is required";

const MAPPING: ResponseMapping = ResponseMapping {
    validity_key: "hasValidMOT",
    data_keys: &["make", "model", "colour", "fuelType", "motTests", "taxStatus"],
    expiry_key: Some("motExpiryDate"),
};

/// Checks that a vehicle holds a current MOT
#[derive(Debug, Clone)]
pub struct MotService {
    endpoint: String,
}

impl MotService {
    /// Create a service talking to `endpoint`
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for MotService {
    fn default() -> Self {
        Self::new(VerificationKind::Mot.default_endpoint())
    }
}

impl VerificationService for MotService {
    fn kind(&self) -> VerificationKind {
        VerificationKind::Mot
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

        let registration = match &request.document_data {
            DocumentData::Mot {
                registration_number,
                ..
            } if !any_empty(&[registration_number.as_str()]) => registration_number,
            _ => return VerificationResult::invalid(service, INVALID_MESSAGE),
        };

        let payload = json!({ "registration": registration });
        let call = BackendCall {
            kind: self.kind(),
            endpoint: &self.endpoint,
            path: PATH,
            payload: &payload,
        };

        check(backend, call, MAPPING).await
    }
}
