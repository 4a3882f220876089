//! HMRC National Insurance number check

use serde_json::json;

use super::{ResponseMapping, VerificationService, any_empty, check};
use crate::core::models::{
    DocumentData, VerificationKind, VerificationRequest, VerificationResult,
};
use crate::core::ports::{BackendCall, VerificationBackend};

const PATH: &str = "/individuals/details";

const INVALID_MESSAGE: &str = "All personal details are required for NI verification";

// HMRC reports no expiry for NI numbers
const MAPPING: ResponseMapping = ResponseMapping {
    validity_key: "isValid",
    data_keys: &["status", "category", "lastContribution"],
    expiry_key: None,
};

/// Verifies a National Insurance number against the holder's name and birth date
#[derive(Debug, Clone)]
pub struct NationalInsuranceService {
    endpoint: String,
}

impl NationalInsuranceService {
    /// Create a service talking to `endpoint`
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for NationalInsuranceService {
    fn default() -> Self {
        Self::new(VerificationKind::NationalInsurance.default_endpoint())
    }
}

impl VerificationService for NationalInsuranceService {
    fn kind(&self) -> VerificationKind {
        VerificationKind::NationalInsurance
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

        let payload = match &request.document_data {
            DocumentData::NationalInsurance {
                national_insurance_number,
                first_name,
                last_name,
                date_of_birth,
            } if !any_empty(&[
                national_insurance_number.as_str(),
                first_name.as_str(),
                last_name.as_str(),
                date_of_birth.as_str(),
            ]) =>
            {
                json!({
                    "nino": national_insurance_number,
                    "firstName": first_name,
                    "lastName": last_name,
                    "dateOfBirth": date_of_birth,
                })
            },
            _ => return VerificationResult::invalid(service, INVALID_MESSAGE),
        };

        let call = BackendCall {
            kind: self.kind(),
            endpoint: &self.endpoint,
            path: PATH,
            payload: &payload,
        };

        check(backend, call, MAPPING).await
    }
}
