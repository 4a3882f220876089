//! Verification dispatcher
//!
//! Routes a document type to its verification service. The registry is the
//! exhaustive match in [`DocumentType::verification_kind`] plus one service
//! per [`VerificationKind`], built once when the manager is constructed.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::strategies::{
    DrivingLicenceService, MotService, NationalInsuranceService, RightToWorkService,
    VerificationService,
};
use crate::core::models::{
    DocumentType, VerificationKind, VerificationRequest, VerificationResult, required_fields_for,
    verification_kind_for,
};
use crate::core::ports::VerificationBackend;

/// API base address for each verification service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceEndpoints {
    /// Home Office immigration status API
    pub right_to_work: String,
    /// DVLA driver enquiry API
    pub driving_licence: String,
    /// HMRC individual details API
    pub national_insurance: String,
    /// DVSA MOT history API
    pub mot: String,
}

impl Default for ServiceEndpoints {
    fn default() -> Self {
        Self {
            right_to_work: VerificationKind::RightToWork.default_endpoint().to_string(),
            driving_licence: VerificationKind::DrivingLicence.default_endpoint().to_string(),
            national_insurance: VerificationKind::NationalInsurance.default_endpoint().to_string(),
            mot: VerificationKind::Mot.default_endpoint().to_string(),
        }
    }
}

/// Owns the verification services and the backend they call
#[derive(Debug)]
pub struct VerificationManager<B> {
    backend: B,
    right_to_work: RightToWorkService,
    driving_licence: DrivingLicenceService,
    national_insurance: NationalInsuranceService,
    mot: MotService,
}

impl<B: VerificationBackend> VerificationManager<B> {
    /// Create a manager using the production endpoints
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self::with_endpoints(backend, &ServiceEndpoints::default())
    }

    /// Create a manager with explicit endpoints
    #[must_use]
    pub fn with_endpoints(backend: B, endpoints: &ServiceEndpoints) -> Self {
        Self {
            backend,
            right_to_work: RightToWorkService::new(&endpoints.right_to_work),
            driving_licence: DrivingLicenceService::new(&endpoints.driving_licence),
            national_insurance: NationalInsuranceService::new(&endpoints.national_insurance),
            mot: MotService::new(&endpoints.mot),
        }
    }

    /// The backend shared by all services
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Verify `request` as a `document_type` document
    ///
    /// Unregistered types yield a `failed` result without calling the backend.
    /// Otherwise the service's result is returned unchanged.
    pub async fn verify_document(
        &self,
        document_type: &str,
        request: &VerificationRequest,
    ) -> VerificationResult {
        let Some(kind) = verification_kind_for(document_type) else {
            info!("No verification service for {document_type}");
            return VerificationResult::no_service(document_type);
        };

        debug!("Dispatching {document_type} to {kind}");
        let result = match kind {
            VerificationKind::RightToWork => {
                self.right_to_work.verify(request, &self.backend).await
            },
            VerificationKind::DrivingLicence => {
                self.driving_licence.verify(request, &self.backend).await
            },
            VerificationKind::NationalInsurance => {
                self.national_insurance.verify(request, &self.backend).await
            },
            VerificationKind::Mot => self.mot.verify(request, &self.backend).await,
        };

        info!("{document_type} verification {}: {}", result.status, result.verification_id);
        result
    }

    /// Verify a request using its own document type
    pub async fn verify(&self, request: &VerificationRequest) -> VerificationResult {
        self.verify_document(&request.document_type, request).await
    }

    /// Whether uploads of `document_type` go through verification first
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn is_verification_required(&self, document_type: &str) -> bool {
        verification_kind_for(document_type).is_some()
    }

    /// Fields the verification form must collect for `document_type`
    ///
    /// Empty for unknown and unverifiable types.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn required_fields(&self, document_type: &str) -> Vec<&'static str> {
        required_fields_for(document_type).to_vec()
    }

    /// Registered document types, in catalog order
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn verifiable_types(&self) -> Vec<DocumentType> {
        DocumentType::ALL.into_iter().filter(|t| t.is_verifiable()).collect()
    }

    /// Endpoint configured for a service
    #[must_use]
    pub fn endpoint(&self, kind: VerificationKind) -> &str {
        match kind {
            VerificationKind::RightToWork => self.right_to_work.endpoint(),
            VerificationKind::DrivingLicence => self.driving_licence.endpoint(),
            VerificationKind::NationalInsurance => self.national_insurance.endpoint(),
            VerificationKind::Mot => self.mot.endpoint(),
        }
    }
}
