//! Business logic services
//!
//! - [`strategies`] - One verification service per issuing authority
//! - [`manager`] - Route a document type to its verification service
//! - [`readiness`] - Checklist summaries and urgency ordering

pub mod manager;
pub mod readiness;
pub mod strategies;

pub use manager::{ServiceEndpoints, VerificationManager};
pub use readiness::{ReadinessSummary, sort_by_urgency, urgent_documents};
pub use strategies::{
    DrivingLicenceService, MotService, NationalInsuranceService, RightToWorkService,
    VerificationService,
};
