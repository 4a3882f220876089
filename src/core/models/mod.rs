//! Domain models for carerpassport
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`DocumentType`] - The catalog of uploadable credentials
//! - [`VerificationRequest`] - "Check these details with the authority"
//! - [`VerificationResult`] - "This is what the authority said"
//! - [`VerificationStatus`] - The normalized outcome
//! - [`DocumentStatus`] - Where a tracked document stands
//! - [`AccessCode`] - A time-limited share code for an employer

mod access_code;
mod document_status;
mod document_type;
mod ids;
mod request;
mod result;
mod status;

pub use access_code::{
    AccessCode, AccessCodeError, DEFAULT_SHARE_BASE_URL, DEFAULT_VALIDITY_DAYS,
};
pub use document_status::{DocumentStatus, TrackedDocument};
pub use document_type::{
    DocumentType, GENERIC_REQUIREMENTS, UnknownDocumentType, VerificationKind,
    required_fields_for, verification_kind_for,
};
pub use request::{DocumentData, UserDetails, VerificationRequest};
pub use result::{VerificationResult, generate_verification_id};
pub use status::VerificationStatus;
