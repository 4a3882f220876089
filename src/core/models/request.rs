//! Verification request model
//!
//! A request is built fresh for each attempt and discarded afterwards.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::VerificationKind;

/// Identity of the person the document belongs to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetails {
    /// Given name
    #[serde(default)]
    pub first_name: String,
    /// Family name
    #[serde(default)]
    pub last_name: String,
    /// Date of birth (YYYY-MM-DD)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    /// Postal address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Document details submitted for checking, typed per verification service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum DocumentData {
    /// Home Office share code
    RightToWork {
        /// Share code issued by the Home Office
        share_code: String,
        /// Holder's date of birth
        date_of_birth: String,
    },
    /// DVLA licence check
    DrivingLicence {
        /// 16 character licence number
        licence_number: String,
        /// DVLA check code
        check_code: String,
        /// Vehicle registration for cross-referencing insurance and MOT
        #[serde(default, skip_serializing_if = "Option::is_none")]
        registration_number: Option<String>,
    },
    /// HMRC National Insurance details
    NationalInsurance {
        /// National Insurance number
        national_insurance_number: String,
        /// Given name as held by HMRC
        first_name: String,
        /// Family name as held by HMRC
        last_name: String,
        /// Date of birth
        date_of_birth: String,
    },
    /// DVSA MOT lookup
    Mot {
        /// Vehicle registration
        registration_number: String,
        /// Vehicle make, if known
        #[serde(default, skip_serializing_if = "Option::is_none")]
        make: Option<String>,
        /// Vehicle model, if known
        #[serde(default, skip_serializing_if = "Option::is_none")]
        model: Option<String>,
    },
    /// Free-form fields for documents without a verification service
    Other {
        /// Field name to value
        #[serde(default)]
        fields: BTreeMap<String, String>,
    },
}

impl DocumentData {
    /// Build typed data from form fields keyed by their camelCase names
    ///
    /// Absent fields become empty strings, so validation reports them instead
    /// of the request failing to build.
    #[must_use]
    pub fn from_fields(kind: Option<VerificationKind>, fields: &BTreeMap<String, String>) -> Self {
        let get = |name: &str| fields.get(name).cloned().unwrap_or_default();
        let opt = |name: &str| fields.get(name).filter(|v| !v.is_empty()).cloned();

        match kind {
            Some(VerificationKind::RightToWork) => Self::RightToWork {
                share_code: get("shareCode"),
                date_of_birth: get("dateOfBirth"),
            },
            Some(VerificationKind::DrivingLicence) => Self::DrivingLicence {
                licence_number: get("licenceNumber"),
                check_code: get("checkCode"),
                registration_number: opt("registrationNumber"),
            },
            Some(VerificationKind::NationalInsurance) => Self::NationalInsurance {
                national_insurance_number: get("nationalInsuranceNumber"),
                first_name: get("firstName"),
                last_name: get("lastName"),
                date_of_birth: get("dateOfBirth"),
            },
            Some(VerificationKind::Mot) => Self::Mot {
                registration_number: get("registrationNumber"),
                make: opt("make"),
                model: opt("model"),
            },
            None => Self::Other {
                fields: fields.clone(),
            },
        }
    }

    /// The verification service this data is shaped for
    #[must_use]
    pub const fn kind(&self) -> Option<VerificationKind> {
        match self {
            Self::RightToWork { .. } => Some(VerificationKind::RightToWork),
            Self::DrivingLicence { .. } => Some(VerificationKind::DrivingLicence),
            Self::NationalInsurance { .. } => Some(VerificationKind::NationalInsurance),
            Self::Mot { .. } => Some(VerificationKind::Mot),
            Self::Other { .. } => None,
        }
    }
}

/// Input to a verification service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationRequest {
    /// Document type label, e.g. "Driving Licence"
    pub document_type: String,
    /// The details to check
    pub document_data: DocumentData,
    /// Who the document belongs to
    #[serde(default)]
    pub user_details: UserDetails,
}

impl VerificationRequest {
    /// Create a request for the given document type
    #[must_use]
    pub fn new(
        document_type: impl Into<String>,
        document_data: DocumentData,
        user_details: UserDetails,
    ) -> Self {
        Self {
            document_type: document_type.into(),
            document_data,
            user_details,
        }
    }
}
