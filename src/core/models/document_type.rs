//! Document catalog
//!
//! The closed set of credentials a carer can upload, and which of them can be
//! checked against an issuing authority.

use serde::{Deserialize, Serialize};

/// Guidance shown for document types without specific requirements
pub const GENERIC_REQUIREMENTS: &str =
    "Please ensure document is clear, valid, and meets all requirements.";

/// A named category of uploadable credential
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    /// Curriculum vitae
    #[serde(rename = "CV")]
    Cv,
    /// Health questionnaire
    #[serde(rename = "Medical Questionnaire")]
    MedicalQuestionnaire,
    /// Passport or birth certificate
    #[serde(rename = "Proof of ID")]
    ProofOfId,
    /// First proof of address
    #[serde(rename = "Proof of Address #1")]
    ProofOfAddress1,
    /// Second, different proof of address
    #[serde(rename = "Proof of Address #2")]
    ProofOfAddress2,
    /// National Insurance number document
    #[serde(rename = "National Insurance Proof")]
    NationalInsuranceProof,
    /// Home Office right-to-work evidence
    #[serde(rename = "Right to Work Document")]
    RightToWork,
    /// First professional reference
    #[serde(rename = "Professional Reference 1")]
    ProfessionalReference1,
    /// Second professional reference
    #[serde(rename = "Professional Reference 2")]
    ProfessionalReference2,
    /// Care Certificate
    #[serde(rename = "Care Certificate")]
    CareCertificate,
    /// UK driving licence
    #[serde(rename = "Driving Licence")]
    DrivingLicence,
    /// DVLA points check
    #[serde(rename = "Driving Licence Points Check")]
    DrivingLicencePointsCheck,
    /// Insurance with class 1 business use
    #[serde(rename = "CB1 Car Insurance")]
    Cb1CarInsurance,
    /// Vehicle MOT certificate
    #[serde(rename = "MOT Certificate")]
    MotCertificate,
}

/// A document type label that is not part of the catalog
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown document type: {0}")]
pub struct UnknownDocumentType(pub String);

impl DocumentType {
    /// Every document type, in upload-form order
    pub const ALL: [Self; 14] = [
        Self::Cv,
        Self::MedicalQuestionnaire,
        Self::ProofOfId,
        Self::ProofOfAddress1,
        Self::ProofOfAddress2,
        Self::NationalInsuranceProof,
        Self::RightToWork,
        Self::ProfessionalReference1,
        Self::ProfessionalReference2,
        Self::CareCertificate,
        Self::DrivingLicence,
        Self::DrivingLicencePointsCheck,
        Self::Cb1CarInsurance,
        Self::MotCertificate,
    ];

    /// The label users see and callers pass around
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cv => "CV",
            Self::MedicalQuestionnaire => "Medical Questionnaire",
            Self::ProofOfId => "Proof of ID",
            Self::ProofOfAddress1 => "Proof of Address #1",
            Self::ProofOfAddress2 => "Proof of Address #2",
            Self::NationalInsuranceProof => "National Insurance Proof",
            Self::RightToWork => "Right to Work Document",
            Self::ProfessionalReference1 => "Professional Reference 1",
            Self::ProfessionalReference2 => "Professional Reference 2",
            Self::CareCertificate => "Care Certificate",
            Self::DrivingLicence => "Driving Licence",
            Self::DrivingLicencePointsCheck => "Driving Licence Points Check",
            Self::Cb1CarInsurance => "CB1 Car Insurance",
            Self::MotCertificate => "MOT Certificate",
        }
    }

    /// Which verification service checks this document, if any
    ///
    /// Adding a document type forces a decision here.
    #[must_use]
    pub const fn verification_kind(self) -> Option<VerificationKind> {
        match self {
            Self::RightToWork => Some(VerificationKind::RightToWork),
            Self::DrivingLicence | Self::DrivingLicencePointsCheck => {
                Some(VerificationKind::DrivingLicence)
            },
            Self::NationalInsuranceProof => Some(VerificationKind::NationalInsurance),
            Self::MotCertificate => Some(VerificationKind::Mot),
            Self::Cv
            | Self::MedicalQuestionnaire
            | Self::ProofOfId
            | Self::ProofOfAddress1
            | Self::ProofOfAddress2
            | Self::ProfessionalReference1
            | Self::ProfessionalReference2
            | Self::CareCertificate
            | Self::Cb1CarInsurance => None,
        }
    }

    /// Whether the upload form must collect an expiry date
    #[must_use]
    pub const fn needs_expiry_date(self) -> bool {
        matches!(
            self,
            Self::ProofOfId
                | Self::RightToWork
                | Self::CareCertificate
                | Self::DrivingLicence
                | Self::Cb1CarInsurance
                | Self::MotCertificate
        )
    }

    /// Upload guidance for this document type
    #[must_use]
    pub const fn requirements(self) -> &'static str {
        match self {
            Self::Cv => {
                "Upload an up-to-date CV with no employment gaps. Our AI will check for gaps and \
                 prompt you to update if needed."
            },
            Self::ProofOfId => {
                "Valid passport or birth certificate. If your name has changed, include name \
                 change certificate (marriage/deed poll)."
            },
            Self::ProofOfAddress1 => {
                "Utility bill, bank statement, or council tax statement within 3 months. Must \
                 show current name and address."
            },
            Self::ProofOfAddress2 => {
                "Second proof of address document (different from #1). NOT mobile phone bills \
                 accepted."
            },
            Self::NationalInsuranceProof => {
                "National Insurance number document that matches your current name."
            },
            Self::RightToWork => {
                "Government check certificate or short code for status verification."
            },
            Self::DrivingLicence => {
                "Front and back of UK driving licence. Address must match proof of ID."
            },
            Self::Cb1CarInsurance => {
                "Insurance certificate showing CB1 business use cover (not just commuting)."
            },
            Self::MotCertificate => {
                "Valid MOT certificate with number plate matching your car insurance."
            },
            Self::MedicalQuestionnaire
            | Self::ProfessionalReference1
            | Self::ProfessionalReference2
            | Self::CareCertificate
            | Self::DrivingLicencePointsCheck => GENERIC_REQUIREMENTS,
        }
    }

    /// Whether the document can be checked with an issuing authority
    #[must_use]
    pub const fn is_verifiable(self) -> bool {
        self.verification_kind().is_some()
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for DocumentType {
    type Err = UnknownDocumentType;

    /// Labels match exactly, including case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.label() == s)
            .ok_or_else(|| UnknownDocumentType(s.to_string()))
    }
}

/// The verification services, one per issuing authority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VerificationKind {
    /// Home Office immigration status check
    RightToWork,
    /// DVLA driver enquiry
    DrivingLicence,
    /// HMRC individual details
    NationalInsurance,
    /// DVSA MOT history
    Mot,
}

impl VerificationKind {
    /// Service name, used as the verification id prefix
    #[must_use]
    pub const fn service_name(self) -> &'static str {
        match self {
            Self::RightToWork => "right-to-work",
            Self::DrivingLicence => "driving-licence",
            Self::NationalInsurance => "national-insurance",
            Self::Mot => "mot-certificate",
        }
    }

    /// Production API address of the issuing authority
    #[must_use]
    pub const fn default_endpoint(self) -> &'static str {
        match self {
            Self::RightToWork => "https://api.gov.uk/immigration-status",
            Self::DrivingLicence => "https://api.dvla.gov.uk",
            Self::NationalInsurance => "https://api.service.hmrc.gov.uk",
            Self::Mot => "https://beta.check-mot.service.gov.uk",
        }
    }

    /// Fields the upload form must collect, in form order
    #[must_use]
    pub const fn required_fields(self) -> &'static [&'static str] {
        match self {
            Self::RightToWork => &["shareCode", "dateOfBirth"],
            Self::DrivingLicence => &["licenceNumber", "checkCode"],
            Self::NationalInsurance => {
                &["nationalInsuranceNumber", "firstName", "lastName", "dateOfBirth"]
            },
            Self::Mot => &["registrationNumber"],
        }
    }
}

impl std::fmt::Display for VerificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.service_name())
    }
}

/// Verification kind for a raw document type label
///
/// `None` for labels outside the catalog and for unverifiable documents.
#[must_use]
pub fn verification_kind_for(label: &str) -> Option<VerificationKind> {
    label.parse::<DocumentType>().ok().and_then(DocumentType::verification_kind)
}

/// Required verification fields for a raw document type label
///
/// Empty for unknown and unverifiable types.
#[must_use]
pub fn required_fields_for(label: &str) -> &'static [&'static str] {
    const NONE: &[&str] = &[];
    verification_kind_for(label).map_or(NONE, VerificationKind::required_fields)
}
