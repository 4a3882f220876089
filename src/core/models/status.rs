//! Verification status vocabulary
//!
//! Every verification attempt ends in exactly one of these states.

use serde::{Deserialize, Serialize};

/// Outcome of a verification attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    /// The issuing authority confirmed the document
    Verified,
    /// The authority denied the document, the call errored, or no service exists
    Failed,
    /// Submitted but not yet resolved by the authority
    Pending,
    /// Previously verified, but the backing document has expired
    Expired,
    /// The request was incomplete and never reached the authority
    Invalid,
}

impl VerificationStatus {
    /// All statuses, in display order
    pub const ALL: [Self; 5] =
        [Self::Verified, Self::Failed, Self::Pending, Self::Expired, Self::Invalid];

    /// Whether the status is a final answer (everything except `pending`)
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Badge label shown next to a document
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Verified => "Verified",
            Self::Failed => "Failed",
            Self::Pending => "Pending",
            Self::Expired => "Expired",
            Self::Invalid => "Invalid",
        }
    }
}

impl std::fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Verified => write!(f, "verified"),
            Self::Failed => write!(f, "failed"),
            Self::Pending => write!(f, "pending"),
            Self::Expired => write!(f, "expired"),
            Self::Invalid => write!(f, "invalid"),
        }
    }
}

impl std::str::FromStr for VerificationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verified" => Ok(Self::Verified),
            "failed" => Ok(Self::Failed),
            "pending" => Ok(Self::Pending),
            "expired" => Ok(Self::Expired),
            "invalid" => Ok(Self::Invalid),
            _ => Err(format!(
                "Invalid verification status: {s}. Use: verified, failed, pending, expired, invalid"
            )),
        }
    }
}
