//! Upload status of a tracked document

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Where a required document stands for a carer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    /// Uploaded and in date
    Complete,
    /// Uploaded, awaiting review
    Pending,
    /// Uploaded, but expires soon
    Expiring,
    /// Not uploaded, or expired
    Missing,
}

impl DocumentStatus {
    /// Sort key: most urgent first
    #[must_use]
    pub const fn urgency(self) -> u8 {
        match self {
            Self::Missing => 0,
            Self::Expiring => 1,
            Self::Pending => 2,
            Self::Complete => 3,
        }
    }

    /// Whether the carer must act on this document
    #[must_use]
    pub const fn needs_attention(self) -> bool {
        matches!(self, Self::Missing | Self::Expiring)
    }

    /// Status derived from upload state and expiry date
    ///
    /// An expired document counts as missing. A document expiring within
    /// `window_days` of `today` (inclusive) is expiring.
    #[must_use]
    pub fn from_expiry(
        uploaded: bool,
        expiry: Option<NaiveDate>,
        today: NaiveDate,
        window_days: i64,
    ) -> Self {
        if !uploaded {
            return Self::Missing;
        }
        match expiry {
            Some(date) if date < today => Self::Missing,
            Some(date) if (date - today).num_days() <= window_days => Self::Expiring,
            _ => Self::Complete,
        }
    }
}

impl std::fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Complete => write!(f, "complete"),
            Self::Pending => write!(f, "pending"),
            Self::Expiring => write!(f, "expiring"),
            Self::Missing => write!(f, "missing"),
        }
    }
}

impl std::str::FromStr for DocumentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "complete" => Ok(Self::Complete),
            "pending" => Ok(Self::Pending),
            "expiring" => Ok(Self::Expiring),
            "missing" => Ok(Self::Missing),
            _ => Err(format!(
                "Invalid document status: {s}. Use: complete, pending, expiring, missing"
            )),
        }
    }
}

/// A document on a carer's checklist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedDocument {
    /// Document type label
    pub name: String,
    /// Current status
    pub status: DocumentStatus,
    /// Expiry date, if the document has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry: Option<NaiveDate>,
    /// Whether the document is mandatory
    #[serde(default = "default_required")]
    pub required: bool,
}

const fn default_required() -> bool {
    true
}

impl TrackedDocument {
    /// Create a required document entry
    #[must_use]
    pub fn new(name: impl Into<String>, status: DocumentStatus) -> Self {
        Self {
            name: name.into(),
            status,
            expiry: None,
            required: true,
        }
    }

    /// Set the expiry date
    #[must_use]
    pub const fn with_expiry(mut self, expiry: NaiveDate) -> Self {
        self.expiry = Some(expiry);
        self
    }

    /// Mark as optional
    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.required = false;
        self
    }
}
