//! Employer access codes
//!
//! A carer hands an employer a short code that unlocks their documents until
//! it expires.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::ids::{random_base36, unix_millis};

/// Days a new code stays valid
pub const DEFAULT_VALIDITY_DAYS: i64 = 14;

/// Where employers redeem codes
pub const DEFAULT_SHARE_BASE_URL: &str = "https://carerpassport.app";

/// Why an access code could not be created
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AccessCodeError {
    /// The employer name was empty after trimming
    #[error("Employer name required: enter the employer's name before generating a code")]
    EmployerNameRequired,

    /// The validity was below one day or past the last representable date
    #[error("Access codes must be valid for at least one day and end on a real date, got {0} days")]
    InvalidValidity(i64),
}

/// A time-limited code granting one employer access to a carer's documents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessCode {
    /// Unique id (creation time in millis)
    pub id: String,
    /// Who the code was issued to
    pub employer_name: String,
    /// `CD-` followed by six uppercase characters
    pub code: String,
    /// Last day the code is accepted
    pub expires_at: NaiveDate,
    /// Day the code was issued
    pub created_at: NaiveDate,
    /// Whether the employer has used the code
    pub accessed: bool,
    /// Most recent use
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_accessed: Option<NaiveDate>,
}

impl AccessCode {
    /// Issue a code for `employer_name`, valid for `validity_days` from `today`
    pub fn generate(
        employer_name: &str,
        today: NaiveDate,
        validity_days: i64,
    ) -> Result<Self, AccessCodeError> {
        let employer_name = employer_name.trim();
        if employer_name.is_empty() {
            return Err(AccessCodeError::EmployerNameRequired);
        }

        let expires_at = u64::try_from(validity_days)
            .ok()
            .filter(|days| *days >= 1)
            .and_then(|days| today.checked_add_days(Days::new(days)))
            .ok_or(AccessCodeError::InvalidValidity(validity_days))?;

        Ok(Self {
            id: unix_millis().to_string(),
            employer_name: employer_name.to_string(),
            code: format!("CD-{}", random_base36(6).to_uppercase()),
            expires_at,
            created_at: today,
            accessed: false,
            last_accessed: None,
        })
    }

    /// A code is expired once `today` is past its expiry date
    #[must_use]
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expires_at < today
    }

    /// Record that the employer opened the documents
    pub fn record_access(&mut self, on: NaiveDate) {
        self.accessed = true;
        self.last_accessed = Some(on);
    }

    /// Message the carer sends to the employer
    #[must_use]
    pub fn share_text(&self, base_url: &str) -> String {
        format!(
            "View my care documents with code: {} at {}/view",
            self.code,
            base_url.trim_end_matches('/')
        )
    }
}
