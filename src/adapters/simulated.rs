//! Simulated government APIs
//!
//! Stands in for the real authorities: waits a random bounded delay, then
//! answers with a canned response for the calling service.

use std::time::Duration;

use log::debug;
use rand::Rng;
use serde_json::{Value, json};

use crate::core::models::VerificationKind;
use crate::core::ports::{BackendCall, BackendError, VerificationBackend};

/// Backend answering every call with a fixed, successful response
#[derive(Debug, Clone, Copy)]
pub struct SimulatedBackend {
    min_delay: Duration,
    max_delay: Duration,
}

impl SimulatedBackend {
    /// Delay of one to three seconds, like a slow government API
    pub const DEFAULT_MIN_DELAY: Duration = Duration::from_millis(1000);

    /// Upper bound of the default delay
    pub const DEFAULT_MAX_DELAY: Duration = Duration::from_millis(3000);

    /// Create a backend that waits between `min_delay` and `max_delay`
    ///
    /// A `max_delay` below `min_delay` means a fixed `min_delay`.
    #[must_use]
    pub const fn new(min_delay: Duration, max_delay: Duration) -> Self {
        Self {
            min_delay,
            max_delay,
        }
    }

    /// Create a backend that answers immediately
    #[must_use]
    pub const fn instant() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    fn pick_delay(&self) -> Duration {
        if self.max_delay <= self.min_delay {
            return self.min_delay;
        }
        rand::thread_rng().gen_range(self.min_delay..=self.max_delay)
    }

    /// Canned answer for a service
    ///
    /// Right to work alternates at random between settled and sponsored status.
    #[must_use]
    pub fn canned_response(kind: VerificationKind) -> Value {
        match kind {
            VerificationKind::RightToWork => {
                if rand::thread_rng().gen_bool(0.5) {
                    json!({
                        "hasRightToWork": true,
                        "message": "Individual has the right to work in the UK",
                        "visaType": "Indefinite Leave to Remain",
                        "workRestrictions": "No restrictions",
                        "employer": "Any employer",
                        "expiryDate": null
                    })
                } else {
                    json!({
                        "hasRightToWork": true,
                        "message": "Individual has the right to work in the UK",
                        "visaType": "Tier 2 General",
                        "workRestrictions": "Restricted to healthcare sector",
                        "employer": "Sponsored employer only",
                        "expiryDate": "2025-12-31"
                    })
                }
            },
            VerificationKind::DrivingLicence => json!({
                "isValid": true,
                "message": "Driving licence is valid and current",
                "licenceType": "Full",
                "categories": ["B", "B1"],
                "endorsements": [],
                "points": 0,
                "address": "123 Test Street, Test City, TE1 2ST",
                "expiryDate": "2034-08-15"
            }),
            VerificationKind::NationalInsurance => json!({
                "isValid": true,
                "message": "National Insurance number is valid and active",
                "status": "Active",
                "category": "A",
                "lastContribution": "2024-05-31"
            }),
            VerificationKind::Mot => json!({
                "hasValidMOT": true,
                "message": "Vehicle has a valid MOT certificate",
                "make": "FORD",
                "model": "FOCUS",
                "colour": "Silver",
                "fuelType": "Petrol",
                "motExpiryDate": "2025-03-15",
                "taxStatus": "Taxed",
                "motTests": [
                    {
                        "testDate": "2024-03-15",
                        "testResult": "PASSED",
                        "odometerValue": "45000",
                        "odometerUnit": "mi"
                    }
                ]
            }),
        }
    }
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN_DELAY, Self::DEFAULT_MAX_DELAY)
    }
}

impl VerificationBackend for SimulatedBackend {
    async fn call(&self, call: BackendCall<'_>) -> Result<Value, BackendError> {
        let delay = self.pick_delay();
        debug!("Simulating {} at {} ({delay:?}): {}", call.service(), call.url(), call.payload);

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        Ok(Self::canned_response(call.kind))
    }
}
