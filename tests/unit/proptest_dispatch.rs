//! Property-based tests for verification dispatch
//!
//! Uses proptest to verify properties that should hold for all inputs.

use carerpassport::adapters::SimulatedBackend;
use carerpassport::core::models::{DocumentType, VerificationStatus};
use carerpassport::core::services::VerificationManager;
use proptest::prelude::*;

use crate::common::{self, RecordingBackend};

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap()
}

proptest! {
    /// Registry membership and required fields always agree
    #[test]
    fn verification_required_iff_fields(label in ".{0,40}") {
        let manager = VerificationManager::new(SimulatedBackend::instant());
        prop_assert_eq!(
            manager.is_verification_required(&label),
            !manager.required_fields(&label).is_empty()
        );
    }

    /// Labels outside the catalog fail without reaching the backend
    #[test]
    fn unknown_labels_fail(label in "[A-Za-z ]{1,30}") {
        prop_assume!(label.parse::<DocumentType>().is_err());

        let backend = RecordingBackend::canned();
        let manager = VerificationManager::new(&backend);
        let request = common::request(&label, &[("shareCode", "W3X4Y5Z6A")]);
        let result = runtime().block_on(manager.verify(&request));

        prop_assert_eq!(result.status, VerificationStatus::Failed);
        prop_assert_eq!(
            result.message,
            format!("No verification service available for {label}")
        );
        prop_assert_eq!(backend.call_count(), 0);
    }

    /// Any blank required field is rejected before the backend is called
    #[test]
    fn blank_required_field_is_invalid(
        index in 0usize..4,
        type_index in 0usize..5,
    ) {
        let manager = VerificationManager::new(SimulatedBackend::instant());
        let verifiable = manager.verifiable_types();
        let doc = verifiable[type_index % verifiable.len()];
        let fields = manager.required_fields(doc.label());
        let blank = fields[index % fields.len()];

        let pairs: Vec<(&str, &str)> = fields
            .iter()
            .map(|f| (*f, if *f == blank { "" } else { "value" }))
            .collect();
        let backend = RecordingBackend::canned();
        let manager = VerificationManager::new(&backend);
        let result = runtime().block_on(manager.verify(&common::request(doc.label(), &pairs)));

        prop_assert_eq!(result.status, VerificationStatus::Invalid);
        prop_assert!(!result.success);
        prop_assert_eq!(backend.call_count(), 0);
    }
}
