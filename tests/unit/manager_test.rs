//! Tests for the verification dispatcher

use std::time::Duration;

use carerpassport::adapters::SimulatedBackend;
use carerpassport::core::models::{DocumentType, VerificationKind, VerificationStatus};
use carerpassport::core::ports::BackendError;
use carerpassport::core::services::{ServiceEndpoints, VerificationManager};
use serde_json::json;

use crate::common::{self, FailingBackend, RecordingBackend};

// =============================================================================
// REGISTRY
// =============================================================================

#[test]
fn test_registered_types_need_verification() {
    let manager = VerificationManager::new(SimulatedBackend::instant());
    for label in [
        "Right to Work Document",
        "Driving Licence",
        "Driving Licence Points Check",
        "National Insurance Proof",
        "MOT Certificate",
    ] {
        assert!(manager.is_verification_required(label), "{label}");
    }
}

#[test]
fn test_unverifiable_types_skip_verification() {
    let manager = VerificationManager::new(SimulatedBackend::instant());
    assert!(!manager.is_verification_required("DBS Certificate"));
    assert!(!manager.is_verification_required("Passport Photo"));
    assert!(!manager.is_verification_required("driving licence"));
    assert!(manager.required_fields("DBS Certificate").is_empty());
}

#[test]
fn test_required_fields_in_form_order() {
    let manager = VerificationManager::new(SimulatedBackend::instant());
    assert_eq!(manager.required_fields("Right to Work Document"), ["shareCode", "dateOfBirth"]);
    assert_eq!(manager.required_fields("Driving Licence"), ["licenceNumber", "checkCode"]);
    assert_eq!(manager.required_fields("Driving Licence Points Check"), [
        "licenceNumber",
        "checkCode"
    ]);
    assert_eq!(manager.required_fields("National Insurance Proof"), [
        "nationalInsuranceNumber",
        "firstName",
        "lastName",
        "dateOfBirth"
    ]);
    assert_eq!(manager.required_fields("MOT Certificate"), ["registrationNumber"]);
}

#[test]
fn test_verifiable_types_follow_catalog_order() {
    let manager = VerificationManager::new(SimulatedBackend::instant());
    assert_eq!(manager.verifiable_types(), vec![
        DocumentType::RightToWork,
        DocumentType::DrivingLicence,
        DocumentType::DrivingLicencePointsCheck,
        DocumentType::NationalInsuranceProof,
        DocumentType::MotCertificate,
    ]);
}

#[test]
fn test_endpoints_come_from_config() {
    let endpoints = ServiceEndpoints {
        mot: "http://localhost:9000".to_string(),
        ..ServiceEndpoints::default()
    };
    let manager = VerificationManager::with_endpoints(SimulatedBackend::instant(), &endpoints);
    assert_eq!(manager.endpoint(VerificationKind::Mot), "http://localhost:9000");
    assert_eq!(manager.endpoint(VerificationKind::DrivingLicence), "https://api.dvla.gov.uk");
}

// =============================================================================
// DISPATCH
// =============================================================================

#[tokio::test]
async fn test_driving_licence_verified_against_simulator() {
    let manager = VerificationManager::new(SimulatedBackend::instant());
    let result = manager.verify(&common::driving_licence()).await;

    assert!(result.success);
    assert_eq!(result.status, VerificationStatus::Verified);
    assert_eq!(result.message, "Driving licence is valid and current");
    let data = result.data.unwrap();
    assert_eq!(data["licenceType"], "Full");
    assert_eq!(data["categories"], json!(["B", "B1"]));
    assert_eq!(data["points"], 0);
    assert_eq!(result.expiry_date.as_deref(), Some("2034-08-15"));
    assert!(result.verification_id.starts_with("driving-licence-"));
}

#[tokio::test]
async fn test_points_check_shares_driving_licence_service() {
    let backend = RecordingBackend::canned();
    let manager = VerificationManager::new(&backend);
    let mut request = common::driving_licence();
    request.document_type = "Driving Licence Points Check".to_string();

    let result = manager.verify(&request).await;

    assert_eq!(result.status, VerificationStatus::Verified);
    let call = backend.last_call().unwrap();
    assert_eq!(call.kind, VerificationKind::DrivingLicence);
    assert_eq!(call.url, "https://api.dvla.gov.uk/driver-enquiry-service");
}

#[tokio::test]
async fn test_each_kind_reaches_its_service() {
    let backend = RecordingBackend::canned();
    let manager = VerificationManager::new(&backend);

    let cases = [
        (common::right_to_work(), VerificationKind::RightToWork),
        (common::driving_licence(), VerificationKind::DrivingLicence),
        (common::national_insurance(), VerificationKind::NationalInsurance),
        (common::mot(), VerificationKind::Mot),
    ];
    for (request, kind) in cases {
        let result = manager.verify(&request).await;
        assert_eq!(result.status, VerificationStatus::Verified, "{kind}");
        assert_eq!(backend.last_call().unwrap().kind, kind);
    }
    assert_eq!(backend.call_count(), 4);
}

#[tokio::test]
async fn test_unknown_type_fails_without_backend_call() {
    let backend = RecordingBackend::canned();
    let manager = VerificationManager::new(&backend);
    let request = common::request("Passport Photo", &[]);

    let result = manager.verify_document("Passport Photo", &request).await;

    assert!(!result.success);
    assert_eq!(result.status, VerificationStatus::Failed);
    assert_eq!(result.message, "No verification service available for Passport Photo");
    assert!(result.verification_id.starts_with("no-service-"));
    assert!(result.data.is_none());
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn test_unverifiable_catalog_type_fails() {
    let manager = VerificationManager::new(SimulatedBackend::instant());
    let request = common::request("DBS Certificate", &[("certificateNumber", "001234567890")]);

    let result = manager.verify(&request).await;

    assert_eq!(result.status, VerificationStatus::Failed);
    assert!(result.message.contains("DBS Certificate"));
}

#[tokio::test]
async fn test_missing_field_is_invalid_without_backend_call() {
    let backend = RecordingBackend::canned();
    let manager = VerificationManager::new(&backend);
    let request = common::request("Right to Work Document", &[("dateOfBirth", "1985-04-12")]);

    let result = manager.verify(&request).await;

    assert!(!result.success);
    assert_eq!(result.status, VerificationStatus::Invalid);
    assert_eq!(result.message, "Share code and date of birth are required");
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn test_backend_error_becomes_failed() {
    let backend = FailingBackend::new(|| BackendError::Transport("connection refused".into()));
    let manager = VerificationManager::new(&backend);

    let result = manager.verify(&common::mot()).await;

    assert!(!result.success);
    assert_eq!(result.status, VerificationStatus::Failed);
    assert_eq!(result.message, "Verification failed: API call failed: connection refused");
    assert_eq!(backend.call_count(), 1);
}

#[tokio::test]
async fn test_denied_check_is_failed_with_backend_message() {
    let backend = RecordingBackend::answering(json!({
        "hasValidMOT": false,
        "message": "No MOT record found"
    }));
    let manager = VerificationManager::new(&backend);

    let result = manager.verify(&common::mot()).await;

    assert!(!result.success);
    assert_eq!(result.status, VerificationStatus::Failed);
    assert_eq!(result.message, "No MOT record found");
}

#[tokio::test]
async fn test_repeat_verification_keeps_outcome_with_fresh_identity() {
    let manager = VerificationManager::new(SimulatedBackend::instant());
    let request = common::national_insurance();

    let first = manager.verify(&request).await;
    tokio::time::sleep(Duration::from_millis(2)).await;
    let second = manager.verify(&request).await;

    assert_eq!(first.status, second.status);
    assert_eq!(first.data, second.data);
    assert_ne!(first.verification_id, second.verification_id);
    assert_ne!(first.verified_at, second.verified_at);
}

// =============================================================================
// CONCURRENCY
// =============================================================================

#[tokio::test(start_paused = true)]
async fn test_concurrent_verifications_do_not_serialize() {
    let delay = Duration::from_secs(2);
    let manager = VerificationManager::new(SimulatedBackend::new(delay, delay));
    let licence = common::driving_licence();
    let mot = common::mot();

    let started = tokio::time::Instant::now();
    let (a, b) = tokio::join!(manager.verify(&licence), manager.verify(&mot));

    assert_eq!(a.status, VerificationStatus::Verified);
    assert_eq!(b.status, VerificationStatus::Verified);
    // Back to back the two fixed delays would take 4s
    let elapsed = started.elapsed();
    assert!(elapsed >= delay, "{elapsed:?}");
    assert!(elapsed < delay * 2, "{elapsed:?}");
}

#[tokio::test(start_paused = true)]
async fn test_sequential_verifications_add_up() {
    let delay = Duration::from_secs(2);
    let manager = VerificationManager::new(SimulatedBackend::new(delay, delay));

    let started = tokio::time::Instant::now();
    manager.verify(&common::driving_licence()).await;
    manager.verify(&common::mot()).await;

    assert!(started.elapsed() >= delay * 2);
}

#[tokio::test]
async fn test_manager_shared_across_tasks() {
    let manager = std::sync::Arc::new(VerificationManager::new(SimulatedBackend::instant()));

    let handles: Vec<_> = [common::right_to_work(), common::mot()]
        .into_iter()
        .map(|request| {
            let manager = std::sync::Arc::clone(&manager);
            tokio::spawn(async move { manager.verify(&request).await })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap().status, VerificationStatus::Verified);
    }
}
