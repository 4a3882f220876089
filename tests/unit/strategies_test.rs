//! Tests for the per-authority verification services

use std::time::Duration;

use carerpassport::core::models::{VerificationKind, VerificationStatus};
use carerpassport::core::ports::BackendError;
use carerpassport::core::services::{
    DrivingLicenceService, MotService, NationalInsuranceService, RightToWorkService,
    VerificationService,
};
use serde_json::json;

use crate::common::{self, FailingBackend, RecordingBackend};

// =============================================================================
// PAYLOADS
// =============================================================================

#[tokio::test]
async fn test_right_to_work_payload() {
    let backend = RecordingBackend::canned();
    RightToWorkService::default().verify(&common::right_to_work(), &backend).await;

    let call = backend.last_call().unwrap();
    assert_eq!(call.url, "https://api.gov.uk/immigration-status/check-immigration-status");
    assert_eq!(call.payload, json!({ "shareCode": "W3X4Y5Z6A", "dateOfBirth": "1985-04-12" }));
}

#[tokio::test]
async fn test_driving_licence_payload_omits_registration() {
    let backend = RecordingBackend::canned();
    let request = common::request(
        "Driving Licence",
        &[
            ("licenceNumber", "SMITH851042J99AB"),
            ("checkCode", "AB12CD34"),
            ("registrationNumber", "AB12CDE"),
        ],
    );
    DrivingLicenceService::default().verify(&request, &backend).await;

    let call = backend.last_call().unwrap();
    assert_eq!(call.payload, json!({ "licenceNumber": "SMITH851042J99AB", "checkCode": "AB12CD34" }));
}

#[tokio::test]
async fn test_national_insurance_payload_uses_nino() {
    let backend = RecordingBackend::canned();
    NationalInsuranceService::default().verify(&common::national_insurance(), &backend).await;

    let call = backend.last_call().unwrap();
    assert_eq!(call.url, "https://api.service.hmrc.gov.uk/individuals/details");
    assert_eq!(
        call.payload,
        json!({
            "nino": "QQ123456C",
            "firstName": "Jane",
            "lastName": "Smith",
            "dateOfBirth": "1985-04-12"
        })
    );
}

#[tokio::test]
async fn test_mot_payload_and_custom_endpoint() {
    let backend = RecordingBackend::canned();
    let service = MotService::new("http://localhost:8080");
    service.verify(&common::mot(), &backend).await;

    let call = backend.last_call().unwrap();
    assert_eq!(call.kind, VerificationKind::Mot);
    assert_eq!(call.url, "http://localhost:8080/trade/vehicles/mot-tests");
    assert_eq!(call.payload, json!({ "registration": "AB12CDE" }));
}

// =============================================================================
// VALIDATION
// =============================================================================

#[tokio::test]
async fn test_each_service_reports_its_invalid_message() {
    let backend = RecordingBackend::canned();

    let rtw = RightToWorkService::default()
        .verify(&common::request("Right to Work Document", &[("shareCode", "")]), &backend)
        .await;
    let dl = DrivingLicenceService::default()
        .verify(&common::request("Driving Licence", &[("licenceNumber", "X")]), &backend)
        .await;
    let ni = NationalInsuranceService::default()
        .verify(&common::request("National Insurance Proof", &[("firstName", "Jane")]), &backend)
        .await;
    let mot = MotService::default().verify(&common::request("MOT Certificate", &[]), &backend).await;

    assert_eq!(rtw.message, "Share code and date of birth are required");
    assert_eq!(dl.message, "Licence number and check code are required");
    assert_eq!(ni.message, "All personal details are required for NI verification");
    assert_eq!(mot.message, "Vehicle registration number is required");
    for result in [rtw, dl, ni, mot] {
        assert_eq!(result.status, VerificationStatus::Invalid);
        assert!(!result.success);
    }
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn test_invalid_result_carries_service_id() {
    let backend = RecordingBackend::canned();
    let result = MotService::default().verify(&common::request("MOT Certificate", &[]), &backend).await;
    assert!(result.verification_id.starts_with("mot-certificate-"));
}

#[tokio::test]
async fn test_whitespace_counts_as_present() {
    let backend = RecordingBackend::canned();
    let request = common::request("MOT Certificate", &[("registrationNumber", " ")]);

    let result = MotService::default().verify(&request, &backend).await;

    assert_eq!(result.status, VerificationStatus::Verified);
    assert_eq!(backend.call_count(), 1);
}

#[tokio::test]
async fn test_data_for_another_service_is_invalid() {
    let backend = RecordingBackend::canned();
    let result = MotService::default().verify(&common::driving_licence(), &backend).await;

    assert_eq!(result.status, VerificationStatus::Invalid);
    assert_eq!(backend.call_count(), 0);
}

// =============================================================================
// RESPONSE MAPPING
// =============================================================================

#[tokio::test]
async fn test_right_to_work_null_expiry() {
    let backend = RecordingBackend::answering(json!({
        "hasRightToWork": true,
        "message": "Individual has the right to work in the UK",
        "visaType": "Indefinite Leave to Remain",
        "workRestrictions": "No restrictions",
        "employer": "Any employer",
        "expiryDate": null
    }));

    let result = RightToWorkService::default().verify(&common::right_to_work(), &backend).await;

    assert_eq!(result.status, VerificationStatus::Verified);
    assert!(result.expiry_date.is_none());
    assert_eq!(
        result.data,
        Some(json!({
            "visaType": "Indefinite Leave to Remain",
            "workRestrictions": "No restrictions",
            "employer": "Any employer"
        }))
    );
}

#[tokio::test]
async fn test_national_insurance_has_no_expiry() {
    let backend = RecordingBackend::answering(json!({
        "isValid": true,
        "message": "ok",
        "status": "Active",
        "expiryDate": "2030-01-01"
    }));

    let result =
        NationalInsuranceService::default().verify(&common::national_insurance(), &backend).await;

    assert!(result.expiry_date.is_none());
    assert_eq!(result.data, Some(json!({ "status": "Active" })));
}

#[tokio::test]
async fn test_mot_expiry_key() {
    let backend = RecordingBackend::canned();
    let result = MotService::default().verify(&common::mot(), &backend).await;

    assert_eq!(result.expiry_date.as_deref(), Some("2025-03-15"));
    let data = result.data.unwrap();
    assert_eq!(data["make"], "FORD");
    assert_eq!(data["motTests"][0]["testResult"], "PASSED");
}

#[tokio::test]
async fn test_missing_validity_flag_is_failed() {
    let backend = RecordingBackend::answering(json!({ "message": "Unavailable" }));
    let result = DrivingLicenceService::default().verify(&common::driving_licence(), &backend).await;

    assert_eq!(result.status, VerificationStatus::Failed);
    assert_eq!(result.message, "Unavailable");
}

#[tokio::test]
async fn test_non_object_response_is_failed() {
    let backend = RecordingBackend::answering(json!(["not", "an", "object"]));
    let result = DrivingLicenceService::default().verify(&common::driving_licence(), &backend).await;

    assert_eq!(result.status, VerificationStatus::Failed);
    assert!(result.message.starts_with("Verification failed: malformed response"));
}

#[tokio::test]
async fn test_timeout_reported_in_message() {
    let backend = FailingBackend::new(|| BackendError::Timeout(Duration::from_secs(10)));
    let result = RightToWorkService::default().verify(&common::right_to_work(), &backend).await;

    assert_eq!(result.status, VerificationStatus::Failed);
    assert_eq!(result.message, "Verification failed: API call timed out after 10s");
}
