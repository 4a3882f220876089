//! Verification services, one per issuing authority
//!
//! Each service follows the same three steps:
//!
//! 1. Validate the submitted fields; anything missing is `invalid` and no
//!    call is made
//! 2. Call the backend with the service's endpoint, path and payload
//! 3. Map the response: the validity flag picks `verified` or `failed`, the
//!    service's data keys are copied verbatim, the expiry date passes through
//!
//! Backend errors become `failed` results; nothing is returned as `Err`.

mod driving_licence;
mod mot;
mod national_insurance;
mod right_to_work;

use std::future::Future;

use log::{debug, warn};
use serde_json::{Map, Value};

use crate::core::models::{
    VerificationKind, VerificationRequest, VerificationResult, VerificationStatus,
};
use crate::core::ports::{BackendCall, BackendError, VerificationBackend};

pub use driving_licence::DrivingLicenceService;
pub use mot::MotService;
pub use national_insurance::NationalInsuranceService;
pub use right_to_work::RightToWorkService;

/// A document-type specific verification strategy
pub trait VerificationService: Send + Sync {
    /// Which authority this service checks with
    fn kind(&self) -> VerificationKind;

    /// Base address of the authority's API
    fn endpoint(&self) -> &str;

    /// Check `request` using `backend`
    ///
    /// Always yields exactly one result.
    fn verify<B: VerificationBackend>(
        &self,
        request: &VerificationRequest,
        backend: &B,
    ) -> impl Future<Output = VerificationResult> + Send;
}

/// How a service reads its backend response
#[derive(Debug, Clone, Copy)]
struct ResponseMapping {
    /// Boolean key that decides verified vs failed
    validity_key: &'static str,
    /// Keys copied into `data`
    data_keys: &'static [&'static str],
    /// Key holding the document expiry date
    expiry_key: Option<&'static str>,
}

/// True if any required value was left empty
fn any_empty(values: &[&str]) -> bool {
    values.iter().any(|v| v.is_empty())
}

/// Call the backend and map its response
async fn check<B: VerificationBackend>(
    backend: &B,
    call: BackendCall<'_>,
    mapping: ResponseMapping,
) -> VerificationResult {
    let service = call.service();
    debug!("Calling {service} at {}", call.url());

    let result = backend
        .call(call)
        .await
        .and_then(|response| map_response(service, &response, mapping))
        .unwrap_or_else(|e| {
            warn!("{service} verification failed: {e}");
            VerificationResult::failed(service, format!("Verification failed: {e}"))
        });

    debug!("{service} answered {}", result.status);
    result
}

fn map_response(
    service: &str,
    response: &Value,
    mapping: ResponseMapping,
) -> Result<VerificationResult, BackendError> {
    let Some(body) = response.as_object() else {
        return Err(BackendError::Malformed(format!("{service} response is not a JSON object")));
    };

    let valid = body.get(mapping.validity_key).and_then(Value::as_bool).unwrap_or(false);
    let status = if valid {
        VerificationStatus::Verified
    } else {
        VerificationStatus::Failed
    };
    let message = body.get("message").and_then(Value::as_str).unwrap_or_default();

    let data: Map<String, Value> = mapping
        .data_keys
        .iter()
        .filter_map(|key| body.get(*key).map(|v| ((*key).to_string(), v.clone())))
        .collect();

    let expiry_date = mapping
        .expiry_key
        .and_then(|key| body.get(key))
        .and_then(Value::as_str)
        .map(String::from);

    Ok(VerificationResult::new(service, valid, status, message)
        .with_data(Value::Object(data))
        .with_expiry_date(expiry_date))
}
