//! Verify command - check a document with its issuing authority

use std::collections::BTreeMap;
use std::process::ExitCode;

use carerpassport::adapters::SimulatedBackend;
use carerpassport::config::Config;
use carerpassport::core::models::{
    DocumentData, UserDetails, VerificationRequest, VerificationResult, VerificationStatus,
    verification_kind_for,
};
use carerpassport::core::ports::VerificationBackend;
use carerpassport::core::services::VerificationManager;
use carerpassport::output::{OutputMode, VerifyOutput};

/// Arguments collected by `carerpassport verify`
#[derive(Debug)]
pub struct VerifyArgs {
    /// Document type label
    pub document_type: String,
    /// Document fields keyed by camelCase name
    pub fields: BTreeMap<String, String>,
    /// Holder's first name
    pub first_name: String,
    /// Holder's last name
    pub last_name: String,
    /// Holder's date of birth
    pub date_of_birth: Option<String>,
    /// Holder's address
    pub address: Option<String>,
    /// Use the real government APIs
    #[cfg(feature = "http")]
    pub live: bool,
}

impl VerifyArgs {
    fn request(&self) -> VerificationRequest {
        let kind = verification_kind_for(&self.document_type);
        VerificationRequest::new(
            self.document_type.clone(),
            DocumentData::from_fields(kind, &self.fields),
            UserDetails {
                first_name: self.first_name.clone(),
                last_name: self.last_name.clone(),
                date_of_birth: self.date_of_birth.clone(),
                address: self.address.clone(),
            },
        )
    }
}

/// Verify a document; exits non-zero unless it was verified
pub fn verify(args: VerifyArgs, config: &Config, mode: OutputMode) -> anyhow::Result<ExitCode> {
    let request = args.request();

    let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;

    #[cfg(feature = "http")]
    let result = if args.live {
        let backend = carerpassport::adapters::HttpBackend::new(config.backend.timeout())?;
        runtime.block_on(run(backend, &request, config))
    } else {
        runtime.block_on(run(simulated(config), &request, config))
    };

    #[cfg(not(feature = "http"))]
    let result = runtime.block_on(run(simulated(config), &request, config));

    let verified = result.status == VerificationStatus::Verified;
    VerifyOutput {
        document_type: args.document_type,
        result,
    }
    .render(mode)?;

    Ok(if verified {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn simulated(config: &Config) -> SimulatedBackend {
    SimulatedBackend::new(config.backend.min_delay(), config.backend.max_delay())
}

async fn run<B: VerificationBackend>(
    backend: B,
    request: &VerificationRequest,
    config: &Config,
) -> VerificationResult {
    let manager = VerificationManager::with_endpoints(backend, &config.services);
    manager.verify(request).await
}
