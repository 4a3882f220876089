//! Fields command - show what a verification form must collect

use carerpassport::adapters::SimulatedBackend;
use carerpassport::core::services::VerificationManager;
use carerpassport::output::{FieldsOutput, OutputMode};

/// Show required fields for a document type
pub fn fields(document_type: &str, mode: OutputMode) -> anyhow::Result<()> {
    // Registry lookups never touch the backend
    let manager = VerificationManager::new(SimulatedBackend::instant());

    FieldsOutput {
        document_type: document_type.to_string(),
        verification_required: manager.is_verification_required(document_type),
        fields: manager.required_fields(document_type).into_iter().map(String::from).collect(),
    }
    .render(mode)?;

    Ok(())
}
