//! Types command - list the document catalog

use carerpassport::core::models::DocumentType;
use carerpassport::output::{CatalogEntry, CatalogOutput, OutputMode};

/// List all document types
pub fn types(mode: OutputMode) -> anyhow::Result<()> {
    CatalogOutput {
        documents: DocumentType::ALL.into_iter().map(CatalogEntry::from).collect(),
    }
    .render(mode)?;

    Ok(())
}
