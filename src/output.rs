//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;
use serde_json::Value;

use crate::core::models::{AccessCode, DocumentType, VerificationResult, VerificationStatus};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a verify operation
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOutput {
    /// Document type that was checked
    pub document_type: String,
    /// The verification outcome
    pub result: VerificationResult,
}

/// Required fields for a document type
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldsOutput {
    /// Document type label
    pub document_type: String,
    /// Whether uploads go through verification
    pub verification_required: bool,
    /// Fields to collect, in form order
    pub fields: Vec<String>,
}

/// One catalog entry
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Document type label
    pub name: String,
    /// Whether it can be checked with an authority
    pub verifiable: bool,
    /// Whether the upload needs an expiry date
    pub needs_expiry_date: bool,
    /// Upload guidance
    pub requirements: String,
}

impl From<DocumentType> for CatalogEntry {
    fn from(t: DocumentType) -> Self {
        Self {
            name: t.label().to_string(),
            verifiable: t.is_verifiable(),
            needs_expiry_date: t.needs_expiry_date(),
            requirements: t.requirements().to_string(),
        }
    }
}

/// The document catalog
#[derive(Debug, Serialize)]
pub struct CatalogOutput {
    /// All document types, in upload-form order
    pub documents: Vec<CatalogEntry>,
}

/// A freshly generated access code
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareOutput {
    /// The access code
    #[serde(flatten)]
    pub access_code: AccessCode,
    /// Message to send to the employer
    pub share_text: String,
}

fn badge(status: VerificationStatus) -> colored::ColoredString {
    let label = status.label();
    match status {
        VerificationStatus::Verified => label.green().bold(),
        VerificationStatus::Failed | VerificationStatus::Invalid => label.red().bold(),
        VerificationStatus::Pending => label.yellow().bold(),
        VerificationStatus::Expired => label.truecolor(255, 165, 0).bold(),
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) if items.iter().all(|v| !v.is_object()) => {
            items.iter().map(render_value).collect::<Vec<_>>().join(", ")
        },
        other => other.to_string(),
    }
}

fn render_json<T: Serialize>(value: &T) -> serde_json::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}

impl VerifyOutput {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) -> serde_json::Result<()> {
        match mode {
            OutputMode::Human => {
                self.render_human();
                Ok(())
            },
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        let r = &self.result;
        println!("{} [{}]", self.document_type, badge(r.status));
        if !r.message.is_empty() {
            println!("  {}", r.message);
        }
        if let Some(expiry) = &r.expiry_date {
            println!("  Expires: {expiry}");
        }
        if let Some(Value::Object(data)) = &r.data {
            for (key, value) in data {
                println!("  {key}: {}", render_value(value));
            }
        }
        println!("  ID: {}", r.verification_id);
        println!("  At: {}", r.verified_at);
    }
}

impl FieldsOutput {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) -> serde_json::Result<()> {
        match mode {
            OutputMode::Human => {
                self.render_human();
                Ok(())
            },
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if !self.verification_required {
            println!("{} does not support automatic verification.", self.document_type);
            return;
        }
        println!("{} requires:", self.document_type);
        for field in &self.fields {
            println!("  {field}");
        }
    }
}

impl CatalogOutput {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) -> serde_json::Result<()> {
        match mode {
            OutputMode::Human => {
                self.render_human();
                Ok(())
            },
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        println!("Documents:\n");
        for doc in &self.documents {
            let mut markers = Vec::new();
            if doc.verifiable {
                markers.push("Verifiable".blue().to_string());
            }
            if doc.needs_expiry_date {
                markers.push("Expiry date".to_string());
            }
            if markers.is_empty() {
                println!("  {}", doc.name.bold());
            } else {
                println!("  {} ({})", doc.name.bold(), markers.join(", "));
            }
            println!("  {}\n", doc.requirements);
        }
    }
}

impl ShareOutput {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) -> serde_json::Result<()> {
        match mode {
            OutputMode::Human => {
                self.render_human();
                Ok(())
            },
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        let code = &self.access_code;
        println!("Access code generated for {}", code.employer_name);
        println!("  Code: {}", code.code.bold());
        println!("  Expires: {}", code.expires_at.format("%d %b %Y"));
        println!("\n{}", self.share_text);
    }
}
