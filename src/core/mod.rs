//! Core domain logic for carerpassport
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`DocumentType`, `VerificationRequest`, `VerificationResult`)
//! - `services/` - Verification dispatch, per-authority services, readiness
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
