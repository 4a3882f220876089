//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core business logic
//! and external systems (government verification APIs).
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The core domain logic depends only on these traits, never on concrete
//! implementations. Services take the backend as a parameter, so tests can
//! pass a fake and production can pass a real HTTP client.

mod backend;

pub use backend::{BackendCall, BackendError, VerificationBackend};
