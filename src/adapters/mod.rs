//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `simulated` - Canned government responses after a random delay
//! - `http` - JSON over HTTP to the real APIs (feature `http`)

#[cfg(feature = "http")]
pub mod http;
pub mod simulated;

#[cfg(feature = "http")]
pub use http::HttpBackend;
pub use simulated::SimulatedBackend;
