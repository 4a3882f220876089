//! Command implementations

mod fields;
mod share;
mod types;
mod verify;

pub use fields::fields;
pub use share::share;
pub use types::types;
pub use verify::{VerifyArgs, verify};
