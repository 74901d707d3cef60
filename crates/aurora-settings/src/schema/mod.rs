//! Persisted schema types.
//!
//! Field names serialize in camelCase, matching the JSON payloads
//! persisted under these storage keys.

mod icons;
mod settings;

pub use icons::*;
pub use settings::*;
