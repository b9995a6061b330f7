//! Identifier aliases and types re-exported from external crates for convenience.
//!
//! The re-exports are commonly used in this SDK so users don't need to add these
//! dependencies to their `Cargo.toml`.

/// Numeric id of a Dev or Live environment.
pub type EnvironmentId = i64;

/// Numeric id of a game application. Every application owns one Dev and one Live environment.
pub type ApplicationId = i64;

/// Numeric id of an event definition.
pub type EventId = i64;

/// Numeric id of a parameter definition.
pub type ParameterId = i64;

/// Secret string type that redacts the password and bearer token in debug output.
pub use secrecy::{ExposeSecret, SecretString};
/// Untyped JSON, used for remote bodies returned as-is.
pub use serde_json::{Map, Value};
/// Parsed URL type used for API hosts.
pub use url::Url;
