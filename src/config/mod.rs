//! Configuration module
//!
//! Settings loaded from `config.toml` and `SOCIALPIZZA_*` environment
//! variables, with a validation pass before use.

pub mod settings;
pub mod validation;

pub use settings::{ApiConfig, CredentialsConfig, LoggingConfig, Settings};
