//! SocialPizza client core
//!
//! Client library for the SocialPizza group dining coordinator. It provides
//! the event visibility and action-eligibility core — role/status policy,
//! filter evaluation, list synchronization, moderation decisions — plus the
//! REST bindings that feed it and keep the session cookie alive.

pub mod api;
pub mod config;
pub mod models;
pub mod policy;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use api::ApiClient;
pub use config::Settings;
pub use utils::errors::{ApiError, PolicyError, Result, SocialPizzaError};

// Re-export main components for easy access
pub use policy::{
    permitted_actions, DecisionRecord, EventAction, ModerationDecision, PolicyConfig, Relation,
};
pub use state::{BoardState, EventFilter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
