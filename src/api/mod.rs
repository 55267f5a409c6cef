//! SocialPizza REST API bindings
//!
//! All remote operations the client core consumes, grouped the way the
//! backend groups its controllers: session, events, admin, resources.

pub mod admin;
pub mod auth;
pub mod client;
pub mod events;
pub mod resources;

pub use auth::RegisterRequest;
pub use client::ApiClient;
