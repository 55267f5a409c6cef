//! Client-side state management
//!
//! Filtering and synchronization of the event collections the viewer sees.

pub mod board;
pub mod filter;

pub use board::{BoardState, FetchGuard};
pub use filter::{DateFilter, EventFilter};
