//! Data models module
//!
//! Wire shapes for the SocialPizza REST API. All records are owned by the
//! server; the client holds ephemeral, refetchable copies.

pub mod category;
pub mod event;
pub mod restaurant;
pub mod user;

// Re-export commonly used models
pub use category::{sort_categories, Category, CreateCategoryRequest};
pub use event::{CategoryRef, CreateEventRequest, Event, EventStatus, Participation};
pub use restaurant::{
    available_owners, AdminRestaurant, City, CreateRestaurantRequest, Restaurant,
};
pub use user::{AdminUser, CreateUserRequest, Role, SessionData, UserInfo, Viewer};
