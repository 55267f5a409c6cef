//! Event model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::restaurant::Restaurant;
use super::user::UserInfo;

/// Lifecycle status of an event.
///
/// Transitions are one-directional: a PENDING event moves to APPROVED or
/// REJECTED and never comes back.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    Pending,
    Approved,
    Rejected,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Pending => "PENDING",
            EventStatus::Approved => "APPROVED",
            EventStatus::Rejected => "REJECTED",
        }
    }

    /// Whether no further moderation transition can leave this status
    pub fn is_terminal(&self) -> bool {
        !matches!(self, EventStatus::Pending)
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub event_date: DateTime<Utc>,
    pub max_participants: i32,
    pub status: EventStatus,
    pub category: Category,
    pub restaurant: Restaurant,
    pub organizer: UserInfo,
    /// Present only when status is REJECTED
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    /// Present only when a moderator left a comment (APPROVED or REJECTED)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moderator_comment: Option<String>,
}

/// Reference payload used when only the id travels on the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: i64,
}

/// Payload for the create-event endpoint; the restaurant id travels as a
/// query parameter, the category as an id-only reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub event_date: DateTime<Utc>,
    pub max_participants: i32,
    pub status: EventStatus,
    pub category: CategoryRef,
}

impl CreateEventRequest {
    pub fn new(
        title: impl Into<String>,
        description: Option<String>,
        event_date: DateTime<Utc>,
        max_participants: i32,
        category_id: i64,
    ) -> Self {
        Self {
            title: title.into(),
            description,
            event_date,
            max_participants,
            status: EventStatus::Pending,
            category: CategoryRef { id: category_id },
        }
    }
}

/// A user's registration to an event, as returned by the participants listing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participation {
    pub id: i64,
    pub user: UserInfo,
    pub registration_date: DateTime<Utc>,
}
