//! Moderation decision recorder
//!
//! Captures a restaurant owner's accept/reject decision on a PENDING event,
//! enforces the rejection-comment rule, and formats the decision for the
//! moderation endpoint. APPROVED and REJECTED are terminal here; later
//! cancellation is a separate action, never a re-entry to PENDING.

use serde::{Deserialize, Serialize};

use crate::models::{Event, EventStatus};
use crate::utils::errors::PolicyError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModerationDecision {
    Approved,
    Rejected,
}

impl ModerationDecision {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModerationDecision::Approved => "APPROVED",
            ModerationDecision::Rejected => "REJECTED",
        }
    }

    /// Event status this decision transitions the event into
    pub fn resulting_status(&self) -> EventStatus {
        match self {
            ModerationDecision::Approved => EventStatus::Approved,
            ModerationDecision::Rejected => EventStatus::Rejected,
        }
    }
}

/// A validated moderation decision, ready for transmission.
///
/// Construction fails when a rejection carries an empty comment, so an
/// invalid decision can never reach the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionRecord {
    pub event_id: i64,
    pub decision: ModerationDecision,
    comment: Option<String>,
}

impl DecisionRecord {
    pub fn new(
        event_id: i64,
        decision: ModerationDecision,
        comment: &str,
    ) -> Result<Self, PolicyError> {
        let trimmed = comment.trim();
        if decision == ModerationDecision::Rejected && trimmed.is_empty() {
            return Err(PolicyError::EmptyRejectionComment);
        }
        Ok(Self {
            event_id,
            decision,
            comment: if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            },
        })
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Verify the decision applies to the event's current status.
    ///
    /// Only PENDING events can be decided; deciding a terminal event is an
    /// invalid state transition.
    pub fn validate_against(&self, event: &Event) -> Result<(), PolicyError> {
        if event.status != EventStatus::Pending {
            return Err(PolicyError::InvalidStateTransition {
                from: event.status.to_string(),
                to: self.decision.resulting_status().to_string(),
            });
        }
        Ok(())
    }

    /// Query string the moderation endpoint expects, comment percent-encoded
    pub fn query(&self) -> String {
        match &self.comment {
            Some(comment) => format!(
                "decision={}&comment={}",
                self.decision.as_str(),
                urlencoding::encode(comment)
            ),
            None => format!("decision={}&comment=", self.decision.as_str()),
        }
    }
}
