//! Role/status policy
//!
//! Pure decision functions mapping (viewer, event, participation) to the set
//! of permitted actions. The viewer is always an explicit parameter; callers
//! issue the corresponding remote call and update local state on success.

pub mod moderation;

use std::collections::HashSet;

use crate::models::{Event, EventStatus, Role, Viewer};
use crate::utils::errors::PolicyError;

pub use moderation::{DecisionRecord, ModerationDecision};

/// Actions a viewer may take on a specific event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventAction {
    Join,
    Leave,
    Withdraw,
    ViewModeratorComment,
    ViewRejectionReason,
    Approve,
    Reject,
    Cancel,
    Delete,
}

/// Relation of a viewer to an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Organizer,
    Participant,
    Neither,
}

impl Relation {
    /// Derive the viewer's relation to an event from the joined-id set.
    ///
    /// Organizer wins over participant: an organizer auto-joined by the
    /// server still sees the organizer actions.
    pub fn of(viewer: &Viewer, event: &Event, joined_ids: &HashSet<i64>) -> Self {
        if event.organizer.email == viewer.username {
            Relation::Organizer
        } else if joined_ids.contains(&event.id) {
            Relation::Participant
        } else {
            Relation::Neither
        }
    }
}

/// Whether the viewer owns the restaurant hosting the event
pub fn owns_restaurant(viewer: &Viewer, event: &Event) -> bool {
    viewer.role == Role::Restaurateur
        && event
            .restaurant
            .owner
            .as_ref()
            .map_or(false, |owner| owner.email == viewer.username)
}

/// Policy knobs that are deployment decisions rather than fixed rules
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct PolicyConfig {
    /// Whether the server auto-approves an event a restaurateur creates at
    /// their own restaurant. The client always trusts the returned status;
    /// this flag only drives the expected outcome of the create flow.
    pub owner_auto_approval: bool,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            owner_auto_approval: true,
        }
    }
}

impl PolicyConfig {
    /// Status a newly created event is expected to come back with
    pub fn expected_creation_status(&self, viewer: &Viewer, owns_restaurant: bool) -> EventStatus {
        if self.owner_auto_approval && viewer.role == Role::Restaurateur && owns_restaurant {
            EventStatus::Approved
        } else {
            EventStatus::Pending
        }
    }
}

/// Compute the set of actions the viewer may take on the event.
///
/// Implements the role/status table: admins get the global delete and
/// nothing else; a restaurateur owning the hosting restaurant moderates or
/// cancels; everyone else acts through their relation to the event.
pub fn permitted_actions(
    viewer: &Viewer,
    event: &Event,
    joined_ids: &HashSet<i64>,
) -> HashSet<EventAction> {
    let mut actions = HashSet::new();

    if viewer.role == Role::Admin {
        actions.insert(EventAction::Delete);
        return actions;
    }

    if owns_restaurant(viewer, event) {
        match event.status {
            EventStatus::Pending => {
                actions.insert(EventAction::Approve);
                actions.insert(EventAction::Reject);
            }
            EventStatus::Approved => {
                actions.insert(EventAction::Cancel);
            }
            EventStatus::Rejected => {}
        }
        return actions;
    }

    match (Relation::of(viewer, event, joined_ids), event.status) {
        (Relation::Neither, EventStatus::Approved) => {
            actions.insert(EventAction::Join);
        }
        (Relation::Participant, EventStatus::Approved) => {
            actions.insert(EventAction::Leave);
        }
        (Relation::Organizer, EventStatus::Pending) => {
            actions.insert(EventAction::Withdraw);
        }
        (Relation::Organizer, EventStatus::Approved) => {
            if event.moderator_comment.is_some() {
                actions.insert(EventAction::ViewModeratorComment);
            }
        }
        (Relation::Organizer, EventStatus::Rejected) => {
            actions.insert(EventAction::ViewRejectionReason);
        }
        _ => {}
    }

    actions
}

/// Check that a join is legal before issuing the remote call.
///
/// Rejects joining a non-approved event, a duplicate join, and a full
/// event; each is an ineligible-action error surfaced as text.
pub fn check_join(
    event: &Event,
    already_joined: bool,
    participant_count: usize,
) -> Result<(), PolicyError> {
    if event.status != EventStatus::Approved {
        return Err(PolicyError::EventNotApproved { event_id: event.id });
    }
    if already_joined {
        return Err(PolicyError::AlreadyJoined { event_id: event.id });
    }
    if participant_count >= event.max_participants as usize {
        return Err(PolicyError::EventFull { event_id: event.id });
    }
    Ok(())
}
