//! List synchronizer
//!
//! Keeps the client-visible event collections consistent with the outcomes of
//! join/leave/withdraw/delete/moderation actions without a full refetch. The
//! contract is confirm-then-mutate: every `record_*` method is called only
//! after a successful response has been observed, so the board can never show
//! a join the server did not confirm. A failed call mutates nothing; a full
//! reload is always a safe fallback.

use std::collections::HashSet;

use tracing::debug;

use crate::models::Event;
use crate::policy::ModerationDecision;

/// Sequence-token guard against stale fetch responses.
///
/// A refetch takes a token from `begin()`; a response is applied only if no
/// newer response has been applied already, so a superseded fetch completing
/// late cannot overwrite newer results.
#[derive(Debug, Clone, Default)]
pub struct FetchGuard {
    issued: u64,
    applied: u64,
}

impl FetchGuard {
    pub fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    pub fn try_apply(&mut self, token: u64) -> bool {
        if token > self.applied {
            self.applied = token;
            true
        } else {
            false
        }
    }
}

/// Client-visible event collections for one viewer session
#[derive(Debug, Clone, Default)]
pub struct BoardState {
    /// Public board (approved + pending events)
    pub public: Vec<Event>,
    /// Events the viewer organized
    pub created: Vec<Event>,
    /// Events the viewer joined
    pub joined: Vec<Event>,
    /// Pending proposals at the viewer's restaurant (restaurateur only)
    pub pending_for_restaurant: Vec<Event>,
    /// Approved events at the viewer's restaurant (restaurateur only)
    pub approved_for_restaurant: Vec<Event>,
    /// Ids of events the viewer participates in
    pub joined_ids: HashSet<i64>,
    public_fetches: FetchGuard,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the joined list and the derived joined-id set in one step
    pub fn set_joined(&mut self, events: Vec<Event>) {
        self.joined_ids = events.iter().map(|e| e.id).collect();
        self.joined = events;
    }

    /// Take a sequence token for a public-board refetch
    pub fn begin_public_fetch(&mut self) -> u64 {
        self.public_fetches.begin()
    }

    /// Apply a public-board fetch result; stale responses are discarded.
    ///
    /// Returns whether the result was applied.
    pub fn complete_public_fetch(&mut self, token: u64, events: Vec<Event>) -> bool {
        if self.public_fetches.try_apply(token) {
            self.public = events;
            true
        } else {
            debug!(token = token, "Discarding stale public board fetch");
            false
        }
    }

    pub fn is_joined(&self, event_id: i64) -> bool {
        self.joined_ids.contains(&event_id)
    }

    /// A confirmed join: the id enters the joined set; the public list is
    /// untouched (the event stays visible with its joined marker).
    pub fn record_join(&mut self, event_id: i64) {
        self.joined_ids.insert(event_id);
        debug!(event_id = event_id, "Recorded confirmed join");
    }

    /// A confirmed leave: the event drops from the joined list and set
    pub fn record_leave(&mut self, event_id: i64) {
        self.joined_ids.remove(&event_id);
        self.joined.retain(|e| e.id != event_id);
        debug!(event_id = event_id, "Recorded confirmed leave");
    }

    /// A confirmed withdraw: the server deleted the proposal, so it drops
    /// from every local list.
    pub fn record_withdraw(&mut self, event_id: i64) {
        self.remove_everywhere(event_id);
        debug!(event_id = event_id, "Recorded confirmed withdraw");
    }

    /// A confirmed moderation decision: the event leaves the pending list.
    /// An approved event becomes eligible for the public board on the next
    /// refetch; nothing is inserted locally.
    pub fn record_decision(&mut self, event_id: i64, decision: ModerationDecision) {
        self.pending_for_restaurant.retain(|e| e.id != event_id);
        debug!(
            event_id = event_id,
            decision = decision.as_str(),
            "Recorded moderation decision"
        );
    }

    /// A confirmed admin delete: the event drops from every local list
    pub fn record_delete(&mut self, event_id: i64) {
        self.remove_everywhere(event_id);
        debug!(event_id = event_id, "Recorded confirmed delete");
    }

    /// A confirmed restaurateur cancellation: like a delete, all participants
    /// are gone with the event.
    pub fn record_cancel(&mut self, event_id: i64) {
        self.remove_everywhere(event_id);
        debug!(event_id = event_id, "Recorded confirmed cancellation");
    }

    fn remove_everywhere(&mut self, event_id: i64) {
        self.public.retain(|e| e.id != event_id);
        self.created.retain(|e| e.id != event_id);
        self.joined.retain(|e| e.id != event_id);
        self.pending_for_restaurant.retain(|e| e.id != event_id);
        self.approved_for_restaurant.retain(|e| e.id != event_id);
        self.joined_ids.remove(&event_id);
    }

    /// Whether any local list still contains the event
    pub fn contains(&self, event_id: i64) -> bool {
        self.public.iter().any(|e| e.id == event_id)
            || self.created.iter().any(|e| e.id == event_id)
            || self.joined.iter().any(|e| e.id == event_id)
            || self.pending_for_restaurant.iter().any(|e| e.id == event_id)
            || self.approved_for_restaurant.iter().any(|e| e.id == event_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    use crate::models::{Category, EventStatus, Restaurant, UserInfo};

    fn event(id: i64, status: EventStatus) -> Event {
        Event {
            id,
            title: format!("evento {}", id),
            description: None,
            event_date: Utc.with_ymd_and_hms(2026, 9, 1, 20, 0, 0).unwrap(),
            max_participants: 10,
            status,
            category: Category {
                id: 1,
                name: "Anime".to_string(),
                description: String::new(),
            },
            restaurant: Restaurant {
                id: 2,
                name: "Da Gino".to_string(),
                address: "Via Roma 1".to_string(),
                max_capacity: 80,
                city: None,
                owner: None,
            },
            organizer: UserInfo {
                id: 3,
                name: "Mario".to_string(),
                email: "mario@example.com".to_string(),
            },
            rejection_reason: None,
            moderator_comment: None,
        }
    }

    #[test]
    fn test_join_keeps_event_on_public_board() {
        let mut board = BoardState::new();
        board.public = vec![event(7, EventStatus::Approved)];

        board.record_join(7);

        assert!(board.is_joined(7));
        assert!(board.public.iter().any(|e| e.id == 7));
    }

    #[test]
    fn test_leave_removes_from_joined_list_only() {
        let mut board = BoardState::new();
        board.public = vec![event(7, EventStatus::Approved)];
        board.set_joined(vec![event(7, EventStatus::Approved)]);

        board.record_leave(7);

        assert!(!board.is_joined(7));
        assert!(board.joined.is_empty());
        assert!(board.public.iter().any(|e| e.id == 7));
    }

    #[test]
    fn test_withdraw_removes_everywhere() {
        let mut board = BoardState::new();
        board.public = vec![event(5, EventStatus::Pending)];
        board.created = vec![event(5, EventStatus::Pending)];

        board.record_withdraw(5);

        assert!(!board.contains(5));
    }

    #[test]
    fn test_decision_removes_from_pending_without_local_insert() {
        let mut board = BoardState::new();
        board.pending_for_restaurant = vec![event(9, EventStatus::Pending)];

        board.record_decision(9, ModerationDecision::Approved);

        assert!(board.pending_for_restaurant.is_empty());
        assert!(board.public.is_empty());
    }

    #[test]
    fn test_delete_removes_from_every_seeded_list() {
        let mut board = BoardState::new();
        board.public = vec![event(3, EventStatus::Approved)];
        board.created = vec![event(3, EventStatus::Approved)];
        board.set_joined(vec![event(3, EventStatus::Approved)]);
        board.approved_for_restaurant = vec![event(3, EventStatus::Approved)];

        board.record_delete(3);

        assert!(!board.contains(3));
        assert!(!board.is_joined(3));
    }

    #[test]
    fn test_stale_fetch_is_discarded() {
        let mut board = BoardState::new();
        let older = board.begin_public_fetch();
        let newer = board.begin_public_fetch();

        assert!(board.complete_public_fetch(newer, vec![event(2, EventStatus::Approved)]));
        assert!(!board.complete_public_fetch(older, vec![event(1, EventStatus::Approved)]));

        assert_eq!(board.public.len(), 1);
        assert_eq!(board.public[0].id, 2);
    }

    #[test]
    fn test_fetch_guard_applies_in_order() {
        let mut guard = FetchGuard::default();
        let first = guard.begin();
        let second = guard.begin();
        assert!(guard.try_apply(first));
        assert!(guard.try_apply(second));
        assert!(!guard.try_apply(first));
    }
}
