//! Board flow tests
//!
//! Scenario coverage for the policy + synchronizer pair without any network:
//! what actions render, and how confirmed outcomes move events between the
//! local lists.

mod helpers;

use std::collections::HashSet;

use helpers::*;
use socialpizza::models::{EventStatus, Role};
use socialpizza::policy::{
    permitted_actions, DecisionRecord, EventAction, ModerationDecision, Relation,
};
use socialpizza::state::BoardState;
use socialpizza::utils::errors::PolicyError;

#[test]
fn join_never_offered_on_non_approved_events() {
    let joined = HashSet::new();
    for status in [EventStatus::Pending, EventStatus::Rejected] {
        let evt = event_at(1, status, "mario@example.com", Some("gino@example.com"));
        for role in [Role::User, Role::Restaurateur, Role::Admin] {
            let v = viewer("anna@example.com", role);
            assert!(
                !permitted_actions(&v, &evt, &joined).contains(&EventAction::Join),
                "join offered for {:?} viewer on {:?} event",
                role,
                status
            );
        }
    }
}

#[test]
fn confirmed_join_keeps_event_public() {
    let mut board = BoardState::new();
    let token = board.begin_public_fetch();
    board.complete_public_fetch(
        token,
        vec![event(7, EventStatus::Approved), event(8, EventStatus::Approved)],
    );

    board.record_join(7);

    assert!(board.joined_ids.contains(&7));
    assert!(board.public.iter().any(|e| e.id == 7));
}

#[test]
fn admin_delete_empties_every_list() {
    let mut board = BoardState::new();
    let token = board.begin_public_fetch();
    board.complete_public_fetch(token, vec![event(3, EventStatus::Approved)]);
    board.created = vec![event(3, EventStatus::Approved)];
    board.set_joined(vec![event(3, EventStatus::Approved)]);
    board.pending_for_restaurant = vec![event(3, EventStatus::Approved)];
    board.approved_for_restaurant = vec![event(3, EventStatus::Approved)];

    board.record_delete(3);

    assert!(!board.contains(3));
    assert!(!board.joined_ids.contains(&3));
}

#[test]
fn organizer_relation_wins_over_participation() {
    let organizer = viewer("mario@example.com", Role::User);
    let evt = event_at(5, EventStatus::Pending, "mario@example.com", None);
    let joined: HashSet<i64> = [5].into_iter().collect();

    assert_eq!(Relation::of(&organizer, &evt, &joined), Relation::Organizer);
    assert!(permitted_actions(&organizer, &evt, &joined).contains(&EventAction::Withdraw));
}

#[test]
fn decision_applies_only_to_pending_events() {
    let record = DecisionRecord::new(9, ModerationDecision::Approved, "").unwrap();

    let pending = event_at(9, EventStatus::Pending, "mario@example.com", Some("gino@example.com"));
    assert!(record.validate_against(&pending).is_ok());

    let rejected = event_at(9, EventStatus::Rejected, "mario@example.com", Some("gino@example.com"));
    assert_eq!(
        record.validate_against(&rejected),
        Err(PolicyError::InvalidStateTransition {
            from: "REJECTED".to_string(),
            to: "APPROVED".to_string(),
        })
    );
}

#[test]
fn withdraw_and_cancel_remove_the_event_everywhere() {
    let mut board = BoardState::new();
    board.public = vec![event(5, EventStatus::Pending), event(6, EventStatus::Approved)];
    board.created = vec![event(5, EventStatus::Pending)];
    board.approved_for_restaurant = vec![event(6, EventStatus::Approved)];
    board.set_joined(vec![event(6, EventStatus::Approved)]);

    board.record_withdraw(5);
    assert!(!board.contains(5));

    board.record_cancel(6);
    assert!(!board.contains(6));
    assert!(!board.joined_ids.contains(&6));
}
