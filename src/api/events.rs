//! Event endpoints
//!
//! Fetches for the board and the scoped lists, the participation actions,
//! event creation and the moderation/cancellation calls. Every mutating call
//! returns only after the server confirmed it; local state updates are the
//! caller's job (confirm-then-mutate).

use tracing::info;

use crate::models::{CreateEventRequest, Event, Participation};
use crate::policy::DecisionRecord;
use crate::utils::errors::Result;

use super::client::ApiClient;

impl ApiClient {
    /// Public board: approved and pending events
    pub async fn public_events(&self) -> Result<Vec<Event>> {
        self.get_json("/api/events/public").await
    }

    /// All approved events (the admin's global view)
    pub async fn approved_events(&self) -> Result<Vec<Event>> {
        self.get_json("/api/events/approved").await
    }

    /// Events organized by the current viewer
    pub async fn created_events(&self) -> Result<Vec<Event>> {
        self.get_json("/api/events/created").await
    }

    /// Events the current viewer joined
    pub async fn joined_events(&self) -> Result<Vec<Event>> {
        self.get_json("/api/events/joined").await
    }

    /// Pending proposals at the current restaurateur's restaurant
    pub async fn pending_for_restaurateur(&self) -> Result<Vec<Event>> {
        self.get_json("/api/events/pending/for-restaurateur").await
    }

    /// Approved events at the current restaurateur's restaurant
    pub async fn approved_for_restaurateur(&self) -> Result<Vec<Event>> {
        self.get_json("/api/events/approved/for-restaurateur").await
    }

    /// All events hosted at a specific restaurant
    pub async fn events_by_restaurant(&self, restaurant_id: i64) -> Result<Vec<Event>> {
        self.get_json(&format!("/api/events/restaurant/{}", restaurant_id))
            .await
    }

    /// Participants registered to an event
    pub async fn participants(&self, event_id: i64) -> Result<Vec<Participation>> {
        self.get_json(&format!("/api/events/{}/participants", event_id))
            .await
    }

    /// Whether the current viewer participates in the event
    pub async fn is_participating(&self, event_id: i64) -> Result<bool> {
        self.get_json(&format!("/api/events/{}/is-participating", event_id))
            .await
    }

    /// Propose a new event at a restaurant; the server assigns the status
    pub async fn create_event(
        &self,
        request: &CreateEventRequest,
        restaurant_id: i64,
    ) -> Result<Event> {
        let created: Event = self
            .post_json(
                &format!("/api/events/create?restaurantId={}", restaurant_id),
                request,
            )
            .await?;
        info!(event_id = created.id, status = %created.status, "Event created");
        Ok(created)
    }

    /// Join an event
    pub async fn join_event(&self, event_id: i64) -> Result<()> {
        self.post_for_status(&format!("/api/events/{}/join", event_id))
            .await?;
        info!(event_id = event_id, "Join confirmed");
        Ok(())
    }

    /// Cancel the viewer's own participation
    pub async fn leave_event(&self, event_id: i64) -> Result<()> {
        self.delete_for_status(&format!("/api/events/{}/leave", event_id))
            .await?;
        info!(event_id = event_id, "Leave confirmed");
        Ok(())
    }

    /// Withdraw a still-pending proposal the viewer organized
    pub async fn withdraw_event(&self, event_id: i64) -> Result<()> {
        self.delete_for_status(&format!("/api/events/{}/withdraw", event_id))
            .await?;
        info!(event_id = event_id, "Withdraw confirmed");
        Ok(())
    }

    /// Transmit a validated moderation decision; exactly one PATCH
    pub async fn moderator_decision(&self, record: &DecisionRecord) -> Result<Event> {
        let updated: Event = self
            .patch_json(&format!(
                "/api/events/{}/moderator/decision?{}",
                record.event_id,
                record.query()
            ))
            .await?;
        info!(
            event_id = record.event_id,
            decision = record.decision.as_str(),
            "Moderation decision recorded"
        );
        Ok(updated)
    }

    /// Restaurateur cancellation of a confirmed event at their restaurant;
    /// irreversible, all participants are removed server-side.
    pub async fn cancel_event_by_restaurateur(&self, event_id: i64) -> Result<()> {
        self.delete_for_status(&format!("/api/events/{}/restaurateur/cancel", event_id))
            .await?;
        info!(event_id = event_id, "Cancellation confirmed");
        Ok(())
    }
}
