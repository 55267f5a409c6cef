//! Shared test helpers
//!
//! Builders for the wire models and a preconfigured client pointed at a
//! wiremock server.

#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use wiremock::MockServer;

use socialpizza::api::ApiClient;
use socialpizza::config::ApiConfig;
use socialpizza::models::{
    Category, City, Event, EventStatus, Restaurant, Role, UserInfo, Viewer,
};

pub fn user_info(id: i64, email: &str) -> UserInfo {
    UserInfo {
        id,
        name: format!("user-{}", id),
        email: email.to_string(),
    }
}

pub fn viewer(username: &str, role: Role) -> Viewer {
    Viewer {
        username: username.to_string(),
        name: "Test Viewer".to_string(),
        role,
    }
}

pub fn category(id: i64, name: &str) -> Category {
    Category {
        id,
        name: name.to_string(),
        description: String::new(),
    }
}

pub fn restaurant(id: i64, name: &str, owner_email: Option<&str>) -> Restaurant {
    Restaurant {
        id,
        name: name.to_string(),
        address: "Via Roma 1".to_string(),
        max_capacity: 80,
        city: Some(City {
            id: 10,
            name: "Torino".to_string(),
        }),
        owner: owner_email.map(|email| user_info(99, email)),
    }
}

pub fn event(id: i64, status: EventStatus) -> Event {
    event_at(id, status, "mario@example.com", None)
}

pub fn event_at(id: i64, status: EventStatus, organizer: &str, owner: Option<&str>) -> Event {
    Event {
        id,
        title: format!("Pizzata {}", id),
        description: Some("Una serata tra amici".to_string()),
        event_date: Utc.with_ymd_and_hms(2026, 9, 1, 20, 0, 0).unwrap(),
        max_participants: 10,
        status,
        category: category(1, "Anime"),
        restaurant: restaurant(2, "Da Gino", owner),
        organizer: user_info(3, organizer),
        rejection_reason: None,
        moderator_comment: None,
    }
}

/// Client pointed at a wiremock server
pub fn test_client(server: &MockServer) -> ApiClient {
    let config = ApiConfig {
        base_url: server.uri(),
        timeout_seconds: 5,
    };
    ApiClient::new(&config).expect("client for mock server")
}
