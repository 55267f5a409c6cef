//! Restaurant and city models

use serde::{Deserialize, Serialize};

use super::user::{AdminUser, Role, UserInfo};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct City {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub max_capacity: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<City>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<UserInfo>,
}

/// Flat restaurant row used by the admin dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminRestaurant {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub max_capacity: i32,
    pub city_id: Option<i64>,
    pub owner_id: Option<i64>,
}

/// Payload for the admin create-restaurant endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRestaurantRequest {
    pub name: String,
    pub address: String,
    pub max_capacity: i32,
    pub city_id: i64,
    pub owner_id: i64,
}

/// Restaurateurs not yet assigned to a restaurant.
///
/// At most one restaurant per owner: the admin create flow only offers
/// owners that do not already appear on an existing restaurant.
pub fn available_owners<'a>(
    users: &'a [AdminUser],
    restaurants: &[AdminRestaurant],
) -> Vec<&'a AdminUser> {
    users
        .iter()
        .filter(|u| u.role == Role::Restaurateur)
        .filter(|u| !restaurants.iter().any(|r| r.owner_id == Some(u.id)))
        .collect()
}
