//! Category model

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Payload for the admin create-category endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
    pub description: String,
}

/// Sort categories for display: lexicographic by name, with the catch-all
/// "Altro" category (case-insensitive) always last.
pub fn sort_categories(categories: &mut [Category]) {
    categories.sort_by(|a, b| {
        let a_altro = a.name.eq_ignore_ascii_case("altro");
        let b_altro = b.name.eq_ignore_ascii_case("altro");
        match (a_altro, b_altro) {
            (true, false) => std::cmp::Ordering::Greater,
            (false, true) => std::cmp::Ordering::Less,
            _ => a.name.cmp(&b.name),
        }
    });
}
