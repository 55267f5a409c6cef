//! Resource catalogs
//!
//! Cities, categories and restaurants used to populate filters and the
//! create-event flow. Categories come back display-sorted, with the
//! catch-all "Altro" last.

use crate::models::{sort_categories, Category, City, Restaurant};
use crate::utils::errors::Result;

use super::client::ApiClient;

impl ApiClient {
    pub async fn cities(&self) -> Result<Vec<City>> {
        self.get_json("/api/resources/cities").await
    }

    pub async fn categories(&self) -> Result<Vec<Category>> {
        let mut categories: Vec<Category> = self.get_json("/api/resources/categories").await?;
        sort_categories(&mut categories);
        Ok(categories)
    }

    pub async fn restaurants(&self) -> Result<Vec<Restaurant>> {
        self.get_json("/api/resources/restaurants").await
    }
}
