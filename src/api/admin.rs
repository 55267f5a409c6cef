//! Admin endpoints
//!
//! User, restaurant and category management plus the global event delete.
//! All of these require an ADMIN session; the server enforces it and the
//! client surfaces its refusals verbatim.

use tracing::info;

use crate::models::{
    AdminRestaurant, AdminUser, Category, CreateCategoryRequest, CreateRestaurantRequest,
    CreateUserRequest, Role,
};
use crate::utils::errors::Result;
use crate::utils::validation::{validate_restaurant_form, validate_user_form};

use super::client::ApiClient;

impl ApiClient {
    pub async fn admin_users(&self) -> Result<Vec<AdminUser>> {
        self.get_json("/api/admin/users").await
    }

    pub async fn admin_create_user(&self, request: &CreateUserRequest) -> Result<AdminUser> {
        validate_user_form(
            &request.name,
            &request.surname,
            &request.email,
            &request.password,
        )?;
        let user: AdminUser = self.post_json("/api/admin/users", request).await?;
        info!(user_id = user.id, email = %user.email, "User created");
        Ok(user)
    }

    pub async fn admin_update_role(&self, user_id: i64, role: Role) -> Result<AdminUser> {
        let updated: AdminUser = self
            .patch_json(&format!(
                "/api/admin/users/{}/role?role={}",
                user_id,
                role.as_str()
            ))
            .await?;
        info!(user_id = user_id, role = role.as_str(), "Role updated");
        Ok(updated)
    }

    /// Irreversible: ban a user account
    pub async fn admin_ban_user(&self, user_id: i64) -> Result<()> {
        self.delete_for_status(&format!("/api/admin/users/{}/ban", user_id))
            .await?;
        info!(user_id = user_id, "User banned");
        Ok(())
    }

    pub async fn admin_restaurants(&self) -> Result<Vec<AdminRestaurant>> {
        self.get_json("/api/admin/restaurants").await
    }

    pub async fn admin_create_restaurant(
        &self,
        request: &CreateRestaurantRequest,
    ) -> Result<AdminRestaurant> {
        validate_restaurant_form(
            &request.name,
            &request.address,
            Some(request.city_id),
            Some(request.owner_id),
        )?;
        let restaurant: AdminRestaurant = self.post_json("/api/admin/restaurants", request).await?;
        info!(restaurant_id = restaurant.id, "Restaurant created");
        Ok(restaurant)
    }

    pub async fn admin_delete_restaurant(&self, restaurant_id: i64) -> Result<()> {
        self.delete_for_status(&format!("/api/admin/restaurants/{}", restaurant_id))
            .await?;
        info!(restaurant_id = restaurant_id, "Restaurant deleted");
        Ok(())
    }

    pub async fn admin_categories(&self) -> Result<Vec<Category>> {
        self.get_json("/api/admin/categories").await
    }

    pub async fn admin_create_category(
        &self,
        request: &CreateCategoryRequest,
    ) -> Result<Category> {
        crate::utils::validation::validate_required("Category name", &request.name)?;
        let category: Category = self.post_json("/api/admin/categories", request).await?;
        info!(category_id = category.id, "Category created");
        Ok(category)
    }

    pub async fn admin_delete_category(&self, category_id: i64) -> Result<()> {
        self.delete_for_status(&format!("/api/admin/categories/{}", category_id))
            .await?;
        info!(category_id = category_id, "Category deleted");
        Ok(())
    }

    /// Global, irreversible event delete
    pub async fn admin_delete_event(&self, event_id: i64) -> Result<()> {
        self.delete_for_status(&format!("/api/admin/events/{}", event_id))
            .await?;
        info!(event_id = event_id, "Event deleted");
        Ok(())
    }
}
