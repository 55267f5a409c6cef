//! Session endpoints
//!
//! Login, logout and session restore. The session cookie lives in the HTTP
//! client's cookie store; the viewer value it resolves to is passed
//! explicitly into every policy and state call.

use serde::Serialize;
use tracing::info;

use crate::models::{SessionData, UserInfo, Viewer};
use crate::utils::errors::{ApiError, Result, SocialPizzaError};
use crate::utils::validation::{validate_email, validate_password, validate_required};

use super::client::{check_status, ApiClient};

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Payload for self-service registration
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub password: String,
}

impl ApiClient {
    /// Exchange credentials for an authenticated session.
    ///
    /// Credentials are validated client-side first; a 401 surfaces the
    /// server's message verbatim.
    pub async fn login(&self, email: &str, password: &str) -> Result<Viewer> {
        validate_email(email)?;
        validate_required("Password", password)?;

        let data: SessionData = self
            .post_json("/api/auth/login", &LoginRequest { email, password })
            .await?;
        info!(username = %data.username, "Login succeeded");
        Ok(Viewer::from(data))
    }

    /// Invalidate the server session; the local viewer should be dropped
    /// by the caller regardless of the outcome.
    pub async fn logout(&self) -> Result<()> {
        self.post_for_status("/api/auth/logout").await?;
        info!("Logout completed");
        Ok(())
    }

    /// Validate the session cookie and restore the viewer.
    ///
    /// A 401 means "not logged in" and resolves to `None`; other failures
    /// propagate as errors.
    pub async fn current_session(&self) -> Result<Option<Viewer>> {
        let response = self.get_raw("/api/auth/me").await?;
        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Ok(None);
        }
        let response = check_status(response).await?;
        let data: SessionData = response
            .json()
            .await
            .map_err(|e| SocialPizzaError::Api(ApiError::InvalidResponse(e.to_string())))?;
        info!(username = %data.username, "Session restored");
        Ok(Some(Viewer::from(data)))
    }

    /// Register a new account
    pub async fn register(&self, request: &RegisterRequest) -> Result<UserInfo> {
        validate_required("Name", &request.name)?;
        validate_required("Surname", &request.surname)?;
        validate_email(&request.email)?;
        validate_password(&request.password)?;

        self.post_json("/api/auth/register", request).await
    }
}
