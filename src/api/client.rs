//! HTTP plumbing for the SocialPizza REST API
//!
//! A thin wrapper over `reqwest` carrying the base URL, the configured
//! timeout and the cookie store that holds the session cookie. Non-2xx
//! responses become [`ApiError::Rejected`] with the server's body text
//! verbatim, so callers can surface it to the viewer unchanged.

use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use crate::config::ApiConfig;
use crate::utils::errors::{ApiError, Result, SocialPizzaError};

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a new ApiClient instance
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)?;
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .cookie_store(true)
            .user_agent("SocialPizza-Client/1.0")
            .build()
            .map_err(SocialPizzaError::Http)?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    /// Send a GET without checking the status; used where a 401 carries
    /// meaning (session probing) rather than being an error.
    pub(crate) async fn get_raw(&self, path: &str) -> Result<Response> {
        let url = self.endpoint(path)?;
        debug!(url = %url, "GET (raw)");
        self.http.get(url).send().await.map_err(map_send_error)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path)?;
        debug!(url = %url, "GET");
        let response = self.http.get(url).send().await.map_err(map_send_error)?;
        let response = check_status(response).await?;
        parse_json(response).await
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.endpoint(path)?;
        debug!(url = %url, "POST");
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(map_send_error)?;
        let response = check_status(response).await?;
        parse_json(response).await
    }

    /// POST without a body, discarding the response payload
    pub(crate) async fn post_for_status(&self, path: &str) -> Result<()> {
        let url = self.endpoint(path)?;
        debug!(url = %url, "POST");
        let response = self.http.post(url).send().await.map_err(map_send_error)?;
        check_status(response).await?;
        Ok(())
    }

    pub(crate) async fn delete_for_status(&self, path: &str) -> Result<()> {
        let url = self.endpoint(path)?;
        debug!(url = %url, "DELETE");
        let response = self.http.delete(url).send().await.map_err(map_send_error)?;
        check_status(response).await?;
        Ok(())
    }

    pub(crate) async fn patch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path)?;
        debug!(url = %url, "PATCH");
        let response = self.http.patch(url).send().await.map_err(map_send_error)?;
        let response = check_status(response).await?;
        parse_json(response).await
    }
}

/// Map transport failures onto the error taxonomy: timeouts and connection
/// failures get their fixed messages, everything else keeps reqwest's text.
fn map_send_error(e: reqwest::Error) -> SocialPizzaError {
    if e.is_timeout() {
        SocialPizzaError::Api(ApiError::Timeout)
    } else if e.is_connect() {
        SocialPizzaError::Api(ApiError::Unreachable)
    } else {
        SocialPizzaError::Api(ApiError::RequestFailed(e.to_string()))
    }
}

/// Turn a non-2xx response into a rejection carrying the body verbatim
pub(crate) async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    warn!(status = status.as_u16(), message = %message, "API request rejected");
    Err(SocialPizzaError::Api(ApiError::Rejected {
        status: status.as_u16(),
        message,
    }))
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    response
        .json()
        .await
        .map_err(|e| SocialPizzaError::Api(ApiError::InvalidResponse(e.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;

    #[test]
    fn test_endpoint_joins_paths() {
        let config = ApiConfig {
            base_url: "http://localhost:8081".to_string(),
            timeout_seconds: 5,
        };
        let client = ApiClient::new(&config).unwrap();
        let url = client.endpoint("/api/events/public").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8081/api/events/public");
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let config = ApiConfig {
            base_url: "not a url".to_string(),
            timeout_seconds: 5,
        };
        assert!(ApiClient::new(&config).is_err());
    }
}
