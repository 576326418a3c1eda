//! HTTP client for the marketplace backend.
//!
//! Every call carries the caller's bearer token. The backend owns sessions,
//! so "who is this?" and "end this session" are both answered there.

use reqwest::StatusCode;
use skill_time_core::Result;
use skill_time_platform_access::User;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::config::BackendConfig;
use crate::error::BackendError;

/// Marketplace backend client.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
    earnings_function: String,
}

impl BackendClient {
    /// Creates a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| BackendError::ClientBuild {
                details: e.to_string(),
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            earnings_function: config.earnings_function.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Fetches the user the token belongs to.
    ///
    /// A rejected token (401/403) is a guest, not an error.
    #[instrument(skip(self, token))]
    pub async fn current_user(&self, token: &str) -> Result<Option<User>, BackendError> {
        let response = self
            .http
            .get(self.url("auth/me"))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| BackendError::Request {
                details: e.to_string(),
            })?;

        let status = response.status();
        if matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
            debug!(status = status.as_u16(), "token rejected by backend");
            return Ok(None);
        }
        if !status.is_success() {
            return Err(BackendError::Status {
                status: status.as_u16(),
            }
            .into());
        }

        let user = response
            .json::<User>()
            .await
            .map_err(|e| BackendError::Decode {
                details: e.to_string(),
            })?;
        Ok(Some(user))
    }

    /// Ends the token's session at the backend.
    #[instrument(skip(self, token))]
    pub async fn logout(&self, token: &str) -> Result<(), BackendError> {
        self.post_empty("auth/logout", token).await
    }

    /// Runs the provider earnings settlement function for the token's user.
    #[instrument(skip(self, token))]
    pub async fn process_provider_earnings(&self, token: &str) -> Result<(), BackendError> {
        let path = format!("functions/{}", self.earnings_function);
        self.post_empty(&path, token).await
    }

    async fn post_empty(&self, path: &str, token: &str) -> Result<(), BackendError> {
        let response = self
            .http
            .post(self.url(path))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| BackendError::Request {
                details: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status {
                status: status.as_u16(),
            }
            .into());
        }
        debug!(path, "backend call succeeded");
        Ok(())
    }
}
