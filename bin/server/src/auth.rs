//! Token cookie handling and the login callback route.
//!
//! The backend's hosted login redirects back to `/auth/callback` with an
//! access token. The server keeps that token in an HttpOnly cookie and
//! forwards it on every backend call made on the user's behalf.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use skill_time_platform_access::User;
use std::sync::Arc;
use time::Duration as TimeDuration;

use crate::backend::BackendClient;
use crate::config::SessionConfig;

/// Cookie holding the backend access token.
pub const TOKEN_COOKIE: &str = "skill_time_token";

/// Shared application state.
pub struct AppState {
    /// Marketplace backend client.
    pub backend: Arc<BackendClient>,
    /// Session cookie configuration.
    pub session_config: SessionConfig,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(backend: Arc<BackendClient>, session_config: SessionConfig) -> Self {
        Self {
            backend,
            session_config,
        }
    }
}

/// Returns `target` if it is a same-origin path, otherwise `/`.
///
/// Browsers drop tab, CR and LF from a `Location` value, so a target with
/// any control character is refused outright.
pub fn safe_redirect(target: &str) -> &str {
    let local = target.starts_with('/')
        && !target.starts_with("//")
        && !target.contains('\\')
        && !target.chars().any(char::is_control);
    if local {
        target
    } else {
        "/"
    }
}

/// Builds the cookie that clears the stored token.
pub fn token_removal_cookie() -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, ""))
        .path("/")
        .max_age(TimeDuration::ZERO)
        .build()
}

/// Resolves the request's token cookie to the session user.
///
/// No cookie, a rejected token and a failed backend call are all a guest.
pub async fn session_user(backend: &BackendClient, jar: &CookieJar) -> Option<User> {
    let token = jar.get(TOKEN_COOKIE)?;
    match backend.current_user(token.value()).await {
        Ok(user) => user,
        Err(report) => {
            tracing::warn!(error = %report, "current user lookup failed");
            None
        }
    }
}

/// Ends the backend session behind the token cookie, if there is one.
///
/// Returns the cookie that clears the token. It is returned even when the
/// backend call fails, so the browser is logged out either way.
pub async fn close_session(backend: &BackendClient, jar: &CookieJar) -> Cookie<'static> {
    if let Some(cookie) = jar.get(TOKEN_COOKIE) {
        if let Err(report) = backend.logout(cookie.value()).await {
            tracing::warn!(error = %report, "backend logout failed");
        }
    }
    token_removal_cookie()
}

/// Query parameters for the login callback.
#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    access_token: String,
    #[serde(default)]
    from_url: Option<String>,
}

/// Stores the access token handed back by the backend's hosted login.
pub async fn callback(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CallbackQuery>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AuthError> {
    if query.access_token.trim().is_empty() {
        return Err(AuthError::MissingToken);
    }

    let user = state
        .backend
        .current_user(&query.access_token)
        .await
        .map_err(|e| AuthError::Backend(e.to_string()))?;
    if user.is_none() {
        return Err(AuthError::InvalidToken);
    }

    let cookie = Cookie::build((TOKEN_COOKIE, query.access_token))
        .path("/")
        .http_only(true)
        .secure(state.session_config.secure_cookies)
        .same_site(SameSite::Lax)
        .max_age(TimeDuration::minutes(state.session_config.token_max_age_minutes));

    let target = safe_redirect(query.from_url.as_deref().unwrap_or("/")).to_string();
    tracing::info!("session token stored");

    Ok((jar.add(cookie), Redirect::to(&target)))
}

/// Login callback errors.
#[derive(Debug)]
pub enum AuthError {
    MissingToken,
    InvalidToken,
    Backend(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::MissingToken => (StatusCode::BAD_REQUEST, "Missing access token"),
            Self::InvalidToken => (StatusCode::UNAUTHORIZED, "Access token was rejected"),
            Self::Backend(msg) => {
                tracing::error!("Backend error during login callback: {}", msg);
                (StatusCode::BAD_GATEWAY, "Authentication failed")
            }
        };

        (status, message).into_response()
    }
}
