//! Server functions for the session user and session-scoped backend work.

use leptos::prelude::*;
use skill_time_platform_access::User;

/// Server function to get the current user.
///
/// No token, a rejected token, and a failed backend call all yield
/// `Ok(None)`: the shell treats every one of them as a guest.
#[server]
pub async fn get_current_user() -> Result<Option<User>, ServerFnError> {
    use crate::auth::session_user;
    use crate::backend::BackendClient;
    use axum::Extension;
    use axum_extra::extract::CookieJar;
    use std::sync::Arc;

    let jar: CookieJar = leptos_axum::extract().await?;
    let Extension(backend): Extension<Arc<BackendClient>> = leptos_axum::extract().await?;

    Ok(session_user(&backend, &jar).await)
}

/// Server function to end the current session.
///
/// The token cookie is cleared even if the backend call fails, so the
/// browser is logged out either way.
#[server]
pub async fn end_session() -> Result<(), ServerFnError> {
    use crate::auth::close_session;
    use crate::backend::BackendClient;
    use axum::Extension;
    use axum::http::{HeaderValue, header::SET_COOKIE};
    use axum_extra::extract::CookieJar;
    use leptos_axum::ResponseOptions;
    use std::sync::Arc;

    let jar: CookieJar = leptos_axum::extract().await?;
    let Extension(backend): Extension<Arc<BackendClient>> = leptos_axum::extract().await?;

    let removal = close_session(&backend, &jar).await;
    let removal = HeaderValue::from_str(&removal.to_string())
        .map_err(|e| ServerFnError::new(format!("Invalid cookie header: {}", e)))?;
    expect_context::<ResponseOptions>().append_header(SET_COOKIE, removal);

    tracing::info!("session ended");
    Ok(())
}

/// Server function to settle the current provider's pending earnings.
#[server]
pub async fn process_provider_earnings() -> Result<(), ServerFnError> {
    use crate::auth::TOKEN_COOKIE;
    use crate::backend::BackendClient;
    use axum::Extension;
    use axum_extra::extract::CookieJar;
    use std::sync::Arc;

    let jar: CookieJar = leptos_axum::extract().await?;
    let Extension(backend): Extension<Arc<BackendClient>> = leptos_axum::extract().await?;

    let Some(cookie) = jar.get(TOKEN_COOKIE) else {
        return Ok(());
    };

    backend
        .process_provider_earnings(cookie.value())
        .await
        .map_err(|report| {
            tracing::warn!(error = %report, "provider earnings processing failed");
            ServerFnError::new("Earnings processing failed")
        })
}
