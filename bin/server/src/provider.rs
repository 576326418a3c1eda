//! Browser-side session source backed by the server functions.

use async_trait::async_trait;
use leptos::task::spawn_local;
use rootcause::prelude::Report;
use skill_time_platform_access::{SessionError, User, UserSource};

use crate::user::{end_session, get_current_user};

/// Reads and ends the session through this server's server functions.
///
/// Wrap it in a [`CachedSessionProvider`](skill_time_platform_access::CachedSessionProvider)
/// to get one fetch per stale-time window.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerFnSessionProvider;

#[async_trait(?Send)]
impl UserSource for ServerFnSessionProvider {
    async fn fetch_current_user(&self) -> Result<Option<User>, Report<SessionError>> {
        get_current_user().await.map_err(|e| {
            SessionError::FetchFailed {
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn end_session(&self, redirect: &str) -> Result<(), Report<SessionError>> {
        let redirect = redirect.to_string();
        spawn_local(async move {
            if let Err(e) = end_session().await {
                leptos::logging::warn!("ending session failed: {e}");
            }
            navigate_to(&redirect);
        });
        Ok(())
    }
}

/// Sends the browser to `target` with a full page load.
///
/// A full load drops every cached resource, so the next shell starts from a
/// fresh session read.
#[cfg(feature = "hydrate")]
fn navigate_to(target: &str) {
    if let Err(e) = leptos::prelude::window().location().set_href(target) {
        leptos::logging::warn!("redirect to {target} failed: {e:?}");
    }
}

#[cfg(not(feature = "hydrate"))]
fn navigate_to(_target: &str) {}
