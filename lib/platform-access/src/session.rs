//! The session provider contract and its caching implementation.
//!
//! The shell never owns session state. It asks a [`SessionProvider`] for the
//! current user snapshot and asks it to end the session. Providers decide how
//! long a snapshot stays valid; [`CachedSessionProvider`] keeps one snapshot
//! per stale-time window in front of any [`UserSource`].
//!
//! The UI runs on a single cooperative thread, so the futures here are not
//! required to be `Send`.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use skill_time_core::Result;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

use crate::error::SessionError;
use crate::user::User;

/// Default seconds a fetched user snapshot is served from the cache.
pub const DEFAULT_STALE_SECONDS: i64 = 300;

/// Supplies the current user snapshot and ends sessions.
#[async_trait(?Send)]
pub trait SessionProvider {
    /// Returns the current user, or `None` for a guest.
    async fn current_user(&self) -> Result<Option<User>, SessionError>;

    /// Starts ending the session, then sends the browser to `redirect`.
    ///
    /// Returns once the logout is initiated; completion is not awaited.
    fn logout(&self, redirect: &str) -> Result<(), SessionError>;
}

#[async_trait(?Send)]
impl<P: SessionProvider + ?Sized> SessionProvider for Arc<P> {
    async fn current_user(&self) -> Result<Option<User>, SessionError> {
        (**self).current_user().await
    }

    fn logout(&self, redirect: &str) -> Result<(), SessionError> {
        (**self).logout(redirect)
    }
}

/// Uncached origin of user snapshots, usually the marketplace backend.
#[async_trait(?Send)]
pub trait UserSource {
    /// Fetches the current user from the origin.
    async fn fetch_current_user(&self) -> Result<Option<User>, SessionError>;

    /// Ends the session at the origin and redirects to `redirect`.
    fn end_session(&self, redirect: &str) -> Result<(), SessionError>;
}

/// A snapshot together with the time it was fetched.
#[derive(Debug, Clone)]
struct CachedUser {
    user: Option<User>,
    fetched_at: DateTime<Utc>,
}

impl CachedUser {
    fn is_fresh(&self, stale_time: Duration) -> bool {
        Utc::now() - self.fetched_at < stale_time
    }
}

/// Session provider that serves one snapshot per stale-time window.
///
/// Successful fetches are cached, including a guest (`None`) result.
/// Failures are never cached. `logout` drops the snapshot before delegating,
/// so the next read after a logout always goes back to the source.
pub struct CachedSessionProvider<S> {
    source: S,
    stale_time: Duration,
    cache: Mutex<Option<CachedUser>>,
}

impl<S: UserSource> CachedSessionProvider<S> {
    /// Creates a provider with the default stale time.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self::with_stale_time(source, Duration::seconds(DEFAULT_STALE_SECONDS))
    }

    /// Creates a provider that serves a snapshot for `stale_time`.
    #[must_use]
    pub fn with_stale_time(source: S, stale_time: Duration) -> Self {
        Self {
            source,
            stale_time,
            cache: Mutex::new(None),
        }
    }

    /// Returns the underlying source.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns how long a snapshot is served before refetching.
    #[must_use]
    pub fn stale_time(&self) -> Duration {
        self.stale_time
    }

    /// Drops the cached snapshot so the next read refetches.
    pub fn invalidate(&self) {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
    }

    fn fresh_snapshot(&self) -> Option<Option<User>> {
        let cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        cache
            .as_ref()
            .filter(|cached| cached.is_fresh(self.stale_time))
            .map(|cached| cached.user.clone())
    }

    fn store(&self, user: Option<User>) {
        *self.cache.lock().unwrap_or_else(PoisonError::into_inner) = Some(CachedUser {
            user,
            fetched_at: Utc::now(),
        });
    }
}

#[async_trait(?Send)]
impl<S: UserSource> SessionProvider for CachedSessionProvider<S> {
    /// Serves the cached snapshot while fresh, otherwise fetches and stores.
    ///
    /// Concurrent reads are not coalesced: calls made while a fetch is still
    /// in flight each reach the source. The shell issues a single read per
    /// mount, so only the last completed fetch is kept.
    async fn current_user(&self) -> Result<Option<User>, SessionError> {
        if let Some(user) = self.fresh_snapshot() {
            debug!(signed_in = user.is_some(), "serving cached session user");
            return Ok(user);
        }

        let user = self.source.fetch_current_user().await?;
        debug!(signed_in = user.is_some(), "fetched session user");
        self.store(user.clone());
        Ok(user)
    }

    fn logout(&self, redirect: &str) -> Result<(), SessionError> {
        self.invalidate();
        self.source.end_session(redirect)
    }
}
