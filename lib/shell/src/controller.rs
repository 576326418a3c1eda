//! Shell controller: session read, view derivation, logout, task mount.

use skill_time_navigation::{NavigationCatalog, PageName, RouteTarget, UrlBuilder};
use skill_time_platform_access::{SessionProvider, User};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info, instrument, warn};

use crate::task::BackgroundTask;
use crate::view::{ViewState, derive_view_state};

/// Binds a session provider to renderable view state and user actions.
///
/// The controller holds no session state of its own. Every read goes to the
/// injected provider, and logging out is entirely the provider's business.
pub struct ShellController<P, U> {
    provider: P,
    urls: U,
    catalog: NavigationCatalog,
    logout_page: PageName,
    task_mounted: AtomicBool,
}

impl<P: SessionProvider, U: UrlBuilder> ShellController<P, U> {
    /// Creates a controller that sends users to the marketplace on logout.
    #[must_use]
    pub fn new(provider: P, urls: U, catalog: NavigationCatalog) -> Self {
        Self {
            provider,
            urls,
            catalog,
            logout_page: PageName::Marketplace,
            task_mounted: AtomicBool::new(false),
        }
    }

    /// Sets the page users land on after logging out.
    #[must_use]
    pub fn with_logout_page(mut self, page: PageName) -> Self {
        self.logout_page = page;
        self
    }

    #[must_use]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    #[must_use]
    pub fn catalog(&self) -> &NavigationCatalog {
        &self.catalog
    }

    /// Reads the current user from the provider.
    ///
    /// Any provider failure is logged and reported as a guest; callers cannot
    /// tell "fetch failed" from "not signed in".
    #[instrument(skip(self))]
    pub async fn load_session(&self) -> Option<User> {
        match self.provider.current_user().await {
            Ok(user) => {
                debug!(signed_in = user.is_some(), "session loaded");
                user
            }
            Err(report) => {
                warn!(error = %report, "session unavailable, rendering guest shell");
                None
            }
        }
    }

    /// Projects a user snapshot onto view state.
    #[must_use]
    pub fn derive_view_state(&self, user: Option<&User>) -> ViewState {
        derive_view_state(&self.catalog, &self.urls, user)
    }

    /// Resolves the configured post-logout page.
    #[must_use]
    pub fn logout_target(&self) -> RouteTarget {
        self.urls.resolve(self.logout_page)
    }

    /// Asks the provider to end the session and redirect to `target`.
    ///
    /// Fire-and-forget: no local state is cleared and nothing is recomputed.
    /// A failure to initiate is logged, never returned.
    pub fn logout(&self, target: &RouteTarget) {
        info!(redirect = %target, "logging out");
        if let Err(report) = self.provider.logout(target.as_str()) {
            warn!(error = %report, "failed to initiate logout");
        }
    }

    /// Starts `task` unless a task was already mounted by this controller.
    ///
    /// Returns true if the task was started.
    pub fn mount<T: BackgroundTask + ?Sized>(&self, task: &T) -> bool {
        if self.task_mounted.swap(true, Ordering::AcqRel) {
            debug!(task = task.name(), "background task already mounted");
            return false;
        }
        info!(task = task.name(), "mounting background task");
        task.start();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use rootcause::prelude::Report;
    use skill_time_core::UserId;
    use skill_time_navigation::PageUrlBuilder;
    use skill_time_platform_access::{Role, SessionError};
    use std::cell::{Cell, RefCell};

    /// Provider returning a fixed answer and recording logouts.
    struct FakeProvider {
        answer: Result<Option<User>, SessionError>,
        fetches: Cell<u32>,
        logouts: RefCell<Vec<String>>,
        fail_logout: bool,
    }

    impl FakeProvider {
        fn returning(answer: Result<Option<User>, SessionError>) -> Self {
            Self {
                answer,
                fetches: Cell::new(0),
                logouts: RefCell::new(Vec::new()),
                fail_logout: false,
            }
        }
    }

    #[async_trait(?Send)]
    impl SessionProvider for FakeProvider {
        async fn current_user(&self) -> Result<Option<User>, Report<SessionError>> {
            self.fetches.set(self.fetches.get() + 1);
            self.answer.clone().map_err(Report::from)
        }

        fn logout(&self, redirect: &str) -> Result<(), Report<SessionError>> {
            self.logouts.borrow_mut().push(redirect.to_string());
            if self.fail_logout {
                return Err(SessionError::LogoutFailed {
                    reason: "no window".to_string(),
                }
                .into());
            }
            Ok(())
        }
    }

    /// URL builder counting resolutions, i.e. navigation recomputations.
    #[derive(Default)]
    struct CountingUrlBuilder {
        inner: PageUrlBuilder,
        resolved: Cell<u32>,
    }

    impl UrlBuilder for CountingUrlBuilder {
        fn resolve(&self, page: PageName) -> RouteTarget {
            self.resolved.set(self.resolved.get() + 1);
            self.inner.resolve(page)
        }
    }

    #[derive(Default)]
    struct CountingTask {
        starts: Cell<u32>,
    }

    impl BackgroundTask for CountingTask {
        fn name(&self) -> &str {
            "counting"
        }

        fn start(&self) {
            self.starts.set(self.starts.get() + 1);
        }
    }

    fn controller(
        answer: Result<Option<User>, SessionError>,
    ) -> ShellController<FakeProvider, CountingUrlBuilder> {
        ShellController::new(
            FakeProvider::returning(answer),
            CountingUrlBuilder::default(),
            NavigationCatalog::standard(),
        )
    }

    fn admin() -> User {
        let mut user = User::new(UserId::from("usr-admin"));
        user.set_role(Role::Admin);
        user
    }

    #[tokio::test]
    async fn load_session_returns_provider_user() {
        let shell = controller(Ok(Some(admin())));

        let user = shell.load_session().await;

        assert_eq!(user, Some(admin()));
        assert_eq!(shell.provider().fetches.get(), 1);
    }

    #[tokio::test]
    async fn fetch_failure_collapses_to_guest() {
        let shell = controller(Err(SessionError::FetchFailed {
            reason: "timeout".to_string(),
        }));

        let user = shell.load_session().await;
        let view = shell.derive_view_state(user.as_ref());

        assert!(user.is_none());
        assert!(!view.signed_in);
        assert_eq!(view, controller(Ok(None)).derive_view_state(None));
    }

    #[tokio::test]
    async fn load_session_does_not_retry() {
        let shell = controller(Err(SessionError::Unauthenticated));

        shell.load_session().await;

        assert_eq!(shell.provider().fetches.get(), 1);
    }

    #[tokio::test]
    async fn admin_session_view_ends_with_admin_panel() {
        let shell = controller(Ok(Some(admin())));

        let user = shell.load_session().await;
        let view = shell.derive_view_state(user.as_ref());

        assert!(view.navigation.is_admin);
        assert_eq!(view.navigation.titles().last(), Some(&"Admin Panel"));
    }

    #[test]
    fn logout_delegates_once_without_recomputing_navigation() {
        let shell = controller(Ok(Some(admin())));
        let target = RouteTarget::new("/marketplace");

        shell.logout(&target);

        assert_eq!(*shell.provider().logouts.borrow(), vec!["/marketplace"]);
        assert_eq!(shell.urls.resolved.get(), 0);
        assert_eq!(shell.provider().fetches.get(), 0);
    }

    #[test]
    fn logout_failure_is_swallowed() {
        let mut provider = FakeProvider::returning(Ok(None));
        provider.fail_logout = true;
        let shell = ShellController::new(
            provider,
            PageUrlBuilder::new(),
            NavigationCatalog::standard(),
        );

        shell.logout(&RouteTarget::new("/marketplace"));

        assert_eq!(shell.provider().logouts.borrow().len(), 1);
    }

    #[test]
    fn logout_target_defaults_to_marketplace() {
        let shell = controller(Ok(None));
        assert_eq!(shell.logout_target().as_str(), "/marketplace");

        let shell = controller(Ok(None)).with_logout_page(PageName::Profile);
        assert_eq!(shell.logout_target().as_str(), "/profile");
    }

    #[test]
    fn mount_starts_task_once() {
        let shell = controller(Ok(None));
        let task = CountingTask::default();

        assert!(shell.mount(&task));
        assert!(!shell.mount(&task));
        assert_eq!(task.starts.get(), 1);
    }

    #[test]
    fn derive_view_state_recomputes_each_call() {
        let shell = controller(Ok(None));

        let first = shell.derive_view_state(None);
        let resolved_once = shell.urls.resolved.get();
        let second = shell.derive_view_state(None);

        assert_eq!(first, second);
        assert_eq!(resolved_once, 4);
        assert_eq!(shell.urls.resolved.get(), 8);
    }
}
