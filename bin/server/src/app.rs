//! Main Leptos application component and the application shell.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    components::{Route, Router, Routes},
    hooks::{use_location, use_params_map},
    path,
};
use skill_time_navigation::{NavigationCatalog, NavigationItem, PageName, PageUrlBuilder};
use skill_time_platform_access::CachedSessionProvider;
use skill_time_shell::{ShellController, ViewState};
use std::sync::Arc;

use crate::earnings::EarningsProcessor;
use crate::provider::ServerFnSessionProvider;

/// Shell controller as wired in the browser.
pub type AppShellController =
    ShellController<CachedSessionProvider<ServerFnSessionProvider>, PageUrlBuilder>;

/// The main application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Skill-Time"/>
        <Router>
            <AppShell>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=PageOutlet/>
                    <Route path=path!("/:page") view=PageOutlet/>
                </Routes>
            </AppShell>
        </Router>
    }
}

/// Persistent frame around every page: sidebar, account sections, logout.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let controller: Arc<AppShellController> = Arc::new(ShellController::new(
        CachedSessionProvider::new(ServerFnSessionProvider),
        PageUrlBuilder::new(),
        NavigationCatalog::standard(),
    ));

    // Loads in the browser only; until it resolves the shell renders as a guest.
    let session = LocalResource::new({
        let controller = Arc::clone(&controller);
        move || {
            let controller = Arc::clone(&controller);
            async move { controller.load_session().await }
        }
    });

    let view_state = Memo::new({
        let controller = Arc::clone(&controller);
        move |_| {
            let user = session.get().flatten();
            controller.derive_view_state(user.as_ref())
        }
    });

    Effect::new({
        let controller = Arc::clone(&controller);
        move |_| {
            controller.mount(&EarningsProcessor);
        }
    });

    let location = use_location();
    let active_title = Memo::new(move |_| {
        let path = location.pathname.get();
        view_state.with(|state| {
            state
                .navigation
                .active_item(&path)
                .map(|item| item.title.clone())
        })
    });

    let on_logout = {
        let controller = Arc::clone(&controller);
        move |_| {
            let target = controller.logout_target();
            controller.logout(&target);
        }
    };

    let home_href = controller.logout_target().to_string();
    let signed_in = move || view_state.with(|state| state.signed_in);

    view! {
        <div class="shell">
            <aside class="sidebar">
                <header class="sidebar-header">
                    <a href=home_href class="brand">
                        <span class="brand-mark" data-icon="graduation-cap"></span>
                        <div>
                            <h2 class="brand-name">"Skill-Time"</h2>
                            <p class="brand-tagline">"Learn & Earn"</p>
                        </div>
                    </a>
                </header>

                <div class="sidebar-content">
                    <Show when=signed_in>
                        <WalletCard view_state=view_state/>
                    </Show>

                    <nav class="sidebar-group">
                        <span class="sidebar-group-label">"Navigation"</span>
                        <ul class="sidebar-menu">
                            <For
                                each=move || view_state.with(|state| state.navigation.items.clone())
                                key=|item| item.title.clone()
                                let:item
                            >
                                <NavLink item=item active_title=active_title/>
                            </For>
                        </ul>
                    </nav>

                    <Show when=move || view_state.with(|state| state.show_verified_badge)>
                        <div class="verified-badge">
                            <span data-icon="award"></span>
                            <span>"Verified Provider"</span>
                        </div>
                    </Show>
                </div>

                <footer class="sidebar-footer">
                    <Show when=signed_in>
                        <IdentityCard view_state=view_state/>
                    </Show>
                    <button class="logout-button" on:click=on_logout>
                        <span data-icon="log-out"></span>
                        "Logout"
                    </button>
                </footer>
            </aside>

            <main class="shell-main">
                <header class="shell-mobile-header">
                    <h1>"Skill-Time Marketplace"</h1>
                </header>
                <div class="shell-page">{children()}</div>
            </main>
        </div>
    }
}

/// Wallet balance card; only rendered for signed-in users.
#[component]
fn WalletCard(view_state: Memo<ViewState>) -> impl IntoView {
    view! {
        <div class="wallet-card">
            <div class="wallet-card-header">
                <span>"Wallet Balance"</span>
                <span data-icon="coins"></span>
            </div>
            <div class="wallet-balance">{move || view_state.with(|state| state.wallet_credits)}</div>
            <div class="wallet-caption">"Credits Available"</div>
        </div>
    }
}

/// Avatar, name and email; only rendered for signed-in users.
#[component]
fn IdentityCard(view_state: Memo<ViewState>) -> impl IntoView {
    view! {
        <div class="identity">
            <span class="avatar">{move || view_state.with(|state| state.avatar_initial.clone())}</span>
            <div class="identity-text">
                <p class="identity-name">{move || view_state.with(|state| state.display_name.clone())}</p>
                <p class="identity-email">{move || view_state.with(|state| state.email.clone())}</p>
            </div>
        </div>
    }
}

/// One sidebar link, highlighted when it is the active route.
#[component]
fn NavLink(item: NavigationItem, active_title: Memo<Option<String>>) -> impl IntoView {
    let title = item.title.clone();
    let is_active = move || active_title.with(|active| active.as_deref() == Some(title.as_str()));

    view! {
        <li class="sidebar-menu-item">
            <a href=item.target.to_string() class="sidebar-link" class:active=is_active>
                <span data-icon=item.icon.name()></span>
                <span>{item.title}</span>
            </a>
        </li>
    }
}

/// Placeholder for the routed page content.
///
/// The page bodies live elsewhere; this resolves the `:page` segment to a
/// catalog title so unknown paths are reported instead of rendered.
#[component]
fn PageOutlet() -> impl IntoView {
    let params = use_params_map();
    let page = Memo::new(move |_| {
        params
            .read()
            .get("page")
            .map_or(Ok(PageName::Marketplace), |segment| segment.parse::<PageName>())
    });
    let heading = move || match page.get() {
        Ok(page) => NavigationCatalog::standard()
            .entry_for(page)
            .map_or_else(|| page.to_string(), |entry| entry.title.clone()),
        Err(e) => e.to_string(),
    };
    let data_page = move || page.get().map(|page| page.to_string()).unwrap_or_default();

    view! {
        <section class="page" data-page=data_page>
            <h1>{heading}</h1>
        </section>
    }
}
