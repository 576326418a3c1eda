#[cfg(feature = "ssr")]
mod server {
    use axum::{Router, extract::FromRef, routing::get};
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use leptos_meta::MetaTags;
    use skill_time_server::{
        app::App,
        auth::{self, AppState},
        backend::BackendClient,
        config::ServerConfig,
    };
    use std::sync::Arc;
    use tower_http::services::ServeDir;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    /// State shared by the Leptos handlers and the auth callback.
    #[derive(Clone)]
    pub struct ShellState {
        leptos_options: LeptosOptions,
        app_state: Arc<AppState>,
    }

    impl FromRef<ShellState> for LeptosOptions {
        fn from_ref(state: &ShellState) -> Self {
            state.leptos_options.clone()
        }
    }

    impl FromRef<ShellState> for Arc<AppState> {
        fn from_ref(state: &ShellState) -> Self {
            Arc::clone(&state.app_state)
        }
    }

    pub fn init_tracing() {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "info,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    fn document(options: LeptosOptions) -> impl IntoView {
        view! {
            <!DOCTYPE html>
            <html lang="en">
                <head>
                    <meta charset="utf-8"/>
                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                    <AutoReload options=options.clone()/>
                    <HydrationScripts options/>
                    <MetaTags/>
                </head>
                <body>
                    <App/>
                </body>
            </html>
        }
    }

    fn router(leptos_options: LeptosOptions, backend: Arc<BackendClient>, config: ServerConfig) -> Router {
        let state = ShellState {
            leptos_options: leptos_options.clone(),
            app_state: Arc::new(AppState::new(Arc::clone(&backend), config.session)),
        };
        let routes = generate_route_list(App);

        Router::new()
            .route("/auth/callback", get(auth::callback))
            .leptos_routes(&state, routes, move || document(leptos_options.clone()))
            .fallback(leptos_axum::file_and_error_handler::<ShellState, _>(document))
            .nest_service("/pkg", ServeDir::new("target/site/pkg"))
            // Server functions pull the backend client out of the request extensions.
            .layer(axum::Extension(backend))
            .with_state(state)
    }

    async fn shutdown_signal() {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::error!(%error, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
        tracing::info!("Shutdown signal received");
    }

    pub async fn run() {
        let config = ServerConfig::from_env().expect("failed to load configuration");
        tracing::info!(
            backend = %config.backend.base_url,
            timeout_seconds = config.backend.timeout_seconds,
            "Loaded configuration"
        );

        let backend = Arc::new(
            BackendClient::new(&config.backend).expect("failed to build backend client"),
        );

        let leptos_options = get_configuration(None)
            .expect("failed to read leptos configuration")
            .leptos_options;
        let addr = leptos_options.site_addr;
        let app = router(leptos_options, backend, config);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .expect("failed to bind to address");
        tracing::info!(%addr, "Skill-Time shell listening");

        axum::serve(listener, app.into_make_service())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .expect("server error");
    }
}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    server::init_tracing();
    server::run().await;
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // The browser bundle is entered through `hydrate` in lib.rs.
}
