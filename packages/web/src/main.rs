//! PortfolioForge web shell: routes, server bootstrap, and the app root.

use dioxus::prelude::*;

use ui::{AuthProvider, ToastProvider};
use views::{Dashboard, Editor, Login, NewEditor, Preview, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/editor")]
    NewEditor {},
    #[route("/editor/:id")]
    Editor { id: i32 },
    #[route("/preview/:id")]
    Preview { id: i32 },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new()
            .expect("tokio runtime")
            .block_on(serve());
    }

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[cfg(feature = "server")]
async fn serve() {
    use dioxus::server::{DioxusRouterExt, ServeConfig};

    tracing_subscriber::fmt::init();
    dotenvy::dotenv().ok();

    let pool = api::db::get_pool()
        .await
        .expect("database connection failed");
    sqlx::migrate!("../api/migrations")
        .run(pool)
        .await
        .expect("migrations failed");

    let router = axum::Router::new()
        .serve_dioxus_application(ServeConfig::new(), App)
        .layer(session_layer(pool).await);

    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("bind failed");
    tracing::info!(%addr, "listening");

    axum::serve(listener, router.into_make_service())
        .await
        .expect("server error");
}

/// Postgres-backed cookie sessions, expiring after a week of inactivity.
/// `with_secure(false)` because local dev runs over plain HTTP.
#[cfg(feature = "server")]
async fn session_layer(
    pool: &sqlx::PgPool,
) -> tower_sessions::SessionManagerLayer<tower_sessions_sqlx_store::PostgresStore> {
    use std::time::Duration;
    use tower_sessions::cookie::SameSite;
    use tower_sessions::{Expiry, SessionManagerLayer};
    use tower_sessions_sqlx_store::PostgresStore;

    const SESSION_TTL: Duration = Duration::from_secs(60 * 60 * 24 * 7);

    let store = PostgresStore::new(pool.clone());
    store.migrate().await.expect("session table setup failed");

    SessionManagerLayer::new(store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(SESSION_TTL.try_into().unwrap()))
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            ToastProvider {
                Router::<Route> {}
            }
        }
    }
}

/// `/` has no content of its own; everything lives under the dashboard.
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Dashboard {});
    rsx! {}
}
