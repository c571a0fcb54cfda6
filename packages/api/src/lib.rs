//! # API crate: shared fullstack server functions for PortfolioForge
//!
//! Everything the frontend calls over the wire lives in this file, backed by
//! the persistence and auth modules below.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | — | Local password authentication (Argon2id) and session keys |
//! | [`db`] | `server` | PostgreSQL connection pool (lazy `OnceCell` singleton) and migrations |
//! | [`models`] | — | Database models (`User`, `Portfolio`) and their client-safe projections |
//! | [`publish`] | — | Site-name slugging and published-URL formatting (deployment stub) |
//!
//! ## Server functions exposed here
//!
//! Each public `async fn` here is a Dioxus server function: the route
//! attribute (`#[get(...)]` / `#[post(...)]`) appears twice, once on the real
//! body behind `#[cfg(feature = "server")]` and once on a client stub that
//! forwards the call over HTTP.
//!
//! - **Authentication**: `get_current_user`, `register`, `login`, `logout`
//! - **Portfolios**: `list_portfolios`, `get_portfolio`, `create_portfolio`,
//!   `update_portfolio`, `delete_portfolio`, `publish_portfolio`
//!
//! Every portfolio operation is scoped to the session's user in the SQL
//! predicate itself (`AND user_id = $n`): a request for another user's
//! portfolio fails as "not found", never as "forbidden", so the existence of
//! other users' resources is not revealed. Updates are single-row statements
//! with no version guard, so the last writer wins.

use dioxus::prelude::*;

pub mod auth;
pub mod db;
pub mod models;
pub mod publish;

#[cfg(feature = "server")]
pub use models::{Portfolio, User};
pub use models::{PortfolioInfo, UserInfo};
pub use store::PortfolioLayout;

/// Look up the session's user id, or fail as unauthenticated.
#[cfg(feature = "server")]
async fn require_user_id(
    session: &tower_sessions::Session,
) -> Result<uuid::Uuid, ServerFnError> {
    let user_id: Option<String> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Err(ServerFnError::new("Not authenticated"));
    };

    uuid::Uuid::parse_str(&user_id).map_err(|e| ServerFnError::new(e.to_string()))
}

/// Resolve the session to its user, if any. Returns `None` when signed out.
#[cfg(feature = "server")]
#[get("/api/auth/user", session: tower_sessions::Session)]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::User;

    let user_id: Option<String> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Ok(None);
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user_uuid = uuid::Uuid::parse_str(&user_id)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(user_uuid)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.map(|u| u.to_info()))
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/user")]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    Ok(None)
}

/// Register a new user with email and password, and log them in.
#[cfg(feature = "server")]
#[post("/api/register", session: tower_sessions::Session)]
pub async fn register(
    email: String,
    password: String,
    first_name: String,
    last_name: String,
) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;

    let email = email.trim().to_lowercase();
    let first_name = first_name.trim().to_string();
    let last_name = last_name.trim().to_string();

    if email.is_empty() || !email.contains('@') {
        return Err(ServerFnError::new("Invalid email address"));
    }
    if password.len() < 8 {
        return Err(ServerFnError::new(
            "Password must be at least 8 characters",
        ));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    // Check if user already exists
    let existing: Option<(i32,)> =
        sqlx::query_as("SELECT 1 FROM users WHERE email = $1")
            .bind(&email)
            .fetch_optional(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    if existing.is_some() {
        return Err(ServerFnError::new(
            "An account with this email already exists",
        ));
    }

    let password_hash = auth::hash_password(&password).map_err(ServerFnError::new)?;

    let user: models::User = sqlx::query_as(
        "INSERT INTO users (email, first_name, last_name, password_hash) VALUES ($1, $2, $3, $4) RETURNING *",
    )
    .bind(&email)
    .bind(&first_name)
    .bind(&last_name)
    .bind(&password_hash)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/register")]
pub async fn register(
    email: String,
    password: String,
    first_name: String,
    last_name: String,
) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Sign in with email and password, binding the session to the user.
#[cfg(feature = "server")]
#[post("/api/login", session: tower_sessions::Session)]
pub async fn login(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;

    let email = email.trim().to_lowercase();

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<models::User> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user) = user else {
        return Err(ServerFnError::new("Invalid email or password"));
    };

    let Some(ref hash) = user.password_hash else {
        return Err(ServerFnError::new("Invalid email or password"));
    };

    let valid = auth::verify_password(&password, hash).map_err(ServerFnError::new)?;

    if !valid {
        return Err(ServerFnError::new("Invalid email or password"));
    }

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/login")]
pub async fn login(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// End the session. Flushes the server-side session record entirely.
#[cfg(feature = "server")]
#[get("/api/logout", session: tower_sessions::Session)]
pub async fn logout() -> Result<(), ServerFnError> {
    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[get("/api/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    Ok(())
}

/// List the current user's portfolios, most recently updated first.
#[cfg(feature = "server")]
#[get("/api/portfolios", session: tower_sessions::Session)]
pub async fn list_portfolios() -> Result<Vec<PortfolioInfo>, ServerFnError> {
    use crate::db::get_pool;

    let user_id = require_user_id(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let portfolios: Vec<models::Portfolio> = sqlx::query_as(
        "SELECT * FROM portfolios WHERE user_id = $1 ORDER BY updated_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(portfolios.iter().map(|p| p.to_info()).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/portfolios")]
pub async fn list_portfolios() -> Result<Vec<PortfolioInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Fetch one portfolio by id. Scoped to the owner: somebody else's id is
/// indistinguishable from a missing one.
#[cfg(feature = "server")]
#[get("/api/portfolios/:id", session: tower_sessions::Session)]
pub async fn get_portfolio(id: i32) -> Result<PortfolioInfo, ServerFnError> {
    use crate::db::get_pool;

    let user_id = require_user_id(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let portfolio: Option<models::Portfolio> =
        sqlx::query_as("SELECT * FROM portfolios WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(portfolio) = portfolio else {
        return Err(ServerFnError::new("Portfolio not found"));
    };

    Ok(portfolio.to_info())
}

#[cfg(not(feature = "server"))]
#[get("/api/portfolios/:id")]
pub async fn get_portfolio(id: i32) -> Result<PortfolioInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Create a portfolio. Only the envelope is validated: `layout` must parse as
/// `{components, theme?}`, but each component's `props` bag is stored verbatim.
#[cfg(feature = "server")]
#[post("/api/portfolios", session: tower_sessions::Session)]
pub async fn create_portfolio(
    name: String,
    layout: PortfolioLayout,
) -> Result<PortfolioInfo, ServerFnError> {
    use crate::db::get_pool;

    let user_id = require_user_id(&session).await?;

    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(ServerFnError::new("Portfolio name is required"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let layout_json =
        serde_json::to_value(&layout).map_err(|e| ServerFnError::new(e.to_string()))?;

    let portfolio: models::Portfolio = sqlx::query_as(
        "INSERT INTO portfolios (user_id, name, layout) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(user_id)
    .bind(&name)
    .bind(&layout_json)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(portfolio.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/portfolios")]
pub async fn create_portfolio(
    name: String,
    layout: PortfolioLayout,
) -> Result<PortfolioInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Partially update a portfolio: either field left as `None` keeps its stored
/// value. Single-row blind overwrite with no version check; the last writer wins.
#[cfg(feature = "server")]
#[post("/api/portfolios/:id", session: tower_sessions::Session)]
pub async fn update_portfolio(
    id: i32,
    name: Option<String>,
    layout: Option<PortfolioLayout>,
) -> Result<PortfolioInfo, ServerFnError> {
    use crate::db::get_pool;

    let user_id = require_user_id(&session).await?;

    let name = match name {
        Some(n) => {
            let n = n.trim().to_string();
            if n.is_empty() {
                return Err(ServerFnError::new("Portfolio name is required"));
            }
            Some(n)
        }
        None => None,
    };

    let layout_json = match layout {
        Some(ref l) => {
            Some(serde_json::to_value(l).map_err(|e| ServerFnError::new(e.to_string()))?)
        }
        None => None,
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let portfolio: Option<models::Portfolio> = sqlx::query_as(
        "UPDATE portfolios
         SET name = COALESCE($3, name),
             layout = COALESCE($4, layout),
             updated_at = NOW()
         WHERE id = $1 AND user_id = $2
         RETURNING *",
    )
    .bind(id)
    .bind(user_id)
    .bind(&name)
    .bind(&layout_json)
    .fetch_optional(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(portfolio) = portfolio else {
        return Err(ServerFnError::new("Portfolio not found"));
    };

    Ok(portfolio.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/portfolios/:id")]
pub async fn update_portfolio(
    id: i32,
    name: Option<String>,
    layout: Option<PortfolioLayout>,
) -> Result<PortfolioInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Delete a portfolio. Owner-scoped like every other operation.
#[cfg(feature = "server")]
#[post("/api/portfolios/:id/delete", session: tower_sessions::Session)]
pub async fn delete_portfolio(id: i32) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    let user_id = require_user_id(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let result = sqlx::query("DELETE FROM portfolios WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if result.rows_affected() == 0 {
        return Err(ServerFnError::new("Portfolio not found"));
    }

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/portfolios/:id/delete")]
pub async fn delete_portfolio(id: i32) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Mark a portfolio published and record its fabricated URL. Repeat calls
/// overwrite the URL (no history); there is no unpublish and no deployment.
#[cfg(feature = "server")]
#[post("/api/portfolios/:id/publish", session: tower_sessions::Session)]
pub async fn publish_portfolio(id: i32, site_name: String) -> Result<PortfolioInfo, ServerFnError> {
    use crate::db::get_pool;

    let user_id = require_user_id(&session).await?;

    let slug = publish::slugify(&site_name);
    if slug.is_empty() {
        return Err(ServerFnError::new("Site name is required"));
    }
    let url = publish::published_url(&slug);

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let portfolio: Option<models::Portfolio> = sqlx::query_as(
        "UPDATE portfolios
         SET is_published = TRUE,
             published_url = $3,
             updated_at = NOW()
         WHERE id = $1 AND user_id = $2
         RETURNING *",
    )
    .bind(id)
    .bind(user_id)
    .bind(&url)
    .fetch_optional(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(portfolio) = portfolio else {
        return Err(ServerFnError::new("Portfolio not found"));
    };

    tracing::info!("portfolio {} published at {}", id, url);

    Ok(portfolio.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/portfolios/:id/publish")]
pub async fn publish_portfolio(id: i32, site_name: String) -> Result<PortfolioInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
