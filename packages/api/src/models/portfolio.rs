//! Portfolio models: the `portfolios` row and its client-safe projection.
//!
//! The `layout` column is jsonb and is stored verbatim: the server validates
//! only the envelope (`{components, theme?}`), never per-component `props`
//! shapes; that validation belongs to the client-side registry boundary.

use serde::{Deserialize, Serialize};
use store::PortfolioLayout;

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full portfolio row from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct Portfolio {
    pub id: i32,
    pub user_id: Uuid,
    pub name: String,
    pub layout: serde_json::Value,
    pub is_published: bool,
    pub published_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl Portfolio {
    /// Convert to PortfolioInfo for client consumption.
    ///
    /// A layout blob that no longer parses as the envelope (possible only if
    /// the row was written outside this API) degrades to an empty document
    /// rather than failing the whole fetch.
    pub fn to_info(&self) -> PortfolioInfo {
        let layout: PortfolioLayout = serde_json::from_value(self.layout.clone())
            .unwrap_or_else(|e| {
                tracing::warn!("portfolio {} has an unreadable layout: {}", self.id, e);
                PortfolioLayout::default()
            });
        PortfolioInfo {
            id: self.id,
            name: self.name.clone(),
            layout,
            is_published: self.is_published,
            published_url: self.published_url.clone(),
            created_at: self.created_at.to_rfc3339(),
            updated_at: self.updated_at.to_rfc3339(),
        }
    }
}

/// Portfolio data safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortfolioInfo {
    pub id: i32,
    pub name: String,
    pub layout: PortfolioLayout,
    pub is_published: bool,
    pub published_url: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}
