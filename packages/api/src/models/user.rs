//! User account types: the full database row (server only) and the client-safe
//! projection that crosses the server function boundary. [`UserInfo`] carries
//! no password hash or timestamps, and its id is a `String` so it serialises
//! the same on both sides.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// A row of the `users` table.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Argon2id PHC string, absent for accounts that never set a password.
    pub password_hash: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl User {
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.to_string(),
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl UserInfo {
    /// Name shown in the UI chrome. Falls back to email when no name was given.
    pub fn display_name(&self) -> String {
        let name = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");
        if name.is_empty() {
            self.email.clone()
        } else {
            name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(first: Option<&str>, last: Option<&str>) -> UserInfo {
        UserInfo {
            id: "u-1".to_string(),
            email: "ada@example.com".to_string(),
            first_name: first.map(String::from),
            last_name: last.map(String::from),
        }
    }

    #[test]
    fn display_name_prefers_full_name() {
        assert_eq!(info(Some("Ada"), Some("Lovelace")).display_name(), "Ada Lovelace");
        assert_eq!(info(Some("Ada"), None).display_name(), "Ada");
        assert_eq!(info(None, Some("Lovelace")).display_name(), "Lovelace");
    }

    #[test]
    fn display_name_falls_back_to_email() {
        assert_eq!(info(None, None).display_name(), "ada@example.com");
    }
}
