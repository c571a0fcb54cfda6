//! Data models for the application.

mod portfolio;
mod user;

#[cfg(feature = "server")]
pub use portfolio::Portfolio;
pub use portfolio::PortfolioInfo;
#[cfg(feature = "server")]
pub use user::User;
pub use user::UserInfo;
