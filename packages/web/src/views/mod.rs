mod dashboard;
mod editor;
mod login;
mod preview;
mod register;

pub use dashboard::Dashboard;
pub use editor::{Editor, NewEditor};
pub use login::Login;
pub use preview::Preview;
pub use register::Register;

/// Whether a server function error means the session is gone. Matched on the
/// message the API returns for unauthenticated requests; the caller should
/// redirect to the login page.
pub(crate) fn is_unauthorized<E: std::fmt::Display>(error: &E) -> bool {
    error.to_string().contains("Not authenticated")
}
