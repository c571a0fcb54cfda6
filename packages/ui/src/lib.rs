//! This crate contains all shared UI for the workspace.

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, LogoutButton, redirect_to_login};

mod editor;
pub use editor::{provide_editor, use_editor};

mod toast;
pub use toast::{push_toast, use_toasts, ToastLevel, ToastProvider};

mod renderer;
pub use renderer::PortfolioRenderer;

pub mod sections;

mod palette;
pub use palette::ComponentPalette;

mod properties;
pub use properties::PropertiesPanel;

mod publish_dialog;
pub use publish_dialog::PublishDialog;
