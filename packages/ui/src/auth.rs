//! Session context for the frontend: who is signed in, plus the logout button
//! and the login redirect used when a server call comes back unauthenticated.

use api::UserInfo;
use dioxus::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    /// True until the initial `get_current_user` round trip resolves. Pages
    /// should not redirect to login while this is set.
    pub loading: bool,
}

impl AuthState {
    fn resolved(user: Option<UserInfo>) -> Self {
        Self {
            user,
            loading: false,
        }
    }
}

/// Read the session state provided by [`AuthProvider`].
pub fn use_auth() -> Signal<AuthState> {
    use_context()
}

/// Provides [`AuthState`] to the subtree, resolving the current session once
/// on mount. A failed lookup is treated as signed out, not as an error.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth = use_context_provider(|| {
        Signal::new(AuthState {
            user: None,
            loading: true,
        })
    });

    use_resource(move || async move {
        let user = api::get_current_user().await.ok().flatten();
        auth.set(AuthState::resolved(user));
    });

    rsx! {
        {children}
    }
}

/// Send the browser to the login page. Used after authentication failures.
pub fn redirect_to_login() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::warn!("unauthenticated; login redirect requested");
    }
}

#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth = use_auth();

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| async move {
                if api::logout().await.is_ok() {
                    auth.set(AuthState::resolved(None));
                    redirect_to_login();
                }
            },
            "{label}"
        }
    }
}
