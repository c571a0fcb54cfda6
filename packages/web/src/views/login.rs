//! Sign-in page.

use dioxus::prelude::*;
use ui::{use_auth, AuthState};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    if !auth().loading && auth().user.is_some() {
        nav.replace(Route::Dashboard {});
    }

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let address = email().trim().to_string();
            if address.is_empty() || !address.contains('@') {
                error.set(Some("Enter a valid email address".to_string()));
                return;
            }
            if password().is_empty() {
                error.set(Some("Password is required".to_string()));
                return;
            }

            submitting.set(true);
            match api::login(address, password()).await {
                Ok(user) => {
                    auth.set(AuthState {
                        user: Some(user),
                        loading: false,
                    });
                    nav.replace(Route::Dashboard {});
                }
                Err(e) => {
                    submitting.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",

            form {
                class: "auth-form",
                onsubmit: submit,

                h1 { class: "auth-heading", "PortfolioForge" }
                p { class: "auth-subheading", "Sign in to build your portfolio" }

                if let Some(message) = error() {
                    div { class: "form-error", "{message}" }
                }

                div {
                    class: "field",
                    label { class: "field-label", "Email" }
                    input {
                        class: "field-input",
                        r#type: "email",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                }
                div {
                    class: "field",
                    label { class: "field-label", "Password" }
                    input {
                        class: "field-input",
                        r#type: "password",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                }

                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Signing in..." } else { "Sign in" }
                }

                p {
                    class: "auth-switch",
                    "Don't have an account? "
                    Link { to: Route::Register {}, "Sign up" }
                }
            }
        }
    }
}
