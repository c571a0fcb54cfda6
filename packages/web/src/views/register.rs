//! Account creation page.

use dioxus::prelude::*;
use ui::{use_auth, AuthState};

use crate::Route;

/// Client-side sanity checks before the round trip; the server re-validates.
fn check_signup(email: &str, password: &str, confirm: &str) -> Result<(), &'static str> {
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address");
    }
    if password.len() < 8 {
        return Err("Password needs at least 8 characters");
    }
    if password != confirm {
        return Err("Passwords do not match");
    }
    Ok(())
}

#[component]
pub fn Register() -> Element {
    let mut auth = use_auth();
    let nav = use_navigator();
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
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
            if let Err(message) = check_signup(&address, &password(), &confirm()) {
                error.set(Some(message.to_string()));
                return;
            }

            submitting.set(true);
            let result = api::register(
                address,
                password(),
                first_name().trim().to_string(),
                last_name().trim().to_string(),
            )
            .await;
            match result {
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

                h1 { class: "auth-heading", "Create your account" }
                p { class: "auth-subheading", "Sign up for PortfolioForge" }

                if let Some(message) = error() {
                    div { class: "form-error", "{message}" }
                }

                div {
                    class: "field",
                    label { class: "field-label", "First name" }
                    input {
                        class: "field-input",
                        r#type: "text",
                        value: first_name(),
                        oninput: move |evt: FormEvent| first_name.set(evt.value()),
                    }
                }
                div {
                    class: "field",
                    label { class: "field-label", "Last name" }
                    input {
                        class: "field-input",
                        r#type: "text",
                        value: last_name(),
                        oninput: move |evt: FormEvent| last_name.set(evt.value()),
                    }
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
                    span { class: "field-hint", "At least 8 characters" }
                }
                div {
                    class: "field",
                    label { class: "field-label", "Confirm password" }
                    input {
                        class: "field-input",
                        r#type: "password",
                        value: confirm(),
                        oninput: move |evt: FormEvent| confirm.set(evt.value()),
                    }
                }

                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Creating account..." } else { "Sign up" }
                }

                p {
                    class: "auth-switch",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Sign in" }
                }
            }
        }
    }
}
