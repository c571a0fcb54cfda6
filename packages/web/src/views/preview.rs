//! Read-only rendering of a saved portfolio, exactly as the published site
//! would show it: same renderer, no editor chrome.

use dioxus::prelude::*;
use ui::{redirect_to_login, PortfolioRenderer};

use crate::views::is_unauthorized;
use crate::Route;

#[component]
pub fn Preview(id: i32) -> Element {
    let portfolio = use_resource(move || async move { api::get_portfolio(id).await });

    rsx! {
        div {
            class: "preview-screen",
            header {
                class: "topbar",
                Link { class: "topbar-back", to: Route::Dashboard {}, "← Dashboard" }
                match &*portfolio.read_unchecked() {
                    Some(Ok(p)) => rsx! {
                        span { class: "topbar-title", "{p.name}" }
                        Link {
                            class: "btn btn-outline",
                            to: Route::Editor { id },
                            "Edit"
                        }
                    },
                    _ => rsx! {},
                }
            }
            main {
                class: "preview-canvas",
                match &*portfolio.read_unchecked() {
                    Some(Ok(p)) => rsx! {
                        PortfolioRenderer {
                            components: p.layout.components.clone(),
                            editable: false,
                        }
                    },
                    Some(Err(e)) => {
                        if is_unauthorized(e) {
                            redirect_to_login();
                        }
                        rsx! {
                            div { class: "form-error", "Could not load portfolio: {e}" }
                        }
                    }
                    None => rsx! {
                        div { class: "loading", "Loading..." }
                    },
                }
            }
        }
    }
}
