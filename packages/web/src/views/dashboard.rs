//! Dashboard: the user's portfolios, with create / open / delete / publish state.

use api::PortfolioInfo;
use dioxus::prelude::*;
use ui::{push_toast, redirect_to_login, use_auth, use_toasts, LogoutButton, ToastLevel};

use crate::views::is_unauthorized;
use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut toasts = use_toasts();

    if !auth().loading && auth().user.is_none() {
        redirect_to_login();
    }

    let mut portfolios = use_resource(move || async move { api::list_portfolios().await });

    let handle_delete = move |id: i32| {
        spawn(async move {
            match api::delete_portfolio(id).await {
                Ok(()) => {
                    push_toast(&mut toasts, ToastLevel::Info, "Portfolio deleted");
                    portfolios.restart();
                }
                Err(e) => {
                    if is_unauthorized(&e) {
                        redirect_to_login();
                        return;
                    }
                    push_toast(&mut toasts, ToastLevel::Error, &e.to_string());
                }
            }
        });
    };

    rsx! {
        div {
            class: "dashboard",

            header {
                class: "topbar",
                h1 { class: "topbar-title", "PortfolioForge" }
                div {
                    class: "topbar-actions",
                    if let Some(user) = auth().user {
                        span { class: "topbar-user", "{user.display_name()}" }
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| { nav.push(Route::NewEditor {}); },
                        "New Portfolio"
                    }
                    LogoutButton { class: "btn btn-outline" }
                }
            }

            main {
                class: "dashboard-main",
                match &*portfolios.read_unchecked() {
                    Some(Ok(items)) if items.is_empty() => rsx! {
                        div {
                            class: "dashboard-empty",
                            h2 { "No portfolios yet" }
                            p { "Create your first portfolio to get started." }
                        }
                    },
                    Some(Ok(items)) => rsx! {
                        div {
                            class: "portfolio-grid",
                            for portfolio in items.iter() {
                                PortfolioCard {
                                    key: "{portfolio.id}",
                                    portfolio: portfolio.clone(),
                                    on_delete: handle_delete,
                                }
                            }
                        }
                    },
                    Some(Err(e)) => {
                        if is_unauthorized(e) {
                            redirect_to_login();
                        }
                        rsx! {
                            div { class: "form-error", "Failed to load portfolios: {e}" }
                        }
                    },
                    None => rsx! {
                        div { class: "dashboard-empty", p { "Loading..." } }
                    },
                }
            }
        }
    }
}

#[component]
fn PortfolioCard(portfolio: PortfolioInfo, on_delete: EventHandler<i32>) -> Element {
    let nav = use_navigator();
    let id = portfolio.id;

    rsx! {
        div {
            class: "portfolio-card",
            div {
                class: "portfolio-card-header",
                h3 { class: "portfolio-card-name", "{portfolio.name}" }
                if portfolio.is_published {
                    span { class: "badge badge-published", "Published" }
                } else {
                    span { class: "badge badge-draft", "Draft" }
                }
            }
            p {
                class: "portfolio-card-meta",
                "{portfolio.layout.components.len()} components · updated {portfolio.updated_at}"
            }
            if let Some(url) = portfolio.published_url.as_ref() {
                a { class: "portfolio-card-url", href: "{url}", "{url}" }
            }
            div {
                class: "portfolio-card-actions",
                button {
                    class: "btn btn-primary",
                    onclick: move |_| { nav.push(Route::Editor { id }); },
                    "Edit"
                }
                button {
                    class: "btn btn-outline",
                    onclick: move |_| { nav.push(Route::Preview { id }); },
                    "Preview"
                }
                button {
                    class: "btn btn-danger",
                    onclick: move |_| on_delete.call(id),
                    "Delete"
                }
            }
        }
    }
}
