//! Publish dialog: picks a site name and flips the published flag through the
//! API. The URL shown is fabricated from the slug; nothing is deployed.

use api::{publish::slugify, PortfolioInfo};
use dioxus::prelude::*;

use crate::toast::{push_toast, use_toasts, ToastLevel};

#[component]
pub fn PublishDialog(
    portfolio_id: i32,
    portfolio_name: String,
    on_close: EventHandler<()>,
    on_published: EventHandler<PortfolioInfo>,
) -> Element {
    let mut site_name = use_signal({
        let initial = slugify(&portfolio_name);
        move || {
            if initial.is_empty() {
                "untitled-portfolio".to_string()
            } else {
                initial.clone()
            }
        }
    });
    let mut publishing = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut toasts = use_toasts();

    let preview_slug = slugify(&site_name());

    let handle_publish = move |_| {
        let name = site_name().trim().to_string();
        if slugify(&name).is_empty() {
            error.set(Some("Please enter a site name for your portfolio".to_string()));
            return;
        }
        spawn(async move {
            publishing.set(true);
            error.set(None);
            match api::publish_portfolio(portfolio_id, name).await {
                Ok(portfolio) => {
                    let url = portfolio.published_url.clone().unwrap_or_default();
                    push_toast(
                        &mut toasts,
                        ToastLevel::Success,
                        &format!("Your portfolio is now live at {}", url),
                    );
                    on_published.call(portfolio);
                    on_close.call(());
                }
                Err(e) => {
                    publishing.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "dialog-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "dialog",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),

                h2 { class: "dialog-title", "Publish Portfolio" }

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                div {
                    class: "field",
                    label { class: "field-label", "Site Name" }
                    input {
                        class: "field-input",
                        r#type: "text",
                        placeholder: "my-portfolio",
                        value: site_name(),
                        oninput: move |evt: FormEvent| site_name.set(evt.value()),
                    }
                    p {
                        class: "field-hint",
                        "Your site will be available at {preview_slug}.vercel.app"
                    }
                }

                div {
                    class: "dialog-actions",
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        disabled: publishing(),
                        onclick: handle_publish,
                        if publishing() { "Publishing..." } else { "Publish Now" }
                    }
                }
            }
        }
    }
}
