//! The editor screen: palette | canvas | properties panel.
//!
//! All document mutations go through the injected editor store; saving is an
//! explicit action that serialises the whole document and never blocks local
//! edits. The first save creates the portfolio row, later saves update it
//! (blind overwrite, last writer wins).

use dioxus::prelude::*;
use store::{ComponentDefinition, PortfolioLayout, Theme};
use ui::{
    provide_editor, push_toast, redirect_to_login, use_auth, use_toasts, ComponentPalette,
    LogoutButton, PortfolioRenderer, PropertiesPanel, PublishDialog, ToastLevel,
};

use crate::views::is_unauthorized;
use crate::Route;

/// Edit an existing portfolio.
#[component]
pub fn Editor(id: i32) -> Element {
    rsx! {
        EditorScreen { portfolio_id: Some(id) }
    }
}

/// Start a new, unsaved portfolio.
#[component]
pub fn NewEditor() -> Element {
    rsx! {
        EditorScreen { portfolio_id: None }
    }
}

#[component]
fn EditorScreen(portfolio_id: Option<i32>) -> Element {
    let mut editor = provide_editor();
    let mut toasts = use_toasts();
    let auth = use_auth();
    let nav = use_navigator();

    // Palette entry currently being dragged over the canvas.
    let mut dragged = use_signal(|| Option::<ComponentDefinition>::None);
    // Theme travels with the layout envelope but has no editor UI yet; keep
    // whatever the loaded portfolio carried so saves don't drop it.
    let mut theme = use_signal(|| Option::<Theme>::None);
    let mut published_url = use_signal(|| Option::<String>::None);
    let mut show_publish = use_signal(|| false);

    if !auth().loading && auth().user.is_none() {
        redirect_to_login();
    }

    // Load the portfolio when editing an existing one.
    let _loader = use_resource(move || async move {
        let Some(id) = portfolio_id else {
            return;
        };
        match api::get_portfolio(id).await {
            Ok(portfolio) => {
                theme.set(portfolio.layout.theme.clone());
                published_url.set(portfolio.published_url.clone());
                editor
                    .write()
                    .load_portfolio(portfolio.layout.components, portfolio.name, portfolio.id);
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

    let handle_save = move |_| {
        if editor.read().is_saving {
            return;
        }
        spawn(async move {
            editor.write().set_saving(true);

            let (existing_id, name, components) = {
                let state = editor.read();
                (
                    state.portfolio_id,
                    state.portfolio_name.clone(),
                    state.components.clone(),
                )
            };
            let layout = PortfolioLayout {
                components,
                theme: theme(),
            };

            let result = match existing_id {
                Some(id) => api::update_portfolio(id, Some(name), Some(layout)).await,
                None => api::create_portfolio(name, layout).await,
            };

            match result {
                Ok(portfolio) => {
                    if existing_id.is_none() {
                        editor.write().set_portfolio_id(Some(portfolio.id));
                        nav.replace(Route::Editor { id: portfolio.id });
                    }
                    push_toast(&mut toasts, ToastLevel::Success, "Portfolio saved");
                }
                Err(e) => {
                    if is_unauthorized(&e) {
                        redirect_to_login();
                    } else {
                        push_toast(
                            &mut toasts,
                            ToastLevel::Error,
                            &format!("Save failed: {}", e),
                        );
                    }
                }
            }

            editor.write().set_saving(false);
        });
    };

    let handle_add = move |def: ComponentDefinition| {
        editor.write().add_component(def.instantiate());
    };

    let state = editor.read();
    let is_preview = state.is_preview_mode;
    let is_saving = state.is_saving;
    let portfolio_name = state.portfolio_name.clone();
    let components = state.components.clone();
    let selected_id = state.selected_component_id.clone();
    let saved_id = state.portfolio_id;
    drop(state);

    rsx! {
        div {
            class: "editor-screen",

            header {
                class: "topbar",
                Link { class: "topbar-back", to: Route::Dashboard {}, "← Dashboard" }
                input {
                    class: "name-input",
                    r#type: "text",
                    value: "{portfolio_name}",
                    oninput: move |evt: FormEvent| editor.write().set_portfolio_name(evt.value()),
                }
                span {
                    class: "save-indicator",
                    if is_saving { "Saving..." } else { "" }
                }
                div {
                    class: "topbar-actions",
                    if let Some(url) = published_url() {
                        a { class: "topbar-published-url", href: "{url}", "{url}" }
                    }
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| {
                            let preview = editor.read().is_preview_mode;
                            editor.write().set_preview_mode(!preview);
                        },
                        if is_preview { "Back to editor" } else { "Preview" }
                    }
                    button {
                        class: "btn btn-outline",
                        disabled: is_saving,
                        onclick: handle_save,
                        "Save"
                    }
                    button {
                        class: "btn btn-primary",
                        disabled: saved_id.is_none(),
                        title: if saved_id.is_none() { "Save the portfolio first" } else { "" },
                        onclick: move |_| show_publish.set(true),
                        "Publish"
                    }
                    LogoutButton { class: "btn btn-outline" }
                }
            }

            if is_preview {
                main {
                    class: "preview-canvas",
                    PortfolioRenderer { components, editable: false }
                }
            } else {
                div {
                    class: "editor-body",

                    ComponentPalette {
                        on_add: handle_add,
                        on_drag_start: move |def| dragged.set(Some(def)),
                    }

                    main {
                        class: "canvas",
                        ondragover: move |evt: DragEvent| evt.prevent_default(),
                        ondrop: move |evt: DragEvent| {
                            evt.prevent_default();
                            if let Some(def) = dragged.write().take() {
                                editor.write().add_component(def.instantiate());
                            }
                        },

                        if components.is_empty() {
                            div {
                                class: "canvas-empty",
                                p { "Drag components here, or click one in the palette." }
                            }
                        }

                        PortfolioRenderer {
                            components,
                            selected_component_id: selected_id,
                            editable: true,
                            on_select: move |id: String| {
                                editor.write().select_component(Some(id));
                            },
                            on_remove: move |id: String| {
                                editor.write().remove_component(&id);
                            },
                            on_duplicate: move |id: String| {
                                editor.write().duplicate_component(&id);
                            },
                        }
                    }

                    PropertiesPanel {}
                }
            }

            if show_publish() {
                if let Some(id) = saved_id {
                    PublishDialog {
                        portfolio_id: id,
                        portfolio_name: portfolio_name.clone(),
                        on_close: move |_| show_publish.set(false),
                        on_published: move |portfolio: api::PortfolioInfo| {
                            published_url.set(portfolio.published_url);
                        },
                    }
                }
            }
        }
    }
}
