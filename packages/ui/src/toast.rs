//! Transient toast notifications for server errors and save confirmations.

use dioxus::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Toasts {
    pub items: Vec<Toast>,
    next_id: u64,
}

pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

pub fn push_toast(toasts: &mut Signal<Toasts>, level: ToastLevel, message: &str) {
    let mut state = toasts.write();
    let id = state.next_id;
    state.next_id += 1;
    state.items.push(Toast {
        id,
        level,
        message: message.to_string(),
    });
}

/// Provides the toast context and renders the toast stack on top of children.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_signal(Toasts::default);
    use_context_provider(|| toasts);

    rsx! {
        {children}
        ToastHost {}
    }
}

#[component]
fn ToastHost() -> Element {
    let mut toasts = use_toasts();

    rsx! {
        div {
            class: "toast-stack",
            style: "position: fixed; bottom: 1rem; right: 1rem; display: flex; flex-direction: column; gap: 0.5rem; z-index: 1000;",
            for toast in toasts().items.iter() {
                div {
                    key: "{toast.id}",
                    class: match toast.level {
                        ToastLevel::Info => "toast toast-info",
                        ToastLevel::Success => "toast toast-success",
                        ToastLevel::Error => "toast toast-error",
                    },
                    span { class: "toast-message", "{toast.message}" }
                    button {
                        class: "toast-dismiss",
                        onclick: {
                            let id = toast.id;
                            move |_| {
                                toasts.write().items.retain(|t| t.id != id);
                            }
                        },
                        "×"
                    }
                }
            }
        }
    }
}
