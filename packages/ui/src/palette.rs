//! Sidebar palette listing the component catalog. Entries can be dragged onto
//! the canvas or clicked to append at the end of the document.

use dioxus::prelude::*;
use store::{component_definitions, Category, ComponentDefinition};

#[derive(Clone, Copy, Debug, PartialEq)]
enum PaletteFilter {
    All,
    Category(Category),
}

#[component]
pub fn ComponentPalette(
    on_add: EventHandler<ComponentDefinition>,
    on_drag_start: EventHandler<ComponentDefinition>,
) -> Element {
    let mut filter = use_signal(|| PaletteFilter::All);

    let definitions: Vec<ComponentDefinition> = component_definitions()
        .into_iter()
        .filter(|def| match filter() {
            PaletteFilter::All => true,
            PaletteFilter::Category(category) => def.category == category,
        })
        .collect();

    let tab_class = move |target: PaletteFilter| {
        if filter() == target {
            "palette-tab active"
        } else {
            "palette-tab"
        }
    };

    rsx! {
        aside {
            class: "palette",
            div {
                class: "palette-header",
                h2 { class: "palette-heading", "Components" }
                div {
                    class: "palette-tabs",
                    button {
                        class: tab_class(PaletteFilter::All),
                        onclick: move |_| filter.set(PaletteFilter::All),
                        "All"
                    }
                    button {
                        class: tab_class(PaletteFilter::Category(Category::Layout)),
                        onclick: move |_| filter.set(PaletteFilter::Category(Category::Layout)),
                        "Layout"
                    }
                    button {
                        class: tab_class(PaletteFilter::Category(Category::Content)),
                        onclick: move |_| filter.set(PaletteFilter::Category(Category::Content)),
                        "Content"
                    }
                }
            }

            div {
                class: "palette-items",
                for def in definitions.iter() {
                    div {
                        key: "{def.r#type}",
                        class: "palette-item",
                        draggable: "true",
                        ondragstart: {
                            let def = def.clone();
                            move |_| on_drag_start.call(def.clone())
                        },
                        onclick: {
                            let def = def.clone();
                            move |_| on_add.call(def.clone())
                        },
                        span { class: "palette-icon", "{def.icon}" }
                        div {
                            class: "palette-text",
                            span { class: "palette-name", "{def.name}" }
                            span { class: "palette-description", "{def.description}" }
                        }
                    }
                }
            }
        }
    }
}
