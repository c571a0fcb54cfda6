//! Projects a document onto display widgets, in document order.
//!
//! Dispatch is by [`ComponentType`]: an unrecognised tag renders a visible
//! inline error block instead of panicking or skipping, so one corrupt record
//! never blanks the page and the output count always matches the input count.
//!
//! The same renderer serves both modes. In editable mode each record gets a
//! selection wrapper and an action strip (select, duplicate, delete); in
//! preview/published mode it renders content only, with no editor chrome.

use dioxus::prelude::*;
use store::{
    props_from_bag, ComponentType, PortfolioComponent,
};

use crate::sections::{
    AboutSection, ContactSection, HeaderSection, HeroSection, ProjectsSection, SkillsSection,
};

#[component]
pub fn PortfolioRenderer(
    components: Vec<PortfolioComponent>,
    #[props(default)] selected_component_id: Option<String>,
    #[props(default = false)] editable: bool,
    #[props(default)] on_select: EventHandler<String>,
    #[props(default)] on_remove: EventHandler<String>,
    #[props(default)] on_duplicate: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "portfolio-canvas",
            for component in components.iter() {
                RenderedComponent {
                    key: "{component.id}",
                    component: component.clone(),
                    selected: selected_component_id.as_deref() == Some(component.id.as_str()),
                    editable,
                    on_select,
                    on_remove,
                    on_duplicate,
                }
            }
        }
    }
}

#[component]
fn RenderedComponent(
    component: PortfolioComponent,
    selected: bool,
    editable: bool,
    on_select: EventHandler<String>,
    on_remove: EventHandler<String>,
    on_duplicate: EventHandler<String>,
) -> Element {
    let id = component.id.clone();
    let wrapper_class = if !editable {
        "component-slot"
    } else if selected {
        "component-slot editable selected"
    } else {
        "component-slot editable"
    };

    rsx! {
        div {
            class: "{wrapper_class}",
            onclick: {
                let id = id.clone();
                move |_| {
                    if editable {
                        on_select.call(id.clone());
                    }
                }
            },

            if editable {
                div {
                    class: "action-strip",
                    button {
                        class: "action-button",
                        title: "Edit properties",
                        onclick: {
                            let id = id.clone();
                            move |evt: MouseEvent| {
                                evt.stop_propagation();
                                on_select.call(id.clone());
                            }
                        },
                        "✏️"
                    }
                    button {
                        class: "action-button",
                        title: "Duplicate",
                        onclick: {
                            let id = id.clone();
                            move |evt: MouseEvent| {
                                evt.stop_propagation();
                                on_duplicate.call(id.clone());
                            }
                        },
                        "⧉"
                    }
                    button {
                        class: "action-button action-delete",
                        title: "Delete",
                        onclick: {
                            let id = id.clone();
                            move |evt: MouseEvent| {
                                evt.stop_propagation();
                                on_remove.call(id.clone());
                            }
                        },
                        "🗑"
                    }
                }
            }

            {render_section(&component)}
        }
    }
}

fn render_section(component: &PortfolioComponent) -> Element {
    match ComponentType::from_tag(&component.r#type) {
        Some(ComponentType::Header) => rsx! {
            HeaderSection { section_props: props_from_bag(&component.props) }
        },
        Some(ComponentType::Hero) => rsx! {
            HeroSection { section_props: props_from_bag(&component.props) }
        },
        Some(ComponentType::About) => rsx! {
            AboutSection { section_props: props_from_bag(&component.props) }
        },
        Some(ComponentType::Projects) => rsx! {
            ProjectsSection { section_props: props_from_bag(&component.props) }
        },
        Some(ComponentType::Skills) => rsx! {
            SkillsSection { section_props: props_from_bag(&component.props) }
        },
        Some(ComponentType::Contact) => rsx! {
            ContactSection { section_props: props_from_bag(&component.props) }
        },
        None => rsx! {
            div {
                class: "unknown-component",
                p { "Unknown component type: {component.r#type}" }
            }
        },
    }
}
