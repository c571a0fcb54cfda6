//! Properties panel: edits the selected component's props. Every change is a
//! partial patch through [`store::EditorState::update_component`], so sibling
//! props are never clobbered.

use dioxus::prelude::*;
use serde_json::{json, Map, Value};
use store::{
    props_from_bag, AboutProps, ComponentType, ContactProps, EditorState, HeaderProps, HeroProps,
    ProjectsProps, SkillsProps,
};

use crate::editor::use_editor;

fn patch(key: &str, value: Value) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert(key.to_string(), value);
    map
}

fn text_field(
    mut editor: Signal<EditorState>,
    id: String,
    label: &'static str,
    key: &'static str,
    value: String,
) -> Element {
    rsx! {
        div {
            class: "field",
            label { class: "field-label", "{label}" }
            input {
                class: "field-input",
                r#type: "text",
                value: "{value}",
                oninput: move |evt: FormEvent| {
                    editor.write().update_component(&id, patch(key, json!(evt.value())));
                },
            }
        }
    }
}

fn textarea_field(
    mut editor: Signal<EditorState>,
    id: String,
    label: &'static str,
    key: &'static str,
    value: String,
) -> Element {
    rsx! {
        div {
            class: "field",
            label { class: "field-label", "{label}" }
            textarea {
                class: "field-input",
                rows: 3,
                value: "{value}",
                oninput: move |evt: FormEvent| {
                    editor.write().update_component(&id, patch(key, json!(evt.value())));
                },
            }
        }
    }
}

#[component]
pub fn PropertiesPanel() -> Element {
    let mut editor = use_editor();

    let selected = editor.read().selected_component().cloned();
    let Some(component) = selected else {
        return rsx! {
            aside {
                class: "properties-panel",
                div {
                    class: "properties-header",
                    h2 { class: "properties-heading", "Properties" }
                    p { class: "properties-hint", "Select a component to edit its properties" }
                }
            }
        };
    };

    let id = component.id.clone();
    let remove_id = component.id.clone();

    rsx! {
        aside {
            class: "properties-panel",
            div {
                class: "properties-header",
                h2 { class: "properties-heading", "Properties" }
                p { class: "properties-hint", "{component.r#type}" }
            }

            div {
                class: "properties-fields",
                {property_fields(editor, &component.r#type, id, &component.props)}
            }

            div {
                class: "properties-footer",
                button {
                    class: "btn btn-danger",
                    onclick: move |_| {
                        editor.write().remove_component(&remove_id);
                    },
                    "Delete Component"
                }
            }
        }
    }
}

fn property_fields(
    mut editor: Signal<EditorState>,
    tag: &str,
    id: String,
    props: &Map<String, Value>,
) -> Element {
    match ComponentType::from_tag(tag) {
        Some(ComponentType::Header) => {
            let current: HeaderProps = props_from_bag(props);
            rsx! {
                {text_field(editor, id.clone(), "Name", "name", current.name)}
                {text_field(editor, id.clone(), "Title", "title", current.title)}
            }
        }
        Some(ComponentType::Hero) => {
            let current: HeroProps = props_from_bag(props);
            rsx! {
                {text_field(editor, id.clone(), "Title", "title", current.title)}
                {textarea_field(editor, id.clone(), "Subtitle", "subtitle", current.subtitle)}
                {text_field(editor, id.clone(), "Primary Button Text", "primaryButtonText", current.primary_button_text)}
                {text_field(editor, id.clone(), "Secondary Button Text", "secondaryButtonText", current.secondary_button_text)}
            }
        }
        Some(ComponentType::About) => {
            let current: AboutProps = props_from_bag(props);
            rsx! {
                {text_field(editor, id.clone(), "Title", "title", current.title)}
                {textarea_field(editor, id.clone(), "Content", "content", current.content)}
                {text_field(editor, id.clone(), "Image URL", "imageUrl", current.image_url)}
            }
        }
        Some(ComponentType::Projects) => {
            let current: ProjectsProps = props_from_bag(props);
            rsx! {
                {text_field(editor, id.clone(), "Title", "title", current.title)}
                {textarea_field(editor, id.clone(), "Subtitle", "subtitle", current.subtitle)}
                p { class: "properties-hint", "Project entries are edited as JSON for now." }
            }
        }
        Some(ComponentType::Skills) => {
            let current: SkillsProps = props_from_bag(props);
            let skills_text = current.skills.join(", ");
            rsx! {
                {text_field(editor, id.clone(), "Title", "title", current.title)}
                div {
                    class: "field",
                    label { class: "field-label", "Skills (comma separated)" }
                    input {
                        class: "field-input",
                        r#type: "text",
                        value: "{skills_text}",
                        oninput: move |evt: FormEvent| {
                            let skills: Vec<String> = evt
                                .value()
                                .split(',')
                                .map(|s| s.trim().to_string())
                                .filter(|s| !s.is_empty())
                                .collect();
                            editor.write().update_component(&id, patch("skills", json!(skills)));
                        },
                    }
                }
            }
        }
        Some(ComponentType::Contact) => {
            let current: ContactProps = props_from_bag(props);
            let form_id = id.clone();
            rsx! {
                {text_field(editor, id.clone(), "Title", "title", current.title)}
                {text_field(editor, id.clone(), "Email", "email", current.email)}
                {text_field(editor, id.clone(), "Phone", "phone", current.phone)}
                div {
                    class: "field field-checkbox",
                    label {
                        class: "field-label",
                        input {
                            r#type: "checkbox",
                            checked: current.show_form,
                            onchange: move |evt: FormEvent| {
                                editor.write().update_component(&form_id, patch("showForm", json!(evt.checked())));
                            },
                        }
                        " Show contact form"
                    }
                }
            }
        }
        None => rsx! {
            p { class: "properties-hint", "No editable properties for type \"{tag}\"." }
        },
    }
}
