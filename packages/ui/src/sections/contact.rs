use dioxus::prelude::*;
use store::ContactProps;

#[component]
pub fn ContactSection(section_props: ContactProps) -> Element {
    rsx! {
        div {
            class: "section section-contact",
            h2 { class: "section-title", "{section_props.title}" }
            div {
                class: "contact-details",
                a { class: "contact-email", href: "mailto:{section_props.email}", "{section_props.email}" }
                span { class: "contact-phone", "{section_props.phone}" }
            }
            if section_props.show_form {
                form {
                    class: "contact-form",
                    onsubmit: move |evt| evt.prevent_default(),
                    input { class: "contact-input", r#type: "text", placeholder: "Your name" }
                    input { class: "contact-input", r#type: "email", placeholder: "Your email" }
                    textarea { class: "contact-input", rows: 4, placeholder: "Message" }
                    button { class: "btn btn-primary", r#type: "submit", "Send" }
                }
            }
        }
    }
}
