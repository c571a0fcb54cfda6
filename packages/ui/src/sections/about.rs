use dioxus::prelude::*;
use store::AboutProps;

#[component]
pub fn AboutSection(section_props: AboutProps) -> Element {
    rsx! {
        div {
            class: "section section-about",
            h2 { class: "section-title", "{section_props.title}" }
            div {
                class: "about-body",
                if !section_props.image_url.is_empty() {
                    img { class: "about-photo", src: "{section_props.image_url}", alt: "Portrait" }
                }
                p { class: "about-content", "{section_props.content}" }
            }
        }
    }
}
