use dioxus::prelude::*;
use store::HeroProps;

#[component]
pub fn HeroSection(section_props: HeroProps) -> Element {
    rsx! {
        div {
            class: "section section-hero",
            h2 { class: "hero-title", "{section_props.title}" }
            p { class: "hero-subtitle", "{section_props.subtitle}" }
            div {
                class: "hero-actions",
                button { class: "btn btn-primary", "{section_props.primary_button_text}" }
                button { class: "btn btn-outline", "{section_props.secondary_button_text}" }
            }
        }
    }
}
