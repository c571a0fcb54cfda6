use dioxus::prelude::*;
use store::HeaderProps;

#[component]
pub fn HeaderSection(section_props: HeaderProps) -> Element {
    rsx! {
        header {
            class: "section section-header",
            div {
                class: "header-identity",
                span { class: "header-name", "{section_props.name}" }
                span { class: "header-title", "{section_props.title}" }
            }
            nav {
                class: "header-nav",
                for item in section_props.nav_items.iter() {
                    a { key: "{item}", class: "header-nav-item", href: "#", "{item}" }
                }
            }
        }
    }
}
