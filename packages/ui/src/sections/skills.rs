use dioxus::prelude::*;
use store::SkillsProps;

#[component]
pub fn SkillsSection(section_props: SkillsProps) -> Element {
    rsx! {
        div {
            class: "section section-skills",
            h2 { class: "section-title", "{section_props.title}" }
            div {
                class: "skill-list",
                for skill in section_props.skills.iter() {
                    span { key: "{skill}", class: "skill-chip", "{skill}" }
                }
            }
        }
    }
}
