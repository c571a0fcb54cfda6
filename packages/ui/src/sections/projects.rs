use dioxus::prelude::*;
use store::ProjectsProps;

#[component]
pub fn ProjectsSection(section_props: ProjectsProps) -> Element {
    rsx! {
        div {
            class: "section section-projects",
            h2 { class: "section-title", "{section_props.title}" }
            p { class: "section-subtitle", "{section_props.subtitle}" }
            div {
                class: "project-grid",
                for (index, project) in section_props.projects.iter().enumerate() {
                    div {
                        key: "{index}",
                        class: "project-card",
                        if !project.image_url.is_empty() {
                            img { class: "project-image", src: "{project.image_url}", alt: "{project.title}" }
                        }
                        h3 { class: "project-title", "{project.title}" }
                        p { class: "project-description", "{project.description}" }
                        div {
                            class: "project-tech",
                            for tech in project.technologies.iter() {
                                span { key: "{tech}", class: "tech-chip", "{tech}" }
                            }
                        }
                        if !project.link.is_empty() {
                            a { class: "project-link", href: "{project.link}", "View project" }
                        }
                    }
                }
            }
        }
    }
}
