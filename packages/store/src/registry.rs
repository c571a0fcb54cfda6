//! Static catalog of the components that can be placed on a page.
//!
//! Each entry maps a type tag to a human label, icon, category, description and
//! a default props bag. The catalog is read-only: instantiating an entry deep-
//! clones `default_props`, so editing one placed component never mutates the
//! registry or any sibling created from the same entry.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use uuid::Uuid;

use crate::models::PortfolioComponent;

/// Palette grouping for a registry entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Layout,
    Content,
}

/// One entry in the component catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComponentDefinition {
    pub r#type: String,
    pub name: String,
    pub icon: String,
    pub category: Category,
    pub description: String,
    pub default_props: Map<String, Value>,
}

impl ComponentDefinition {
    /// Mint a new component from this entry: fresh unique id, deep clone of
    /// the default props.
    pub fn instantiate(&self) -> PortfolioComponent {
        PortfolioComponent {
            id: format!("{}-{}", self.r#type, Uuid::new_v4()),
            r#type: self.r#type.clone(),
            props: self.default_props.clone(),
            children: None,
        }
    }
}

fn definition(
    tag: &str,
    name: &str,
    icon: &str,
    category: Category,
    description: &str,
    default_props: Value,
) -> ComponentDefinition {
    let Value::Object(default_props) = default_props else {
        unreachable!("default props are always JSON objects");
    };
    ComponentDefinition {
        r#type: tag.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        category,
        description: description.to_string(),
        default_props,
    }
}

/// The full component catalog, in palette order.
pub fn component_definitions() -> Vec<ComponentDefinition> {
    vec![
        definition(
            "header",
            "Header",
            "🌟",
            Category::Layout,
            "Navigation header with logo and menu",
            json!({
                "name": "John Doe",
                "title": "Full Stack Developer",
                "navItems": ["About", "Projects", "Skills", "Contact"],
            }),
        ),
        definition(
            "hero",
            "Hero Section",
            "🌌",
            Category::Layout,
            "Main hero section with title and CTA",
            json!({
                "title": "Building Digital Experiences",
                "subtitle": "I'm a passionate developer who loves creating beautiful, functional websites and applications that make a difference.",
                "primaryButtonText": "View My Work",
                "secondaryButtonText": "Download Resume",
            }),
        ),
        definition(
            "about",
            "About Me",
            "👨‍🚀",
            Category::Layout,
            "About section with bio and photo",
            json!({
                "title": "About Me",
                "content": "I am a passionate developer with experience in modern web technologies.",
                "imageUrl": "",
            }),
        ),
        definition(
            "projects",
            "Projects",
            "🛸",
            Category::Layout,
            "Showcase of your projects",
            json!({
                "title": "Featured Projects",
                "subtitle": "Here are some of the projects I've worked on recently",
                "projects": [
                    {
                        "title": "Analytics Dashboard",
                        "description": "A comprehensive dashboard for data visualization",
                        "technologies": ["React", "Node.js"],
                        "imageUrl": "",
                        "link": "#",
                    }
                ],
            }),
        ),
        definition(
            "skills",
            "Skills",
            "⚡",
            Category::Layout,
            "Display your technical skills",
            json!({
                "title": "Skills",
                "skills": ["JavaScript", "React", "Node.js", "Python", "SQL"],
            }),
        ),
        definition(
            "contact",
            "Contact",
            "📡",
            Category::Layout,
            "Contact form and information",
            json!({
                "title": "Get In Touch",
                "email": "contact@example.com",
                "phone": "+1 (555) 123-4567",
                "showForm": true,
            }),
        ),
    ]
}

/// Catalog entries in one category. Pure filter, no side effects.
pub fn definitions_in_category(category: Category) -> Vec<ComponentDefinition> {
    component_definitions()
        .into_iter()
        .filter(|d| d.category == category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_every_definition_has_a_recognised_tag() {
        use crate::models::ComponentType;
        for def in component_definitions() {
            assert!(
                ComponentType::from_tag(&def.r#type).is_some(),
                "catalog entry {} has an unrecognised tag",
                def.r#type
            );
        }
    }

    #[test]
    fn test_instantiate_generates_unique_ids() {
        let defs = component_definitions();
        let hero = &defs[1];
        let a = hero.instantiate();
        let b = hero.instantiate();
        assert_ne!(a.id, b.id);
        assert_eq!(a.r#type, "hero");
        assert!(a.id.starts_with("hero-"));
    }

    #[test]
    fn test_instantiated_props_never_alias() {
        let defs = component_definitions();
        let hero = &defs[1];
        let mut a = hero.instantiate();
        let b = hero.instantiate();

        a.props.insert("title".to_string(), json!("Mutated"));

        assert_eq!(b.props["title"], json!("Building Digital Experiences"));
        assert_eq!(
            hero.default_props["title"],
            json!("Building Digital Experiences")
        );
        // A fresh catalog is also untouched.
        assert_eq!(
            component_definitions()[1].default_props["title"],
            json!("Building Digital Experiences")
        );
    }

    #[test]
    fn test_category_filter_is_pure() {
        let before = component_definitions();
        let layout = definitions_in_category(Category::Layout);
        let content = definitions_in_category(Category::Content);
        assert_eq!(layout.len() + content.len(), before.len());
        assert_eq!(component_definitions(), before);
    }
}
