//! # Domain models for portfolio documents
//!
//! Defines the data structures that make up a portfolio layout. These types are
//! `Serialize + Deserialize` so they can cross the server/client boundary via Dioxus
//! server functions, and they match the JSON envelope persisted in the `layout`
//! column of the `portfolios` table.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`PortfolioComponent`] | One visual block on the page. Carries an opaque unique `id`, a `type` tag, an open `props` bag whose shape depends on the tag, and a structural (currently unexercised) `children` list. |
//! | [`PortfolioLayout`] | The whole document: an ordered list of components (order is the top-to-bottom page layout) plus an optional [`Theme`]. |
//! | [`ComponentType`] | The closed set of recognised type tags. Parsing a tag happens once, at the render or validation boundary; an unrecognised tag is a parse failure, never a panic. |
//!
//! ## Typed prop projections
//!
//! The `props` bag is stored verbatim, but each recognised tag has a typed
//! projection ([`HeaderProps`], [`HeroProps`], [`AboutProps`], [`ProjectsProps`],
//! [`SkillsProps`], [`ContactProps`]) that [`props_from_bag`] deserialises
//! leniently: missing fields take their defaults and a malformed bag falls back
//! to the default projection instead of failing the render.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One visual block in a portfolio document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PortfolioComponent {
    /// Opaque unique id, generated client-side at creation time.
    pub id: String,
    /// Type tag: "header", "hero", "about", "projects", "skills", "contact".
    pub r#type: String,
    /// Open key-value bag whose shape depends on `type`.
    #[serde(default)]
    pub props: Map<String, Value>,
    /// Structural child list. Present in the wire format, never exercised.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<PortfolioComponent>>,
}

/// Optional per-portfolio theme settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
}

/// The persisted document: `{components: [...], theme?}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioLayout {
    #[serde(default)]
    pub components: Vec<PortfolioComponent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
}

/// Recognised component type tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComponentType {
    Header,
    Hero,
    About,
    Projects,
    Skills,
    Contact,
}

impl ComponentType {
    /// Parse a type tag. Returns `None` for unrecognised tags so callers can
    /// render a visible error placeholder instead of dropping the record.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "header" => Some(Self::Header),
            "hero" => Some(Self::Hero),
            "about" => Some(Self::About),
            "projects" => Some(Self::Projects),
            "skills" => Some(Self::Skills),
            "contact" => Some(Self::Contact),
            _ => None,
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Hero => "hero",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Contact => "contact",
        }
    }
}

/// Deserialise a typed prop projection from an open props bag.
///
/// Missing fields take their struct defaults; a bag that does not deserialise
/// at all yields the default projection. Rendering never fails on bad props.
pub fn props_from_bag<T: DeserializeOwned + Default>(bag: &Map<String, Value>) -> T {
    serde_json::from_value(Value::Object(bag.clone())).unwrap_or_default()
}

/// Typed props for the `header` tag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeaderProps {
    pub name: String,
    pub title: String,
    pub nav_items: Vec<String>,
}

impl Default for HeaderProps {
    fn default() -> Self {
        Self {
            name: "John Doe".to_string(),
            title: "Full Stack Developer".to_string(),
            nav_items: vec![
                "About".to_string(),
                "Projects".to_string(),
                "Skills".to_string(),
                "Contact".to_string(),
            ],
        }
    }
}

/// Typed props for the `hero` tag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroProps {
    pub title: String,
    pub subtitle: String,
    pub primary_button_text: String,
    pub secondary_button_text: String,
}

impl Default for HeroProps {
    fn default() -> Self {
        Self {
            title: "Building Digital Experiences".to_string(),
            subtitle: "I'm a passionate developer who loves creating beautiful, functional websites and applications that make a difference.".to_string(),
            primary_button_text: "View My Work".to_string(),
            secondary_button_text: "Download Resume".to_string(),
        }
    }
}

/// Typed props for the `about` tag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutProps {
    pub title: String,
    pub content: String,
    pub image_url: String,
}

impl Default for AboutProps {
    fn default() -> Self {
        Self {
            title: "About Me".to_string(),
            content: "I am a passionate developer with experience in modern web technologies."
                .to_string(),
            image_url: String::new(),
        }
    }
}

/// One project card inside a `projects` section.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub image_url: String,
    pub link: String,
}

/// Typed props for the `projects` tag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectsProps {
    pub title: String,
    pub subtitle: String,
    pub projects: Vec<ProjectEntry>,
}

impl Default for ProjectsProps {
    fn default() -> Self {
        Self {
            title: "Featured Projects".to_string(),
            subtitle: "Here are some of the projects I've worked on recently".to_string(),
            projects: vec![ProjectEntry {
                title: "Analytics Dashboard".to_string(),
                description: "A comprehensive dashboard for data visualization".to_string(),
                technologies: vec!["React".to_string(), "Node.js".to_string()],
                image_url: String::new(),
                link: "#".to_string(),
            }],
        }
    }
}

/// Typed props for the `skills` tag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillsProps {
    pub title: String,
    pub skills: Vec<String>,
}

impl Default for SkillsProps {
    fn default() -> Self {
        Self {
            title: "Skills".to_string(),
            skills: vec![
                "JavaScript".to_string(),
                "React".to_string(),
                "Node.js".to_string(),
                "Python".to_string(),
                "SQL".to_string(),
            ],
        }
    }
}

/// Typed props for the `contact` tag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactProps {
    pub title: String,
    pub email: String,
    pub phone: String,
    pub show_form: bool,
}

impl Default for ContactProps {
    fn default() -> Self {
        Self {
            title: "Get In Touch".to_string(),
            email: "contact@example.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            show_form: true,
        }
    }
}

/// A problem found while validating a loaded layout.
#[derive(Clone, Debug, PartialEq)]
pub enum LayoutIssue {
    /// A component carries a tag outside the recognised set.
    UnknownType { id: String, tag: String },
    /// Two components share the same id.
    DuplicateId { id: String },
}

impl PortfolioLayout {
    /// Check a loaded document against the invariants: ids unique, tags
    /// recognised. Reports issues without mutating the document; an invalid
    /// component still renders (as an error placeholder), never disappears.
    pub fn validate(&self) -> Vec<LayoutIssue> {
        let mut issues = Vec::new();
        let mut seen = std::collections::HashSet::new();
        for component in &self.components {
            if !seen.insert(component.id.as_str()) {
                issues.push(LayoutIssue::DuplicateId {
                    id: component.id.clone(),
                });
            }
            if ComponentType::from_tag(&component.r#type).is_none() {
                issues.push(LayoutIssue::UnknownType {
                    id: component.id.clone(),
                    tag: component.r#type.clone(),
                });
            }
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn component(id: &str, tag: &str) -> PortfolioComponent {
        PortfolioComponent {
            id: id.to_string(),
            r#type: tag.to_string(),
            props: Map::new(),
            children: None,
        }
    }

    #[test]
    fn test_layout_round_trips_props_verbatim() {
        let mut props = Map::new();
        props.insert("title".to_string(), json!("X"));
        props.insert("anything".to_string(), json!({"nested": [1, 2, 3]}));
        let layout = PortfolioLayout {
            components: vec![PortfolioComponent {
                id: "hero-1".to_string(),
                r#type: "hero".to_string(),
                props,
                children: None,
            }],
            theme: Some(Theme {
                primary_color: Some("#7c3aed".to_string()),
                ..Default::default()
            }),
        };

        let encoded = serde_json::to_string(&layout).unwrap();
        let decoded: PortfolioLayout = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, layout);
    }

    #[test]
    fn test_unknown_tag_is_reported_not_dropped() {
        let layout = PortfolioLayout {
            components: vec![component("a", "hero"), component("b", "starmap")],
            theme: None,
        };
        let issues = layout.validate();
        assert_eq!(
            issues,
            vec![LayoutIssue::UnknownType {
                id: "b".to_string(),
                tag: "starmap".to_string(),
            }]
        );
        // The component itself is still present.
        assert_eq!(layout.components.len(), 2);
    }

    #[test]
    fn test_duplicate_ids_are_reported() {
        let layout = PortfolioLayout {
            components: vec![component("a", "hero"), component("a", "about")],
            theme: None,
        };
        assert_eq!(
            layout.validate(),
            vec![LayoutIssue::DuplicateId { id: "a".to_string() }]
        );
    }

    #[test]
    fn test_props_projection_merges_defaults() {
        let mut bag = Map::new();
        bag.insert("title".to_string(), json!("Custom Title"));
        let props: HeroProps = props_from_bag(&bag);
        assert_eq!(props.title, "Custom Title");
        // Untouched fields keep their defaults.
        assert_eq!(props.primary_button_text, "View My Work");
    }

    #[test]
    fn test_malformed_bag_falls_back_to_defaults() {
        let mut bag = Map::new();
        bag.insert("skills".to_string(), json!("not-an-array"));
        let props: SkillsProps = props_from_bag(&bag);
        assert_eq!(props, SkillsProps::default());
    }

    #[test]
    fn test_component_type_tags() {
        for tag in ["header", "hero", "about", "projects", "skills", "contact"] {
            let parsed = ComponentType::from_tag(tag).unwrap();
            assert_eq!(parsed.as_tag(), tag);
        }
        assert!(ComponentType::from_tag("galaxy").is_none());
    }
}
