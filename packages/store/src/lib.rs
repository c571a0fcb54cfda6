pub mod editor;
pub mod models;
pub mod registry;

pub use editor::EditorState;
pub use models::{
    AboutProps, ComponentType, ContactProps, HeaderProps, HeroProps, LayoutIssue,
    PortfolioComponent, PortfolioLayout, ProjectEntry, ProjectsProps, SkillsProps, Theme,
    props_from_bag,
};
pub use registry::{Category, ComponentDefinition, component_definitions, definitions_in_category};
