//! Display widgets for each recognised component type. One widget serves both
//! the live editor and the published preview: editor affordances live in the
//! renderer's wrapper, never in these sections, which keeps the two modes
//! visually identical.

mod about;
mod contact;
mod header;
mod hero;
mod projects;
mod skills;

pub use about::AboutSection;
pub use contact::ContactSection;
pub use header::HeaderSection;
pub use hero::HeroSection;
pub use projects::ProjectsSection;
pub use skills::SkillsSection;
