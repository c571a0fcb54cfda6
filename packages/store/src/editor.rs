//! Editor document state: the list of placed components plus UI-only
//! ephemeral state (selection, preview flag, save flag, portfolio bindings).
//!
//! `EditorState` is a plain owned value. The UI layer injects it through a
//! Dioxus context signal per editor instance, so multiple editors (tests,
//! multiple tabs) never share state. All operations are synchronous and total:
//! updating or removing a missing id is a documented no-op, not an error.

use serde_json::{Map, Value};

use crate::models::PortfolioComponent;

pub const DEFAULT_PORTFOLIO_NAME: &str = "Untitled Portfolio";

#[derive(Clone, Debug, PartialEq)]
pub struct EditorState {
    pub components: Vec<PortfolioComponent>,
    pub selected_component_id: Option<String>,
    pub is_preview_mode: bool,
    pub portfolio_id: Option<i32>,
    pub portfolio_name: String,
    pub is_saving: bool,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            components: Vec::new(),
            selected_component_id: None,
            is_preview_mode: false,
            portfolio_id: None,
            portfolio_name: DEFAULT_PORTFOLIO_NAME.to_string(),
            is_saving: false,
        }
    }
}

impl EditorState {
    /// Append a component at the end of the document.
    pub fn add_component(&mut self, component: PortfolioComponent) {
        self.components.push(component);
    }

    /// Merge a partial props patch into the matching component. Patch keys
    /// overwrite existing keys; untouched keys are kept. No-op if the id is
    /// absent.
    pub fn update_component(&mut self, id: &str, patch: Map<String, Value>) {
        if let Some(component) = self.components.iter_mut().find(|c| c.id == id) {
            for (key, value) in patch {
                component.props.insert(key, value);
            }
        }
    }

    /// Remove the matching component, clearing the selection if it pointed at
    /// it. No-op if the id is absent.
    pub fn remove_component(&mut self, id: &str) {
        self.components.retain(|c| c.id != id);
        if self.selected_component_id.as_deref() == Some(id) {
            self.selected_component_id = None;
        }
    }

    /// Insert a copy of the matching component (fresh id, cloned props)
    /// directly after the original, and select it. No-op if the id is absent.
    pub fn duplicate_component(&mut self, id: &str) {
        let Some(index) = self.components.iter().position(|c| c.id == id) else {
            return;
        };
        let mut copy = self.components[index].clone();
        copy.id = format!("{}-{}", copy.r#type, uuid::Uuid::new_v4());
        let copy_id = copy.id.clone();
        self.components.insert(index + 1, copy);
        self.selected_component_id = Some(copy_id);
    }

    /// Select exactly one component, or none.
    pub fn select_component(&mut self, id: Option<String>) {
        self.selected_component_id = id;
    }

    pub fn selected_component(&self) -> Option<&PortfolioComponent> {
        let id = self.selected_component_id.as_deref()?;
        self.components.iter().find(|c| c.id == id)
    }

    pub fn set_preview_mode(&mut self, preview: bool) {
        self.is_preview_mode = preview;
    }

    pub fn set_saving(&mut self, saving: bool) {
        self.is_saving = saving;
    }

    pub fn set_portfolio_id(&mut self, id: Option<i32>) {
        self.portfolio_id = id;
    }

    pub fn set_portfolio_name(&mut self, name: String) {
        self.portfolio_name = name;
    }

    /// Replace the whole document and its bindings atomically. This is the
    /// only bulk-replacement path, so a load never interleaves with local
    /// edits. Clears the selection.
    pub fn load_portfolio(&mut self, components: Vec<PortfolioComponent>, name: String, id: i32) {
        self.components = components;
        self.portfolio_name = name;
        self.portfolio_id = Some(id);
        self.selected_component_id = None;
    }

    /// Reset to the empty initial state.
    pub fn clear_editor(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::component_definitions;
    use serde_json::json;

    fn patch(pairs: &[(&str, Value)]) -> Map<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    fn hero() -> PortfolioComponent {
        component_definitions()[1].instantiate()
    }

    #[test]
    fn test_add_then_remove_by_id() {
        let mut state = EditorState::default();
        let components: Vec<_> = (0..4).map(|_| hero()).collect();
        let victim = components[2].id.clone();
        for c in components {
            state.add_component(c);
        }
        assert_eq!(state.components.len(), 4);

        state.remove_component(&victim);
        assert_eq!(state.components.len(), 3);
        assert!(state.components.iter().all(|c| c.id != victim));
    }

    #[test]
    fn test_remove_missing_id_is_a_no_op() {
        let mut state = EditorState::default();
        state.add_component(hero());
        let before = state.clone();

        state.remove_component("no-such-id");
        assert_eq!(state, before);
    }

    #[test]
    fn test_update_merges_instead_of_replacing() {
        let mut state = EditorState::default();
        let mut component = hero();
        component.props = patch(&[("title", json!("A")), ("subtitle", json!("B"))]);
        let id = component.id.clone();
        state.add_component(component);

        state.update_component(&id, patch(&[("title", json!("X"))]));

        let props = &state.components[0].props;
        assert_eq!(props["title"], json!("X"));
        assert_eq!(props["subtitle"], json!("B"));
    }

    #[test]
    fn test_update_missing_id_is_a_no_op() {
        let mut state = EditorState::default();
        state.add_component(hero());
        let before = state.clone();

        state.update_component("no-such-id", patch(&[("title", json!("X"))]));
        assert_eq!(state, before);
    }

    #[test]
    fn test_selection_is_exclusive_and_cleared_on_remove() {
        let mut state = EditorState::default();
        let a = hero();
        let b = hero();
        let a_id = a.id.clone();
        let b_id = b.id.clone();
        state.add_component(a);
        state.add_component(b);

        state.select_component(Some(a_id.clone()));
        state.select_component(Some(b_id.clone()));
        assert_eq!(state.selected_component_id.as_deref(), Some(b_id.as_str()));

        state.remove_component(&b_id);
        assert_eq!(state.selected_component_id, None);

        // Removing a non-selected component keeps the selection.
        state.select_component(Some(a_id.clone()));
        state.remove_component("no-such-id");
        assert_eq!(state.selected_component_id.as_deref(), Some(a_id.as_str()));
    }

    #[test]
    fn test_duplicate_inserts_after_original_with_fresh_id() {
        let mut state = EditorState::default();
        let a = hero();
        let b = hero();
        let a_id = a.id.clone();
        state.add_component(a);
        state.add_component(b);

        state.duplicate_component(&a_id);

        assert_eq!(state.components.len(), 3);
        assert_eq!(state.components[0].id, a_id);
        let copy = &state.components[1];
        assert_ne!(copy.id, a_id);
        assert_eq!(copy.r#type, "hero");
        assert_eq!(copy.props, state.components[0].props);
        assert_eq!(state.selected_component_id.as_deref(), Some(copy.id.as_str()));
    }

    #[test]
    fn test_mutating_a_duplicate_never_touches_the_original() {
        let mut state = EditorState::default();
        let original = hero();
        let original_id = original.id.clone();
        state.add_component(original);
        state.duplicate_component(&original_id);
        let copy_id = state.components[1].id.clone();

        state.update_component(&copy_id, patch(&[("title", json!("Changed"))]));

        assert_eq!(
            state.components[0].props["title"],
            json!("Building Digital Experiences")
        );
        assert_eq!(state.components[1].props["title"], json!("Changed"));
    }

    #[test]
    fn test_load_portfolio_replaces_document_and_clears_selection() {
        let mut state = EditorState::default();
        let stale = hero();
        let stale_id = stale.id.clone();
        state.add_component(stale);
        state.select_component(Some(stale_id));

        let incoming: Vec<_> = (0..3).map(|_| hero()).collect();
        let expected = incoming.clone();
        state.load_portfolio(incoming, "My Portfolio".to_string(), 7);

        assert_eq!(state.components, expected);
        assert_eq!(state.portfolio_name, "My Portfolio");
        assert_eq!(state.portfolio_id, Some(7));
        assert_eq!(state.selected_component_id, None);
    }

    #[test]
    fn test_clear_editor_resets_to_initial_state() {
        let mut state = EditorState::default();
        state.add_component(hero());
        state.set_preview_mode(true);
        state.set_portfolio_name("Named".to_string());
        state.set_portfolio_id(Some(3));

        state.clear_editor();
        assert_eq!(state, EditorState::default());
        assert_eq!(state.portfolio_name, DEFAULT_PORTFOLIO_NAME);
    }
}
