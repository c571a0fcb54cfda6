//! Editor state wiring: an owned [`EditorState`] injected through Dioxus
//! context. Each call to [`provide_editor`] creates its own store, so two
//! editor screens (or two tests) never share state.

use dioxus::prelude::*;
use store::EditorState;

/// Create a fresh editor store and provide it to child components.
/// Call once, at the top of the editor screen.
pub fn provide_editor() -> Signal<EditorState> {
    let editor = use_signal(EditorState::default);
    use_context_provider(|| editor)
}

/// Get the editor store provided by the nearest [`provide_editor`] caller.
pub fn use_editor() -> Signal<EditorState> {
    use_context::<Signal<EditorState>>()
}
