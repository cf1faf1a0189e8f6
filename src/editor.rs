//! Editor store
//!
//! Owns the working document, the active button selection and the injected
//! saved-document store. UI events arrive as [`EditorAction`]s and are applied
//! one at a time; the document is always replaced by the mutator's result.

use anyhow::{Result, anyhow};
use std::path::Path;
use tracing::{debug, info};

use crate::document::{ButtonConfig, ButtonRole, ControllerConfig, new_id};
use crate::export;
use crate::mutators::{self, ButtonKind};
use crate::persistence::WorkingSession;
use crate::store::DocumentStore;

/// Document-level edits
#[derive(Debug, Clone, PartialEq)]
pub enum EditorAction {
    /// Select a button by id, or clear the selection
    Select(Option<String>),
    AddButton(ButtonKind),
    MoveButton { id: String, x: f64, y: f64 },
    UpdateButton(ButtonConfig),
    RecolorButton { id: String, color: String },
    RelabelButton { id: String, label: String },
    DeleteButton(String),
    Rename(String),
    SetCaseColor(String),
    ApplyFullLayout(String),
    ApplyCategoryLayout { role: ButtonRole, layout_id: String },
}

/// One entry of the saved-documents listing
#[derive(Debug, Clone, PartialEq)]
pub struct SavedSummary {
    pub id: String,
    pub name: String,
    pub button_count: usize,
    pub price: f64,
}

pub struct Editor<S: DocumentStore> {
    document: ControllerConfig,
    selected: Option<String>,
    store: S,
}

impl<S: DocumentStore> Editor<S> {
    /// Start on the built-in default document
    pub fn new(store: S) -> Self {
        Self::with_document(ControllerConfig::default(), store)
    }

    pub fn with_document(mut document: ControllerConfig, store: S) -> Self {
        document.refresh_price();
        Self { document, selected: None, store }
    }

    pub fn from_session(session: WorkingSession, store: S) -> Self {
        let mut editor = Self::with_document(session.document, store);
        editor.selected = session.selected.filter(|id| editor.document.contains_button(id));
        editor
    }

    pub fn session(&self) -> WorkingSession {
        WorkingSession { document: self.document.clone(), selected: self.selected.clone() }
    }

    pub fn document(&self) -> &ControllerConfig {
        &self.document
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected_button(&self) -> Option<&ButtonConfig> {
        self.selected.as_deref().and_then(|id| self.document.button(id))
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Apply one edit to the working document
    pub fn dispatch(&mut self, action: EditorAction) {
        debug!(action = ?action, "Dispatching editor action");
        let doc = self.document.clone();
        self.document = match action {
            EditorAction::Select(id) => {
                self.selected = id.filter(|id| doc.contains_button(id));
                doc
            }
            EditorAction::AddButton(kind) => {
                let (doc, id) = mutators::add_button(doc, kind);
                self.selected = Some(id);
                doc
            }
            EditorAction::MoveButton { id, x, y } => mutators::move_button(doc, &id, x, y),
            EditorAction::UpdateButton(button) => mutators::update_button(doc, button),
            EditorAction::RecolorButton { id, color } => mutators::recolor_button(doc, &id, &color),
            EditorAction::RelabelButton { id, label } => mutators::relabel_button(doc, &id, &label),
            EditorAction::DeleteButton(id) => {
                if self.selected.as_deref() == Some(id.as_str()) {
                    self.selected = None;
                }
                mutators::delete_button(doc, &id)
            }
            // Controller-level edits drop the selection
            EditorAction::Rename(name) => {
                self.selected = None;
                mutators::rename(doc, &name)
            }
            EditorAction::SetCaseColor(color) => {
                self.selected = None;
                mutators::set_case_color(doc, &color)
            }
            EditorAction::ApplyFullLayout(layout_id) => {
                self.selected = None;
                mutators::apply_full_layout(doc, &layout_id)
            }
            EditorAction::ApplyCategoryLayout { role, layout_id } => {
                self.selected = None;
                mutators::apply_category_layout(doc, role, &layout_id)
            }
        };
    }

    /// Start over from the built-in default document
    pub fn reset(&mut self) {
        self.document = ControllerConfig::default();
        self.selected = None;
    }

    /// Save a snapshot of the working document, optionally under a new name.
    ///
    /// The unsaved sentinel id is swapped for a fresh id on first save and the
    /// working document keeps it, so later saves replace that entry. Nothing
    /// changes on the working document when the store write fails.
    pub fn save(&mut self, name: Option<&str>) -> Result<String> {
        let mut doc = self.document.clone();
        if let Some(name) = name {
            doc = mutators::rename(doc, name);
        }
        if doc.is_unsaved() {
            doc.id = new_id();
        }
        self.store.save_one(&doc)?;
        let id = doc.id.clone();
        self.document = doc;
        Ok(id)
    }

    pub fn saved(&self) -> Vec<SavedSummary> {
        self.store
            .load_all()
            .into_iter()
            .map(|doc| SavedSummary {
                button_count: doc.buttons.len(),
                price: crate::pricing::price(&doc.buttons),
                id: doc.id,
                name: doc.name,
            })
            .collect()
    }

    /// Replace the working document with a saved one and clear the selection
    pub fn load_saved(&mut self, id: &str) -> Result<()> {
        let mut doc = self
            .store
            .find(id)
            .ok_or_else(|| anyhow!("No saved configuration with id '{id}'"))?;
        doc.refresh_price();
        info!(id = %doc.id, name = %doc.name, "Loaded saved configuration");
        self.document = doc;
        self.selected = None;
        Ok(())
    }

    pub fn delete_saved(&mut self, id: &str) -> Result<()> {
        self.store.delete_one(id)
    }

    /// Add an imported document to the saved collection. The working document
    /// is left untouched; nothing is stored when the contents do not parse.
    pub fn import(&mut self, contents: &str) -> Result<String> {
        let doc = export::import_document(contents)?;
        self.store.save_one(&doc)?;
        info!(id = %doc.id, name = %doc.name, "Imported configuration");
        Ok(doc.id)
    }

    pub fn import_file(&mut self, path: &Path) -> Result<String> {
        let doc = export::read_import(path)?;
        self.store.save_one(&doc)?;
        info!(id = %doc.id, name = %doc.name, path = %path.display(), "Imported configuration");
        Ok(doc.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn editor() -> Editor<MemoryStore> {
        Editor::new(MemoryStore::new())
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    /// Store whose writes always fail
    struct ReadOnlyStore;

    impl DocumentStore for ReadOnlyStore {
        fn load_all(&self) -> Vec<ControllerConfig> {
            Vec::new()
        }

        fn save_all(&mut self, _docs: &[ControllerConfig]) -> Result<()> {
            Err(anyhow!("store is read-only"))
        }
    }

    #[test]
    fn test_starts_on_default_document() {
        let ed = editor();
        assert_eq!(ed.document().buttons.len(), 7);
        assert!(approx(ed.document().price, 157.91));
        assert_eq!(ed.selected(), None);
    }

    #[test]
    fn test_add_selects_new_button() {
        let mut ed = editor();
        ed.dispatch(EditorAction::AddButton(ButtonKind::Action));
        let selected = ed.selected_button().unwrap();
        assert_eq!(selected.label, "Button 7");
        assert_eq!(ed.document().buttons.last(), Some(selected));
    }

    #[test]
    fn test_delete_selected_clears_selection() {
        let mut ed = editor();
        let id = ed.document().buttons[1].id.clone();
        ed.dispatch(EditorAction::Select(Some(id.clone())));
        assert_eq!(ed.selected(), Some(id.as_str()));

        ed.dispatch(EditorAction::DeleteButton(id.clone()));
        assert_eq!(ed.selected(), None);
        assert!(!ed.document().contains_button(&id));
    }

    #[test]
    fn test_delete_unknown_keeps_buttons_and_selection() {
        let mut ed = editor();
        let id = ed.document().buttons[1].id.clone();
        ed.dispatch(EditorAction::Select(Some(id.clone())));
        let before = ed.document().clone();

        ed.dispatch(EditorAction::DeleteButton("nope".to_string()));
        assert_eq!(ed.document(), &before);
        assert_eq!(ed.selected(), Some(id.as_str()));
    }

    #[test]
    fn test_delete_other_button_keeps_selection() {
        let mut ed = editor();
        let keep = ed.document().buttons[1].id.clone();
        let other = ed.document().buttons[2].id.clone();
        ed.dispatch(EditorAction::Select(Some(keep.clone())));
        ed.dispatch(EditorAction::DeleteButton(other));
        assert_eq!(ed.selected(), Some(keep.as_str()));
    }

    #[test]
    fn test_select_unknown_id_clears() {
        let mut ed = editor();
        ed.dispatch(EditorAction::Select(Some("ghost".to_string())));
        assert_eq!(ed.selected(), None);
    }

    #[test]
    fn test_layout_change_clears_selection() {
        let mut ed = editor();
        ed.dispatch(EditorAction::AddButton(ButtonKind::Option));
        assert!(ed.selected().is_some());

        ed.dispatch(EditorAction::ApplyFullLayout("hitbox".to_string()));
        assert_eq!(ed.selected(), None);
        assert_eq!(ed.document().name, "Hitbox Style");
        assert_eq!(ed.document().joystick_layout_id.as_deref(), Some("hitbox"));
        assert_eq!(ed.document().action_button_layout_id.as_deref(), Some("hitbox"));
    }

    #[test]
    fn test_move_and_relabel_through_dispatch() {
        let mut ed = editor();
        let id = ed.document().buttons[0].id.clone();
        ed.dispatch(EditorAction::MoveButton { id: id.clone(), x: 5000.0, y: -3.0 });
        ed.dispatch(EditorAction::RelabelButton { id: id.clone(), label: "".to_string() });
        ed.dispatch(EditorAction::RecolorButton { id: id.clone(), color: "#ffc0cb".to_string() });

        let b = ed.document().button(&id).unwrap();
        assert_eq!((b.x, b.y), (1322.0, 0.0));
        assert_eq!(b.label, "Joystick 1");
        assert_eq!(b.color, "#ffc0cb");
    }

    #[test]
    fn test_first_save_assigns_id_and_later_saves_replace() {
        let mut ed = editor();
        let id = ed.save(Some("Mine")).unwrap();
        assert_ne!(id, "default");
        assert_eq!(ed.document().id, id);

        ed.dispatch(EditorAction::AddButton(ButtonKind::Joystick));
        let again = ed.save(None).unwrap();
        assert_eq!(again, id);

        let saved = ed.saved();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].name, "Mine");
        assert_eq!(saved[0].button_count, 8);
    }

    #[test]
    fn test_failed_save_leaves_document_unsaved() {
        let mut ed = Editor::new(ReadOnlyStore);
        assert!(ed.save(Some("Renamed")).is_err());
        assert!(ed.document().is_unsaved());
        assert_eq!(ed.document().name, "Default Controller");
    }

    #[test]
    fn test_saved_snapshot_is_independent() {
        let mut ed = editor();
        let id = ed.save(None).unwrap();
        ed.dispatch(EditorAction::DeleteButton(ed.document().buttons[0].id.clone()));
        assert_eq!(ed.store().find(&id).unwrap().buttons.len(), 7);
    }

    #[test]
    fn test_load_saved_replaces_document_and_clears_selection() {
        let mut ed = editor();
        ed.dispatch(EditorAction::ApplyFullLayout("venom-f500".to_string()));
        let id = ed.save(None).unwrap();

        ed.reset();
        ed.dispatch(EditorAction::AddButton(ButtonKind::Action));
        ed.load_saved(&id).unwrap();

        assert_eq!(ed.document().name, "Venom Mayflash F500");
        assert_eq!(ed.document().id, id);
        assert_eq!(ed.selected(), None);
    }

    #[test]
    fn test_load_unknown_saved_is_error() {
        let mut ed = editor();
        let before = ed.document().clone();
        assert!(ed.load_saved("missing").is_err());
        assert_eq!(ed.document(), &before);
    }

    #[test]
    fn test_delete_saved() {
        let mut ed = editor();
        let id = ed.save(None).unwrap();
        ed.delete_saved(&id).unwrap();
        assert!(ed.saved().is_empty());
    }

    #[test]
    fn test_import_adds_with_fresh_id() {
        let mut ed = editor();
        let json = export::to_json_pretty(ed.document()).unwrap();
        let first = ed.import(&json).unwrap();
        let second = ed.import(&json).unwrap();
        assert_ne!(first, second);
        assert_eq!(ed.saved().len(), 2);
        assert!(ed.document().is_unsaved());
    }

    #[test]
    fn test_malformed_import_adds_nothing() {
        let mut ed = editor();
        assert!(ed.import("{ broken").is_err());
        assert!(ed.saved().is_empty());
    }

    #[test]
    fn test_session_round_trip() {
        let mut ed = editor();
        ed.dispatch(EditorAction::AddButton(ButtonKind::Directional));
        let session = ed.session();
        let restored = Editor::from_session(session.clone(), MemoryStore::new());
        assert_eq!(restored.session(), session);
    }
}
