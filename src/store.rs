//! Application State Store
//!
//! One explicit state struct; every mutation is a named transition, so the
//! selection rule runs after each change that can affect the filtered list.

use leptos::prelude::*;

use crate::models::Note;
use crate::search::filter_notes;

/// Which form the editor panel is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit,
}

/// Client-side application state. The remote table is the source of truth;
/// `notes` is a cache only ever updated from server-returned rows.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Cached rows from the remote table, newest first.
    pub notes: Vec<Note>,
    /// Id of the note shown in the detail panel.
    pub selected: Option<i64>,
    /// Live search query.
    pub query: String,
    /// Single error slot; at most one banner at a time.
    pub error: Option<String>,
    /// Open editor, if any.
    pub editor: Option<EditorMode>,
    /// Sequence number for in-flight fetches; stale responses are dropped.
    pub fetch_epoch: u64,
}

/// Selection rule: keep the selected id while it is still visible, otherwise
/// fall back to the first filtered row. An empty selection stays empty.
pub fn resolve_selection(filtered: &[Note], selected: Option<i64>) -> Option<i64> {
    match selected {
        Some(id) if filtered.iter().any(|n| n.id == id) => Some(id),
        Some(_) => filtered.first().map(|n| n.id),
        None => None,
    }
}

impl AppState {
    /// Notes visible under the current query.
    pub fn filtered(&self) -> Vec<Note> {
        filter_notes(&self.notes, &self.query)
    }

    pub fn selected_note(&self) -> Option<Note> {
        self.selected
            .and_then(|id| self.notes.iter().find(|n| n.id == id).cloned())
    }

    fn resolve(&mut self) {
        self.selected = resolve_selection(&self.filtered(), self.selected);
    }

    /// Every remote call starts here: the previous error is cleared.
    pub fn begin_call(&mut self) {
        self.error = None;
    }

    /// Start a fetch; the returned epoch tags its response.
    pub fn begin_fetch(&mut self) -> u64 {
        self.begin_call();
        self.fetch_epoch += 1;
        self.fetch_epoch
    }

    /// Replace the cached list with server rows, unless a newer fetch
    /// started in the meantime.
    pub fn notes_loaded(&mut self, epoch: u64, rows: Vec<Note>) {
        if epoch != self.fetch_epoch {
            return;
        }
        self.notes = rows;
        self.resolve();
    }

    /// Record a fetch failure, unless a newer fetch superseded it.
    pub fn fetch_failed(&mut self, epoch: u64, message: String) {
        if epoch != self.fetch_epoch {
            return;
        }
        self.remote_failed(message);
    }

    /// Prepend the server-returned row, select it and close the editor.
    /// A row hidden by the active query cannot stay selected.
    pub fn note_created(&mut self, note: Note) {
        self.selected = Some(note.id);
        self.notes.insert(0, note);
        self.editor = None;
        self.resolve();
    }

    /// Splice the server-returned row in place by id.
    pub fn note_updated(&mut self, note: Note) {
        if let Some(slot) = self.notes.iter_mut().find(|n| n.id == note.id) {
            *slot = note;
        }
        self.editor = None;
        self.resolve();
    }

    /// Drop the row; a deleted selection moves to the first filtered row.
    pub fn note_deleted(&mut self, id: i64) {
        self.notes.retain(|n| n.id != id);
        if self.selected == Some(id) {
            self.selected = self.filtered().first().map(|n| n.id);
        }
    }

    pub fn remote_failed(&mut self, message: String) {
        self.error = Some(message);
    }

    pub fn set_query(&mut self, query: String) {
        self.query = query;
        self.resolve();
    }

    pub fn select(&mut self, id: i64) {
        self.selected = Some(id);
    }

    pub fn open_editor(&mut self, mode: EditorMode) {
        self.editor = Some(mode);
    }

    pub fn close_editor(&mut self) {
        self.editor = None;
    }
}

/// Handle to the single reactive state holder.
pub type AppStore = RwSignal<AppState>;

/// Get the app store from context.
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
