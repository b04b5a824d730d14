//! UI Components
//!
//! Leptos views for the notes interface.

mod note_details;
mod note_editor;
mod note_list;
mod search_bar;

pub use note_details::NoteDetails;
pub use note_editor::NoteEditor;
pub use note_list::NoteList;
pub use search_bar::SearchBar;
