//! Simple Notes App
//!
//! Composition root: header (title, search, create), sidebar list and the
//! detail/editor panel. All note CRUD goes through the remote `notes` table;
//! local state is only ever updated from server-returned rows.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{NotesTable, SupabaseTable};
use crate::components::{NoteDetails, NoteEditor, NoteList, SearchBar};
use crate::store::{AppState, AppStore, EditorMode};

#[component]
pub fn App() -> impl IntoView {
    let state: AppStore = RwSignal::new(AppState::default());
    provide_context(state);

    let table = match SupabaseTable::from_env() {
        Ok(table) => Some(table),
        Err(message) => {
            state.write().remote_failed(message);
            None
        }
    };

    // Load notes on mount.
    {
        let table = table.clone();
        Effect::new(move |_| {
            let Some(table) = table.clone() else { return };
            let epoch = state.write().begin_fetch();
            spawn_local(async move {
                match table.select_all().await {
                    Ok(rows) => {
                        web_sys::console::log_1(
                            &format!("[APP] loaded {} notes", rows.len()).into(),
                        );
                        state.write().notes_loaded(epoch, rows);
                    }
                    Err(message) => state.write().fetch_failed(epoch, message),
                }
            });
        });
    }

    // Editor submit: create or update depending on the open mode.
    let on_save = {
        let table = table.clone();
        Callback::new(move |(title, content): (String, String)| {
            let Some(table) = table.clone() else { return };
            let (mode, target) = {
                let s = state.read_untracked();
                (s.editor, s.selected)
            };
            state.write().begin_call();
            spawn_local(async move {
                match mode {
                    Some(EditorMode::Create) => match table.insert(&title, &content).await {
                        Ok(note) => state.write().note_created(note),
                        Err(message) => state.write().remote_failed(message),
                    },
                    Some(EditorMode::Edit) => {
                        let Some(id) = target else { return };
                        match table.update(id, &title, &content).await {
                            Ok(note) => state.write().note_updated(note),
                            Err(message) => state.write().remote_failed(message),
                        }
                    }
                    None => {}
                }
            });
        })
    };

    let on_delete = {
        let table = table.clone();
        Callback::new(move |id: i64| {
            let Some(table) = table.clone() else { return };
            state.write().begin_call();
            spawn_local(async move {
                match table.delete(id).await {
                    Ok(()) => state.write().note_deleted(id),
                    Err(message) => state.write().remote_failed(message),
                }
            });
        })
    };

    let error = move || state.read().error.clone();
    let editing = move || state.read().editor.is_some();

    view! {
        <div class="notes-root">
            <header class="header-bar">
                <span class="app-title">"Simple Notes"</span>
                <div class="header-actions">
                    <SearchBar />
                    <button
                        class="primary-btn"
                        on:click=move |_| state.write().open_editor(EditorMode::Create)
                    >
                        "+ New Note"
                    </button>
                </div>
            </header>
            <div class="main-layout">
                <NoteList on_delete=on_delete />
                <main class="main-content">
                    {move || error().map(|message| view! {
                        <div class="error-banner">{message}</div>
                    })}
                    <Show when=editing fallback=move || view! { <NoteDetails /> }>
                        <NoteEditor on_save=on_save />
                    </Show>
                </main>
            </div>
        </div>
    }
}
