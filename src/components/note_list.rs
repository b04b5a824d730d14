//! Note List Component
//!
//! Sidebar showing the filtered notes with selection and per-row delete.

use leptos::prelude::*;

use crate::store::use_app_store;

#[component]
pub fn NoteList(#[prop(into)] on_delete: Callback<i64>) -> impl IntoView {
    let state = use_app_store();
    let filtered = Memo::new(move |_| state.read().filtered());

    view! {
        <nav class="sidebar">
            <div class="sidebar-title">"Notes"</div>
            <ul class="notes-list">
                <Show when=move || filtered.get().is_empty()>
                    <li class="empty">"No notes yet."</li>
                </Show>
                {move || filtered.get().into_iter().map(|note| {
                    let id = note.id;
                    let title = note.display_title().to_string();
                    let snippet = note.snippet();
                    let is_selected = move || state.read().selected == Some(id);
                    view! {
                        <li
                            class=move || if is_selected() { "note-item selected" } else { "note-item" }
                            on:click=move |_| state.write().select(id)
                        >
                            <div class="note-title-row">
                                <span class="note-title">{title}</span>
                                <button
                                    class="delete-btn"
                                    on:click=move |ev| {
                                        ev.stop_propagation();
                                        on_delete.run(id);
                                    }
                                >
                                    "✕"
                                </button>
                            </div>
                            <div class="note-snippet">{snippet}</div>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}
