//! Note Details Component
//!
//! Read-mode panel for the selected note, with placeholders for absent
//! title and content.

use leptos::prelude::*;

use crate::store::{use_app_store, EditorMode};

#[component]
pub fn NoteDetails() -> impl IntoView {
    let state = use_app_store();
    let selected = Memo::new(move |_| state.read().selected_note());

    view! {
        <Show
            when=move || selected.get().is_some()
            fallback=|| view! {
                <section class="main-panel empty">
                    <span>"Select a note to view."</span>
                </section>
            }
        >
            {move || selected.get().map(|note| {
                let title = note.display_title().to_string();
                let content = note.content.clone().filter(|c| !c.is_empty());
                let edited = if note.updated_at.is_empty() {
                    "—".to_string()
                } else {
                    note.updated_at.clone()
                };
                view! {
                    <section class="main-panel">
                        <div class="main-header">
                            <h2>{title}</h2>
                            <button
                                class="accent-btn"
                                on:click=move |_| state.write().open_editor(EditorMode::Edit)
                            >
                                "Edit"
                            </button>
                        </div>
                        <article class="note-content">
                            {match content {
                                Some(content) => view! { <span>{content}</span> }.into_any(),
                                None => view! { <em>"(No content)"</em> }.into_any(),
                            }}
                        </article>
                        <div class="details-meta">
                            <span class="meta-label">"Edited: "</span>
                            {edited}
                        </div>
                    </section>
                }
            })}
        </Show>
    }
}
