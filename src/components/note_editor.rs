//! Note Editor Component
//!
//! Draft form for creating or updating a note. The draft is local state,
//! seeded once at mount; Cancel discards it without any remote call.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::store::{use_app_store, EditorMode};

#[component]
pub fn NoteEditor(#[prop(into)] on_save: Callback<(String, String)>) -> impl IntoView {
    let state = use_app_store();

    // The component mounts when the editor opens, so the draft seeds here:
    // empty for create, the selected note for edit.
    let (mode, seed_title, seed_content) = state.with_untracked(|s| {
        let mode = s.editor.unwrap_or(EditorMode::Create);
        let seed = match mode {
            EditorMode::Edit => s.selected_note(),
            EditorMode::Create => None,
        };
        (
            mode,
            seed.as_ref()
                .and_then(|n| n.title.clone())
                .unwrap_or_default(),
            seed.and_then(|n| n.content).unwrap_or_default(),
        )
    });

    let (title, set_title) = signal(seed_title);
    let (content, set_content) = signal(seed_content);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_save.run((
            title.get().trim().to_string(),
            content.get().trim().to_string(),
        ));
    };

    view! {
        <form class="note-editor" on:submit=submit>
            <div class="editor-row">
                <input
                    class="note-title-input"
                    type="text"
                    placeholder="Title"
                    maxlength="80"
                    prop:value=move || title.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_title.set(input.value());
                    }
                />
            </div>
            <div class="editor-row">
                <textarea
                    class="note-content-input"
                    placeholder="Type your note here…"
                    prop:value=move || content.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let textarea = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                        set_content.set(textarea.value());
                    }
                ></textarea>
            </div>
            <div class="editor-actions">
                <button type="submit" class="primary-btn">
                    {match mode {
                        EditorMode::Edit => "Save",
                        EditorMode::Create => "Create",
                    }}
                </button>
                <button
                    type="button"
                    class="secondary-btn"
                    on:click=move |_| state.write().close_editor()
                >
                    "Cancel"
                </button>
            </div>
        </form>
    }
}
