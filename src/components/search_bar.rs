//! Search Bar Component
//!
//! Live search input for the header.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::store::use_app_store;

#[component]
pub fn SearchBar() -> impl IntoView {
    let state = use_app_store();

    view! {
        <input
            class="search-bar"
            type="search"
            placeholder="Search notes…"
            autocomplete="off"
            prop:value=move || state.read().query.clone()
            on:input=move |ev| {
                let target = ev.target().unwrap();
                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                state.write().set_query(input.value());
            }
        />
    }
}
