//! Remote Table Client
//!
//! Async CRUD against the hosted `notes` table over authenticated HTTPS.
//! The rest of the app only sees the [`NotesTable`] trait, never the
//! provider-specific plumbing.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::models::{Note, NoteFields};

/// Build-time service configuration, injected by the bundler environment.
const SERVICE_URL: Option<&str> = option_env!("SUPABASE_URL");
const SERVICE_KEY: Option<&str> = option_env!("SUPABASE_KEY");

/// Backend seam: select, insert, update and delete on the notes table.
///
/// Failures carry the server-provided message, or a generic fallback.
pub trait NotesTable {
    async fn select_all(&self) -> Result<Vec<Note>, String>;
    async fn insert(&self, title: &str, content: &str) -> Result<Note, String>;
    async fn update(&self, id: i64, title: &str, content: &str) -> Result<Note, String>;
    async fn delete(&self, id: i64) -> Result<(), String>;
}

/// Client for a Supabase-style REST row store.
#[derive(Clone)]
pub struct SupabaseTable {
    base_url: String,
    key: String,
}

impl SupabaseTable {
    pub fn new(url: &str, key: &str) -> Self {
        Self {
            base_url: format!("{}/rest/v1/notes", url.trim_end_matches('/')),
            key: key.to_string(),
        }
    }

    /// Build a client from the two build-time variables.
    pub fn from_env() -> Result<Self, String> {
        match (SERVICE_URL, SERVICE_KEY) {
            (Some(url), Some(key)) => Ok(Self::new(url, key)),
            _ => Err("SUPABASE_URL / SUPABASE_KEY not configured".to_string()),
        }
    }

    async fn request(
        &self,
        method: &str,
        query: &str,
        body: Option<String>,
    ) -> Result<String, String> {
        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_mode(RequestMode::Cors);
        if let Some(body) = body {
            opts.set_body(&JsValue::from_str(&body));
        }

        let url = format!("{}{}", self.base_url, query);
        let request = Request::new_with_str_and_init(&url, &opts).map_err(js_message)?;
        let headers = request.headers();
        headers.set("apikey", &self.key).map_err(js_message)?;
        headers
            .set("Authorization", &format!("Bearer {}", self.key))
            .map_err(js_message)?;
        headers
            .set("Content-Type", "application/json")
            .map_err(js_message)?;
        // Mutations must return the affected rows.
        headers
            .set("Prefer", "return=representation")
            .map_err(js_message)?;

        let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
        let response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_message)?;
        let response: Response = response.dyn_into().map_err(js_message)?;

        let text = JsFuture::from(response.text().map_err(js_message)?)
            .await
            .map_err(js_message)?
            .as_string()
            .unwrap_or_default();

        if response.ok() {
            Ok(text)
        } else {
            Err(error_message(&text, response.status()))
        }
    }
}

impl NotesTable for SupabaseTable {
    async fn select_all(&self) -> Result<Vec<Note>, String> {
        let body = self
            .request("GET", "?select=*&order=updated_at.desc", None)
            .await?;
        serde_json::from_str(&body).map_err(|e| e.to_string())
    }

    async fn insert(&self, title: &str, content: &str) -> Result<Note, String> {
        let payload =
            serde_json::to_string(&NoteFields { title, content }).map_err(|e| e.to_string())?;
        let body = self.request("POST", "", Some(payload)).await?;
        single_row(&body)
    }

    async fn update(&self, id: i64, title: &str, content: &str) -> Result<Note, String> {
        let payload =
            serde_json::to_string(&NoteFields { title, content }).map_err(|e| e.to_string())?;
        let body = self
            .request("PATCH", &format!("?id=eq.{}", id), Some(payload))
            .await?;
        single_row(&body)
    }

    async fn delete(&self, id: i64) -> Result<(), String> {
        self.request("DELETE", &format!("?id=eq.{}", id), None)
            .await?;
        Ok(())
    }
}

/// Mutation responses are arrays of affected rows; exactly one is expected.
fn single_row(body: &str) -> Result<Note, String> {
    let mut rows: Vec<Note> = serde_json::from_str(body).map_err(|e| e.to_string())?;
    if rows.is_empty() {
        return Err("remote operation affected no rows".to_string());
    }
    Ok(rows.remove(0))
}

/// Pull the server-provided message out of an error body, with a fallback.
fn error_message(body: &str, status: u16) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
        .unwrap_or_else(|| format!("remote operation failed (HTTP {})", status))
}

fn js_message(value: JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| "remote request failed".to_string())
}
