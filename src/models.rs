//! Note Models
//!
//! Data structures matching the remote `notes` table rows.

use serde::{Deserialize, Serialize};

/// A note row as returned by the remote table.
///
/// `id` and `updated_at` are server-assigned; title and content may be
/// absent, in which case the UI shows placeholders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub updated_at: String,
}

impl Note {
    /// Title for the list and details panel, with a placeholder when absent.
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(t) if !t.is_empty() => t,
            _ => "(Untitled)",
        }
    }

    /// First 30 characters of the content for the sidebar snippet.
    pub fn snippet(&self) -> String {
        let content = self.content.as_deref().unwrap_or("");
        let mut chars = content.chars();
        let head: String = chars.by_ref().take(30).collect();
        if chars.next().is_some() {
            format!("{}…", head)
        } else {
            head
        }
    }
}

/// Fields sent on insert and update; the server assigns everything else.
#[derive(Serialize)]
pub struct NoteFields<'a> {
    pub title: &'a str,
    pub content: &'a str,
}
