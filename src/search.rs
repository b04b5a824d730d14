//! Search Filter
//!
//! Pure case-insensitive filtering of the in-memory note list.

use crate::models::Note;

/// True when the note's title or content contains `query` as a
/// case-insensitive substring. An empty query matches everything.
pub fn note_matches(note: &Note, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    note.title
        .as_deref()
        .unwrap_or("")
        .to_lowercase()
        .contains(&query)
        || note
            .content
            .as_deref()
            .unwrap_or("")
            .to_lowercase()
            .contains(&query)
}

/// Narrow `notes` down to the rows matching `query`, preserving order.
pub fn filter_notes(notes: &[Note], query: &str) -> Vec<Note> {
    notes
        .iter()
        .filter(|note| note_matches(note, query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_note(id: i64, title: &str, content: &str) -> Note {
        Note {
            id,
            title: Some(title.to_string()),
            content: Some(content.to_string()),
            updated_at: String::new(),
        }
    }

    #[test]
    fn empty_query_returns_the_full_list() {
        let notes = vec![make_note(1, "a", "b"), make_note(2, "c", "d")];
        assert_eq!(filter_notes(&notes, ""), notes);
    }

    #[test]
    fn matches_on_title_or_content() {
        let notes = vec![
            make_note(1, "Groceries", "milk, eggs"),
            make_note(2, "Work", "standup notes"),
        ];

        let by_content = filter_notes(&notes, "milk");
        assert_eq!(by_content.len(), 1);
        assert_eq!(by_content[0].id, 1);

        let by_title = filter_notes(&notes, "work");
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].id, 2);
    }

    #[test]
    fn filtering_is_case_insensitive() {
        let notes = vec![
            make_note(1, "Groceries", "Milk, eggs"),
            make_note(2, "Work", "standup notes"),
        ];
        let lower = filter_notes(&notes, "milk");
        for variant in ["MILK", "Milk", "mIlK"] {
            assert_eq!(filter_notes(&notes, variant), lower);
        }
    }

    #[test]
    fn absent_fields_never_match_and_never_error() {
        let bare = Note {
            id: 7,
            title: None,
            content: None,
            updated_at: String::new(),
        };
        assert!(filter_notes(&[bare.clone()], "anything").is_empty());
        assert_eq!(filter_notes(&[bare], "").len(), 1);
    }
}
