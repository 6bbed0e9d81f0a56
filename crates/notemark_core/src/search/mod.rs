//! Substring search projection over note collections.
//!
//! # Responsibility
//! - Derive the subset of notes matching a free-text query.
//!
//! # Invariants
//! - Pure function: no store access, no mutation.
//! - A blank (trimmed-empty) query returns the input unchanged.
//! - Relative input order is preserved; there is no ranking.

use crate::model::note::Note;

/// Filters notes whose title or content contains `query` as a
/// case-insensitive substring.
pub fn filter_notes(notes: Vec<Note>, query: &str) -> Vec<Note> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return notes;
    }

    notes
        .into_iter()
        .filter(|note| note_matches(note, &needle))
        .collect()
}

fn note_matches(note: &Note, needle_lower: &str) -> bool {
    note.title.to_lowercase().contains(needle_lower)
        || note.content.to_lowercase().contains(needle_lower)
}

#[cfg(test)]
mod tests {
    use super::filter_notes;
    use crate::model::note::Note;
    use uuid::Uuid;

    fn note(title: &str, content: &str) -> Note {
        Note {
            id: Uuid::new_v4(),
            title: title.to_string(),
            content: content.to_string(),
            tags: Vec::new(),
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn blank_query_is_identity() {
        let notes = vec![note("a", "first note body"), note("b", "second note body")];
        let filtered = filter_notes(notes.clone(), "   ");
        assert_eq!(filtered, notes);
    }

    #[test]
    fn match_is_case_insensitive_substring_on_title() {
        let notes = vec![note("DevOps Guide", "pipelines"), note("Cooking", "pasta")];
        let filtered = filter_notes(notes, "devops");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "DevOps Guide");
    }

    #[test]
    fn match_also_covers_content() {
        let notes = vec![note("a", "weekly STANDUP summary"), note("b", "unrelated")];
        let filtered = filter_notes(notes, "standup");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "a");
    }

    #[test]
    fn input_order_is_preserved_for_multiple_matches() {
        let notes = vec![
            note("first rust note", "x"),
            note("other", "y"),
            note("second rust note", "z"),
        ];
        let filtered = filter_notes(notes, "rust");
        let titles: Vec<&str> = filtered.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["first rust note", "second rust note"]);
    }

    #[test]
    fn tags_are_not_searched() {
        let mut tagged = note("a", "body text here");
        tagged.tags = vec!["secret".to_string()];
        let filtered = filter_notes(vec![tagged], "secret");
        assert!(filtered.is_empty());
    }
}
