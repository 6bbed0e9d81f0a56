//! Candidate note validation and normalization.
//!
//! # Responsibility
//! - Normalize raw user input (trim, tag splitting, dedup) without touching
//!   any storage.
//! - Produce either a `ValidNote` or a field-level error map.
//!
//! # Invariants
//! - Validation is a pure function; it never mutates shared state.
//! - A non-empty `ValidationErrors` means the caller must not hit the store.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Minimum content length, counted in characters after trimming.
pub const MIN_CONTENT_CHARS: usize = 10;

/// Raw candidate note as submitted by a caller (UI form or HTTP body).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    /// Raw tag values. Each element may itself be a comma-separated list.
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// Normalized note fields that passed every validation rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidNote {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

/// Field name -> human-readable message map for rejected drafts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: BTreeMap<&'static str, String>,
}

impl ValidationErrors {
    fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// Returns the message recorded for one field, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Rejected field names in stable (sorted) order.
    pub fn fields(&self) -> Vec<&'static str> {
        self.errors.keys().copied().collect()
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl Error for ValidationErrors {}

impl NoteDraft {
    /// Applies normalization and the full rule set to this draft.
    ///
    /// # Contract
    /// - `title` must be non-empty after trim.
    /// - `content` must be at least [`MIN_CONTENT_CHARS`] characters after trim.
    /// - Missing `tags` defaults to an empty set.
    pub fn validate(&self) -> Result<ValidNote, ValidationErrors> {
        let title = self.title.trim();
        let content = self.content.trim();

        let mut errors = ValidationErrors::default();
        if title.is_empty() {
            errors.insert("title", "title must not be empty");
        }
        if content.chars().count() < MIN_CONTENT_CHARS {
            errors.insert("content", "content must be at least 10 characters");
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ValidNote {
            title: title.to_string(),
            content: content.to_string(),
            tags: normalize_tags(self.tags.as_deref().unwrap_or_default()),
        })
    }
}

/// Normalizes raw tag input according to the notes contract.
///
/// Rules:
/// - Each element is split on commas.
/// - Every piece is trimmed; empty pieces are dropped.
/// - Duplicates are removed exactly (case-sensitive), keeping first-seen order.
pub fn normalize_tags(raw: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tags = Vec::new();
    for element in raw {
        for piece in element.split(',') {
            let tag = piece.trim();
            if tag.is_empty() {
                continue;
            }
            if seen.insert(tag.to_string()) {
                tags.push(tag.to_string());
            }
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::{normalize_tags, NoteDraft};

    fn draft(title: &str, content: &str) -> NoteDraft {
        NoteDraft {
            title: title.to_string(),
            content: content.to_string(),
            tags: None,
        }
    }

    #[test]
    fn accepts_trimmed_title_and_minimum_content() {
        let valid = draft("  Groceries  ", " 0123456789 ").validate().unwrap();
        assert_eq!(valid.title, "Groceries");
        assert_eq!(valid.content, "0123456789");
        assert!(valid.tags.is_empty());
    }

    #[test]
    fn rejects_blank_title_with_field_message() {
        let errors = draft("   ", "long enough content").validate().unwrap_err();
        assert_eq!(errors.get("title"), Some("title must not be empty"));
        assert_eq!(errors.get("content"), None);
    }

    #[test]
    fn rejects_content_of_nine_chars_and_accepts_ten() {
        let errors = draft("T", "012345678").validate().unwrap_err();
        assert_eq!(
            errors.get("content"),
            Some("content must be at least 10 characters")
        );

        assert!(draft("T", "0123456789").validate().is_ok());
    }

    #[test]
    fn collects_errors_for_every_failing_field() {
        let errors = draft("", "short").validate().unwrap_err();
        assert_eq!(errors.fields(), vec!["content", "title"]);
        assert!(errors.to_string().contains("title must not be empty"));
    }

    #[test]
    fn tag_normalization_splits_trims_and_dedups() {
        let tags = normalize_tags(&["a, a, b ,".to_string()]);
        assert_eq!(tags, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn tag_dedup_is_case_sensitive_and_order_preserving() {
        let tags = normalize_tags(&["Work".to_string(), "work".to_string(), "Work".to_string()]);
        assert_eq!(tags, vec!["Work".to_string(), "work".to_string()]);
    }

    #[test]
    fn draft_without_tags_validates_to_empty_tag_set() {
        let valid = draft("T", "0123456789").validate().unwrap();
        assert!(valid.tags.is_empty());
    }
}
