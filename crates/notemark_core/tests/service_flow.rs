use notemark_core::{MemoryNoteStore, NoteDraft, NoteService, NoteServiceError};

fn draft(title: &str, content: &str) -> NoteDraft {
    NoteDraft {
        title: title.to_string(),
        content: content.to_string(),
        tags: None,
    }
}

fn service() -> NoteService<MemoryNoteStore> {
    NoteService::new(MemoryNoteStore::new())
}

#[test]
fn create_rejects_content_below_minimum_and_accepts_at_minimum() {
    let mut service = service();

    let err = service
        .create_note(&draft("T", "012345678"))
        .unwrap_err();
    match err {
        NoteServiceError::Validation(errors) => {
            assert_eq!(
                errors.get("content"),
                Some("content must be at least 10 characters")
            );
        }
        other => panic!("unexpected error: {other}"),
    }

    let created = service.create_note(&draft("T", "0123456789")).unwrap();
    assert_eq!(created.content, "0123456789");
    assert_eq!(created.created_at, created.updated_at);
}

#[test]
fn create_rejects_blank_title() {
    let mut service = service();
    let err = service
        .create_note(&draft("   ", "long enough content"))
        .unwrap_err();
    match err {
        NoteServiceError::Validation(errors) => {
            assert_eq!(errors.get("title"), Some("title must not be empty"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn rejected_draft_never_reaches_the_store() {
    let mut service = service();
    let _ = service.create_note(&draft("", "short"));
    assert!(service.list_notes(None).unwrap().is_empty());
}

#[test]
fn create_normalizes_comma_separated_tags() {
    let mut service = service();
    let created = service
        .create_note(&NoteDraft {
            title: "T".to_string(),
            content: "0123456789".to_string(),
            tags: Some(vec!["a, a, b ,".to_string()]),
        })
        .unwrap();
    assert_eq!(created.tags, vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn update_validates_before_touching_the_store() {
    let mut service = service();
    let created = service.create_note(&draft("T", "0123456789")).unwrap();

    let err = service
        .update_note(created.id, &draft("T2", "short"))
        .unwrap_err();
    assert!(matches!(err, NoteServiceError::Validation(_)));

    // The stored note is unchanged after the rejected update.
    let loaded = service.get_note(created.id).unwrap().unwrap();
    assert_eq!(loaded.title, "T");
}

#[test]
fn update_and_delete_propagate_not_found() {
    let mut service = service();
    let ghost = uuid::Uuid::new_v4();

    let update_err = service
        .update_note(ghost, &draft("T", "0123456789"))
        .unwrap_err();
    assert!(matches!(update_err, NoteServiceError::NotFound(id) if id == ghost));

    let delete_err = service.delete_note(ghost).unwrap_err();
    assert!(matches!(delete_err, NoteServiceError::NotFound(id) if id == ghost));
}

#[test]
fn delete_then_get_returns_absent() {
    let mut service = service();
    let created = service.create_note(&draft("T", "0123456789")).unwrap();

    service.delete_note(created.id).unwrap();
    assert!(service.get_note(created.id).unwrap().is_none());
}

#[test]
fn list_notes_applies_case_insensitive_substring_query() {
    let mut service = service();
    service
        .create_note(&draft("DevOps Guide", "pipelines and runbooks"))
        .unwrap();
    service
        .create_note(&draft("Cooking", "pasta and sauces"))
        .unwrap();

    let hits = service.list_notes(Some("devops")).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "DevOps Guide");

    let all = service.list_notes(Some("")).unwrap();
    assert_eq!(all.len(), 2);
}

#[test]
fn list_notes_without_query_is_newest_first() {
    let mut service = service();
    let first = service.create_note(&draft("first", "0123456789")).unwrap();
    let second = service.create_note(&draft("second", "0123456789")).unwrap();

    let listed = service.list_notes(None).unwrap();
    assert_eq!(listed[0].id, second.id);
    assert_eq!(listed[1].id, first.id);
}
