// src/domain/note.rs
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::DomainError;

/// Identifier assigned by the notes service. Opaque to the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NoteId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A note as returned by the notes service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub created_at: String,
}

/// Title and body of a note that does not exist yet.
///
/// Only constructed through [`NoteDraft::new`], which rejects blank fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteDraft {
    title: String,
    body: String,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Result<Self, DomainError> {
        let title = title.into();
        let body = body.into();
        if title.trim().is_empty() {
            return Err(DomainError::MissingField("title"));
        }
        if body.trim().is_empty() {
            return Err(DomainError::MissingField("body"));
        }
        Ok(Self { title, body })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn given_service_payload_when_deserializing_then_maps_camel_case_fields() {
        let json = r#"{
            "id": "notes-jT-jjsyz61J8XKiI",
            "title": "Welcome to Notes, Dimas!",
            "body": "Welcome to Notes!",
            "createdAt": "2022-07-28T10:03:12.594Z",
            "archived": false
        }"#;

        let note: Note = serde_json::from_str(json).expect("payload should parse");

        assert_eq!(note.id.as_str(), "notes-jT-jjsyz61J8XKiI");
        assert_eq!(note.title, "Welcome to Notes, Dimas!");
        assert_eq!(note.created_at, "2022-07-28T10:03:12.594Z");
        assert!(!note.archived);
    }

    #[test]
    fn given_payload_without_optional_fields_when_deserializing_then_uses_defaults() {
        let json = r#"{"id": "n1", "title": "t", "body": "b"}"#;

        let note: Note = serde_json::from_str(json).expect("payload should parse");

        assert!(!note.archived);
        assert!(note.created_at.is_empty());
    }

    #[test]
    fn given_draft_when_serializing_then_emits_title_and_body_only() {
        let draft = NoteDraft::new("Meeting", "10am standup").expect("valid draft");

        let value = serde_json::to_value(&draft).expect("draft serializes");

        assert_eq!(
            value,
            serde_json::json!({"title": "Meeting", "body": "10am standup"})
        );
    }

    #[rstest]
    #[case("", "body", "title")]
    #[case("   ", "body", "title")]
    #[case("title", "", "body")]
    #[case("title", "\n\t", "body")]
    fn given_blank_field_when_creating_draft_then_names_missing_field(
        #[case] title: &str,
        #[case] body: &str,
        #[case] missing: &str,
    ) {
        let result = NoteDraft::new(title, body);

        match result {
            Err(DomainError::MissingField(field)) => assert_eq!(field, missing),
            other => panic!("Expected MissingField, got {other:?}"),
        }
    }
}
