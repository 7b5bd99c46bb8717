// src/application/notes_service.rs
use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Note, NoteDraft, NoteId};

/// Remote notes service the lists talk to.
///
/// Every call is one HTTP round trip; nothing is cached behind it.
#[async_trait]
pub trait NotesService: Send + Sync {
    async fn list_notes(&self) -> Result<Vec<Note>, ServiceError>;

    async fn list_archived_notes(&self) -> Result<Vec<Note>, ServiceError>;

    async fn create_note(&self, draft: &NoteDraft) -> Result<(), ServiceError>;

    async fn archive_note(&self, id: &NoteId) -> Result<(), ServiceError>;

    async fn unarchive_note(&self, id: &NoteId) -> Result<(), ServiceError>;

    async fn delete_note(&self, id: &NoteId) -> Result<(), ServiceError>;
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The request never produced a response.
    #[error("Request failed: {0}")]
    Transport(String),
    /// The service answered with a non-success status.
    #[error(
        "HTTP {status} {reason}{}",
        .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
    )]
    Status {
        status: u16,
        reason: String,
        message: Option<String>,
    },
    /// The response body was not the expected payload.
    #[error("Unexpected response payload: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        ServiceError::Status { status: 500, reason: "Internal Server Error".into(), message: None },
        "HTTP 500 Internal Server Error"
    )]
    #[case(
        ServiceError::Status {
            status: 404,
            reason: "Not Found".into(),
            message: Some("Catatan tidak ditemukan".into()),
        },
        "HTTP 404 Not Found: Catatan tidak ditemukan"
    )]
    #[case(
        ServiceError::Transport("connection refused".into()),
        "Request failed: connection refused"
    )]
    fn given_service_error_when_displaying_then_carries_reason(
        #[case] error: ServiceError,
        #[case] expected: &str,
    ) {
        assert_eq!(error.to_string(), expected);
    }
}
