// src/application/error.rs
use std::fmt;
use thiserror::Error;

use crate::application::ServiceError;
use crate::domain::NoteId;
use crate::ports::ButtonAction;

/// A user-initiated operation on one of the lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    FetchNotes,
    FetchArchivedNotes,
    CreateNote,
    ArchiveNote(NoteId),
    UnarchiveNote(NoteId),
    DeleteNote(NoteId),
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::FetchNotes => write!(f, "Fetching notes"),
            Operation::FetchArchivedNotes => write!(f, "Fetching archived notes"),
            Operation::CreateNote => write!(f, "Creating note"),
            Operation::ArchiveNote(id) => write!(f, "Archiving note {id}"),
            Operation::UnarchiveNote(id) => write!(f, "Unarchiving note {id}"),
            Operation::DeleteNote(id) => write!(f, "Deleting note {id}"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    #[error("{operation} failed: {source}")]
    Service {
        operation: Operation,
        #[source]
        source: ServiceError,
    },
    /// The button belongs to markup that has since been re-rendered.
    #[error("Button is stale: rendered in generation {binding}, list is at generation {current}")]
    StaleBinding { binding: u64, current: u64 },
    #[error("{action:?} is not offered by the {list} list")]
    UnsupportedAction { action: ButtonAction, list: &'static str },
    /// A spawned refresh or creation task did not run to completion.
    #[error("Background task failed: {0}")]
    TaskFailed(String),
}
