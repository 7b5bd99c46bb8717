// src/domain/mod.rs
pub mod error;
pub mod list_state;
pub mod note;

pub use error::DomainError;
pub use list_state::{ListKind, ListPhase, ListState};
pub use note::{Note, NoteDraft, NoteId};
