// src/application/mod.rs
pub mod active_list;
pub mod archive_list;
pub mod error;
pub mod links;
pub(crate) mod list_widget;
pub mod note_form;
pub mod notes_service;
pub mod page;

pub use active_list::ActiveList;
pub use archive_list::ArchiveList;
pub use error::{ListError, Operation};
pub use links::{CreateTarget, RefreshTarget, SiblingLink, SiblingRefresh};
pub use list_widget::ListSnapshot;
pub use note_form::{NoteForm, PendingSubmission};
pub use notes_service::{NotesService, ServiceError};
pub use page::Page;
