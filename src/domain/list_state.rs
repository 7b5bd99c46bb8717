// src/domain/list_state.rs
use crate::domain::{Note, NoteId};

/// Which remote collection a list mirrors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Active,
    Archived,
}

impl ListKind {
    pub fn name(self) -> &'static str {
        match self {
            ListKind::Active => "active",
            ListKind::Archived => "archived",
        }
    }
}

/// Where a list is in its fetch/mutate cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ListPhase {
    /// Mounted, nothing fetched yet.
    #[default]
    Idle,
    /// A remote call is outstanding; the view shows the loader.
    Loading,
    /// The last operation succeeded.
    Ready,
    /// The last operation failed. Notes are whatever the last successful fetch returned.
    Error(String),
}

/// Notes held by one list plus its phase.
///
/// `notes` is only ever replaced wholesale by a successful fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListState {
    notes: Vec<Note>,
    phase: ListPhase,
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn phase(&self) -> &ListPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == ListPhase::Loading
    }

    pub fn contains(&self, id: &NoteId) -> bool {
        self.notes.iter().any(|n| &n.id == id)
    }

    pub fn begin_loading(&mut self) {
        self.phase = ListPhase::Loading;
    }

    pub fn replace_notes(&mut self, notes: Vec<Note>) {
        self.notes = notes;
    }

    /// Leave the loading phase. Notes are left untouched either way.
    pub fn settle(&mut self, failure: Option<String>) {
        self.phase = match failure {
            None => ListPhase::Ready,
            Some(message) => ListPhase::Error(message),
        };
    }
}
