// src/application/archive_list.rs
use async_trait::async_trait;
use std::sync::{Arc, Weak};
use tokio::sync::watch;
use tracing::{info, instrument};

use crate::application::list_widget::{ListSnapshot, ListWidget};
use crate::application::{
    ListError, NotesService, Operation, RefreshTarget, SiblingLink, SiblingRefresh,
};
use crate::domain::{ListKind, ListState, NoteId};
use crate::ports::{Alert, ButtonAction, ButtonBinding, RenderedList};

/// The list of archived notes.
pub struct ArchiveList {
    widget: ListWidget,
    active: SiblingLink,
}

impl ArchiveList {
    pub fn new(service: Arc<dyn NotesService>, alert: Arc<dyn Alert>) -> Self {
        Self {
            widget: ListWidget::new(ListKind::Archived, service, alert),
            active: SiblingLink::new(),
        }
    }

    /// Wire the active list that is refreshed after a successful unarchive.
    pub fn link_active(&self, active: Weak<dyn RefreshTarget>) -> bool {
        self.active.link(active)
    }

    pub fn state(&self) -> ListState {
        self.widget.snapshot().state
    }

    pub fn rendered(&self) -> RenderedList {
        self.widget.snapshot().rendered
    }

    pub fn subscribe(&self) -> watch::Receiver<ListSnapshot> {
        self.widget.subscribe()
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn fetch_archived_notes(&self) -> Result<(), ListError> {
        self.widget
            .run(Operation::FetchArchivedNotes, self.widget.fetch())
            .await
    }

    /// Unarchive a note, re-fetch, then start a refresh of the active list.
    #[instrument(level = "debug", skip(self))]
    pub async fn unarchive_note(&self, id: &NoteId) -> Result<SiblingRefresh, ListError> {
        self.widget
            .run(Operation::UnarchiveNote(id.clone()), async {
                self.widget.service().unarchive_note(id).await?;
                info!(note_id = %id, "Note unarchived");
                let fetched = self.widget.fetch().await;
                let refresh = self.active.start_refresh();
                fetched.map(|()| refresh)
            })
            .await
    }

    /// Delete an archived note and re-fetch this list only.
    ///
    /// The active list is left alone: an archived note was never in it.
    #[instrument(level = "debug", skip(self))]
    pub async fn delete_archived_note(&self, id: &NoteId) -> Result<(), ListError> {
        self.widget
            .run(Operation::DeleteNote(id.clone()), async {
                self.widget.service().delete_note(id).await?;
                info!(note_id = %id, "Archived note deleted");
                self.widget.fetch().await
            })
            .await
    }

    pub async fn click(
        &self,
        binding: &ButtonBinding,
    ) -> Result<Option<SiblingRefresh>, ListError> {
        self.widget.check_binding(binding)?;
        match binding.action {
            ButtonAction::Unarchive => self.unarchive_note(&binding.note_id).await.map(Some),
            ButtonAction::Delete => self
                .delete_archived_note(&binding.note_id)
                .await
                .map(|()| None),
            ButtonAction::Archive => Err(ListError::UnsupportedAction {
                action: binding.action,
                list: self.widget.kind().name(),
            }),
        }
    }
}

#[async_trait]
impl RefreshTarget for ArchiveList {
    fn name(&self) -> &'static str {
        "archived"
    }

    async fn refresh(&self) -> Result<(), ListError> {
        self.fetch_archived_notes().await
    }
}
