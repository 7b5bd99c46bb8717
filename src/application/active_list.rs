// src/application/active_list.rs
use async_trait::async_trait;
use std::sync::{Arc, Weak};
use tokio::sync::watch;
use tracing::{info, instrument, warn};

use crate::application::list_widget::{ListSnapshot, ListWidget};
use crate::application::{
    CreateTarget, ListError, NotesService, Operation, RefreshTarget, SiblingLink, SiblingRefresh,
};
use crate::domain::{ListKind, ListState, NoteDraft, NoteId};
use crate::ports::{Alert, ButtonAction, ButtonBinding, RenderedList};

/// The list of notes that are not archived.
pub struct ActiveList {
    widget: ListWidget,
    archive: SiblingLink,
}

impl ActiveList {
    pub fn new(service: Arc<dyn NotesService>, alert: Arc<dyn Alert>) -> Self {
        Self {
            widget: ListWidget::new(ListKind::Active, service, alert),
            archive: SiblingLink::new(),
        }
    }

    /// Wire the archive list that is refreshed after a successful archive.
    pub fn link_archive(&self, archive: Weak<dyn RefreshTarget>) -> bool {
        self.archive.link(archive)
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
    pub async fn fetch_notes(&self) -> Result<(), ListError> {
        self.widget
            .run(Operation::FetchNotes, self.widget.fetch())
            .await
    }

    /// Create a note, then re-fetch. The new note is whatever the service made of it.
    #[instrument(level = "debug", skip(self, draft), fields(title = draft.title()))]
    pub async fn add_note(&self, draft: &NoteDraft) -> Result<(), ListError> {
        self.widget
            .run(Operation::CreateNote, async {
                self.widget.service().create_note(draft).await?;
                info!(title = draft.title(), "Note created");
                self.widget.fetch().await
            })
            .await
    }

    /// Archive a note, re-fetch, then start a refresh of the archive list.
    ///
    /// The archive refresh is not awaited here; the returned handle is.
    #[instrument(level = "debug", skip(self))]
    pub async fn archive_note(&self, id: &NoteId) -> Result<SiblingRefresh, ListError> {
        self.widget
            .run(Operation::ArchiveNote(id.clone()), async {
                self.widget.service().archive_note(id).await?;
                info!(note_id = %id, "Note archived");
                let fetched = self.widget.fetch().await;
                // The note has moved whether or not our own re-fetch worked.
                let refresh = self.archive.start_refresh();
                fetched.map(|()| refresh)
            })
            .await
    }

    /// Delete a note and re-fetch. The re-fetch runs even if the delete failed.
    #[instrument(level = "debug", skip(self))]
    pub async fn delete_note(&self, id: &NoteId) -> Result<(), ListError> {
        self.widget
            .run(Operation::DeleteNote(id.clone()), async {
                let deleted = self.widget.service().delete_note(id).await;
                match &deleted {
                    Ok(()) => info!(note_id = %id, "Note deleted"),
                    Err(e) => warn!(note_id = %id, error = %e, "Delete rejected"),
                }
                let fetched = self.widget.fetch().await;
                deleted.and(fetched)
            })
            .await
    }

    /// Dispatch a click on one of the buttons of the current render.
    pub async fn click(
        &self,
        binding: &ButtonBinding,
    ) -> Result<Option<SiblingRefresh>, ListError> {
        self.widget.check_binding(binding)?;
        match binding.action {
            ButtonAction::Archive => self.archive_note(&binding.note_id).await.map(Some),
            ButtonAction::Delete => self.delete_note(&binding.note_id).await.map(|()| None),
            ButtonAction::Unarchive => Err(ListError::UnsupportedAction {
                action: binding.action,
                list: self.widget.kind().name(),
            }),
        }
    }
}

#[async_trait]
impl RefreshTarget for ActiveList {
    fn name(&self) -> &'static str {
        "active"
    }

    async fn refresh(&self) -> Result<(), ListError> {
        self.fetch_notes().await
    }
}

#[async_trait]
impl CreateTarget for ActiveList {
    async fn create(&self, draft: NoteDraft) -> Result<(), ListError> {
        self.add_note(&draft).await
    }
}
