// src/application/page.rs
use std::sync::Arc;
use tracing::{debug, info};

use crate::application::{
    ActiveList, ArchiveList, CreateTarget, NoteForm, NotesService, RefreshTarget,
};
use crate::ports::{Alert, HtmlPresenter};

/// Header, creation form, active list and archive list, wired together.
pub struct Page {
    form: NoteForm,
    active: Arc<ActiveList>,
    archive: Arc<ArchiveList>,
    presenter: HtmlPresenter,
}

impl Page {
    /// Build and wire the components without fetching anything.
    pub fn new(service: Arc<dyn NotesService>, alert: Arc<dyn Alert>) -> Self {
        let active = Arc::new(ActiveList::new(Arc::clone(&service), Arc::clone(&alert)));
        let archive = Arc::new(ArchiveList::new(service, alert));

        let active_target: Arc<dyn RefreshTarget> = active.clone();
        let archive_target: Arc<dyn RefreshTarget> = archive.clone();
        active.link_archive(Arc::downgrade(&archive_target));
        archive.link_active(Arc::downgrade(&active_target));

        let create_target: Arc<dyn CreateTarget> = active.clone();
        debug!("Page components wired");

        Self {
            form: NoteForm::new(create_target),
            active,
            archive,
            presenter: HtmlPresenter::new(),
        }
    }

    /// Build the page and fetch both lists.
    pub async fn mount(service: Arc<dyn NotesService>, alert: Arc<dyn Alert>) -> Self {
        let page = Self::new(service, alert);
        page.refresh_all().await;
        page
    }

    /// Re-fetch both lists concurrently. Failures have already been alerted.
    pub async fn refresh_all(&self) {
        let (active, archived) = tokio::join!(
            self.active.fetch_notes(),
            self.archive.fetch_archived_notes()
        );
        info!(
            active_ok = active.is_ok(),
            archived_ok = archived.is_ok(),
            active_count = self.active.state().notes().len(),
            archived_count = self.archive.state().notes().len(),
            "Page refreshed"
        );
    }

    pub fn active(&self) -> &Arc<ActiveList> {
        &self.active
    }

    pub fn archive(&self) -> &Arc<ArchiveList> {
        &self.archive
    }

    pub fn form(&self) -> &NoteForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut NoteForm {
        &mut self.form
    }

    /// The whole page as an HTML document.
    pub fn render(&self) -> String {
        self.presenter.render_page(
            (self.form.title(), self.form.body()),
            &self.active.rendered(),
            &self.archive.rendered(),
        )
    }
}
