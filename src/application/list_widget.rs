// src/application/list_widget.rs
use std::future::Future;
use std::sync::Arc;
use tokio::sync::{watch, Mutex};
use tracing::{debug, warn};

use crate::application::{ListError, NotesService, Operation, ServiceError};
use crate::domain::{ListKind, ListState};
use crate::ports::{Alert, ButtonBinding, HtmlPresenter, RenderedList};

/// State of a list together with the markup last rendered from it.
#[derive(Debug, Clone, Default)]
pub struct ListSnapshot {
    pub state: ListState,
    pub rendered: RenderedList,
}

/// Machinery shared by the active and the archive list.
///
/// Operations are serialized through `queue`; state and markup live in a
/// watch channel so readers never wait on an operation in flight.
pub(crate) struct ListWidget {
    kind: ListKind,
    service: Arc<dyn NotesService>,
    alert: Arc<dyn Alert>,
    presenter: HtmlPresenter,
    queue: Mutex<()>,
    view: watch::Sender<ListSnapshot>,
}

impl ListWidget {
    pub(crate) fn new(
        kind: ListKind,
        service: Arc<dyn NotesService>,
        alert: Arc<dyn Alert>,
    ) -> Self {
        let presenter = HtmlPresenter::new();
        let state = ListState::new();
        let rendered = presenter.render_list(kind, &state, 0);
        let (view, _) = watch::channel(ListSnapshot { state, rendered });
        Self {
            kind,
            service,
            alert,
            presenter,
            queue: Mutex::new(()),
            view,
        }
    }

    pub(crate) fn kind(&self) -> ListKind {
        self.kind
    }

    pub(crate) fn service(&self) -> &dyn NotesService {
        self.service.as_ref()
    }

    pub(crate) fn snapshot(&self) -> ListSnapshot {
        self.view.borrow().clone()
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<ListSnapshot> {
        self.view.subscribe()
    }

    /// Reject clicks on buttons that are not part of the current render.
    pub(crate) fn check_binding(&self, binding: &ButtonBinding) -> Result<(), ListError> {
        let view = self.view.borrow();
        let current = view.rendered.generation;
        if binding.generation != current || !view.rendered.bindings.contains(binding) {
            debug!(
                list = self.kind.name(),
                binding = binding.generation,
                current,
                "Rejecting stale button"
            );
            return Err(ListError::StaleBinding {
                binding: binding.generation,
                current,
            });
        }
        Ok(())
    }

    /// Run one operation inside the loading envelope.
    ///
    /// Waits for earlier operations on this list, enters `Loading`, runs
    /// `work`, then always settles to `Ready` or `Error`. Failures are
    /// alerted before being returned.
    pub(crate) async fn run<T>(
        &self,
        operation: Operation,
        work: impl Future<Output = Result<T, ServiceError>>,
    ) -> Result<T, ListError> {
        let _turn = self.queue.lock().await;
        debug!(list = self.kind.name(), %operation, "Operation started");
        self.update(ListState::begin_loading);

        let result = work.await.map_err(|source| ListError::Service {
            operation,
            source,
        });

        let failure = result.as_ref().err().map(ToString::to_string);
        self.update(|state| state.settle(failure.clone()));

        if let Some(message) = failure {
            warn!(list = self.kind.name(), %message, "Operation failed");
            self.alert.alert(&message);
        }
        result
    }

    /// Fetch this list's collection and replace the notes on success.
    ///
    /// Only meant to be awaited inside [`ListWidget::run`].
    pub(crate) async fn fetch(&self) -> Result<(), ServiceError> {
        let notes = match self.kind {
            ListKind::Active => self.service.list_notes().await?,
            ListKind::Archived => self.service.list_archived_notes().await?,
        };
        debug!(list = self.kind.name(), count = notes.len(), "Fetched notes");
        self.update(|state| state.replace_notes(notes));
        Ok(())
    }

    fn update(&self, change: impl FnOnce(&mut ListState)) {
        self.view.send_modify(|snapshot| {
            change(&mut snapshot.state);
            let generation = snapshot.rendered.generation + 1;
            snapshot.rendered = self
                .presenter
                .render_list(self.kind, &snapshot.state, generation);
        });
    }
}
