// src/util/testing.rs

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::env;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::Semaphore;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{NotesService, ServiceError};
use crate::domain::{Note, NoteDraft, NoteId};
use crate::ports::Alert;

/// A call received by [`MockNotesService`], in the shape of the HTTP request it stands for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ServiceCall {
    ListNotes,
    ListArchived,
    Create { title: String, body: String },
    Archive(NoteId),
    Unarchive(NoteId),
    Delete(NoteId),
}

/// Active note with the given fields.
pub fn note(id: &str, title: &str, body: &str) -> Note {
    Note {
        id: NoteId::new(id),
        title: title.to_string(),
        body: body.to_string(),
        archived: false,
        created_at: "2022-07-28T10:03:12.594Z".to_string(),
    }
}

/// Archived note with the given fields.
pub fn archived_note(id: &str, title: &str, body: &str) -> Note {
    Note {
        archived: true,
        ..note(id, title, body)
    }
}

#[derive(Default)]
struct MockState {
    active: Vec<Note>,
    archived: Vec<Note>,
    calls: Vec<ServiceCall>,
    created: usize,
}

/// In-memory notes service for testing the lists without a network.
///
/// Notes move between the active and archived collections the way the real
/// service moves them. Calls are logged in arrival order, individual calls
/// can be scripted to fail, and calls can be held on a gate until a test
/// releases them.
///
/// # Examples
///
/// ```
/// use notedeck::util::testing::{note, MockNotesService, ServiceCall};
/// use notedeck::application::ServiceError;
/// use notedeck::domain::NoteId;
///
/// let mock = MockNotesService::builder()
///     .with_note(note("n1", "Question", "Answer"))
///     .with_failure(
///         ServiceCall::Delete(NoteId::new("n1")),
///         ServiceError::Transport("offline".to_string()),
///     )
///     .build();
/// assert_eq!(mock.active_notes().len(), 1);
/// ```
pub struct MockNotesService {
    state: Mutex<MockState>,
    failures: Mutex<HashMap<ServiceCall, ServiceError>>,
    gates: HashMap<ServiceCall, Arc<Semaphore>>,
}

impl MockNotesService {
    pub fn builder() -> MockNotesServiceBuilder {
        MockNotesServiceBuilder::new()
    }

    pub fn calls(&self) -> Vec<ServiceCall> {
        self.lock().calls.clone()
    }

    pub fn active_notes(&self) -> Vec<Note> {
        self.lock().active.clone()
    }

    pub fn archived_notes(&self) -> Vec<Note> {
        self.lock().archived.clone()
    }

    /// Make every later matching call fail with `error`
    pub fn fail(&self, call: ServiceCall, error: ServiceError) {
        self.failures
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(call, error);
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        // A panicking test may poison the lock; the data is still usable.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Log the call, wait on its gate if any, then return its scripted failure.
    async fn enter(&self, call: ServiceCall) -> Result<(), ServiceError> {
        debug!(?call, "Mock service call");
        self.lock().calls.push(call.clone());
        if let Some(gate) = self.gates.get(&call) {
            if let Ok(permit) = gate.acquire().await {
                permit.forget();
            }
        }
        let failures = self.failures.lock().unwrap_or_else(|e| e.into_inner());
        match failures.get(&call) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

fn not_found() -> ServiceError {
    ServiceError::Status {
        status: 404,
        reason: "Not Found".to_string(),
        message: Some("Catatan tidak ditemukan".to_string()),
    }
}

fn take(notes: &mut Vec<Note>, id: &NoteId) -> Option<Note> {
    let index = notes.iter().position(|n| &n.id == id)?;
    Some(notes.remove(index))
}

#[async_trait]
impl NotesService for MockNotesService {
    async fn list_notes(&self) -> Result<Vec<Note>, ServiceError> {
        self.enter(ServiceCall::ListNotes).await?;
        Ok(self.lock().active.clone())
    }

    async fn list_archived_notes(&self) -> Result<Vec<Note>, ServiceError> {
        self.enter(ServiceCall::ListArchived).await?;
        Ok(self.lock().archived.clone())
    }

    async fn create_note(&self, draft: &NoteDraft) -> Result<(), ServiceError> {
        self.enter(ServiceCall::Create {
            title: draft.title().to_string(),
            body: draft.body().to_string(),
        })
        .await?;
        let mut state = self.lock();
        state.created += 1;
        let id = format!("notes-{}", state.created);
        state.active.push(note(&id, draft.title(), draft.body()));
        Ok(())
    }

    async fn archive_note(&self, id: &NoteId) -> Result<(), ServiceError> {
        self.enter(ServiceCall::Archive(id.clone())).await?;
        let mut state = self.lock();
        let mut moved = take(&mut state.active, id).ok_or_else(not_found)?;
        moved.archived = true;
        state.archived.push(moved);
        Ok(())
    }

    async fn unarchive_note(&self, id: &NoteId) -> Result<(), ServiceError> {
        self.enter(ServiceCall::Unarchive(id.clone())).await?;
        let mut state = self.lock();
        let mut moved = take(&mut state.archived, id).ok_or_else(not_found)?;
        moved.archived = false;
        state.active.push(moved);
        Ok(())
    }

    async fn delete_note(&self, id: &NoteId) -> Result<(), ServiceError> {
        self.enter(ServiceCall::Delete(id.clone())).await?;
        let mut state = self.lock();
        let removed = take(&mut state.active, id).or_else(|| take(&mut state.archived, id));
        removed.map(|_| ()).ok_or_else(not_found)
    }
}

/// Builder for MockNotesService
///
/// Provides a fluent interface for configuring mock behavior.
pub struct MockNotesServiceBuilder {
    notes: Vec<Note>,
    failures: HashMap<ServiceCall, ServiceError>,
    gates: HashMap<ServiceCall, Arc<Semaphore>>,
}

impl MockNotesServiceBuilder {
    pub fn new() -> Self {
        Self {
            notes: Vec::new(),
            failures: HashMap::new(),
            gates: HashMap::new(),
        }
    }

    /// Seed a note; its `archived` flag decides which collection it lands in
    pub fn with_note(mut self, note: Note) -> Self {
        self.notes.push(note);
        self
    }

    /// Make every matching call fail with `error`
    pub fn with_failure(mut self, call: ServiceCall, error: ServiceError) -> Self {
        self.failures.insert(call, error);
        self
    }

    /// Hold every matching call until a permit is added to `gate`
    pub fn with_gate(mut self, call: ServiceCall, gate: Arc<Semaphore>) -> Self {
        self.gates.insert(call, gate);
        self
    }

    pub fn build(self) -> MockNotesService {
        let (archived, active): (Vec<Note>, Vec<Note>) =
            self.notes.into_iter().partition(|n| n.archived);
        MockNotesService {
            state: Mutex::new(MockState {
                active,
                archived,
                ..MockState::default()
            }),
            failures: Mutex::new(self.failures),
            gates: self.gates,
        }
    }
}

impl Default for MockNotesServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Alert sink that keeps every message for later assertions.
#[derive(Debug, Default)]
pub struct RecordingAlert {
    messages: Mutex<Vec<String>>,
}

impl RecordingAlert {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl Alert for RecordingAlert {
    fn alert(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(message.to_string());
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["hyper", "reqwest", "mio", "rustls"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
