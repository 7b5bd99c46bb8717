// src/infrastructure/http.rs
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::application::{NotesService, ServiceError};
use crate::constants::API_PREFIX;
use crate::domain::{Note, NoteDraft, NoteId};
use crate::infrastructure::config::ServiceConfig;

/// Success payload of the list endpoints.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Failure payload; the service sends `{"status": "fail", "message": ...}`.
#[derive(Debug, Deserialize)]
struct FailureBody {
    message: Option<String>,
}

/// [`NotesService`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpNotesService {
    client: Client,
    base_url: String,
    /// `<base>/v2/notes`; single-note URLs extend it segment by segment.
    notes_url: Url,
}

impl HttpNotesService {
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        let notes_url = Url::parse(&format!("{base_url}{API_PREFIX}/notes"))
            .with_context(|| format!("Invalid notes service URL: {}", config.base_url))?;
        if notes_url.cannot_be_a_base() {
            bail!("Notes service URL cannot carry a path: {}", config.base_url);
        }

        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url,
            notes_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_PREFIX, path)
    }

    /// The id is pushed as one percent-encoded path segment.
    fn note_url(&self, id: &NoteId, action: Option<&str>) -> Url {
        let mut url = self.notes_url.clone();
        // `new` rejects cannot-be-a-base URLs, so segments are always available
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(id.as_str());
            if let Some(action) = action {
                segments.push(action);
            }
        }
        url
    }

    /// Send a request and turn transport failures and non-success statuses into errors.
    async fn send(&self, request: RequestBuilder) -> Result<Response, ServiceError> {
        let response = request
            .send()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;
        let status = response.status();
        debug!(%status, url = %response.url(), "Notes service responded");
        if status.is_success() {
            return Ok(response);
        }

        // The body is only used to enrich the error; an unreadable one is not fatal.
        let message = response
            .bytes()
            .await
            .ok()
            .and_then(|body| serde_json::from_slice::<FailureBody>(&body).ok())
            .and_then(|body| body.message);
        Err(ServiceError::Status {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            message,
        })
    }

    async fn fetch_list(&self, url: String) -> Result<Vec<Note>, ServiceError> {
        let response = self.send(self.client.get(url)).await?;
        let body = response
            .bytes()
            .await
            .map_err(|e| ServiceError::Transport(format!("read body failed: {e}")))?;
        let envelope: Envelope<Vec<Note>> =
            serde_json::from_slice(&body).map_err(|e| ServiceError::Decode(e.to_string()))?;
        Ok(envelope.data)
    }
}

#[async_trait]
impl NotesService for HttpNotesService {
    #[instrument(level = "debug", skip(self))]
    async fn list_notes(&self) -> Result<Vec<Note>, ServiceError> {
        self.fetch_list(self.url("/notes")).await
    }

    #[instrument(level = "debug", skip(self))]
    async fn list_archived_notes(&self) -> Result<Vec<Note>, ServiceError> {
        self.fetch_list(self.url("/notes/archived")).await
    }

    #[instrument(level = "debug", skip(self, draft), fields(title = draft.title()))]
    async fn create_note(&self, draft: &NoteDraft) -> Result<(), ServiceError> {
        self.send(self.client.post(self.url("/notes")).json(draft))
            .await
            .map(drop)
    }

    #[instrument(level = "debug", skip(self))]
    async fn archive_note(&self, id: &NoteId) -> Result<(), ServiceError> {
        self.send(self.client.post(self.note_url(id, Some("archive"))))
            .await
            .map(drop)
    }

    #[instrument(level = "debug", skip(self))]
    async fn unarchive_note(&self, id: &NoteId) -> Result<(), ServiceError> {
        self.send(self.client.post(self.note_url(id, Some("unarchive"))))
            .await
            .map(drop)
    }

    #[instrument(level = "debug", skip(self))]
    async fn delete_note(&self, id: &NoteId) -> Result<(), ServiceError> {
        self.send(self.client.delete(self.note_url(id, None)))
            .await
            .map(drop)
    }
}
