use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use notedeck::domain::{Note, NoteId};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// How a route misbehaves when scripted to.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub enum Fault {
    Status(u16, Option<&'static str>),
    Garbage,
}

#[derive(Default)]
struct FakeState {
    active: Vec<Note>,
    archived: Vec<Note>,
    requests: Vec<String>,
    faults: HashMap<String, Fault>,
    created: usize,
}

/// Notes service stand-in served by axum on an ephemeral port
#[derive(Clone, Default)]
pub struct FakeNotesService {
    state: Arc<Mutex<FakeState>>,
}

#[allow(dead_code)]
impl FakeNotesService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_note(self, id: &str, title: &str, body: &str, archived: bool) -> Self {
        let note = Note {
            id: NoteId::new(id),
            title: title.to_string(),
            body: body.to_string(),
            archived,
            created_at: "2022-07-28T10:03:12.594Z".to_string(),
        };
        {
            let mut state = self.lock();
            if archived {
                state.archived.push(note);
            } else {
                state.active.push(note);
            }
        }
        self
    }

    /// Script a fault for a request line such as `"GET /v2/notes"`
    pub fn with_fault(self, request: &str, fault: Fault) -> Self {
        self.lock().faults.insert(request.to_string(), fault);
        self
    }

    /// Request lines received so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.lock().requests.clone()
    }

    pub fn active_ids(&self) -> Vec<String> {
        self.lock().active.iter().map(|n| n.id.to_string()).collect()
    }

    pub fn archived_ids(&self) -> Vec<String> {
        self.lock().archived.iter().map(|n| n.id.to_string()).collect()
    }

    /// Serve on 127.0.0.1 and return the base URL
    pub async fn spawn(&self) -> String {
        let app = Router::new()
            .route("/v2/notes", get(list_active).post(create_note))
            .route("/v2/notes/archived", get(list_archived))
            .route("/v2/notes/:id", delete(delete_note))
            .route("/v2/notes/:id/archive", post(archive_note))
            .route("/v2/notes/:id/unarchive", post(unarchive_note))
            .with_state(self.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind listener");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });
        format!("http://{addr}")
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FakeState> {
        self.state.lock().expect("fake state lock")
    }

    /// Record the request and return the scripted fault response, if any
    fn enter(&self, request: String) -> Option<Response> {
        let mut state = self.lock();
        let fault = state.faults.get(&request).cloned();
        state.requests.push(request);
        fault.map(|fault| match fault {
            Fault::Status(code, message) => (
                StatusCode::from_u16(code).expect("valid status"),
                Json(json!({"status": "fail", "message": message})),
            )
                .into_response(),
            Fault::Garbage => (StatusCode::OK, "not json").into_response(),
        })
    }
}

fn success(message: &str, data: Value) -> Response {
    Json(json!({"status": "success", "message": message, "data": data})).into_response()
}

fn missing() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"status": "fail", "message": "Catatan tidak ditemukan"})),
    )
        .into_response()
}

async fn list_active(State(fake): State<FakeNotesService>) -> Response {
    if let Some(response) = fake.enter("GET /v2/notes".to_string()) {
        return response;
    }
    let notes = fake.lock().active.clone();
    success("Notes retrieved", json!(notes))
}

async fn list_archived(State(fake): State<FakeNotesService>) -> Response {
    if let Some(response) = fake.enter("GET /v2/notes/archived".to_string()) {
        return response;
    }
    let notes = fake.lock().archived.clone();
    success("Notes retrieved", json!(notes))
}

async fn create_note(State(fake): State<FakeNotesService>, Json(body): Json<Value>) -> Response {
    if let Some(response) = fake.enter("POST /v2/notes".to_string()) {
        return response;
    }
    let mut state = fake.lock();
    state.created += 1;
    let note = Note {
        id: NoteId::new(format!("notes-{}", state.created)),
        title: body["title"].as_str().unwrap_or_default().to_string(),
        body: body["body"].as_str().unwrap_or_default().to_string(),
        archived: false,
        created_at: "2022-07-28T10:03:12.594Z".to_string(),
    };
    state.active.push(note.clone());
    (StatusCode::CREATED, Json(json!({"status": "success", "data": note}))).into_response()
}

fn move_note(from: &mut Vec<Note>, to: &mut Vec<Note>, id: &str, archived: bool) -> bool {
    match from.iter().position(|n| n.id.as_str() == id) {
        Some(index) => {
            let mut note = from.remove(index);
            note.archived = archived;
            to.push(note);
            true
        }
        None => false,
    }
}

async fn archive_note(State(fake): State<FakeNotesService>, Path(id): Path<String>) -> Response {
    if let Some(response) = fake.enter(format!("POST /v2/notes/{id}/archive")) {
        return response;
    }
    let mut guard = fake.lock();
    let state = &mut *guard;
    if move_note(&mut state.active, &mut state.archived, &id, true) {
        success("Catatan berhasil diarsipkan", Value::Null)
    } else {
        missing()
    }
}

async fn unarchive_note(State(fake): State<FakeNotesService>, Path(id): Path<String>) -> Response {
    if let Some(response) = fake.enter(format!("POST /v2/notes/{id}/unarchive")) {
        return response;
    }
    let mut guard = fake.lock();
    let state = &mut *guard;
    if move_note(&mut state.archived, &mut state.active, &id, false) {
        success("Catatan berhasil dibatalkan arsip", Value::Null)
    } else {
        missing()
    }
}

async fn delete_note(State(fake): State<FakeNotesService>, Path(id): Path<String>) -> Response {
    if let Some(response) = fake.enter(format!("DELETE /v2/notes/{id}")) {
        return response;
    }
    let mut state = fake.lock();
    let before = state.active.len() + state.archived.len();
    state.active.retain(|n| n.id.as_str() != id);
    state.archived.retain(|n| n.id.as_str() != id);
    if state.active.len() + state.archived.len() < before {
        success("Catatan berhasil dihapus", Value::Null)
    } else {
        missing()
    }
}
