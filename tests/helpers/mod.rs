use anyhow::Result;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, put};
use axum::{Json, Router};
use notesview::domain::{Note, NoteDraft, NoteId, Timestamp};
use serde_json::{json, Value};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;

pub const CREATED_AT: i64 = 1700000000000;

/// Routes of the fake server that can be told to fail
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    List,
    Create,
    Update,
    Delete,
}

#[derive(Default)]
struct FakeState {
    notes: Vec<Note>,
    next_id: i64,
    failing: HashSet<Route>,
    requests: Vec<String>,
    cookies: Vec<Option<String>>,
}

impl FakeState {
    fn record(&mut self, request: String, headers: &HeaderMap) {
        self.requests.push(request);
        self.cookies.push(
            headers
                .get("cookie")
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
        );
    }
}

type Shared = Arc<Mutex<FakeState>>;

/// In-process NotesAPI bound to a random local port
#[allow(dead_code)]
pub struct FakeNotesServer {
    pub base_url: String,
    state: Shared,
    handle: JoinHandle<()>,
}

#[allow(dead_code)]
impl FakeNotesServer {
    pub async fn start(notes: Vec<Note>) -> Result<Self> {
        let next_id = notes.iter().map(|n| n.id.0).max().unwrap_or(0) + 1;
        let state: Shared = Arc::new(Mutex::new(FakeState {
            notes,
            next_id,
            ..Default::default()
        }));

        let app = Router::new()
            .route("/api/notes", get(list_notes).post(create_note))
            .route("/api/notes/:id", put(update_note).delete(delete_note))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self {
            base_url: format!("http://{addr}"),
            state,
            handle,
        })
    }

    pub fn fail(&self, route: Route) {
        self.state.lock().unwrap().failing.insert(route);
    }

    /// "METHOD path" of every request received, in order
    pub fn requests(&self) -> Vec<String> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn cookies(&self) -> Vec<Option<String>> {
        self.state.lock().unwrap().cookies.clone()
    }

    pub fn notes(&self) -> Vec<Note> {
        self.state.lock().unwrap().notes.clone()
    }
}

impl Drop for FakeNotesServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub fn note(id: i64, title: &str, content: &str) -> Note {
    Note {
        id: NoteId(id),
        title: title.to_string(),
        content: content.to_string(),
        created_at: Some(Timestamp::Millis(CREATED_AT)),
    }
}

async fn list_notes(
    State(state): State<Shared>,
    headers: HeaderMap,
) -> Result<Json<Value>, StatusCode> {
    let mut state = state.lock().unwrap();
    state.record("GET /api/notes".to_string(), &headers);
    if state.failing.contains(&Route::List) {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    Ok(Json(json!({ "status": "ok", "notes": state.notes })))
}

async fn create_note(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(draft): Json<NoteDraft>,
) -> Result<Json<Value>, StatusCode> {
    let mut state = state.lock().unwrap();
    state.record("POST /api/notes".to_string(), &headers);
    if state.failing.contains(&Route::Create) {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    let id = state.next_id;
    state.next_id += 1;
    let note = Note {
        id: NoteId(id),
        title: draft.title,
        content: draft.content,
        created_at: Some(Timestamp::Millis(CREATED_AT)),
    };
    state.notes.push(note.clone());
    Ok(Json(json!({ "status": "ok", "message": "Note added successfully", "note": note })))
}

async fn update_note(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(draft): Json<NoteDraft>,
) -> Result<Json<Value>, StatusCode> {
    let mut state = state.lock().unwrap();
    state.record(format!("PUT /api/notes/{id}"), &headers);
    if state.failing.contains(&Route::Update) {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    let note = state
        .notes
        .iter_mut()
        .find(|n| n.id == NoteId(id))
        .ok_or(StatusCode::NOT_FOUND)?;
    note.title = draft.title;
    note.content = draft.content;
    Ok(Json(json!({ "status": "ok", "note": note.clone() })))
}

async fn delete_note(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Json<Value>, StatusCode> {
    let mut state = state.lock().unwrap();
    state.record(format!("DELETE /api/notes/{id}"), &headers);
    if state.failing.contains(&Route::Delete) {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    let before = state.notes.len();
    state.notes.retain(|n| n.id != NoteId(id));
    if state.notes.len() == before {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(json!({ "status": "ok" })))
}
