// src/util/testing.rs

use anyhow::Result;
use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::NotesApi;
use crate::domain::{DomainError, Note, NoteDraft, NoteId, Timestamp};

const MOCK_CREATED_AT: i64 = 1700000000000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiOperation {
    List,
    Create,
    Update,
    Delete,
}

#[derive(Debug, Clone, Copy)]
pub enum Failure {
    Status(u16),
    Transport,
}

impl Failure {
    fn to_error(self) -> DomainError {
        match self {
            Failure::Status(code) => DomainError::UnexpectedStatus(code),
            Failure::Transport => DomainError::Transport("connection refused".to_string()),
        }
    }
}

/// A request as the mock received it
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    List,
    Create(NoteDraft),
    Update(NoteId, NoteDraft),
    Delete(NoteId),
}

/// In-memory NotesApi that behaves like a tiny server
///
/// Records every call and can be told to fail selected operations.
///
/// # Examples
///
/// ```
/// use notesview::util::testing::{ApiOperation, Failure, MockNotesApi};
/// use notesview::domain::{Note, NoteId};
///
/// let mock = MockNotesApi::builder()
///     .with_note(Note {
///         id: NoteId(1),
///         title: "A".to_string(),
///         content: "x".to_string(),
///         created_at: None,
///     })
///     .with_failure(ApiOperation::Update, Failure::Status(500))
///     .build();
/// assert!(mock.calls().is_empty());
/// ```
pub struct MockNotesApi {
    notes: RefCell<Vec<Note>>,
    next_id: Cell<i64>,
    failures: HashMap<ApiOperation, Failure>,
    calls: RefCell<Vec<ApiCall>>,
}

impl MockNotesApi {
    pub fn builder() -> MockNotesApiBuilder {
        MockNotesApiBuilder::new()
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.borrow().clone()
    }

    pub fn notes(&self) -> Vec<Note> {
        self.notes.borrow().clone()
    }

    fn record(&self, call: ApiCall, operation: ApiOperation) -> Result<(), DomainError> {
        self.calls.borrow_mut().push(call);
        match self.failures.get(&operation) {
            Some(failure) => Err(failure.to_error()),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl NotesApi for MockNotesApi {
    async fn list_notes(&self) -> Result<Vec<Note>, DomainError> {
        self.record(ApiCall::List, ApiOperation::List)?;
        Ok(self.notes())
    }

    async fn create_note(&self, draft: &NoteDraft) -> Result<(), DomainError> {
        self.record(ApiCall::Create(draft.clone()), ApiOperation::Create)?;
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.notes.borrow_mut().push(Note {
            id: NoteId(id),
            title: draft.title.clone(),
            content: draft.content.clone(),
            created_at: Some(Timestamp::Millis(MOCK_CREATED_AT)),
        });
        Ok(())
    }

    async fn update_note(&self, id: NoteId, draft: &NoteDraft) -> Result<(), DomainError> {
        self.record(ApiCall::Update(id, draft.clone()), ApiOperation::Update)?;
        let mut notes = self.notes.borrow_mut();
        let note = notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(DomainError::UnexpectedStatus(404))?;
        note.title = draft.title.clone();
        note.content = draft.content.clone();
        Ok(())
    }

    async fn delete_note(&self, id: NoteId) -> Result<(), DomainError> {
        self.record(ApiCall::Delete(id), ApiOperation::Delete)?;
        let mut notes = self.notes.borrow_mut();
        let before = notes.len();
        notes.retain(|n| n.id != id);
        if notes.len() == before {
            return Err(DomainError::UnexpectedStatus(404));
        }
        Ok(())
    }

    fn logout_url(&self) -> String {
        "http://notes.test/api/logout".to_string()
    }
}

/// Builder for MockNotesApi
pub struct MockNotesApiBuilder {
    notes: Vec<Note>,
    failures: HashMap<ApiOperation, Failure>,
}

impl MockNotesApiBuilder {
    pub fn new() -> Self {
        Self {
            notes: Vec::new(),
            failures: HashMap::new(),
        }
    }

    /// Seed a stored note; list order follows insertion order
    pub fn with_note(mut self, note: Note) -> Self {
        self.notes.push(note);
        self
    }

    /// Make every call of `operation` fail
    pub fn with_failure(mut self, operation: ApiOperation, failure: Failure) -> Self {
        self.failures.insert(operation, failure);
        self
    }

    pub fn build(self) -> MockNotesApi {
        let next_id = self.notes.iter().map(|n| n.id.0).max().unwrap_or(0) + 1;
        MockNotesApi {
            notes: RefCell::new(self.notes),
            next_id: Cell::new(next_id),
            failures: self.failures,
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl Default for MockNotesApiBuilder {
    fn default() -> Self {
        Self::new()
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

    let noisy_modules = ["hyper", "hyper_util", "reqwest", "rustls", "mio", "h2"];
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

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: i64, title: &str) -> Note {
        Note {
            id: NoteId(id),
            title: title.to_string(),
            content: String::new(),
            created_at: None,
        }
    }

    fn draft(title: &str) -> NoteDraft {
        NoteDraft {
            title: title.to_string(),
            content: String::new(),
        }
    }

    #[tokio::test]
    async fn given_seeded_notes_when_listing_then_returns_them_in_order() {
        let mock = MockNotesApi::builder()
            .with_note(note(2, "B"))
            .with_note(note(1, "A"))
            .build();

        let notes = mock.list_notes().await.expect("List should succeed");

        assert_eq!(notes, vec![note(2, "B"), note(1, "A")]);
        assert_eq!(mock.calls(), vec![ApiCall::List]);
    }

    #[tokio::test]
    async fn given_seeded_notes_when_creating_then_assigns_next_id() {
        let mock = MockNotesApi::builder().with_note(note(7, "A")).build();

        mock.create_note(&draft("B")).await.expect("Create should succeed");

        let notes = mock.notes();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[1].id, NoteId(8));
        assert!(notes[1].created_at.is_some());
    }

    #[tokio::test]
    async fn given_configured_failure_when_calling_then_records_and_fails() {
        let mock = MockNotesApi::builder()
            .with_note(note(1, "A"))
            .with_failure(ApiOperation::Delete, Failure::Status(403))
            .build();

        let result = mock.delete_note(NoteId(1)).await;

        assert!(matches!(result, Err(DomainError::UnexpectedStatus(403))));
        assert_eq!(mock.calls(), vec![ApiCall::Delete(NoteId(1))]);
        assert_eq!(mock.notes().len(), 1);
    }

    #[tokio::test]
    async fn given_unknown_id_when_updating_then_returns_not_found_status() {
        let mock = MockNotesApi::builder().build();

        let result = mock.update_note(NoteId(9), &draft("X")).await;

        assert!(matches!(result, Err(DomainError::UnexpectedStatus(404))));
    }
}
