// src/application/notes_api.rs
use crate::domain::{DomainError, Note, NoteDraft, NoteId};
use async_trait::async_trait;

/// Server-side CRUD over notes. Any failure, including a non-success
/// status, comes back as a `DomainError`.
#[async_trait(?Send)]
pub trait NotesApi {
    async fn list_notes(&self) -> Result<Vec<Note>, DomainError>;

    async fn create_note(&self, draft: &NoteDraft) -> Result<(), DomainError>;

    async fn update_note(&self, id: NoteId, draft: &NoteDraft) -> Result<(), DomainError>;

    async fn delete_note(&self, id: NoteId) -> Result<(), DomainError>;

    /// Where the browser goes to end the session
    fn logout_url(&self) -> String;
}
