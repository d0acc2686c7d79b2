// src/application/event.rs
use crate::application::DialogKind;
use crate::domain::{Note, NoteId};

/// Every user action the client reacts to
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    Refresh,
    AddNote { title: String, content: String },
    OpenView(Note),
    OpenEdit(Note),
    OpenDelete(NoteId),
    SaveEdit { id: NoteId, title: String, content: String },
    ConfirmDelete(NoteId),
    Dismiss(DialogKind),
    Logout,
}
