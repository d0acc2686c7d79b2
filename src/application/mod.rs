// src/application/mod.rs
pub mod event;
pub mod notes_api;
pub mod notes_client;
pub mod ui;

pub use event::UiEvent;
pub use notes_api::NotesApi;
pub use notes_client::{ClientSettings, Dialogs, NotesClient};
pub use ui::{
    CardAction, DialogKind, InputField, Loading, LoadingIndicator, Modal, ModalFields, NoteCard,
    NotesView,
};
