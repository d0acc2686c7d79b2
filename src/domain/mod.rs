// src/domain/mod.rs
pub mod date;
pub mod error;
pub mod locale;
pub mod note;

pub use date::DateFormatter;
pub use error::{DomainError, ValidationError};
pub use locale::{Locale, Messages};
pub use note::{Note, NoteDraft, NoteId, NotesEnvelope, Timestamp};
