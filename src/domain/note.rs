// src/domain/note.rs
use crate::domain::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned note identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(pub i64);

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Creation time as sent by the server: epoch milliseconds or an ISO-8601 string.
/// Anything else is kept as raw JSON so one odd note cannot break the list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Millis(i64),
    Fractional(f64),
    Text(String),
    Other(serde_json::Value),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
}

/// Request body for create and update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

impl NoteDraft {
    /// Trim both fields and reject a blank title
    pub fn validated(title: &str, content: &str) -> Result<Self, ValidationError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        Ok(Self {
            title: title.to_string(),
            content: content.trim().to_string(),
        })
    }
}

/// Body of the list response; the server adds fields we don't need
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotesEnvelope {
    #[serde(default)]
    pub notes: Vec<Note>,
}
