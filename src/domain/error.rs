// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Note title must not be empty")]
    EmptyTitle,
}

#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Server responded with status {0}")]
    UnexpectedStatus(u16),
}

impl DomainError {
    /// Network, decoding and non-success responses all count as transport failures
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::UnexpectedStatus(_))
    }
}
