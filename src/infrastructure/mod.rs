// src/infrastructure/mod.rs
pub mod board;
pub mod config;
pub mod http;
pub mod renderer;

pub use board::{Board, BoardSnapshot, Dialog, NoteInputs};
pub use config::Config;
pub use http::HttpNotesApi;
