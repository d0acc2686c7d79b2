// src/ports/console.rs
use crate::application::ModalFields;
use crate::domain::{Locale, Messages};
use crate::infrastructure::BoardSnapshot;
use crate::util::text::single_line;
use std::fmt::Write;

/// Plain-text rendering of a board for the terminal
#[derive(Debug)]
pub struct ConsolePresenter {
    messages: &'static Messages,
}

impl ConsolePresenter {
    pub fn new(locale: Locale) -> Self {
        Self {
            messages: locale.messages(),
        }
    }

    pub fn render(&self, board: &BoardSnapshot, dialog: Option<&ModalFields>) -> String {
        let mut out = String::new();

        if let Some(fields) = dialog {
            self.render_dialog(&mut out, fields);
            return out;
        }

        if board.cards.is_empty() {
            let message = board.empty_message.as_deref().unwrap_or(self.messages.empty_notes);
            let _ = writeln!(out, "{message}");
            return out;
        }

        for card in &board.cards {
            let _ = writeln!(out, "[{}] {}", card.note.id, card.title);
            let content = single_line(&card.note.content);
            if !content.is_empty() {
                let _ = writeln!(out, "    {content}");
            }
            let _ = writeln!(out, "    {}", card.created);
        }
        out
    }

    /// One line per alert, for stderr
    pub fn render_alerts(&self, board: &BoardSnapshot) -> String {
        board.alerts.iter().map(|a| format!("{a}\n")).collect()
    }

    fn render_dialog(&self, out: &mut String, fields: &ModalFields) {
        match fields {
            ModalFields::View {
                title,
                content,
                created,
            } => {
                let _ = writeln!(out, "{title}\n\n{content}\n\n{created}");
            }
            ModalFields::Edit { id, title, content } => {
                let _ = writeln!(out, "[{id}] {title}\n{content}");
            }
            ModalFields::DeleteConfirm { id } => {
                let _ = writeln!(out, "[{id}] {}", self.messages.delete_confirm);
            }
        }
    }
}
