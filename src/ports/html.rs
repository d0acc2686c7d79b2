// src/ports/html.rs
use crate::application::{CardAction, ModalFields, NoteCard};
use crate::domain::{Locale, Messages};
use crate::infrastructure::BoardSnapshot;
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::Write;
use tracing::instrument;

/// Renders a board as a standalone page
#[derive(Debug)]
pub struct HtmlPresenter {
    locale: Locale,
    messages: &'static Messages,
}

impl HtmlPresenter {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            messages: locale.messages(),
        }
    }

    fn action_label(&self, action: CardAction) -> &'static str {
        match action {
            CardAction::View => self.messages.view_label,
            CardAction::Edit => self.messages.edit_label,
            CardAction::Delete => self.messages.delete_label,
        }
    }

    fn render_card(&self, card: &NoteCard) -> String {
        let mut actions = String::new();
        for action in card.actions {
            let class = match action {
                CardAction::View => "view-btn",
                CardAction::Edit => "edit-btn",
                CardAction::Delete => "delete-btn",
            };
            let _ = write!(
                actions,
                r#"<span class="btn {class}" title="{label}">{label}</span>"#,
                label = encode_double_quoted_attribute(self.action_label(action)),
            );
        }

        format!(
            r#"        <div class="card note" data-id="{id}">
            <div class="card-body">
                <h5 class="note-title" title="{tooltip}">{title}</h5>
                <p class="note-description">{content}</p>
                <small class="note-date">{created}</small>
            </div>
            <div class="note-actions">{actions}</div>
        </div>
"#,
            id = card.note.id,
            tooltip = encode_double_quoted_attribute(&card.tooltip),
            title = encode_text(&card.title),
            content = encode_text(&card.note.content),
            created = encode_text(&card.created),
        )
    }

    fn render_dialog(&self, fields: &ModalFields) -> String {
        let body = match fields {
            ModalFields::View {
                title,
                content,
                created,
            } => format!(
                r#"<h5 id="viewNoteTitle">{}</h5><p id="viewNoteDescription">{}</p><small id="viewNoteDate">{}</small>"#,
                encode_text(title),
                encode_text(content),
                encode_text(created),
            ),
            ModalFields::Edit { id, title, content } => format!(
                r#"<input type="hidden" id="edit-note-id" value="{id}"><input id="edit-note-title" value="{}"><textarea id="edit-note-description">{}</textarea>"#,
                encode_double_quoted_attribute(title),
                encode_text(content),
            ),
            ModalFields::DeleteConfirm { id } => format!(
                r#"<input type="hidden" id="delete-note-id" value="{id}"><p>{}</p>"#,
                encode_text(self.messages.delete_confirm),
            ),
        };
        format!("    <div class=\"modal open\">{body}</div>\n")
    }

    #[instrument(level = "debug", skip_all, fields(cards = board.cards.len()))]
    pub fn render(&self, board: &BoardSnapshot, dialog: Option<&ModalFields>) -> String {
        let alerts: String = board
            .alerts
            .iter()
            .map(|alert| format!("    <div class=\"alert\">{}</div>\n", encode_text(alert)))
            .collect();

        let notes = if board.cards.is_empty() {
            format!(
                "        <p class=\"empty-notes-message\">{}</p>\n",
                encode_text(board.empty_message.as_deref().unwrap_or(self.messages.empty_notes))
            )
        } else {
            board.cards.iter().map(|card| self.render_card(card)).collect()
        };

        let dialog = dialog.map(|d| self.render_dialog(d)).unwrap_or_default();

        format!(
            r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
    <meta charset="UTF-8">
    <title>{page_title}</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            line-height: 1.6;
            max-width: 960px;
            margin: 2rem auto;
            padding: 0 1rem;
            background-color: #f5f5f5;
        }}
        #notes-list {{
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
            gap: 1rem;
        }}
        .card {{
            background: white;
            border-radius: 8px;
            padding: 1rem;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }}
        .note-title {{
            white-space: nowrap;
            overflow: hidden;
            text-overflow: ellipsis;
        }}
        .note-date {{
            color: #666;
        }}
        .btn {{
            display: inline-block;
            background: #e9ecef;
            padding: 2px 8px;
            border-radius: 4px;
            margin-right: 4px;
            font-size: 0.8em;
        }}
        .alert {{
            background: #f8d7da;
            padding: 0.5rem 1rem;
            border-radius: 4px;
            margin-bottom: 1rem;
        }}
        .modal {{
            margin-top: 2rem;
            background: white;
            border: 1px solid #ccc;
            border-radius: 8px;
            padding: 1rem;
        }}
    </style>
</head>
<body>
    <h1>{page_title}</h1>
{alerts}    <div id="notes-list">
{notes}    </div>
{dialog}</body>
</html>"#,
            lang = self.locale,
            page_title = encode_text(self.messages.page_title),
        )
    }
}
