// src/infrastructure/board.rs
//
// Retained in-memory display. The client mutates it through the view
// traits; presenters turn snapshots of it into text or HTML.
use crate::application::{
    DialogKind, Dialogs, InputField, LoadingIndicator, Modal, ModalFields, NoteCard, NotesView,
};
use std::cell::RefCell;
use tracing::{debug, trace};

/// Contents of the new-note form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteInputs {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardSnapshot {
    pub loading: bool,
    /// How many times the loader was switched on
    pub loader_shown: usize,
    pub cards: Vec<NoteCard>,
    pub empty_message: Option<String>,
    pub alerts: Vec<String>,
    pub focus: Option<InputField>,
    pub inputs: NoteInputs,
    pub navigation: Option<String>,
}

#[derive(Debug, Default)]
pub struct Board {
    state: RefCell<BoardSnapshot>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill the new-note form, as a user typing would
    pub fn set_inputs(&self, title: &str, content: &str) {
        self.state.borrow_mut().inputs = NoteInputs {
            title: title.to_string(),
            content: content.to_string(),
        };
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        self.state.borrow().clone()
    }
}

impl LoadingIndicator for Board {
    fn show_loader(&self) {
        let mut state = self.state.borrow_mut();
        state.loading = true;
        state.loader_shown += 1;
        trace!("Loader shown");
    }

    fn hide_loader(&self) {
        self.state.borrow_mut().loading = false;
        trace!("Loader hidden");
    }
}

impl NotesView for Board {
    fn clear(&self) {
        let mut state = self.state.borrow_mut();
        state.cards.clear();
        state.empty_message = None;
    }

    fn show_empty(&self, message: &str) {
        self.state.borrow_mut().empty_message = Some(message.to_string());
    }

    fn add_card(&self, card: NoteCard) {
        self.state.borrow_mut().cards.push(card);
    }

    fn alert(&self, message: &str) {
        debug!(%message, "Alert");
        self.state.borrow_mut().alerts.push(message.to_string());
    }

    fn focus(&self, field: InputField) {
        self.state.borrow_mut().focus = Some(field);
    }

    fn clear_inputs(&self) {
        self.state.borrow_mut().inputs = NoteInputs::default();
    }

    fn navigate(&self, url: &str) {
        self.state.borrow_mut().navigation = Some(url.to_string());
    }
}

/// A dialog that is either closed or open with its fields
#[derive(Debug)]
pub struct Dialog {
    kind: DialogKind,
    fields: RefCell<Option<ModalFields>>,
}

impl Dialog {
    pub fn new(kind: DialogKind) -> Self {
        Self {
            kind,
            fields: RefCell::new(None),
        }
    }

    pub fn is_open(&self) -> bool {
        self.fields.borrow().is_some()
    }

    pub fn fields(&self) -> Option<ModalFields> {
        self.fields.borrow().clone()
    }
}

impl Modal for Dialog {
    fn open(&self, fields: ModalFields) {
        debug!(kind = ?self.kind, "Opening dialog");
        *self.fields.borrow_mut() = Some(fields);
    }

    fn close(&self) {
        debug!(kind = ?self.kind, "Closing dialog");
        *self.fields.borrow_mut() = None;
    }
}

impl Dialogs<Dialog> {
    pub fn standard() -> Self {
        Self {
            view: Dialog::new(DialogKind::View),
            edit: Dialog::new(DialogKind::Edit),
            delete: Dialog::new(DialogKind::DeleteConfirm),
        }
    }

    /// Fields of the first open dialog, if any
    pub fn open_fields(&self) -> Option<ModalFields> {
        self.view
            .fields()
            .or_else(|| self.edit.fields())
            .or_else(|| self.delete.fields())
    }
}
