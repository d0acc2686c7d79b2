// src/application/ui.rs
//
// Capabilities the client needs from whatever displays the notes.
// Every method takes `&self`: the UI is single-threaded and operations
// may interleave while one of them waits on the network.
use crate::application::UiEvent;
use crate::domain::{Note, NoteId};

pub trait LoadingIndicator {
    fn show_loader(&self);
    fn hide_loader(&self);
}

/// Shows the indicator for as long as the guard lives
#[must_use = "the loader is hidden as soon as the guard is dropped"]
pub struct Loading<'a, L: LoadingIndicator + ?Sized> {
    indicator: &'a L,
}

impl<'a, L: LoadingIndicator + ?Sized> Loading<'a, L> {
    pub fn show(indicator: &'a L) -> Self {
        indicator.show_loader();
        Self { indicator }
    }
}

impl<L: LoadingIndicator + ?Sized> Drop for Loading<'_, L> {
    fn drop(&mut self) {
        self.indicator.hide_loader();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    NewTitle,
    NewContent,
    EditTitle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    View,
    Edit,
    Delete,
}

impl CardAction {
    pub const ALL: [CardAction; 3] = [CardAction::View, CardAction::Edit, CardAction::Delete];

    /// The event fired when this trigger is clicked on the card for `note`
    pub fn event(self, note: &Note) -> UiEvent {
        match self {
            CardAction::View => UiEvent::OpenView(note.clone()),
            CardAction::Edit => UiEvent::OpenEdit(note.clone()),
            CardAction::Delete => UiEvent::OpenDelete(note.id),
        }
    }
}

/// One rendered note
#[derive(Debug, Clone, PartialEq)]
pub struct NoteCard {
    pub note: Note,
    /// Title shortened to fit the card
    pub title: String,
    /// Full title, shown on hover
    pub tooltip: String,
    /// Localized "created" line, prefix included
    pub created: String,
    pub actions: [CardAction; 3],
}

pub trait NotesView: LoadingIndicator {
    /// Drop every card and the empty-state message
    fn clear(&self);
    fn show_empty(&self, message: &str);
    fn add_card(&self, card: NoteCard);
    fn alert(&self, message: &str);
    fn focus(&self, field: InputField);
    /// Reset the new-note form
    fn clear_inputs(&self);
    fn navigate(&self, url: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogKind {
    View,
    Edit,
    DeleteConfirm,
}

/// What a dialog shows while open
#[derive(Debug, Clone, PartialEq)]
pub enum ModalFields {
    View {
        title: String,
        content: String,
        created: String,
    },
    Edit {
        id: NoteId,
        title: String,
        content: String,
    },
    DeleteConfirm {
        id: NoteId,
    },
}

impl ModalFields {
    pub fn kind(&self) -> DialogKind {
        match self {
            ModalFields::View { .. } => DialogKind::View,
            ModalFields::Edit { .. } => DialogKind::Edit,
            ModalFields::DeleteConfirm { .. } => DialogKind::DeleteConfirm,
        }
    }
}

pub trait Modal {
    fn open(&self, fields: ModalFields);
    fn close(&self);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct FlagIndicator {
        visible: Cell<bool>,
    }

    impl LoadingIndicator for FlagIndicator {
        fn show_loader(&self) {
            self.visible.set(true);
        }

        fn hide_loader(&self) {
            self.visible.set(false);
        }
    }

    #[test]
    fn given_guard_when_dropped_then_hides_loader() {
        let indicator = FlagIndicator::default();

        {
            let _loading = Loading::show(&indicator);
            assert!(indicator.visible.get());
        }

        assert!(!indicator.visible.get());
    }

    #[test]
    fn given_early_return_when_guard_in_scope_then_still_hides_loader() {
        fn failing(indicator: &FlagIndicator) -> Result<(), &'static str> {
            let _loading = Loading::show(indicator);
            Err("boom")
        }
        let indicator = FlagIndicator::default();

        let result = failing(&indicator);

        assert!(result.is_err());
        assert!(!indicator.visible.get());
    }

    #[test]
    fn given_card_actions_when_triggered_then_map_to_dialog_events() {
        let note = Note {
            id: NoteId(5),
            title: "T".to_string(),
            content: "C".to_string(),
            created_at: None,
        };

        assert_eq!(CardAction::View.event(&note), UiEvent::OpenView(note.clone()));
        assert_eq!(CardAction::Edit.event(&note), UiEvent::OpenEdit(note.clone()));
        assert_eq!(CardAction::Delete.event(&note), UiEvent::OpenDelete(NoteId(5)));
    }

    #[test]
    fn given_modal_fields_then_report_their_dialog() {
        assert_eq!(
            ModalFields::DeleteConfirm { id: NoteId(1) }.kind(),
            DialogKind::DeleteConfirm
        );
    }
}
