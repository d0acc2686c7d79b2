// src/application/notes_client.rs
use crate::application::{
    CardAction, DialogKind, InputField, Loading, Modal, ModalFields, NoteCard, NotesApi, NotesView,
    UiEvent,
};
use crate::constants::DEFAULT_TITLE_WIDTH;
use crate::domain::{DateFormatter, DomainError, Locale, Messages, Note, NoteDraft, NoteId};
use crate::util::text::truncate_title;
use chrono::FixedOffset;
use tracing::{debug, error, info, instrument, warn};

/// The three dialogs, each opened and closed independently
#[derive(Debug)]
pub struct Dialogs<M: Modal> {
    pub view: M,
    pub edit: M,
    pub delete: M,
}

impl<M: Modal> Dialogs<M> {
    pub fn get(&self, kind: DialogKind) -> &M {
        match kind {
            DialogKind::View => &self.view,
            DialogKind::Edit => &self.edit,
            DialogKind::DeleteConfirm => &self.delete,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ClientSettings {
    pub locale: Locale,
    pub utc_offset: Option<FixedOffset>,
    pub title_width: usize,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            utc_offset: None,
            title_width: DEFAULT_TITLE_WIDTH,
        }
    }
}

/// Keeps the displayed notes in step with the server.
///
/// Nothing is cached: every successful mutation is followed by a full
/// reload, and the display is rebuilt from that response alone.
pub struct NotesClient<A: NotesApi, V: NotesView, M: Modal> {
    api: A,
    view: V,
    dialogs: Dialogs<M>,
    messages: &'static Messages,
    dates: DateFormatter,
    title_width: usize,
}

impl<A: NotesApi, V: NotesView, M: Modal> NotesClient<A, V, M> {
    pub fn new(api: A, view: V, dialogs: Dialogs<M>, settings: ClientSettings) -> Self {
        let dates = match settings.utc_offset {
            Some(offset) => DateFormatter::new(settings.locale, offset),
            None => DateFormatter::local(settings.locale),
        };
        Self {
            api,
            view,
            dialogs,
            messages: settings.locale.messages(),
            dates,
            title_width: settings.title_width,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn dialogs(&self) -> &Dialogs<M> {
        &self.dialogs
    }

    /// Initial load
    pub async fn start(&self) {
        info!("Loading notes");
        self.render().await;
    }

    /// Route a user action to its operation
    pub async fn dispatch(&self, event: UiEvent) -> Result<(), DomainError> {
        debug!(?event, "Dispatching");
        match event {
            UiEvent::Refresh => self.render().await,
            UiEvent::AddNote { title, content } => return self.create(&title, &content).await,
            UiEvent::OpenView(note) => self.open_view(&note),
            UiEvent::OpenEdit(note) => self.open_edit(&note),
            UiEvent::OpenDelete(id) => self.open_delete(id),
            UiEvent::SaveEdit { id, title, content } => {
                return self.update(id, &title, &content).await
            }
            UiEvent::ConfirmDelete(id) => return self.delete(id).await,
            UiEvent::Dismiss(kind) => self.dismiss(kind),
            UiEvent::Logout => self.logout(),
        }
        Ok(())
    }

    /// Fetch all notes in server order. Failures are logged and read as "no notes".
    #[instrument(level = "debug", skip(self))]
    pub async fn list(&self) -> Vec<Note> {
        let _loading = Loading::show(&self.view);
        match self.api.list_notes().await {
            Ok(notes) => {
                debug!(count = notes.len(), "Fetched notes");
                notes
            }
            Err(e) => {
                error!(error = %e, "Error fetching notes");
                Vec::new()
            }
        }
    }

    pub async fn render(&self) {
        let notes = self.list().await;
        self.view.clear();

        if notes.is_empty() {
            self.view.show_empty(self.messages.empty_notes);
            return;
        }

        for note in notes {
            let card = self.card(note);
            self.view.add_card(card);
        }
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn create(&self, title: &str, content: &str) -> Result<(), DomainError> {
        let draft = match NoteDraft::validated(title, content) {
            Ok(draft) => draft,
            Err(e) => {
                warn!(error = %e, "Rejected new note");
                self.view.alert(self.messages.title_required);
                self.view.focus(InputField::NewTitle);
                return Err(e.into());
            }
        };

        let _loading = Loading::show(&self.view);
        match self.api.create_note(&draft).await {
            Ok(()) => {
                info!(title = %draft.title, "Note added");
                self.view.clear_inputs();
                self.render().await;
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Error adding note");
                self.view.alert(self.messages.add_failed);
                Err(e)
            }
        }
    }

    /// The edit dialog closes whether or not the server accepted the change
    #[instrument(level = "debug", skip(self))]
    pub async fn update(&self, id: NoteId, title: &str, content: &str) -> Result<(), DomainError> {
        let draft = match NoteDraft::validated(title, content) {
            Ok(draft) => draft,
            Err(e) => {
                warn!(error = %e, %id, "Rejected note update");
                self.view.alert(self.messages.edit_title_required);
                self.view.focus(InputField::EditTitle);
                return Err(e.into());
            }
        };

        let _loading = Loading::show(&self.view);
        let result = self.api.update_note(id, &draft).await;
        match &result {
            Ok(()) => {
                info!(%id, "Note updated");
                self.render().await;
            }
            Err(e) => {
                error!(error = %e, %id, "Error updating note");
                self.view.alert(self.messages.update_failed);
            }
        }
        self.dialogs.edit.close();
        result
    }

    /// Same close-anyway policy as `update`
    #[instrument(level = "debug", skip(self))]
    pub async fn delete(&self, id: NoteId) -> Result<(), DomainError> {
        let _loading = Loading::show(&self.view);
        let result = self.api.delete_note(id).await;
        match &result {
            Ok(()) => {
                info!(%id, "Note deleted");
                self.render().await;
            }
            Err(e) => {
                error!(error = %e, %id, "Error deleting note");
                self.view.alert(self.messages.delete_failed);
            }
        }
        self.dialogs.delete.close();
        result
    }

    pub fn format_date(&self, note: &Note) -> String {
        self.dates.format_date(note.created_at.as_ref())
    }

    pub fn open_view(&self, note: &Note) {
        self.dialogs.view.open(ModalFields::View {
            title: note.title.clone(),
            content: note.content.clone(),
            created: self.created_line(note),
        });
    }

    pub fn open_edit(&self, note: &Note) {
        self.dialogs.edit.open(ModalFields::Edit {
            id: note.id,
            title: note.title.clone(),
            content: note.content.clone(),
        });
    }

    pub fn open_delete(&self, id: NoteId) {
        self.dialogs.delete.open(ModalFields::DeleteConfirm { id });
    }

    pub fn dismiss(&self, kind: DialogKind) {
        self.dialogs.get(kind).close();
    }

    /// The loader stays up: the page is being left
    pub fn logout(&self) {
        self.view.show_loader();
        let url = self.api.logout_url();
        info!(%url, "Logging out");
        self.view.navigate(&url);
    }

    fn card(&self, note: Note) -> NoteCard {
        NoteCard {
            title: truncate_title(&note.title, self.title_width),
            tooltip: note.title.clone(),
            created: self.created_line(&note),
            actions: CardAction::ALL,
            note,
        }
    }

    fn created_line(&self, note: &Note) -> String {
        format!("{}: {}", self.messages.created_prefix, self.format_date(note))
    }
}
