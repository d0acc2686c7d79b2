// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use crate::cli::args::{Args, Command};
use anyhow::{anyhow, Result};
use application::{ClientSettings, Dialogs, NotesApi, NotesClient, UiEvent};
use domain::{Note, NoteId};
use infrastructure::board::{Board, Dialog};
use infrastructure::renderer::ContentRenderer;
use infrastructure::{Config, HttpNotesApi};
use ports::{ConsolePresenter, HtmlPresenter};
use tracing::{debug, info};

pub type AppClient<A> = NotesClient<A, Board, Dialog>;

pub async fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting notesview with arguments");

    let config = Config::resolve(args.config.as_deref())?;
    let base_url = args.server.as_deref().unwrap_or(&config.server.base_url);
    let settings = ClientSettings {
        locale: args.locale.unwrap_or(config.display.locale),
        utc_offset: config.display.utc_offset()?,
        title_width: config.display.title_width,
    };

    // Initialize infrastructure
    let api = HttpNotesApi::new(base_url, config.server.cookie())?;
    info!(server = api.base_url(), "Using notes server");

    // Construct, bind dialogs, initial render
    let client = NotesClient::new(api, Board::new(), Dialogs::standard(), settings);
    client.start().await;

    let outcome = execute(&client, args.command).await;
    present(&client, settings, args.html).await?;
    outcome
}

/// Replay the user actions behind a command on a started client
pub async fn execute<A: NotesApi>(client: &AppClient<A>, command: Command) -> Result<()> {
    match command {
        Command::List => {}
        Command::View { note_id } => {
            let note = displayed_note(client, NoteId(note_id))?;
            client.dispatch(UiEvent::OpenView(note)).await?;
        }
        Command::Add { title, content } => {
            client.view().set_inputs(&title, &content);
            client.dispatch(UiEvent::AddNote { title, content }).await?;
        }
        Command::Edit {
            note_id,
            title,
            content,
        } => {
            let note = displayed_note(client, NoteId(note_id))?;
            let event = UiEvent::SaveEdit {
                id: note.id,
                title: title.unwrap_or_else(|| note.title.clone()),
                content: content.unwrap_or_else(|| note.content.clone()),
            };
            client.dispatch(UiEvent::OpenEdit(note)).await?;
            client.dispatch(event).await?;
        }
        Command::Delete { note_id } => {
            let id = NoteId(note_id);
            client.dispatch(UiEvent::OpenDelete(id)).await?;
            client.dispatch(UiEvent::ConfirmDelete(id)).await?;
        }
        Command::Logout => client.dispatch(UiEvent::Logout).await?,
    }
    Ok(())
}

/// The note behind a rendered card, as a click on that card would select it
fn displayed_note<A: NotesApi>(client: &AppClient<A>, id: NoteId) -> Result<Note> {
    client
        .view()
        .snapshot()
        .cards
        .into_iter()
        .map(|card| card.note)
        .find(|note| note.id == id)
        .ok_or_else(|| anyhow!("Note not found: {id}"))
}

async fn present<A: NotesApi>(
    client: &AppClient<A>,
    settings: ClientSettings,
    html: bool,
) -> Result<()> {
    let board = client.view().snapshot();
    let dialog = client.dialogs().open_fields();

    if let Some(url) = &board.navigation {
        info!(%url, "Opening in browser");
        return ContentRenderer::new().open_url(url);
    }

    if html {
        let page = HtmlPresenter::new(settings.locale).render(&board, dialog.as_ref());
        let mut renderer = ContentRenderer::new();
        let path = renderer.create_temp_file(&page)?;
        renderer.open_in_browser(&path).await?;
        return Ok(());
    }

    let presenter = ConsolePresenter::new(settings.locale);
    eprint!("{}", presenter.render_alerts(&board));
    print!("{}", presenter.render(&board, dialog.as_ref()));
    Ok(())
}
