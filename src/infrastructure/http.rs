// src/infrastructure/http.rs
use crate::application::NotesApi;
use crate::constants::{LOGOUT_PATH, NOTES_PATH};
use crate::domain::{DomainError, Note, NoteDraft, NoteId, NotesEnvelope};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, COOKIE};
use reqwest::{Client, Response, Url};
use tracing::{debug, instrument};

/// NotesApi over the server's REST endpoints
#[derive(Debug, Clone)]
pub struct HttpNotesApi {
    client: Client,
    base_url: String,
}

impl HttpNotesApi {
    /// `cookie` is sent verbatim with every request, so a browser session can be reused
    pub fn new(base_url: &str, cookie: Option<&str>) -> Result<Self> {
        Url::parse(base_url).with_context(|| format!("Invalid server URL: {base_url}"))?;

        let mut headers = HeaderMap::new();
        if let Some(cookie) = cookie.map(str::trim).filter(|c| !c.is_empty()) {
            let value = HeaderValue::from_str(cookie).context("Invalid cookie header value")?;
            headers.insert(COOKIE, value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        debug!(%base_url, "Created notes API client");
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn notes_url(&self) -> String {
        format!("{}{}", self.base_url, NOTES_PATH)
    }

    fn note_url(&self, id: NoteId) -> String {
        format!("{}{}/{}", self.base_url, NOTES_PATH, id)
    }
}

/// Every non-success status is a failure, whatever the code
fn ensure_success(response: Response) -> Result<Response, DomainError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(DomainError::UnexpectedStatus(status.as_u16()))
    }
}

fn transport(error: reqwest::Error) -> DomainError {
    DomainError::Transport(error.to_string())
}

#[async_trait(?Send)]
impl NotesApi for HttpNotesApi {
    #[instrument(level = "debug", skip(self))]
    async fn list_notes(&self) -> Result<Vec<Note>, DomainError> {
        let response = self
            .client
            .get(self.notes_url())
            .send()
            .await
            .map_err(transport)?;
        let envelope: NotesEnvelope = ensure_success(response)?
            .json()
            .await
            .map_err(transport)?;
        Ok(envelope.notes)
    }

    #[instrument(level = "debug", skip(self))]
    async fn create_note(&self, draft: &NoteDraft) -> Result<(), DomainError> {
        let response = self
            .client
            .post(self.notes_url())
            .json(draft)
            .send()
            .await
            .map_err(transport)?;
        ensure_success(response)?;
        Ok(())
    }

    #[instrument(level = "debug", skip(self))]
    async fn update_note(&self, id: NoteId, draft: &NoteDraft) -> Result<(), DomainError> {
        let response = self
            .client
            .put(self.note_url(id))
            .json(draft)
            .send()
            .await
            .map_err(transport)?;
        ensure_success(response)?;
        Ok(())
    }

    #[instrument(level = "debug", skip(self))]
    async fn delete_note(&self, id: NoteId) -> Result<(), DomainError> {
        let response = self
            .client
            .delete(self.note_url(id))
            .send()
            .await
            .map_err(transport)?;
        ensure_success(response)?;
        Ok(())
    }

    fn logout_url(&self) -> String {
        format!("{}{}", self.base_url, LOGOUT_PATH)
    }
}
