// src/infrastructure/renderer.rs
use crate::constants::BROWSER_LAUNCH_DELAY_MS;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::{Builder, TempDir};
use tracing::{debug, instrument};

/// Writes rendered pages to disk and hands pages or URLs to the browser
#[derive(Debug, Default)]
pub struct ContentRenderer {
    // Last temp dir, kept alive until the browser has read the page
    temp_dir: Option<TempDir>,
}

impl ContentRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_temp_file(&mut self, content: &str) -> Result<PathBuf> {
        let temp_dir = Builder::new()
            .prefix("notesview-")
            .rand_bytes(5)
            .tempdir()
            .context("Failed to create temporary directory")?;

        let file_path = temp_dir.path().join("notes.html");

        File::create(&file_path)
            .with_context(|| format!("Failed to create temp file at {}", file_path.display()))?
            .write_all(content.as_bytes())
            .context("Failed to write content to temporary file")?;

        debug!(path = %file_path.display(), "Wrote page");
        self.temp_dir = Some(temp_dir);

        Ok(file_path)
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn open_in_browser(&self, path: &Path) -> Result<()> {
        let path_str = path.to_str().context("Failed to convert path to string")?;
        launch(path_str)?;

        // Give the browser a moment before the temp dir can go away
        tokio::time::sleep(Duration::from_millis(BROWSER_LAUNCH_DELAY_MS)).await;

        Ok(())
    }

    #[instrument(level = "debug", skip(self))]
    pub fn open_url(&self, url: &str) -> Result<()> {
        launch(url)
    }
}

fn launch(target: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open")
            .arg(target)
            .spawn()
            .context("Failed to open browser")?;
    }
    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/C", "start", "", target])
            .spawn()
            .context("Failed to open browser")?;
    }
    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open")
            .arg(target)
            .spawn()
            .context("Failed to open browser")?;
    }

    Ok(())
}
