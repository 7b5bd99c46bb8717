// src/infrastructure/renderer.rs
use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::{Builder, TempDir};
use tracing::{debug, instrument};

use crate::constants::BROWSER_LAUNCH_DELAY_MS;

/// Puts a rendered page somewhere a browser can read it.
#[derive(Debug, Default)]
pub struct ContentRenderer {
    // Keep last temp dir alive to prevent deletion
    temp_dir: Option<TempDir>,
}

impl ContentRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_temp_file(&mut self, content: &str) -> Result<PathBuf> {
        let temp_dir = Builder::new()
            .prefix("notedeck-")
            .rand_bytes(5)
            .tempdir()
            .context("Failed to create temporary directory")?;

        let file_path = temp_dir.path().join("notes.html");
        write_file(&file_path, content)?;

        self.temp_dir = Some(temp_dir);
        Ok(file_path)
    }

    #[instrument(level = "debug", skip(self, content))]
    pub fn write_to(&self, path: &Path, content: &str) -> Result<()> {
        write_file(path, content)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn open_in_browser(&self, path: &Path) -> Result<()> {
        let path_str = path.to_str().context("Failed to convert path to string")?;

        #[cfg(target_os = "macos")]
        {
            std::process::Command::new("open")
                .arg(path_str)
                .spawn()
                .context("Failed to open browser")?;
        }
        #[cfg(target_os = "windows")]
        {
            std::process::Command::new("cmd")
                .args(["/C", "start", path_str])
                .spawn()
                .context("Failed to open browser")?;
        }
        #[cfg(target_os = "linux")]
        {
            std::process::Command::new("xdg-open")
                .arg(path_str)
                .spawn()
                .context("Failed to open browser")?;
        }

        debug!(path = path_str, "Browser launched");
        std::thread::sleep(Duration::from_millis(BROWSER_LAUNCH_DELAY_MS));
        Ok(())
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    File::create(path)
        .with_context(|| format!("Failed to create file at {}", path.display()))?
        .write_all(content.as_bytes())
        .with_context(|| format!("Failed to write page to {}", path.display()))
}
