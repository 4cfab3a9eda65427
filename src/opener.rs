//! Open a file or directory with the platform's default handler

use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

/// Open `path` in the OS file manager or default editor.
///
/// Falls back to `$EDITOR`, then to asking the user to open it manually.
pub fn open_path(path: &Path) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        Command::new("open")
            .arg(path)
            .spawn()
            .with_context(|| format!("Failed to open {}", path.display()))?;
        return Ok(());
    }

    #[cfg(target_os = "windows")]
    {
        Command::new("cmd")
            .arg("/C")
            .arg("start")
            .arg("")
            .arg(path)
            .spawn()
            .with_context(|| format!("Failed to open {}", path.display()))?;
        return Ok(());
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        if which::which("xdg-open").is_ok() {
            Command::new("xdg-open")
                .arg(path)
                .spawn()
                .with_context(|| format!("Failed to open {}", path.display()))?;
            return Ok(());
        }

        if let Some(editor) = std::env::var_os("EDITOR").filter(|e| !e.is_empty()) {
            let status = Command::new(&editor)
                .arg(path)
                .status()
                .with_context(|| format!("Failed to launch {}", editor.to_string_lossy()))?;
            if !status.success() {
                tracing::warn!(?status, "editor exited with an error");
            }
            return Ok(());
        }

        println!("No editor found, please open {} manually.", path.display());
        Ok(())
    }
}
