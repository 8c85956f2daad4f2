//! Output export helpers
//!
//! Saving generated output to disk and copying it to the system
//! clipboard. Sharing falls back to a clipboard copy since a terminal
//! has no native share target.

use crate::error::{DraftgenError, Result};
use chrono::Utc;
use std::path::{Path, PathBuf};

/// Save generated output to a timestamped text file
///
/// The file is named `ai-content-<millis>.txt` and written into `dir`.
///
/// # Arguments
///
/// * `text` - The output text to save
/// * `dir` - Directory to write the file into
///
/// # Returns
///
/// Returns the path of the written file
///
/// # Errors
///
/// Returns error if the file cannot be written
pub fn save_output(text: &str, dir: &Path) -> Result<PathBuf> {
    let filename = format!("ai-content-{}.txt", Utc::now().timestamp_millis());
    let path = dir.join(filename);
    std::fs::write(&path, text)?;
    tracing::info!("Saved output to {}", path.display());
    Ok(path)
}

/// Copy text to the system clipboard
///
/// # Errors
///
/// Returns error if no clipboard is available (e.g. headless sessions)
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new()
        .map_err(|e| DraftgenError::Output(format!("Clipboard unavailable: {}", e)))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| DraftgenError::Output(format!("Failed to copy to clipboard: {}", e)))?;
    Ok(())
}

/// Share the current output
///
/// A terminal has no share sheet, so sharing copies the text to the
/// clipboard for pasting elsewhere.
pub fn share_output(text: &str) -> Result<()> {
    copy_to_clipboard(text)?;
    println!("Output copied to clipboard for sharing.");
    Ok(())
}
