use anyhow::{Context, Result};
use arboard::Clipboard;

/// Current clipboard contents as text.
pub fn read_text() -> Result<String> {
    let mut clipboard = Clipboard::new().context("failed to open clipboard")?;
    clipboard
        .get_text()
        .context("clipboard does not contain text")
}

pub fn copy_text(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("failed to open clipboard")?;
    clipboard
        .set_text(text.to_owned())
        .context("failed to write to clipboard")
}
