//! Clipboard access for the `copy` command (§6). Sourced from
//! `examples/other_examples/manifests/skdas20-VaultX`'s `arboard` usage —
//! the teacher has no clipboard dependency of its own in its Cargo
//! manifest despite its `clipboard_store.rs` module (that module only
//! *classifies* clipboard-shaped text, it never reads the system
//! clipboard), so `arboard` is adopted fresh for this operation.

use arboard::Clipboard;

use crate::error::{Error, Result};

pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()
        .map_err(|e| Error::InvalidSettings(format!("clipboard unavailable: {e}")))?;
    clipboard
        .set_text(text)
        .map_err(|e| Error::InvalidSettings(format!("failed to set clipboard: {e}")))?;
    Ok(())
}
