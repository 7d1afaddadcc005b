use arboard::Clipboard;
use crate::errors::{SentinelError, SentinelResult};
use crate::traits::clipboard_sink::ClipboardSink;

/// The desktop clipboard.
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn write_text(&self, text: &str) -> SentinelResult<()> {
        let mut clipboard = Clipboard::new()
            .map_err(|e| SentinelError::ClipboardError { reason: e.to_string() })?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| SentinelError::ClipboardError { reason: e.to_string() })
    }
}
