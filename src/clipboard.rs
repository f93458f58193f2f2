//! System clipboard writing with a rich-then-plain fallback.
//!
//! Chat and ticket systems keep the block's line layout when the clipboard
//! carries a preformatted rich representation, so that is tried first; a
//! plain-text write is the fallback. Failures surface on the tracing
//! channel and to the caller, never as a panic.

use anyhow::{Context, Result};

use crate::format::strip_fences;

/// The two clipboard representations derived from a formatted block.
/// Both carry identical visible text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardPayload {
    pub plain: String,
    pub html: String,
}

impl ClipboardPayload {
    /// Derive both payloads from a fenced status block: the plain text is
    /// the block with fences stripped and whitespace trimmed, the rich text
    /// wraps that in a minimal `<pre>` tag.
    pub fn from_block(block: &str) -> Self {
        let plain = strip_fences(block);
        let html = format!("<pre>{}</pre>", plain);
        ClipboardPayload { plain, html }
    }
}

/// How a copy landed on the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The rich representation was accepted.
    Rich,
    /// The rich write failed; the plain-text write succeeded.
    PlainOnly,
}

/// Copy a formatted block to the system clipboard, rich first, plain as
/// fallback. The error returned is the fallback's; the rich failure is
/// logged at warn.
pub fn copy_block(block: &str) -> Result<CopyOutcome> {
    let payload = ClipboardPayload::from_block(block);
    let mut clipboard = arboard::Clipboard::new().context("clipboard unavailable")?;
    match clipboard.set_html(payload.html.as_str(), Some(payload.plain.as_str())) {
        Ok(()) => Ok(CopyOutcome::Rich),
        Err(e) => {
            tracing::warn!("rich clipboard write failed, retrying as plain text: {e}");
            clipboard
                .set_text(payload.plain.as_str())
                .context("plain text clipboard write failed")?;
            Ok(CopyOutcome::PlainOnly)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{Role, StatusKind};
    use crate::format::format_status;
    use crate::status::FieldBag;

    #[test]
    fn test_payloads_carry_identical_visible_text() {
        let block = format_status(StatusKind::Start, &FieldBag::default(), Role::Dev, None);
        let payload = ClipboardPayload::from_block(&block);
        assert!(!payload.plain.contains("```"));
        assert_eq!(payload.html, format!("<pre>{}</pre>", payload.plain));
    }

    #[test]
    fn test_plain_payload_is_fence_stripped_and_trimmed() {
        let payload = ClipboardPayload::from_block("```\nSTART\nProject: X\n```");
        assert_eq!(payload.plain, "START\nProject: X");
        assert_eq!(payload.html, "<pre>START\nProject: X</pre>");
    }
}
