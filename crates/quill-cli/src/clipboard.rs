use std::io::Write;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use quill_engine::{Clipboard, ClipboardError};

/// Writes to the system clipboard through the terminal's OSC 52 escape.
///
/// Works over ssh and inside tmux (with `set-clipboard on`); terminals that
/// ignore the sequence drop it silently.
pub struct OscClipboard<W: Write> {
    out: W,
}

impl<W: Write> OscClipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

pub fn osc52(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

impl<W: Write> Clipboard for OscClipboard<W> {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.out
            .write_all(osc52(text).as_bytes())
            .and_then(|()| self.out.flush())
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn encodes_text_as_osc52() {
        assert_eq!(osc52("hi"), "\x1b]52;c;aGk=\x07");
    }

    #[test]
    fn writes_sequence_to_output() {
        let mut clipboard = OscClipboard::new(Vec::new());
        clipboard.write_text("fn main() {}").unwrap();
        let written = String::from_utf8(clipboard.out).unwrap();
        assert!(written.starts_with("\x1b]52;c;"));
        assert!(written.ends_with('\x07'));
    }
}
