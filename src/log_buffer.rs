//! Append-only text log shown in the log window.

use crate::hex::bytes_to_hex;

/// One growing text buffer. Lines are never edited or removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogBuffer {
    text: String,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `message` followed by a line break. Embedded line breaks are kept.
    pub fn push_line(&mut self, message: &str) {
        self.text.push_str(message);
        self.text.push('\n');
    }

    /// Appends the hex rendering of `bytes` as one line.
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.push_line(&bytes_to_hex(bytes));
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn lines(&self) -> std::str::Lines<'_> {
        self.text.lines()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
