use iced::widget::text_editor::{self, Action, Content, Motion};

use syb::log_buffer::LogBuffer;
use syb::pipeline::LogEntry;

/// State behind the log window. Survives the window being closed and reopened.
pub struct LogWindow {
    buffer: LogBuffer,
    content: Content,
}

impl LogWindow {
    pub fn new() -> Self {
        Self {
            buffer: LogBuffer::new(),
            content: Content::new(),
        }
    }

    pub fn log(&mut self, message: &str) {
        self.buffer.push_line(message);
        self.refresh();
    }

    pub fn log_bytes(&mut self, bytes: &[u8]) {
        self.buffer.push_bytes(bytes);
        self.refresh();
    }

    pub fn append(&mut self, entry: LogEntry) {
        match entry {
            LogEntry::Line(line) => self.log(&line),
            LogEntry::Bytes(bytes) => self.log_bytes(&bytes),
        }
    }

    /// Applies selection, scrolling and cursor moves; edits are dropped.
    pub fn perform(&mut self, action: Action) {
        if !action.is_edit() {
            self.content.perform(action);
        }
    }

    pub fn buffer(&self) -> &LogBuffer {
        &self.buffer
    }

    pub fn content(&self) -> &text_editor::Content {
        &self.content
    }

    // Rebuilds the display from the whole buffer and keeps the newest line in view.
    fn refresh(&mut self) {
        self.content = Content::with_text(self.buffer.as_str());
        self.content.perform(Action::Move(Motion::DocumentEnd));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::text_editor::Edit;

    #[test]
    fn typing_into_the_log_is_ignored() {
        let mut log = LogWindow::new();
        log.log("SYB online");
        let before = log.content().text();

        log.perform(Action::Edit(Edit::Insert('x')));
        log.perform(Action::Edit(Edit::Backspace));

        assert_eq!(log.content().text(), before);
        assert_eq!(log.buffer().as_str(), "SYB online\n");
    }

    #[test]
    fn entries_show_up_in_display() {
        let mut log = LogWindow::new();
        log.append(LogEntry::Line("HELLO".into()));
        log.append(LogEntry::Bytes(vec![0x20, 0x0f]));

        assert_eq!(log.buffer().lines().collect::<Vec<_>>(), vec!["HELLO", "20 0F"]);
        assert!(log.content().text().contains("HELLO\n20 0F"));
    }
}
