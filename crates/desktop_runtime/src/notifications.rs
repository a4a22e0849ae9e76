//! Single-slot status line shown in the bottom terminal panel.
//!
//! A new message always replaces the previous one; there is no queue or history, so a slow
//! operation's message can be overwritten by a faster one before it is read.

use serde::{Deserialize, Serialize};

pub const MSG_FILE_SAVED: &str = "File saved successfully.";
pub const MSG_FILE_DELETED: &str = "File deleted successfully.";
pub const MSG_FILE_RENAMED: &str = "File renamed successfully.";
pub const MSG_DESKTOP_REFRESHED: &str = "Desktop refreshed.";
pub const MSG_EMPTY_FILE_NAME: &str = "Error: File name cannot be empty.";
pub const MSG_RUNNING: &str = "Running code...\n";
pub const MSG_EXECUTION_UNREACHABLE: &str =
    "Error: could not reach the execution service.\nMake sure the backend is running.";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NotificationState {
    pub message: String,
    pub visible: bool,
}

impl NotificationState {
    pub fn show(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.visible = true;
    }

    /// Hides the panel but keeps the last message for re-showing.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_replaces_and_hide_keeps_message() {
        let mut sink = NotificationState::default();
        sink.show("first");
        sink.show("second");
        assert_eq!(sink.message, "second");
        assert!(sink.visible);

        sink.hide();
        assert!(!sink.visible);
        assert_eq!(sink.message, "second");

        sink.toggle();
        assert!(sink.visible);
    }
}
