//! Front-end ports.
//!
//! Any front-end that can read/write a text field, display a block of
//! output, and raise a blocking notification can drive the flows.
//! Implementations must be shareable across tasks (`Send + Sync`) because
//! the deferred lookup work runs on spawned tasks.

use std::sync::Mutex;

/// A text input the user edits and the lookup may overwrite.
pub trait TextField: Send + Sync {
    fn text(&self) -> String;
    fn set_text(&self, text: &str);
}

/// Destination for rendered results (rate blocks, valuation dumps).
pub trait OutputSink: Send + Sync {
    fn render(&self, content: &str);
}

/// Blocking user notification ("not ready" and the like).
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// In-memory text field, used by the console front-end and tests.
#[derive(Debug, Default)]
pub struct BufferField {
    value: Mutex<String>,
}

impl BufferField {
    pub fn new(initial: &str) -> Self {
        Self {
            value: Mutex::new(initial.to_string()),
        }
    }
}

impl TextField for BufferField {
    fn text(&self) -> String {
        self.value.lock().unwrap().clone()
    }

    fn set_text(&self, text: &str) {
        *self.value.lock().unwrap() = text.to_string();
    }
}

/// Sink that keeps everything rendered to it, in order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    contents: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn contents(&self) -> Vec<String> {
        self.contents.lock().unwrap().clone()
    }
}

impl OutputSink for RecordingSink {
    fn render(&self, content: &str) {
        self.contents.lock().unwrap().push(content.to_string());
    }
}

/// Notifier that keeps every notification, in order.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}
