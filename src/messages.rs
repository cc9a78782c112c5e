use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub struct Message {
    pub at: DateTime<Utc>,
    pub text: String,
}

/// Notification sink. Cheap to clone; every handle appends to the same
/// visible log. Appending cannot fail.
#[derive(Clone, Default)]
pub struct MessageLog {
    inner: Arc<Mutex<Vec<Message>>>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, text: impl Into<String>) {
        let mut entries = self.inner.lock().expect("Mutex poisoned");
        entries.push(Message {
            at: Utc::now(),
            text: text.into(),
        });
    }

    pub fn clear(&self) {
        self.inner.lock().expect("Mutex poisoned").clear();
    }

    /// Snapshot of the log at this moment.
    pub fn messages(&self) -> Vec<Message> {
        self.inner.lock().expect("Mutex poisoned").clone()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().expect("Mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
