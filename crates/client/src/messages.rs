//! Append-only notification sink

use parking_lot::Mutex;

/// Human-readable message log consumed by a display component.
///
/// Shared via `Arc` and injected into the service at construction; entries
/// are appended, never edited or removed individually.
#[derive(Debug, Default)]
pub struct MessageLog {
    entries: Mutex<Vec<String>>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message.
    pub fn add(&self, message: impl Into<String>) {
        self.entries.lock().push(message.into());
    }

    /// Reset the log to empty.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    /// Snapshot of all messages, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.entries.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_in_order() {
        let log = MessageLog::new();
        log.add("first");
        log.add("second");
        assert_eq!(log.messages(), vec!["first", "second"]);
    }

    #[test]
    fn clear_resets_to_empty() {
        let log = MessageLog::new();
        log.add("entry");
        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.messages(), Vec::<String>::new());
    }
}
