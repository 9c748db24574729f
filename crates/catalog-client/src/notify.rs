//! Transient notifications
//!
//! A notifier holds at most one notice and a clear task scoped to it:
//! showing a notice replaces the pending timer, and dropping the notifier
//! aborts it.

use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

/// How long a notice stays visible
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

/// Notice severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient, self-clearing notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

/// Holder for the current notice and its clear timer
pub struct Notifier {
    current: Arc<Mutex<Option<Notice>>>,
    ttl: Duration,
    clear_task: Option<JoinHandle<()>>,
}

impl Notifier {
    /// Create a notifier with the standard 3-second lifetime
    pub fn new() -> Self {
        Self::with_ttl(NOTICE_TTL)
    }

    /// Create a notifier with a custom notice lifetime
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            current: Arc::new(Mutex::new(None)),
            ttl,
            clear_task: None,
        }
    }

    /// Show a notice, replacing any current one and its timer
    pub fn show(&mut self, kind: NoticeKind, text: impl Into<String>) {
        if let Some(task) = self.clear_task.take() {
            task.abort();
        }

        let notice = Notice {
            kind,
            text: text.into(),
        };
        *lock(&self.current) = Some(notice);

        let slot = Arc::clone(&self.current);
        let ttl = self.ttl;
        self.clear_task = Some(tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            *lock(&slot) = None;
        }));
    }

    /// The currently visible notice, if any
    pub fn current(&self) -> Option<Notice> {
        lock(&self.current).clone()
    }

    /// Clear the notice and cancel its timer
    pub fn clear(&mut self) {
        if let Some(task) = self.clear_task.take() {
            task.abort();
        }
        *lock(&self.current) = None;
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Notifier {
    fn drop(&mut self) {
        if let Some(task) = self.clear_task.take() {
            task.abort();
        }
    }
}

// Recover the slot even if a clear task panicked mid-write.
fn lock(slot: &Mutex<Option<Notice>>) -> std::sync::MutexGuard<'_, Option<Notice>> {
    slot.lock().unwrap_or_else(|e| e.into_inner())
}
