//! Toast-style user notifications

/// Surfaces short messages to the user
pub trait Notifier: Send + Sync {
    fn error(&self, message: &str);
}

/// Forwards notifications to the log, for headless embedding
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn error(&self, message: &str) {
        tracing::warn!(message, "notification");
    }
}
