use tokio::sync::mpsc;

use crate::action::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A transient, non-blocking user notification shown on the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Sink for user notifications. Injected into the feed so pagination logic
/// never touches rendering; tests inject a recorder instead.
pub trait Notifier: Send + Sync {
    fn notify(&self, kind: NoticeKind, message: &str);
}

/// Forwards notices into the action channel for the main loop to apply.
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<Action>,
}

impl ChannelNotifier {
    pub fn new(tx: mpsc::UnboundedSender<Action>) -> Self {
        Self { tx }
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, kind: NoticeKind, message: &str) {
        self.tx.send(Action::Notice(Notice::new(kind, message))).ok();
    }
}
