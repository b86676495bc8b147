//! Transient success/error notifications
//!
//! Actions push toasts as they resolve; the terminal loop drains the queue
//! after every interaction and prints each one once.

use std::collections::VecDeque;

/// Visual flavor of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// A mutation or fetch succeeded
    Success,
    /// A mutation or fetch failed
    Error,
}

/// One notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Visual flavor
    pub kind: ToastKind,
    /// User-facing message
    pub message: String,
}

/// FIFO queue of pending notifications
#[derive(Debug, Default)]
pub struct ToastQueue {
    pending: VecDeque<Toast>,
}

impl ToastQueue {
    /// Queue a success toast.
    pub fn success(&mut self, message: impl Into<String>) {
        self.pending.push_back(Toast {
            kind: ToastKind::Success,
            message: message.into(),
        });
    }

    /// Queue an error toast.
    pub fn error(&mut self, message: impl Into<String>) {
        self.pending.push_back(Toast {
            kind: ToastKind::Error,
            message: message.into(),
        });
    }

    /// Take every pending toast, oldest first.
    pub fn drain(&mut self) -> Vec<Toast> {
        self.pending.drain(..).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_preserves_order_and_empties() {
        let mut queue = ToastQueue::default();
        queue.success("User created successfully!");
        queue.error("Failed to delete user.");

        let toasts = queue.drain();
        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts[0].kind, ToastKind::Success);
        assert_eq!(toasts[1].kind, ToastKind::Error);

        assert!(queue.drain().is_empty());
    }
}
