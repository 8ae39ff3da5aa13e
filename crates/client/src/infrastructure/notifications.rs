//! Toast delivery over a tokio broadcast channel

use tokio::sync::broadcast;

use crate::ports::outbound::{NotificationPort, Toast, ToastLevel};

const DEFAULT_CAPACITY: usize = 64;

/// Fans toasts out to every subscriber; with none, they are only logged
#[derive(Clone)]
pub struct BroadcastNotifier {
    sender: broadcast::Sender<Toast>,
}

impl Default for BroadcastNotifier {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl BroadcastNotifier {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Toast> {
        self.sender.subscribe()
    }
}

impl NotificationPort for BroadcastNotifier {
    fn notify(&self, toast: Toast) {
        match toast.level {
            ToastLevel::Error => tracing::warn!(title = %toast.title, "{}", toast.message),
            ToastLevel::Info => {
                tracing::info!(title = %toast.title, "{}", toast.message)
            }
        }
        // No receivers is fine
        let _ = self.sender.send(toast);
    }
}
