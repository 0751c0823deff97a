//! Cancellable deferred-message timer
//!
//! A message that becomes available after a fixed delay unless the timer is
//! cancelled first. One spawned task per timer; cancellation is a oneshot
//! signal raced against the timer deadline.

use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// A message scheduled for deferred delivery.
#[derive(Debug)]
pub struct DelayedMessage {
    cancel: Option<oneshot::Sender<()>>,
    task: JoinHandle<Option<String>>,
}

impl DelayedMessage {
    /// Schedule `message` for delivery after `delay`.
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn spawn(message: impl Into<String>, delay: Duration) -> Self {
        let (cancel_tx, cancel_rx) = oneshot::channel();
        let message = message.into();

        let task = tokio::spawn(async move {
            tokio::select! {
                () = tokio::time::sleep(delay) => Some(message),
                _ = cancel_rx => None,
            }
        });

        Self {
            cancel: Some(cancel_tx),
            task,
        }
    }

    /// Cancel delivery. A no-op after the first call or once delivery
    /// has already happened.
    pub fn cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            let _ = cancel.send(());
        }
    }

    /// Wait for the timer to resolve.
    ///
    /// Returns the message once the delay elapses, or `None` if the timer
    /// was cancelled first.
    pub async fn wait(self) -> Option<String> {
        // Keep the cancel handle alive while waiting; dropping it would
        // trip the cancellation arm of the timer task.
        let Self { cancel, task } = self;
        let resolved = task.await.unwrap_or(None);
        drop(cancel);
        resolved
    }
}
