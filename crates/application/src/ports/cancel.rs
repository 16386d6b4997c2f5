//! Cancellation primitives.
//!
//! Each in-flight action holds a receiver raced against its work with
//! `tokio::select!`. Re-triggering an action replaces and cancels the
//! previous token, so a display region has at most one writer.

use tokio::sync::watch;

/// Handle used to cancel an in-flight action.
#[derive(Debug)]
pub struct CancellationToken {
    sender: watch::Sender<bool>,
}

/// Receiver side, held by the running action.
#[derive(Debug)]
pub struct CancellationReceiver {
    receiver: watch::Receiver<bool>,
}

impl CancellationToken {
    /// Creates a connected token/receiver pair.
    #[must_use]
    pub fn new() -> (Self, CancellationReceiver) {
        let (sender, receiver) = watch::channel(false);
        (Self { sender }, CancellationReceiver { receiver })
    }

    /// Signals the receiver. Best-effort: the action may already have
    /// completed.
    pub fn cancel(&self) {
        let _ = self.sender.send(true);
    }
}

impl CancellationReceiver {
    /// Resolves once [`CancellationToken::cancel`] is called.
    ///
    /// If the token is dropped without cancelling, this pends forever so a
    /// surrounding `select!` completes via its work branch.
    pub async fn cancelled(&mut self) {
        if self.receiver.wait_for(|cancelled| *cancelled).await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn cancel_resolves_receiver() {
        let (token, mut receiver) = CancellationToken::new();
        token.cancel();
        tokio::time::timeout(Duration::from_millis(100), receiver.cancelled())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn dropped_token_keeps_receiver_pending() {
        let (token, mut receiver) = CancellationToken::new();
        drop(token);
        let waited =
            tokio::time::timeout(Duration::from_millis(50), receiver.cancelled()).await;
        assert!(waited.is_err());
    }

    #[tokio::test]
    async fn select_prefers_completed_work_over_pending_cancel() {
        let (_token, mut receiver) = CancellationToken::new();
        let result = tokio::select! {
            value = async { 7 } => Some(value),
            () = receiver.cancelled() => None,
        };
        assert_eq!(result, Some(7));
    }
}
