//! One-shot, cancellable encounter submission.
//!
//! Exactly one POST per call: no retry and no de-duplication here. The
//! double-submit guard lives in the screen layer's `Submitting` state.

use crate::{ClientError, ClientResult, RestClient};
use tokio::sync::oneshot;
use transferout_core::EncounterPayload;

/// Caller-side handle that can abort an in-flight submission.
///
/// A fresh pair is created per submission and discarded once the call
/// settles. Dropping the handle without calling [`CancelHandle::cancel`]
/// lets the submission run to completion.
#[derive(Debug)]
pub struct CancelHandle {
    tx: oneshot::Sender<()>,
}

/// Token consumed by [`submit_encounter`] for one submission.
#[derive(Debug)]
pub struct CancelToken {
    rx: oneshot::Receiver<()>,
}

impl CancelHandle {
    /// Create a fresh handle/token pair for one submission.
    pub fn new() -> (CancelHandle, CancelToken) {
        let (tx, rx) = oneshot::channel();
        (CancelHandle { tx }, CancelToken { rx })
    }

    /// Abort the in-flight submission. Has no effect once the call settled.
    pub fn cancel(self) {
        let _ = self.tx.send(());
    }
}

impl CancelToken {
    /// A token that never fires, for submissions without a cancel control.
    pub fn never() -> CancelToken {
        let (_handle, token) = CancelHandle::new();
        token
    }

    /// Resolves only if the paired handle fires. A dropped handle keeps the
    /// submission running, so that case pends forever.
    async fn cancelled(self) {
        match self.rx.await {
            Ok(()) => {}
            Err(_) => std::future::pending::<()>().await,
        }
    }
}

/// Submit the encounter payload once.
///
/// The created-encounter response body is not consumed. Cancellation drops
/// the in-flight request and reports [`ClientError::Cancelled`].
pub async fn submit_encounter(
    client: &RestClient,
    payload: &EncounterPayload,
    cancel: CancelToken,
) -> ClientResult<()> {
    tokio::select! {
        _ = cancel.cancelled() => {
            tracing::info!("encounter submission cancelled");
            Err(ClientError::Cancelled)
        }
        result = client.post_json("encounter", payload) => {
            result.map(|_| ())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::timeout;

    #[tokio::test]
    async fn fired_handle_resolves_the_token() {
        let (handle, token) = CancelHandle::new();
        handle.cancel();
        timeout(Duration::from_millis(100), token.cancelled())
            .await
            .expect("cancelled() should resolve after cancel()");
    }

    #[tokio::test]
    async fn dropped_handle_never_resolves() {
        let (handle, token) = CancelHandle::new();
        drop(handle);
        let result = timeout(Duration::from_millis(50), token.cancelled()).await;
        assert!(result.is_err(), "dropping the handle must not cancel");
    }

    #[tokio::test]
    async fn never_token_never_resolves() {
        let token = CancelToken::never();
        let result = timeout(Duration::from_millis(50), token.cancelled()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn cancellation_wins_over_a_stalled_call() {
        let (handle, token) = CancelHandle::new();
        handle.cancel();

        // Stand-in for an in-flight request that never completes.
        let stalled = std::future::pending::<ClientResult<()>>();
        let outcome: ClientResult<()> = tokio::select! {
            _ = token.cancelled() => Err(ClientError::Cancelled),
            result = stalled => result,
        };
        assert!(matches!(outcome, Err(ClientError::Cancelled)));
    }
}
