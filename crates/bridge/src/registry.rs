//! Pending-read registry for request/response correlation.

use std::collections::HashMap;

use blobread_protocol::ReadResponse;
use tokio::sync::{oneshot, Mutex};

/// Pending read awaiting its response
type PendingRead = oneshot::Sender<ReadResponse>;

/// Registry for in-flight tagged reads.
///
/// When a request is submitted, a oneshot channel is created and stored under
/// the request id. When the read completes, the corresponding sender is taken
/// out and fired. Taking the sender out first is what makes resolution
/// single-fire: a second `resolve` for the same id finds nothing and is
/// dropped instead of delivered twice.
#[derive(Default)]
pub struct PendingReads {
    pending: Mutex<HashMap<u64, PendingRead>>,
}

impl PendingReads {
    pub fn new() -> Self {
        Self {
            pending: Mutex::new(HashMap::new()),
        }
    }

    /// Register a pending read and return the receiver for its response.
    pub async fn register(&self, id: u64) -> oneshot::Receiver<ReadResponse> {
        let (tx, rx) = oneshot::channel();
        self.pending.lock().await.insert(id, tx);
        rx
    }

    /// Resolve a pending read. Unknown or already-resolved ids are a no-op.
    pub async fn resolve(&self, id: u64, response: ReadResponse) {
        let tx = self.pending.lock().await.remove(&id);
        if let Some(tx) = tx {
            let _ = tx.send(response);
        }
    }

    /// Drop a pending read without responding (caller went away).
    pub async fn cancel(&self, id: u64) {
        self.pending.lock().await.remove(&id);
    }

    /// Number of reads currently in flight.
    pub async fn in_flight(&self) -> usize {
        self.pending.lock().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blobread_protocol::{ErrorCode, ReadOutcome, WireContent};

    fn response(id: u64) -> ReadResponse {
        ReadResponse {
            id,
            outcome: ReadOutcome::Data(WireContent::Text("ok".to_string())),
        }
    }

    #[tokio::test]
    async fn resolve_fires_the_registered_receiver() {
        let registry = PendingReads::new();
        let rx = registry.register(7).await;
        registry.resolve(7, response(7)).await;

        let got = rx.await.unwrap();
        assert_eq!(got.id, 7);
        assert_eq!(registry.in_flight().await, 0);
    }

    #[tokio::test]
    async fn second_resolve_is_dropped() {
        let registry = PendingReads::new();
        let rx = registry.register(1).await;
        registry.resolve(1, response(1)).await;
        registry
            .resolve(
                1,
                ReadResponse {
                    id: 1,
                    outcome: ReadOutcome::Error(ErrorCode::ReadFailure),
                },
            )
            .await;

        // The receiver saw the first resolution only.
        let got = rx.await.unwrap();
        assert!(matches!(got.outcome, ReadOutcome::Data(_)));
    }

    #[tokio::test]
    async fn resolve_unknown_id_is_a_noop() {
        let registry = PendingReads::new();
        registry.resolve(99, response(99)).await;
        assert_eq!(registry.in_flight().await, 0);
    }

    #[tokio::test]
    async fn cancel_drops_the_sender() {
        let registry = PendingReads::new();
        let rx = registry.register(3).await;
        registry.cancel(3).await;
        assert!(rx.await.is_err());
    }
}
