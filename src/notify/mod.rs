//! Broadcast channel for "transaction created" events.
//!
//! Delivery is at-most-once best-effort: publishing never blocks and never
//! fails the caller, a subscriber that lags past the channel capacity loses
//! the oldest buffered events, and a disconnected client reconciles through
//! its next full list fetch.

use crate::models::Transaction;
use serde::Serialize;
use tokio::sync::broadcast;

/// Event name delivered to WebSocket subscribers.
pub const TRANSACTION_CREATED: &str = "transaction.created";

#[derive(Debug, Serialize)]
pub struct EventEnvelope {
    pub event: &'static str,
    pub data: Transaction,
}

impl EventEnvelope {
    pub fn created(data: Transaction) -> Self {
        Self {
            event: TRANSACTION_CREATED,
            data,
        }
    }
}

#[derive(Clone)]
pub struct Notifier {
    tx: broadcast::Sender<Transaction>,
}

impl Notifier {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Publish a created transaction to every current subscriber.
    /// Returns the number of subscribers reached; 0 when nobody is listening.
    pub fn publish(&self, transaction: Transaction) -> usize {
        // send only errors when there are no receivers
        self.tx.send(transaction).unwrap_or(0)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Transaction> {
        self.tx.subscribe()
    }
}
