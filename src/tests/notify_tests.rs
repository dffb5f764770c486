//! tests/notify_tests.rs - Notification channel contract tests

#[cfg(test)]
mod tests {
    use crate::{
        models::{Transaction, EXCHANGED},
        notify::{EventEnvelope, Notifier},
    };
    use serde_json::{json, Value};
    use tokio::sync::broadcast::error::RecvError;

    fn sample(id: i64) -> Transaction {
        Transaction {
            id,
            transaction_date: "1000".to_string(),
            currency_from: "BTC".to_string(),
            amount1: 1.0,
            currency_to: "USD".to_string(),
            amount2: 50000.0,
            kind: EXCHANGED.to_string(),
        }
    }

    #[tokio::test]
    async fn test_publish_reports_subscribers_reached() {
        let notifier = Notifier::new(16);

        // Nobody listening yet
        assert_eq!(notifier.publish(sample(1)), 0);

        let mut first = notifier.subscribe();
        let mut second = notifier.subscribe();
        assert_eq!(notifier.publish(sample(2)), 2);

        assert_eq!(first.recv().await.unwrap().id, 2);
        assert_eq!(second.recv().await.unwrap().id, 2);
    }

    #[tokio::test]
    async fn test_lagged_subscriber_drops_oldest_events() {
        let notifier = Notifier::new(2);
        let mut events = notifier.subscribe();

        for id in 1..=4 {
            notifier.publish(sample(id));
        }

        // Capacity 2: events 1 and 2 are gone, the rest still deliver in order
        assert!(matches!(events.recv().await, Err(RecvError::Lagged(2))));
        assert_eq!(events.recv().await.unwrap().id, 3);
        assert_eq!(events.recv().await.unwrap().id, 4);
    }

    #[test]
    fn test_event_envelope_wire_shape() {
        let envelope = EventEnvelope::created(sample(7));
        let value: Value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(value["event"], json!("transaction.created"));
        assert_eq!(value["data"]["id"], json!(7));
        assert_eq!(value["data"]["transactionDate"], json!("1000"));
        assert_eq!(value["data"]["currencyFrom"], json!("BTC"));
        assert_eq!(value["data"]["amount2"], json!(50000.0));
        assert_eq!(value["data"]["type"], json!(EXCHANGED));
    }
}
