//! tests/poller_tests.rs - Live rate ingestion tests against a mocked feed

#[cfg(test)]
mod tests {
    use crate::{
        config::Config,
        db::{self, transaction},
        models::LIVE_PRICE,
        notify::Notifier,
        ratefeed::{client::RateFeedClient, models::extract_live_transactions, poller, FeedError},
        service,
        state::AppState,
    };
    use sqlx::sqlite::SqlitePoolOptions;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::time::sleep;
    use tokio_util::sync::CancellationToken;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const FEED_BODY: &str =
        r#"{"timestamp":2000,"target":"USD","rates":{"BTC":51000.0,"ETH":3000.0}}"#;

    /// Setup test environment pointed at a mock feed
    async fn setup(feed_url: &str) -> Arc<AppState> {
        let mut config = Config::from_env();
        config.rate_feed_url = feed_url.to_string();
        config.rate_feed_access_key = "test-key".to_string();
        config.rate_feed_symbols = "BTC,ETH".to_string();

        let db_pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to create in-memory database");
        sqlx::raw_sql(db::INIT_SCHEMA)
            .execute(&db_pool)
            .await
            .expect("Failed to initialize schema");

        Arc::new(AppState {
            config,
            db_pool,
            notifier: Notifier::new(16),
        })
    }

    /// The inserts are fire-and-forget; give the spawned tasks a moment
    async fn wait_for_count(state: &AppState, expected: i64) {
        for _ in 0..100 {
            let count = transaction::count_transactions(&state.db_pool).await.unwrap();
            if count >= expected {
                return;
            }
            sleep(Duration::from_millis(20)).await;
        }
        panic!("Timed out waiting for {} inserted records", expected);
    }

    #[tokio::test]
    async fn test_poll_cycle_inserts_one_record_per_symbol() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/live"))
            .and(query_param("access_key", "test-key"))
            .and(query_param("symbols", "BTC,ETH"))
            .respond_with(ResponseTemplate::new(200).set_body_string(FEED_BODY))
            .mount(&mock_server)
            .await;

        let state = setup(&mock_server.uri()).await;
        let client = RateFeedClient::new(&state.config);

        let rates = client.fetch_live_rates().await.unwrap();
        assert_eq!(rates.timestamp, 2000);
        assert_eq!(rates.target, "USD");
        assert_eq!(rates.rates.len(), 2);

        let spawned = poller::ingest_live_rates(&state, &rates);
        assert_eq!(spawned, 2);
        wait_for_count(&state, 2).await;

        let page = service::get_transactions(&state, 1, 10).await.unwrap();
        assert_eq!(page.total_transactions, 2);
        for tx in &page.transactions {
            assert_eq!(tx.kind, LIVE_PRICE);
            assert_eq!(tx.amount1, 1.0);
            assert_eq!(tx.currency_to, "USD");
            assert_eq!(tx.transaction_date, "2000");
            match tx.currency_from.as_str() {
                "BTC" => assert_eq!(tx.amount2, 51000.0),
                "ETH" => assert_eq!(tx.amount2, 3000.0),
                other => panic!("Unexpected symbol {}", other),
            }
        }
    }

    #[tokio::test]
    async fn test_rate_lookup_after_poll_cycle() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/live"))
            .respond_with(ResponseTemplate::new(200).set_body_string(FEED_BODY))
            .mount(&mock_server)
            .await;

        let state = setup(&mock_server.uri()).await;
        let client = RateFeedClient::new(&state.config);

        let rates = client.fetch_live_rates().await.unwrap();
        poller::ingest_live_rates(&state, &rates);
        wait_for_count(&state, 2).await;

        let rate = service::find_latest_rate(&state, "BTC", LIVE_PRICE).await.unwrap();
        assert_eq!(rate.amount2, 51000.0);
    }

    #[tokio::test]
    async fn test_start_polling_runs_a_cycle_and_stops_on_cancel() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/live"))
            .respond_with(ResponseTemplate::new(200).set_body_string(FEED_BODY))
            .mount(&mock_server)
            .await;

        let state = setup(&mock_server.uri()).await;
        let shutdown = CancellationToken::new();

        // The interval fires immediately, so the first cycle runs at startup
        let handle = tokio::spawn(poller::start_polling(state.clone(), shutdown.clone()));
        wait_for_count(&state, 2).await;

        shutdown.cancel();
        handle.await.expect("Poller task should stop cleanly on cancel");

        let rate = service::find_latest_rate(&state, "ETH", LIVE_PRICE).await.unwrap();
        assert_eq!(rate.amount2, 3000.0);
    }

    #[tokio::test]
    async fn test_feed_failure_yields_no_inserts() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/live"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let state = setup(&mock_server.uri()).await;
        let client = RateFeedClient::new(&state.config);

        let result = client.fetch_live_rates().await;
        assert!(matches!(result, Err(FeedError::Status(_))));

        let count = transaction::count_transactions(&state.db_pool).await.unwrap();
        assert_eq!(count, 0, "A failed cycle produces zero inserts");
    }

    #[tokio::test]
    async fn test_malformed_feed_body_is_an_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/live"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let state = setup(&mock_server.uri()).await;
        let client = RateFeedClient::new(&state.config);

        let result = client.fetch_live_rates().await;
        assert!(matches!(result, Err(FeedError::Request(_))));
    }

    #[tokio::test]
    async fn test_extract_maps_every_quote() {
        let rates: crate::ratefeed::LiveRates = serde_json::from_str(FEED_BODY).unwrap();
        let records = extract_live_transactions(&rates);

        assert_eq!(records.len(), 2);
        for record in &records {
            assert_eq!(record.amount1, 1.0);
            assert_eq!(record.currency_to, "USD");
            assert_eq!(record.kind, LIVE_PRICE);
            assert_eq!(record.transaction_date, "2000");
        }
    }
}
