use chrono::Utc;
use exchange_data_service::{api, config, db, models::EXCHANGED, notify::Notifier, state::AppState};
use reqwest::StatusCode;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::time::sleep;
use tracing::{info, Level};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup tracing
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    info!("Starting API integration tests...");

    // 1. Setup
    info!("Setting up test environment...");
    let config = config::Config::from_env();
    let db_pool = db::connection::establish_connection(&config.database_url).await?;

    // Clean database
    info!("Cleaning database before tests...");
    sqlx::query("DELETE FROM transactions").execute(&db_pool).await?;
    info!("✅ Database cleaned!");

    // Create app state
    let app_state = Arc::new(AppState {
        config: config.clone(),
        db_pool: db_pool.clone(),
        notifier: Notifier::new(config.notify_capacity),
    });

    // 2. Start API server in a background task
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let server_state = app_state.clone();

    let port = 3333; // Use a different port than main app for testing
    let server_addr = format!("127.0.0.1:{}", port);
    info!("Starting test server on {}", server_addr);

    let server_addr_clone = server_addr.clone();

    let server_handle = tokio::spawn(async move {
        let app = api::create_router(server_state);
        let listener = tokio::net::TcpListener::bind(&server_addr).await.unwrap();

        tokio::select! {
            result = axum::serve(listener, app) => {
                if let Err(e) = result {
                    tracing::error!("Server error: {}", e);
                }
            }
            _ = shutdown_rx => {
                info!("Server shutdown received");
            }
        }
    });

    // Give the server time to start
    sleep(Duration::from_secs(1)).await;

    // 3. Create HTTP client for tests
    let client = reqwest::Client::new();
    let base_url = format!("http://{}", server_addr_clone);

    // 4. Create a transaction
    info!("Test 1: POST /transactions");
    let transaction_date = Utc::now().timestamp_millis().to_string();
    let response = client
        .post(format!("{}/transactions", base_url))
        .json(&json!({
            "transactionDate": transaction_date,
            "currencyFrom": "BTC",
            "amount1": 0.5,
            "currencyTo": "USD",
            "amount2": 25000.0,
            "type": EXCHANGED,
        }))
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: Value = response.json().await?;
    let id = created["id"].as_i64().expect("id should be a number");
    info!("✅ Created transaction with id {}", id);

    // 5. List transactions
    info!("Test 2: GET /transactions");
    let response = client
        .get(format!("{}/transactions?page=1&limit=25", base_url))
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await?;
    assert_eq!(body["totalTransactions"].as_i64(), Some(1));
    assert_eq!(body["transactions"][0]["id"].as_i64(), Some(id));
    info!("✅ Listed {} transaction(s)", body["totalTransactions"]);

    // 6. Rate lookup for a type with no records yet
    info!("Test 3: GET /transactions/rate (miss)");
    let response = client
        .get(format!(
            "{}/transactions/rate?currencyFrom=BTC&type=LIVE_PRICE",
            base_url
        ))
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    info!("✅ Rate lookup correctly returned 404");

    // 7. Rate lookup after inserting a live price
    info!("Test 4: GET /transactions/rate (hit)");
    let response = client
        .post(format!("{}/transactions", base_url))
        .json(&json!({
            "transactionDate": transaction_date,
            "currencyFrom": "BTC",
            "amount1": 1.0,
            "currencyTo": "USD",
            "amount2": 50000.0,
            "type": "LIVE_PRICE",
        }))
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = client
        .get(format!(
            "{}/transactions/rate?currencyFrom=BTC&type=LIVE_PRICE",
            base_url
        ))
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    let rate: Value = response.json().await?;
    assert_eq!(rate["amount2"].as_f64(), Some(50000.0));
    info!("✅ Rate lookup returned amount2 = {}", rate["amount2"]);

    // 8. Invalid pagination parameters
    info!("Test 5: GET /transactions with bad params");
    let response = client
        .get(format!("{}/transactions?page=zero&limit=25", base_url))
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    info!("✅ Bad page parameter rejected");

    // 9. Shutdown
    info!("All API tests passed! Shutting down...");
    let _ = shutdown_tx.send(());
    let _ = server_handle.await;

    Ok(())
}
