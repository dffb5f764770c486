use exchange_data_service::{api, config::Config, db, notify::Notifier, ratefeed, state::AppState};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting exchange-data-service");

    // Load configuration
    let config = Config::from_env();

    // Setup database connection
    let db_pool = db::connection::establish_connection(&config.database_url).await?;
    tracing::info!("Database connection established");

    // Create the broadcast channel for transaction-created events
    let notifier = Notifier::new(config.notify_capacity);

    // Create shared state
    let app_state = Arc::new(AppState {
        config: config.clone(),
        db_pool,
        notifier,
    });

    // Start live rate polling task with an explicit stop handle
    let shutdown = CancellationToken::new();
    let polling_state = app_state.clone();
    let polling_shutdown = shutdown.clone();
    let poller_handle = tokio::spawn(async move {
        ratefeed::poller::start_polling(polling_state, polling_shutdown).await;
    });
    tracing::info!("Live rate polling task started");

    // Start HTTP server
    let app = api::create_router(app_state);
    let addr = format!("{}:{}", config.server_host, config.server_port);
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    let serve_shutdown = shutdown.clone();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutdown signal received");
            serve_shutdown.cancel();
        })
        .await?;

    // Stop the poller along with the server
    shutdown.cancel();
    let _ = poller_handle.await;

    Ok(())
}
