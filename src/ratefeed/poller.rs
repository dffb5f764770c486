use crate::ratefeed::client::RateFeedClient;
use crate::ratefeed::models::{extract_live_transactions, LiveRates};
use crate::service;
use crate::state::AppState;
use std::sync::Arc;
use tokio::time::interval;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

pub async fn start_polling(state: Arc<AppState>, shutdown: CancellationToken) {
    info!("Starting live rate polling service");

    let client = RateFeedClient::new(&state.config);
    let mut ticker = interval(state.config.poll_interval);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                // No retry: a failed cycle simply yields no live price rows.
                match client.fetch_live_rates().await {
                    Ok(rates) => {
                        let count = ingest_live_rates(&state, &rates);
                        debug!("Queued {} live price inserts", count);
                    }
                    Err(e) => error!("Failed to fetch live rates: {}", e),
                }
            }
            _ = shutdown.cancelled() => {
                info!("Shutting down live rate polling service");
                break;
            }
        }
    }
}

/// Fan a feed response out into one insert task per quoted symbol.
///
/// The inserts are spawned, not awaited: a cycle with N symbols can have N
/// overlapping inserts in flight, and the poller loop never blocks on them.
/// Returns the number of tasks spawned.
pub fn ingest_live_rates(state: &Arc<AppState>, rates: &LiveRates) -> usize {
    let records = extract_live_transactions(rates);
    let count = records.len();

    for record in records {
        let insert_state = state.clone();
        tokio::spawn(async move {
            if let Err(e) = service::insert_transaction(&insert_state, record).await {
                error!("Failed to insert live price: {}", e);
            }
        });
    }

    count
}
