use crate::db::transaction;
use crate::models::{NewTransaction, Transaction, TransactionPage};
use crate::state::AppState;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Could not find transaction")]
    NotFound,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Persist a transaction and broadcast the created event.
///
/// Exactly one store write and one publish per successful insert; the publish
/// is fire-and-forget and cannot fail the insert. No publish happens when the
/// store write fails.
pub async fn insert_transaction(
    state: &AppState,
    record: NewTransaction,
) -> Result<i64, ServiceError> {
    let id = transaction::insert_transaction(&state.db_pool, &record).await?;

    let reached = state.notifier.publish(record.into_persisted(id));
    debug!("Inserted transaction {}, notified {} subscribers", id, reached);

    Ok(id)
}

/// Paginated history, newest first. `page` is 1-indexed.
pub async fn get_transactions(
    state: &AppState,
    page: i64,
    limit: i64,
) -> Result<TransactionPage, ServiceError> {
    let offset = (page - 1) * limit;
    let transactions = transaction::list_transactions(&state.db_pool, offset, limit).await?;
    let count = transaction::count_transactions(&state.db_pool).await?;

    // round(), not ceiling: kept for wire compatibility with existing clients
    let total_pages = (count as f64 / limit as f64).round() as i64;

    Ok(TransactionPage {
        total_transactions: count,
        total_pages,
        transactions,
    })
}

/// Most recently inserted record matching both fields exactly.
///
/// An empty result and a failed lookup both surface as NotFound; callers see
/// a single "could not find transaction" failure either way.
pub async fn find_latest_rate(
    state: &AppState,
    currency_from: &str,
    kind: &str,
) -> Result<Transaction, ServiceError> {
    match transaction::find_latest_by_from_and_type(&state.db_pool, currency_from, kind).await {
        Ok(Some(tx)) => Ok(tx),
        Ok(None) => Err(ServiceError::NotFound),
        Err(_) => Err(ServiceError::NotFound),
    }
}
