use crate::models::{NewTransaction, Transaction};
use sqlx::{sqlite::SqliteRow, Pool, Row, Sqlite};

pub async fn insert_transaction(
    pool: &Pool<Sqlite>,
    record: &NewTransaction,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"INSERT INTO transactions
           (transaction_date, currency_from, amount1, currency_to, amount2, type)
           VALUES (?, ?, ?, ?, ?, ?)"#,
    )
    .bind(&record.transaction_date)
    .bind(&record.currency_from)
    .bind(record.amount1)
    .bind(&record.currency_to)
    .bind(record.amount2)
    .bind(&record.kind)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

pub async fn list_transactions(
    pool: &Pool<Sqlite>,
    offset: i64,
    limit: i64,
) -> Result<Vec<Transaction>, sqlx::Error> {
    let rows = sqlx::query(
        r#"SELECT id, transaction_date, currency_from, amount1, currency_to, amount2, type
           FROM transactions
           ORDER BY id DESC
           LIMIT ? OFFSET ?"#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(row_to_transaction).collect())
}

pub async fn count_transactions(pool: &Pool<Sqlite>) -> Result<i64, sqlx::Error> {
    let count = sqlx::query("SELECT COUNT(*) FROM transactions")
        .fetch_one(pool)
        .await?
        .get::<i64, _>(0);

    Ok(count)
}

/// Newest record matching both fields exactly, or None when no row matches.
pub async fn find_latest_by_from_and_type(
    pool: &Pool<Sqlite>,
    currency_from: &str,
    kind: &str,
) -> Result<Option<Transaction>, sqlx::Error> {
    let row = sqlx::query(
        r#"SELECT id, transaction_date, currency_from, amount1, currency_to, amount2, type
           FROM transactions
           WHERE currency_from = ? AND type = ?
           ORDER BY id DESC
           LIMIT 1"#,
    )
    .bind(currency_from)
    .bind(kind)
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(row_to_transaction))
}

fn row_to_transaction(row: &SqliteRow) -> Transaction {
    Transaction {
        id: row.get("id"),
        transaction_date: row.get("transaction_date"),
        currency_from: row.get("currency_from"),
        amount1: row.get("amount1"),
        currency_to: row.get("currency_to"),
        amount2: row.get("amount2"),
        kind: row.get("type"),
    }
}
