pub mod connection;
pub mod transaction;

pub const INIT_SCHEMA: &str = r#"
-- Create transactions table
CREATE TABLE IF NOT EXISTS transactions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    transaction_date TEXT NOT NULL,
    currency_from TEXT NOT NULL,
    amount1 REAL NOT NULL,
    currency_to TEXT NOT NULL,
    amount2 REAL NOT NULL,
    type TEXT NOT NULL
);

-- Index for "latest rate by currency and type" lookups
CREATE INDEX IF NOT EXISTS idx_transactions_from_type ON transactions(currency_from, type, id);
"#;
