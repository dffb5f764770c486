use serde::{Deserialize, Serialize};

/// Provenance tag for user-submitted exchanges.
pub const EXCHANGED: &str = "EXCHANGED";
/// Provenance tag for poller-generated price snapshots.
pub const LIVE_PRICE: &str = "LIVE_PRICE";

/// A persisted exchange record. The store assigns the id on insert;
/// descending id is the canonical newest-first order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    pub transaction_date: String,
    pub currency_from: String,
    pub amount1: f64,
    pub currency_to: String,
    pub amount2: f64,
    // Open tag, not an enum: unknown values round-trip untouched.
    #[serde(rename = "type")]
    pub kind: String,
}

/// Insert payload: the six caller-supplied fields, stored verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub transaction_date: String,
    pub currency_from: String,
    pub amount1: f64,
    pub currency_to: String,
    pub amount2: f64,
    #[serde(rename = "type")]
    pub kind: String,
}

impl NewTransaction {
    pub fn into_persisted(self, id: i64) -> Transaction {
        Transaction {
            id,
            transaction_date: self.transaction_date,
            currency_from: self.currency_from,
            amount1: self.amount1,
            currency_to: self.currency_to,
            amount2: self.amount2,
            kind: self.kind,
        }
    }
}

// API response models
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPage {
    pub total_transactions: i64,
    pub total_pages: i64,
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: i64,
}
