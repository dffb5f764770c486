use crate::models::{NewTransaction, LIVE_PRICE};
use serde::Deserialize;
use std::collections::HashMap;

/// Price feed response: a shared timestamp and quote currency, plus one
/// numeric quote per requested symbol.
#[derive(Debug, Deserialize)]
pub struct LiveRates {
    pub timestamp: i64,
    pub target: String,
    pub rates: HashMap<String, f64>,
}

/// Map a feed response into transaction-shaped live price records: one unit
/// of the quoted asset against the feed's quote currency, stamped with the
/// feed timestamp passed through unparsed.
pub fn extract_live_transactions(rates: &LiveRates) -> Vec<NewTransaction> {
    rates
        .rates
        .iter()
        .map(|(symbol, quote)| NewTransaction {
            transaction_date: rates.timestamp.to_string(),
            currency_from: symbol.clone(),
            amount1: 1.0,
            currency_to: rates.target.clone(),
            amount2: *quote,
            kind: LIVE_PRICE.to_string(),
        })
        .collect()
}
