pub mod client;
pub mod models;
pub mod poller;

pub use client::{FeedError, RateFeedClient};
pub use models::{extract_live_transactions, LiveRates};
