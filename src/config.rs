use dotenv::dotenv;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub rate_feed_url: String,
    pub rate_feed_access_key: String,
    pub rate_feed_symbols: String,
    pub rate_feed_timeout_secs: u64,
    pub poll_interval: Duration,
    pub notify_capacity: usize,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:exchange.db".to_string());
        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080);
        let rate_feed_url =
            env::var("RATE_FEED_URL").unwrap_or_else(|_| "http://api.coinlayer.com".to_string());
        let rate_feed_access_key = env::var("RATE_FEED_ACCESS_KEY").unwrap_or_default();
        let rate_feed_symbols =
            env::var("RATE_FEED_SYMBOLS").unwrap_or_else(|_| "BTC,ETH,XRP".to_string());
        let rate_feed_timeout_secs = env::var("RATE_FEED_TIMEOUT_SECS")
            .map(|v| v.parse().unwrap_or(30))
            .unwrap_or(30);
        let poll_interval = env::var("POLL_INTERVAL_SECS")
            .unwrap_or_else(|_| "300".to_string())
            .parse()
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(300));
        let notify_capacity = env::var("NOTIFY_CHANNEL_CAPACITY")
            .map(|v| v.parse().unwrap_or(128))
            .unwrap_or(128);

        Self {
            database_url,
            server_host,
            server_port,
            rate_feed_url,
            rate_feed_access_key,
            rate_feed_symbols,
            rate_feed_timeout_secs,
            poll_interval,
            notify_capacity,
        }
    }
}
