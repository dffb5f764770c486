use crate::config::Config;
use crate::notify::Notifier;
use sqlx::SqlitePool;

pub struct AppState {
    pub config: Config,
    pub db_pool: SqlitePool,
    pub notifier: Notifier,
}
