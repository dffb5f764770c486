pub mod api;
pub mod config;
pub mod db;
pub mod models;
pub mod notify;
pub mod ratefeed;
pub mod service;
pub mod state;
pub mod validation;

#[cfg(test)]
pub mod tests;

// Re-export specific items for convenience
pub use api::error::ApiError;
pub use api::route::create_router;
pub use db::connection;
pub use db::transaction;
pub use models::{NewTransaction, Transaction, TransactionPage};
pub use notify::Notifier;
pub use service::ServiceError;
pub use validation::{validate_currency, validate_limit, validate_page};
