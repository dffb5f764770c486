pub mod error;
pub mod route;
pub mod ws;

pub use error::ApiError;
pub use route::create_router;
