//! HTTP server: routing, handlers and the server runner.

pub mod error;
mod handler;
pub mod header;
pub mod router;
mod runner;
mod signal;
pub mod state;

pub use error::ApiError;
pub use router::create_router;
pub use runner::{build_repository, run};
pub use state::AppState;
