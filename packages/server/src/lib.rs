//! Room finder REST service library.
//!
//! Layers, leaf first: `domain` (room model and persistence gateway trait),
//! `infrastructure` (SQLite and in-memory stores, HTTP DTOs), `usecase`
//! (room service) and `ui` (axum router and handlers).

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use config::ServerConfig;
pub use ui::run as run_server;
