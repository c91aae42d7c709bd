//! Shared utilities for Room Finder.
//!
//! Logging bootstrap and time helpers used by the server binary.

pub mod logger;
pub mod time;

pub use logger::setup_logger;
