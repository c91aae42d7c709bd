//! Handler modules for HTTP endpoints.

pub mod http;
pub mod room;

// Re-export HTTP handlers
pub use http::health_check;
pub use room::{create_room, delete_room, get_room, list_rooms, update_room};
