//! Server state shared by the route handlers.

use std::sync::Arc;

use crate::{domain::RoomRepository, usecase::RoomService};

/// Shared application state
pub struct AppState {
    /// Room service, constructed once at startup
    pub room_service: RoomService,
}

impl AppState {
    /// Wire the service on top of the given repository
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self {
            room_service: RoomService::new(repository),
        }
    }
}
