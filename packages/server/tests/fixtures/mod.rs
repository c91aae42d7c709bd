//! Test fixtures: an in-process server on an ephemeral port.

#![allow(dead_code)]

use std::{net::SocketAddr, sync::Arc};

use roomfinder_server::{
    domain::RoomRepository,
    infrastructure::{
        database,
        repository::{InMemoryRoomRepository, SqliteRoomRepository},
    },
    ui::{AppState, create_router},
};
use tokio::{net::TcpListener, task::JoinHandle};

pub const DEFAULT_ROOM_ID: i64 = 1;
pub const UPDATED_ROOM_ID: i64 = 2;

pub const DEFAULT_ROOM_NAME: &str = "AAAAA";
pub const UPDATED_ROOM_NAME: &str = "BBBBB";

pub const DEFAULT_ROOM_CAPACITY: i32 = 1;
pub const UPDATED_ROOM_CAPACITY: i32 = 2;

/// Server running on a background task, stopped on drop
pub struct TestServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server backed by the in-memory repository
    pub async fn start() -> Self {
        Self::with_repository(Arc::new(InMemoryRoomRepository::new())).await
    }

    /// Start a server backed by an in-memory SQLite database
    pub async fn start_sqlite() -> Self {
        let pool = database::connect("sqlite::memory:")
            .await
            .expect("Failed to open SQLite database");
        Self::with_repository(Arc::new(SqliteRoomRepository::new(pool))).await
    }

    pub async fn with_repository(repository: Arc<dyn RoomRepository>) -> Self {
        let app = create_router(Arc::new(AppState::new(repository)));
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local address");
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server failed");
        });
        Self { addr, handle }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn rooms_url(&self) -> String {
        format!("{}/api/rooms", self.base_url())
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Default room payload (no id)
pub fn default_room() -> serde_json::Value {
    serde_json::json!({
        "roomId": DEFAULT_ROOM_ID,
        "roomName": DEFAULT_ROOM_NAME,
        "roomCapacity": DEFAULT_ROOM_CAPACITY,
    })
}

/// Number of stored rooms, read from `X-Total-Count`
pub async fn room_count(client: &reqwest::Client, server: &TestServer) -> u64 {
    let response = client
        .get(server.rooms_url())
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    response.headers()["x-total-count"]
        .to_str()
        .expect("X-Total-Count is not text")
        .parse()
        .expect("X-Total-Count is not a number")
}

/// Create a room through the API and return the echoed body
pub async fn create_room(
    client: &reqwest::Client,
    server: &TestServer,
    body: &serde_json::Value,
) -> serde_json::Value {
    let response = client
        .post(server.rooms_url())
        .json(body)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse JSON")
}
