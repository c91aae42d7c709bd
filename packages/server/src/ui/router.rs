//! Router construction.

use std::sync::Arc;

use axum::{
    Router,
    extract::Request,
    routing::{get, post},
};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnResponse, TraceLayer},
};

use super::{
    handler::{create_room, delete_room, get_room, health_check, list_rooms, update_room},
    state::AppState,
};

/// Build the application router with tracing and request-id middleware
pub fn create_router(state: Arc<AppState>) -> Router {
    let trace = TraceLayer::new_for_http()
        .make_span_with(|request: &Request| {
            let request_id = request
                .headers()
                .get("x-request-id")
                .and_then(|value| value.to_str().ok())
                .unwrap_or_default();
            tracing::info_span!(
                "request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = %request_id,
            )
        })
        .on_response(DefaultOnResponse::new().level(tracing::Level::INFO));

    Router::new()
        .route("/api/health", get(health_check))
        .route(
            "/api/rooms",
            post(create_room).put(update_room).get(list_rooms),
        )
        .route("/api/rooms/{id}", get(get_room).delete(delete_room))
        .layer(trace)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .with_state(state)
}
