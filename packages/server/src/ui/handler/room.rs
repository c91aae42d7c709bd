//! REST handlers for the room resource.

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::{HeaderValue, StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};

use crate::{
    domain::{RoomDraft, RoomId},
    infrastructure::dto::http::{ListRequest, RoomDto},
    ui::{error::ApiError, header, state::AppState},
};

/// Base path of the room resource
pub const ROOMS_PATH: &str = "/api/rooms";

async fn create(state: &AppState, draft: RoomDraft) -> Result<Response, ApiError> {
    let room = state.room_service.save(draft).await?;
    tracing::info!("Room {} created", room.id);

    let mut headers = header::entity_creation_alert(room.id);
    let location = format!("{ROOMS_PATH}/{}", room.id);
    if let Ok(value) = HeaderValue::from_str(&location) {
        headers.insert(LOCATION, value);
    }
    Ok((StatusCode::CREATED, headers, Json(RoomDto::from(room))).into_response())
}

/// POST /api/rooms
pub async fn create_room(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RoomDto>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(dto) = payload?;
    tracing::debug!("REST request to save Room : {:?}", dto);

    let id = dto.id;
    let draft = dto.validate()?;
    if id.is_some() {
        return Err(ApiError::IdExists);
    }
    create(&state, draft).await
}

/// PUT /api/rooms
///
/// A body without an id is created instead (201). An id that is not stored
/// is saved as a new room under a fresh id (200).
pub async fn update_room(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RoomDto>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(dto) = payload?;
    tracing::debug!("REST request to update Room : {:?}", dto);

    let id = dto.id;
    let draft = dto.validate()?;
    let Some(id) = id else {
        return create(&state, draft).await;
    };
    // Ids below 1 are never stored
    let draft = match RoomId::new(id) {
        Ok(id) => draft.with_id(id),
        Err(_) => draft,
    };

    let room = state.room_service.save(draft).await?;
    tracing::info!("Room {} updated", room.id);
    Ok((
        StatusCode::OK,
        header::entity_update_alert(room.id),
        Json(RoomDto::from(room)),
    )
        .into_response())
}

/// GET /api/rooms
pub async fn list_rooms(
    State(state): State<Arc<AppState>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(pairs) = query?;
    tracing::debug!("REST request to get Rooms : {:?}", pairs);

    match ListRequest::from_query_pairs(&pairs)? {
        ListRequest::All(sort) => {
            let rooms = state.room_service.find_all(sort).await?;
            let headers = header::total_count(rooms.len() as u64);
            let body: Vec<RoomDto> = rooms.into_iter().map(RoomDto::from).collect();
            Ok((StatusCode::OK, headers, Json(body)).into_response())
        }
        ListRequest::Page(request) => {
            let page = state.room_service.find_page(request).await?;
            let headers = header::pagination(&page, ROOMS_PATH);
            let body: Vec<RoomDto> = page.content.into_iter().map(RoomDto::from).collect();
            Ok((StatusCode::OK, headers, Json(body)).into_response())
        }
    }
}

/// GET /api/rooms/{id}
pub async fn get_room(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<RoomDto>, ApiError> {
    let Path(raw_id) = path?;
    tracing::debug!("REST request to get Room : {}", raw_id);

    // Ids below 1 are never assigned
    let id = RoomId::new(raw_id).map_err(|_| ApiError::NotFound(raw_id.to_string()))?;
    state
        .room_service
        .find_one(id)
        .await?
        .map(|room| Json(RoomDto::from(room)))
        .ok_or_else(|| ApiError::NotFound(id.to_string()))
}

/// DELETE /api/rooms/{id}
///
/// Deleting a room that does not exist still succeeds.
pub async fn delete_room(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path(raw_id) = path?;
    tracing::debug!("REST request to delete Room : {}", raw_id);

    let deleted = match RoomId::new(raw_id) {
        Ok(id) => state.room_service.delete(id).await?,
        Err(_) => false,
    };
    if !deleted {
        tracing::debug!("Room {} was already absent", raw_id);
    }
    Ok((StatusCode::OK, header::entity_deletion_alert(raw_id)).into_response())
}
