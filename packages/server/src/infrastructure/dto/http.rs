//! HTTP API request/response DTOs for the room finder.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{
    PageRequest, Room, RoomDraft, RoomName, Sort, SortDirection, SortOrder, SortProperty,
    ValidationError, pagination::DEFAULT_PAGE_SIZE,
};

/// Object name reported in field errors
pub const ROOM_OBJECT_NAME: &str = "room";

/// Room as exchanged in JSON bodies
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDto {
    pub id: Option<i64>,
    pub room_id: Option<i64>,
    pub room_name: Option<String>,
    pub room_capacity: Option<i32>,
}

impl RoomDto {
    /// Check the required fields and build a draft without an id.
    ///
    /// The `id` field is left to the caller, which decides between create
    /// and update.
    pub fn validate(self) -> Result<RoomDraft, ValidationError> {
        let room_name = self
            .room_name
            .ok_or_else(|| ValidationError::not_null(ROOM_OBJECT_NAME, "roomName"))?;
        // RoomName only rejects oversized names
        let name = RoomName::new(room_name)
            .map_err(|_| ValidationError::size(ROOM_OBJECT_NAME, "roomName"))?;
        Ok(RoomDraft::new(self.room_id, name, self.room_capacity))
    }
}

impl From<Room> for RoomDto {
    fn from(room: Room) -> Self {
        Self {
            id: Some(room.id.value()),
            room_id: room.room_number,
            room_name: Some(room.name.into_string()),
            room_capacity: room.capacity,
        }
    }
}

/// Error body returned with every 4xx/5xx response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDto {
    /// Machine readable key, e.g. `error.validation`
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub field_errors: Vec<FieldErrorDto>,
}

/// One violated field constraint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldErrorDto {
    pub object_name: String,
    pub field: String,
    pub message: String,
}

impl From<&ValidationError> for FieldErrorDto {
    fn from(err: &ValidationError) -> Self {
        Self {
            object_name: err.object_name.to_string(),
            field: err.field.to_string(),
            message: err.constraint.as_str().to_string(),
        }
    }
}

/// Malformed list query parameters
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Parameter '{param}' must be a non-negative integer (got '{value}')")]
    InvalidNumber { param: &'static str, value: String },

    #[error("Unknown sort property '{0}'")]
    UnknownSortProperty(String),

    #[error("Sort parameter must name at least one property")]
    EmptySort,
}

/// What a `GET /api/rooms` call asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListRequest {
    /// Every room, in the given order
    All(Sort),
    /// One page of rooms
    Page(PageRequest),
}

impl ListRequest {
    /// Parse decoded query pairs.
    ///
    /// `sort` may repeat; each value is `prop[,prop...][,asc|desc]`.
    /// Paging applies only when `page` or `size` is present.
    /// Unknown parameters are ignored.
    pub fn from_query_pairs(pairs: &[(String, String)]) -> Result<Self, QueryError> {
        let mut sort = Sort::unsorted();
        let mut page: Option<u32> = None;
        let mut size: Option<u32> = None;

        for (key, value) in pairs {
            match key.as_str() {
                "sort" => parse_sort(value, &mut sort)?,
                "page" => page = Some(parse_number("page", value)?),
                "size" => size = Some(parse_number("size", value)?),
                _ => {}
            }
        }

        if page.is_none() && size.is_none() {
            return Ok(Self::All(sort));
        }
        Ok(Self::Page(PageRequest::new(
            page.unwrap_or(0),
            size.unwrap_or(DEFAULT_PAGE_SIZE),
            sort,
        )))
    }
}

fn parse_number(param: &'static str, value: &str) -> Result<u32, QueryError> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| QueryError::InvalidNumber {
            param,
            value: value.to_string(),
        })
}

fn parse_sort(value: &str, sort: &mut Sort) -> Result<(), QueryError> {
    let mut tokens: Vec<&str> = value
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect();

    let direction = match tokens.last().and_then(|t| SortDirection::parse(t)) {
        Some(direction) => {
            tokens.pop();
            direction
        }
        None => SortDirection::Asc,
    };

    if tokens.is_empty() {
        return Err(QueryError::EmptySort);
    }

    for token in tokens {
        let property = SortProperty::from_wire_name(token)
            .ok_or_else(|| QueryError::UnknownSortProperty(token.to_string()))?;
        sort.push(SortOrder {
            property,
            direction,
        });
    }
    Ok(())
}
