//! Domain layer for the room finder.
//!
//! This module contains the room model, its validation rules and the
//! persistence gateway trait. It is independent of HTTP DTOs and of any
//! concrete storage.

pub mod entity;
pub mod error;
pub mod pagination;
pub mod repository;
pub mod value_object;

pub use entity::{Room, RoomDraft};
pub use error::{Constraint, RepositoryError, ValidationError, ValueObjectError};
pub use pagination::{Page, PageRequest, Sort, SortDirection, SortOrder, SortProperty};
pub use repository::RoomRepository;
pub use value_object::{RoomId, RoomName};
