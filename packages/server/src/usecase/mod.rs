//! UseCase 層
//!
//! UI 層から呼び出され、Domain 層の Repository を操作します。

pub mod error;
pub mod room_service;

pub use error::RoomServiceError;
pub use room_service::RoomService;
