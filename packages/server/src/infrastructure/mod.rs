//! Infrastructure layer: storage backends and wire DTOs.

pub mod database;
pub mod dto;
pub mod repository;
