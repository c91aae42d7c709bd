//! Room persistence gateway.
//!
//! The domain layer owns this trait; `infrastructure::repository` provides
//! the concrete stores (dependency inversion).

use async_trait::async_trait;

use super::{
    entity::{Room, RoomDraft},
    error::RepositoryError,
    pagination::{Page, PageRequest, Sort},
    value_object::RoomId,
};

/// Create/read/update/delete access to stored rooms
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// All stored rooms in `sort` order (insertion order when unsorted)
    async fn find_all(&self, sort: Sort) -> Result<Vec<Room>, RepositoryError>;

    /// One page of stored rooms and the total number of rooms
    async fn find_page(&self, request: PageRequest) -> Result<Page<Room>, RepositoryError>;

    /// Look up a room by its server identifier
    async fn find_one(&self, id: RoomId) -> Result<Option<Room>, RepositoryError>;

    /// Insert a new room when the draft has no id, otherwise replace the
    /// stored room's attributes.
    ///
    /// A draft whose id is not stored is inserted as a new room under a
    /// freshly assigned id.
    async fn save(&self, draft: RoomDraft) -> Result<Room, RepositoryError>;

    /// Remove a room, returning whether one was removed
    async fn delete(&self, id: RoomId) -> Result<bool, RepositoryError>;

    /// Number of stored rooms
    async fn count(&self) -> Result<u64, RepositoryError>;
}
