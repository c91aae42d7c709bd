//! InMemory Room Repository 実装
//!
//! ドメイン層が定義する RoomRepository trait の具体的な実装。
//! BTreeMap をインメモリ DB として使用します。
//!
//! id は単調増加するシーケンスから払い出し、削除後も再利用しません
//! （SQLite の AUTOINCREMENT と同じ挙動）。

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    Page, PageRequest, RepositoryError, Room, RoomDraft, RoomId, RoomRepository, Sort,
};

#[derive(Debug, Default)]
struct Store {
    rooms: BTreeMap<RoomId, Room>,
    /// Last assigned id
    sequence: i64,
}

impl Store {
    fn next_id(&mut self) -> Result<RoomId, RepositoryError> {
        let value = self
            .sequence
            .checked_add(1)
            .ok_or_else(|| RepositoryError::Storage("room id sequence exhausted".to_string()))?;
        let id = RoomId::new(value).map_err(|e| RepositoryError::Storage(e.to_string()))?;
        self.sequence = value;
        Ok(id)
    }

    fn sorted(&self, sort: &Sort) -> Vec<Room> {
        let mut rooms: Vec<Room> = self.rooms.values().cloned().collect();
        rooms.sort_by(|a, b| sort.compare(a, b));
        rooms
    }
}

/// インメモリ Room Repository 実装
///
/// ドメイン層の RoomRepository trait を実装します（依存性の逆転）。
#[derive(Debug, Default)]
pub struct InMemoryRoomRepository {
    store: Mutex<Store>,
}

impl InMemoryRoomRepository {
    /// 新しい InMemoryRoomRepository を作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn find_all(&self, sort: Sort) -> Result<Vec<Room>, RepositoryError> {
        let store = self.store.lock().await;
        Ok(store.sorted(&sort))
    }

    async fn find_page(&self, request: PageRequest) -> Result<Page<Room>, RepositoryError> {
        let store = self.store.lock().await;
        let total = store.rooms.len() as u64;
        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let content = store
            .sorted(&request.sort)
            .into_iter()
            .skip(offset)
            .take(request.size as usize)
            .collect();
        Ok(Page::new(content, total, &request))
    }

    async fn find_one(&self, id: RoomId) -> Result<Option<Room>, RepositoryError> {
        let store = self.store.lock().await;
        Ok(store.rooms.get(&id).cloned())
    }

    async fn save(&self, draft: RoomDraft) -> Result<Room, RepositoryError> {
        let mut store = self.store.lock().await;
        let existing = match draft.id {
            Some(id) => store.rooms.get_mut(&id),
            None => None,
        };
        if let Some(room) = existing {
            room.apply(draft);
            return Ok(room.clone());
        }

        // 未登録の id は新規 id で登録する
        let id = store.next_id()?;
        let room = draft.into_room(id);
        store.rooms.insert(id, room.clone());
        Ok(room)
    }

    async fn delete(&self, id: RoomId) -> Result<bool, RepositoryError> {
        let mut store = self.store.lock().await;
        Ok(store.rooms.remove(&id).is_some())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let store = self.store.lock().await;
        Ok(store.rooms.len() as u64)
    }
}
