//! SQLite Room Repository

use async_trait::async_trait;
use sqlx::{SqliteConnection, SqlitePool};

use crate::domain::{
    Page, PageRequest, RepositoryError, Room, RoomDraft, RoomId, RoomName, RoomRepository, Sort,
    SortDirection, SortProperty,
};

const COLUMNS: &str = "id, room_id, room_name, room_capacity";

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        RepositoryError::Storage(err.to_string())
    }
}

/// Row of the `room` table
#[derive(Debug, sqlx::FromRow)]
struct RoomRow {
    id: i64,
    room_id: Option<i64>,
    room_name: String,
    room_capacity: Option<i32>,
}

impl TryFrom<RoomRow> for Room {
    type Error = RepositoryError;

    fn try_from(row: RoomRow) -> Result<Self, Self::Error> {
        let id = RoomId::new(row.id).map_err(|e| RepositoryError::Storage(e.to_string()))?;
        let name =
            RoomName::new(row.room_name).map_err(|e| RepositoryError::Storage(e.to_string()))?;
        Ok(Room::new(id, row.room_id, name, row.room_capacity))
    }
}

fn column(property: SortProperty) -> &'static str {
    match property {
        SortProperty::Id => "id",
        SortProperty::RoomNumber => "room_id",
        SortProperty::Name => "room_name",
        SortProperty::Capacity => "room_capacity",
    }
}

/// ORDER BY clause for `sort`, ending with `id ASC` as the tie breaker.
///
/// Columns come from a fixed whitelist, never from caller input.
fn order_by(sort: &Sort) -> String {
    let mut terms: Vec<String> = sort
        .orders()
        .iter()
        .map(|order| {
            let direction = match order.direction {
                SortDirection::Asc => "ASC",
                SortDirection::Desc => "DESC",
            };
            format!("{} {}", column(order.property), direction)
        })
        .collect();
    terms.push("id ASC".to_string());
    terms.join(", ")
}

fn into_rooms(rows: Vec<RoomRow>) -> Result<Vec<Room>, RepositoryError> {
    rows.into_iter().map(Room::try_from).collect()
}

/// Room repository backed by a SQLite pool
#[derive(Debug, Clone)]
pub struct SqliteRoomRepository {
    pool: SqlitePool,
}

impl SqliteRoomRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

async fn insert(conn: &mut SqliteConnection, draft: &RoomDraft) -> Result<Room, RepositoryError> {
    let row = sqlx::query_as::<_, RoomRow>(&format!(
        "INSERT INTO room (room_id, room_name, room_capacity) VALUES (?, ?, ?) RETURNING {COLUMNS}"
    ))
    .bind(draft.room_number)
    .bind(draft.name.as_str())
    .bind(draft.capacity)
    .fetch_one(&mut *conn)
    .await?;
    Room::try_from(row)
}

/// Replace the attributes of room `id`, `None` when it is not stored
async fn update(
    conn: &mut SqliteConnection,
    id: RoomId,
    draft: &RoomDraft,
) -> Result<Option<Room>, RepositoryError> {
    let row = sqlx::query_as::<_, RoomRow>(&format!(
        "UPDATE room SET room_id = ?, room_name = ?, room_capacity = ? WHERE id = ? RETURNING {COLUMNS}"
    ))
    .bind(draft.room_number)
    .bind(draft.name.as_str())
    .bind(draft.capacity)
    .bind(id.value())
    .fetch_optional(&mut *conn)
    .await?;
    row.map(Room::try_from).transpose()
}

async fn count_rows(conn: &mut SqliteConnection) -> Result<u64, RepositoryError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM room")
        .fetch_one(&mut *conn)
        .await?;
    Ok(u64::try_from(count).unwrap_or_default())
}

#[async_trait]
impl RoomRepository for SqliteRoomRepository {
    async fn find_all(&self, sort: Sort) -> Result<Vec<Room>, RepositoryError> {
        let rows = sqlx::query_as::<_, RoomRow>(&format!(
            "SELECT {COLUMNS} FROM room ORDER BY {}",
            order_by(&sort)
        ))
        .fetch_all(&self.pool)
        .await?;
        into_rooms(rows)
    }

    async fn find_page(&self, request: PageRequest) -> Result<Page<Room>, RepositoryError> {
        // 総件数とページ内容を同じスナップショットから読む
        let mut tx = self.pool.begin().await?;
        let total = count_rows(&mut tx).await?;
        let offset = i64::try_from(request.offset()).unwrap_or(i64::MAX);
        let rows = sqlx::query_as::<_, RoomRow>(&format!(
            "SELECT {COLUMNS} FROM room ORDER BY {} LIMIT ? OFFSET ?",
            order_by(&request.sort)
        ))
        .bind(i64::from(request.size))
        .bind(offset)
        .fetch_all(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(Page::new(into_rooms(rows)?, total, &request))
    }

    async fn find_one(&self, id: RoomId) -> Result<Option<Room>, RepositoryError> {
        let row = sqlx::query_as::<_, RoomRow>(&format!("SELECT {COLUMNS} FROM room WHERE id = ?"))
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await?;
        row.map(Room::try_from).transpose()
    }

    async fn save(&self, draft: RoomDraft) -> Result<Room, RepositoryError> {
        let Some(id) = draft.id else {
            let mut conn = self.pool.acquire().await?;
            return insert(&mut conn, &draft).await;
        };

        // 未登録の id は新規 id で登録する
        let mut tx = self.pool.begin().await?;
        let room = match update(&mut tx, id, &draft).await? {
            Some(room) => room,
            None => insert(&mut tx, &draft).await?,
        };
        tx.commit().await?;
        Ok(room)
    }

    async fn delete(&self, id: RoomId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM room WHERE id = ?")
            .bind(id.value())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let mut conn = self.pool.acquire().await?;
        count_rows(&mut conn).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{domain::SortOrder, infrastructure::database};

    async fn test_repository() -> SqliteRoomRepository {
        let pool = database::connect("sqlite::memory:").await.unwrap();
        SqliteRoomRepository::new(pool)
    }

    fn draft(number: Option<i64>, name: &str, capacity: Option<i32>) -> RoomDraft {
        RoomDraft::new(number, RoomName::new(name.to_string()).unwrap(), capacity)
    }

    #[test]
    fn test_order_by_appends_tie_breaker() {
        // テスト項目: ORDER BY 句は指定順の後に id 昇順が付与される
        // given (前提条件):
        let sort = Sort::by(vec![
            SortOrder::desc(SortProperty::Capacity),
            SortOrder::asc(SortProperty::Name),
        ]);

        // then (期待する結果):
        assert_eq!(order_by(&sort), "room_capacity DESC, room_name ASC, id ASC");
        assert_eq!(order_by(&Sort::unsorted()), "id ASC");
    }

    #[tokio::test]
    async fn test_insert_and_find_one() {
        // テスト項目: 保存したルームを id で取得でき、全属性が一致する
        // given (前提条件):
        let repo = test_repository().await;

        // when (操作):
        let stored = repo.save(draft(Some(1), "AAAAA", Some(1))).await.unwrap();
        let found = repo.find_one(stored.id).await.unwrap();

        // then (期待する結果):
        assert_eq!(stored.room_number, Some(1));
        assert_eq!(stored.name.as_str(), "AAAAA");
        assert_eq!(stored.capacity, Some(1));
        assert_eq!(found, Some(stored));
    }

    #[tokio::test]
    async fn test_nullable_columns_round_trip() {
        // テスト項目: roomId と roomCapacity は null のまま保存できる
        // given (前提条件):
        let repo = test_repository().await;

        // when (操作):
        let stored = repo.save(draft(None, "", None)).await.unwrap();
        let found = repo.find_one(stored.id).await.unwrap().unwrap();

        // then (期待する結果):
        assert_eq!(found.room_number, None);
        assert_eq!(found.capacity, None);
        assert_eq!(found.name.as_str(), "");
    }

    #[tokio::test]
    async fn test_update_replaces_attributes() {
        // テスト項目: 更新で全属性が置き換わり、件数は変わらない
        // given (前提条件):
        let repo = test_repository().await;
        let stored = repo.save(draft(Some(1), "AAAAA", Some(1))).await.unwrap();

        // when (操作):
        let updated = repo
            .save(draft(Some(2), "BBBBB", Some(2)).with_id(stored.id))
            .await
            .unwrap();

        // then (期待する結果):
        assert_eq!(updated.id, stored.id);
        assert_eq!(updated.room_number, Some(2));
        assert_eq!(updated.name.as_str(), "BBBBB");
        assert_eq!(updated.capacity, Some(2));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_update_unknown_id_inserts_with_new_id() {
        // テスト項目: 存在しない id の更新は新しい id で登録される
        // given (前提条件):
        let repo = test_repository().await;
        let unknown = RoomId::new(12345).unwrap();

        // when (操作):
        let saved = repo
            .save(draft(Some(1), "AAAAA", Some(1)).with_id(unknown))
            .await
            .unwrap();

        // then (期待する結果):
        assert_ne!(saved.id, unknown);
        assert_eq!(saved.name.as_str(), "AAAAA");
        assert_eq!(repo.count().await.unwrap(), 1);
        assert_eq!(repo.find_one(unknown).await.unwrap(), None);
        assert_eq!(repo.find_one(saved.id).await.unwrap(), Some(saved));
    }

    #[tokio::test]
    async fn test_delete() {
        // テスト項目: 削除すると件数が 1 減り、2 回目の削除は false を返す
        // given (前提条件):
        let repo = test_repository().await;
        let stored = repo.save(draft(Some(1), "AAAAA", Some(1))).await.unwrap();

        // when (操作):
        let first = repo.delete(stored.id).await.unwrap();
        let second = repo.delete(stored.id).await.unwrap();

        // then (期待する結果):
        assert!(first);
        assert!(!second);
        assert_eq!(repo.count().await.unwrap(), 0);
        assert_eq!(repo.find_one(stored.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_find_all_and_page_sorted() {
        // テスト項目: ソート・ページングが SQL 側で適用される
        // given (前提条件):
        let repo = test_repository().await;
        repo.save(draft(Some(3), "C", Some(10))).await.unwrap();
        repo.save(draft(Some(1), "A", None)).await.unwrap();
        repo.save(draft(Some(2), "B", Some(5))).await.unwrap();

        // when (操作):
        let by_capacity = repo
            .find_all(Sort::by(vec![SortOrder::desc(SortProperty::Capacity)]))
            .await
            .unwrap();
        let page = repo
            .find_page(PageRequest::new(
                0,
                2,
                Sort::by(vec![SortOrder::asc(SortProperty::Name)]),
            ))
            .await
            .unwrap();

        // then (期待する結果):
        let capacities: Vec<Option<i32>> = by_capacity.iter().map(|r| r.capacity).collect();
        assert_eq!(capacities, vec![Some(10), Some(5), None]);

        let names: Vec<&str> = page.content.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(page.total, 3);
        assert!(page.has_next());
    }
}
