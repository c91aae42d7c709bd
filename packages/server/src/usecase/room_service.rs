//! UseCase: ルーム管理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - RoomService の各メソッドが Repository へそのまま委譲されること
//! - Repository のエラーが UseCase のエラーへ変換されること
//!
//! ### なぜこのテストが必要か
//! - RoomService は将来のビジネスルールを差し込むための境界
//! - 現時点では値を加工しないことを保証する
//!
//! ### どのような状況を想定しているか
//! - 正常系：作成・更新・取得・削除
//! - 異常系：ストレージ障害

use std::sync::Arc;

use crate::domain::{Page, PageRequest, Room, RoomDraft, RoomId, RoomRepository, Sort};

use super::error::RoomServiceError;

/// ルーム管理のユースケース
pub struct RoomService {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
}

impl RoomService {
    /// 新しい RoomService を作成
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// ルームを保存（id なしなら作成、id ありなら全属性を置き換え）
    pub async fn save(&self, draft: RoomDraft) -> Result<Room, RoomServiceError> {
        Ok(self.repository.save(draft).await?)
    }

    /// 全ルームを取得
    pub async fn find_all(&self, sort: Sort) -> Result<Vec<Room>, RoomServiceError> {
        Ok(self.repository.find_all(sort).await?)
    }

    /// ルームをページ単位で取得
    pub async fn find_page(&self, request: PageRequest) -> Result<Page<Room>, RoomServiceError> {
        Ok(self.repository.find_page(request).await?)
    }

    /// id でルームを取得
    pub async fn find_one(&self, id: RoomId) -> Result<Option<Room>, RoomServiceError> {
        Ok(self.repository.find_one(id).await?)
    }

    /// ルームを削除（存在しなかった場合は false）
    pub async fn delete(&self, id: RoomId) -> Result<bool, RoomServiceError> {
        Ok(self.repository.delete(id).await?)
    }

    /// ルーム数を取得
    pub async fn count(&self) -> Result<u64, RoomServiceError> {
        Ok(self.repository.count().await?)
    }
}
