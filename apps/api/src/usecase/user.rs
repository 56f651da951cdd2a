//! ユーザー CRUD ユースケース

use std::sync::Arc;

use userstore_domain::{
    DomainError,
    user::{User, UserId, UserProfile},
};
use userstore_infra::repository::UserRepository;

use crate::error::ApiError;

/// ユーザー CRUD ユースケース
pub struct UserUseCaseImpl {
    user_repository: Arc<dyn UserRepository>,
}

impl UserUseCaseImpl {
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// 全ユーザーを取得する
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let users = self.user_repository.find_all().await?;
        Ok(users)
    }

    /// ID でユーザーを取得する
    ///
    /// 存在しない場合は `NotFound`。
    pub async fn get_user(&self, id: &UserId) -> Result<User, ApiError> {
        self.user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// ユーザーを作成する
    ///
    /// 挿入後に払い出された ID で読み直し、ストア上の内容を返す。
    pub async fn create_user(&self, profile: UserProfile) -> Result<User, ApiError> {
        let id = self.user_repository.insert(&profile).await?;
        tracing::debug!(%id, "ユーザーを作成しました");

        self.get_user(&id).await
    }

    /// ユーザーの `name` と `age` を上書きする
    ///
    /// 更新後に読み直した内容を返す。
    /// 該当ドキュメントがない場合もエラーにせず、リクエストの内容をそのまま返す
    /// （ドキュメントは作成しない）。
    pub async fn update_user(&self, id: &UserId, profile: UserProfile) -> Result<User, ApiError> {
        let matched = self.user_repository.update(id, &profile).await?;
        if !matched {
            tracing::debug!(%id, "更新対象のユーザーが存在しません");
            return Ok(User::new(*id, profile));
        }

        self.get_user(id).await
    }

    /// ユーザーを削除する
    ///
    /// 該当ドキュメントがなくても成功とし、削除件数を返す。
    pub async fn delete_user(&self, id: &UserId) -> Result<u64, ApiError> {
        let deleted = self.user_repository.delete(id).await?;
        tracing::debug!(%id, deleted, "ユーザー削除を実行しました");

        Ok(deleted)
    }
}

fn not_found(id: &UserId) -> ApiError {
    DomainError::NotFound {
        entity_type: "User",
        id:          id.to_string(),
    }
    .into()
}
