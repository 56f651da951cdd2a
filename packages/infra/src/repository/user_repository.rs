//! # UserRepository
//!
//! `user` コレクションの永続化を担当するリポジトリ。
//!
//! ## ドキュメント形状
//!
//! ```text
//! { _id: ObjectId, name: String, age: Int64 }
//! ```
//!
//! 他のクライアントが書き込んだ `Int32` の `age` や、欠落したフィールドも
//! 読み取れる（欠落時はゼロ値になる）。

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Collection,
    Database,
    bson::{doc, oid::ObjectId},
};
use serde::{Deserialize, Serialize};
use userstore_domain::user::{User, UserId, UserProfile};

use crate::error::InfraError;

/// ユーザーを格納するコレクション名
pub const USER_COLLECTION: &str = "user";

/// ユーザーリポジトリトレイト
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 全ユーザーを取得する
    ///
    /// フィルタ・ページングなし。順序はストアの自然順。
    /// 1 件でもデコードに失敗した場合は全体をエラーにする。
    async fn find_all(&self) -> Result<Vec<User>, InfraError>;

    /// ID でユーザーを検索する
    ///
    /// - `Ok(Some(user))`: 見つかった場合
    /// - `Ok(None)`: 見つからない場合
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, InfraError>;

    /// ユーザーを挿入し、ストアが払い出した ID を返す
    async fn insert(&self, profile: &UserProfile) -> Result<UserId, InfraError>;

    /// `name` と `age` を `$set` で上書きする
    ///
    /// 該当ドキュメントが存在した場合は `true` を返す
    /// （値が変わらなかった場合も `true`）。
    async fn update(&self, id: &UserId, profile: &UserProfile) -> Result<bool, InfraError>;

    /// ユーザーを削除し、削除件数（0 または 1）を返す
    async fn delete(&self, id: &UserId) -> Result<u64, InfraError>;
}

/// `user` コレクションのドキュメント
#[derive(Debug, Serialize, Deserialize)]
struct UserDocument {
    #[serde(rename = "_id")]
    id:   ObjectId,
    #[serde(default)]
    name: String,
    #[serde(default)]
    age:  i64,
}

impl UserDocument {
    fn into_user(self) -> User {
        User::new(
            UserId::from_object_id(self.id),
            UserProfile::new(self.name, self.age),
        )
    }
}

/// 挿入用ドキュメント（`_id` はストアが払い出す）
#[derive(Debug, Serialize)]
struct NewUserDocument {
    name: String,
    age:  i64,
}

/// MongoDB 実装の UserRepository
#[derive(Debug, Clone)]
pub struct MongoUserRepository {
    collection: Collection<UserDocument>,
}

impl MongoUserRepository {
    /// 新しいリポジトリインスタンスを作成
    ///
    /// `Collection` はクライアントの接続プールを共有するため、
    /// 起動時に一度作成して使い回す。
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(USER_COLLECTION),
        }
    }

    fn id_filter(id: &UserId) -> mongodb::bson::Document {
        doc! { "_id": *id.as_object_id() }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<User>, InfraError> {
        // cursor はスコープ終了時（エラー時を含む）にドロップされ、サーバー側も解放される
        let mut cursor = self.collection.find(doc! {}).await?;

        let mut users = Vec::new();
        while let Some(document) = cursor.try_next().await? {
            users.push(document.into_user());
        }

        Ok(users)
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, InfraError> {
        let document = self.collection.find_one(Self::id_filter(id)).await?;

        Ok(document.map(UserDocument::into_user))
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn insert(&self, profile: &UserProfile) -> Result<UserId, InfraError> {
        let document = NewUserDocument {
            name: profile.name.clone(),
            age:  profile.age,
        };

        let result = self
            .collection
            .clone_with_type::<NewUserDocument>()
            .insert_one(&document)
            .await?;

        let oid = result.inserted_id.as_object_id().ok_or_else(|| {
            InfraError::unexpected(format!(
                "inserted_id が ObjectId ではありません: {}",
                result.inserted_id
            ))
        })?;

        Ok(UserId::from_object_id(oid))
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn update(&self, id: &UserId, profile: &UserProfile) -> Result<bool, InfraError> {
        let update = doc! {
            "$set": {
                "name": profile.name.as_str(),
                "age": profile.age,
            }
        };

        let result = self
            .collection
            .update_one(Self::id_filter(id), update)
            .await?;

        Ok(result.matched_count > 0)
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: &UserId) -> Result<u64, InfraError> {
        let result = self.collection.delete_one(Self::id_filter(id)).await?;

        Ok(result.deleted_count)
    }
}
