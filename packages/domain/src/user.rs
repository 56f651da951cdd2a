//! # ユーザー
//!
//! サービスが扱う唯一のエンティティ。
//!
//! ## 属性
//!
//! - `name`: 任意の文字列（空文字・重複を許容）
//! - `age`: 任意の整数（範囲チェックなし）
//!
//! ## 識別子
//!
//! `UserId` は MongoDB が挿入時に払い出す `ObjectId` をラップした Newtype。
//! URL や JSON では 24 桁の 16 進文字列として表現する。
//! クライアントが送るレコード（[`UserProfile`]）には識別子を含まない。

use bson::oid::ObjectId;
use derive_more::Display;

use crate::DomainError;

/// ユーザーの一意識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display("{_0}")]
pub struct UserId(ObjectId);

impl UserId {
    /// 新しい ID を生成する
    ///
    /// 通常は MongoDB が払い出すため、テストやフェイク実装でのみ使用する。
    pub fn new() -> Self {
        Self(ObjectId::new())
    }

    /// 16 進文字列から ID をパースする
    ///
    /// 24 桁の 16 進数でない場合は `DomainError::Validation` を返す。
    /// 不正な ID をゼロ値に丸めて検索を続けることはしない。
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        ObjectId::parse_str(s)
            .map(Self)
            .map_err(|_| DomainError::Validation(format!("不正なユーザー ID です: {s}")))
    }

    /// 既存の `ObjectId` から ID を作成する
    pub fn from_object_id(oid: ObjectId) -> Self {
        Self(oid)
    }

    /// 内部の `ObjectId` 参照を取得する
    pub fn as_object_id(&self) -> &ObjectId {
        &self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

/// クライアントが指定するユーザーのフィールド集合
///
/// 作成・更新の入力として使用する。更新時はこのフィールド集合で
/// 既存ドキュメントの `name` と `age` を丸ごと上書きする（マージしない）。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub age:  i64,
}

impl UserProfile {
    pub fn new(name: impl Into<String>, age: i64) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

/// 永続化済みのユーザー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id:      UserId,
    profile: UserProfile,
}

impl User {
    pub fn new(id: UserId, profile: UserProfile) -> Self {
        Self { id, profile }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.profile.name
    }

    pub fn age(&self) -> i64 {
        self.profile.age
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }
}
