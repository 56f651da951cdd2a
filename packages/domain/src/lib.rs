//! # Userstore ドメイン層
//!
//! ユーザーレコードのドメインモデルを定義する。
//!
//! ## 依存関係の方向
//!
//! ```text
//! api → infra → domain
//!   ↘           ↗
//!     shared
//! ```
//!
//! ドメイン層はインフラ層（MongoDB ドライバ、HTTP）に依存しない。
//! 識別子の表現にのみ `bson` の `ObjectId` を使用する。
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`user`] - ユーザーエンティティと識別子
//!
//! ## 使用例
//!
//! ```rust
//! use userstore_domain::{DomainError, user::UserId};
//!
//! let id = UserId::parse("65a1b2c3d4e5f60718293a4b").unwrap();
//! assert_eq!(id.to_string(), "65a1b2c3d4e5f60718293a4b");
//!
//! let err = UserId::parse("not-an-id").unwrap_err();
//! assert!(matches!(err, DomainError::Validation(_)));
//! ```

pub mod error;
pub mod user;

pub use error::DomainError;
