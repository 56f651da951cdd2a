//! # リポジトリ実装
//!
//! - **依存性逆転**: ユースケース層はトレイトにのみ依存する
//! - **テスタビリティ**: トレイト経由でフェイク実装に差し替え可能

pub mod user_repository;

pub use user_repository::{MongoUserRepository, USER_COLLECTION, UserRepository};
