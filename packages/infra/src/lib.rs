//! # Userstore インフラ層
//!
//! MongoDB との接続・通信を担当するインフラストラクチャ層。
//!
//! ## 責務
//!
//! - **データベース接続**: MongoDB クライアント（内部に接続プールを持つ）の作成
//! - **リポジトリ実装**: ユーザーコレクションへの CRUD
//! - **ヘルスチェック**: `ping` コマンドによる疎通確認
//!
//! ## モジュール構成
//!
//! - [`db`] - MongoDB 接続管理
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリ実装
//! - `fake` - テスト用インメモリ実装（`test-utils` feature）
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use userstore_infra::{db, repository::MongoUserRepository};
//!
//! async fn setup() -> Result<(), userstore_infra::InfraError> {
//!     // 起動時に一度だけ接続し、以降はクローンしたハンドルを共有する
//!     let database = db::connect("mongodb://localhost:27017", "userstore").await?;
//!     let repository = MongoUserRepository::new(&database);
//!     Ok(())
//! }
//! ```

pub mod db;
pub mod error;
pub mod repository;

#[cfg(any(test, feature = "test-utils"))]
pub mod fake;

pub use db::{HealthChecker, MongoHealthChecker};
pub use error::{InfraError, InfraErrorKind};
