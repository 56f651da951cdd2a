//! # Userstore API サーバー
//!
//! ユーザーレコードの CRUD を HTTP で公開するサーバー。
//!
//! ## アーキテクチャ
//!
//! ```text
//! ┌─────────┐    ┌─────────┐    ┌─────────┐    ┌────────────┐    ┌─────────┐
//! │ Router  │───▶│ Handler │───▶│ UseCase │───▶│ Repository │───▶│ MongoDB │
//! └─────────┘    └─────────┘    └─────────┘    └────────────┘    └─────────┘
//! ```
//!
//! MongoDB クライアントは起動時に一度だけ作成し、State 経由で各ハンドラに注入する。
//!
//! ## モジュール構成
//!
//! - [`app`] - ルーター構築
//! - [`config`] - アプリケーション設定（環境変数からの読み込み）
//! - [`error`] - API エラー定義と HTTP レスポンスへの変換
//! - [`handler`] - HTTP リクエストハンドラ
//! - [`usecase`] - ユースケース層
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use userstore_api::config::AppConfig;
//!
//! let config = AppConfig::from_env()?;
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
