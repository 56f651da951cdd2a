//! # ユースケース層
//!
//! ハンドラとリポジトリの間に位置し、リクエスト 1 件分の処理手順を実装する。
//!
//! - **依存性注入**: リポジトリを `Arc<dyn Trait>` で外部から注入
//! - **薄いハンドラ**: ハンドラは入出力の変換のみを行い、手順はユースケースに集約

pub mod user;

pub use user::UserUseCaseImpl;
