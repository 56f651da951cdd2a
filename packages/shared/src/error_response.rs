//! # エラーレスポンス
//!
//! 全エンドポイントで共通のエラーレスポンス構造体 `{ "message": <text>, "data": "" }` を提供する。
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - HTTP ステータスはボディに含めない（ステータスラインで表現する）
//! - `data` は常に空文字列。成功レスポンスとキー構成を揃えるために存在する

use serde::{Deserialize, Serialize};

/// エラーレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    pub data:    String,
}

impl ErrorResponse {
    /// エラーメッセージからレスポンスを作成する
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data:    String::new(),
        }
    }
}
