//! # API エラー定義
//!
//! ハンドラで発生するエラーと、HTTP レスポンスへの変換を定義する。
//!
//! すべての種別で同じボディ形状 `{ "message": <text>, "data": "" }` を返し、
//! ステータスコードだけで種別を区別する。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use userstore_domain::DomainError;
use userstore_infra::InfraError;
use userstore_shared::ErrorResponse;

/// API で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
    /// 不正なリクエスト（ID のパース失敗、JSON ボディの不備）
    #[error("不正なリクエスト: {0}")]
    BadRequest(String),

    /// リソースが見つからない
    #[error("{0}")]
    NotFound(String),

    /// データベースエラー
    #[error("{0}")]
    Database(#[from] InfraError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => ApiError::BadRequest(msg),
            not_found @ DomainError::NotFound { .. } => ApiError::NotFound(not_found.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(format!("リクエストボディを JSON として読めません: {err}"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            ApiError::Database(e) => {
                tracing::error!(
                    error.kind = ?e.kind(),
                    span_trace = %e.span_trace(),
                    "データベースエラー: {}",
                    e
                );
            }
            ApiError::BadRequest(msg) | ApiError::NotFound(msg) => {
                tracing::debug!(status = status.as_u16(), "{}", msg);
            }
        }

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
