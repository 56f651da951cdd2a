//! # ルートハンドラ

use axum::Json;
use userstore_shared::MessageResponse;

/// GET /
pub async fn hello_world() -> Json<MessageResponse> {
    Json(MessageResponse::new("helloworld"))
}
