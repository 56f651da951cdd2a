//! # API レスポンスエンベロープ
//!
//! 公開 API の統一レスポンス形式 `{ "message": "success", "data": T }` を提供する。

use serde::{Deserialize, Serialize};

/// 成功時のメッセージ
pub const SUCCESS_MESSAGE: &str = "success";

/// 公開 API の統一レスポンス型
///
/// ユーザー API のすべての成功レスポンスは `{ "message": "success", "data": T }`
/// 形式で返す。テストではレスポンスボディの Deserialize にも使用する。
///
/// ## 使用例
///
/// ```
/// use userstore_shared::ApiResponse;
///
/// let response = ApiResponse::success("hello");
/// assert_eq!(response.message, "success");
/// assert_eq!(response.data, "hello");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data:    T,
}

impl<T> ApiResponse<T> {
    /// `message: "success"` のレスポンスを作成する
    pub fn success(data: T) -> Self {
        Self {
            message: SUCCESS_MESSAGE.to_string(),
            data,
        }
    }
}

/// `data` を持たないメッセージのみのレスポンス
///
/// ルート (`GET /`) の `{ "message": "helloworld" }` で使用する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_successはmessageとdataを持つjsonになる() {
        let response = ApiResponse::success("hello");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "message": "success", "data": "hello" })
        );
    }

    #[test]
    fn test_vecペイロードをシリアライズする() {
        let response = ApiResponse::success(vec!["a", "b"]);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "message": "success", "data": ["a", "b"] })
        );
    }

    #[test]
    fn test_空のvecは空配列としてシリアライズされる() {
        let response = ApiResponse::success(Vec::<String>::new());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["data"], serde_json::json!([]));
    }

    #[test]
    fn test_deserializeでjsonからオブジェクトに変換する() {
        let json = r#"{"message": "success", "data": 42}"#;
        let response: ApiResponse<i64> = serde_json::from_str(json).unwrap();

        assert_eq!(response, ApiResponse::success(42));
    }

    #[test]
    fn test_message_responseはdataフィールドを持たない() {
        let json = serde_json::to_value(MessageResponse::new("helloworld")).unwrap();

        assert_eq!(json, serde_json::json!({ "message": "helloworld" }));
    }
}
