//! # ユーザーハンドラ
//!
//! ユーザーレコードの CRUD API を提供する。
//!
//! ## エンドポイント
//!
//! - `GET /users` - ユーザー一覧
//! - `GET /user/{id}` - ユーザー取得
//! - `POST /user` - ユーザー作成
//! - `PUT /user/{id}` - ユーザー更新（`name` と `age` を上書き）
//! - `DELETE /user/{id}` - ユーザー削除
//!
//! 成功時はいずれも `200 OK` で `{ "message": "success", "data": ... }` を返す。

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use userstore_domain::user::{User, UserId, UserProfile};
use userstore_shared::ApiResponse;

use crate::{error::ApiError, usecase::UserUseCaseImpl};

/// ユーザー API の共有状態
pub struct UserState {
    pub usecase: UserUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// ユーザー作成・更新リクエスト
///
/// 省略したフィールドはゼロ値（`""` / `0`）になる。
#[derive(Debug, Default, Deserialize)]
pub struct UserRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age:  i64,
}

impl UserRequest {
    /// リクエストボディを JSON としてデコードする
    ///
    /// `Content-Type` ヘッダは見ない。
    fn from_body(body: &Bytes) -> Result<Self, ApiError> {
        Ok(serde_json::from_slice(body)?)
    }
}

impl From<UserRequest> for UserProfile {
    fn from(req: UserRequest) -> Self {
        UserProfile::new(req.name, req.age)
    }
}

/// ユーザー DTO
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserDto {
    #[serde(rename = "_id")]
    pub id:   String,
    pub name: String,
    pub age:  i64,
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            id:   user.id().to_string(),
            name: user.name().to_string(),
            age:  user.age(),
        }
    }
}

/// 削除結果 DTO
///
/// `_id` にはパス上の文字列をそのまま返す。
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeletedDto {
    #[serde(rename = "_id")]
    pub id: String,
}

// --- ハンドラ ---

/// GET /users
///
/// 全ユーザーを取得する。0 件の場合は空配列。
#[tracing::instrument(skip_all)]
pub async fn list_users(
    State(state): State<Arc<UserState>>,
) -> Result<impl IntoResponse, ApiError> {
    let users = state.usecase.list_users().await?;

    let items: Vec<UserDto> = users.iter().map(UserDto::from).collect();

    Ok((StatusCode::OK, Json(ApiResponse::success(items))))
}

/// GET /user/{id}
///
/// ## レスポンス
///
/// - `200 OK`: ユーザー
/// - `400 Bad Request`: ID が 24 桁の 16 進数でない
/// - `404 Not Found`: ユーザーが存在しない
#[tracing::instrument(skip_all, fields(%id))]
pub async fn get_user(
    State(state): State<Arc<UserState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let user_id = UserId::parse(&id)?;

    let user = state.usecase.get_user(&user_id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(UserDto::from(&user)))))
}

/// POST /user
///
/// ユーザーを作成する。作成時も `201` ではなく `200` を返す。
///
/// ## レスポンス
///
/// - `200 OK`: 払い出された `_id` を含むユーザー
/// - `400 Bad Request`: JSON ボディが不正
#[tracing::instrument(skip_all)]
pub async fn create_user(
    State(state): State<Arc<UserState>>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let req = UserRequest::from_body(&body)?;

    let user = state.usecase.create_user(req.into()).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(UserDto::from(&user)))))
}

/// PUT /user/{id}
///
/// `name` と `age` をリクエストの値で上書きする（マージしない）。
///
/// ## レスポンス
///
/// - `200 OK`: 更新後のユーザー。該当ユーザーがなければリクエストの内容
/// - `400 Bad Request`: ID または JSON ボディが不正
#[tracing::instrument(skip_all, fields(%id))]
pub async fn update_user(
    State(state): State<Arc<UserState>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let user_id = UserId::parse(&id)?;
    let req = UserRequest::from_body(&body)?;

    let user = state.usecase.update_user(&user_id, req.into()).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(UserDto::from(&user)))))
}

/// DELETE /user/{id}
///
/// ユーザーを削除する。リクエストボディは読まない。
/// 該当ユーザーが存在しなくても `200 OK` を返す。
#[tracing::instrument(skip_all, fields(%id))]
pub async fn delete_user(
    State(state): State<Arc<UserState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let user_id = UserId::parse(&id)?;

    state.usecase.delete_user(&user_id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(DeletedDto { id }))))
}

#[cfg(test)]
mod tests {
    use axum::{
        Router,
        body::{Body, to_bytes},
        http::{Method, Request},
        routing::{get, post},
    };
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde::de::DeserializeOwned;
    use tower::ServiceExt;
    use userstore_infra::fake::InMemoryUserRepository;
    use userstore_shared::ErrorResponse;

    use super::*;

    fn create_test_app(repository: InMemoryUserRepository) -> Router {
        let state = Arc::new(UserState {
            usecase: UserUseCaseImpl::new(Arc::new(repository)),
        });

        Router::new()
            .route("/users", get(list_users))
            .route("/user", post(create_user))
            .route(
                "/user/{id}",
                get(get_user).put(update_user).delete(delete_user),
            )
            .with_state(state)
    }

    fn json_request(method: Method, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: Method, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn response_body<T: DeserializeOwned>(response: axum::response::Response) -> T {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_get_users_空のコレクションは空配列を返す() {
        let sut = create_test_app(InMemoryUserRepository::new());

        let response = sut
            .oneshot(empty_request(Method::GET, "/users"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: ApiResponse<Vec<UserDto>> = response_body(response).await;
        assert_eq!(body, ApiResponse::success(vec![]));
    }

    #[tokio::test]
    async fn test_get_user_存在するユーザーを返す() {
        let user = User::new(UserId::new(), UserProfile::new("Alice", 30));
        let sut = create_test_app(InMemoryUserRepository::with_users(vec![user.clone()]));

        let response = sut
            .oneshot(empty_request(Method::GET, &format!("/user/{}", user.id())))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: ApiResponse<UserDto> = response_body(response).await;
        assert_eq!(
            body.data,
            UserDto {
                id:   user.id().to_string(),
                name: "Alice".to_string(),
                age:  30,
            }
        );
    }

    #[tokio::test]
    async fn test_get_user_存在しないユーザーは404() {
        let sut = create_test_app(InMemoryUserRepository::new());

        let response = sut
            .oneshot(empty_request(
                Method::GET,
                &format!("/user/{}", UserId::new()),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: ErrorResponse = response_body(response).await;
        assert_eq!(body.data, "");
    }

    #[rstest]
    #[case(Method::GET)]
    #[case(Method::PUT)]
    #[case(Method::DELETE)]
    #[tokio::test]
    async fn test_不正なidは400でストアに問い合わせない(#[case] method: Method) {
        // 失敗するリポジトリでも 400 になればストアに到達していない
        let sut = create_test_app(InMemoryUserRepository::failing());

        let response = sut
            .oneshot(json_request(method, "/user/not-an-id", r#"{"name":"x","age":1}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = response_body(response).await;
        assert!(body.message.contains("not-an-id"));
        assert_eq!(body.data, "");
    }

    #[tokio::test]
    async fn test_post_user_200で払い出されたidを含むユーザーを返す() {
        let repository = InMemoryUserRepository::new();
        let sut = create_test_app(repository.clone());

        let response = sut
            .oneshot(json_request(
                Method::POST,
                "/user",
                r#"{"name":"Alice","age":30}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: ApiResponse<UserDto> = response_body(response).await;
        assert_eq!(body.message, "success");
        assert_eq!(body.data.name, "Alice");
        assert_eq!(body.data.age, 30);
        assert_eq!(body.data.id, repository.snapshot()[0].id().to_string());
    }

    #[tokio::test]
    async fn test_post_user_省略したフィールドはゼロ値になる() {
        let sut = create_test_app(InMemoryUserRepository::new());

        let response = sut
            .oneshot(json_request(Method::POST, "/user", "{}"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: ApiResponse<UserDto> = response_body(response).await;
        assert_eq!(body.data.name, "");
        assert_eq!(body.data.age, 0);
    }

    #[rstest]
    #[case::壊れたjson(r#"{"name":"#)]
    #[case::型が合わない(r#"{"name":"Alice","age":"thirty"}"#)]
    #[case::空のボディ("")]
    #[tokio::test]
    async fn test_post_user_不正なボディは400(#[case] body: &str) {
        let repository = InMemoryUserRepository::new();
        let sut = create_test_app(repository.clone());

        let response = sut
            .oneshot(json_request(Method::POST, "/user", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(repository.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_put_user_ageのみのボディはnameを空文字で上書きする() {
        let user = User::new(UserId::new(), UserProfile::new("Alice", 30));
        let sut = create_test_app(InMemoryUserRepository::with_users(vec![user.clone()]));

        let response = sut
            .oneshot(json_request(
                Method::PUT,
                &format!("/user/{}", user.id()),
                r#"{"age":31}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: ApiResponse<UserDto> = response_body(response).await;
        assert_eq!(body.data.name, "");
        assert_eq!(body.data.age, 31);
    }

    #[tokio::test]
    async fn test_put_user_存在しないユーザーは200でドキュメントを作らない() {
        let repository = InMemoryUserRepository::new();
        let sut = create_test_app(repository.clone());
        let id = UserId::new();

        let response = sut
            .oneshot(json_request(
                Method::PUT,
                &format!("/user/{id}"),
                r#"{"name":"Ghost","age":1}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: ApiResponse<UserDto> = response_body(response).await;
        assert_eq!(
            body.data,
            UserDto {
                id:   id.to_string(),
                name: "Ghost".to_string(),
                age:  1,
            }
        );
        assert!(repository.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_content_typeがなくてもボディをjsonとして読む() {
        let repository = InMemoryUserRepository::new();
        let sut = create_test_app(repository.clone());

        let response = sut
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/user")
                    .body(Body::from(r#"{"name":"Alice","age":30}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let created: ApiResponse<UserDto> = response_body(response).await;
        assert_eq!(created.data.name, "Alice");

        let response = sut
            .oneshot(
                Request::builder()
                    .method(Method::PUT)
                    .uri(format!("/user/{}", created.data.id))
                    .header("content-type", "text/plain")
                    .body(Body::from(r#"{"name":"Alice","age":31}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let updated: ApiResponse<UserDto> = response_body(response).await;
        assert_eq!(updated.data.age, 31);
        assert_eq!(repository.snapshot()[0].age(), 31);
    }

    #[tokio::test]
    async fn test_delete_user_パスのidをそのまま返す() {
        let user = User::new(UserId::new(), UserProfile::new("Alice", 30));
        let repository = InMemoryUserRepository::with_users(vec![user.clone()]);
        let sut = create_test_app(repository.clone());

        let response = sut
            .oneshot(empty_request(
                Method::DELETE,
                &format!("/user/{}", user.id()),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: ApiResponse<DeletedDto> = response_body(response).await;
        assert_eq!(
            body,
            ApiResponse::success(DeletedDto {
                id: user.id().to_string(),
            })
        );
        assert!(repository.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_ストア障害は500() {
        let sut = create_test_app(InMemoryUserRepository::failing());

        let response = sut
            .oneshot(empty_request(Method::GET, "/users"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorResponse = response_body(response).await;
        assert!(!body.message.is_empty());
        assert_eq!(body.data, "");
    }
}
