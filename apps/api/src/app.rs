//! # ルーター構築
//!
//! URL パスと HTTP メソッドをハンドラに対応付ける。
//! `main` とテストの両方から同じルーターを組み立てる。

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handler::{
    ReadinessState,
    UserState,
    create_user,
    delete_user,
    get_user,
    health_check,
    hello_world,
    list_users,
    readiness_check,
    update_user,
};

/// アプリケーションのルーターを構築する
pub fn build_router(user_state: Arc<UserState>, readiness_state: Arc<ReadinessState>) -> Router {
    let user_routes = Router::new()
        .route("/users", get(list_users))
        .route("/user", post(create_user))
        .route(
            "/user/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .with_state(user_state);

    let health_routes = Router::new()
        .route("/health", get(health_check))
        .route("/health/ready", get(readiness_check))
        .with_state(readiness_state);

    Router::new()
        .route("/", get(hello_world))
        .merge(user_routes)
        .merge(health_routes)
        .layer(TraceLayer::new_for_http())
}
