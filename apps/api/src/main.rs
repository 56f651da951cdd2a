//! # Userstore API サーバー
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `API_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `API_PORT` | No | ポート番号（デフォルト: `8080`） |
//! | `MONGODB_URI` | No | MongoDB 接続 URI（デフォルト: `mongodb://localhost:27017`） |
//! | `MONGODB_DATABASE` | No | 論理データベース名（デフォルト: `userstore`） |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境
//! cargo run -p userstore-api
//!
//! # 本番環境
//! LOG_FORMAT=json MONGODB_URI=mongodb://db:27017 cargo run -p userstore-api --release
//! ```

use std::sync::Arc;

use anyhow::Context as _;
use tokio::net::TcpListener;
use userstore_api::{
    app::build_router,
    config::AppConfig,
    handler::{ReadinessState, UserState},
    usecase::UserUseCaseImpl,
};
use userstore_infra::{MongoHealthChecker, db, repository::MongoUserRepository};
use userstore_shared::observability::{TracingConfig, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    init_tracing(&TracingConfig::from_env("userstore-api"));

    let config = AppConfig::from_env().context("設定の読み込みに失敗しました")?;

    tracing::info!("API サーバーを起動します: {}", config.server.addr());

    // 接続プールは起動時に一度だけ作成し、全リクエストで共有する
    let database = db::connect(&config.database.uri, &config.database.name)
        .await
        .context("MongoDB クライアントの作成に失敗しました")?;

    match db::ping(&database).await {
        Ok(()) => tracing::info!(database = %config.database.name, "MongoDB に接続しました"),
        // ドライバは接続を再試行するため起動は続行し、readiness で検知する
        Err(e) => tracing::error!(error = %e, "MongoDB への ping に失敗しました"),
    }

    let user_repository = MongoUserRepository::new(&database);
    let user_state = Arc::new(UserState {
        usecase: UserUseCaseImpl::new(Arc::new(user_repository)),
    });
    let readiness_state = Arc::new(ReadinessState {
        checker: Arc::new(MongoHealthChecker::new(&database)),
    });

    let app = build_router(user_state, readiness_state);

    let listener = TcpListener::bind(config.server.addr())
        .await
        .with_context(|| format!("{} にバインドできません", config.server.addr()))?;
    tracing::info!("リクエストを待ち受けています: {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
