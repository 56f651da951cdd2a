//! # MongoDB 接続管理
//!
//! ## 設計方針
//!
//! - **起動時に一度だけ接続**: `mongodb::Client` は内部に接続プールを持つ。
//!   リクエストごとにクライアントを作り直さず、起動時に作成したものを共有する
//! - **ハンドルの共有**: `Client` / `Database` / `Collection` はいずれも
//!   安価にクローンでき、クローン同士で同じ接続プールを使う
//! - **タイムアウト**: ドライバの既定値に従う（readiness チェックのみ独自に制限する）

use async_trait::async_trait;
use mongodb::{Client, Database, bson::doc, options::ClientOptions};

use crate::error::InfraError;

/// MongoDB サーバーのログに表示されるアプリケーション名
pub const APP_NAME: &str = "userstore";

/// MongoDB クライアントを作成する
///
/// URI のパース（SRV レコードの解決を含む）を行い、クライアントを構築する。
/// 実際の TCP 接続はドライバが最初の操作時に確立する。
///
/// # 引数
///
/// * `uri` - 接続 URI（例: `mongodb://localhost:27017`）
pub async fn create_client(uri: &str) -> Result<Client, InfraError> {
    let mut options = ClientOptions::parse(uri).await?;
    options.app_name = Some(APP_NAME.to_string());
    Ok(Client::with_options(options)?)
}

/// 接続して論理データベースのハンドルを返す
///
/// アプリケーション起動時に一度だけ呼び出す。
pub async fn connect(uri: &str, database_name: &str) -> Result<Database, InfraError> {
    let client = create_client(uri).await?;
    Ok(client.database(database_name))
}

/// `ping` コマンドで疎通を確認する
pub async fn ping(database: &Database) -> Result<(), InfraError> {
    database.run_command(doc! { "ping": 1 }).await?;
    Ok(())
}

/// 依存ストアの疎通確認
///
/// readiness エンドポイントから利用する。テストではスタブに差し替える。
#[async_trait]
pub trait HealthChecker: Send + Sync {
    async fn ping(&self) -> Result<(), InfraError>;
}

/// MongoDB 実装の HealthChecker
#[derive(Debug, Clone)]
pub struct MongoHealthChecker {
    database: Database,
}

impl MongoHealthChecker {
    pub fn new(database: &Database) -> Self {
        Self {
            database: database.clone(),
        }
    }
}

#[async_trait]
impl HealthChecker for MongoHealthChecker {
    async fn ping(&self) -> Result<(), InfraError> {
        ping(&self.database).await
    }
}
