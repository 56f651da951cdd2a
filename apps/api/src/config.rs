//! # アプリケーション設定
//!
//! 環境変数からアプリケーション設定を読み込む。
//! すべての項目にデフォルト値があり、未設定でもローカルの MongoDB に接続して起動できる。
//!
//! ## 環境変数一覧
//!
//! | 変数名 | 必須 | デフォルト | 説明 |
//! |--------|------|------------|------|
//! | `API_HOST` | No | `0.0.0.0` | バインドアドレス |
//! | `API_PORT` | No | `8080` | ポート番号 |
//! | `MONGODB_URI` | No | `mongodb://localhost:27017` | MongoDB 接続 URI |
//! | `MONGODB_DATABASE` | No | `userstore` | 論理データベース名 |

use std::env;

use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017";
pub const DEFAULT_DATABASE_NAME: &str = "userstore";

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// 値が不正
    #[error("環境変数 {key} の値が不正です: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// HTTP サーバー設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// バインドアドレス（例: `0.0.0.0`, `127.0.0.1`）
    pub host: String,
    /// ポート番号
    pub port: u16,
}

impl ServerConfig {
    /// `host:port` 形式のアドレス
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// MongoDB 接続設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// 接続 URI（例: `mongodb://localhost:27017`）
    pub uri:  String,
    /// 論理データベース名
    pub name: String,
}

/// アプリケーション全体の設定
///
/// 起動時に一度だけ構築し、各コンポーネントに渡す。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub server:   ServerConfig,
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意のキー参照関数から設定を読み込む
    ///
    /// テストでプロセスの環境変数を書き換えずに済むよう分離している。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("API_PORT") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    key: "API_PORT",
                    value,
                })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            server:   ServerConfig {
                host: lookup("API_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
                port,
            },
            database: DatabaseConfig {
                uri:  lookup("MONGODB_URI").unwrap_or_else(|| DEFAULT_MONGODB_URI.to_string()),
                name: lookup("MONGODB_DATABASE")
                    .unwrap_or_else(|| DEFAULT_DATABASE_NAME.to_string()),
            },
        })
    }
}
