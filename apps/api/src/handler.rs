//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラは入出力の変換のみを行い、処理手順はユースケース層に委譲
//!
//! ```text
//! handler.rs          # 親モジュール（re-export）
//! └── handler/
//!     ├── health.rs   # ヘルスチェック
//!     ├── root.rs     # GET /
//!     └── user.rs     # ユーザー CRUD
//! ```

pub mod health;
pub mod root;
pub mod user;

pub use health::{ReadinessState, health_check, readiness_check};
pub use root::hello_world;
pub use user::{UserState, create_user, delete_user, get_user, list_users, update_user};
