//! # テスト用フェイク実装
//!
//! ハンドラ・ユースケーステストで使用するインメモリ実装。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! userstore-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use userstore_domain::user::{User, UserId, UserProfile};

use crate::{db::HealthChecker, error::InfraError, repository::UserRepository};

// ===== InMemoryUserRepository =====

/// インメモリの UserRepository
///
/// 挿入順を保持する。`failing()` で作成すると全操作がエラーを返す。
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users:   Arc<Mutex<Vec<User>>>,
    failing: bool,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 既存ユーザーを持つリポジトリを作成する
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users:   Arc::new(Mutex::new(users)),
            failing: false,
        }
    }

    /// 全操作がデータベースエラー相当を返すリポジトリを作成する
    pub fn failing() -> Self {
        Self {
            users:   Arc::default(),
            failing: true,
        }
    }

    /// 保持しているユーザーのスナップショット
    pub fn snapshot(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }

    fn check_available(&self) -> Result<(), InfraError> {
        if self.failing {
            return Err(InfraError::unexpected("ストアに接続できません"));
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, InfraError> {
        self.check_available()?;
        Ok(self.snapshot())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, InfraError> {
        self.check_available()?;
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id() == id)
            .cloned())
    }

    async fn insert(&self, profile: &UserProfile) -> Result<UserId, InfraError> {
        self.check_available()?;
        let id = UserId::new();
        self.users
            .lock()
            .unwrap()
            .push(User::new(id, profile.clone()));
        Ok(id)
    }

    async fn update(&self, id: &UserId, profile: &UserProfile) -> Result<bool, InfraError> {
        self.check_available()?;
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|u| u.id() == id) {
            Some(user) => {
                *user = User::new(*id, profile.clone());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &UserId) -> Result<u64, InfraError> {
        self.check_available()?;
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id() != id);
        Ok((before - users.len()) as u64)
    }
}

// ===== FakeHealthChecker =====

/// 固定結果を返す HealthChecker
#[derive(Debug, Clone, Copy)]
pub struct FakeHealthChecker {
    healthy: bool,
}

impl FakeHealthChecker {
    pub fn healthy() -> Self {
        Self { healthy: true }
    }

    pub fn unhealthy() -> Self {
        Self { healthy: false }
    }
}

#[async_trait]
impl HealthChecker for FakeHealthChecker {
    async fn ping(&self) -> Result<(), InfraError> {
        if self.healthy {
            Ok(())
        } else {
            Err(InfraError::unexpected("ping に失敗しました"))
        }
    }
}
