use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::Mutex;

use super::UserStore;
use crate::models::User;
use crate::utils::AppError;

/// In-process store used by unit tests.
#[derive(Default)]
pub struct MemoryUserStore {
    users: Mutex<Vec<User>>,
}

impl MemoryUserStore {
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
        }
    }

    pub async fn count(&self) -> usize {
        self.users.lock().await.len()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn ensure_email_index(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn insert_if_absent(&self, user: &User) -> Result<bool, AppError> {
        let mut users = self.users.lock().await;
        if users.iter().any(|u| u.email == user.email) {
            return Ok(false);
        }

        let mut stored = user.clone();
        stored.id = Some(ObjectId::new());
        users.push(stored);
        Ok(true)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let users = self.users.lock().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        Ok(self.users.lock().await.clone())
    }
}
