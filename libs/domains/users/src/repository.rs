use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult, messages};
use crate::models::{RemoveResult, User};

/// Repository trait for User persistence
///
/// The users service is the only caller; nothing else writes users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Get a user by `_id`
    async fn find_by_id(&self, id: &str) -> UserResult<Option<User>>;

    /// Store a new user
    async fn insert(&self, user: User) -> UserResult<User>;

    /// Replace an existing user, matched by `_id`
    async fn save(&self, user: User) -> UserResult<User>;

    /// Remove the user whose `_id` equals `id`
    async fn remove_by_id(&self, id: &str) -> UserResult<RemoveResult>;
}

/// In-memory implementation of UserRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &str) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(id).cloned())
    }

    async fn insert(&self, user: User) -> UserResult<User> {
        let mut users = self.users.write().await;

        if users.contains_key(&user.id) {
            return Err(UserError::Database(format!(
                "duplicate key error: _id {}",
                user.id
            )));
        }

        users.insert(user.id.clone(), user.clone());
        tracing::info!(user_id = %user.id, "Created user");
        Ok(user)
    }

    async fn save(&self, user: User) -> UserResult<User> {
        let mut users = self.users.write().await;

        if !users.contains_key(&user.id) {
            return Err(UserError::NotFound(messages::USER_NOT_FOUND.to_string()));
        }

        users.insert(user.id.clone(), user.clone());
        tracing::info!(user_id = %user.id, "Updated user");
        Ok(user)
    }

    async fn remove_by_id(&self, id: &str) -> UserResult<RemoveResult> {
        let mut users = self.users.write().await;
        let deleted_count = u64::from(users.remove(id).is_some());
        tracing::info!(user_id = %id, deleted_count, "Removed user");
        Ok(RemoveResult { deleted_count })
    }
}
