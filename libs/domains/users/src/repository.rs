use async_trait::async_trait;
use idgen::IdGenerator;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::User;

/// Repository trait for User persistence
///
/// All operations are safe for concurrent use from multiple tasks.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a user under a freshly assigned identifier and return it
    async fn add_user(&self, user: User) -> UserResult<i64>;

    /// Point lookup by identifier
    async fn get_user_by_id(&self, id: i64) -> UserResult<User>;

    /// Overwrite the full record; the target identifier must already exist
    async fn edit_user(&self, user: User) -> UserResult<User>;

    /// Remove a user; deleting an absent identifier is an error
    async fn delete_user(&self, id: i64) -> UserResult<()>;
}

/// In-memory implementation of UserRepository
///
/// One readers-writer lock guards the whole map, so readers never observe a
/// partially applied update. The identifier sequence is owned per instance.
#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<i64, User>>>,
    ids: Arc<IdGenerator>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            ids: Arc::new(IdGenerator::new()),
        }
    }

    /// Repository whose identifier sequence starts at `seed + 1`.
    pub fn with_id_seed(seed: i64) -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            ids: Arc::new(IdGenerator::with_seed(seed)),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn add_user(&self, mut user: User) -> UserResult<i64> {
        let mut users = self.users.write().await;

        let id = self.ids.generate()?;
        user.id = id;
        users.insert(id, user);

        tracing::info!(user_id = id, "Created user");
        Ok(id)
    }

    async fn get_user_by_id(&self, id: i64) -> UserResult<User> {
        let users = self.users.read().await;
        users.get(&id).cloned().ok_or(UserError::NotFound(id))
    }

    async fn edit_user(&self, user: User) -> UserResult<User> {
        let mut users = self.users.write().await;

        if !users.contains_key(&user.id) {
            return Err(UserError::NotFound(user.id));
        }
        users.insert(user.id, user.clone());

        tracing::info!(user_id = user.id, "Updated user");
        Ok(user)
    }

    async fn delete_user(&self, id: i64) -> UserResult<()> {
        let mut users = self.users.write().await;

        if users.remove(&id).is_none() {
            return Err(UserError::NotFound(id));
        }

        tracing::info!(user_id = id, "Deleted user");
        Ok(())
    }
}
